use sea_orm::{entity::prelude::*, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "parts_allocation")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub available_part_id: Uuid,
    pub service_id: Uuid,
    pub technician_id: Uuid,
    pub allocated_quantity: i32,
    pub allocated_by: Uuid,
    pub allocation_notes: Option<String>,
    pub status: i32,
    pub allocated_date: DateTimeUtc,
    pub used_date: Option<DateTimeUtc>,
    pub returned_date: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_set(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            available_part_id: Set(self.available_part_id),
            service_id: Set(self.service_id),
            technician_id: Set(self.technician_id),
            allocated_quantity: Set(self.allocated_quantity),
            allocated_by: Set(self.allocated_by),
            allocation_notes: Set(self.allocation_notes),
            status: Set(self.status),
            allocated_date: Set(self.allocated_date),
            used_date: Set(self.used_date),
            returned_date: Set(self.returned_date),
        }
    }
}
