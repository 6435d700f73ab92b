//! Parts taken off an appliance during a service.
use sea_orm::{entity::prelude::*, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "removed_part")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub service_id: Uuid,
    pub part_name: String,
    pub part_description: Option<String>,
    pub removal_date: Date,
    pub removal_reason: String,
    pub current_location: i32,
    pub expected_return_date: Option<Date>,
    pub actual_return_date: Option<Date>,
    pub part_status: i32,
    pub technician_notes: Option<String>,
    pub repair_cost: Option<String>,
    pub is_reinstalled: bool,
    pub created_by: Uuid,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_set(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            service_id: Set(self.service_id),
            part_name: Set(self.part_name),
            part_description: Set(self.part_description),
            removal_date: Set(self.removal_date),
            removal_reason: Set(self.removal_reason),
            current_location: Set(self.current_location),
            expected_return_date: Set(self.expected_return_date),
            actual_return_date: Set(self.actual_return_date),
            part_status: Set(self.part_status),
            technician_notes: Set(self.technician_notes),
            repair_cost: Set(self.repair_cost),
            is_reinstalled: Set(self.is_reinstalled),
            created_by: Set(self.created_by),
            created_at: Set(self.created_at),
            updated_at: Set(self.updated_at),
        }
    }
}
