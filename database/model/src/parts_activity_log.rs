use sea_orm::{entity::prelude::*, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "parts_activity_log")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub part_id: Uuid,
    pub action: i32,
    pub previous_quantity: Option<i32>,
    pub new_quantity: Option<i32>,
    pub technician_id: Option<Uuid>,
    pub service_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub description: Option<String>,
    pub timestamp: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_set(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            part_id: Set(self.part_id),
            action: Set(self.action),
            previous_quantity: Set(self.previous_quantity),
            new_quantity: Set(self.new_quantity),
            technician_id: Set(self.technician_id),
            service_id: Set(self.service_id),
            user_id: Set(self.user_id),
            description: Set(self.description),
            timestamp: Set(self.timestamp),
        }
    }
}
