use sea_orm::{entity::prelude::*, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "maintenance_schedule")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub appliance_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub frequency: i32,
    pub last_maintenance_date: Option<Date>,
    pub next_maintenance_date: Date,
    pub custom_interval_days: Option<i32>,
    pub is_active: bool,
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
            appliance_id: Set(self.appliance_id),
            name: Set(self.name),
            description: Set(self.description),
            frequency: Set(self.frequency),
            last_maintenance_date: Set(self.last_maintenance_date),
            next_maintenance_date: Set(self.next_maintenance_date),
            custom_interval_days: Set(self.custom_interval_days),
            is_active: Set(self.is_active),
            created_at: Set(self.created_at),
            updated_at: Set(self.updated_at),
        }
    }
}
