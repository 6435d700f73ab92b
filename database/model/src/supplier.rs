use sea_orm::{entity::prelude::*, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "supplier")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub company_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub integration_method: i32,
    pub priority: i32,
    pub average_delivery_days: i32,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_set(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            name: Set(self.name),
            company_name: Set(self.company_name),
            email: Set(self.email),
            phone: Set(self.phone),
            website: Set(self.website),
            integration_method: Set(self.integration_method),
            priority: Set(self.priority),
            average_delivery_days: Set(self.average_delivery_days),
            is_active: Set(self.is_active),
            created_at: Set(self.created_at),
        }
    }
}
