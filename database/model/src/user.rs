//! Portal accounts. Notifications are addressed to these.
use sea_orm::{entity::prelude::*, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    pub full_name: String,
    /// admin, technician, business partner, customer
    pub role: i32,
    /// Set when the account belongs to a technician.
    pub technician_id: Option<Uuid>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company_name: Option<String>,
    pub is_verified: bool,
    pub registered_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_set(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            username: Set(self.username),
            full_name: Set(self.full_name),
            role: Set(self.role),
            technician_id: Set(self.technician_id),
            email: Set(self.email),
            phone: Set(self.phone),
            company_name: Set(self.company_name),
            is_verified: Set(self.is_verified),
            registered_at: Set(self.registered_at),
        }
    }
}
