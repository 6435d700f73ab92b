use sea_orm::{entity::prelude::*, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "appliance")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub client_id: Uuid,
    pub category_id: Uuid,
    pub manufacturer_id: Uuid,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub purchase_date: Option<Date>,
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_set(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            client_id: Set(self.client_id),
            category_id: Set(self.category_id),
            manufacturer_id: Set(self.manufacturer_id),
            model: Set(self.model),
            serial_number: Set(self.serial_number),
            purchase_date: Set(self.purchase_date),
            notes: Set(self.notes),
        }
    }
}
