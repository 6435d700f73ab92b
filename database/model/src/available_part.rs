//! Warehouse stock.
use sea_orm::{entity::prelude::*, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "available_part")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub part_name: String,
    pub part_number: Option<String>,
    /// Total quantity ever added, allocations are subtracted on read.
    pub quantity: i32,
    pub description: Option<String>,
    pub supplier_name: Option<String>,
    pub unit_cost: Option<String>,
    pub location: Option<String>,
    pub warranty_status: i32,
    pub category_id: Option<Uuid>,
    pub manufacturer_id: Option<Uuid>,
    pub original_order_id: Option<Uuid>,
    pub added_by: Uuid,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub service_id: Option<Uuid>,
    pub is_active: bool,
    pub added_date: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_set(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            part_name: Set(self.part_name),
            part_number: Set(self.part_number),
            quantity: Set(self.quantity),
            description: Set(self.description),
            supplier_name: Set(self.supplier_name),
            unit_cost: Set(self.unit_cost),
            location: Set(self.location),
            warranty_status: Set(self.warranty_status),
            category_id: Set(self.category_id),
            manufacturer_id: Set(self.manufacturer_id),
            original_order_id: Set(self.original_order_id),
            added_by: Set(self.added_by),
            notes: Set(self.notes),
            service_id: Set(self.service_id),
            is_active: Set(self.is_active),
            added_date: Set(self.added_date),
            updated_at: Set(self.updated_at),
            version: Set(self.version),
        }
    }
}
