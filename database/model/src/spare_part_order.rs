//! Spare part requests, from the technician's ask to delivery.
use sea_orm::{entity::prelude::*, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "spare_part_order")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub part_name: String,
    pub part_number: Option<String>,
    pub quantity: i32,
    pub description: Option<String>,
    pub urgency: i32,
    pub status: i32,
    pub warranty_status: i32,
    pub service_id: Option<Uuid>,
    pub technician_id: Option<Uuid>,
    pub appliance_id: Option<Uuid>,
    pub estimated_cost: Option<String>,
    pub actual_cost: Option<String>,
    pub supplier_name: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub admin_notes: Option<String>,
    pub order_date: Option<Date>,
    pub expected_delivery: Option<Date>,
    pub received_date: Option<Date>,
    pub is_delivered: bool,
    pub delivery_confirmed_at: Option<DateTimeUtc>,
    pub delivery_confirmed_by: Option<Uuid>,
    pub auto_remove_after_delivery: bool,
    /// Set once the order leaves the active ordering queue.
    pub removed_from_ordering_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
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
            urgency: Set(self.urgency),
            status: Set(self.status),
            warranty_status: Set(self.warranty_status),
            service_id: Set(self.service_id),
            technician_id: Set(self.technician_id),
            appliance_id: Set(self.appliance_id),
            estimated_cost: Set(self.estimated_cost),
            actual_cost: Set(self.actual_cost),
            supplier_name: Set(self.supplier_name),
            admin_notes: Set(self.admin_notes),
            order_date: Set(self.order_date),
            expected_delivery: Set(self.expected_delivery),
            received_date: Set(self.received_date),
            is_delivered: Set(self.is_delivered),
            delivery_confirmed_at: Set(self.delivery_confirmed_at),
            delivery_confirmed_by: Set(self.delivery_confirmed_by),
            auto_remove_after_delivery: Set(self.auto_remove_after_delivery),
            removed_from_ordering_at: Set(self.removed_from_ordering_at),
            created_at: Set(self.created_at),
            updated_at: Set(self.updated_at),
            version: Set(self.version),
        }
    }
}
