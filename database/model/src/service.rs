//! Repair tickets.
use sea_orm::{entity::prelude::*, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "service")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub client_id: Uuid,
    pub appliance_id: Uuid,
    pub technician_id: Option<Uuid>,
    /// User id of the business partner that opened the ticket.
    pub business_partner_id: Option<Uuid>,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub status: i32,
    pub warranty_status: i32,
    pub created_at: Date,
    pub scheduled_date: Option<Date>,
    pub completed_date: Option<Date>,
    #[sea_orm(column_type = "Text", nullable)]
    pub technician_notes: Option<String>,
    pub cost: Option<String>,
    /// Json list of used parts.
    #[sea_orm(column_type = "Text", nullable)]
    pub used_parts: Option<String>,
    pub machine_notes: Option<String>,
    pub is_completely_fixed: Option<bool>,
    pub partner_company_name: Option<String>,
    pub client_unavailable_reason: Option<String>,
    pub needs_rescheduling: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub rescheduling_notes: Option<String>,
    pub device_picked_up: bool,
    pub pickup_date: Option<Date>,
    #[sea_orm(column_type = "Text", nullable)]
    pub pickup_notes: Option<String>,
    pub customer_refuses_repair: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub customer_refusal_reason: Option<String>,
    pub repair_failed: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub repair_failure_reason: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub replaced_parts_before_failure: Option<String>,
    pub repair_failure_date: Option<Date>,
    pub version: i32,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_set(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            client_id: Set(self.client_id),
            appliance_id: Set(self.appliance_id),
            technician_id: Set(self.technician_id),
            business_partner_id: Set(self.business_partner_id),
            description: Set(self.description),
            status: Set(self.status),
            warranty_status: Set(self.warranty_status),
            created_at: Set(self.created_at),
            scheduled_date: Set(self.scheduled_date),
            completed_date: Set(self.completed_date),
            technician_notes: Set(self.technician_notes),
            cost: Set(self.cost),
            used_parts: Set(self.used_parts),
            machine_notes: Set(self.machine_notes),
            is_completely_fixed: Set(self.is_completely_fixed),
            partner_company_name: Set(self.partner_company_name),
            client_unavailable_reason: Set(self.client_unavailable_reason),
            needs_rescheduling: Set(self.needs_rescheduling),
            rescheduling_notes: Set(self.rescheduling_notes),
            device_picked_up: Set(self.device_picked_up),
            pickup_date: Set(self.pickup_date),
            pickup_notes: Set(self.pickup_notes),
            customer_refuses_repair: Set(self.customer_refuses_repair),
            customer_refusal_reason: Set(self.customer_refusal_reason),
            repair_failed: Set(self.repair_failed),
            repair_failure_reason: Set(self.repair_failure_reason),
            replaced_parts_before_failure: Set(self.replaced_parts_before_failure),
            repair_failure_date: Set(self.repair_failure_date),
            version: Set(self.version),
            updated_at: Set(self.updated_at),
        }
    }
}
