use num_derive::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(
    FromPrimitive, ToPrimitive, Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    /// A technician got a ticket.
    #[default]
    ServiceAssigned,
    /// A business partner opened a ticket.
    ServiceCreated,
    ServiceStatusChanged,
    /// A technician asked for a spare part.
    SparePartOrdered,
    /// An admin ordered a spare part directly.
    AdminSparePartOrdered,
    SparePartStatusChanged,
    PartsAllocated,
    RepairFailed,
    CustomerRefusedRepair,
    MaintenanceDue,
    BillingReport,
    /// A business partner wrote to the office.
    PartnerMessage,
    PartnerMessageReplied,
}

#[derive(
    FromPrimitive, ToPrimitive, Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum NotificationPriority {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

/// A notification before it is addressed to a user.
#[derive(TypedBuilder, Clone, Debug, PartialEq)]
pub struct NotificationDraft {
    pub kind: NotificationType,
    #[builder(setter(into))]
    pub title: String,
    #[builder(setter(into))]
    pub message: String,
    #[builder(default, setter(strip_option))]
    pub related_service_id: Option<Uuid>,
    #[builder(default, setter(strip_option))]
    pub related_spare_part_id: Option<Uuid>,
    #[builder(default, setter(strip_option))]
    pub related_user_id: Option<Uuid>,
    #[builder(default)]
    pub priority: NotificationPriority,
}
