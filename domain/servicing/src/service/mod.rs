mod lifecycle;
mod maintenance;
mod notification;
mod partner_message;
mod registry;
mod removed_part;

#[rustfmt::skip]
pub use {
    lifecycle::ServiceLifecycleService,
    maintenance::MaintenanceService,
    notification::NotificationService,
    partner_message::PartnerMessageService,
    registry::{ApplianceService, ClientService, TechnicianService, UserService},
    removed_part::RemovedPartService,
};
