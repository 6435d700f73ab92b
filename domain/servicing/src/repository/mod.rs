mod completion_report;
mod maintenance;
mod manufacturer;
mod notification;
mod partner_message;
mod removed_part;
mod service_ticket;
mod user;

#[rustfmt::skip]
pub use {
    completion_report::ServiceCompletionReportRepo,
    maintenance::{MaintenanceAlertRepo, MaintenanceScheduleRepo},
    manufacturer::ManufacturerRepo,
    notification::NotificationRepo,
    partner_message::PartnerMessageRepo,
    removed_part::RemovedPartRepo,
    service_ticket::ServiceTicketRepo,
    user::UserRepo,
};
