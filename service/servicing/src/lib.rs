mod jobs;
mod lifecycle;
mod maintenance;
mod notification;
mod partner_message;
mod registry;
mod removed_part;

#[rustfmt::skip]
pub use {
    jobs::{
        BillingEntry, BillingJobConfig, BillingReport, BillingReportJob, MaintenanceJobConfig,
        MaintenanceReminderJob,
    },
    lifecycle::ServiceLifecycleServiceImpl,
    maintenance::MaintenanceServiceImpl,
    notification::NotificationServiceImpl,
    partner_message::PartnerMessageServiceImpl,
    registry::{ApplianceServiceImpl, ClientServiceImpl, TechnicianServiceImpl, UserServiceImpl},
    removed_part::RemovedPartServiceImpl,
};
