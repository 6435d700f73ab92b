mod billing_report;
mod maintenance_reminder;

#[rustfmt::skip]
pub use {
    billing_report::{BillingEntry, BillingJobConfig, BillingReport, BillingReportJob},
    maintenance_reminder::{MaintenanceJobConfig, MaintenanceReminderJob},
};
