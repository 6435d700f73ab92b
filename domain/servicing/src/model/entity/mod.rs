pub mod appliance;
pub mod appliance_category;
pub mod client;
pub mod completion_report;
pub mod maintenance;
pub mod manufacturer;
pub mod notification;
pub mod partner_message;
pub mod removed_part;
pub mod service_ticket;
pub mod technician;
pub mod user;

#[rustfmt::skip]
pub use {
    appliance::{Appliance, ApplianceInput},
    appliance_category::{ApplianceCategory, ApplianceCategoryInput},
    client::{Client, ClientInput},
    completion_report::{CompletedService, ServiceCompletionReport, ServiceCompletionReportInput},
    maintenance::{
        AlertStatus, MaintenanceAlert, MaintenanceFrequency, MaintenanceSchedule,
        MaintenanceScheduleInput,
    },
    manufacturer::{Manufacturer, ManufacturerInput},
    notification::Notification,
    partner_message::{
        PartnerMessage, PartnerMessageInput, PartnerMessageReply, PartnerMessageReplyInput,
    },
    removed_part::{RemovedPart, RemovedPartInput, RemovedPartStatusChange, RemovedPartStatusChangeInput},
    service_ticket::{ServiceTicket, ServiceTicketInput},
    technician::{Technician, TechnicianInput},
    user::{User, UserInput},
};
