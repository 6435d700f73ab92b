mod completion_report;
mod maintenance;
mod notification;
mod partner_message;
mod registry;
mod removed_part;
mod service_ticket;
mod user;
