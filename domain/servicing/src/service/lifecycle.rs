use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    exception::ServicingResult,
    model::{
        entity::{
            CompletedService, ServiceCompletionReport, ServiceCompletionReportInput, ServiceTicket,
            ServiceTicketInput,
        },
        vo::{ServiceStatus, StatusChangeInput},
    },
};

/// Opens repair tickets and moves them through their statuses.
#[async_trait]
pub trait ServiceLifecycleService: Send + Sync {
    async fn create_service(&self, input: ServiceTicketInput) -> ServicingResult<ServiceTicket>;

    async fn change_status(
        &self,
        service_id: Uuid,
        input: StatusChangeInput,
    ) -> ServicingResult<ServiceTicket>;

    async fn assign_technician(
        &self,
        service_id: Uuid,
        technician_id: Uuid,
    ) -> ServicingResult<ServiceTicket>;

    /// Closes an in-progress ticket with the assigned technician's report.
    /// The report and the ticket are committed together.
    async fn complete_with_report(
        &self,
        service_id: Uuid,
        input: ServiceCompletionReportInput,
    ) -> ServicingResult<CompletedService>;

    async fn completion_report(&self, service_id: Uuid) -> ServicingResult<ServiceCompletionReport>;

    /// Puts a closed ticket back to work.
    async fn reopen(&self, service_id: Uuid, reason: String) -> ServicingResult<ServiceTicket>;

    async fn get_service(&self, service_id: Uuid) -> ServicingResult<ServiceTicket>;

    async fn list_services_by_status(
        &self,
        status: ServiceStatus,
    ) -> ServicingResult<Vec<ServiceTicket>>;
}
