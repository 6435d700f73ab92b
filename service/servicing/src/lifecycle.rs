use std::sync::Arc;

use async_trait::async_trait;
use domain_servicing::{
    exception::{ServicingException, ServicingResult},
    model::{
        entity::{
            Appliance, Client, CompletedService, ServiceCompletionReport,
            ServiceCompletionReportInput, ServiceTicket, ServiceTicketInput, Technician, User,
        },
        vo::{
            Clock, NotificationDraft, NotificationPriority, NotificationType, ServiceStatus,
            StateTransitionError, StatusChangeInput, SystemClock, TransitionContext, Validate,
            ValidationContext, ValidationErrors,
        },
    },
    repository::{RemovedPartRepo, ServiceCompletionReportRepo, ServiceTicketRepo},
    service::{NotificationService, ServiceLifecycleService},
};
use servicing_architecture::repository::ReadOnlyRepository;
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct ServiceLifecycleServiceImpl {
    service_repo: Arc<dyn ServiceTicketRepo>,
    removed_part_repo: Arc<dyn RemovedPartRepo>,
    report_repo: Arc<dyn ServiceCompletionReportRepo>,
    client_repo: Arc<dyn ReadOnlyRepository<Client>>,
    appliance_repo: Arc<dyn ReadOnlyRepository<Appliance>>,
    technician_repo: Arc<dyn ReadOnlyRepository<Technician>>,
    user_repo: Arc<dyn ReadOnlyRepository<User>>,
    notification_service: Arc<dyn NotificationService>,
    #[builder(default = Arc::new(SystemClock))]
    clock: Arc<dyn Clock>,
}

#[async_trait]
impl ServiceLifecycleService for ServiceLifecycleServiceImpl {
    async fn create_service(&self, input: ServiceTicketInput) -> ServicingResult<ServiceTicket> {
        let ticket = input.validate(&ValidationContext::on(self.clock.today()))?;

        let client = self
            .client_repo
            .find_by_id(ticket.client_id)
            .await?
            .ok_or(ServicingException::not_found("client", ticket.client_id))?;
        let appliance = self
            .appliance_repo
            .find_by_id(ticket.appliance_id)
            .await?
            .ok_or(ServicingException::not_found("appliance", ticket.appliance_id))?;
        if appliance.client_id != client.id {
            return Err(ServicingException::ApplianceOwnerMismatch {
                appliance_id: appliance.id,
                client_id: client.id,
            });
        }
        if let Some(technician_id) = ticket.technician_id {
            self.active_technician(technician_id).await?;
        }
        if let Some(partner_id) = ticket.business_partner_id {
            self.user_repo
                .find_by_id(partner_id)
                .await?
                .ok_or(ServicingException::not_found("user", partner_id))?;
        }

        self.service_repo.insert(&ticket).await?;
        self.service_repo.save_changed().await?;
        tracing::info!(service_id = %ticket.id, client_id = %client.id, "Service created");

        if let Some(technician_id) = ticket.technician_id {
            self.notify_assigned(&ticket, technician_id).await;
        }
        if let Some(partner_id) = ticket.business_partner_id {
            let draft = NotificationDraft::builder()
                .kind(NotificationType::ServiceCreated)
                .title("New service from a partner")
                .message(format!(
                    "{} opened a service for {}: {}",
                    ticket.partner_company_name.as_deref().unwrap_or("A business partner"),
                    client.full_name,
                    ticket.description
                ))
                .related_service_id(ticket.id)
                .related_user_id(partner_id)
                .build();
            report(self.notification_service.notify_admins(draft).await, "service created");
        }
        Ok(ticket)
    }

    async fn change_status(
        &self,
        service_id: Uuid,
        input: StatusChangeInput,
    ) -> ServicingResult<ServiceTicket> {
        let today = self.clock.today();
        let change = input.validate(&ValidationContext::on(today))?;
        let ticket = self.get_service(service_id).await?;
        if change.expected_version.is_some_and(|v| v != ticket.version) {
            return Err(ServicingException::ConcurrentModification {
                entity: "service",
                id: service_id,
            });
        }

        let blocking_removed_parts = if change.target == ServiceStatus::Completed {
            self.blocking_removed_parts(service_id).await?
        } else {
            0
        };
        let ctx = TransitionContext {
            today,
            blocking_removed_parts,
        };
        let next = ticket.apply_status_change(&change, &ctx)?;
        let next = self.save_versioned(next).await?;
        tracing::info!(
            service_id = %service_id,
            from = %ticket.status,
            to = %next.status,
            "Service status changed"
        );

        self.notify_partner(&next).await;
        let admin_alert = match next.status {
            ServiceStatus::RepairFailed => Some((NotificationType::RepairFailed, "Repair failed")),
            ServiceStatus::CustomerRefusesRepair | ServiceStatus::CustomerRefusedRepair => Some((
                NotificationType::CustomerRefusedRepair,
                "Customer refused the repair",
            )),
            _ => None,
        };
        if let Some((kind, title)) = admin_alert {
            let reason = next.outcome.as_ref().map(outcome_reason).unwrap_or_default();
            let draft = NotificationDraft::builder()
                .kind(kind)
                .title(title)
                .message(format!("{}: {}", next.description, reason))
                .related_service_id(next.id)
                .priority(NotificationPriority::High)
                .build();
            report(self.notification_service.notify_admins(draft).await, title);
        }
        Ok(next)
    }

    async fn assign_technician(
        &self,
        service_id: Uuid,
        technician_id: Uuid,
    ) -> ServicingResult<ServiceTicket> {
        let ticket = self.get_service(service_id).await?;
        self.active_technician(technician_id).await?;
        let next = ticket.assign_technician(technician_id)?;
        let next = self.save_versioned(next).await?;
        tracing::info!(service_id = %service_id, technician_id = %technician_id, "Technician assigned");
        self.notify_assigned(&next, technician_id).await;
        Ok(next)
    }

    async fn complete_with_report(
        &self,
        service_id: Uuid,
        input: ServiceCompletionReportInput,
    ) -> ServicingResult<CompletedService> {
        let today = self.clock.today();
        let mut report = input.validate(&ValidationContext::on(today))?;
        report.service_id = service_id;
        let ticket = self.get_service(service_id).await?;
        if ticket.technician_id != Some(report.technician_id) {
            return Err(ValidationErrors::single(
                "technicianId",
                "technicianId must be the technician assigned to the service",
            )
            .into());
        }
        if self.report_repo.get_by_service(service_id).await?.is_some() {
            return Err(StateTransitionError::AlreadyReported.into());
        }

        let ctx = TransitionContext {
            today,
            blocking_removed_parts: self.blocking_removed_parts(service_id).await?,
        };
        let next = ticket.apply_status_change(&report.completion(), &ctx)?;
        self.report_repo.insert(&report).await?;
        let next = self.save_versioned(next).await?;
        tracing::info!(
            service_id = %service_id,
            report_id = %report.id,
            labor_time = report.labor_time,
            "Service completed with report"
        );
        self.notify_partner(&next).await;
        Ok(CompletedService {
            service: next,
            report,
        })
    }

    async fn completion_report(&self, service_id: Uuid) -> ServicingResult<ServiceCompletionReport> {
        self.report_repo
            .get_by_service(service_id)
            .await?
            .ok_or(ServicingException::not_found("completion report", service_id))
    }

    async fn reopen(&self, service_id: Uuid, reason: String) -> ServicingResult<ServiceTicket> {
        let ticket = self.get_service(service_id).await?;
        let next = ticket.reopen(&reason)?;
        let next = self.save_versioned(next).await?;
        tracing::info!(service_id = %service_id, from = %ticket.status, "Service reopened");
        Ok(next)
    }

    async fn get_service(&self, service_id: Uuid) -> ServicingResult<ServiceTicket> {
        self.service_repo
            .find_by_id(service_id)
            .await?
            .ok_or(ServicingException::not_found("service", service_id))
    }

    async fn list_services_by_status(
        &self,
        status: ServiceStatus,
    ) -> ServicingResult<Vec<ServiceTicket>> {
        Ok(self.service_repo.get_by_status(status).await?)
    }
}

impl ServiceLifecycleServiceImpl {
    async fn active_technician(&self, technician_id: Uuid) -> ServicingResult<Technician> {
        let technician = self
            .technician_repo
            .find_by_id(technician_id)
            .await?
            .ok_or(ServicingException::not_found("technician", technician_id))?;
        if !technician.active {
            return Err(ServicingException::InactiveTechnician { id: technician_id });
        }
        Ok(technician)
    }

    async fn blocking_removed_parts(&self, service_id: Uuid) -> ServicingResult<usize> {
        Ok(self
            .removed_part_repo
            .get_by_service(service_id)
            .await?
            .iter()
            .filter(|p| p.part_status.is_outstanding())
            .count())
    }

    /// Commits `next` against the version it was loaded with, along with
    /// anything else buffered, and returns it with the bumped version.
    async fn save_versioned(&self, mut next: ServiceTicket) -> ServicingResult<ServiceTicket> {
        self.service_repo.update_versioned(&next).await?;
        self.service_repo.save_changed().await?;
        next.version += 1;
        Ok(next)
    }

    async fn notify_partner(&self, ticket: &ServiceTicket) {
        let Some(partner_id) = ticket.business_partner_id else {
            return;
        };
        let draft = NotificationDraft::builder()
            .kind(NotificationType::ServiceStatusChanged)
            .title("Service status changed")
            .message(format!(
                "The service \"{}\" is now {}.",
                ticket.description, ticket.status
            ))
            .related_service_id(ticket.id)
            .build();
        report(
            self.notification_service.notify(partner_id, draft).await,
            "status change",
        );
    }

    async fn notify_assigned(&self, ticket: &ServiceTicket, technician_id: Uuid) {
        let draft = NotificationDraft::builder()
            .kind(NotificationType::ServiceAssigned)
            .title("New service assigned")
            .message(format!("You were assigned: {}", ticket.description))
            .related_service_id(ticket.id)
            .build();
        report(
            self.notification_service
                .notify_technician(technician_id, draft)
                .await,
            "assignment",
        );
    }
}

fn outcome_reason(outcome: &domain_servicing::model::vo::ServiceOutcome) -> String {
    use domain_servicing::model::vo::ServiceOutcome;
    match outcome {
        ServiceOutcome::ClientUnavailable { reason, .. }
        | ServiceOutcome::CustomerRefusal { reason }
        | ServiceOutcome::RepairFailure { reason, .. } => reason.clone(),
    }
}

/// Notifications never undo the operation that triggered them.
pub(crate) fn report<T>(result: ServicingResult<T>, what: &str) {
    if let Err(e) = result {
        tracing::warn!("Failed to send {what} notification: {e}");
    }
}
