use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use domain_servicing::{
    exception::{ServicingException, ServicingResult},
    model::{
        entity::{Appliance, MaintenanceAlert, MaintenanceSchedule, MaintenanceScheduleInput},
        vo::{Clock, NotificationDraft, NotificationType, SystemClock, Validate, ValidationContext},
    },
    repository::{MaintenanceAlertRepo, MaintenanceScheduleRepo},
    service::{MaintenanceService, NotificationService},
};
use servicing_architecture::repository::ReadOnlyRepository;
use typed_builder::TypedBuilder;
use uuid::Uuid;

use crate::lifecycle::report;

#[derive(TypedBuilder)]
pub struct MaintenanceServiceImpl {
    schedule_repo: Arc<dyn MaintenanceScheduleRepo>,
    alert_repo: Arc<dyn MaintenanceAlertRepo>,
    appliance_repo: Arc<dyn ReadOnlyRepository<Appliance>>,
    notification_service: Arc<dyn NotificationService>,
    #[builder(default = Arc::new(SystemClock))]
    clock: Arc<dyn Clock>,
}

#[async_trait]
impl MaintenanceService for MaintenanceServiceImpl {
    async fn create_schedule(
        &self,
        input: MaintenanceScheduleInput,
    ) -> ServicingResult<MaintenanceSchedule> {
        let schedule = input.validate(&ValidationContext::on(self.clock.today()))?;
        self.appliance_repo
            .find_by_id(schedule.appliance_id)
            .await?
            .ok_or(ServicingException::not_found("appliance", schedule.appliance_id))?;
        self.schedule_repo.insert(&schedule).await?;
        self.schedule_repo.save_changed().await?;
        tracing::info!(
            schedule_id = %schedule.id,
            next = %schedule.next_maintenance_date,
            "Maintenance schedule created"
        );
        Ok(schedule)
    }

    async fn complete_maintenance(
        &self,
        schedule_id: Uuid,
        done_on: Option<NaiveDate>,
    ) -> ServicingResult<MaintenanceSchedule> {
        let schedule = self
            .schedule_repo
            .find_by_id(schedule_id)
            .await?
            .ok_or(ServicingException::not_found("maintenance schedule", schedule_id))?;
        let next = schedule.advance(done_on.unwrap_or(self.clock.today()))?;
        self.schedule_repo.update(&next).await?;
        let pending = self.alert_repo.get_pending(schedule_id).await?;
        for alert in &pending {
            self.alert_repo.update(&alert.complete()).await?;
        }
        self.schedule_repo.save_changed().await?;
        tracing::info!(
            schedule_id = %schedule_id,
            next = %next.next_maintenance_date,
            resolved_alerts = pending.len(),
            "Maintenance completed"
        );
        Ok(next)
    }

    async fn raise_due_alerts(&self, lookahead_days: u32) -> ServicingResult<Vec<MaintenanceAlert>> {
        let today = self.clock.today();
        let horizon = today + Duration::days(lookahead_days as i64);
        let mut alerts = vec![];
        for schedule in self.schedule_repo.get_due(horizon).await? {
            if !schedule.is_due(horizon) || self.alert_repo.has_pending(schedule.id).await? {
                continue;
            }
            alerts.push((MaintenanceAlert::for_schedule(&schedule, today), schedule));
        }
        if alerts.is_empty() {
            return Ok(vec![]);
        }
        self.alert_repo
            .insert_list(&alerts.iter().map(|(alert, _)| alert).collect::<Vec<_>>())
            .await?;
        self.alert_repo.save_changed().await?;

        for (alert, schedule) in &alerts {
            let draft = NotificationDraft::builder()
                .kind(NotificationType::MaintenanceDue)
                .title(alert.title.clone())
                .message(alert.message.clone())
                .build();
            report(
                self.notification_service.notify_admins(draft).await,
                "maintenance due",
            );
            tracing::info!(schedule_id = %schedule.id, "Maintenance alert raised");
        }
        Ok(alerts.into_iter().map(|(alert, _)| alert).collect())
    }
}
