use std::{collections::HashMap, sync::Arc, time::Duration};

use chrono::{Duration as Days, NaiveDate};
use domain_servicing::{
    model::{
        entity::{Appliance, Manufacturer, ServiceTicket},
        vo::{
            parse_amount, Clock, NotificationDraft, NotificationType, ServiceStatus, SystemClock,
            WarrantyStatus,
        },
    },
    repository::{ManufacturerRepo, ServiceTicketRepo},
    service::NotificationService,
};
use serde::{Deserialize, Serialize};
use servicing_architecture::{background_service::BackgroundService, repository::ReadOnlyRepository};
use tracing::Instrument;
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BillingJobConfig {
    pub enable: bool,
    pub interval_secs: u64,
    /// Days in the billed period, ending with today. Runs this far apart
    /// bill every day exactly once.
    pub period_days: u32,
    /// Manufacturers to bill; every manufacturer when empty.
    pub manufacturers: Vec<String>,
}

impl Default for BillingJobConfig {
    fn default() -> Self {
        Self {
            enable: false,
            interval_secs: 30 * 24 * 60 * 60,
            period_days: 30,
            manufacturers: vec![],
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BillingEntry {
    pub service_id: Uuid,
    pub client_id: Uuid,
    pub appliance_id: Uuid,
    pub completed_date: Option<NaiveDate>,
    pub description: String,
    pub cost: Option<f64>,
}

/// In-warranty work done for one manufacturer over a period.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BillingReport {
    pub manufacturer: String,
    pub period_from: NaiveDate,
    pub period_to: NaiveDate,
    pub entries: Vec<BillingEntry>,
    pub total_cost: f64,
}

#[derive(TypedBuilder)]
pub struct BillingReportJob {
    service_repo: Arc<dyn ServiceTicketRepo>,
    appliance_repo: Arc<dyn ReadOnlyRepository<Appliance>>,
    manufacturer_repo: Arc<dyn ManufacturerRepo>,
    notification_service: Arc<dyn NotificationService>,
    #[builder(default = Arc::new(SystemClock))]
    clock: Arc<dyn Clock>,
    config: BillingJobConfig,
}

impl BillingReportJob {
    pub async fn run_once(&self) -> anyhow::Result<Vec<BillingReport>> {
        let period_to = self.clock.today();
        let period_from = period_to - Days::days(self.config.period_days.max(1) as i64 - 1);
        let manufacturers = self.manufacturers().await?;
        if manufacturers.is_empty() {
            tracing::debug!("No manufacturer to bill");
            return Ok(vec![]);
        }

        let mut by_manufacturer: HashMap<Uuid, Vec<BillingEntry>> = HashMap::new();
        let tickets = self
            .service_repo
            .get_completed_between(period_from, period_to)
            .await?;
        for ticket in tickets.iter().filter(|t| is_billable(t)) {
            let Some(appliance) = self.appliance_repo.find_by_id(ticket.appliance_id).await? else {
                tracing::warn!(service_id = %ticket.id, "Billed service has no appliance");
                continue;
            };
            if !manufacturers.iter().any(|m| m.id == appliance.manufacturer_id) {
                continue;
            }
            by_manufacturer
                .entry(appliance.manufacturer_id)
                .or_default()
                .push(BillingEntry {
                    service_id: ticket.id,
                    client_id: ticket.client_id,
                    appliance_id: appliance.id,
                    completed_date: ticket.completed_date,
                    description: ticket.description.clone(),
                    cost: ticket.cost.as_deref().and_then(parse_amount),
                });
        }

        let mut reports = vec![];
        for manufacturer in manufacturers {
            let Some(entries) = by_manufacturer.remove(&manufacturer.id) else {
                continue;
            };
            let total_cost = entries.iter().filter_map(|e| e.cost).sum();
            let report = BillingReport {
                manufacturer: manufacturer.name,
                period_from,
                period_to,
                entries,
                total_cost,
            };
            let draft = NotificationDraft::builder()
                .kind(NotificationType::BillingReport)
                .title(format!("Billing report: {}", report.manufacturer))
                .message(format!(
                    "{} in-warranty service(s) from {} to {}, total {:.2}.",
                    report.entries.len(),
                    period_from,
                    period_to,
                    report.total_cost
                ))
                .build();
            if let Err(e) = self.notification_service.notify_admins(draft).await {
                tracing::warn!("Failed to send billing report notification: {e}");
            }
            reports.push(report);
        }
        tracing::info!(reports = reports.len(), "Billing reports built");
        Ok(reports)
    }

    async fn manufacturers(&self) -> anyhow::Result<Vec<Manufacturer>> {
        if self.config.manufacturers.is_empty() {
            return self.manufacturer_repo.get_all().await;
        }
        let mut manufacturers = vec![];
        for name in &self.config.manufacturers {
            match self.manufacturer_repo.find_by_name(name).await? {
                Some(manufacturer) => manufacturers.push(manufacturer),
                None => tracing::warn!("Configured manufacturer {name} does not exist"),
            }
        }
        Ok(manufacturers)
    }
}

#[async_trait::async_trait]
impl BackgroundService for BillingReportJob {
    async fn run(&self) {
        let mut interval = tokio::time::interval(Duration::from_secs(self.config.interval_secs.max(1)));
        loop {
            interval.tick().await;
            if let Err(e) = self
                .run_once()
                .instrument(tracing::info_span!("billing_report"))
                .await
            {
                tracing::error!("Billing report failed: {e}");
            }
        }
    }
}

fn is_billable(ticket: &ServiceTicket) -> bool {
    matches!(ticket.status, ServiceStatus::Completed | ServiceStatus::Delivered)
        && ticket.warranty_status == WarrantyStatus::InWarranty
}
