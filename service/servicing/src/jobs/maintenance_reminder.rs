use std::{sync::Arc, time::Duration};

use domain_servicing::{
    exception::ServicingResult, model::entity::MaintenanceAlert, service::MaintenanceService,
};
use serde::Deserialize;
use servicing_architecture::background_service::BackgroundService;
use tracing::Instrument;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MaintenanceJobConfig {
    pub enable: bool,
    pub interval_secs: u64,
    /// How far ahead a schedule counts as due.
    pub lookahead_days: u32,
}

impl Default for MaintenanceJobConfig {
    fn default() -> Self {
        Self {
            enable: true,
            interval_secs: 24 * 60 * 60,
            lookahead_days: 7,
        }
    }
}

/// Raises maintenance alerts for schedules coming due.
pub struct MaintenanceReminderJob {
    service: Arc<dyn MaintenanceService>,
    config: MaintenanceJobConfig,
}

impl MaintenanceReminderJob {
    pub fn new(service: Arc<dyn MaintenanceService>, config: MaintenanceJobConfig) -> Self {
        Self { service, config }
    }

    pub async fn run_once(&self) -> ServicingResult<Vec<MaintenanceAlert>> {
        let alerts = self.service.raise_due_alerts(self.config.lookahead_days).await?;
        if !alerts.is_empty() {
            tracing::info!(count = alerts.len(), "Maintenance alerts raised");
        }
        Ok(alerts)
    }
}

#[async_trait::async_trait]
impl BackgroundService for MaintenanceReminderJob {
    async fn run(&self) {
        let mut interval = tokio::time::interval(Duration::from_secs(self.config.interval_secs.max(1)));
        loop {
            interval.tick().await;
            if let Err(e) = self
                .run_once()
                .instrument(tracing::info_span!("maintenance_reminder"))
                .await
            {
                tracing::error!("Maintenance reminder failed: {e}");
            }
        }
    }
}
