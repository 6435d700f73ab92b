use async_trait::async_trait;
use chrono::NaiveDate;
use servicing_architecture::repository::DBRepository;
use uuid::Uuid;

use crate::model::entity::{MaintenanceAlert, MaintenanceSchedule};

#[async_trait]
pub trait MaintenanceScheduleRepo: DBRepository<MaintenanceSchedule> + Send + Sync {
    /// Active schedules due on or before `horizon`.
    async fn get_due(&self, horizon: NaiveDate) -> anyhow::Result<Vec<MaintenanceSchedule>>;
}

#[async_trait]
pub trait MaintenanceAlertRepo: DBRepository<MaintenanceAlert> + Send + Sync {
    async fn has_pending(&self, schedule_id: Uuid) -> anyhow::Result<bool>;

    async fn get_pending(&self, schedule_id: Uuid) -> anyhow::Result<Vec<MaintenanceAlert>>;
}
