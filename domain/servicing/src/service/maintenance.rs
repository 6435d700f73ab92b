use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    exception::ServicingResult,
    model::entity::{MaintenanceAlert, MaintenanceSchedule, MaintenanceScheduleInput},
};

#[async_trait]
pub trait MaintenanceService: Send + Sync {
    async fn create_schedule(
        &self,
        input: MaintenanceScheduleInput,
    ) -> ServicingResult<MaintenanceSchedule>;

    /// Records maintenance done on `done_on` (today when `None`) and moves the
    /// schedule to its next date.
    async fn complete_maintenance(
        &self,
        schedule_id: Uuid,
        done_on: Option<NaiveDate>,
    ) -> ServicingResult<MaintenanceSchedule>;

    /// Raises alerts for schedules due within `lookahead_days` that have none
    /// pending yet.
    async fn raise_due_alerts(&self, lookahead_days: u32) -> ServicingResult<Vec<MaintenanceAlert>>;
}
