use actix_web::{
    post,
    web::{Data, Json, Path},
};
use domain_servicing::model::entity::{MaintenanceSchedule, MaintenanceScheduleInput};

use super::{dtos::CompleteMaintenanceDto, extract_uuid, ok, ApiResult};
use crate::infrastructure::ServiceProvider;

#[post("maintenance-schedules")]
pub async fn create_schedule(
    sp: Data<ServiceProvider>,
    input: Json<MaintenanceScheduleInput>,
) -> ApiResult<MaintenanceSchedule> {
    ok(sp.scoped().maintenance.create_schedule(input.into_inner()).await?)
}

#[post("maintenance-schedules/{id}/complete")]
pub async fn complete_maintenance(
    sp: Data<ServiceProvider>,
    id: Path<String>,
    dto: Json<CompleteMaintenanceDto>,
) -> ApiResult<MaintenanceSchedule> {
    let id = extract_uuid(&id)?;
    ok(sp
        .scoped()
        .maintenance
        .complete_maintenance(id, dto.into_inner().done_on)
        .await?)
}
