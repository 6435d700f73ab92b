use actix_web::{
    get, post,
    web::{Data, Json, Path},
};
use domain_servicing::model::{
    entity::{
        CompletedService, RemovedPart, RemovedPartInput, RemovedPartStatusChangeInput,
        ServiceCompletionReport, ServiceCompletionReportInput, ServiceTicket, ServiceTicketInput,
    },
    vo::StatusChangeInput,
};

use super::{
    dtos::{AssignTechnicianDto, ReopenDto},
    extract_status, extract_uuid, ok, ApiResult,
};
use crate::infrastructure::ServiceProvider;

#[post("services")]
pub async fn create_service(
    sp: Data<ServiceProvider>,
    input: Json<ServiceTicketInput>,
) -> ApiResult<ServiceTicket> {
    ok(sp.scoped().lifecycle.create_service(input.into_inner()).await?)
}

#[get("services/{id}")]
pub async fn get_service(sp: Data<ServiceProvider>, id: Path<String>) -> ApiResult<ServiceTicket> {
    let id = extract_uuid(&id)?;
    ok(sp.scoped().lifecycle.get_service(id).await?)
}

#[get("services/status/{status}")]
pub async fn list_services_by_status(
    sp: Data<ServiceProvider>,
    status: Path<String>,
) -> ApiResult<Vec<ServiceTicket>> {
    let status = extract_status(&status)?;
    ok(sp.scoped().lifecycle.list_services_by_status(status).await?)
}

#[post("services/{id}/status")]
pub async fn change_status(
    sp: Data<ServiceProvider>,
    id: Path<String>,
    input: Json<StatusChangeInput>,
) -> ApiResult<ServiceTicket> {
    let id = extract_uuid(&id)?;
    ok(sp.scoped().lifecycle.change_status(id, input.into_inner()).await?)
}

#[post("services/{id}/assign")]
pub async fn assign_technician(
    sp: Data<ServiceProvider>,
    id: Path<String>,
    dto: Json<AssignTechnicianDto>,
) -> ApiResult<ServiceTicket> {
    let id = extract_uuid(&id)?;
    let technician_id = extract_uuid(&dto.technician_id)?;
    ok(sp.scoped().lifecycle.assign_technician(id, technician_id).await?)
}

#[post("services/{id}/reopen")]
pub async fn reopen(
    sp: Data<ServiceProvider>,
    id: Path<String>,
    dto: Json<ReopenDto>,
) -> ApiResult<ServiceTicket> {
    let id = extract_uuid(&id)?;
    ok(sp.scoped().lifecycle.reopen(id, dto.into_inner().reason).await?)
}

#[post("services/{id}/completion-report")]
pub async fn complete_with_report(
    sp: Data<ServiceProvider>,
    id: Path<String>,
    input: Json<ServiceCompletionReportInput>,
) -> ApiResult<CompletedService> {
    let id = extract_uuid(&id)?;
    ok(sp
        .scoped()
        .lifecycle
        .complete_with_report(id, input.into_inner())
        .await?)
}

#[get("services/{id}/completion-report")]
pub async fn completion_report(
    sp: Data<ServiceProvider>,
    id: Path<String>,
) -> ApiResult<ServiceCompletionReport> {
    let id = extract_uuid(&id)?;
    ok(sp.scoped().lifecycle.completion_report(id).await?)
}

#[post("services/{id}/removed-parts")]
pub async fn register_removed_part(
    sp: Data<ServiceProvider>,
    id: Path<String>,
    input: Json<RemovedPartInput>,
) -> ApiResult<RemovedPart> {
    let id = extract_uuid(&id)?;
    let mut input = input.into_inner();
    input.service_id = Some(id.to_string());
    ok(sp.scoped().removed_parts.register_removed_part(input).await?)
}

#[get("services/{id}/removed-parts")]
pub async fn list_removed_parts(
    sp: Data<ServiceProvider>,
    id: Path<String>,
) -> ApiResult<Vec<RemovedPart>> {
    let id = extract_uuid(&id)?;
    ok(sp.scoped().removed_parts.list_for_service(id).await?)
}

#[post("removed-parts/{id}/status")]
pub async fn change_removed_part_status(
    sp: Data<ServiceProvider>,
    id: Path<String>,
    input: Json<RemovedPartStatusChangeInput>,
) -> ApiResult<RemovedPart> {
    let id = extract_uuid(&id)?;
    ok(sp
        .scoped()
        .removed_parts
        .change_removed_part_status(id, input.into_inner())
        .await?)
}
