use actix_web::{
    get, post,
    web::{Data, Json, Path},
};
use domain_inventory::model::entity::{
    AllocationInput, AvailablePart, AvailablePartInput, CatalogEntryInput, MarkOrderedInput,
    PartsAllocation, ReceiptInput, SparePartCatalogEntry, SparePartOrder, SparePartOrderInput,
    StockLevel, Supplier, SupplierInput,
};

use super::{
    dtos::{ApproveOrderDto, ConfirmDeliveryDto},
    extract_uuid, ok, ApiResult,
};
use crate::infrastructure::ServiceProvider;

#[post("spare-part-orders")]
pub async fn request_order(
    sp: Data<ServiceProvider>,
    input: Json<SparePartOrderInput>,
) -> ApiResult<SparePartOrder> {
    ok(sp.scoped().parts_flow.request_order(input.into_inner()).await?)
}

#[get("spare-part-orders/active")]
pub async fn active_orders(sp: Data<ServiceProvider>) -> ApiResult<Vec<SparePartOrder>> {
    ok(sp.scoped().parts_flow.active_orders().await?)
}

#[get("spare-part-orders")]
pub async fn order_history(sp: Data<ServiceProvider>) -> ApiResult<Vec<SparePartOrder>> {
    ok(sp.scoped().parts_flow.order_history().await?)
}

#[post("spare-part-orders/{id}/approve")]
pub async fn approve_order(
    sp: Data<ServiceProvider>,
    id: Path<String>,
    dto: Json<ApproveOrderDto>,
) -> ApiResult<SparePartOrder> {
    let id = extract_uuid(&id)?;
    ok(sp.scoped().parts_flow.approve(id, dto.into_inner().admin_notes).await?)
}

#[post("spare-part-orders/{id}/order")]
pub async fn mark_ordered(
    sp: Data<ServiceProvider>,
    id: Path<String>,
    input: Json<MarkOrderedInput>,
) -> ApiResult<SparePartOrder> {
    let id = extract_uuid(&id)?;
    ok(sp.scoped().parts_flow.mark_ordered(id, input.into_inner()).await?)
}

#[post("spare-part-orders/{id}/receive")]
pub async fn mark_received(
    sp: Data<ServiceProvider>,
    id: Path<String>,
    input: Json<ReceiptInput>,
) -> ApiResult<SparePartOrder> {
    let id = extract_uuid(&id)?;
    ok(sp.scoped().parts_flow.mark_received(id, input.into_inner()).await?)
}

#[post("spare-part-orders/{id}/deliver")]
pub async fn confirm_delivery(
    sp: Data<ServiceProvider>,
    id: Path<String>,
    dto: Json<ConfirmDeliveryDto>,
) -> ApiResult<SparePartOrder> {
    let id = extract_uuid(&id)?;
    let confirmed_by = extract_uuid(&dto.confirmed_by)?;
    ok(sp.scoped().parts_flow.confirm_delivery(id, confirmed_by).await?)
}

#[post("spare-part-orders/{id}/cancel")]
pub async fn cancel_order(sp: Data<ServiceProvider>, id: Path<String>) -> ApiResult<SparePartOrder> {
    let id = extract_uuid(&id)?;
    ok(sp.scoped().parts_flow.cancel(id).await?)
}

#[post("spare-part-orders/{id}/remove")]
pub async fn remove_from_ordering(
    sp: Data<ServiceProvider>,
    id: Path<String>,
) -> ApiResult<SparePartOrder> {
    let id = extract_uuid(&id)?;
    ok(sp.scoped().parts_flow.remove_from_ordering(id).await?)
}

#[post("suppliers")]
pub async fn register_supplier(
    sp: Data<ServiceProvider>,
    input: Json<SupplierInput>,
) -> ApiResult<Supplier> {
    ok(sp.scoped().suppliers.register_supplier(input.into_inner()).await?)
}

#[post("available-parts")]
pub async fn add_stock(
    sp: Data<ServiceProvider>,
    input: Json<AvailablePartInput>,
) -> ApiResult<AvailablePart> {
    ok(sp.scoped().parts_flow.add_stock(input.into_inner()).await?)
}

#[get("available-parts")]
pub async fn available_parts(sp: Data<ServiceProvider>) -> ApiResult<Vec<StockLevel>> {
    ok(sp.scoped().parts_flow.available_parts().await?)
}

#[post("allocations")]
pub async fn allocate(
    sp: Data<ServiceProvider>,
    input: Json<AllocationInput>,
) -> ApiResult<PartsAllocation> {
    ok(sp.scoped().parts_flow.allocate(input.into_inner()).await?)
}

#[post("allocations/{id}/use")]
pub async fn mark_allocation_used(
    sp: Data<ServiceProvider>,
    id: Path<String>,
) -> ApiResult<PartsAllocation> {
    let id = extract_uuid(&id)?;
    ok(sp.scoped().parts_flow.mark_allocation_used(id).await?)
}

#[post("allocations/{id}/return")]
pub async fn return_allocation(
    sp: Data<ServiceProvider>,
    id: Path<String>,
) -> ApiResult<PartsAllocation> {
    let id = extract_uuid(&id)?;
    ok(sp.scoped().parts_flow.return_allocation(id).await?)
}

#[post("catalog")]
pub async fn add_catalog_entry(
    sp: Data<ServiceProvider>,
    input: Json<CatalogEntryInput>,
) -> ApiResult<SparePartCatalogEntry> {
    ok(sp.scoped().catalog.add_entry(input.into_inner()).await?)
}
