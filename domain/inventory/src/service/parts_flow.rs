use async_trait::async_trait;
use domain_servicing::model::vo::TextField;
use uuid::Uuid;

use crate::{
    exception::InventoryResult,
    model::entity::{
        AllocationInput, AvailablePart, AvailablePartInput, MarkOrderedInput, PartsAllocation,
        ReceiptInput, SparePartOrder, SparePartOrderInput, StockLevel,
    },
};

/// Spare part orders, warehouse stock and allocations to technicians.
#[async_trait]
pub trait PartsFlowService: Send + Sync {
    async fn request_order(&self, input: SparePartOrderInput) -> InventoryResult<SparePartOrder>;

    async fn approve(&self, order_id: Uuid, admin_notes: TextField)
        -> InventoryResult<SparePartOrder>;

    /// Places an approved order with a supplier. One supplier order per spare
    /// part order, ever.
    async fn mark_ordered(
        &self,
        order_id: Uuid,
        input: MarkOrderedInput,
    ) -> InventoryResult<SparePartOrder>;

    /// Moves the received parts into stock.
    async fn mark_received(&self, order_id: Uuid, input: ReceiptInput)
        -> InventoryResult<SparePartOrder>;

    async fn confirm_delivery(
        &self,
        order_id: Uuid,
        confirmed_by: Uuid,
    ) -> InventoryResult<SparePartOrder>;

    async fn cancel(&self, order_id: Uuid) -> InventoryResult<SparePartOrder>;

    async fn remove_from_ordering(&self, order_id: Uuid) -> InventoryResult<SparePartOrder>;

    async fn active_orders(&self) -> InventoryResult<Vec<SparePartOrder>>;

    async fn order_history(&self) -> InventoryResult<Vec<SparePartOrder>>;

    async fn add_stock(&self, input: AvailablePartInput) -> InventoryResult<AvailablePart>;

    async fn on_hand(&self, part_id: Uuid) -> InventoryResult<i32>;

    async fn allocate(&self, input: AllocationInput) -> InventoryResult<PartsAllocation>;

    async fn mark_allocation_used(&self, allocation_id: Uuid) -> InventoryResult<PartsAllocation>;

    async fn return_allocation(&self, allocation_id: Uuid) -> InventoryResult<PartsAllocation>;

    async fn available_parts(&self) -> InventoryResult<Vec<StockLevel>>;
}
