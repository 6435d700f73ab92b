use async_trait::async_trait;

use crate::{
    exception::InventoryResult,
    model::entity::{Supplier, SupplierInput},
};

#[async_trait]
pub trait SupplierService: Send + Sync {
    async fn register_supplier(&self, input: SupplierInput) -> InventoryResult<Supplier>;
    async fn list_active(&self) -> InventoryResult<Vec<Supplier>>;
}
