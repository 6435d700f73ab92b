use std::sync::Arc;

use async_trait::async_trait;
use domain_inventory::{
    exception::InventoryResult,
    model::entity::{Supplier, SupplierInput},
    repository::SupplierRepo,
    service::SupplierService,
};
use domain_servicing::model::vo::{Clock, SystemClock, Validate, ValidationContext};
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct SupplierServiceImpl {
    supplier_repo: Arc<dyn SupplierRepo>,
    #[builder(default = Arc::new(SystemClock))]
    clock: Arc<dyn Clock>,
}

#[async_trait]
impl SupplierService for SupplierServiceImpl {
    async fn register_supplier(&self, input: SupplierInput) -> InventoryResult<Supplier> {
        let supplier = input.validate(&ValidationContext::on(self.clock.today()))?;
        self.supplier_repo.insert(&supplier).await?;
        self.supplier_repo.save_changed().await?;
        tracing::info!(supplier_id = %supplier.id, name = %supplier.name, "Supplier registered");
        Ok(supplier)
    }

    async fn list_active(&self) -> InventoryResult<Vec<Supplier>> {
        Ok(self.supplier_repo.get_active().await?)
    }
}
