use async_trait::async_trait;
use servicing_architecture::repository::DBRepository;

use crate::model::entity::Supplier;

#[async_trait]
pub trait SupplierRepo: DBRepository<Supplier> + Send + Sync {
    /// Active suppliers by priority.
    async fn get_active(&self) -> anyhow::Result<Vec<Supplier>>;
}
