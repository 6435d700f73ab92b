use async_trait::async_trait;
use servicing_architecture::repository::DBRepository;

use crate::model::entity::SparePartOrder;

#[async_trait]
pub trait SparePartOrderRepo: DBRepository<SparePartOrder> + Send + Sync {
    /// Buffers a write of the order, bumping its version. The commit fails
    /// with a stale version when a concurrent writer won.
    async fn update_versioned(&self, entity: &SparePartOrder) -> anyhow::Result<()>;

    /// Orders still in the ordering queue, oldest first.
    async fn get_active(&self) -> anyhow::Result<Vec<SparePartOrder>>;
}
