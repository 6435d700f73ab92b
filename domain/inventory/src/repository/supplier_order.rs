use async_trait::async_trait;
use servicing_architecture::repository::DBRepository;
use uuid::Uuid;

use crate::model::entity::SupplierOrder;

#[async_trait]
pub trait SupplierOrderRepo: DBRepository<SupplierOrder> + Send + Sync {
    async fn find_by_spare_part_order(
        &self,
        spare_part_order_id: Uuid,
    ) -> anyhow::Result<Option<SupplierOrder>>;
}
