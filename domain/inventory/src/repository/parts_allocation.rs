use async_trait::async_trait;
use servicing_architecture::repository::DBRepository;
use uuid::Uuid;

use crate::model::entity::PartsAllocation;

#[async_trait]
pub trait PartsAllocationRepo: DBRepository<PartsAllocation> + Send + Sync {
    async fn get_by_part(&self, part_id: Uuid) -> anyhow::Result<Vec<PartsAllocation>>;
}
