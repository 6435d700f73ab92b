use async_trait::async_trait;
use servicing_architecture::repository::DBRepository;
use uuid::Uuid;

use crate::model::entity::RemovedPart;

#[async_trait]
pub trait RemovedPartRepo: DBRepository<RemovedPart> + Send + Sync {
    async fn get_by_service(&self, service_id: Uuid) -> anyhow::Result<Vec<RemovedPart>>;
}
