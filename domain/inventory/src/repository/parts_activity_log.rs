use async_trait::async_trait;
use servicing_architecture::repository::DBRepository;
use uuid::Uuid;

use crate::model::entity::PartsActivityLog;

#[async_trait]
pub trait PartsActivityLogRepo: DBRepository<PartsActivityLog> + Send + Sync {
    /// Oldest first.
    async fn get_by_part(&self, part_id: Uuid) -> anyhow::Result<Vec<PartsActivityLog>>;
}
