use async_trait::async_trait;
use servicing_architecture::repository::DBRepository;
use uuid::Uuid;

use crate::model::{entity::PartnerMessage, vo::MessageStatus};

#[async_trait]
pub trait PartnerMessageRepo: DBRepository<PartnerMessage> + Send + Sync {
    /// Newest first.
    async fn get_by_partner(&self, partner_id: Uuid) -> anyhow::Result<Vec<PartnerMessage>>;

    /// Newest first; every message when `status` is `None`.
    async fn get_by_status(
        &self,
        status: Option<MessageStatus>,
    ) -> anyhow::Result<Vec<PartnerMessage>>;
}
