use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    exception::ServicingResult,
    model::{
        entity::{PartnerMessage, PartnerMessageInput, PartnerMessageReplyInput},
        vo::MessageStatus,
    },
};

/// Messages between business partners and the office.
#[async_trait]
pub trait PartnerMessageService: Send + Sync {
    async fn send_message(&self, input: PartnerMessageInput) -> ServicingResult<PartnerMessage>;

    async fn messages_of_partner(&self, partner_id: Uuid) -> ServicingResult<Vec<PartnerMessage>>;

    /// Every message when `status` is `None`.
    async fn list_messages(
        &self,
        status: Option<MessageStatus>,
    ) -> ServicingResult<Vec<PartnerMessage>>;

    /// Only unread messages change.
    async fn mark_message_read(&self, message_id: Uuid) -> ServicingResult<PartnerMessage>;

    async fn reply_to_message(
        &self,
        message_id: Uuid,
        input: PartnerMessageReplyInput,
    ) -> ServicingResult<PartnerMessage>;

    async fn archive_message(&self, message_id: Uuid) -> ServicingResult<PartnerMessage>;

    async fn star_message(
        &self,
        message_id: Uuid,
        starred: bool,
    ) -> ServicingResult<PartnerMessage>;
}
