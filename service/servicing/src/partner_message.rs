use std::sync::Arc;

use async_trait::async_trait;
use domain_servicing::{
    exception::{ServicingException, ServicingResult},
    model::{
        entity::{PartnerMessage, PartnerMessageInput, PartnerMessageReplyInput, User},
        vo::{
            Clock, MessagePriority, MessageStatus, MessageType, NotificationDraft,
            NotificationPriority, NotificationType, SystemClock, UserRole, Validate,
            ValidationContext, ValidationErrors,
        },
    },
    repository::PartnerMessageRepo,
    service::{NotificationService, PartnerMessageService},
};
use servicing_architecture::repository::ReadOnlyRepository;
use typed_builder::TypedBuilder;
use uuid::Uuid;

use crate::lifecycle::report;

#[derive(TypedBuilder)]
pub struct PartnerMessageServiceImpl {
    message_repo: Arc<dyn PartnerMessageRepo>,
    user_repo: Arc<dyn ReadOnlyRepository<User>>,
    notification_service: Arc<dyn NotificationService>,
    #[builder(default = Arc::new(SystemClock))]
    clock: Arc<dyn Clock>,
}

#[async_trait]
impl PartnerMessageService for PartnerMessageServiceImpl {
    async fn send_message(&self, input: PartnerMessageInput) -> ServicingResult<PartnerMessage> {
        let message = input.validate(&ValidationContext::on(self.clock.today()))?;
        let partner = self
            .user_repo
            .find_by_id(message.business_partner_id)
            .await?
            .ok_or(ServicingException::not_found("user", message.business_partner_id))?;
        if partner.role != UserRole::BusinessPartner {
            return Err(ValidationErrors::single(
                "businessPartnerId",
                "businessPartnerId must be a business partner account",
            )
            .into());
        }
        let message = message.signed_by(&partner);
        self.message_repo.insert(&message).await?;
        self.message_repo.save_changed().await?;
        tracing::info!(message_id = %message.id, partner_id = %partner.id, "Partner message received");

        let urgent = message.message_type == MessageType::Urgent
            || matches!(message.priority, MessagePriority::High | MessagePriority::Urgent);
        let mut draft = NotificationDraft::builder()
            .kind(NotificationType::PartnerMessage)
            .title(format!("Message from {}", message.sender_name))
            .message(message.subject.clone())
            .related_user_id(partner.id)
            .priority(if urgent {
                NotificationPriority::High
            } else {
                NotificationPriority::Normal
            })
            .build();
        draft.related_service_id = message.related_service_id;
        report(self.notification_service.notify_admins(draft).await, "partner message");
        Ok(message)
    }

    async fn messages_of_partner(&self, partner_id: Uuid) -> ServicingResult<Vec<PartnerMessage>> {
        Ok(self.message_repo.get_by_partner(partner_id).await?)
    }

    async fn list_messages(
        &self,
        status: Option<MessageStatus>,
    ) -> ServicingResult<Vec<PartnerMessage>> {
        Ok(self.message_repo.get_by_status(status).await?)
    }

    async fn mark_message_read(&self, message_id: Uuid) -> ServicingResult<PartnerMessage> {
        let message = self.get_message(message_id).await?;
        match message.mark_read(self.clock.now()) {
            Some(next) => self.save(next).await,
            None => Ok(message),
        }
    }

    async fn reply_to_message(
        &self,
        message_id: Uuid,
        input: PartnerMessageReplyInput,
    ) -> ServicingResult<PartnerMessage> {
        let reply = input.validate(&ValidationContext::on(self.clock.today()))?;
        let message = self.get_message(message_id).await?;
        let next = self.save(message.reply(&reply, self.clock.now())?).await?;
        tracing::info!(message_id = %message_id, by = %reply.responded_by, "Partner message answered");

        let mut draft = NotificationDraft::builder()
            .kind(NotificationType::PartnerMessageReplied)
            .title("Your message was answered")
            .message(format!("{}: {}", next.subject, reply.response))
            .build();
        draft.related_service_id = next.related_service_id;
        report(
            self.notification_service
                .notify(next.business_partner_id, draft)
                .await,
            "message reply",
        );
        Ok(next)
    }

    async fn archive_message(&self, message_id: Uuid) -> ServicingResult<PartnerMessage> {
        let message = self.get_message(message_id).await?;
        self.save(message.archive(self.clock.now())?).await
    }

    async fn star_message(
        &self,
        message_id: Uuid,
        starred: bool,
    ) -> ServicingResult<PartnerMessage> {
        let message = self.get_message(message_id).await?;
        if message.is_starred == starred {
            return Ok(message);
        }
        self.save(message.starred(starred, self.clock.now())).await
    }
}

impl PartnerMessageServiceImpl {
    async fn get_message(&self, message_id: Uuid) -> ServicingResult<PartnerMessage> {
        self.message_repo
            .find_by_id(message_id)
            .await?
            .ok_or(ServicingException::not_found("message", message_id))
    }

    async fn save(&self, next: PartnerMessage) -> ServicingResult<PartnerMessage> {
        self.message_repo.update(&next).await?;
        self.message_repo.save_changed().await?;
        tracing::debug!(message_id = %next.id, status = ?next.status, "Partner message updated");
        Ok(next)
    }
}
