use anyhow::anyhow;
use chrono::{DateTime, Utc};
use database_model::business_partner_message;
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{
    entity::User,
    vo::{
        Checker, MessagePriority, MessageStatus, MessageType, StateTransitionError, TextField,
        Validate, ValidationContext, ValidationResult,
    },
};

/// A message a business partner sent to the office.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerMessage {
    pub id: Uuid,
    pub business_partner_id: Uuid,
    pub subject: String,
    pub content: String,
    pub message_type: MessageType,
    pub priority: MessagePriority,
    pub status: MessageStatus,
    pub is_starred: bool,
    pub sender_name: String,
    pub sender_email: Option<String>,
    pub sender_company: Option<String>,
    pub sender_phone: Option<String>,
    pub related_service_id: Option<Uuid>,
    pub related_client_name: Option<String>,
    /// Json list of attachment references.
    pub attachments: Option<String>,
    pub admin_response: Option<String>,
    pub admin_responded_at: Option<DateTime<Utc>>,
    pub admin_responded_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

servicing_architecture::aggregate_root!(PartnerMessage);

impl PartnerMessage {
    /// Stamps the sender's details from their account.
    pub fn signed_by(mut self, partner: &User) -> Self {
        self.business_partner_id = partner.id;
        self.sender_name = partner.full_name.clone();
        self.sender_email = partner.email.clone();
        self.sender_company = partner.company_name.clone();
        self.sender_phone = partner.phone.clone();
        self
    }

    fn move_to(
        &self,
        status: MessageStatus,
        now: DateTime<Utc>,
    ) -> Result<Self, StateTransitionError> {
        if !self.status.can_transition_to(status) {
            return Err(StateTransitionError::MessageNotAllowed {
                from: self.status,
                to: status,
            });
        }
        let mut next = self.clone();
        next.status = status;
        next.updated_at = now;
        Ok(next)
    }

    /// `None` when there is nothing to change.
    pub fn mark_read(&self, now: DateTime<Utc>) -> Option<Self> {
        (self.status == MessageStatus::Unread)
            .then(|| self.move_to(MessageStatus::Read, now).ok())
            .flatten()
    }

    pub fn reply(
        &self,
        reply: &PartnerMessageReply,
        now: DateTime<Utc>,
    ) -> Result<Self, StateTransitionError> {
        let mut next = self.move_to(MessageStatus::Replied, now)?;
        next.admin_response = Some(reply.response.clone());
        next.admin_responded_by = Some(reply.responded_by.clone());
        next.admin_responded_at = Some(now);
        Ok(next)
    }

    pub fn archive(&self, now: DateTime<Utc>) -> Result<Self, StateTransitionError> {
        self.move_to(MessageStatus::Archived, now)
    }

    pub fn starred(&self, is_starred: bool, now: DateTime<Utc>) -> Self {
        let mut next = self.clone();
        next.is_starred = is_starred;
        next.updated_at = now;
        next
    }
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct PartnerMessageInput {
    pub business_partner_id: Option<String>,
    pub subject: Option<String>,
    pub content: Option<String>,
    pub message_type: Option<String>,
    pub priority: Option<String>,
    pub related_service_id: TextField,
    pub related_client_name: TextField,
    pub attachments: TextField,
}

impl Validate for PartnerMessageInput {
    type Output = PartnerMessage;

    fn validate(self, ctx: &ValidationContext) -> ValidationResult<PartnerMessage> {
        let mut c = Checker::new(ctx);
        let now = Utc::now();
        let message = PartnerMessage {
            id: Uuid::new_v4(),
            business_partner_id: c.id("businessPartnerId", self.business_partner_id),
            subject: c.trimmed_text("subject", self.subject, 3, 200),
            content: c.trimmed_text("content", self.content, 10, 2000),
            message_type: c.required_choice("messageType", self.message_type),
            priority: c.choice("priority", self.priority).unwrap_or_default(),
            status: MessageStatus::Unread,
            is_starred: false,
            sender_name: String::new(),
            sender_email: None,
            sender_company: None,
            sender_phone: None,
            related_service_id: c.optional_id("relatedServiceId", self.related_service_id),
            related_client_name: c.optional_text(
                "relatedClientName",
                self.related_client_name,
                0,
                100,
            ),
            attachments: c.json_list("attachments", self.attachments, 2000),
            admin_response: None,
            admin_responded_at: None,
            admin_responded_by: None,
            created_at: now,
            updated_at: now,
        };
        c.finish(message)
    }
}

/// An admin's answer to a partner message.
#[derive(Clone, Debug, PartialEq)]
pub struct PartnerMessageReply {
    pub response: String,
    pub responded_by: String,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct PartnerMessageReplyInput {
    pub response: Option<String>,
    pub responded_by: Option<String>,
}

impl Validate for PartnerMessageReplyInput {
    type Output = PartnerMessageReply;

    fn validate(self, ctx: &ValidationContext) -> ValidationResult<PartnerMessageReply> {
        let mut c = Checker::new(ctx);
        let reply = PartnerMessageReply {
            response: c.trimmed_text("response", self.response, 1, 2000),
            responded_by: c.trimmed_text("respondedBy", self.responded_by, 1, 100),
        };
        c.finish(reply)
    }
}

impl TryFrom<business_partner_message::Model> for PartnerMessage {
    type Error = anyhow::Error;

    fn try_from(model: business_partner_message::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            business_partner_id: model.business_partner_id,
            subject: model.subject,
            content: model.content,
            message_type: MessageType::from_i32(model.message_type)
                .ok_or(anyhow!("Wrong message type {}", model.message_type))?,
            priority: MessagePriority::from_i32(model.priority)
                .ok_or(anyhow!("Wrong message priority {}", model.priority))?,
            status: MessageStatus::from_i32(model.status)
                .ok_or(anyhow!("Wrong message status {}", model.status))?,
            is_starred: model.is_starred,
            sender_name: model.sender_name,
            sender_email: model.sender_email,
            sender_company: model.sender_company,
            sender_phone: model.sender_phone,
            related_service_id: model.related_service_id,
            related_client_name: model.related_client_name,
            attachments: model.attachments,
            admin_response: model.admin_response,
            admin_responded_at: model.admin_responded_at,
            admin_responded_by: model.admin_responded_by,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl From<PartnerMessage> for business_partner_message::Model {
    fn from(entity: PartnerMessage) -> Self {
        Self {
            id: entity.id,
            business_partner_id: entity.business_partner_id,
            subject: entity.subject,
            content: entity.content,
            message_type: entity.message_type as i32,
            priority: entity.priority as i32,
            status: entity.status as i32,
            is_starred: entity.is_starred,
            sender_name: entity.sender_name,
            sender_email: entity.sender_email,
            sender_company: entity.sender_company,
            sender_phone: entity.sender_phone,
            related_service_id: entity.related_service_id,
            related_client_name: entity.related_client_name,
            attachments: entity.attachments,
            admin_response: entity.admin_response,
            admin_responded_at: entity.admin_responded_at,
            admin_responded_by: entity.admin_responded_by,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
