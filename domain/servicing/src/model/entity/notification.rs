use anyhow::anyhow;
use chrono::{DateTime, Utc};
use database_model::notification;
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::vo::{NotificationDraft, NotificationPriority, NotificationType};

/// A message addressed to one user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub title: String,
    pub message: String,
    pub related_service_id: Option<Uuid>,
    pub related_spare_part_id: Option<Uuid>,
    pub related_user_id: Option<Uuid>,
    pub is_read: bool,
    pub priority: NotificationPriority,
    pub created_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
}

servicing_architecture::aggregate_root!(Notification);

impl Notification {
    pub fn from_draft(user_id: Uuid, draft: NotificationDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            kind: draft.kind,
            title: draft.title,
            message: draft.message,
            related_service_id: draft.related_service_id,
            related_spare_part_id: draft.related_spare_part_id,
            related_user_id: draft.related_user_id,
            is_read: false,
            priority: draft.priority,
            created_at: now,
            read_at: None,
        }
    }

    /// Returns `false` when it was already read; the first read time is kept.
    pub fn mark_read(&mut self, now: DateTime<Utc>) -> bool {
        if self.is_read {
            return false;
        }
        self.is_read = true;
        self.read_at = Some(now);
        true
    }
}

impl TryFrom<notification::Model> for Notification {
    type Error = anyhow::Error;

    fn try_from(model: notification::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            user_id: model.user_id,
            kind: NotificationType::from_i32(model.r#type)
                .ok_or(anyhow!("Wrong notification type {}", model.r#type))?,
            title: model.title,
            message: model.message,
            related_service_id: model.related_service_id,
            related_spare_part_id: model.related_spare_part_id,
            related_user_id: model.related_user_id,
            is_read: model.is_read,
            priority: NotificationPriority::from_i32(model.priority)
                .ok_or(anyhow!("Wrong notification priority {}", model.priority))?,
            created_at: model.created_at,
            read_at: model.read_at,
        })
    }
}

impl From<Notification> for notification::Model {
    fn from(entity: Notification) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            r#type: entity.kind as i32,
            title: entity.title,
            message: entity.message,
            related_service_id: entity.related_service_id,
            related_spare_part_id: entity.related_spare_part_id,
            related_user_id: entity.related_user_id,
            is_read: entity.is_read,
            priority: entity.priority as i32,
            created_at: entity.created_at,
            read_at: entity.read_at,
        }
    }
}
