use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    exception::ServicingResult,
    model::{entity::Notification, vo::NotificationDraft},
};

/// Writes notifications. They are never deleted; reading them is the only change.
#[async_trait]
pub trait NotificationService: Send + Sync {
    async fn notify(&self, user_id: Uuid, draft: NotificationDraft) -> ServicingResult<Notification>;

    async fn notify_all(
        &self,
        drafts: Vec<(Uuid, NotificationDraft)>,
    ) -> ServicingResult<Vec<Notification>>;

    /// One copy per admin account.
    async fn notify_admins(&self, draft: NotificationDraft) -> ServicingResult<Vec<Notification>>;

    /// Addresses the technician's account; `None` when they have no account.
    async fn notify_technician(
        &self,
        technician_id: Uuid,
        draft: NotificationDraft,
    ) -> ServicingResult<Option<Notification>>;

    async fn mark_read(&self, notification_id: Uuid) -> ServicingResult<Notification>;

    async fn mark_all_read(&self, user_id: Uuid) -> ServicingResult<u64>;

    async fn unread_for(&self, user_id: Uuid) -> ServicingResult<Vec<Notification>>;

    async fn for_user(&self, user_id: Uuid) -> ServicingResult<Vec<Notification>>;
}
