use async_trait::async_trait;
use chrono::{DateTime, Utc};
use servicing_architecture::repository::DBRepository;
use uuid::Uuid;

use crate::model::entity::Notification;

#[async_trait]
pub trait NotificationRepo: DBRepository<Notification> + Send + Sync {
    /// Newest first.
    async fn get_by_user(&self, user_id: Uuid, unread_only: bool)
        -> anyhow::Result<Vec<Notification>>;

    /// Marks every unread notification of the user as read at `now`,
    /// returning how many changed.
    async fn mark_all_read(&self, user_id: Uuid, now: DateTime<Utc>) -> anyhow::Result<u64>;
}
