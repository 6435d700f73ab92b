use std::sync::Arc;

use async_trait::async_trait;
use domain_servicing::{
    exception::{ServicingException, ServicingResult},
    model::{
        entity::Notification,
        vo::{Clock, NotificationDraft, SystemClock, UserRole},
    },
    repository::{NotificationRepo, UserRepo},
    service::NotificationService,
};
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct NotificationServiceImpl {
    notification_repo: Arc<dyn NotificationRepo>,
    user_repo: Arc<dyn UserRepo>,
    #[builder(default = Arc::new(SystemClock))]
    clock: Arc<dyn Clock>,
}

#[async_trait]
impl NotificationService for NotificationServiceImpl {
    async fn notify(&self, user_id: Uuid, draft: NotificationDraft) -> ServicingResult<Notification> {
        let mut sent = self.notify_all(vec![(user_id, draft)]).await?;
        sent.pop().ok_or(ServicingException::InternalError {
            source: anyhow::anyhow!("notification for user {user_id} was not stored"),
        })
    }

    async fn notify_all(
        &self,
        drafts: Vec<(Uuid, NotificationDraft)>,
    ) -> ServicingResult<Vec<Notification>> {
        if drafts.is_empty() {
            return Ok(vec![]);
        }
        let now = self.clock.now();
        let notifications = drafts
            .into_iter()
            .map(|(user_id, draft)| Notification::from_draft(user_id, draft, now))
            .collect::<Vec<_>>();
        self.notification_repo
            .insert_list(&notifications.iter().collect::<Vec<_>>())
            .await?;
        self.notification_repo.save_changed().await?;
        tracing::debug!(count = notifications.len(), "Notifications stored");
        Ok(notifications)
    }

    async fn notify_admins(&self, draft: NotificationDraft) -> ServicingResult<Vec<Notification>> {
        let admins = self.user_repo.get_by_role(UserRole::Admin).await?;
        if admins.is_empty() {
            tracing::warn!(kind = ?draft.kind, "No admin account to notify");
        }
        self.notify_all(admins.into_iter().map(|admin| (admin.id, draft.clone())).collect())
            .await
    }

    async fn notify_technician(
        &self,
        technician_id: Uuid,
        draft: NotificationDraft,
    ) -> ServicingResult<Option<Notification>> {
        match self.user_repo.get_by_technician_id(technician_id).await? {
            Some(user) => Ok(Some(self.notify(user.id, draft).await?)),
            None => {
                tracing::debug!(%technician_id, "Technician has no account, notification skipped");
                Ok(None)
            }
        }
    }

    async fn mark_read(&self, notification_id: Uuid) -> ServicingResult<Notification> {
        let mut notification = self
            .notification_repo
            .find_by_id(notification_id)
            .await?
            .ok_or(ServicingException::not_found("notification", notification_id))?;
        if notification.mark_read(self.clock.now()) {
            self.notification_repo.update(&notification).await?;
            self.notification_repo.save_changed().await?;
        }
        Ok(notification)
    }

    async fn mark_all_read(&self, user_id: Uuid) -> ServicingResult<u64> {
        Ok(self.notification_repo.mark_all_read(user_id, self.clock.now()).await?)
    }

    async fn unread_for(&self, user_id: Uuid) -> ServicingResult<Vec<Notification>> {
        Ok(self.notification_repo.get_by_user(user_id, true).await?)
    }

    async fn for_user(&self, user_id: Uuid) -> ServicingResult<Vec<Notification>> {
        Ok(self.notification_repo.get_by_user(user_id, false).await?)
    }
}
