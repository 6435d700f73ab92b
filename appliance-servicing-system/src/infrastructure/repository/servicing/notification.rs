use chrono::{DateTime, Utc};
use database_model::prelude::*;
use domain_servicing::{model::entity::Notification, repository::NotificationRepo};
use sea_orm::{prelude::*, sea_query::Expr, QueryOrder};

use crate::infrastructure::database::{orm::orm_repository, OrmRepo};

orm_repository!(Notification, NotificationEntity, NotificationModel, "notification");

#[async_trait::async_trait]
impl NotificationRepo for OrmRepo {
    async fn get_by_user(
        &self,
        user_id: Uuid,
        unread_only: bool,
    ) -> anyhow::Result<Vec<Notification>> {
        let mut query = NotificationEntity::find().filter(NotificationColumn::UserId.eq(user_id));
        if unread_only {
            query = query.filter(NotificationColumn::IsRead.eq(false));
        }
        let res = query
            .order_by_desc(NotificationColumn::CreatedAt)
            .all(self.connection())
            .await?;
        let mut r = vec![];
        for el in res.into_iter() {
            r.push(el.try_into()?);
        }
        Ok(r)
    }

    async fn mark_all_read(&self, user_id: Uuid, now: DateTime<Utc>) -> anyhow::Result<u64> {
        let res = NotificationEntity::update_many()
            .col_expr(NotificationColumn::IsRead, Expr::value(true))
            .col_expr(NotificationColumn::ReadAt, Expr::value(now))
            .filter(NotificationColumn::UserId.eq(user_id))
            .filter(NotificationColumn::IsRead.eq(false))
            .exec(self.connection())
            .await?;
        Ok(res.rows_affected)
    }
}
