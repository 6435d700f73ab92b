use actix_web::{
    get, post,
    web::{Data, Path},
};
use domain_servicing::model::entity::Notification;

use super::{extract_uuid, ok, ApiResult};
use crate::infrastructure::ServiceProvider;

#[get("users/{id}/notifications/unread")]
pub async fn unread_notifications(
    sp: Data<ServiceProvider>,
    id: Path<String>,
) -> ApiResult<Vec<Notification>> {
    let user_id = extract_uuid(&id)?;
    ok(sp.scoped().notifications.unread_for(user_id).await?)
}

#[post("notifications/{id}/read")]
pub async fn mark_read(sp: Data<ServiceProvider>, id: Path<String>) -> ApiResult<Notification> {
    let id = extract_uuid(&id)?;
    ok(sp.scoped().notifications.mark_read(id).await?)
}

/// Answers with the number of notifications marked.
#[post("users/{id}/notifications/read")]
pub async fn mark_all_read(sp: Data<ServiceProvider>, id: Path<String>) -> ApiResult<u64> {
    let user_id = extract_uuid(&id)?;
    ok(sp.scoped().notifications.mark_all_read(user_id).await?)
}
