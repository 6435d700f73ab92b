use actix_web::{
    get, post,
    web::{Data, Json, Path, Query},
};
use domain_servicing::model::entity::{
    PartnerMessage, PartnerMessageInput, PartnerMessageReplyInput,
};

use super::{
    dtos::{MessageFilterDto, StarDto},
    extract_message_status, extract_uuid, ok, ApiResult,
};
use crate::infrastructure::ServiceProvider;

#[post("partner-messages")]
pub async fn send_message(
    sp: Data<ServiceProvider>,
    input: Json<PartnerMessageInput>,
) -> ApiResult<PartnerMessage> {
    ok(sp.scoped().partner_messages.send_message(input.into_inner()).await?)
}

/// `?status=unread` narrows the list.
#[get("partner-messages")]
pub async fn list_messages(
    sp: Data<ServiceProvider>,
    filter: Query<MessageFilterDto>,
) -> ApiResult<Vec<PartnerMessage>> {
    let status = match filter.status.as_deref() {
        Some(s) => Some(extract_message_status(s)?),
        None => None,
    };
    ok(sp.scoped().partner_messages.list_messages(status).await?)
}

#[get("users/{id}/partner-messages")]
pub async fn messages_of_partner(
    sp: Data<ServiceProvider>,
    id: Path<String>,
) -> ApiResult<Vec<PartnerMessage>> {
    let partner_id = extract_uuid(&id)?;
    ok(sp.scoped().partner_messages.messages_of_partner(partner_id).await?)
}

#[post("partner-messages/{id}/read")]
pub async fn mark_message_read(
    sp: Data<ServiceProvider>,
    id: Path<String>,
) -> ApiResult<PartnerMessage> {
    let id = extract_uuid(&id)?;
    ok(sp.scoped().partner_messages.mark_message_read(id).await?)
}

#[post("partner-messages/{id}/reply")]
pub async fn reply_to_message(
    sp: Data<ServiceProvider>,
    id: Path<String>,
    input: Json<PartnerMessageReplyInput>,
) -> ApiResult<PartnerMessage> {
    let id = extract_uuid(&id)?;
    ok(sp
        .scoped()
        .partner_messages
        .reply_to_message(id, input.into_inner())
        .await?)
}

#[post("partner-messages/{id}/archive")]
pub async fn archive_message(
    sp: Data<ServiceProvider>,
    id: Path<String>,
) -> ApiResult<PartnerMessage> {
    let id = extract_uuid(&id)?;
    ok(sp.scoped().partner_messages.archive_message(id).await?)
}

#[post("partner-messages/{id}/star")]
pub async fn star_message(
    sp: Data<ServiceProvider>,
    id: Path<String>,
    dto: Json<StarDto>,
) -> ApiResult<PartnerMessage> {
    let id = extract_uuid(&id)?;
    ok(sp.scoped().partner_messages.star_message(id, dto.starred).await?)
}
