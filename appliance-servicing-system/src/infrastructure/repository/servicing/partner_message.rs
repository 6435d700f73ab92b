use database_model::prelude::*;
use domain_servicing::{
    model::{entity::PartnerMessage, vo::MessageStatus},
    repository::PartnerMessageRepo,
};
use sea_orm::{prelude::*, QueryOrder};

use crate::infrastructure::database::{orm::orm_repository, OrmRepo};

orm_repository!(
    PartnerMessage,
    BusinessPartnerMessageEntity,
    BusinessPartnerMessageModel,
    "business_partner_message"
);

#[async_trait::async_trait]
impl PartnerMessageRepo for OrmRepo {
    async fn get_by_partner(&self, partner_id: Uuid) -> anyhow::Result<Vec<PartnerMessage>> {
        let res = BusinessPartnerMessageEntity::find()
            .filter(BusinessPartnerMessageColumn::BusinessPartnerId.eq(partner_id))
            .order_by_desc(BusinessPartnerMessageColumn::CreatedAt)
            .all(self.connection())
            .await?;
        let mut r = vec![];
        for el in res.into_iter() {
            r.push(el.try_into()?);
        }
        Ok(r)
    }

    async fn get_by_status(
        &self,
        status: Option<MessageStatus>,
    ) -> anyhow::Result<Vec<PartnerMessage>> {
        let mut query = BusinessPartnerMessageEntity::find();
        if let Some(status) = status {
            query = query.filter(BusinessPartnerMessageColumn::Status.eq(status as i32));
        }
        let res = query
            .order_by_desc(BusinessPartnerMessageColumn::CreatedAt)
            .all(self.connection())
            .await?;
        let mut r = vec![];
        for el in res.into_iter() {
            r.push(el.try_into()?);
        }
        Ok(r)
    }
}
