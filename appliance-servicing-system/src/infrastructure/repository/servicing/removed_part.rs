use database_model::prelude::*;
use domain_servicing::{model::entity::RemovedPart, repository::RemovedPartRepo};
use sea_orm::{prelude::*, QueryOrder};

use crate::infrastructure::database::{orm::orm_repository, OrmRepo};

orm_repository!(RemovedPart, RemovedPartEntity, RemovedPartModel, "removed_part");

#[async_trait::async_trait]
impl RemovedPartRepo for OrmRepo {
    async fn get_by_service(&self, service_id: Uuid) -> anyhow::Result<Vec<RemovedPart>> {
        let res = RemovedPartEntity::find()
            .filter(RemovedPartColumn::ServiceId.eq(service_id))
            .order_by_asc(RemovedPartColumn::RemovalDate)
            .all(self.connection())
            .await?;
        let mut r = vec![];
        for el in res.into_iter() {
            r.push(el.try_into()?);
        }
        Ok(r)
    }
}
