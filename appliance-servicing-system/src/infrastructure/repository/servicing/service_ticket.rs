use chrono::NaiveDate;
use database_model::prelude::*;
use domain_servicing::{
    model::{entity::ServiceTicket, vo::ServiceStatus},
    repository::ServiceTicketRepo,
};
use sea_orm::{prelude::*, ConnectionTrait, QueryOrder, QueryTrait, Set};
use servicing_architecture::repository::StaleVersion;

use crate::infrastructure::database::{orm::orm_repository, OrmRepo};

orm_repository!(ServiceTicket, ServiceEntity, ServiceModel, "service");

#[async_trait::async_trait]
impl ServiceTicketRepo for OrmRepo {
    async fn update_versioned(&self, entity: &ServiceTicket) -> anyhow::Result<()> {
        let mut active = ServiceModel::from(entity.to_owned()).into_set();
        active.version = Set(entity.version + 1);
        let stmt = ServiceEntity::update_many()
            .set(active)
            .filter(ServiceColumn::Id.eq(entity.id))
            .filter(ServiceColumn::Version.eq(entity.version))
            .build(self.connection().get_database_backend());
        self.push_guarded(stmt, StaleVersion::new("service", entity.id))
            .await;
        Ok(())
    }

    async fn get_by_status(&self, status: ServiceStatus) -> anyhow::Result<Vec<ServiceTicket>> {
        let res = ServiceEntity::find()
            .filter(ServiceColumn::Status.eq(status as i32))
            .order_by_asc(ServiceColumn::CreatedAt)
            .all(self.connection())
            .await?;
        let mut r = vec![];
        for el in res.into_iter() {
            r.push(el.try_into()?);
        }
        Ok(r)
    }

    async fn get_completed_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> anyhow::Result<Vec<ServiceTicket>> {
        let res = ServiceEntity::find()
            .filter(ServiceColumn::CompletedDate.between(from, to))
            .order_by_asc(ServiceColumn::CompletedDate)
            .all(self.connection())
            .await?;
        let mut r = vec![];
        for el in res.into_iter() {
            r.push(el.try_into()?);
        }
        Ok(r)
    }
}
