use database_model::prelude::*;
use domain_servicing::{
    model::entity::ServiceCompletionReport, repository::ServiceCompletionReportRepo,
};
use sea_orm::prelude::*;

use crate::infrastructure::database::{orm::orm_repository, OrmRepo};

orm_repository!(
    ServiceCompletionReport,
    ServiceCompletionReportEntity,
    ServiceCompletionReportModel,
    "service_completion_report"
);

#[async_trait::async_trait]
impl ServiceCompletionReportRepo for OrmRepo {
    async fn get_by_service(
        &self,
        service_id: Uuid,
    ) -> anyhow::Result<Option<ServiceCompletionReport>> {
        let res = ServiceCompletionReportEntity::find()
            .filter(ServiceCompletionReportColumn::ServiceId.eq(service_id))
            .one(self.connection())
            .await?;
        match res {
            Some(model) => Ok(Some(model.try_into()?)),
            None => Ok(None),
        }
    }
}
