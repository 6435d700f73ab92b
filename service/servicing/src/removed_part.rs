use std::sync::Arc;

use async_trait::async_trait;
use domain_servicing::{
    exception::{ServicingException, ServicingResult},
    model::{
        entity::{RemovedPart, RemovedPartInput, RemovedPartStatusChangeInput},
        vo::{Clock, SystemClock, Validate, ValidationContext},
    },
    repository::{RemovedPartRepo, ServiceTicketRepo},
    service::RemovedPartService,
};
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct RemovedPartServiceImpl {
    removed_part_repo: Arc<dyn RemovedPartRepo>,
    service_repo: Arc<dyn ServiceTicketRepo>,
    #[builder(default = Arc::new(SystemClock))]
    clock: Arc<dyn Clock>,
}

#[async_trait]
impl RemovedPartService for RemovedPartServiceImpl {
    async fn register_removed_part(&self, input: RemovedPartInput) -> ServicingResult<RemovedPart> {
        let part = input.validate(&ValidationContext::on(self.clock.today()))?;
        self.service_repo
            .find_by_id(part.service_id)
            .await?
            .ok_or(ServicingException::not_found("service", part.service_id))?;
        self.removed_part_repo.insert(&part).await?;
        self.removed_part_repo.save_changed().await?;
        tracing::info!(part_id = %part.id, service_id = %part.service_id, "Removed part registered");
        Ok(part)
    }

    async fn change_removed_part_status(
        &self,
        part_id: Uuid,
        input: RemovedPartStatusChangeInput,
    ) -> ServicingResult<RemovedPart> {
        let today = self.clock.today();
        let change = input.validate(&ValidationContext::on(today))?;
        let part = self
            .removed_part_repo
            .find_by_id(part_id)
            .await?
            .ok_or(ServicingException::not_found("removed part", part_id))?;
        let next = part.change_status(&change, today)?;
        self.removed_part_repo.update(&next).await?;
        self.removed_part_repo.save_changed().await?;
        tracing::info!(
            part_id = %part_id,
            from = ?part.part_status,
            to = ?next.part_status,
            "Removed part status changed"
        );
        Ok(next)
    }

    async fn list_for_service(&self, service_id: Uuid) -> ServicingResult<Vec<RemovedPart>> {
        Ok(self.removed_part_repo.get_by_service(service_id).await?)
    }
}
