use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    exception::ServicingResult,
    model::entity::{RemovedPart, RemovedPartInput, RemovedPartStatusChangeInput},
};

#[async_trait]
pub trait RemovedPartService: Send + Sync {
    async fn register_removed_part(&self, input: RemovedPartInput) -> ServicingResult<RemovedPart>;

    async fn change_removed_part_status(
        &self,
        part_id: Uuid,
        input: RemovedPartStatusChangeInput,
    ) -> ServicingResult<RemovedPart>;

    async fn list_for_service(&self, service_id: Uuid) -> ServicingResult<Vec<RemovedPart>>;
}
