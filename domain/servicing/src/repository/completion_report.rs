use async_trait::async_trait;
use servicing_architecture::repository::DBRepository;
use uuid::Uuid;

use crate::model::entity::ServiceCompletionReport;

#[async_trait]
pub trait ServiceCompletionReportRepo: DBRepository<ServiceCompletionReport> + Send + Sync {
    async fn get_by_service(
        &self,
        service_id: Uuid,
    ) -> anyhow::Result<Option<ServiceCompletionReport>>;
}
