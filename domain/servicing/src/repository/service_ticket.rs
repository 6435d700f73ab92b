use async_trait::async_trait;
use chrono::NaiveDate;
use servicing_architecture::repository::DBRepository;

use crate::model::{entity::ServiceTicket, vo::ServiceStatus};

#[async_trait]
pub trait ServiceTicketRepo: DBRepository<ServiceTicket> + Send + Sync {
    /// Buffers a write of the ticket that bumps its version by one.
    ///
    /// `save_changed` fails with a [`StaleVersion`] when another writer got
    /// there first, and nothing of the batch is kept.
    ///
    /// [`StaleVersion`]: servicing_architecture::repository::StaleVersion
    async fn update_versioned(&self, entity: &ServiceTicket) -> anyhow::Result<()>;

    async fn get_by_status(&self, status: ServiceStatus) -> anyhow::Result<Vec<ServiceTicket>>;

    /// Tickets whose completed date falls in `from..=to`.
    async fn get_completed_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> anyhow::Result<Vec<ServiceTicket>>;
}
