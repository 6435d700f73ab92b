use async_trait::async_trait;
use servicing_architecture::repository::DBRepository;

use crate::model::entity::Manufacturer;

#[async_trait]
pub trait ManufacturerRepo: DBRepository<Manufacturer> + Send + Sync {
    /// Case-insensitive lookup.
    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<Manufacturer>>;
}
