use async_trait::async_trait;
use servicing_architecture::repository::DBRepository;

use crate::model::entity::SparePartCatalogEntry;

#[async_trait]
pub trait SparePartCatalogRepo: DBRepository<SparePartCatalogEntry> + Send + Sync {
    async fn find_by_part_number(
        &self,
        part_number: &str,
    ) -> anyhow::Result<Option<SparePartCatalogEntry>>;
}
