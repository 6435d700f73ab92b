use async_trait::async_trait;

use crate::{
    exception::InventoryResult,
    model::entity::{CatalogEntryInput, SparePartCatalogEntry},
};

#[async_trait]
pub trait PartsCatalogService: Send + Sync {
    /// Part numbers are unique in the catalog.
    async fn add_entry(&self, input: CatalogEntryInput) -> InventoryResult<SparePartCatalogEntry>;
    async fn find_by_part_number(&self, part_number: &str)
        -> InventoryResult<Option<SparePartCatalogEntry>>;
}
