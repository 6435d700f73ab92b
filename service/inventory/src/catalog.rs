use std::sync::Arc;

use async_trait::async_trait;
use domain_inventory::{
    exception::InventoryResult,
    model::entity::{CatalogEntryInput, SparePartCatalogEntry},
    repository::SparePartCatalogRepo,
    service::PartsCatalogService,
};
use domain_servicing::model::vo::{Clock, SystemClock, Validate, ValidationContext, ValidationErrors};
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct PartsCatalogServiceImpl {
    catalog_repo: Arc<dyn SparePartCatalogRepo>,
    #[builder(default = Arc::new(SystemClock))]
    clock: Arc<dyn Clock>,
}

#[async_trait]
impl PartsCatalogService for PartsCatalogServiceImpl {
    async fn add_entry(&self, input: CatalogEntryInput) -> InventoryResult<SparePartCatalogEntry> {
        let entry = input.validate(&ValidationContext::on(self.clock.today()))?;
        if self
            .catalog_repo
            .find_by_part_number(&entry.part_number)
            .await?
            .is_some()
        {
            return Err(ValidationErrors::single(
                "partNumber",
                format!("Part number {} is already in the catalog", entry.part_number),
            )
            .into());
        }
        self.catalog_repo.insert(&entry).await?;
        self.catalog_repo.save_changed().await?;
        if entry.is_below_minimum() {
            tracing::warn!(part_number = %entry.part_number, "Catalog entry starts below its minimum stock");
        }
        Ok(entry)
    }

    async fn find_by_part_number(
        &self,
        part_number: &str,
    ) -> InventoryResult<Option<SparePartCatalogEntry>> {
        Ok(self.catalog_repo.find_by_part_number(part_number.trim()).await?)
    }
}
