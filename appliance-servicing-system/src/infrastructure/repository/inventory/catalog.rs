use database_model::prelude::*;
use domain_inventory::{model::entity::SparePartCatalogEntry, repository::SparePartCatalogRepo};
use sea_orm::prelude::*;

use crate::infrastructure::database::{orm::orm_repository, OrmRepo};

orm_repository!(
    SparePartCatalogEntry,
    SparePartCatalogEntity,
    SparePartCatalogModel,
    "spare_part_catalog"
);

#[async_trait::async_trait]
impl SparePartCatalogRepo for OrmRepo {
    async fn find_by_part_number(
        &self,
        part_number: &str,
    ) -> anyhow::Result<Option<SparePartCatalogEntry>> {
        match SparePartCatalogEntity::find()
            .filter(SparePartCatalogColumn::PartNumber.eq(part_number.trim()))
            .one(self.connection())
            .await?
        {
            Some(model) => Ok(Some(model.try_into()?)),
            None => Ok(None),
        }
    }
}
