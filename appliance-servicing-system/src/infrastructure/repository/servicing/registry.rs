use database_model::prelude::*;
use domain_servicing::{
    model::entity::{Appliance, ApplianceCategory, Client, Manufacturer, Technician},
    repository::ManufacturerRepo,
};
use sea_orm::{
    prelude::*,
    sea_query::{Expr, Func},
};

use crate::infrastructure::database::{orm::orm_repository, OrmRepo};

orm_repository!(Client, ClientEntity, ClientModel, "client");
orm_repository!(Appliance, ApplianceEntity, ApplianceModel, "appliance");
orm_repository!(
    ApplianceCategory,
    ApplianceCategoryEntity,
    ApplianceCategoryModel,
    "appliance_category"
);
orm_repository!(Manufacturer, ManufacturerEntity, ManufacturerModel, "manufacturer");
orm_repository!(Technician, TechnicianEntity, TechnicianModel, "technician");

#[async_trait::async_trait]
impl ManufacturerRepo for OrmRepo {
    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<Manufacturer>> {
        Ok(ManufacturerEntity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(ManufacturerColumn::Name)))
                    .eq(name.trim().to_lowercase()),
            )
            .one(self.connection())
            .await?
            .map(Manufacturer::from))
    }
}
