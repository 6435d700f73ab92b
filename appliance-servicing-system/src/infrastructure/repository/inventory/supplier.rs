use database_model::prelude::*;
use domain_inventory::{
    model::entity::{Supplier, SupplierOrder},
    repository::{SupplierOrderRepo, SupplierRepo},
};
use sea_orm::{prelude::*, QueryOrder};

use crate::infrastructure::database::{orm::orm_repository, OrmRepo};

orm_repository!(Supplier, SupplierEntity, SupplierModel, "supplier");
orm_repository!(SupplierOrder, SupplierOrderEntity, SupplierOrderModel, "supplier_order");

#[async_trait::async_trait]
impl SupplierRepo for OrmRepo {
    async fn get_active(&self) -> anyhow::Result<Vec<Supplier>> {
        let res = SupplierEntity::find()
            .filter(SupplierColumn::IsActive.eq(true))
            .order_by_asc(SupplierColumn::Priority)
            .order_by_asc(SupplierColumn::Name)
            .all(self.connection())
            .await?;
        let mut r = vec![];
        for el in res.into_iter() {
            r.push(el.try_into()?);
        }
        Ok(r)
    }
}

#[async_trait::async_trait]
impl SupplierOrderRepo for OrmRepo {
    async fn find_by_spare_part_order(
        &self,
        spare_part_order_id: Uuid,
    ) -> anyhow::Result<Option<SupplierOrder>> {
        match SupplierOrderEntity::find()
            .filter(SupplierOrderColumn::SparePartOrderId.eq(spare_part_order_id))
            .one(self.connection())
            .await?
        {
            Some(model) => Ok(Some(model.try_into()?)),
            None => Ok(None),
        }
    }
}
