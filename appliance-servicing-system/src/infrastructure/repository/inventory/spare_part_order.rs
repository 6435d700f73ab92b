use database_model::prelude::*;
use domain_inventory::{model::entity::SparePartOrder, repository::SparePartOrderRepo};
use sea_orm::{prelude::*, ConnectionTrait, QueryOrder, QueryTrait, Set};
use servicing_architecture::repository::StaleVersion;

use crate::infrastructure::database::{orm::orm_repository, OrmRepo};

orm_repository!(
    SparePartOrder,
    SparePartOrderEntity,
    SparePartOrderModel,
    "spare_part_order"
);

#[async_trait::async_trait]
impl SparePartOrderRepo for OrmRepo {
    async fn update_versioned(&self, entity: &SparePartOrder) -> anyhow::Result<()> {
        let mut active = SparePartOrderModel::from(entity.to_owned()).into_set();
        active.version = Set(entity.version + 1);
        let stmt = SparePartOrderEntity::update_many()
            .set(active)
            .filter(SparePartOrderColumn::Id.eq(entity.id))
            .filter(SparePartOrderColumn::Version.eq(entity.version))
            .build(self.connection().get_database_backend());
        self.push_guarded(stmt, StaleVersion::new("spare part order", entity.id))
            .await;
        Ok(())
    }

    async fn get_active(&self) -> anyhow::Result<Vec<SparePartOrder>> {
        let res = SparePartOrderEntity::find()
            .filter(SparePartOrderColumn::RemovedFromOrderingAt.is_null())
            .order_by_asc(SparePartOrderColumn::CreatedAt)
            .all(self.connection())
            .await?;
        let mut r = vec![];
        for el in res.into_iter() {
            let order: SparePartOrder = el.try_into()?;
            if order.is_active() {
                r.push(order);
            }
        }
        Ok(r)
    }
}
