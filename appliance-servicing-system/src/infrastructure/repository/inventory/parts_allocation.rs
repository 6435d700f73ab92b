use database_model::prelude::*;
use domain_inventory::{
    model::entity::{PartsActivityLog, PartsAllocation},
    repository::{PartsActivityLogRepo, PartsAllocationRepo},
};
use sea_orm::{prelude::*, QueryOrder};

use crate::infrastructure::database::{orm::orm_repository, OrmRepo};

orm_repository!(
    PartsAllocation,
    PartsAllocationEntity,
    PartsAllocationModel,
    "parts_allocation"
);
orm_repository!(
    PartsActivityLog,
    PartsActivityLogEntity,
    PartsActivityLogModel,
    "parts_activity_log"
);

#[async_trait::async_trait]
impl PartsAllocationRepo for OrmRepo {
    async fn get_by_part(&self, part_id: Uuid) -> anyhow::Result<Vec<PartsAllocation>> {
        let res = PartsAllocationEntity::find()
            .filter(PartsAllocationColumn::AvailablePartId.eq(part_id))
            .order_by_asc(PartsAllocationColumn::AllocatedDate)
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
impl PartsActivityLogRepo for OrmRepo {
    async fn get_by_part(&self, part_id: Uuid) -> anyhow::Result<Vec<PartsActivityLog>> {
        let res = PartsActivityLogEntity::find()
            .filter(PartsActivityLogColumn::PartId.eq(part_id))
            .order_by_asc(PartsActivityLogColumn::Timestamp)
            .all(self.connection())
            .await?;
        let mut r = vec![];
        for el in res.into_iter() {
            r.push(el.try_into()?);
        }
        Ok(r)
    }
}
