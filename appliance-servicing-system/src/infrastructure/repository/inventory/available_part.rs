use database_model::prelude::*;
use domain_inventory::{
    model::entity::{AvailablePart, PartKey},
    repository::AvailablePartRepo,
};
use sea_orm::{
    prelude::*, sea_query::Expr, ConnectionTrait, QueryOrder, QueryTrait, Select, Set,
};
use servicing_architecture::repository::StaleVersion;

use crate::infrastructure::database::{orm::orm_repository, OrmRepo};

orm_repository!(AvailablePart, AvailablePartEntity, AvailablePartModel, "available_part");

fn optional_eq(
    query: Select<AvailablePartEntity>,
    column: AvailablePartColumn,
    value: Option<Uuid>,
) -> Select<AvailablePartEntity> {
    match value {
        Some(id) => query.filter(column.eq(id)),
        None => query.filter(column.is_null()),
    }
}

#[async_trait::async_trait]
impl AvailablePartRepo for OrmRepo {
    async fn find_by_key(&self, key: &PartKey) -> anyhow::Result<Option<AvailablePart>> {
        let query = AvailablePartEntity::find().filter(AvailablePartColumn::IsActive.eq(true));
        let query = optional_eq(query, AvailablePartColumn::CategoryId, key.category_id);
        let query = optional_eq(query, AvailablePartColumn::ManufacturerId, key.manufacturer_id);
        let res = query
            .order_by_asc(AvailablePartColumn::AddedDate)
            .all(self.connection())
            .await?;
        for el in res.into_iter() {
            let part: AvailablePart = el.try_into()?;
            if part.key() == *key {
                return Ok(Some(part));
            }
        }
        Ok(None)
    }

    async fn get_active(&self) -> anyhow::Result<Vec<AvailablePart>> {
        let res = AvailablePartEntity::find()
            .filter(AvailablePartColumn::IsActive.eq(true))
            .order_by_asc(AvailablePartColumn::PartName)
            .all(self.connection())
            .await?;
        let mut r = vec![];
        for el in res.into_iter() {
            r.push(el.try_into()?);
        }
        Ok(r)
    }

    async fn update_versioned(&self, entity: &AvailablePart) -> anyhow::Result<()> {
        let mut active = AvailablePartModel::from(entity.to_owned()).into_set();
        active.version = Set(entity.version + 1);
        let stmt = AvailablePartEntity::update_many()
            .set(active)
            .filter(AvailablePartColumn::Id.eq(entity.id))
            .filter(AvailablePartColumn::Version.eq(entity.version))
            .build(self.connection().get_database_backend());
        self.push_guarded(stmt, StaleVersion::new("available part", entity.id))
            .await;
        Ok(())
    }

    async fn bump_version(&self, part_id: Uuid, expected_version: i32) -> anyhow::Result<()> {
        let stmt = AvailablePartEntity::update_many()
            .col_expr(
                AvailablePartColumn::Version,
                Expr::col(AvailablePartColumn::Version).add(1),
            )
            .filter(AvailablePartColumn::Id.eq(part_id))
            .filter(AvailablePartColumn::Version.eq(expected_version))
            .build(self.connection().get_database_backend());
        self.push_guarded(stmt, StaleVersion::new("available part", part_id))
            .await;
        Ok(())
    }
}
