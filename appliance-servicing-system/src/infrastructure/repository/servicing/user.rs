use database_model::prelude::*;
use domain_servicing::{
    model::{entity::User, vo::UserRole},
    repository::UserRepo,
};
use sea_orm::prelude::*;

use crate::infrastructure::database::{orm::orm_repository, OrmRepo};

orm_repository!(User, UserEntity, UserModel, "user");

#[async_trait::async_trait]
impl UserRepo for OrmRepo {
    async fn get_by_role(&self, role: UserRole) -> anyhow::Result<Vec<User>> {
        let res = UserEntity::find()
            .filter(UserColumn::Role.eq(role as i32))
            .all(self.connection())
            .await?;
        let mut r = vec![];
        for el in res.into_iter() {
            r.push(el.try_into()?);
        }
        Ok(r)
    }

    async fn get_by_technician_id(&self, technician_id: Uuid) -> anyhow::Result<Option<User>> {
        match UserEntity::find()
            .filter(UserColumn::TechnicianId.eq(technician_id))
            .one(self.connection())
            .await?
        {
            Some(model) => Ok(Some(model.try_into()?)),
            None => Ok(None),
        }
    }
}
