use async_trait::async_trait;
use servicing_architecture::repository::DBRepository;
use uuid::Uuid;

use crate::model::{entity::User, vo::UserRole};

#[async_trait]
pub trait UserRepo: DBRepository<User> + Send + Sync {
    async fn get_by_role(&self, role: UserRole) -> anyhow::Result<Vec<User>>;

    /// The account a technician logs in with, if they have one.
    async fn get_by_technician_id(&self, technician_id: Uuid) -> anyhow::Result<Option<User>>;
}
