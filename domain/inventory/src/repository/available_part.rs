use async_trait::async_trait;
use servicing_architecture::repository::DBRepository;
use uuid::Uuid;

use crate::model::entity::{AvailablePart, PartKey};

#[async_trait]
pub trait AvailablePartRepo: DBRepository<AvailablePart> + Send + Sync {
    /// The active stock line with this key.
    async fn find_by_key(&self, key: &PartKey) -> anyhow::Result<Option<AvailablePart>>;

    async fn get_active(&self) -> anyhow::Result<Vec<AvailablePart>>;

    /// Buffers a write of the part, bumping its version. The commit fails with
    /// [`StaleVersion`] when the stored version is no longer `entity.version`.
    ///
    /// [`StaleVersion`]: servicing_architecture::repository::StaleVersion
    async fn update_versioned(&self, entity: &AvailablePart) -> anyhow::Result<()>;

    /// Compare-and-set on the version alone, committed with the rest of the
    /// batch; serializes writers of one part.
    async fn bump_version(&self, part_id: Uuid, expected_version: i32) -> anyhow::Result<()>;
}
