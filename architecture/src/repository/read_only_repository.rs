use uuid::Uuid;

use crate::model::AggregateRoot;

/// Read access to stored aggregates.
///
/// Every method has a default that reports the operation as unsupported, so an
/// implementor only writes what its callers need.
#[async_trait::async_trait]
pub trait ReadOnlyRepository<T>: Send + Sync
where
    T: AggregateRoot + Send + Sync + 'static,
{
    /// Looks an aggregate up by id, `None` when it does not exist.
    async fn find_by_id(&self, uuid: Uuid) -> anyhow::Result<Option<T>> {
        anyhow::bail!(
            "find_by_id({uuid}) is not supported for {}",
            std::any::type_name::<T>()
        )
    }

    /// Like [`ReadOnlyRepository::find_by_id`] but a missing row is an error.
    async fn get_by_id(&self, uuid: Uuid) -> anyhow::Result<T> {
        self.find_by_id(uuid).await?.ok_or_else(|| {
            anyhow::anyhow!("there is no {} with id {uuid}", std::any::type_name::<T>())
        })
    }

    async fn get_all(&self) -> anyhow::Result<Vec<T>> {
        anyhow::bail!("get_all is not supported for {}", std::any::type_name::<T>())
    }
}
