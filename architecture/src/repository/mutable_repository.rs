use uuid::Uuid;

use crate::model::AggregateRoot;

/// Write access to stored aggregates.
///
/// Writes may be buffered until [`MutableRepository::save_changed`] commits them.
#[async_trait::async_trait]
pub trait MutableRepository<T>: Send + Sync
where
    T: AggregateRoot + Send + Sync + 'static,
{
    /// Inserts the aggregate and returns its id.
    async fn insert(&self, _entity: &T) -> anyhow::Result<Uuid> {
        anyhow::bail!("insert is not supported for {}", std::any::type_name::<T>())
    }

    async fn insert_list(&self, entities: &[&T]) -> anyhow::Result<Vec<Uuid>> {
        let mut ids = Vec::with_capacity(entities.len());
        for entity in entities {
            ids.push(self.insert(entity).await?);
        }
        Ok(ids)
    }

    /// Overwrites the stored aggregate with the same id.
    async fn update(&self, _entity: &T) -> anyhow::Result<()> {
        anyhow::bail!("update is not supported for {}", std::any::type_name::<T>())
    }

    /// Commits buffered writes. Returns `false` when there was nothing to commit.
    async fn save_changed(&self) -> anyhow::Result<bool> {
        Ok(true)
    }
}
