use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use sea_orm::{ConnectionTrait, DatabaseConnection, Statement, TransactionTrait};
use servicing_architecture::repository::StaleVersion;
use servicing_infrastructure::data::Database;
use tokio::sync::Mutex;
use typed_builder::TypedBuilder;

/// A buffered write. A guarded write must change exactly one row, otherwise
/// the row moved on since it was read.
pub struct PendingStatement {
    stmt: Statement,
    guard: Option<StaleVersion>,
}

/// Repository over every table. Writes are buffered and run in one
/// transaction by [`OrmRepo::save_changed`].
#[derive(TypedBuilder)]
pub struct OrmRepo {
    pub db: Arc<Database>,
    #[builder(default)]
    pub statements: Arc<Mutex<Vec<PendingStatement>>>,
    #[builder(default = AtomicBool::new(true))]
    pub can_drop: AtomicBool,
}

impl OrmRepo {
    pub fn connection(&self) -> &DatabaseConnection {
        self.db.get_connection()
    }

    pub async fn push(&self, stmt: Statement) {
        self.enqueue(PendingStatement { stmt, guard: None }).await;
    }

    /// Buffers a compare-and-set write; the commit fails with `stale` when it
    /// touches no row.
    pub async fn push_guarded(&self, stmt: Statement, stale: StaleVersion) {
        self.enqueue(PendingStatement {
            stmt,
            guard: Some(stale),
        })
        .await;
    }

    async fn enqueue(&self, pending: PendingStatement) {
        self.statements.lock().await.push(pending);
        self.can_drop.store(false, Ordering::Relaxed);
    }

    pub async fn save_changed(&self) -> anyhow::Result<bool> {
        if !self.can_drop.load(Ordering::Relaxed) {
            let mut stmts = self.statements.lock().await;
            let trans = self.connection().begin().await?;
            for pending in stmts.iter() {
                let failure = match trans.execute(pending.stmt.clone()).await {
                    Ok(res) => match &pending.guard {
                        Some(stale) if res.rows_affected() != 1 => {
                            Some(anyhow::Error::from(stale.clone()))
                        }
                        _ => None,
                    },
                    Err(e) => Some(anyhow::Error::from(e)),
                };
                if let Some(e) = failure {
                    trans.rollback().await?;
                    stmts.clear();
                    self.can_drop.store(true, Ordering::Relaxed);
                    tracing::debug!("Rolled back buffered statements: {e}");
                    return Err(e);
                }
            }
            trans.commit().await?;
            self.can_drop.store(true, Ordering::Relaxed);
            stmts.clear();
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

impl Drop for OrmRepo {
    fn drop(&mut self) {
        if !self.can_drop.load(Ordering::Relaxed) {
            if let Ok(stmts) = self.statements.try_lock() {
                let sqls = stmts
                    .iter()
                    .map(|x| x.stmt.to_string())
                    .collect::<Vec<String>>()
                    .join("\n");
                tracing::warn!("Dropped uncommitted sql statements:\n{sqls}")
            }
        }
    }
}

/// Implements the plain read and buffered write side of a repository for
/// one aggregate.
macro_rules! orm_repository {
    ($aggregate:ty, $entity:ty, $model:ty, $name:literal) => {
        #[async_trait::async_trait]
        impl servicing_architecture::repository::ReadOnlyRepository<$aggregate>
            for $crate::infrastructure::database::OrmRepo
        {
            async fn find_by_id(&self, uuid: uuid::Uuid) -> anyhow::Result<Option<$aggregate>> {
                use sea_orm::EntityTrait;
                match <$entity>::find_by_id(uuid).one(self.connection()).await? {
                    Some(model) => {
                        let aggregate: $aggregate = model.try_into()?;
                        Ok(Some(aggregate))
                    }
                    None => Ok(None),
                }
            }

            async fn get_all(&self) -> anyhow::Result<Vec<$aggregate>> {
                use sea_orm::EntityTrait;
                let mut r = vec![];
                for model in <$entity>::find().all(self.connection()).await? {
                    let aggregate: $aggregate = model.try_into()?;
                    r.push(aggregate);
                }
                Ok(r)
            }
        }

        #[async_trait::async_trait]
        impl servicing_architecture::repository::MutableRepository<$aggregate>
            for $crate::infrastructure::database::OrmRepo
        {
            async fn insert(&self, entity: &$aggregate) -> anyhow::Result<uuid::Uuid> {
                use sea_orm::{ConnectionTrait, EntityTrait, QueryTrait};
                let stmt = <$entity>::insert(<$model>::from(entity.to_owned()).into_set())
                    .build(self.connection().get_database_backend());
                self.push(stmt).await;
                tracing::trace!(id = %entity.id, table = $name, "Insert buffered");
                Ok(entity.id)
            }

            async fn update(&self, entity: &$aggregate) -> anyhow::Result<()> {
                use sea_orm::{ConnectionTrait, EntityTrait, QueryTrait};
                let stmt = <$entity>::update(<$model>::from(entity.to_owned()).into_set())
                    .build(self.connection().get_database_backend());
                self.push(stmt).await;
                Ok(())
            }

            async fn save_changed(&self) -> anyhow::Result<bool> {
                self.save_changed().await
            }
        }

        impl servicing_architecture::repository::DBRepository<$aggregate>
            for $crate::infrastructure::database::OrmRepo
        {
        }
    };
}

pub(crate) use orm_repository;
