//! Repository abstractions shared by every domain.
crate::make_re_export!(mutable_repository, read_only_repository, stale_version);

use crate::model::AggregateRoot;

/// A repository backed by a database, readable and writable.
pub trait DBRepository<T>: ReadOnlyRepository<T> + MutableRepository<T>
where
    T: AggregateRoot + Send + Sync + 'static,
{
}
