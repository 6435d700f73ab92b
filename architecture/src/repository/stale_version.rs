use thiserror::Error;
use uuid::Uuid;

/// A versioned write found the stored row at another version than the one it
/// was read at. Committing such a batch rolls all of it back.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{entity} {id} was changed since it was read")]
pub struct StaleVersion {
    pub entity: &'static str,
    pub id: Uuid,
}

impl StaleVersion {
    pub fn new(entity: &'static str, id: Uuid) -> Self {
        Self { entity, id }
    }

    /// Finds a stale version anywhere in the error chain.
    pub fn find(error: &anyhow::Error) -> Option<&StaleVersion> {
        error.chain().find_map(|e| e.downcast_ref::<StaleVersion>())
    }
}
