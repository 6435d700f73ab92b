use domain_servicing::{
    exception::{ErrorKind, ServicingException},
    model::vo::ValidationErrors,
};
use servicing_architecture::repository::StaleVersion;
use thiserror::Error;
use uuid::Uuid;

use crate::model::vo::InventoryTransitionError;

pub type InventoryResult<T> = Result<T, InventoryException>;

#[derive(Error, Debug)]
pub enum InventoryException {
    #[error("{0}")]
    Validation(ValidationErrors),

    #[error(transparent)]
    InvalidOrderTransition(#[from] InventoryTransitionError),

    #[error("Spare part order {order_id} already has a supplier order.")]
    DuplicateSupplierOrder { order_id: Uuid },

    #[error("Only {available} left in stock, {requested} requested.")]
    InsufficientStock { requested: i32, available: i32 },

    #[error("Part {id} is no longer stocked.")]
    InactivePart { id: Uuid },

    #[error("Supplier {id} is not active.")]
    InactiveSupplier { id: Uuid },

    #[error("There is no {entity} with id: {id}.")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("The {entity} with id: {id} was changed by someone else, reload and retry.")]
    ConcurrentModification { entity: &'static str, id: Uuid },

    #[error(transparent)]
    Servicing(#[from] ServicingException),

    #[error("Inventory internal error: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl InventoryException {
    pub fn status(&self) -> i32 {
        match self {
            InventoryException::Validation(_) => 200,
            InventoryException::InvalidOrderTransition(_) => 201,
            InventoryException::DuplicateSupplierOrder { .. } => 202,
            InventoryException::InsufficientStock { .. } => 203,
            InventoryException::InactivePart { .. } => 204,
            InventoryException::InactiveSupplier { .. } => 205,
            InventoryException::NotFound { .. } => 206,
            InventoryException::ConcurrentModification { .. } => 207,
            InventoryException::Servicing(e) => e.status(),
            InventoryException::InternalError { .. } => 500,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            InventoryException::Validation(_) => ErrorKind::Validation,
            InventoryException::InvalidOrderTransition(_)
            | InventoryException::DuplicateSupplierOrder { .. }
            | InventoryException::InsufficientStock { .. }
            | InventoryException::InactivePart { .. }
            | InventoryException::InactiveSupplier { .. }
            | InventoryException::ConcurrentModification { .. } => ErrorKind::Conflict,
            InventoryException::NotFound { .. } => ErrorKind::NotFound,
            InventoryException::Servicing(e) => e.kind(),
            InventoryException::InternalError { .. } => ErrorKind::Internal,
        }
    }

    pub fn not_found(entity: &'static str, id: Uuid) -> Self {
        InventoryException::NotFound { entity, id }
    }
}

impl From<ValidationErrors> for InventoryException {
    fn from(e: ValidationErrors) -> Self {
        InventoryException::Validation(e)
    }
}

impl From<anyhow::Error> for InventoryException {
    fn from(e: anyhow::Error) -> Self {
        match StaleVersion::find(&e) {
            Some(stale) => InventoryException::ConcurrentModification {
                entity: stale.entity,
                id: stale.id,
            },
            None => InventoryException::InternalError { source: e },
        }
    }
}
