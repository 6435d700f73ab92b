use servicing_architecture::repository::StaleVersion;
use thiserror::Error;
use uuid::Uuid;

use crate::model::vo::{StateTransitionError, ValidationErrors};

pub type ServicingResult<T> = Result<T, ServicingException>;

/// Coarse classes of failure, as the api reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Conflict,
    NotFound,
    Internal,
}

#[derive(Error, Debug)]
pub enum ServicingException {
    #[error("{0}")]
    Validation(ValidationErrors),

    #[error(transparent)]
    StateTransition(#[from] StateTransitionError),

    #[error("There is no {entity} with id: {id}.")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("The {entity} with id: {id} was changed by someone else, reload and retry.")]
    ConcurrentModification { entity: &'static str, id: Uuid },

    #[error("Technician {id} is not active.")]
    InactiveTechnician { id: Uuid },

    #[error("The appliance {appliance_id} does not belong to client {client_id}.")]
    ApplianceOwnerMismatch { appliance_id: Uuid, client_id: Uuid },

    #[error("Servicing internal error: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl ServicingException {
    /// Numeric code carried by the response envelope.
    pub fn status(&self) -> i32 {
        match self {
            ServicingException::Validation(_) => 100,
            ServicingException::StateTransition(_) => 101,
            ServicingException::NotFound { .. } => 102,
            ServicingException::ConcurrentModification { .. } => 103,
            ServicingException::InactiveTechnician { .. } => 104,
            ServicingException::ApplianceOwnerMismatch { .. } => 105,
            ServicingException::InternalError { .. } => 500,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ServicingException::Validation(_) | ServicingException::ApplianceOwnerMismatch { .. } => {
                ErrorKind::Validation
            }
            ServicingException::StateTransition(_)
            | ServicingException::ConcurrentModification { .. }
            | ServicingException::InactiveTechnician { .. } => ErrorKind::Conflict,
            ServicingException::NotFound { .. } => ErrorKind::NotFound,
            ServicingException::InternalError { .. } => ErrorKind::Internal,
        }
    }

    pub fn not_found(entity: &'static str, id: Uuid) -> Self {
        ServicingException::NotFound { entity, id }
    }
}

impl From<ValidationErrors> for ServicingException {
    fn from(e: ValidationErrors) -> Self {
        ServicingException::Validation(e)
    }
}

impl From<anyhow::Error> for ServicingException {
    fn from(e: anyhow::Error) -> Self {
        match StaleVersion::find(&e) {
            Some(stale) => ServicingException::ConcurrentModification {
                entity: stale.entity,
                id: stale.id,
            },
            None => ServicingException::InternalError { source: e },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::vo::ServiceStatus;

    #[test]
    fn test_kinds() {
        let e: ServicingException = ValidationErrors::single("phone", "phone is required").into();
        assert_eq!(e.kind(), ErrorKind::Validation);
        assert_eq!(e.to_string(), "Invalid input: phone is required");

        let e: ServicingException = StateTransitionError::Closed {
            status: ServiceStatus::Cancelled,
        }
        .into();
        assert_eq!(e.kind(), ErrorKind::Conflict);
        assert_eq!(e.status(), 101);

        let e: ServicingException = anyhow::anyhow!("connection reset").into();
        assert_eq!(e.kind(), ErrorKind::Internal);
        assert_eq!(ServicingException::not_found("client", Uuid::nil()).kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_stale_commit_is_a_conflict() {
        let id = Uuid::new_v4();
        let e: ServicingException = anyhow::Error::from(StaleVersion::new("service", id)).into();
        assert_eq!(e.kind(), ErrorKind::Conflict);
        assert_eq!(
            e.to_string(),
            format!("The service with id: {id} was changed by someone else, reload and retry.")
        );
    }
}
