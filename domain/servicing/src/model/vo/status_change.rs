use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use super::{
    Checker, MessageStatus, RemovedPartStatus, ServiceStatus, TextField, Validate, ValidationContext,
    ValidationResult,
};

/// A requested status change with the fields that accompany it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatusChange {
    pub target: ServiceStatus,
    /// The ticket version the caller last saw.
    pub expected_version: Option<i32>,
    pub scheduled_date: Option<NaiveDate>,
    pub completed_date: Option<NaiveDate>,
    pub technician_notes: Option<String>,
    pub cost: Option<String>,
    pub used_parts: Option<String>,
    pub machine_notes: Option<String>,
    pub is_completely_fixed: Option<bool>,
    pub client_unavailable_reason: Option<String>,
    pub rescheduling_notes: Option<String>,
    pub customer_refusal_reason: Option<String>,
    pub repair_failure_reason: Option<String>,
    pub replaced_parts_before_failure: Option<String>,
    pub pickup_date: Option<NaiveDate>,
    pub pickup_notes: Option<String>,
    /// Complete even though removed parts are still out.
    pub override_removed_parts: bool,
}

impl StatusChange {
    pub fn to(target: ServiceStatus) -> Self {
        Self {
            target,
            ..Default::default()
        }
    }
}

/// What the transition function needs to know beyond the ticket itself.
#[derive(Clone, Copy, Debug)]
pub struct TransitionContext {
    pub today: NaiveDate,
    /// Removed parts of the ticket still `removed` or `in_repair`.
    pub blocking_removed_parts: usize,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateTransitionError {
    #[error("A service cannot go from {from} to {to}.")]
    NotAllowed {
        from: ServiceStatus,
        to: ServiceStatus,
    },

    #[error("The service is {status}; reopen it before changing it.")]
    Closed { status: ServiceStatus },

    #[error("Moving a service to {to} requires {field}.")]
    MissingField {
        to: ServiceStatus,
        field: &'static str,
    },

    #[error("{count} removed part(s) are still out for this service.")]
    RemovedPartsOutstanding { count: usize },

    #[error("Only a closed service can be reopened, this one is {status}.")]
    NotClosed { status: ServiceStatus },

    #[error("A removed part cannot go from {from:?} to {to:?}.")]
    RemovedPartNotAllowed {
        from: RemovedPartStatus,
        to: RemovedPartStatus,
    },

    #[error("A partner message cannot go from {from:?} to {to:?}.")]
    MessageNotAllowed {
        from: MessageStatus,
        to: MessageStatus,
    },

    #[error("The service already has a completion report.")]
    AlreadyReported,
}

/// Raw status change as the api receives it.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct StatusChangeInput {
    pub status: Option<String>,
    pub expected_version: Option<i32>,
    pub scheduled_date: TextField,
    pub completed_date: TextField,
    pub technician_notes: TextField,
    pub cost: TextField,
    pub used_parts: TextField,
    pub machine_notes: TextField,
    pub is_completely_fixed: Option<bool>,
    pub client_unavailable_reason: TextField,
    pub rescheduling_notes: TextField,
    pub customer_refusal_reason: TextField,
    pub repair_failure_reason: TextField,
    pub replaced_parts_before_failure: TextField,
    pub pickup_date: TextField,
    pub pickup_notes: TextField,
    pub override_removed_parts: bool,
}

impl Validate for StatusChangeInput {
    type Output = StatusChange;

    fn validate(self, ctx: &ValidationContext) -> ValidationResult<StatusChange> {
        let mut c = Checker::new(ctx);
        let target = c.required_choice("status", self.status);
        let change = StatusChange {
            target,
            expected_version: self.expected_version,
            scheduled_date: c.optional_date("scheduledDate", self.scheduled_date),
            completed_date: c.optional_date("completedDate", self.completed_date),
            technician_notes: c.optional_text("technicianNotes", self.technician_notes, 0, 1000),
            cost: c.optional_text("cost", self.cost, 0, 50),
            used_parts: c.json_list("usedParts", self.used_parts, 1000),
            machine_notes: c.optional_text("machineNotes", self.machine_notes, 0, 500),
            is_completely_fixed: self.is_completely_fixed,
            client_unavailable_reason: c.optional_text(
                "clientUnavailableReason",
                self.client_unavailable_reason,
                0,
                500,
            ),
            rescheduling_notes: c.optional_text(
                "reschedulingNotes",
                self.rescheduling_notes,
                0,
                1000,
            ),
            customer_refusal_reason: c.optional_text(
                "customerRefusalReason",
                self.customer_refusal_reason,
                0,
                1000,
            ),
            repair_failure_reason: c.optional_text(
                "repairFailureReason",
                self.repair_failure_reason,
                0,
                1000,
            ),
            replaced_parts_before_failure: c.optional_text(
                "replacedPartsBeforeFailure",
                self.replaced_parts_before_failure,
                0,
                1000,
            ),
            pickup_date: c.optional_date("pickupDate", self.pickup_date),
            pickup_notes: c.optional_text("pickupNotes", self.pickup_notes, 0, 1000),
            override_removed_parts: self.override_removed_parts,
        };
        c.finish(change)
    }
}
