use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How a visit or repair ended when it did not simply succeed.
///
/// A ticket carries at most one of these; entering a new outcome status
/// replaces the previous one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum ServiceOutcome {
    ClientUnavailable {
        reason: String,
        needs_rescheduling: bool,
        rescheduling_notes: Option<String>,
    },
    CustomerRefusal {
        reason: String,
    },
    RepairFailure {
        reason: String,
        replaced_parts_before_failure: Option<String>,
        failure_date: NaiveDate,
    },
}

impl ServiceOutcome {
    /// Outcomes that a later visit undoes.
    pub fn is_provisional(&self) -> bool {
        matches!(
            self,
            ServiceOutcome::ClientUnavailable { .. } | ServiceOutcome::CustomerRefusal { .. }
        )
    }
}

/// The device left the client's premises or was handed back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevicePickup {
    pub picked_up: bool,
    pub pickup_date: Option<NaiveDate>,
    pub pickup_notes: Option<String>,
}
