use std::fmt;

use num_derive::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};

/// Where a repair ticket stands.
#[derive(
    FromPrimitive, ToPrimitive, Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    /// Opened, nobody has looked at it yet.
    #[default]
    Pending,
    /// A visit date is set.
    Scheduled,
    /// The technician is working on it.
    InProgress,
    /// Blocked on a spare part order.
    WaitingParts,
    /// Parts were taken off the device for workshop repair.
    DevicePartsRemoved,
    /// Repaired.
    Completed,
    /// Handed back to the client after the repair.
    Delivered,
    /// Handed back without a (successful) repair.
    DeviceReturned,
    Cancelled,
    ClientNotHome,
    ClientNotAnswering,
    /// The client declines the offered repair, may still change their mind.
    CustomerRefusesRepair,
    /// The refusal is final.
    CustomerRefusedRepair,
    RepairFailed,
}

impl ServiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceStatus::Pending => "pending",
            ServiceStatus::Scheduled => "scheduled",
            ServiceStatus::InProgress => "in_progress",
            ServiceStatus::WaitingParts => "waiting_parts",
            ServiceStatus::DevicePartsRemoved => "device_parts_removed",
            ServiceStatus::Completed => "completed",
            ServiceStatus::Delivered => "delivered",
            ServiceStatus::DeviceReturned => "device_returned",
            ServiceStatus::Cancelled => "cancelled",
            ServiceStatus::ClientNotHome => "client_not_home",
            ServiceStatus::ClientNotAnswering => "client_not_answering",
            ServiceStatus::CustomerRefusesRepair => "customer_refuses_repair",
            ServiceStatus::CustomerRefusedRepair => "customer_refused_repair",
            ServiceStatus::RepairFailed => "repair_failed",
        }
    }

    /// Closed tickets; only an explicit reopen leaves these.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ServiceStatus::Delivered | ServiceStatus::DeviceReturned | ServiceStatus::Cancelled
        )
    }

    pub fn allowed_targets(&self) -> &'static [ServiceStatus] {
        use ServiceStatus::*;
        match self {
            Pending => &[Scheduled, Cancelled],
            Scheduled => &[Scheduled, InProgress, ClientNotHome, ClientNotAnswering, Cancelled],
            InProgress => &[
                Completed,
                WaitingParts,
                DevicePartsRemoved,
                RepairFailed,
                CustomerRefusesRepair,
                ClientNotHome,
                ClientNotAnswering,
                Cancelled,
            ],
            WaitingParts => &[InProgress, Scheduled, CustomerRefusesRepair, Cancelled],
            DevicePartsRemoved => &[InProgress, WaitingParts, Completed, RepairFailed, Cancelled],
            ClientNotHome | ClientNotAnswering => {
                &[Scheduled, ClientNotHome, ClientNotAnswering, Cancelled]
            }
            CustomerRefusesRepair => {
                &[CustomerRefusedRepair, InProgress, DeviceReturned, Cancelled]
            }
            CustomerRefusedRepair => &[DeviceReturned, Cancelled],
            Completed => &[Delivered, DeviceReturned],
            RepairFailed => &[DeviceReturned, Cancelled],
            Delivered | DeviceReturned | Cancelled => &[],
        }
    }

    pub fn can_transition_to(&self, next: ServiceStatus) -> bool {
        self.allowed_targets().contains(&next)
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(
    FromPrimitive, ToPrimitive, Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq, Hash,
)]
pub enum WarrantyStatus {
    #[serde(rename = "u garanciji", alias = "in_warranty")]
    InWarranty,
    #[default]
    #[serde(rename = "van garancije", alias = "out_of_warranty")]
    OutOfWarranty,
}

/// Sub-status of a part taken off a device.
#[derive(
    FromPrimitive, ToPrimitive, Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum RemovedPartStatus {
    #[default]
    Removed,
    InRepair,
    Repaired,
    /// Put back into the device.
    Returned,
    /// Swapped for a new part.
    Replaced,
}

impl RemovedPartStatus {
    /// The part is still away from the device and nothing was decided yet.
    pub fn is_outstanding(&self) -> bool {
        matches!(self, RemovedPartStatus::Removed | RemovedPartStatus::InRepair)
    }

    pub fn can_transition_to(&self, next: RemovedPartStatus) -> bool {
        use RemovedPartStatus::*;
        matches!(
            (self, next),
            (Removed, InRepair | Replaced | Returned)
                | (InRepair, Repaired | Replaced)
                | (Repaired, Returned | Replaced)
        )
    }
}

#[derive(
    FromPrimitive, ToPrimitive, Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum PartLocation {
    #[default]
    Workshop,
    ExternalRepair,
    Returned,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_statuses_have_no_targets() {
        for status in [
            ServiceStatus::Delivered,
            ServiceStatus::DeviceReturned,
            ServiceStatus::Cancelled,
        ] {
            assert!(status.is_terminal());
            assert!(status.allowed_targets().is_empty());
        }
    }

    #[test]
    fn test_forward_path() {
        assert!(ServiceStatus::Pending.can_transition_to(ServiceStatus::Scheduled));
        assert!(ServiceStatus::Scheduled.can_transition_to(ServiceStatus::InProgress));
        assert!(ServiceStatus::InProgress.can_transition_to(ServiceStatus::Completed));
        assert!(ServiceStatus::Completed.can_transition_to(ServiceStatus::Delivered));
        assert!(!ServiceStatus::Pending.can_transition_to(ServiceStatus::Completed));
        assert!(!ServiceStatus::RepairFailed.can_transition_to(ServiceStatus::Completed));
    }

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_string(&ServiceStatus::CustomerRefusesRepair).unwrap();
        assert_eq!(json, r#""customer_refuses_repair""#);
        assert_eq!(ServiceStatus::DevicePartsRemoved.to_string(), "device_parts_removed");
        let warranty: WarrantyStatus = serde_json::from_str(r#""u garanciji""#).unwrap();
        assert_eq!(warranty, WarrantyStatus::InWarranty);
        let warranty: WarrantyStatus = serde_json::from_str(r#""out_of_warranty""#).unwrap();
        assert_eq!(warranty, WarrantyStatus::OutOfWarranty);
    }

    #[test]
    fn test_removed_part_sub_status() {
        assert!(RemovedPartStatus::Removed.is_outstanding());
        assert!(RemovedPartStatus::InRepair.is_outstanding());
        assert!(!RemovedPartStatus::Repaired.is_outstanding());
        assert!(RemovedPartStatus::InRepair.can_transition_to(RemovedPartStatus::Repaired));
        assert!(!RemovedPartStatus::Returned.can_transition_to(RemovedPartStatus::InRepair));
        assert!(!RemovedPartStatus::Removed.can_transition_to(RemovedPartStatus::Repaired));
    }

    #[test]
    fn test_as_str_matches_serde() {
        for status in [
            ServiceStatus::Pending,
            ServiceStatus::WaitingParts,
            ServiceStatus::ClientNotAnswering,
            ServiceStatus::RepairFailed,
        ] {
            let json = serde_json::to_value(status).unwrap();
            assert_eq!(json, status.as_str());
        }
    }
}
