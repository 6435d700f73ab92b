use std::fmt;

use num_derive::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where a spare part order stands.
#[derive(
    FromPrimitive, ToPrimitive, Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Approved,
    /// Placed with a supplier.
    Ordered,
    /// Arrived in the warehouse.
    Received,
    /// Handed to the technician.
    Delivered,
    Cancelled,
    RemovedFromOrdering,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Approved => "approved",
            OrderStatus::Ordered => "ordered",
            OrderStatus::Received => "received",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::RemovedFromOrdering => "removed_from_ordering",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Cancelled | OrderStatus::RemovedFromOrdering)
    }

    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        match (self, next) {
            (Pending, Approved) | (Approved, Ordered) | (Ordered, Received) | (Received, Delivered) => {
                true
            }
            (Delivered, RemovedFromOrdering) => true,
            (Pending | Approved | Ordered | Received, Cancelled | RemovedFromOrdering) => true,
            _ => false,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(
    FromPrimitive, ToPrimitive, Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    #[default]
    Normal,
    High,
    Urgent,
}

#[derive(
    FromPrimitive, ToPrimitive, Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum SupplierOrderStatus {
    #[default]
    Pending,
    Sent,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

impl SupplierOrderStatus {
    /// Nothing has left the supplier yet.
    pub fn is_cancellable(&self) -> bool {
        matches!(self, SupplierOrderStatus::Pending | SupplierOrderStatus::Sent)
    }
}

#[derive(
    FromPrimitive, ToPrimitive, Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationMethod {
    #[default]
    Email,
    Api,
    Fax,
    Manual,
}

#[derive(
    FromPrimitive, ToPrimitive, Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum AllocationStatus {
    #[default]
    Allocated,
    Used,
    Returned,
}

impl AllocationStatus {
    /// Allocations that still hold stock.
    pub fn holds_stock(&self) -> bool {
        matches!(self, AllocationStatus::Allocated | AllocationStatus::Used)
    }
}

#[derive(
    FromPrimitive, ToPrimitive, Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum PartAction {
    #[default]
    Added,
    Allocated,
    Returned,
    Consumed,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InventoryTransitionError {
    #[error("A spare part order cannot go from {from} to {to}.")]
    Order { from: OrderStatus, to: OrderStatus },

    #[error("An allocation cannot go from {from:?} to {to:?}.")]
    Allocation {
        from: AllocationStatus,
        to: AllocationStatus,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_happy_path() {
        use OrderStatus::*;
        let path = [Pending, Approved, Ordered, Received, Delivered, RemovedFromOrdering];
        for pair in path.windows(2) {
            assert!(pair[0].can_transition_to(pair[1]), "{} -> {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_order_no_skipping_or_going_back() {
        use OrderStatus::*;
        assert!(!Pending.can_transition_to(Ordered));
        assert!(!Received.can_transition_to(Ordered));
        assert!(!Delivered.can_transition_to(Cancelled));
        assert!(!Cancelled.can_transition_to(Pending));
        assert!(!RemovedFromOrdering.can_transition_to(Cancelled));
        assert!(Approved.can_transition_to(Cancelled));
        assert!(Ordered.can_transition_to(RemovedFromOrdering));
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_value(OrderStatus::RemovedFromOrdering).unwrap(),
            OrderStatus::RemovedFromOrdering.as_str()
        );
        let urgency: Urgency = serde_json::from_str(r#""urgent""#).unwrap();
        assert_eq!(urgency, Urgency::Urgent);
    }
}
