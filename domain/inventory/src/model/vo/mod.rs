mod catalog;
mod status;

#[rustfmt::skip]
pub use {
    catalog::{Availability, CatalogCategory, SourceType},
    status::{
        AllocationStatus, IntegrationMethod, InventoryTransitionError, OrderStatus, PartAction,
        SupplierOrderStatus, Urgency,
    },
};
