pub mod available_part;
pub mod catalog_entry;
pub mod parts_activity_log;
pub mod parts_allocation;
pub mod spare_part_order;
pub mod supplier;
pub mod supplier_order;

#[rustfmt::skip]
pub use {
    available_part::{AvailablePart, AvailablePartInput, PartIdent, PartKey, StockLevel, StockReceipt},
    catalog_entry::{CatalogEntryInput, SparePartCatalogEntry},
    parts_activity_log::PartsActivityLog,
    parts_allocation::{AllocationInput, PartsAllocation},
    spare_part_order::{
        MarkOrdered, MarkOrderedInput, Receipt, ReceiptInput, SparePartOrder, SparePartOrderInput,
    },
    supplier::{Supplier, SupplierInput},
    supplier_order::SupplierOrder,
};
