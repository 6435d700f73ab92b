mod available_part;
mod catalog;
mod parts_activity_log;
mod parts_allocation;
mod spare_part_order;
mod supplier;
mod supplier_order;

#[rustfmt::skip]
pub use {
    available_part::AvailablePartRepo,
    catalog::SparePartCatalogRepo,
    parts_activity_log::PartsActivityLogRepo,
    parts_allocation::PartsAllocationRepo,
    spare_part_order::SparePartOrderRepo,
    supplier::SupplierRepo,
    supplier_order::SupplierOrderRepo,
};
