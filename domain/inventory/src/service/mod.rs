mod catalog;
mod parts_flow;
mod supplier;

#[rustfmt::skip]
pub use {
    catalog::PartsCatalogService,
    parts_flow::PartsFlowService,
    supplier::SupplierService,
};
