mod catalog;
mod parts_flow;
mod supplier;

#[rustfmt::skip]
pub use {
    catalog::PartsCatalogServiceImpl,
    parts_flow::PartsFlowServiceImpl,
    supplier::SupplierServiceImpl,
};
