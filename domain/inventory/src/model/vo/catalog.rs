use num_derive::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};

#[derive(
    FromPrimitive, ToPrimitive, Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "kebab-case")]
pub enum CatalogCategory {
    WashingMachine,
    Dishwasher,
    Oven,
    CookerHood,
    TumbleDryer,
    FridgeFreezer,
    Microwave,
    #[default]
    Universal,
}

#[derive(
    FromPrimitive, ToPrimitive, Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    #[default]
    Available,
    OutOfStock,
    Discontinued,
    SpecialOrder,
}

/// Where a catalog entry came from.
#[derive(
    FromPrimitive, ToPrimitive, Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    #[default]
    Manual,
    PartkeeprImport,
    WebScraping,
    SupplierApi,
}
