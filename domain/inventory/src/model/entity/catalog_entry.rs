use anyhow::anyhow;
use chrono::{DateTime, Utc};
use database_model::spare_part_catalog;
use domain_servicing::model::vo::{Checker, TextField, Validate, ValidationContext, ValidationResult};
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::vo::{Availability, CatalogCategory, SourceType};

/// A known part, whether or not we stock it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SparePartCatalogEntry {
    pub id: Uuid,
    pub part_number: String,
    pub part_name: String,
    pub description: Option<String>,
    pub category: CatalogCategory,
    pub manufacturer: String,
    pub compatible_models: Vec<String>,
    pub supplier_name: Option<String>,
    pub supplier_url: Option<String>,
    pub image_url: Option<String>,
    pub availability: Availability,
    pub price_eur: Option<String>,
    pub price_gbp: Option<String>,
    pub stock_level: i32,
    pub min_stock_level: i32,
    pub is_oem: bool,
    pub source_type: SourceType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

servicing_architecture::aggregate_root!(SparePartCatalogEntry);

impl SparePartCatalogEntry {
    pub fn is_below_minimum(&self) -> bool {
        self.stock_level < self.min_stock_level
    }
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogEntryInput {
    pub part_number: Option<String>,
    pub part_name: Option<String>,
    pub description: TextField,
    pub category: Option<String>,
    pub manufacturer: Option<String>,
    pub compatible_models: Vec<String>,
    pub supplier_name: TextField,
    pub supplier_url: TextField,
    pub image_url: TextField,
    pub availability: Option<String>,
    pub price_eur: TextField,
    pub price_gbp: TextField,
    pub stock_level: Option<i64>,
    pub min_stock_level: Option<i64>,
    pub is_oem: bool,
    pub source_type: Option<String>,
}

impl Validate for CatalogEntryInput {
    type Output = SparePartCatalogEntry;

    fn validate(self, ctx: &ValidationContext) -> ValidationResult<SparePartCatalogEntry> {
        let mut c = Checker::new(ctx);
        let now = Utc::now();
        let entry = SparePartCatalogEntry {
            id: Uuid::new_v4(),
            part_number: c.text("partNumber", self.part_number, 3, 100),
            part_name: c.text("partName", self.part_name, 2, 200),
            description: c.optional_text("description", self.description, 0, 1000),
            category: c.required_choice("category", self.category),
            manufacturer: c.text("manufacturer", self.manufacturer, 2, 100),
            compatible_models: self.compatible_models,
            supplier_name: c.optional_text("supplierName", self.supplier_name, 0, 100),
            supplier_url: c.url("supplierUrl", self.supplier_url),
            image_url: c.url("imageUrl", self.image_url),
            availability: c.choice("availability", self.availability).unwrap_or_default(),
            price_eur: c.optional_text("priceEur", self.price_eur, 0, 20),
            price_gbp: c.optional_text("priceGbp", self.price_gbp, 0, 20),
            stock_level: c.in_range("stockLevel", Some(self.stock_level.unwrap_or(0)), 0, i32::MAX as i64),
            min_stock_level: c.in_range(
                "minStockLevel",
                Some(self.min_stock_level.unwrap_or(0)),
                0,
                i32::MAX as i64,
            ),
            is_oem: self.is_oem,
            source_type: c.choice("sourceType", self.source_type).unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };
        c.finish(entry)
    }
}

impl TryFrom<spare_part_catalog::Model> for SparePartCatalogEntry {
    type Error = anyhow::Error;

    fn try_from(model: spare_part_catalog::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            part_number: model.part_number,
            part_name: model.part_name,
            description: model.description,
            category: CatalogCategory::from_i32(model.category)
                .ok_or(anyhow!("Wrong catalog category {}", model.category))?,
            manufacturer: model.manufacturer,
            compatible_models: serde_json::from_value(model.compatible_models)?,
            supplier_name: model.supplier_name,
            supplier_url: model.supplier_url,
            image_url: model.image_url,
            availability: Availability::from_i32(model.availability)
                .ok_or(anyhow!("Wrong availability {}", model.availability))?,
            price_eur: model.price_eur,
            price_gbp: model.price_gbp,
            stock_level: model.stock_level,
            min_stock_level: model.min_stock_level,
            is_oem: model.is_oem,
            source_type: SourceType::from_i32(model.source_type)
                .ok_or(anyhow!("Wrong source type {}", model.source_type))?,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl From<SparePartCatalogEntry> for spare_part_catalog::Model {
    fn from(entity: SparePartCatalogEntry) -> Self {
        Self {
            id: entity.id,
            part_number: entity.part_number,
            part_name: entity.part_name,
            description: entity.description,
            category: entity.category as i32,
            manufacturer: entity.manufacturer,
            compatible_models: serde_json::json!(entity.compatible_models),
            supplier_name: entity.supplier_name,
            supplier_url: entity.supplier_url,
            image_url: entity.image_url,
            availability: entity.availability as i32,
            price_eur: entity.price_eur,
            price_gbp: entity.price_gbp,
            stock_level: entity.stock_level,
            min_stock_level: entity.min_stock_level,
            is_oem: entity.is_oem,
            source_type: entity.source_type as i32,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
