//! Reference catalog of known parts.
use sea_orm::{entity::prelude::*, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "spare_part_catalog")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub part_number: String,
    pub part_name: String,
    pub description: Option<String>,
    pub category: i32,
    pub manufacturer: String,
    /// Json array of model names.
    pub compatible_models: Json,
    pub supplier_name: Option<String>,
    pub supplier_url: Option<String>,
    pub image_url: Option<String>,
    pub availability: i32,
    pub price_eur: Option<String>,
    pub price_gbp: Option<String>,
    pub stock_level: i32,
    pub min_stock_level: i32,
    pub is_oem: bool,
    pub source_type: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_set(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            part_number: Set(self.part_number),
            part_name: Set(self.part_name),
            description: Set(self.description),
            category: Set(self.category),
            manufacturer: Set(self.manufacturer),
            compatible_models: Set(self.compatible_models),
            supplier_name: Set(self.supplier_name),
            supplier_url: Set(self.supplier_url),
            image_url: Set(self.image_url),
            availability: Set(self.availability),
            price_eur: Set(self.price_eur),
            price_gbp: Set(self.price_gbp),
            stock_level: Set(self.stock_level),
            min_stock_level: Set(self.min_stock_level),
            is_oem: Set(self.is_oem),
            source_type: Set(self.source_type),
            created_at: Set(self.created_at),
            updated_at: Set(self.updated_at),
        }
    }
}
