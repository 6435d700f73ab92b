//! Orders placed with a supplier. At most one per spare part order.
use sea_orm::{entity::prelude::*, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "supplier_order")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub supplier_id: Uuid,
    #[sea_orm(unique)]
    pub spare_part_order_id: Uuid,
    pub order_number: Option<String>,
    pub status: i32,
    pub sent_at: Option<DateTimeUtc>,
    pub delivered_at: Option<DateTimeUtc>,
    pub tracking_number: Option<String>,
    #[sea_orm(column_type = "Double", nullable)]
    pub total_cost: Option<f64>,
    pub currency: String,
    pub estimated_delivery: Option<Date>,
    pub auto_retry_count: i32,
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
            supplier_id: Set(self.supplier_id),
            spare_part_order_id: Set(self.spare_part_order_id),
            order_number: Set(self.order_number),
            status: Set(self.status),
            sent_at: Set(self.sent_at),
            delivered_at: Set(self.delivered_at),
            tracking_number: Set(self.tracking_number),
            total_cost: Set(self.total_cost),
            currency: Set(self.currency),
            estimated_delivery: Set(self.estimated_delivery),
            auto_retry_count: Set(self.auto_retry_count),
            created_at: Set(self.created_at),
            updated_at: Set(self.updated_at),
        }
    }
}
