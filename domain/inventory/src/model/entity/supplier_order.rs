use anyhow::anyhow;
use chrono::{DateTime, NaiveDate, Utc};
use database_model::supplier_order;
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::vo::SupplierOrderStatus;

/// The order placed with a supplier for one spare part order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierOrder {
    pub id: Uuid,
    pub supplier_id: Uuid,
    pub spare_part_order_id: Uuid,
    pub order_number: String,
    pub status: SupplierOrderStatus,
    pub sent_at: Option<DateTime<Utc>>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub tracking_number: Option<String>,
    pub total_cost: Option<f64>,
    pub currency: String,
    pub estimated_delivery: Option<NaiveDate>,
    pub auto_retry_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

servicing_architecture::aggregate_root!(SupplierOrder);

impl SupplierOrder {
    /// An order already sent to the supplier.
    pub fn sent(
        supplier_id: Uuid,
        spare_part_order_id: Uuid,
        order_number: Option<String>,
        estimated_delivery: Option<NaiveDate>,
        total_cost: Option<f64>,
        now: DateTime<Utc>,
    ) -> Self {
        let id = Uuid::new_v4();
        Self {
            id,
            supplier_id,
            spare_part_order_id,
            order_number: order_number
                .unwrap_or_else(|| format!("SO-{}", &id.simple().to_string()[..8].to_uppercase())),
            status: SupplierOrderStatus::Sent,
            sent_at: Some(now),
            delivered_at: None,
            tracking_number: None,
            total_cost,
            currency: "EUR".to_string(),
            estimated_delivery,
            auto_retry_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn mark_delivered(&self, now: DateTime<Utc>) -> SupplierOrder {
        let mut next = self.clone();
        next.status = SupplierOrderStatus::Delivered;
        next.delivered_at = Some(now);
        next.updated_at = now;
        next
    }

    /// `None` when the supplier has already moved on it.
    pub fn cancel(&self, now: DateTime<Utc>) -> Option<SupplierOrder> {
        if !self.status.is_cancellable() {
            return None;
        }
        let mut next = self.clone();
        next.status = SupplierOrderStatus::Cancelled;
        next.updated_at = now;
        Some(next)
    }
}

impl TryFrom<supplier_order::Model> for SupplierOrder {
    type Error = anyhow::Error;

    fn try_from(model: supplier_order::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            supplier_id: model.supplier_id,
            spare_part_order_id: model.spare_part_order_id,
            order_number: model.order_number.unwrap_or_default(),
            status: SupplierOrderStatus::from_i32(model.status)
                .ok_or(anyhow!("Wrong supplier order status {}", model.status))?,
            sent_at: model.sent_at,
            delivered_at: model.delivered_at,
            tracking_number: model.tracking_number,
            total_cost: model.total_cost,
            currency: model.currency,
            estimated_delivery: model.estimated_delivery,
            auto_retry_count: model.auto_retry_count,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl From<SupplierOrder> for supplier_order::Model {
    fn from(entity: SupplierOrder) -> Self {
        Self {
            id: entity.id,
            supplier_id: entity.supplier_id,
            spare_part_order_id: entity.spare_part_order_id,
            order_number: Some(entity.order_number),
            status: entity.status as i32,
            sent_at: entity.sent_at,
            delivered_at: entity.delivered_at,
            tracking_number: entity.tracking_number,
            total_cost: entity.total_cost,
            currency: entity.currency,
            estimated_delivery: entity.estimated_delivery,
            auto_retry_count: entity.auto_retry_count,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
