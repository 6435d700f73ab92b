use anyhow::anyhow;
use chrono::{DateTime, Utc};
use database_model::available_part;
use domain_servicing::model::vo::{
    Checker, TextField, Validate, ValidationContext, ValidationResult, WarrantyStatus,
};
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{PartsAllocation, SparePartOrder};

/// A stock line in the warehouse.
///
/// `quantity` only ever grows; what is left on hand is derived from the
/// allocations against it, see [`AvailablePart::on_hand`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailablePart {
    pub id: Uuid,
    pub part_name: String,
    pub part_number: Option<String>,
    pub quantity: i32,
    pub description: Option<String>,
    pub supplier_name: Option<String>,
    pub unit_cost: Option<String>,
    pub location: Option<String>,
    pub warranty_status: WarrantyStatus,
    pub category_id: Option<Uuid>,
    pub manufacturer_id: Option<Uuid>,
    pub original_order_id: Option<Uuid>,
    pub added_by: Uuid,
    pub notes: Option<String>,
    pub service_id: Option<Uuid>,
    pub is_active: bool,
    pub added_date: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: i32,
}

servicing_architecture::aggregate_root!(AvailablePart);

/// Identifies the stock line a part belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PartKey {
    pub ident: PartIdent,
    pub category_id: Option<Uuid>,
    pub manufacturer_id: Option<Uuid>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PartIdent {
    Number(String),
    /// Lowercased name, used when there is no part number.
    Name(String),
}

impl PartKey {
    pub fn new(
        part_number: Option<&str>,
        part_name: &str,
        category_id: Option<Uuid>,
        manufacturer_id: Option<Uuid>,
    ) -> Self {
        let ident = match part_number.map(str::trim).filter(|n| !n.is_empty()) {
            Some(number) => PartIdent::Number(number.to_string()),
            None => PartIdent::Name(part_name.trim().to_lowercase()),
        };
        Self {
            ident,
            category_id,
            manufacturer_id,
        }
    }
}

impl AvailablePart {
    pub fn key(&self) -> PartKey {
        PartKey::new(
            self.part_number.as_deref(),
            &self.part_name,
            self.category_id,
            self.manufacturer_id,
        )
    }

    /// Stock left: everything added minus what allocations still hold.
    pub fn on_hand(&self, allocations: &[PartsAllocation]) -> i32 {
        let held: i32 = allocations
            .iter()
            .filter(|a| a.available_part_id == self.id && a.status.holds_stock())
            .map(|a| a.allocated_quantity)
            .sum();
        self.quantity - held
    }

    /// A new stock line for a received order.
    pub fn from_order(order: &SparePartOrder, receipt: &StockReceipt, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            part_name: order.part_name.clone(),
            part_number: order.part_number.clone(),
            quantity: order.quantity,
            description: order.description.clone(),
            supplier_name: order.supplier_name.clone(),
            unit_cost: receipt.unit_cost.clone(),
            location: receipt.location.clone(),
            warranty_status: order.warranty_status,
            category_id: receipt.category_id,
            manufacturer_id: receipt.manufacturer_id,
            original_order_id: Some(order.id),
            added_by: receipt.received_by,
            notes: None,
            service_id: order.service_id,
            is_active: true,
            added_date: now,
            updated_at: now,
            version: 0,
        }
    }

    pub fn add_quantity(&self, quantity: i32, now: DateTime<Utc>) -> AvailablePart {
        let mut next = self.clone();
        next.quantity += quantity;
        next.updated_at = now;
        next
    }
}

/// Stock fields of a receipt once category and manufacturer are settled.
#[derive(Clone, Debug, PartialEq)]
pub struct StockReceipt {
    pub received_by: Uuid,
    pub category_id: Option<Uuid>,
    pub manufacturer_id: Option<Uuid>,
    pub location: Option<String>,
    pub unit_cost: Option<String>,
}

/// A part with what is left of it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockLevel {
    #[serde(flatten)]
    pub part: AvailablePart,
    pub on_hand: i32,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct AvailablePartInput {
    pub part_name: Option<String>,
    pub part_number: TextField,
    pub quantity: Option<i64>,
    pub description: TextField,
    pub supplier_name: TextField,
    pub unit_cost: TextField,
    pub location: TextField,
    pub warranty_status: Option<String>,
    pub category_id: TextField,
    pub manufacturer_id: TextField,
    pub added_by: Option<String>,
    pub notes: TextField,
    pub service_id: TextField,
}

impl Validate for AvailablePartInput {
    type Output = AvailablePart;

    fn validate(self, ctx: &ValidationContext) -> ValidationResult<AvailablePart> {
        let mut c = Checker::new(ctx);
        let now = Utc::now();
        let part = AvailablePart {
            id: Uuid::new_v4(),
            part_name: c.text("partName", self.part_name, 2, 200),
            part_number: c.optional_text("partNumber", self.part_number, 0, 100),
            quantity: c.positive("quantity", self.quantity),
            description: c.optional_text("description", self.description, 0, 500),
            supplier_name: c.optional_text("supplierName", self.supplier_name, 0, 100),
            unit_cost: c.optional_text("unitCost", self.unit_cost, 0, 50),
            location: c.optional_text("location", self.location, 0, 100),
            warranty_status: c
                .choice("warrantyStatus", self.warranty_status)
                .unwrap_or_default(),
            category_id: c.optional_id("categoryId", self.category_id),
            manufacturer_id: c.optional_id("manufacturerId", self.manufacturer_id),
            original_order_id: None,
            added_by: c.id("addedBy", self.added_by),
            notes: c.optional_text("notes", self.notes, 0, 1000),
            service_id: c.optional_id("serviceId", self.service_id),
            is_active: true,
            added_date: now,
            updated_at: now,
            version: 0,
        };
        c.finish(part)
    }
}

impl TryFrom<available_part::Model> for AvailablePart {
    type Error = anyhow::Error;

    fn try_from(model: available_part::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            part_name: model.part_name,
            part_number: model.part_number,
            quantity: model.quantity,
            description: model.description,
            supplier_name: model.supplier_name,
            unit_cost: model.unit_cost,
            location: model.location,
            warranty_status: WarrantyStatus::from_i32(model.warranty_status)
                .ok_or(anyhow!("Wrong warranty status {}", model.warranty_status))?,
            category_id: model.category_id,
            manufacturer_id: model.manufacturer_id,
            original_order_id: model.original_order_id,
            added_by: model.added_by,
            notes: model.notes,
            service_id: model.service_id,
            is_active: model.is_active,
            added_date: model.added_date,
            updated_at: model.updated_at,
            version: model.version,
        })
    }
}

impl From<AvailablePart> for available_part::Model {
    fn from(entity: AvailablePart) -> Self {
        Self {
            id: entity.id,
            part_name: entity.part_name,
            part_number: entity.part_number,
            quantity: entity.quantity,
            description: entity.description,
            supplier_name: entity.supplier_name,
            unit_cost: entity.unit_cost,
            location: entity.location,
            warranty_status: entity.warranty_status as i32,
            category_id: entity.category_id,
            manufacturer_id: entity.manufacturer_id,
            original_order_id: entity.original_order_id,
            added_by: entity.added_by,
            notes: entity.notes,
            service_id: entity.service_id,
            is_active: entity.is_active,
            added_date: entity.added_date,
            updated_at: entity.updated_at,
            version: entity.version,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::model::vo::AllocationStatus;

    fn part(quantity: i64) -> AvailablePart {
        AvailablePartInput {
            part_name: Some("Drain pump".to_string()),
            quantity: Some(quantity),
            added_by: Some(Uuid::new_v4().to_string()),
            ..Default::default()
        }
        .validate(&ValidationContext::on(NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()))
        .unwrap()
    }

    fn allocation(part: &AvailablePart, quantity: i32, status: AllocationStatus) -> PartsAllocation {
        PartsAllocation {
            id: Uuid::new_v4(),
            available_part_id: part.id,
            service_id: Uuid::new_v4(),
            technician_id: Uuid::new_v4(),
            allocated_quantity: quantity,
            allocated_by: Uuid::new_v4(),
            allocation_notes: None,
            status,
            allocated_date: Utc::now(),
            used_date: None,
            returned_date: None,
        }
    }

    #[test]
    fn test_on_hand_ignores_returned_and_foreign_allocations() {
        let part = part(10);
        let other = self::part(5);
        let allocations = vec![
            allocation(&part, 3, AllocationStatus::Allocated),
            allocation(&part, 2, AllocationStatus::Used),
            allocation(&part, 4, AllocationStatus::Returned),
            allocation(&other, 5, AllocationStatus::Allocated),
        ];
        assert_eq!(part.on_hand(&allocations), 5);
        assert_eq!(other.on_hand(&allocations), 0);
    }

    #[test]
    fn test_key_prefers_part_number() {
        let category = Some(Uuid::new_v4());
        let a = PartKey::new(Some("DP-1"), "Drain pump", category, None);
        let b = PartKey::new(Some(" DP-1 "), "Pump, drain", category, None);
        assert_eq!(a, b);
        let c = PartKey::new(None, "Drain Pump ", category, None);
        let d = PartKey::new(Some(""), "drain pump", category, None);
        assert_eq!(c, d);
        assert_ne!(a, c);
        assert_ne!(c, PartKey::new(None, "drain pump", None, None));
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let err = AvailablePartInput {
            part_name: Some("Belt".to_string()),
            quantity: Some(0),
            ..Default::default()
        }
        .validate(&ValidationContext::on(NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()))
        .unwrap_err();
        assert!(err.has("quantity"));
        assert_eq!(err.messages_for("addedBy"), vec!["addedBy is required"]);
    }
}
