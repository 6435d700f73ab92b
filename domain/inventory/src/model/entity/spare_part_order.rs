use anyhow::anyhow;
use chrono::{DateTime, NaiveDate, Utc};
use database_model::spare_part_order;
use domain_servicing::model::vo::{
    Checker, TextField, Validate, ValidationContext, ValidationResult, WarrantyStatus,
};
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::vo::{InventoryTransitionError, OrderStatus, Urgency};

/// A request for a spare part, followed from the ask to the technician's hands.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SparePartOrder {
    pub id: Uuid,
    pub part_name: String,
    pub part_number: Option<String>,
    pub quantity: i32,
    pub description: Option<String>,
    pub urgency: Urgency,
    pub status: OrderStatus,
    pub warranty_status: WarrantyStatus,
    pub service_id: Option<Uuid>,
    pub technician_id: Option<Uuid>,
    pub appliance_id: Option<Uuid>,
    pub estimated_cost: Option<String>,
    pub actual_cost: Option<String>,
    pub supplier_name: Option<String>,
    pub admin_notes: Option<String>,
    pub order_date: Option<NaiveDate>,
    pub expected_delivery: Option<NaiveDate>,
    pub received_date: Option<NaiveDate>,
    pub is_delivered: bool,
    pub delivery_confirmed_at: Option<DateTime<Utc>>,
    pub delivery_confirmed_by: Option<Uuid>,
    /// Leave the ordering queue as soon as delivery is confirmed.
    pub auto_remove_after_delivery: bool,
    pub removed_from_ordering_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: i32,
}

servicing_architecture::aggregate_root!(SparePartOrder);

impl SparePartOrder {
    /// Still in the ordering queue.
    pub fn is_active(&self) -> bool {
        self.removed_from_ordering_at.is_none() && !self.status.is_terminal()
    }

    fn moved_to(
        &self,
        to: OrderStatus,
        now: DateTime<Utc>,
    ) -> Result<SparePartOrder, InventoryTransitionError> {
        if !self.status.can_transition_to(to) {
            return Err(InventoryTransitionError::Order {
                from: self.status,
                to,
            });
        }
        let mut next = self.clone();
        next.status = to;
        next.updated_at = now;
        Ok(next)
    }

    pub fn approve(
        &self,
        admin_notes: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<SparePartOrder, InventoryTransitionError> {
        let mut next = self.moved_to(OrderStatus::Approved, now)?;
        if admin_notes.is_some() {
            next.admin_notes = admin_notes;
        }
        Ok(next)
    }

    pub fn mark_ordered(
        &self,
        supplier_name: String,
        ordered: &MarkOrdered,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<SparePartOrder, InventoryTransitionError> {
        let mut next = self.moved_to(OrderStatus::Ordered, now)?;
        next.supplier_name = Some(supplier_name);
        next.order_date = Some(today);
        if ordered.estimated_delivery.is_some() {
            next.expected_delivery = ordered.estimated_delivery;
        }
        if ordered.estimated_cost.is_some() {
            next.estimated_cost = ordered.estimated_cost.clone();
        }
        Ok(next)
    }

    pub fn mark_received(
        &self,
        receipt: &Receipt,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<SparePartOrder, InventoryTransitionError> {
        let mut next = self.moved_to(OrderStatus::Received, now)?;
        next.received_date = Some(today);
        if receipt.actual_cost.is_some() {
            next.actual_cost = receipt.actual_cost.clone();
        }
        Ok(next)
    }

    pub fn confirm_delivery(
        &self,
        confirmed_by: Uuid,
        now: DateTime<Utc>,
    ) -> Result<SparePartOrder, InventoryTransitionError> {
        let mut next = self.moved_to(OrderStatus::Delivered, now)?;
        next.is_delivered = true;
        next.delivery_confirmed_at = Some(now);
        next.delivery_confirmed_by = Some(confirmed_by);
        if next.auto_remove_after_delivery {
            next.removed_from_ordering_at = Some(now);
        }
        Ok(next)
    }

    pub fn cancel(&self, now: DateTime<Utc>) -> Result<SparePartOrder, InventoryTransitionError> {
        self.moved_to(OrderStatus::Cancelled, now)
    }

    pub fn remove_from_ordering(
        &self,
        now: DateTime<Utc>,
    ) -> Result<SparePartOrder, InventoryTransitionError> {
        let mut next = self.moved_to(OrderStatus::RemovedFromOrdering, now)?;
        next.removed_from_ordering_at.get_or_insert(now);
        Ok(next)
    }
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct SparePartOrderInput {
    pub part_name: Option<String>,
    pub part_number: TextField,
    pub quantity: Option<i64>,
    pub description: TextField,
    pub urgency: Option<String>,
    pub warranty_status: Option<String>,
    pub service_id: TextField,
    pub technician_id: TextField,
    pub appliance_id: TextField,
    pub estimated_cost: TextField,
    pub supplier_name: TextField,
    pub admin_notes: TextField,
    pub auto_remove_after_delivery: Option<bool>,
}

impl Validate for SparePartOrderInput {
    type Output = SparePartOrder;

    fn validate(self, ctx: &ValidationContext) -> ValidationResult<SparePartOrder> {
        let mut c = Checker::new(ctx);
        let now = Utc::now();
        let order = SparePartOrder {
            id: Uuid::new_v4(),
            part_name: c.text("partName", self.part_name, 2, 200),
            part_number: c.optional_text("partNumber", self.part_number, 0, 100),
            quantity: c.positive("quantity", self.quantity),
            description: c.optional_text("description", self.description, 0, 500),
            urgency: c.choice("urgency", self.urgency).unwrap_or_default(),
            status: OrderStatus::Pending,
            warranty_status: c.required_choice("warrantyStatus", self.warranty_status),
            service_id: c.optional_id("serviceId", self.service_id),
            technician_id: c.optional_id("technicianId", self.technician_id),
            appliance_id: c.optional_id("applianceId", self.appliance_id),
            estimated_cost: c.optional_text("estimatedCost", self.estimated_cost, 0, 50),
            actual_cost: None,
            supplier_name: c.optional_text("supplierName", self.supplier_name, 0, 100),
            admin_notes: c.optional_text("adminNotes", self.admin_notes, 0, 1000),
            order_date: None,
            expected_delivery: None,
            received_date: None,
            is_delivered: false,
            delivery_confirmed_at: None,
            delivery_confirmed_by: None,
            auto_remove_after_delivery: self.auto_remove_after_delivery.unwrap_or(true),
            removed_from_ordering_at: None,
            created_at: now,
            updated_at: now,
            version: 0,
        };
        c.finish(order)
    }
}

/// Supplier details recorded when an approved order is placed.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkOrdered {
    pub supplier_id: Uuid,
    pub order_number: Option<String>,
    pub estimated_delivery: Option<NaiveDate>,
    pub estimated_cost: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct MarkOrderedInput {
    pub supplier_id: Option<String>,
    pub order_number: TextField,
    pub estimated_delivery: TextField,
    pub estimated_cost: TextField,
}

impl Validate for MarkOrderedInput {
    type Output = MarkOrdered;

    fn validate(self, ctx: &ValidationContext) -> ValidationResult<MarkOrdered> {
        let mut c = Checker::new(ctx);
        let ordered = MarkOrdered {
            supplier_id: c.id("supplierId", self.supplier_id),
            order_number: c.optional_text("orderNumber", self.order_number, 0, 100),
            estimated_delivery: c.optional_date("estimatedDelivery", self.estimated_delivery),
            estimated_cost: c.optional_text("estimatedCost", self.estimated_cost, 0, 50),
        };
        c.finish(ordered)
    }
}

/// How a received order enters stock.
#[derive(Clone, Debug, PartialEq)]
pub struct Receipt {
    pub received_by: Uuid,
    pub category_id: Option<Uuid>,
    pub manufacturer_id: Option<Uuid>,
    pub location: Option<String>,
    pub unit_cost: Option<String>,
    pub actual_cost: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct ReceiptInput {
    pub received_by: Option<String>,
    pub category_id: TextField,
    pub manufacturer_id: TextField,
    pub location: TextField,
    pub unit_cost: TextField,
    pub actual_cost: TextField,
}

impl Validate for ReceiptInput {
    type Output = Receipt;

    fn validate(self, ctx: &ValidationContext) -> ValidationResult<Receipt> {
        let mut c = Checker::new(ctx);
        let receipt = Receipt {
            received_by: c.id("receivedBy", self.received_by),
            category_id: c.optional_id("categoryId", self.category_id),
            manufacturer_id: c.optional_id("manufacturerId", self.manufacturer_id),
            location: c.optional_text("location", self.location, 0, 100),
            unit_cost: c.optional_text("unitCost", self.unit_cost, 0, 50),
            actual_cost: c.optional_text("actualCost", self.actual_cost, 0, 50),
        };
        c.finish(receipt)
    }
}

impl TryFrom<spare_part_order::Model> for SparePartOrder {
    type Error = anyhow::Error;

    fn try_from(model: spare_part_order::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            part_name: model.part_name,
            part_number: model.part_number,
            quantity: model.quantity,
            description: model.description,
            urgency: Urgency::from_i32(model.urgency)
                .ok_or(anyhow!("Wrong order urgency {}", model.urgency))?,
            status: OrderStatus::from_i32(model.status)
                .ok_or(anyhow!("Wrong order status {}", model.status))?,
            warranty_status: WarrantyStatus::from_i32(model.warranty_status)
                .ok_or(anyhow!("Wrong warranty status {}", model.warranty_status))?,
            service_id: model.service_id,
            technician_id: model.technician_id,
            appliance_id: model.appliance_id,
            estimated_cost: model.estimated_cost,
            actual_cost: model.actual_cost,
            supplier_name: model.supplier_name,
            admin_notes: model.admin_notes,
            order_date: model.order_date,
            expected_delivery: model.expected_delivery,
            received_date: model.received_date,
            is_delivered: model.is_delivered,
            delivery_confirmed_at: model.delivery_confirmed_at,
            delivery_confirmed_by: model.delivery_confirmed_by,
            auto_remove_after_delivery: model.auto_remove_after_delivery,
            removed_from_ordering_at: model.removed_from_ordering_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
            version: model.version,
        })
    }
}

impl From<SparePartOrder> for spare_part_order::Model {
    fn from(entity: SparePartOrder) -> Self {
        Self {
            id: entity.id,
            part_name: entity.part_name,
            part_number: entity.part_number,
            quantity: entity.quantity,
            description: entity.description,
            urgency: entity.urgency as i32,
            status: entity.status as i32,
            warranty_status: entity.warranty_status as i32,
            service_id: entity.service_id,
            technician_id: entity.technician_id,
            appliance_id: entity.appliance_id,
            estimated_cost: entity.estimated_cost,
            actual_cost: entity.actual_cost,
            supplier_name: entity.supplier_name,
            admin_notes: entity.admin_notes,
            order_date: entity.order_date,
            expected_delivery: entity.expected_delivery,
            received_date: entity.received_date,
            is_delivered: entity.is_delivered,
            delivery_confirmed_at: entity.delivery_confirmed_at,
            delivery_confirmed_by: entity.delivery_confirmed_by,
            auto_remove_after_delivery: entity.auto_remove_after_delivery,
            removed_from_ordering_at: entity.removed_from_ordering_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            version: entity.version,
        }
    }
}
