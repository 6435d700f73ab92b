use anyhow::anyhow;
use chrono::{DateTime, Utc};
use database_model::parts_allocation;
use domain_servicing::model::vo::{Checker, TextField, Validate, ValidationContext, ValidationResult};
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::vo::{AllocationStatus, InventoryTransitionError};

/// Stock handed to a technician for a service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartsAllocation {
    pub id: Uuid,
    pub available_part_id: Uuid,
    pub service_id: Uuid,
    pub technician_id: Uuid,
    pub allocated_quantity: i32,
    pub allocated_by: Uuid,
    pub allocation_notes: Option<String>,
    pub status: AllocationStatus,
    pub allocated_date: DateTime<Utc>,
    pub used_date: Option<DateTime<Utc>>,
    pub returned_date: Option<DateTime<Utc>>,
}

servicing_architecture::aggregate_root!(PartsAllocation);

impl PartsAllocation {
    fn moved_to(&self, to: AllocationStatus) -> Result<PartsAllocation, InventoryTransitionError> {
        if self.status != AllocationStatus::Allocated {
            return Err(InventoryTransitionError::Allocation {
                from: self.status,
                to,
            });
        }
        let mut next = self.clone();
        next.status = to;
        Ok(next)
    }

    pub fn mark_used(&self, now: DateTime<Utc>) -> Result<PartsAllocation, InventoryTransitionError> {
        let mut next = self.moved_to(AllocationStatus::Used)?;
        next.used_date = Some(now);
        Ok(next)
    }

    pub fn mark_returned(
        &self,
        now: DateTime<Utc>,
    ) -> Result<PartsAllocation, InventoryTransitionError> {
        let mut next = self.moved_to(AllocationStatus::Returned)?;
        next.returned_date = Some(now);
        Ok(next)
    }
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct AllocationInput {
    pub available_part_id: Option<String>,
    pub service_id: Option<String>,
    pub technician_id: Option<String>,
    pub allocated_quantity: Option<i64>,
    pub allocated_by: Option<String>,
    pub allocation_notes: TextField,
}

impl Validate for AllocationInput {
    type Output = PartsAllocation;

    fn validate(self, ctx: &ValidationContext) -> ValidationResult<PartsAllocation> {
        let mut c = Checker::new(ctx);
        let allocation = PartsAllocation {
            id: Uuid::new_v4(),
            available_part_id: c.id("availablePartId", self.available_part_id),
            service_id: c.id("serviceId", self.service_id),
            technician_id: c.id("technicianId", self.technician_id),
            allocated_quantity: c.positive("allocatedQuantity", self.allocated_quantity),
            allocated_by: c.id("allocatedBy", self.allocated_by),
            allocation_notes: c.optional_text("allocationNotes", self.allocation_notes, 0, 500),
            status: AllocationStatus::Allocated,
            allocated_date: Utc::now(),
            used_date: None,
            returned_date: None,
        };
        c.finish(allocation)
    }
}

impl TryFrom<parts_allocation::Model> for PartsAllocation {
    type Error = anyhow::Error;

    fn try_from(model: parts_allocation::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            available_part_id: model.available_part_id,
            service_id: model.service_id,
            technician_id: model.technician_id,
            allocated_quantity: model.allocated_quantity,
            allocated_by: model.allocated_by,
            allocation_notes: model.allocation_notes,
            status: AllocationStatus::from_i32(model.status)
                .ok_or(anyhow!("Wrong allocation status {}", model.status))?,
            allocated_date: model.allocated_date,
            used_date: model.used_date,
            returned_date: model.returned_date,
        })
    }
}

impl From<PartsAllocation> for parts_allocation::Model {
    fn from(entity: PartsAllocation) -> Self {
        Self {
            id: entity.id,
            available_part_id: entity.available_part_id,
            service_id: entity.service_id,
            technician_id: entity.technician_id,
            allocated_quantity: entity.allocated_quantity,
            allocated_by: entity.allocated_by,
            allocation_notes: entity.allocation_notes,
            status: entity.status as i32,
            allocated_date: entity.allocated_date,
            used_date: entity.used_date,
            returned_date: entity.returned_date,
        }
    }
}
