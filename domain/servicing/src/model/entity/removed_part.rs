use anyhow::anyhow;
use chrono::{DateTime, NaiveDate, Utc};
use database_model::removed_part;
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::vo::{
    Checker, PartLocation, RemovedPartStatus, StateTransitionError, TextField, Validate,
    ValidationContext, ValidationResult,
};

/// A part taken off a device while its ticket is open.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovedPart {
    pub id: Uuid,
    pub service_id: Uuid,
    pub part_name: String,
    pub part_description: Option<String>,
    pub removal_date: NaiveDate,
    pub removal_reason: String,
    pub current_location: PartLocation,
    pub expected_return_date: Option<NaiveDate>,
    pub actual_return_date: Option<NaiveDate>,
    pub part_status: RemovedPartStatus,
    pub technician_notes: Option<String>,
    pub repair_cost: Option<String>,
    pub is_reinstalled: bool,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

servicing_architecture::aggregate_root!(RemovedPart);

/// A move of a removed part to a new sub-status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RemovedPartStatusChange {
    pub status: RemovedPartStatus,
    pub location: Option<PartLocation>,
    pub expected_return_date: Option<NaiveDate>,
    pub technician_notes: Option<String>,
    pub repair_cost: Option<String>,
}

impl RemovedPart {
    pub fn change_status(
        &self,
        change: &RemovedPartStatusChange,
        today: NaiveDate,
    ) -> Result<RemovedPart, StateTransitionError> {
        if !self.part_status.can_transition_to(change.status) {
            return Err(StateTransitionError::RemovedPartNotAllowed {
                from: self.part_status,
                to: change.status,
            });
        }
        let mut next = self.clone();
        next.part_status = change.status;
        match change.status {
            RemovedPartStatus::InRepair => {
                next.current_location = change.location.unwrap_or(PartLocation::ExternalRepair);
            }
            RemovedPartStatus::Returned => {
                next.current_location = PartLocation::Returned;
                next.actual_return_date = Some(today);
                next.is_reinstalled = true;
            }
            _ => {
                if let Some(location) = change.location {
                    next.current_location = location;
                }
            }
        }
        if change.expected_return_date.is_some() {
            next.expected_return_date = change.expected_return_date;
        }
        if change.technician_notes.is_some() {
            next.technician_notes = change.technician_notes.clone();
        }
        if change.repair_cost.is_some() {
            next.repair_cost = change.repair_cost.clone();
        }
        next.updated_at = Utc::now();
        Ok(next)
    }
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct RemovedPartInput {
    pub service_id: Option<String>,
    pub part_name: Option<String>,
    pub part_description: TextField,
    pub removal_date: TextField,
    pub removal_reason: Option<String>,
    pub current_location: Option<String>,
    pub expected_return_date: TextField,
    pub part_status: Option<String>,
    pub technician_notes: TextField,
    pub repair_cost: TextField,
    pub created_by: Option<String>,
}

impl Validate for RemovedPartInput {
    type Output = RemovedPart;

    fn validate(self, ctx: &ValidationContext) -> ValidationResult<RemovedPart> {
        let mut c = Checker::new(ctx);
        let now = Utc::now();
        let part = RemovedPart {
            id: Uuid::new_v4(),
            service_id: c.id("serviceId", self.service_id),
            part_name: c.text("partName", self.part_name, 2, 100),
            part_description: c.optional_text("partDescription", self.part_description, 0, 500),
            removal_date: c
                .optional_date("removalDate", self.removal_date)
                .unwrap_or(c.today()),
            removal_reason: c.text("removalReason", self.removal_reason, 5, 300),
            current_location: c
                .choice("currentLocation", self.current_location)
                .unwrap_or_default(),
            expected_return_date: c.optional_date("expectedReturnDate", self.expected_return_date),
            actual_return_date: None,
            part_status: c.choice("partStatus", self.part_status).unwrap_or_default(),
            technician_notes: c.optional_text("technicianNotes", self.technician_notes, 0, 500),
            repair_cost: c.optional_text("repairCost", self.repair_cost, 0, 20),
            is_reinstalled: false,
            created_by: c.id("createdBy", self.created_by),
            created_at: now,
            updated_at: now,
        };
        c.finish(part)
    }
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct RemovedPartStatusChangeInput {
    pub status: Option<String>,
    pub location: Option<String>,
    pub expected_return_date: TextField,
    pub technician_notes: TextField,
    pub repair_cost: TextField,
}

impl Validate for RemovedPartStatusChangeInput {
    type Output = RemovedPartStatusChange;

    fn validate(self, ctx: &ValidationContext) -> ValidationResult<RemovedPartStatusChange> {
        let mut c = Checker::new(ctx);
        let change = RemovedPartStatusChange {
            status: c.required_choice("status", self.status),
            location: c.choice("location", self.location),
            expected_return_date: c.optional_date("expectedReturnDate", self.expected_return_date),
            technician_notes: c.optional_text("technicianNotes", self.technician_notes, 0, 500),
            repair_cost: c.optional_text("repairCost", self.repair_cost, 0, 20),
        };
        c.finish(change)
    }
}

impl TryFrom<removed_part::Model> for RemovedPart {
    type Error = anyhow::Error;

    fn try_from(model: removed_part::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            service_id: model.service_id,
            part_name: model.part_name,
            part_description: model.part_description,
            removal_date: model.removal_date,
            removal_reason: model.removal_reason,
            current_location: PartLocation::from_i32(model.current_location)
                .ok_or(anyhow!("Wrong part location {}", model.current_location))?,
            expected_return_date: model.expected_return_date,
            actual_return_date: model.actual_return_date,
            part_status: RemovedPartStatus::from_i32(model.part_status)
                .ok_or(anyhow!("Wrong removed part status {}", model.part_status))?,
            technician_notes: model.technician_notes,
            repair_cost: model.repair_cost,
            is_reinstalled: model.is_reinstalled,
            created_by: model.created_by,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl From<RemovedPart> for removed_part::Model {
    fn from(entity: RemovedPart) -> Self {
        Self {
            id: entity.id,
            service_id: entity.service_id,
            part_name: entity.part_name,
            part_description: entity.part_description,
            removal_date: entity.removal_date,
            removal_reason: entity.removal_reason,
            current_location: entity.current_location as i32,
            expected_return_date: entity.expected_return_date,
            actual_return_date: entity.actual_return_date,
            part_status: entity.part_status as i32,
            technician_notes: entity.technician_notes,
            repair_cost: entity.repair_cost,
            is_reinstalled: entity.is_reinstalled,
            created_by: entity.created_by,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
