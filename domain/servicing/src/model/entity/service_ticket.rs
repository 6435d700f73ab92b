use anyhow::anyhow;
use chrono::{NaiveDate, Utc};
use database_model::service;
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::vo::{
    Checker, DevicePickup, ServiceOutcome, ServiceStatus, StateTransitionError, StatusChange,
    TextField, TransitionContext, Validate, ValidationContext, ValidationResult, WarrantyStatus,
};

/// A repair job for one appliance of one client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTicket {
    pub id: Uuid,
    pub client_id: Uuid,
    pub appliance_id: Uuid,
    pub technician_id: Option<Uuid>,
    /// The partner user that opened the ticket on the client's behalf.
    pub business_partner_id: Option<Uuid>,
    pub description: String,
    pub status: ServiceStatus,
    pub warranty_status: WarrantyStatus,
    pub created_at: NaiveDate,
    pub scheduled_date: Option<NaiveDate>,
    pub completed_date: Option<NaiveDate>,
    pub technician_notes: Option<String>,
    pub cost: Option<String>,
    /// Json list of the parts used.
    pub used_parts: Option<String>,
    pub machine_notes: Option<String>,
    pub is_completely_fixed: Option<bool>,
    pub partner_company_name: Option<String>,
    pub outcome: Option<ServiceOutcome>,
    pub pickup: Option<DevicePickup>,
    /// Bumped by the store on every successful update.
    pub version: i32,
}

servicing_architecture::aggregate_root!(ServiceTicket);

impl ServiceTicket {
    /// Computes the ticket after `change`, leaving `self` untouched.
    pub fn apply_status_change(
        &self,
        change: &StatusChange,
        ctx: &TransitionContext,
    ) -> Result<ServiceTicket, StateTransitionError> {
        let target = change.target;
        if self.status.is_terminal() {
            return Err(StateTransitionError::Closed {
                status: self.status,
            });
        }
        if !self.status.can_transition_to(target) {
            return Err(StateTransitionError::NotAllowed {
                from: self.status,
                to: target,
            });
        }
        let missing = |field| StateTransitionError::MissingField { to: target, field };

        let mut next = self.clone();
        if change.technician_notes.is_some() {
            next.technician_notes = change.technician_notes.clone();
        }
        if change.cost.is_some() {
            next.cost = change.cost.clone();
        }
        if change.used_parts.is_some() {
            next.used_parts = change.used_parts.clone();
        }
        if change.machine_notes.is_some() {
            next.machine_notes = change.machine_notes.clone();
        }

        match target {
            ServiceStatus::Scheduled => {
                next.scheduled_date = Some(change.scheduled_date.ok_or(missing("scheduledDate"))?);
                next.clear_provisional_outcome();
            }
            ServiceStatus::InProgress => next.clear_provisional_outcome(),
            ServiceStatus::ClientNotHome | ServiceStatus::ClientNotAnswering => {
                let reason = change
                    .client_unavailable_reason
                    .clone()
                    .ok_or(missing("clientUnavailableReason"))?;
                next.outcome = Some(ServiceOutcome::ClientUnavailable {
                    reason,
                    needs_rescheduling: true,
                    rescheduling_notes: change.rescheduling_notes.clone(),
                });
            }
            ServiceStatus::CustomerRefusesRepair | ServiceStatus::CustomerRefusedRepair => {
                let earlier = match &self.outcome {
                    Some(ServiceOutcome::CustomerRefusal { reason }) => Some(reason.clone()),
                    _ => None,
                };
                let reason = change
                    .customer_refusal_reason
                    .clone()
                    .or(earlier)
                    .ok_or(missing("customerRefusalReason"))?;
                next.outcome = Some(ServiceOutcome::CustomerRefusal { reason });
            }
            ServiceStatus::RepairFailed => {
                let reason = change
                    .repair_failure_reason
                    .clone()
                    .ok_or(missing("repairFailureReason"))?;
                next.outcome = Some(ServiceOutcome::RepairFailure {
                    reason,
                    replaced_parts_before_failure: change.replaced_parts_before_failure.clone(),
                    failure_date: ctx.today,
                });
            }
            ServiceStatus::Completed => {
                if ctx.blocking_removed_parts > 0 && !change.override_removed_parts {
                    return Err(StateTransitionError::RemovedPartsOutstanding {
                        count: ctx.blocking_removed_parts,
                    });
                }
                next.completed_date = Some(change.completed_date.unwrap_or(ctx.today));
                if change.is_completely_fixed.is_some() {
                    next.is_completely_fixed = change.is_completely_fixed;
                }
            }
            ServiceStatus::Delivered | ServiceStatus::DeviceReturned => {
                next.pickup = Some(DevicePickup {
                    picked_up: true,
                    pickup_date: Some(change.pickup_date.unwrap_or(ctx.today)),
                    pickup_notes: change.pickup_notes.clone(),
                });
            }
            ServiceStatus::Pending
            | ServiceStatus::WaitingParts
            | ServiceStatus::DevicePartsRemoved
            | ServiceStatus::Cancelled => {}
        }
        next.status = target;
        Ok(next)
    }

    /// The only way out of a closed ticket: back to work, outcome cleared.
    pub fn reopen(&self, reason: &str) -> Result<ServiceTicket, StateTransitionError> {
        if !self.status.is_terminal() {
            return Err(StateTransitionError::NotClosed {
                status: self.status,
            });
        }
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(StateTransitionError::MissingField {
                to: ServiceStatus::InProgress,
                field: "reason",
            });
        }
        let mut next = self.clone();
        next.status = ServiceStatus::InProgress;
        next.outcome = None;
        next.pickup = None;
        next.completed_date = None;
        let note = format!("Reopened: {reason}");
        next.technician_notes = Some(match &self.technician_notes {
            Some(notes) => format!("{notes}\n{note}"),
            None => note,
        });
        Ok(next)
    }

    pub fn assign_technician(
        &self,
        technician_id: Uuid,
    ) -> Result<ServiceTicket, StateTransitionError> {
        if self.status.is_terminal() {
            return Err(StateTransitionError::Closed {
                status: self.status,
            });
        }
        let mut next = self.clone();
        next.technician_id = Some(technician_id);
        Ok(next)
    }

    fn clear_provisional_outcome(&mut self) {
        if self.outcome.as_ref().is_some_and(ServiceOutcome::is_provisional) {
            self.outcome = None;
        }
    }
}

/// A new ticket as forms submit it.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceTicketInput {
    pub client_id: Option<String>,
    pub appliance_id: Option<String>,
    pub technician_id: TextField,
    pub business_partner_id: TextField,
    pub description: Option<String>,
    pub status: Option<String>,
    pub warranty_status: Option<String>,
    pub created_at: TextField,
    pub scheduled_date: TextField,
    pub technician_notes: TextField,
    pub cost: TextField,
    pub used_parts: TextField,
    pub machine_notes: TextField,
    pub partner_company_name: TextField,
}

impl Validate for ServiceTicketInput {
    type Output = ServiceTicket;

    fn validate(self, ctx: &ValidationContext) -> ValidationResult<ServiceTicket> {
        let mut c = Checker::new(ctx);
        let client_id = c.id("clientId", self.client_id);
        let appliance_id = c.id("applianceId", self.appliance_id);
        let technician_id = c.optional_id("technicianId", self.technician_id);
        let business_partner_id = c.optional_id("businessPartnerId", self.business_partner_id);
        let description = c.text("description", self.description, 5, 1000);
        let status = c.choice::<ServiceStatus>("status", self.status);
        if status.is_some_and(|s| s != ServiceStatus::Pending) {
            c.violation("status", "A new service must start as pending");
        }
        let warranty_status = c.required_choice("warrantyStatus", self.warranty_status);
        let created_at = c.optional_date("createdAt", self.created_at).unwrap_or(c.today());
        let scheduled_date = c.optional_date("scheduledDate", self.scheduled_date);
        let technician_notes = c.optional_text("technicianNotes", self.technician_notes, 0, 1000);
        let cost = c.optional_text("cost", self.cost, 0, 50);
        let used_parts = c.json_list("usedParts", self.used_parts, 1000);
        let machine_notes = c.optional_text("machineNotes", self.machine_notes, 0, 500);
        let partner_company_name =
            c.optional_text("partnerCompanyName", self.partner_company_name, 0, 100);
        c.finish(ServiceTicket {
            id: Uuid::new_v4(),
            client_id,
            appliance_id,
            technician_id,
            business_partner_id,
            description,
            status: ServiceStatus::Pending,
            warranty_status,
            created_at,
            scheduled_date,
            completed_date: None,
            technician_notes,
            cost,
            used_parts,
            machine_notes,
            is_completely_fixed: None,
            partner_company_name,
            outcome: None,
            pickup: None,
            version: 0,
        })
    }
}

impl TryFrom<service::Model> for ServiceTicket {
    type Error = anyhow::Error;

    fn try_from(model: service::Model) -> Result<Self, Self::Error> {
        let service::Model {
            id,
            client_id,
            appliance_id,
            technician_id,
            business_partner_id,
            description,
            status,
            warranty_status,
            created_at,
            scheduled_date,
            completed_date,
            technician_notes,
            cost,
            used_parts,
            machine_notes,
            is_completely_fixed,
            partner_company_name,
            client_unavailable_reason,
            needs_rescheduling,
            rescheduling_notes,
            device_picked_up,
            pickup_date,
            pickup_notes,
            customer_refuses_repair,
            customer_refusal_reason,
            repair_failed,
            repair_failure_reason,
            replaced_parts_before_failure,
            repair_failure_date,
            version,
            updated_at: _,
        } = model;

        let outcome = if repair_failed {
            Some(ServiceOutcome::RepairFailure {
                reason: repair_failure_reason.unwrap_or_default(),
                replaced_parts_before_failure,
                failure_date: repair_failure_date.unwrap_or(created_at),
            })
        } else if customer_refuses_repair {
            Some(ServiceOutcome::CustomerRefusal {
                reason: customer_refusal_reason.unwrap_or_default(),
            })
        } else if needs_rescheduling || client_unavailable_reason.is_some() {
            Some(ServiceOutcome::ClientUnavailable {
                reason: client_unavailable_reason.unwrap_or_default(),
                needs_rescheduling,
                rescheduling_notes,
            })
        } else {
            None
        };
        let pickup = device_picked_up.then_some(DevicePickup {
            picked_up: true,
            pickup_date,
            pickup_notes,
        });

        Ok(Self {
            id,
            client_id,
            appliance_id,
            technician_id,
            business_partner_id,
            description,
            status: ServiceStatus::from_i32(status)
                .ok_or(anyhow!("Wrong service status {status}"))?,
            warranty_status: WarrantyStatus::from_i32(warranty_status)
                .ok_or(anyhow!("Wrong warranty status {warranty_status}"))?,
            created_at,
            scheduled_date,
            completed_date,
            technician_notes,
            cost,
            used_parts,
            machine_notes,
            is_completely_fixed,
            partner_company_name,
            outcome,
            pickup,
            version,
        })
    }
}

impl From<ServiceTicket> for service::Model {
    fn from(entity: ServiceTicket) -> Self {
        let mut model = service::Model {
            id: entity.id,
            client_id: entity.client_id,
            appliance_id: entity.appliance_id,
            technician_id: entity.technician_id,
            business_partner_id: entity.business_partner_id,
            description: entity.description,
            status: entity.status as i32,
            warranty_status: entity.warranty_status as i32,
            created_at: entity.created_at,
            scheduled_date: entity.scheduled_date,
            completed_date: entity.completed_date,
            technician_notes: entity.technician_notes,
            cost: entity.cost,
            used_parts: entity.used_parts,
            machine_notes: entity.machine_notes,
            is_completely_fixed: entity.is_completely_fixed,
            partner_company_name: entity.partner_company_name,
            client_unavailable_reason: None,
            needs_rescheduling: false,
            rescheduling_notes: None,
            device_picked_up: false,
            pickup_date: None,
            pickup_notes: None,
            customer_refuses_repair: false,
            customer_refusal_reason: None,
            repair_failed: false,
            repair_failure_reason: None,
            replaced_parts_before_failure: None,
            repair_failure_date: None,
            version: entity.version,
            updated_at: Utc::now(),
        };
        match entity.outcome {
            Some(ServiceOutcome::ClientUnavailable {
                reason,
                needs_rescheduling,
                rescheduling_notes,
            }) => {
                model.client_unavailable_reason = Some(reason);
                model.needs_rescheduling = needs_rescheduling;
                model.rescheduling_notes = rescheduling_notes;
            }
            Some(ServiceOutcome::CustomerRefusal { reason }) => {
                model.customer_refuses_repair = true;
                model.customer_refusal_reason = Some(reason);
            }
            Some(ServiceOutcome::RepairFailure {
                reason,
                replaced_parts_before_failure,
                failure_date,
            }) => {
                model.repair_failed = true;
                model.repair_failure_reason = Some(reason);
                model.replaced_parts_before_failure = replaced_parts_before_failure;
                model.repair_failure_date = Some(failure_date);
            }
            None => {}
        }
        if let Some(pickup) = entity.pickup {
            model.device_picked_up = pickup.picked_up;
            model.pickup_date = pickup.pickup_date;
            model.pickup_notes = pickup.pickup_notes;
        }
        model
    }
}
