use anyhow::anyhow;
use chrono::{DateTime, Utc};
use database_model::service_completion_report;
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{
    entity::ServiceTicket,
    vo::{
        Checker, ServiceStatus, StatusChange, TextField, Validate, ValidationContext,
        ValidationResult, WarrantyStatus,
    },
};

/// The technician's write-up of a finished repair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCompletionReport {
    pub id: Uuid,
    pub service_id: Uuid,
    pub technician_id: Uuid,
    pub work_description: String,
    pub problem_diagnosis: String,
    pub solution_description: String,
    pub warranty_status: WarrantyStatus,
    pub warranty_period: Option<String>,
    /// Json list of the spare parts that went into the repair.
    pub used_spare_parts: String,
    /// Minutes spent on the job.
    pub labor_time: i32,
    pub total_cost: Option<String>,
    pub client_satisfaction: Option<i32>,
    pub additional_notes: Option<String>,
    pub technicians_signature: Option<String>,
    pub photos_before: Option<String>,
    pub photos_after: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

servicing_architecture::aggregate_root!(ServiceCompletionReport);

impl ServiceCompletionReport {
    /// The status change that closes the ticket this report documents.
    pub fn completion(&self) -> StatusChange {
        StatusChange {
            technician_notes: Some(self.work_description.clone()),
            cost: self.total_cost.clone(),
            used_parts: Some(self.used_spare_parts.clone()),
            is_completely_fixed: Some(true),
            ..StatusChange::to(ServiceStatus::Completed)
        }
    }
}

/// A ticket closed together with its report.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedService {
    pub service: ServiceTicket,
    pub report: ServiceCompletionReport,
}

/// The service id comes from the route, not the body.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceCompletionReportInput {
    pub technician_id: Option<String>,
    pub work_description: Option<String>,
    pub problem_diagnosis: Option<String>,
    pub solution_description: Option<String>,
    pub warranty_status: Option<String>,
    pub warranty_period: TextField,
    pub used_spare_parts: TextField,
    pub labor_time: Option<i64>,
    pub total_cost: TextField,
    pub client_satisfaction: Option<i64>,
    pub additional_notes: TextField,
    pub technicians_signature: TextField,
    pub photos_before: TextField,
    pub photos_after: TextField,
}

impl Validate for ServiceCompletionReportInput {
    type Output = ServiceCompletionReport;

    fn validate(self, ctx: &ValidationContext) -> ValidationResult<ServiceCompletionReport> {
        let mut c = Checker::new(ctx);
        let now = Utc::now();
        let report = ServiceCompletionReport {
            id: Uuid::new_v4(),
            service_id: Uuid::nil(),
            technician_id: c.id("technicianId", self.technician_id),
            work_description: c.trimmed_text("workDescription", self.work_description, 10, 1000),
            problem_diagnosis: c.trimmed_text("problemDiagnosis", self.problem_diagnosis, 10, 500),
            solution_description: c.trimmed_text(
                "solutionDescription",
                self.solution_description,
                10,
                500,
            ),
            warranty_status: c.required_choice("warrantyStatus", self.warranty_status),
            warranty_period: c.optional_text("warrantyPeriod", self.warranty_period, 0, 50),
            used_spare_parts: c
                .json_list("usedSpareParts", self.used_spare_parts, 2000)
                .unwrap_or_else(|| "[]".to_string()),
            labor_time: c.in_range("laborTime", self.labor_time, 1, 1440),
            total_cost: c.optional_text("totalCost", self.total_cost, 0, 20),
            client_satisfaction: self
                .client_satisfaction
                .map(|v| c.in_range("clientSatisfaction", Some(v), 1, 5)),
            additional_notes: c.optional_text("additionalNotes", self.additional_notes, 0, 1000),
            technicians_signature: c.optional_text(
                "techniciansSignature",
                self.technicians_signature,
                0,
                100,
            ),
            photos_before: c.json_list("photosBefore", self.photos_before, 5000),
            photos_after: c.json_list("photosAfter", self.photos_after, 5000),
            created_at: now,
            updated_at: now,
        };
        c.finish(report)
    }
}

impl TryFrom<service_completion_report::Model> for ServiceCompletionReport {
    type Error = anyhow::Error;

    fn try_from(model: service_completion_report::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            service_id: model.service_id,
            technician_id: model.technician_id,
            work_description: model.work_description,
            problem_diagnosis: model.problem_diagnosis,
            solution_description: model.solution_description,
            warranty_status: WarrantyStatus::from_i32(model.warranty_status)
                .ok_or(anyhow!("Wrong warranty status {}", model.warranty_status))?,
            warranty_period: model.warranty_period,
            used_spare_parts: model.used_spare_parts,
            labor_time: model.labor_time,
            total_cost: model.total_cost,
            client_satisfaction: model.client_satisfaction,
            additional_notes: model.additional_notes,
            technicians_signature: model.technicians_signature,
            photos_before: model.photos_before,
            photos_after: model.photos_after,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl From<ServiceCompletionReport> for service_completion_report::Model {
    fn from(entity: ServiceCompletionReport) -> Self {
        Self {
            id: entity.id,
            service_id: entity.service_id,
            technician_id: entity.technician_id,
            work_description: entity.work_description,
            problem_diagnosis: entity.problem_diagnosis,
            solution_description: entity.solution_description,
            warranty_status: entity.warranty_status as i32,
            warranty_period: entity.warranty_period,
            used_spare_parts: entity.used_spare_parts,
            labor_time: entity.labor_time,
            total_cost: entity.total_cost,
            client_satisfaction: entity.client_satisfaction,
            additional_notes: entity.additional_notes,
            technicians_signature: entity.technicians_signature,
            photos_before: entity.photos_before,
            photos_after: entity.photos_after,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn ctx() -> ValidationContext {
        ValidationContext::on(NaiveDate::from_ymd_opt(2024, 5, 20).unwrap())
    }

    fn input() -> ServiceCompletionReportInput {
        ServiceCompletionReportInput {
            technician_id: Some(Uuid::new_v4().to_string()),
            work_description: Some("Replaced the drain pump".to_string()),
            problem_diagnosis: Some("Pump impeller broken".to_string()),
            solution_description: Some("New pump fitted and tested".to_string()),
            warranty_status: Some("van garancije".to_string()),
            labor_time: Some(90),
            ..Default::default()
        }
    }

    #[test]
    fn test_minimal_report() {
        let report = input().validate(&ctx()).unwrap();
        assert_eq!(report.used_spare_parts, "[]");
        assert_eq!(report.warranty_status, WarrantyStatus::OutOfWarranty);
        assert_eq!(report.labor_time, 90);
        assert_eq!(report.client_satisfaction, None);
    }

    #[test]
    fn test_report_rules() {
        let err = ServiceCompletionReportInput {
            work_description: Some("short".to_string()),
            problem_diagnosis: Some("x".repeat(501)),
            warranty_status: Some("lifetime".to_string()),
            labor_time: Some(1441),
            client_satisfaction: Some(6),
            used_spare_parts: "pump".into(),
            total_cost: "9".repeat(21).as_str().into(),
            ..Default::default()
        }
        .validate(&ctx())
        .unwrap_err();
        for field in [
            "technicianId",
            "workDescription",
            "problemDiagnosis",
            "solutionDescription",
            "warrantyStatus",
            "laborTime",
            "clientSatisfaction",
            "usedSpareParts",
            "totalCost",
        ] {
            assert!(err.has(field), "{field} should be reported");
        }

        let err = ServiceCompletionReportInput {
            labor_time: Some(0),
            ..input()
        }
        .validate(&ctx())
        .unwrap_err();
        assert!(err.has("laborTime"));
    }

    #[test]
    fn test_completion_carries_the_write_up() {
        let report = ServiceCompletionReportInput {
            total_cost: "4.500 RSD".into(),
            used_spare_parts: r#"["drain pump"]"#.into(),
            ..input()
        }
        .validate(&ctx())
        .unwrap();
        let change = report.completion();
        assert_eq!(change.target, ServiceStatus::Completed);
        assert_eq!(change.cost.as_deref(), Some("4.500 RSD"));
        assert_eq!(change.used_parts.as_deref(), Some(r#"["drain pump"]"#));
        assert_eq!(change.technician_notes.as_deref(), Some("Replaced the drain pump"));
        assert_eq!(change.is_completely_fixed, Some(true));
        assert!(!change.override_removed_parts);
    }
}
