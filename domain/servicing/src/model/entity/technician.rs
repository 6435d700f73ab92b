use database_model::technician;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::vo::{Checker, PhoneRule, TextField, Validate, ValidationContext, ValidationResult};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technician {
    pub id: Uuid,
    pub full_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub specialization: Option<String>,
    /// Inactive technicians keep their history but get no new work.
    pub active: bool,
}

servicing_architecture::aggregate_root!(Technician);

#[derive(Deserialize, Debug, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct TechnicianInput {
    pub full_name: Option<String>,
    pub phone: TextField,
    pub email: TextField,
    pub specialization: TextField,
    pub active: bool,
}

impl Default for TechnicianInput {
    fn default() -> Self {
        Self {
            full_name: None,
            phone: TextField::Absent,
            email: TextField::Absent,
            specialization: TextField::Absent,
            active: true,
        }
    }
}

impl Validate for TechnicianInput {
    type Output = Technician;

    fn validate(self, ctx: &ValidationContext) -> ValidationResult<Technician> {
        let mut c = Checker::new(ctx);
        let technician = Technician {
            id: Uuid::new_v4(),
            full_name: c.text("fullName", self.full_name, 2, 100),
            phone: c.optional_phone("phone", self.phone, PhoneRule::User),
            email: c.optional_email("email", self.email),
            specialization: c.optional_text("specialization", self.specialization, 0, 100),
            active: self.active,
        };
        c.finish(technician)
    }
}

impl From<technician::Model> for Technician {
    fn from(model: technician::Model) -> Self {
        Self {
            id: model.id,
            full_name: model.full_name,
            phone: model.phone,
            email: model.email,
            specialization: model.specialization,
            active: model.active,
        }
    }
}

impl From<Technician> for technician::Model {
    fn from(entity: Technician) -> Self {
        Self {
            id: entity.id,
            full_name: entity.full_name,
            phone: entity.phone,
            email: entity.email,
            specialization: entity.specialization,
            active: entity.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_technician_defaults_to_active() {
        let ctx = ValidationContext::on(NaiveDate::from_ymd_opt(2024, 5, 20).unwrap());
        let input: TechnicianInput =
            serde_json::from_str(r#"{"fullName": "Jovan Jovanović", "phone": ""}"#).unwrap();
        let technician = input.validate(&ctx).unwrap();
        assert!(technician.active);
        assert_eq!(technician.phone, None);

        let input: TechnicianInput =
            serde_json::from_str(r#"{"fullName": "Jovan", "phone": "067/123-456"}"#).unwrap();
        assert!(input.validate(&ctx).unwrap_err().has("phone"));
    }
}
