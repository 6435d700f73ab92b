use anyhow::anyhow;
use chrono::{DateTime, Utc};
use database_model::user;
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::vo::{
    Checker, PhoneRule, TextField, UserRole, Validate, ValidationContext, ValidationResult,
};

/// A portal account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub full_name: String,
    pub role: UserRole,
    pub technician_id: Option<Uuid>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company_name: Option<String>,
    pub is_verified: bool,
    pub registered_at: DateTime<Utc>,
}

servicing_architecture::aggregate_root!(User);

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct UserInput {
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub role: Option<String>,
    pub technician_id: TextField,
    pub email: Option<String>,
    pub phone: TextField,
    pub company_name: TextField,
}

impl Validate for UserInput {
    type Output = User;

    fn validate(self, ctx: &ValidationContext) -> ValidationResult<User> {
        let mut c = Checker::new(ctx);
        let role = c.choice::<UserRole>("role", self.role).unwrap_or_default();
        let technician_id = c.optional_id("technicianId", self.technician_id);
        if role == UserRole::Technician && technician_id.is_none() && !c.has_violation("technicianId") {
            c.violation("technicianId", "technicianId is required for technician accounts");
        }
        let user = User {
            id: Uuid::new_v4(),
            username: c.text("username", self.username, 3, 50),
            full_name: c.text("fullName", self.full_name, 2, 100),
            role,
            technician_id,
            email: Some(c.email("email", self.email)),
            phone: c.optional_phone("phone", self.phone, PhoneRule::User),
            company_name: c.optional_text("companyName", self.company_name, 0, 200),
            is_verified: role == UserRole::Admin,
            registered_at: Utc::now(),
        };
        c.finish(user)
    }
}

impl TryFrom<user::Model> for User {
    type Error = anyhow::Error;

    fn try_from(model: user::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            username: model.username,
            full_name: model.full_name,
            role: UserRole::from_i32(model.role).ok_or(anyhow!("Wrong user role {}", model.role))?,
            technician_id: model.technician_id,
            email: model.email,
            phone: model.phone,
            company_name: model.company_name,
            is_verified: model.is_verified,
            registered_at: model.registered_at,
        })
    }
}

impl From<User> for user::Model {
    fn from(entity: User) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            full_name: entity.full_name,
            role: entity.role as i32,
            technician_id: entity.technician_id,
            email: entity.email,
            phone: entity.phone,
            company_name: entity.company_name,
            is_verified: entity.is_verified,
            registered_at: entity.registered_at,
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

    #[test]
    fn test_user_rules() {
        let input = UserInput {
            username: Some("ab".to_string()),
            full_name: Some("A".to_string()),
            phone: "12345".into(),
            ..Default::default()
        };
        let err = input.validate(&ctx()).unwrap_err();
        assert_eq!(err.messages_for("username"), vec!["username must be at least 3 characters"]);
        assert_eq!(err.messages_for("email"), vec!["email is required"]);
        assert!(err.has("fullName"));
        assert!(err.has("phone"));
    }

    #[test]
    fn test_technician_account_needs_technician() {
        let input: UserInput = serde_json::from_str(
            r#"{"username": "jovan", "fullName": "Jovan", "role": "technician", "email": "jovan@servis.me"}"#,
        )
        .unwrap();
        assert!(input.validate(&ctx()).unwrap_err().has("technicianId"));
    }

    #[test]
    fn test_partner_account() {
        let input: UserInput = serde_json::from_str(
            r#"{"username": "partner", "fullName": "Beli Partner", "role": "business_partner", "email": "p@firma.me", "companyName": "Firma doo", "phone": ""}"#,
        )
        .unwrap();
        let user = input.validate(&ctx()).unwrap();
        assert_eq!(user.role, UserRole::BusinessPartner);
        assert_eq!(user.company_name.as_deref(), Some("Firma doo"));
        assert!(!user.is_verified);
    }
}
