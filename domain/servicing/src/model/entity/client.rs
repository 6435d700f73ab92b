use chrono::{DateTime, Utc};
use database_model::client;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::vo::{Checker, PhoneRule, TextField, Validate, ValidationContext, ValidationResult};

/// Someone owning appliances we repair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: Uuid,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

servicing_architecture::aggregate_root!(Client);

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientInput {
    pub full_name: Option<String>,
    pub email: TextField,
    pub phone: Option<String>,
    pub address: TextField,
    pub city: TextField,
    pub notes: TextField,
}

impl Validate for ClientInput {
    type Output = Client;

    fn validate(self, ctx: &ValidationContext) -> ValidationResult<Client> {
        let mut c = Checker::new(ctx);
        let client = Client {
            id: Uuid::new_v4(),
            full_name: c.text("fullName", self.full_name, 2, 100),
            email: c.optional_email("email", self.email),
            phone: c.phone("phone", self.phone, PhoneRule::Client),
            address: c.optional_text("address", self.address, 3, usize::MAX),
            city: c.optional_text("city", self.city, 2, usize::MAX),
            notes: self.notes.into_option(),
            created_at: Utc::now(),
        };
        c.finish(client)
    }
}

impl From<client::Model> for Client {
    fn from(model: client::Model) -> Self {
        Self {
            id: model.id,
            full_name: model.full_name,
            email: model.email,
            phone: model.phone,
            address: model.address,
            city: model.city,
            notes: model.notes,
            created_at: model.created_at,
        }
    }
}

impl From<Client> for client::Model {
    fn from(entity: Client) -> Self {
        Self {
            id: entity.id,
            full_name: entity.full_name,
            email: entity.email,
            phone: entity.phone,
            address: entity.address,
            city: entity.city,
            notes: entity.notes,
            created_at: entity.created_at,
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
    fn test_client_with_blank_optionals() {
        let input: ClientInput = serde_json::from_str(
            r#"{"fullName": "Marija Petrović", "phone": "067/123-456", "email": "", "address": "", "city": ""}"#,
        )
        .unwrap();
        let client = input.validate(&ctx()).unwrap();
        assert_eq!(client.full_name, "Marija Petrović");
        assert_eq!(client.email, None);
        assert_eq!(client.address, None);
        assert_eq!(client.city, None);
    }

    #[test]
    fn test_client_violations_are_collected() {
        let input = ClientInput {
            full_name: Some("M".to_string()),
            phone: Some("067 abc".to_string()),
            address: "Ul".into(),
            city: "B".into(),
            email: "marija@".into(),
            ..Default::default()
        };
        let err = input.validate(&ctx()).unwrap_err();
        for field in ["fullName", "phone", "address", "city", "email"] {
            assert!(err.has(field), "{field} should be reported");
        }
    }

    #[test]
    fn test_client_phone_is_required() {
        let input = ClientInput {
            full_name: Some("Marko Marković".to_string()),
            ..Default::default()
        };
        let err = input.validate(&ctx()).unwrap_err();
        assert_eq!(err.messages_for("phone"), vec!["phone is required"]);
    }
}
