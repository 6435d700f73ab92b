use anyhow::anyhow;
use chrono::{DateTime, Utc};
use database_model::supplier;
use domain_servicing::model::vo::{Checker, TextField, Validate, ValidationContext, ValidationResult};
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::vo::IntegrationMethod;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: Uuid,
    pub name: String,
    pub company_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub integration_method: IntegrationMethod,
    /// 1 is tried first.
    pub priority: i32,
    pub average_delivery_days: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

servicing_architecture::aggregate_root!(Supplier);

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct SupplierInput {
    pub name: Option<String>,
    pub company_name: Option<String>,
    pub email: Option<String>,
    pub phone: TextField,
    pub website: TextField,
    pub integration_method: Option<String>,
    pub priority: Option<i64>,
    pub average_delivery_days: Option<i64>,
}

impl Validate for SupplierInput {
    type Output = Supplier;

    fn validate(self, ctx: &ValidationContext) -> ValidationResult<Supplier> {
        let mut c = Checker::new(ctx);
        let supplier = Supplier {
            id: Uuid::new_v4(),
            name: c.text("name", self.name, 2, 100),
            company_name: c.text("companyName", self.company_name, 2, 200),
            email: c.email("email", self.email),
            phone: c.optional_text("phone", self.phone, 0, 50),
            website: c.url("website", self.website),
            integration_method: c
                .choice("integrationMethod", self.integration_method)
                .unwrap_or_default(),
            priority: c.in_range("priority", Some(self.priority.unwrap_or(5)), 1, 10),
            average_delivery_days: c.in_range(
                "averageDeliveryDays",
                Some(self.average_delivery_days.unwrap_or(7)),
                1,
                365,
            ),
            is_active: true,
            created_at: Utc::now(),
        };
        c.finish(supplier)
    }
}

impl TryFrom<supplier::Model> for Supplier {
    type Error = anyhow::Error;

    fn try_from(model: supplier::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            name: model.name,
            company_name: model.company_name,
            email: model.email,
            phone: model.phone,
            website: model.website,
            integration_method: IntegrationMethod::from_i32(model.integration_method)
                .ok_or(anyhow!("Wrong integration method {}", model.integration_method))?,
            priority: model.priority,
            average_delivery_days: model.average_delivery_days,
            is_active: model.is_active,
            created_at: model.created_at,
        })
    }
}

impl From<Supplier> for supplier::Model {
    fn from(entity: Supplier) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            company_name: entity.company_name,
            email: entity.email,
            phone: entity.phone,
            website: entity.website,
            integration_method: entity.integration_method as i32,
            priority: entity.priority,
            average_delivery_days: entity.average_delivery_days,
            is_active: entity.is_active,
            created_at: entity.created_at,
        }
    }
}
