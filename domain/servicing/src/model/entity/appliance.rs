use chrono::NaiveDate;
use database_model::appliance;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::vo::{Checker, TextField, Validate, ValidationContext, ValidationResult};

/// A device owned by a client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appliance {
    pub id: Uuid,
    pub client_id: Uuid,
    pub category_id: Uuid,
    pub manufacturer_id: Uuid,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

servicing_architecture::aggregate_root!(Appliance);

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct ApplianceInput {
    pub client_id: Option<String>,
    pub category_id: Option<String>,
    pub manufacturer_id: Option<String>,
    pub model: TextField,
    pub serial_number: TextField,
    pub purchase_date: TextField,
    pub notes: TextField,
}

impl Validate for ApplianceInput {
    type Output = Appliance;

    fn validate(self, ctx: &ValidationContext) -> ValidationResult<Appliance> {
        let mut c = Checker::new(ctx);
        let purchase_date = c.optional_date("purchaseDate", self.purchase_date);
        c.not_in_future("purchaseDate", purchase_date);
        let appliance = Appliance {
            id: Uuid::new_v4(),
            client_id: c.id("clientId", self.client_id),
            category_id: c.id("categoryId", self.category_id),
            manufacturer_id: c.id("manufacturerId", self.manufacturer_id),
            model: c.optional_text("model", self.model, 1, 100),
            serial_number: c.optional_text("serialNumber", self.serial_number, 0, 50),
            purchase_date,
            notes: c.optional_text("notes", self.notes, 0, 500),
        };
        c.finish(appliance)
    }
}

impl From<appliance::Model> for Appliance {
    fn from(model: appliance::Model) -> Self {
        Self {
            id: model.id,
            client_id: model.client_id,
            category_id: model.category_id,
            manufacturer_id: model.manufacturer_id,
            model: model.model,
            serial_number: model.serial_number,
            purchase_date: model.purchase_date,
            notes: model.notes,
        }
    }
}

impl From<Appliance> for appliance::Model {
    fn from(entity: Appliance) -> Self {
        Self {
            id: entity.id,
            client_id: entity.client_id,
            category_id: entity.category_id,
            manufacturer_id: entity.manufacturer_id,
            model: entity.model,
            serial_number: entity.serial_number,
            purchase_date: entity.purchase_date,
            notes: entity.notes,
        }
    }
}
