use database_model::appliance_category;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::vo::{Checker, Validate, ValidationContext, ValidationResult};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApplianceCategory {
    pub id: Uuid,
    pub name: String,
    pub icon: String,
}

servicing_architecture::aggregate_root!(ApplianceCategory);

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct ApplianceCategoryInput {
    pub name: Option<String>,
    pub icon: Option<String>,
}

impl Validate for ApplianceCategoryInput {
    type Output = ApplianceCategory;

    fn validate(self, ctx: &ValidationContext) -> ValidationResult<ApplianceCategory> {
        let mut c = Checker::new(ctx);
        let category = ApplianceCategory {
            id: Uuid::new_v4(),
            name: c.trimmed_text("name", self.name, 2, 100),
            icon: c.trimmed_text("icon", self.icon, 1, 50),
        };
        c.finish(category)
    }
}

impl From<appliance_category::Model> for ApplianceCategory {
    fn from(model: appliance_category::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            icon: model.icon,
        }
    }
}

impl From<ApplianceCategory> for appliance_category::Model {
    fn from(entity: ApplianceCategory) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            icon: entity.icon,
        }
    }
}
