use database_model::manufacturer;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::vo::{Checker, Validate, ValidationContext, ValidationResult};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Manufacturer {
    pub id: Uuid,
    pub name: String,
}

servicing_architecture::aggregate_root!(Manufacturer);

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct ManufacturerInput {
    pub name: Option<String>,
}

impl Validate for ManufacturerInput {
    type Output = Manufacturer;

    fn validate(self, ctx: &ValidationContext) -> ValidationResult<Manufacturer> {
        let mut c = Checker::new(ctx);
        let name = c.trimmed_text("name", self.name, 2, 100);
        c.finish(Manufacturer {
            id: Uuid::new_v4(),
            name,
        })
    }
}

impl From<manufacturer::Model> for Manufacturer {
    fn from(model: manufacturer::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

impl From<Manufacturer> for manufacturer::Model {
    fn from(entity: Manufacturer) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}
