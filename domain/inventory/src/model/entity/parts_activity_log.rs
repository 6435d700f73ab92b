use anyhow::anyhow;
use chrono::{DateTime, Utc};
use database_model::parts_activity_log;
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;
use uuid::Uuid;

use crate::model::vo::PartAction;

/// One line of the stock audit trail.
#[derive(TypedBuilder, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartsActivityLog {
    #[builder(default = Uuid::new_v4())]
    pub id: Uuid,
    pub part_id: Uuid,
    pub action: PartAction,
    #[builder(default, setter(strip_option))]
    pub previous_quantity: Option<i32>,
    #[builder(default, setter(strip_option))]
    pub new_quantity: Option<i32>,
    #[builder(default, setter(into))]
    pub technician_id: Option<Uuid>,
    #[builder(default, setter(into))]
    pub service_id: Option<Uuid>,
    #[builder(default, setter(into))]
    pub user_id: Option<Uuid>,
    #[builder(default, setter(strip_option, into))]
    pub description: Option<String>,
    pub timestamp: DateTime<Utc>,
}

servicing_architecture::aggregate_root!(PartsActivityLog);

impl TryFrom<parts_activity_log::Model> for PartsActivityLog {
    type Error = anyhow::Error;

    fn try_from(model: parts_activity_log::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            part_id: model.part_id,
            action: PartAction::from_i32(model.action)
                .ok_or(anyhow!("Wrong part action {}", model.action))?,
            previous_quantity: model.previous_quantity,
            new_quantity: model.new_quantity,
            technician_id: model.technician_id,
            service_id: model.service_id,
            user_id: model.user_id,
            description: model.description,
            timestamp: model.timestamp,
        })
    }
}

impl From<PartsActivityLog> for parts_activity_log::Model {
    fn from(entity: PartsActivityLog) -> Self {
        Self {
            id: entity.id,
            part_id: entity.part_id,
            action: entity.action as i32,
            previous_quantity: entity.previous_quantity,
            new_quantity: entity.new_quantity,
            technician_id: entity.technician_id,
            service_id: entity.service_id,
            user_id: entity.user_id,
            description: entity.description,
            timestamp: entity.timestamp,
        }
    }
}
