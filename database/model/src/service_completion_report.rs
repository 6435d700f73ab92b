//! Technicians' write-ups of finished repairs, one per service.
use sea_orm::{entity::prelude::*, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "service_completion_report")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub service_id: Uuid,
    pub technician_id: Uuid,
    pub work_description: String,
    pub problem_diagnosis: String,
    pub solution_description: String,
    pub warranty_status: i32,
    pub warranty_period: Option<String>,
    pub used_spare_parts: String,
    pub labor_time: i32,
    pub total_cost: Option<String>,
    pub client_satisfaction: Option<i32>,
    pub additional_notes: Option<String>,
    pub technicians_signature: Option<String>,
    pub photos_before: Option<String>,
    pub photos_after: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_set(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            service_id: Set(self.service_id),
            technician_id: Set(self.technician_id),
            work_description: Set(self.work_description),
            problem_diagnosis: Set(self.problem_diagnosis),
            solution_description: Set(self.solution_description),
            warranty_status: Set(self.warranty_status),
            warranty_period: Set(self.warranty_period),
            used_spare_parts: Set(self.used_spare_parts),
            labor_time: Set(self.labor_time),
            total_cost: Set(self.total_cost),
            client_satisfaction: Set(self.client_satisfaction),
            additional_notes: Set(self.additional_notes),
            technicians_signature: Set(self.technicians_signature),
            photos_before: Set(self.photos_before),
            photos_after: Set(self.photos_after),
            created_at: Set(self.created_at),
            updated_at: Set(self.updated_at),
        }
    }
}
