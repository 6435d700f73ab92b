use chrono::NaiveDate;
use database_model::prelude::*;
use domain_servicing::{
    model::entity::{AlertStatus, MaintenanceAlert, MaintenanceSchedule},
    repository::{MaintenanceAlertRepo, MaintenanceScheduleRepo},
};
use sea_orm::{prelude::*, PaginatorTrait, QueryOrder};

use crate::infrastructure::database::{orm::orm_repository, OrmRepo};

orm_repository!(
    MaintenanceSchedule,
    MaintenanceScheduleEntity,
    MaintenanceScheduleModel,
    "maintenance_schedule"
);
orm_repository!(
    MaintenanceAlert,
    MaintenanceAlertEntity,
    MaintenanceAlertModel,
    "maintenance_alert"
);

#[async_trait::async_trait]
impl MaintenanceScheduleRepo for OrmRepo {
    async fn get_due(&self, horizon: NaiveDate) -> anyhow::Result<Vec<MaintenanceSchedule>> {
        let res = MaintenanceScheduleEntity::find()
            .filter(MaintenanceScheduleColumn::IsActive.eq(true))
            .filter(MaintenanceScheduleColumn::NextMaintenanceDate.lte(horizon))
            .order_by_asc(MaintenanceScheduleColumn::NextMaintenanceDate)
            .all(self.connection())
            .await?;
        let mut r = vec![];
        for el in res.into_iter() {
            r.push(el.try_into()?);
        }
        Ok(r)
    }
}

#[async_trait::async_trait]
impl MaintenanceAlertRepo for OrmRepo {
    async fn has_pending(&self, schedule_id: Uuid) -> anyhow::Result<bool> {
        let count = MaintenanceAlertEntity::find()
            .filter(MaintenanceAlertColumn::ScheduleId.eq(schedule_id))
            .filter(MaintenanceAlertColumn::Status.eq(AlertStatus::Pending as i32))
            .count(self.connection())
            .await?;
        Ok(count > 0)
    }

    async fn get_pending(&self, schedule_id: Uuid) -> anyhow::Result<Vec<MaintenanceAlert>> {
        let res = MaintenanceAlertEntity::find()
            .filter(MaintenanceAlertColumn::ScheduleId.eq(schedule_id))
            .filter(MaintenanceAlertColumn::Status.eq(AlertStatus::Pending as i32))
            .order_by_asc(MaintenanceAlertColumn::AlertDate)
            .all(self.connection())
            .await?;
        let mut r = vec![];
        for el in res.into_iter() {
            r.push(el.try_into()?);
        }
        Ok(r)
    }
}
