use anyhow::anyhow;
use chrono::{DateTime, Duration, Months, NaiveDate, Utc};
use database_model::{maintenance_alert, maintenance_schedule};
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::vo::{Checker, TextField, Validate, ValidationContext, ValidationResult};

#[derive(
    FromPrimitive, ToPrimitive, Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceFrequency {
    Monthly,
    Quarterly,
    Biannual,
    #[default]
    Annual,
    /// Every `custom_interval_days`.
    Custom,
}

/// Recurring upkeep of one appliance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceSchedule {
    pub id: Uuid,
    pub appliance_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub frequency: MaintenanceFrequency,
    pub last_maintenance_date: Option<NaiveDate>,
    pub next_maintenance_date: NaiveDate,
    pub custom_interval_days: Option<i32>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

servicing_architecture::aggregate_root!(MaintenanceSchedule);

impl MaintenanceSchedule {
    /// The first due date after maintenance done on `date`.
    pub fn next_after(&self, date: NaiveDate) -> Option<NaiveDate> {
        match self.frequency {
            MaintenanceFrequency::Monthly => date.checked_add_months(Months::new(1)),
            MaintenanceFrequency::Quarterly => date.checked_add_months(Months::new(3)),
            MaintenanceFrequency::Biannual => date.checked_add_months(Months::new(6)),
            MaintenanceFrequency::Annual => date.checked_add_months(Months::new(12)),
            MaintenanceFrequency::Custom => {
                let days = self.custom_interval_days.filter(|d| *d >= 1)?;
                date.checked_add_signed(Duration::days(days as i64))
            }
        }
    }

    /// Records maintenance done on `done_on` and moves the due date forward.
    pub fn advance(&self, done_on: NaiveDate) -> anyhow::Result<MaintenanceSchedule> {
        let next = self
            .next_after(done_on)
            .ok_or(anyhow!("Cannot compute the next maintenance date of {}", self.id))?;
        let mut schedule = self.clone();
        schedule.last_maintenance_date = Some(done_on);
        schedule.next_maintenance_date = next;
        schedule.updated_at = Utc::now();
        Ok(schedule)
    }

    pub fn is_due(&self, horizon: NaiveDate) -> bool {
        self.is_active && self.next_maintenance_date <= horizon
    }
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct MaintenanceScheduleInput {
    pub appliance_id: Option<String>,
    pub name: Option<String>,
    pub description: TextField,
    pub frequency: Option<String>,
    pub last_maintenance_date: TextField,
    pub next_maintenance_date: Option<String>,
    pub custom_interval_days: Option<i64>,
}

impl Validate for MaintenanceScheduleInput {
    type Output = MaintenanceSchedule;

    fn validate(self, ctx: &ValidationContext) -> ValidationResult<MaintenanceSchedule> {
        let mut c = Checker::new(ctx);
        let frequency: MaintenanceFrequency = c.required_choice("frequency", self.frequency);
        let custom_interval_days = match (frequency, self.custom_interval_days) {
            (MaintenanceFrequency::Custom, days) => {
                Some(c.in_range("customIntervalDays", days, 1, 3650))
            }
            (_, Some(_)) => {
                c.violation(
                    "customIntervalDays",
                    "customIntervalDays is only allowed with a custom frequency",
                );
                None
            }
            (_, None) => None,
        };
        let now = Utc::now();
        let schedule = MaintenanceSchedule {
            id: Uuid::new_v4(),
            appliance_id: c.id("applianceId", self.appliance_id),
            name: c.text("name", self.name, 2, 100),
            description: c.optional_text("description", self.description, 0, 500),
            frequency,
            last_maintenance_date: c
                .optional_date("lastMaintenanceDate", self.last_maintenance_date),
            next_maintenance_date: c.date("nextMaintenanceDate", self.next_maintenance_date),
            custom_interval_days,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        c.finish(schedule)
    }
}

impl TryFrom<maintenance_schedule::Model> for MaintenanceSchedule {
    type Error = anyhow::Error;

    fn try_from(model: maintenance_schedule::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            appliance_id: model.appliance_id,
            name: model.name,
            description: model.description,
            frequency: MaintenanceFrequency::from_i32(model.frequency)
                .ok_or(anyhow!("Wrong maintenance frequency {}", model.frequency))?,
            last_maintenance_date: model.last_maintenance_date,
            next_maintenance_date: model.next_maintenance_date,
            custom_interval_days: model.custom_interval_days,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl From<MaintenanceSchedule> for maintenance_schedule::Model {
    fn from(entity: MaintenanceSchedule) -> Self {
        Self {
            id: entity.id,
            appliance_id: entity.appliance_id,
            name: entity.name,
            description: entity.description,
            frequency: entity.frequency as i32,
            last_maintenance_date: entity.last_maintenance_date,
            next_maintenance_date: entity.next_maintenance_date,
            custom_interval_days: entity.custom_interval_days,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(
    FromPrimitive, ToPrimitive, Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    #[default]
    Pending,
    Sent,
    Acknowledged,
    Completed,
}

/// Raised when a schedule comes due.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceAlert {
    pub id: Uuid,
    pub schedule_id: Uuid,
    pub title: String,
    pub message: String,
    pub alert_date: NaiveDate,
    pub status: AlertStatus,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

servicing_architecture::aggregate_root!(MaintenanceAlert);

impl MaintenanceAlert {
    pub fn for_schedule(schedule: &MaintenanceSchedule, today: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            schedule_id: schedule.id,
            title: format!("Maintenance due: {}", schedule.name),
            message: format!(
                "Maintenance \"{}\" is due on {}.",
                schedule.name, schedule.next_maintenance_date
            ),
            alert_date: today,
            status: AlertStatus::Pending,
            is_read: false,
            created_at: Utc::now(),
        }
    }

    /// The alert once the maintenance it announced has been done.
    pub fn complete(&self) -> Self {
        Self {
            status: AlertStatus::Completed,
            is_read: true,
            ..self.clone()
        }
    }
}

impl TryFrom<maintenance_alert::Model> for MaintenanceAlert {
    type Error = anyhow::Error;

    fn try_from(model: maintenance_alert::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            schedule_id: model.schedule_id,
            title: model.title,
            message: model.message,
            alert_date: model.alert_date,
            status: AlertStatus::from_i32(model.status)
                .ok_or(anyhow!("Wrong alert status {}", model.status))?,
            is_read: model.is_read,
            created_at: model.created_at,
        })
    }
}

impl From<MaintenanceAlert> for maintenance_alert::Model {
    fn from(entity: MaintenanceAlert) -> Self {
        Self {
            id: entity.id,
            schedule_id: entity.schedule_id,
            title: entity.title,
            message: entity.message,
            alert_date: entity.alert_date,
            status: entity.status as i32,
            is_read: entity.is_read,
            created_at: entity.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn schedule(frequency: MaintenanceFrequency, custom: Option<i32>) -> MaintenanceSchedule {
        let now = Utc::now();
        MaintenanceSchedule {
            id: Uuid::new_v4(),
            appliance_id: Uuid::new_v4(),
            name: "Descaling".to_string(),
            description: None,
            frequency,
            last_maintenance_date: None,
            next_maintenance_date: date(2024, 1, 31),
            custom_interval_days: custom,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_next_dates() {
        let done = date(2024, 1, 31);
        assert_eq!(
            schedule(MaintenanceFrequency::Monthly, None).next_after(done),
            Some(date(2024, 2, 29))
        );
        assert_eq!(
            schedule(MaintenanceFrequency::Quarterly, None).next_after(done),
            Some(date(2024, 4, 30))
        );
        assert_eq!(
            schedule(MaintenanceFrequency::Biannual, None).next_after(done),
            Some(date(2024, 7, 31))
        );
        assert_eq!(
            schedule(MaintenanceFrequency::Annual, None).next_after(done),
            Some(date(2025, 1, 31))
        );
        assert_eq!(
            schedule(MaintenanceFrequency::Custom, Some(10)).next_after(done),
            Some(date(2024, 2, 10))
        );
        assert_eq!(schedule(MaintenanceFrequency::Custom, None).next_after(done), None);
    }

    #[test]
    fn test_advance_records_last_date() {
        let advanced = schedule(MaintenanceFrequency::Quarterly, None)
            .advance(date(2024, 2, 5))
            .unwrap();
        assert_eq!(advanced.last_maintenance_date, Some(date(2024, 2, 5)));
        assert_eq!(advanced.next_maintenance_date, date(2024, 5, 5));
        assert!(schedule(MaintenanceFrequency::Custom, Some(0)).advance(date(2024, 2, 5)).is_err());
    }

    #[test]
    fn test_completed_alert_is_no_longer_pending() {
        let alert = MaintenanceAlert::for_schedule(
            &schedule(MaintenanceFrequency::Monthly, None),
            date(2024, 1, 28),
        );
        assert_eq!(alert.status, AlertStatus::Pending);
        let done = alert.complete();
        assert_eq!(done.status, AlertStatus::Completed);
        assert!(done.is_read);
        assert_eq!(done.id, alert.id);
    }

    #[test]
    fn test_custom_interval_rules() {
        let ctx = ValidationContext::on(date(2024, 5, 20));
        let base = MaintenanceScheduleInput {
            appliance_id: Some(Uuid::new_v4().to_string()),
            name: Some("Filter change".to_string()),
            next_maintenance_date: Some("2024-06-01".to_string()),
            ..Default::default()
        };
        let err = MaintenanceScheduleInput {
            frequency: Some("custom".to_string()),
            ..base.clone()
        }
        .validate(&ctx)
        .unwrap_err();
        assert_eq!(
            err.messages_for("customIntervalDays"),
            vec!["customIntervalDays is required"]
        );

        let err = MaintenanceScheduleInput {
            frequency: Some("monthly".to_string()),
            custom_interval_days: Some(10),
            ..base.clone()
        }
        .validate(&ctx)
        .unwrap_err();
        assert!(err.has("customIntervalDays"));

        let schedule = MaintenanceScheduleInput {
            frequency: Some("custom".to_string()),
            custom_interval_days: Some(45),
            ..base
        }
        .validate(&ctx)
        .unwrap();
        assert_eq!(schedule.custom_interval_days, Some(45));
        assert!(schedule.is_due(date(2024, 6, 1)));
        assert!(!schedule.is_due(date(2024, 5, 31)));
    }
}
