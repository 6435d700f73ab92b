#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use domain_servicing::{
    model::{
        entity::{
            AlertStatus, Appliance, ApplianceCategory, Client, MaintenanceAlert,
            MaintenanceSchedule, Manufacturer, Notification, PartnerMessage, RemovedPart,
            ServiceCompletionReport, ServiceTicket, Technician, User,
        },
        vo::{FixedClock, MessageStatus, ServiceStatus, UserRole},
    },
    repository::{
        MaintenanceAlertRepo, MaintenanceScheduleRepo, ManufacturerRepo, NotificationRepo,
        PartnerMessageRepo, RemovedPartRepo, ServiceCompletionReportRepo, ServiceTicketRepo,
        UserRepo,
    },
};
use servicing_architecture::{
    model::AggregateRoot,
    repository::{DBRepository, MutableRepository, ReadOnlyRepository, StaleVersion},
};
use service_servicing::{
    MaintenanceServiceImpl, NotificationServiceImpl, PartnerMessageServiceImpl,
    RemovedPartServiceImpl, ServiceLifecycleServiceImpl,
};
use uuid::Uuid;

pub trait Keyed {
    fn key(&self) -> Uuid;
}

macro_rules! keyed {
    ($($t:ty),*) => {
        $(impl Keyed for $t {
            fn key(&self) -> Uuid {
                self.id
            }
        })*
    };
}

keyed!(
    Appliance,
    ApplianceCategory,
    Client,
    MaintenanceAlert,
    MaintenanceSchedule,
    Manufacturer,
    Notification,
    PartnerMessage,
    RemovedPart,
    ServiceCompletionReport,
    ServiceTicket,
    Technician,
    User
);

/// Rows kept in insertion order.
pub struct MemRepo<T> {
    rows: Mutex<Vec<T>>,
}

impl<T: Clone> MemRepo<T> {
    pub fn new() -> Arc<Self> {
        Self::with(vec![])
    }

    pub fn with(rows: Vec<T>) -> Arc<Self> {
        Arc::new(Self {
            rows: Mutex::new(rows),
        })
    }

    pub fn rows(&self) -> Vec<T> {
        self.rows.lock().unwrap().clone()
    }

    fn filtered(&self, f: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows.lock().unwrap().iter().filter(|r| f(r)).cloned().collect()
    }
}

#[async_trait]
impl<T> ReadOnlyRepository<T> for MemRepo<T>
where
    T: AggregateRoot + Keyed + Clone + Send + Sync + 'static,
{
    async fn find_by_id(&self, uuid: Uuid) -> anyhow::Result<Option<T>> {
        Ok(self.filtered(|r| r.key() == uuid).pop())
    }

    async fn get_all(&self) -> anyhow::Result<Vec<T>> {
        Ok(self.rows())
    }
}

#[async_trait]
impl<T> MutableRepository<T> for MemRepo<T>
where
    T: AggregateRoot + Keyed + Clone + Send + Sync + 'static,
{
    async fn insert(&self, entity: &T) -> anyhow::Result<Uuid> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|r| r.key() == entity.key()) {
            anyhow::bail!("duplicate key {}", entity.key());
        }
        rows.push(entity.clone());
        Ok(entity.key())
    }

    async fn update(&self, entity: &T) -> anyhow::Result<()> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.key() == entity.key())
            .ok_or(anyhow::anyhow!("no row {}", entity.key()))?;
        *row = entity.clone();
        Ok(())
    }
}

impl<T> DBRepository<T> for MemRepo<T> where T: AggregateRoot + Keyed + Clone + Send + Sync + 'static {}

#[async_trait]
impl ServiceTicketRepo for MemRepo<ServiceTicket> {
    async fn update_versioned(&self, entity: &ServiceTicket) -> anyhow::Result<()> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.id == entity.id && r.version == entity.version)
            .ok_or(StaleVersion::new("service", entity.id))?;
        *row = entity.clone();
        row.version += 1;
        Ok(())
    }

    async fn get_by_status(&self, status: ServiceStatus) -> anyhow::Result<Vec<ServiceTicket>> {
        Ok(self.filtered(|t| t.status == status))
    }

    async fn get_completed_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> anyhow::Result<Vec<ServiceTicket>> {
        Ok(self.filtered(|t| t.completed_date.is_some_and(|d| from <= d && d <= to)))
    }
}

#[async_trait]
impl RemovedPartRepo for MemRepo<RemovedPart> {
    async fn get_by_service(&self, service_id: Uuid) -> anyhow::Result<Vec<RemovedPart>> {
        Ok(self.filtered(|p| p.service_id == service_id))
    }
}

#[async_trait]
impl ServiceCompletionReportRepo for MemRepo<ServiceCompletionReport> {
    async fn get_by_service(
        &self,
        service_id: Uuid,
    ) -> anyhow::Result<Option<ServiceCompletionReport>> {
        Ok(self.filtered(|r| r.service_id == service_id).pop())
    }
}

#[async_trait]
impl PartnerMessageRepo for MemRepo<PartnerMessage> {
    async fn get_by_partner(&self, partner_id: Uuid) -> anyhow::Result<Vec<PartnerMessage>> {
        let mut r = self.filtered(|m| m.business_partner_id == partner_id);
        r.reverse();
        Ok(r)
    }

    async fn get_by_status(
        &self,
        status: Option<MessageStatus>,
    ) -> anyhow::Result<Vec<PartnerMessage>> {
        let mut r = self.filtered(|m| status.map_or(true, |s| m.status == s));
        r.reverse();
        Ok(r)
    }
}

#[async_trait]
impl NotificationRepo for MemRepo<Notification> {
    async fn get_by_user(
        &self,
        user_id: Uuid,
        unread_only: bool,
    ) -> anyhow::Result<Vec<Notification>> {
        let mut found = self.filtered(|n| n.user_id == user_id && !(unread_only && n.is_read));
        found.reverse();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(found)
    }

    async fn mark_all_read(&self, user_id: Uuid, now: DateTime<Utc>) -> anyhow::Result<u64> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows
            .iter_mut()
            .filter(|n| n.user_id == user_id)
            .map(|n| n.mark_read(now))
            .filter(|changed| *changed)
            .count() as u64)
    }
}

#[async_trait]
impl UserRepo for MemRepo<User> {
    async fn get_by_role(&self, role: UserRole) -> anyhow::Result<Vec<User>> {
        Ok(self.filtered(|u| u.role == role))
    }

    async fn get_by_technician_id(&self, technician_id: Uuid) -> anyhow::Result<Option<User>> {
        Ok(self.filtered(|u| u.technician_id == Some(technician_id)).pop())
    }
}

#[async_trait]
impl ManufacturerRepo for MemRepo<Manufacturer> {
    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<Manufacturer>> {
        Ok(self
            .filtered(|m| m.name.to_lowercase() == name.trim().to_lowercase())
            .pop())
    }
}

#[async_trait]
impl MaintenanceScheduleRepo for MemRepo<MaintenanceSchedule> {
    async fn get_due(&self, horizon: NaiveDate) -> anyhow::Result<Vec<MaintenanceSchedule>> {
        Ok(self.filtered(|s| s.is_due(horizon)))
    }
}

#[async_trait]
impl MaintenanceAlertRepo for MemRepo<MaintenanceAlert> {
    async fn has_pending(&self, schedule_id: Uuid) -> anyhow::Result<bool> {
        Ok(!self
            .filtered(|a| a.schedule_id == schedule_id && a.status == AlertStatus::Pending)
            .is_empty())
    }

    async fn get_pending(&self, schedule_id: Uuid) -> anyhow::Result<Vec<MaintenanceAlert>> {
        Ok(self.filtered(|a| a.schedule_id == schedule_id && a.status == AlertStatus::Pending))
    }
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A small service desk: one client with a washing machine, one technician
/// with an account, an admin and a business partner.
pub struct Desk {
    pub today: NaiveDate,
    pub client: Client,
    pub appliance: Appliance,
    pub technician: Technician,
    pub technician_user: User,
    pub admin: User,
    pub partner: User,
    pub manufacturer: Manufacturer,
    pub services: Arc<MemRepo<ServiceTicket>>,
    pub removed_parts: Arc<MemRepo<RemovedPart>>,
    pub reports: Arc<MemRepo<ServiceCompletionReport>>,
    pub messages: Arc<MemRepo<PartnerMessage>>,
    pub notifications: Arc<MemRepo<Notification>>,
    pub users: Arc<MemRepo<User>>,
    pub clients: Arc<MemRepo<Client>>,
    pub appliances: Arc<MemRepo<Appliance>>,
    pub technicians: Arc<MemRepo<Technician>>,
    pub manufacturers: Arc<MemRepo<Manufacturer>>,
    pub schedules: Arc<MemRepo<MaintenanceSchedule>>,
    pub alerts: Arc<MemRepo<MaintenanceAlert>>,
}

impl Desk {
    pub fn new(today: NaiveDate) -> Self {
        let now = FixedClock::on(today).now;
        let client = Client {
            id: Uuid::new_v4(),
            full_name: "Marija Petrović".to_string(),
            email: None,
            phone: "067123456".to_string(),
            address: Some("Njegoševa 12".to_string()),
            city: Some("Kotor".to_string()),
            notes: None,
            created_at: now,
        };
        let manufacturer = Manufacturer {
            id: Uuid::new_v4(),
            name: "Beko".to_string(),
        };
        let appliance = Appliance {
            id: Uuid::new_v4(),
            client_id: client.id,
            category_id: Uuid::new_v4(),
            manufacturer_id: manufacturer.id,
            model: Some("WTV 8712".to_string()),
            serial_number: None,
            purchase_date: None,
            notes: None,
        };
        let technician = Technician {
            id: Uuid::new_v4(),
            full_name: "Nikola Jovanović".to_string(),
            phone: None,
            email: None,
            specialization: Some("washing machines".to_string()),
            active: true,
        };
        let user = |username: &str, role: UserRole, technician_id: Option<Uuid>| User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            full_name: username.to_string(),
            role,
            technician_id,
            email: Some(format!("{username}@example.me")),
            phone: None,
            company_name: None,
            is_verified: true,
            registered_at: now,
        };
        let technician_user = user("nikola", UserRole::Technician, Some(technician.id));
        let admin = user("admin", UserRole::Admin, None);
        let partner = user("partner", UserRole::BusinessPartner, None);

        Self {
            today,
            services: MemRepo::new(),
            removed_parts: MemRepo::new(),
            reports: MemRepo::new(),
            messages: MemRepo::new(),
            notifications: MemRepo::new(),
            users: MemRepo::with(vec![
                technician_user.clone(),
                admin.clone(),
                partner.clone(),
            ]),
            clients: MemRepo::with(vec![client.clone()]),
            appliances: MemRepo::with(vec![appliance.clone()]),
            technicians: MemRepo::with(vec![technician.clone()]),
            manufacturers: MemRepo::with(vec![manufacturer.clone()]),
            schedules: MemRepo::new(),
            alerts: MemRepo::new(),
            client,
            appliance,
            technician,
            technician_user,
            admin,
            partner,
            manufacturer,
        }
    }

    pub fn clock(&self) -> Arc<FixedClock> {
        Arc::new(FixedClock::on(self.today))
    }

    pub fn notification_service(&self) -> Arc<NotificationServiceImpl> {
        Arc::new(
            NotificationServiceImpl::builder()
                .notification_repo(self.notifications.clone())
                .user_repo(self.users.clone())
                .clock(self.clock())
                .build(),
        )
    }

    pub fn lifecycle(&self) -> ServiceLifecycleServiceImpl {
        ServiceLifecycleServiceImpl::builder()
            .service_repo(self.services.clone())
            .removed_part_repo(self.removed_parts.clone())
            .report_repo(self.reports.clone())
            .client_repo(self.clients.clone())
            .appliance_repo(self.appliances.clone())
            .technician_repo(self.technicians.clone())
            .user_repo(self.users.clone())
            .notification_service(self.notification_service())
            .clock(self.clock())
            .build()
    }

    pub fn partner_messages(&self) -> PartnerMessageServiceImpl {
        PartnerMessageServiceImpl::builder()
            .message_repo(self.messages.clone())
            .user_repo(self.users.clone())
            .notification_service(self.notification_service())
            .clock(self.clock())
            .build()
    }

    pub fn removed_part_service(&self) -> RemovedPartServiceImpl {
        RemovedPartServiceImpl::builder()
            .removed_part_repo(self.removed_parts.clone())
            .service_repo(self.services.clone())
            .clock(self.clock())
            .build()
    }

    pub fn maintenance_service(&self) -> MaintenanceServiceImpl {
        MaintenanceServiceImpl::builder()
            .schedule_repo(self.schedules.clone())
            .alert_repo(self.alerts.clone())
            .appliance_repo(self.appliances.clone())
            .notification_service(self.notification_service())
            .clock(self.clock())
            .build()
    }

    pub fn notifications_of(&self, user: &User) -> Vec<Notification> {
        self.notifications
            .rows()
            .into_iter()
            .filter(|n| n.user_id == user.id)
            .collect()
    }
}
