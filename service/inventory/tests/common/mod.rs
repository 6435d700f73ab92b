#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use domain_inventory::{
    model::entity::{
        AvailablePart, PartKey, PartsActivityLog, PartsAllocation, SparePartCatalogEntry,
        SparePartOrder, Supplier, SupplierInput, SupplierOrder,
    },
    repository::{
        AvailablePartRepo, PartsActivityLogRepo, PartsAllocationRepo, SparePartCatalogRepo,
        SparePartOrderRepo, SupplierOrderRepo, SupplierRepo,
    },
};
use domain_servicing::{
    exception::ServicingResult,
    model::{
        entity::{Appliance, Notification, ServiceTicket, Technician},
        vo::{
            FixedClock, NotificationDraft, ServiceStatus, Validate, ValidationContext,
            WarrantyStatus,
        },
    },
    service::NotificationService,
};
use service_inventory::PartsFlowServiceImpl;
use servicing_architecture::{
    model::AggregateRoot,
    repository::{DBRepository, MutableRepository, ReadOnlyRepository, StaleVersion},
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
    AvailablePart,
    PartsActivityLog,
    PartsAllocation,
    ServiceTicket,
    SparePartCatalogEntry,
    SparePartOrder,
    Supplier,
    SupplierOrder,
    Technician
);

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
impl SparePartOrderRepo for MemRepo<SparePartOrder> {
    async fn update_versioned(&self, entity: &SparePartOrder) -> anyhow::Result<()> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.id == entity.id && r.version == entity.version)
            .ok_or(StaleVersion::new("spare part order", entity.id))?;
        *row = entity.clone();
        row.version += 1;
        Ok(())
    }

    async fn get_active(&self) -> anyhow::Result<Vec<SparePartOrder>> {
        Ok(self.filtered(SparePartOrder::is_active))
    }
}

#[async_trait]
impl SupplierOrderRepo for MemRepo<SupplierOrder> {
    async fn find_by_spare_part_order(
        &self,
        spare_part_order_id: Uuid,
    ) -> anyhow::Result<Option<SupplierOrder>> {
        Ok(self
            .filtered(|o| o.spare_part_order_id == spare_part_order_id)
            .pop())
    }
}

#[async_trait]
impl SupplierRepo for MemRepo<Supplier> {
    async fn get_active(&self) -> anyhow::Result<Vec<Supplier>> {
        let mut active = self.filtered(|s| s.is_active);
        active.sort_by_key(|s| s.priority);
        Ok(active)
    }
}

#[async_trait]
impl AvailablePartRepo for MemRepo<AvailablePart> {
    async fn find_by_key(&self, key: &PartKey) -> anyhow::Result<Option<AvailablePart>> {
        Ok(self.filtered(|p| p.is_active && &p.key() == key).pop())
    }

    async fn get_active(&self) -> anyhow::Result<Vec<AvailablePart>> {
        Ok(self.filtered(|p| p.is_active))
    }

    async fn update_versioned(&self, entity: &AvailablePart) -> anyhow::Result<()> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.id == entity.id && r.version == entity.version)
            .ok_or(StaleVersion::new("available part", entity.id))?;
        *row = entity.clone();
        row.version += 1;
        Ok(())
    }

    async fn bump_version(&self, part_id: Uuid, expected_version: i32) -> anyhow::Result<()> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.id == part_id && r.version == expected_version)
            .ok_or(StaleVersion::new("available part", part_id))?;
        row.version += 1;
        Ok(())
    }
}

#[async_trait]
impl PartsAllocationRepo for MemRepo<PartsAllocation> {
    async fn get_by_part(&self, part_id: Uuid) -> anyhow::Result<Vec<PartsAllocation>> {
        Ok(self.filtered(|a| a.available_part_id == part_id))
    }
}

#[async_trait]
impl PartsActivityLogRepo for MemRepo<PartsActivityLog> {
    async fn get_by_part(&self, part_id: Uuid) -> anyhow::Result<Vec<PartsActivityLog>> {
        Ok(self.filtered(|l| l.part_id == part_id))
    }
}

#[async_trait]
impl SparePartCatalogRepo for MemRepo<SparePartCatalogEntry> {
    async fn find_by_part_number(
        &self,
        part_number: &str,
    ) -> anyhow::Result<Option<SparePartCatalogEntry>> {
        Ok(self.filtered(|e| e.part_number == part_number).pop())
    }
}

/// Keeps every notification it is asked to send, addressed by user or by
/// technician.
#[derive(Default)]
pub struct Outbox {
    pub admin: Mutex<Vec<NotificationDraft>>,
    pub technicians: Mutex<Vec<(Uuid, NotificationDraft)>>,
}

impl Outbox {
    pub fn to_admins(&self) -> Vec<NotificationDraft> {
        self.admin.lock().unwrap().clone()
    }

    pub fn to_technicians(&self) -> Vec<(Uuid, NotificationDraft)> {
        self.technicians.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationService for Outbox {
    async fn notify(&self, user_id: Uuid, draft: NotificationDraft) -> ServicingResult<Notification> {
        Ok(Notification::from_draft(user_id, draft, chrono::Utc::now()))
    }

    async fn notify_all(
        &self,
        drafts: Vec<(Uuid, NotificationDraft)>,
    ) -> ServicingResult<Vec<Notification>> {
        let now = chrono::Utc::now();
        Ok(drafts
            .into_iter()
            .map(|(user_id, draft)| Notification::from_draft(user_id, draft, now))
            .collect())
    }

    async fn notify_admins(&self, draft: NotificationDraft) -> ServicingResult<Vec<Notification>> {
        self.admin.lock().unwrap().push(draft);
        Ok(vec![])
    }

    async fn notify_technician(
        &self,
        technician_id: Uuid,
        draft: NotificationDraft,
    ) -> ServicingResult<Option<Notification>> {
        self.technicians.lock().unwrap().push((technician_id, draft));
        Ok(None)
    }

    async fn mark_read(&self, notification_id: Uuid) -> ServicingResult<Notification> {
        Err(domain_servicing::exception::ServicingException::not_found(
            "notification",
            notification_id,
        ))
    }

    async fn mark_all_read(&self, _user_id: Uuid) -> ServicingResult<u64> {
        Ok(0)
    }

    async fn unread_for(&self, _user_id: Uuid) -> ServicingResult<Vec<Notification>> {
        Ok(vec![])
    }

    async fn for_user(&self, _user_id: Uuid) -> ServicingResult<Vec<Notification>> {
        Ok(vec![])
    }
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[derive(Default)]
pub struct Swap {
    pub orders: Option<Arc<dyn SparePartOrderRepo>>,
    pub supplier_orders: Option<Arc<dyn SupplierOrderRepo>>,
    pub parts: Option<Arc<dyn AvailablePartRepo>>,
    pub allocations: Option<Arc<dyn PartsAllocationRepo>>,
    pub activity: Option<Arc<dyn PartsActivityLogRepo>>,
}

/// The warehouse with one open repair, one technician and one supplier.
pub struct Warehouse {
    pub today: NaiveDate,
    pub admin_id: Uuid,
    pub service: ServiceTicket,
    pub technician: Technician,
    pub appliance: Appliance,
    pub supplier: Supplier,
    pub orders: Arc<MemRepo<SparePartOrder>>,
    pub supplier_orders: Arc<MemRepo<SupplierOrder>>,
    pub suppliers: Arc<MemRepo<Supplier>>,
    pub parts: Arc<MemRepo<AvailablePart>>,
    pub allocations: Arc<MemRepo<PartsAllocation>>,
    pub activity: Arc<MemRepo<PartsActivityLog>>,
    pub outbox: Arc<Outbox>,
}

impl Warehouse {
    pub fn new(today: NaiveDate) -> Self {
        let technician = Technician {
            id: Uuid::new_v4(),
            full_name: "Nikola Jovanović".to_string(),
            phone: None,
            email: None,
            specialization: Some("fridges".to_string()),
            active: true,
        };
        let appliance = Appliance {
            id: Uuid::new_v4(),
            client_id: Uuid::new_v4(),
            category_id: Uuid::new_v4(),
            manufacturer_id: Uuid::new_v4(),
            model: Some("RCNA 366".to_string()),
            serial_number: None,
            purchase_date: None,
            notes: None,
        };
        let service = ServiceTicket {
            id: Uuid::new_v4(),
            client_id: appliance.client_id,
            appliance_id: appliance.id,
            technician_id: Some(technician.id),
            business_partner_id: None,
            description: "Frižider ne hladi".to_string(),
            status: ServiceStatus::WaitingParts,
            warranty_status: WarrantyStatus::InWarranty,
            created_at: today,
            scheduled_date: None,
            completed_date: None,
            technician_notes: None,
            cost: None,
            used_parts: None,
            machine_notes: None,
            is_completely_fixed: None,
            partner_company_name: None,
            outcome: None,
            pickup: None,
            version: 0,
        };
        let supplier = SupplierInput {
            name: Some("Germaxx".to_string()),
            company_name: Some("Germaxx d.o.o.".to_string()),
            email: Some("orders@germaxx.example".to_string()),
            ..Default::default()
        }
        .validate(&ValidationContext::on(today))
        .unwrap();

        Self {
            today,
            admin_id: Uuid::new_v4(),
            orders: MemRepo::new(),
            supplier_orders: MemRepo::new(),
            suppliers: MemRepo::with(vec![supplier.clone()]),
            parts: MemRepo::new(),
            allocations: MemRepo::new(),
            activity: MemRepo::new(),
            outbox: Arc::new(Outbox::default()),
            service,
            technician,
            appliance,
            supplier,
        }
    }

    pub fn parts_flow(&self) -> PartsFlowServiceImpl {
        self.parts_flow_with(Swap::default())
    }

    /// The parts flow with some of the warehouse repositories replaced.
    pub fn parts_flow_with(&self, swap: Swap) -> PartsFlowServiceImpl {
        let orders: Arc<dyn SparePartOrderRepo> = self.orders.clone();
        let supplier_orders: Arc<dyn SupplierOrderRepo> = self.supplier_orders.clone();
        let parts: Arc<dyn AvailablePartRepo> = self.parts.clone();
        let allocations: Arc<dyn PartsAllocationRepo> = self.allocations.clone();
        let activity: Arc<dyn PartsActivityLogRepo> = self.activity.clone();
        PartsFlowServiceImpl::builder()
            .order_repo(swap.orders.unwrap_or(orders))
            .supplier_order_repo(swap.supplier_orders.unwrap_or(supplier_orders))
            .supplier_repo(self.suppliers.clone())
            .part_repo(swap.parts.unwrap_or(parts))
            .allocation_repo(swap.allocations.unwrap_or(allocations))
            .activity_repo(swap.activity.unwrap_or(activity))
            .service_repo(MemRepo::with(vec![self.service.clone()]))
            .technician_repo(MemRepo::with(vec![self.technician.clone()]))
            .appliance_repo(MemRepo::with(vec![self.appliance.clone()]))
            .notification_service(self.outbox.clone())
            .clock(Arc::new(FixedClock::on(self.today)))
            .build()
    }
}
