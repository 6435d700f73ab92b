use std::sync::Arc;

use servicing_architecture::background_service::BackgroundService;
use servicing_infrastructure::data::Database;

// domains
use domain_inventory::service::{PartsCatalogService, PartsFlowService, SupplierService};
use domain_servicing::service::{
    ApplianceService, ClientService, MaintenanceService, NotificationService,
    PartnerMessageService, RemovedPartService, ServiceLifecycleService, TechnicianService,
    UserService,
};
// domain services
use service_inventory::{PartsCatalogServiceImpl, PartsFlowServiceImpl, SupplierServiceImpl};
use service_servicing::{
    ApplianceServiceImpl, BillingReportJob, ClientServiceImpl, MaintenanceReminderJob,
    MaintenanceServiceImpl, NotificationServiceImpl, PartnerMessageServiceImpl,
    RemovedPartServiceImpl, ServiceLifecycleServiceImpl, TechnicianServiceImpl, UserServiceImpl,
};

use super::{config::ServicingConfig, database::OrmRepo};

/// Owns the process wide state: configuration and the connection pool.
pub struct ServiceProvider {
    config: ServicingConfig,
    database: Arc<Database>,
}

impl ServiceProvider {
    pub async fn build(config: config::Config) -> anyhow::Result<Self> {
        let config = config.try_deserialize::<ServicingConfig>()?;
        let database = Arc::new(Database::new(config.common.db().url()).await?);
        Ok(Self { config, database })
    }

    pub fn config(&self) -> &ServicingConfig {
        &self.config
    }

    fn repo(&self) -> Arc<OrmRepo> {
        Arc::new(OrmRepo::builder().db(self.database.clone()).build())
    }

    /// Services for one request. They share a single unit of work.
    pub fn scoped(&self) -> ServiceProviderScoped {
        ServiceProviderScoped::new(self.repo())
    }

    pub fn background_services(&self) -> Vec<Arc<dyn BackgroundService>> {
        let jobs = &self.config.jobs;
        let mut tasks: Vec<Arc<dyn BackgroundService>> = vec![];
        if jobs.maintenance.enable {
            let scope = self.scoped();
            tasks.push(Arc::new(MaintenanceReminderJob::new(
                scope.maintenance,
                jobs.maintenance.clone(),
            )));
        }
        if jobs.billing.enable {
            let repo = self.repo();
            let notification_service = notification_service(repo.clone());
            tasks.push(Arc::new(
                BillingReportJob::builder()
                    .service_repo(repo.clone())
                    .appliance_repo(repo.clone())
                    .manufacturer_repo(repo)
                    .notification_service(notification_service)
                    .config(jobs.billing.clone())
                    .build(),
            ));
        }
        tasks
    }
}

fn notification_service(repo: Arc<OrmRepo>) -> Arc<dyn NotificationService> {
    Arc::new(
        NotificationServiceImpl::builder()
            .notification_repo(repo.clone())
            .user_repo(repo)
            .build(),
    )
}

pub struct ServiceProviderScoped {
    pub clients: Arc<dyn ClientService>,
    pub appliances: Arc<dyn ApplianceService>,
    pub technicians: Arc<dyn TechnicianService>,
    pub users: Arc<dyn UserService>,
    pub lifecycle: Arc<dyn ServiceLifecycleService>,
    pub removed_parts: Arc<dyn RemovedPartService>,
    pub maintenance: Arc<dyn MaintenanceService>,
    pub notifications: Arc<dyn NotificationService>,
    pub partner_messages: Arc<dyn PartnerMessageService>,
    pub parts_flow: Arc<dyn PartsFlowService>,
    pub suppliers: Arc<dyn SupplierService>,
    pub catalog: Arc<dyn PartsCatalogService>,
}

impl ServiceProviderScoped {
    fn new(repo: Arc<OrmRepo>) -> Self {
        let notifications = notification_service(repo.clone());
        Self {
            clients: Arc::new(ClientServiceImpl::builder().client_repo(repo.clone()).build()),
            appliances: Arc::new(
                ApplianceServiceImpl::builder()
                    .appliance_repo(repo.clone())
                    .client_repo(repo.clone())
                    .category_repo(repo.clone())
                    .manufacturer_repo(repo.clone())
                    .build(),
            ),
            technicians: Arc::new(
                TechnicianServiceImpl::builder()
                    .technician_repo(repo.clone())
                    .build(),
            ),
            users: Arc::new(
                UserServiceImpl::builder()
                    .user_repo(repo.clone())
                    .technician_repo(repo.clone())
                    .build(),
            ),
            lifecycle: Arc::new(
                ServiceLifecycleServiceImpl::builder()
                    .service_repo(repo.clone())
                    .removed_part_repo(repo.clone())
                    .report_repo(repo.clone())
                    .client_repo(repo.clone())
                    .appliance_repo(repo.clone())
                    .technician_repo(repo.clone())
                    .user_repo(repo.clone())
                    .notification_service(notifications.clone())
                    .build(),
            ),
            removed_parts: Arc::new(
                RemovedPartServiceImpl::builder()
                    .removed_part_repo(repo.clone())
                    .service_repo(repo.clone())
                    .build(),
            ),
            maintenance: Arc::new(
                MaintenanceServiceImpl::builder()
                    .schedule_repo(repo.clone())
                    .alert_repo(repo.clone())
                    .appliance_repo(repo.clone())
                    .notification_service(notifications.clone())
                    .build(),
            ),
            partner_messages: Arc::new(
                PartnerMessageServiceImpl::builder()
                    .message_repo(repo.clone())
                    .user_repo(repo.clone())
                    .notification_service(notifications.clone())
                    .build(),
            ),
            parts_flow: Arc::new(
                PartsFlowServiceImpl::builder()
                    .order_repo(repo.clone())
                    .supplier_order_repo(repo.clone())
                    .supplier_repo(repo.clone())
                    .part_repo(repo.clone())
                    .allocation_repo(repo.clone())
                    .activity_repo(repo.clone())
                    .service_repo(repo.clone())
                    .technician_repo(repo.clone())
                    .appliance_repo(repo.clone())
                    .notification_service(notifications.clone())
                    .build(),
            ),
            suppliers: Arc::new(SupplierServiceImpl::builder().supplier_repo(repo.clone()).build()),
            catalog: Arc::new(PartsCatalogServiceImpl::builder().catalog_repo(repo).build()),
            notifications,
        }
    }
}
