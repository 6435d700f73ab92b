use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::mock;
use servicing_architecture::repository::{DBRepository, MutableRepository, ReadOnlyRepository};
use uuid::Uuid;

use crate::{
    exception::ServicingResult,
    model::{
        entity::{
            MaintenanceAlert, MaintenanceSchedule, Notification, ServiceCompletionReport,
            ServiceTicket,
        },
        vo::{NotificationDraft, ServiceStatus},
    },
    repository::{
        MaintenanceAlertRepo, MaintenanceScheduleRepo, ServiceCompletionReportRepo,
        ServiceTicketRepo,
    },
    service::NotificationService,
};

mock! {
    pub ServiceTicketRepo {}
    #[async_trait]
    impl ServiceTicketRepo for ServiceTicketRepo {
        async fn update_versioned(&self, entity: &ServiceTicket) -> anyhow::Result<()>;
        async fn get_by_status(&self, status: ServiceStatus) -> anyhow::Result<Vec<ServiceTicket>>;
        async fn get_completed_between(
            &self,
            from: NaiveDate,
            to: NaiveDate,
        ) -> anyhow::Result<Vec<ServiceTicket>>;
    }
    #[async_trait]
    impl ReadOnlyRepository<ServiceTicket> for ServiceTicketRepo {
        async fn find_by_id(&self, uuid: Uuid) -> anyhow::Result<Option<ServiceTicket>>;
    }
    #[async_trait]
    impl MutableRepository<ServiceTicket> for ServiceTicketRepo {
        async fn insert(&self, entity: &ServiceTicket) -> anyhow::Result<Uuid>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
    impl DBRepository<ServiceTicket> for ServiceTicketRepo {}
}

mock! {
    pub ServiceCompletionReportRepo {}
    #[async_trait]
    impl ServiceCompletionReportRepo for ServiceCompletionReportRepo {
        async fn get_by_service(
            &self,
            service_id: Uuid,
        ) -> anyhow::Result<Option<ServiceCompletionReport>>;
    }
    impl ReadOnlyRepository<ServiceCompletionReport> for ServiceCompletionReportRepo {}
    #[async_trait]
    impl MutableRepository<ServiceCompletionReport> for ServiceCompletionReportRepo {
        async fn insert(&self, entity: &ServiceCompletionReport) -> anyhow::Result<Uuid>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
    impl DBRepository<ServiceCompletionReport> for ServiceCompletionReportRepo {}
}

mock! {
    pub MaintenanceScheduleRepo {}
    #[async_trait]
    impl MaintenanceScheduleRepo for MaintenanceScheduleRepo {
        async fn get_due(&self, horizon: NaiveDate) -> anyhow::Result<Vec<MaintenanceSchedule>>;
    }
    #[async_trait]
    impl ReadOnlyRepository<MaintenanceSchedule> for MaintenanceScheduleRepo {
        async fn find_by_id(&self, uuid: Uuid) -> anyhow::Result<Option<MaintenanceSchedule>>;
    }
    #[async_trait]
    impl MutableRepository<MaintenanceSchedule> for MaintenanceScheduleRepo {
        async fn insert(&self, entity: &MaintenanceSchedule) -> anyhow::Result<Uuid>;
        async fn update(&self, entity: &MaintenanceSchedule) -> anyhow::Result<()>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
    impl DBRepository<MaintenanceSchedule> for MaintenanceScheduleRepo {}
}

mock! {
    pub MaintenanceAlertRepo {}
    #[async_trait]
    impl MaintenanceAlertRepo for MaintenanceAlertRepo {
        async fn has_pending(&self, schedule_id: Uuid) -> anyhow::Result<bool>;
        async fn get_pending(&self, schedule_id: Uuid) -> anyhow::Result<Vec<MaintenanceAlert>>;
    }
    impl ReadOnlyRepository<MaintenanceAlert> for MaintenanceAlertRepo {}
    #[async_trait]
    impl MutableRepository<MaintenanceAlert> for MaintenanceAlertRepo {
        async fn insert(&self, entity: &MaintenanceAlert) -> anyhow::Result<Uuid>;
        async fn update(&self, entity: &MaintenanceAlert) -> anyhow::Result<()>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
    impl DBRepository<MaintenanceAlert> for MaintenanceAlertRepo {}
}

mock! {
    pub NotificationService {}
    #[async_trait]
    impl NotificationService for NotificationService {
        async fn notify(&self, user_id: Uuid, draft: NotificationDraft) -> ServicingResult<Notification>;
        async fn notify_all(
            &self,
            drafts: Vec<(Uuid, NotificationDraft)>,
        ) -> ServicingResult<Vec<Notification>>;
        async fn notify_admins(&self, draft: NotificationDraft) -> ServicingResult<Vec<Notification>>;
        async fn notify_technician(
            &self,
            technician_id: Uuid,
            draft: NotificationDraft,
        ) -> ServicingResult<Option<Notification>>;
        async fn mark_read(&self, notification_id: Uuid) -> ServicingResult<Notification>;
        async fn mark_all_read(&self, user_id: Uuid) -> ServicingResult<u64>;
        async fn unread_for(&self, user_id: Uuid) -> ServicingResult<Vec<Notification>>;
        async fn for_user(&self, user_id: Uuid) -> ServicingResult<Vec<Notification>>;
    }
}
