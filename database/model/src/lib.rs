pub mod appliance;
pub mod appliance_category;
pub mod available_part;
pub mod business_partner_message;
pub mod client;
pub mod maintenance_alert;
pub mod maintenance_schedule;
pub mod manufacturer;
pub mod notification;
pub mod parts_activity_log;
pub mod parts_allocation;
pub mod removed_part;
pub mod service;
pub mod service_completion_report;
pub mod spare_part_catalog;
pub mod spare_part_order;
pub mod supplier;
pub mod supplier_order;
pub mod technician;
pub mod user;

pub mod prelude {
    pub use super::{
        appliance::{
            ActiveModel as ApplianceActiveModel, Column as ApplianceColumn, Entity as ApplianceEntity,
            Model as ApplianceModel,
        },
        appliance_category::{
            ActiveModel as ApplianceCategoryActiveModel, Column as ApplianceCategoryColumn, Entity as ApplianceCategoryEntity,
            Model as ApplianceCategoryModel,
        },
        available_part::{
            ActiveModel as AvailablePartActiveModel, Column as AvailablePartColumn, Entity as AvailablePartEntity,
            Model as AvailablePartModel,
        },
        business_partner_message::{
            ActiveModel as BusinessPartnerMessageActiveModel, Column as BusinessPartnerMessageColumn, Entity as BusinessPartnerMessageEntity,
            Model as BusinessPartnerMessageModel,
        },
        client::{
            ActiveModel as ClientActiveModel, Column as ClientColumn, Entity as ClientEntity,
            Model as ClientModel,
        },
        maintenance_alert::{
            ActiveModel as MaintenanceAlertActiveModel, Column as MaintenanceAlertColumn, Entity as MaintenanceAlertEntity,
            Model as MaintenanceAlertModel,
        },
        maintenance_schedule::{
            ActiveModel as MaintenanceScheduleActiveModel, Column as MaintenanceScheduleColumn, Entity as MaintenanceScheduleEntity,
            Model as MaintenanceScheduleModel,
        },
        manufacturer::{
            ActiveModel as ManufacturerActiveModel, Column as ManufacturerColumn, Entity as ManufacturerEntity,
            Model as ManufacturerModel,
        },
        notification::{
            ActiveModel as NotificationActiveModel, Column as NotificationColumn, Entity as NotificationEntity,
            Model as NotificationModel,
        },
        parts_activity_log::{
            ActiveModel as PartsActivityLogActiveModel, Column as PartsActivityLogColumn, Entity as PartsActivityLogEntity,
            Model as PartsActivityLogModel,
        },
        parts_allocation::{
            ActiveModel as PartsAllocationActiveModel, Column as PartsAllocationColumn, Entity as PartsAllocationEntity,
            Model as PartsAllocationModel,
        },
        removed_part::{
            ActiveModel as RemovedPartActiveModel, Column as RemovedPartColumn, Entity as RemovedPartEntity,
            Model as RemovedPartModel,
        },
        service::{
            ActiveModel as ServiceActiveModel, Column as ServiceColumn, Entity as ServiceEntity,
            Model as ServiceModel,
        },
        service_completion_report::{
            ActiveModel as ServiceCompletionReportActiveModel, Column as ServiceCompletionReportColumn, Entity as ServiceCompletionReportEntity,
            Model as ServiceCompletionReportModel,
        },
        spare_part_catalog::{
            ActiveModel as SparePartCatalogActiveModel, Column as SparePartCatalogColumn, Entity as SparePartCatalogEntity,
            Model as SparePartCatalogModel,
        },
        spare_part_order::{
            ActiveModel as SparePartOrderActiveModel, Column as SparePartOrderColumn, Entity as SparePartOrderEntity,
            Model as SparePartOrderModel,
        },
        supplier::{
            ActiveModel as SupplierActiveModel, Column as SupplierColumn, Entity as SupplierEntity,
            Model as SupplierModel,
        },
        supplier_order::{
            ActiveModel as SupplierOrderActiveModel, Column as SupplierOrderColumn, Entity as SupplierOrderEntity,
            Model as SupplierOrderModel,
        },
        technician::{
            ActiveModel as TechnicianActiveModel, Column as TechnicianColumn, Entity as TechnicianEntity,
            Model as TechnicianModel,
        },
        user::{
            ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
            Model as UserModel,
        },
    };
}
