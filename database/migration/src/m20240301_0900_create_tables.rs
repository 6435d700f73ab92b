use database_model::prelude::*;
use sea_orm_migration::{
    prelude::*,
    sea_orm::{DbBackend, EntityTrait, Schema},
};

pub struct Migration;

fn get_seaorm_create_stmt<E: EntityTrait>(e: E) -> TableCreateStatement {
    let schema = Schema::new(DbBackend::Postgres);
    schema.create_table_from_entity(e).if_not_exists().to_owned()
}

fn get_seaorm_drop_stmt<E: EntityTrait>(e: E) -> TableDropStatement {
    Table::drop().table(e).if_exists().to_owned()
}

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20240301_0900_create_tables"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let stmts = vec![
            get_seaorm_create_stmt(UserEntity),
            get_seaorm_create_stmt(ClientEntity),
            get_seaorm_create_stmt(TechnicianEntity),
            get_seaorm_create_stmt(ApplianceCategoryEntity),
            get_seaorm_create_stmt(ManufacturerEntity),
            get_seaorm_create_stmt(ApplianceEntity),
            get_seaorm_create_stmt(ServiceEntity),
            get_seaorm_create_stmt(RemovedPartEntity),
            get_seaorm_create_stmt(NotificationEntity),
            get_seaorm_create_stmt(MaintenanceScheduleEntity),
            get_seaorm_create_stmt(MaintenanceAlertEntity),
            get_seaorm_create_stmt(SupplierEntity),
            get_seaorm_create_stmt(SparePartOrderEntity),
            get_seaorm_create_stmt(SupplierOrderEntity),
            get_seaorm_create_stmt(AvailablePartEntity),
            get_seaorm_create_stmt(PartsAllocationEntity),
            get_seaorm_create_stmt(PartsActivityLogEntity),
            get_seaorm_create_stmt(SparePartCatalogEntity),
        ];
        for stmt in stmts {
            manager.create_table(stmt.to_owned()).await?;
        }
        manager
            .create_foreign_key(
                sea_query::ForeignKey::create()
                    .name("FK_Appliance_Client")
                    .from(ApplianceEntity, ApplianceColumn::ClientId)
                    .to(ClientEntity, ClientColumn::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .on_update(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;
        manager
            .create_foreign_key(
                sea_query::ForeignKey::create()
                    .name("FK_Service_Appliance")
                    .from(ServiceEntity, ServiceColumn::ApplianceId)
                    .to(ApplianceEntity, ApplianceColumn::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .on_update(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;
        manager
            .create_foreign_key(
                sea_query::ForeignKey::create()
                    .name("FK_SupplierOrder_SparePartOrder")
                    .from(SupplierOrderEntity, SupplierOrderColumn::SparePartOrderId)
                    .to(SparePartOrderEntity, SparePartOrderColumn::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .on_update(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;
        manager
            .create_foreign_key(
                sea_query::ForeignKey::create()
                    .name("FK_PartsAllocation_AvailablePart")
                    .from(PartsAllocationEntity, PartsAllocationColumn::AvailablePartId)
                    .to(AvailablePartEntity, AvailablePartColumn::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .on_update(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let stmts = vec![
            get_seaorm_drop_stmt(SparePartCatalogEntity),
            get_seaorm_drop_stmt(PartsActivityLogEntity),
            get_seaorm_drop_stmt(PartsAllocationEntity),
            get_seaorm_drop_stmt(AvailablePartEntity),
            get_seaorm_drop_stmt(SupplierOrderEntity),
            get_seaorm_drop_stmt(SparePartOrderEntity),
            get_seaorm_drop_stmt(SupplierEntity),
            get_seaorm_drop_stmt(MaintenanceAlertEntity),
            get_seaorm_drop_stmt(MaintenanceScheduleEntity),
            get_seaorm_drop_stmt(NotificationEntity),
            get_seaorm_drop_stmt(RemovedPartEntity),
            get_seaorm_drop_stmt(ServiceEntity),
            get_seaorm_drop_stmt(ApplianceEntity),
            get_seaorm_drop_stmt(ManufacturerEntity),
            get_seaorm_drop_stmt(ApplianceCategoryEntity),
            get_seaorm_drop_stmt(TechnicianEntity),
            get_seaorm_drop_stmt(ClientEntity),
            get_seaorm_drop_stmt(UserEntity),
        ];
        for stmt in stmts {
            manager.drop_table(stmt.to_owned()).await?;
        }
        Ok(())
    }
}
