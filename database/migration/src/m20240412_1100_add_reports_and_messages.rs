use database_model::prelude::*;
use sea_orm_migration::{
    prelude::*,
    sea_orm::{DbBackend, Schema},
};

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20240412_1100_add_reports_and_messages"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let schema = Schema::new(DbBackend::Postgres);
        manager
            .create_table(
                schema
                    .create_table_from_entity(ServiceCompletionReportEntity)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .create_table(
                schema
                    .create_table_from_entity(BusinessPartnerMessageEntity)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .create_foreign_key(
                sea_query::ForeignKey::create()
                    .name("FK_ServiceCompletionReport_Service")
                    .from(ServiceCompletionReportEntity, ServiceCompletionReportColumn::ServiceId)
                    .to(ServiceEntity, ServiceColumn::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .on_update(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("IDX_BusinessPartnerMessage_Partner")
                    .table(BusinessPartnerMessageEntity)
                    .col(BusinessPartnerMessageColumn::BusinessPartnerId)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BusinessPartnerMessageEntity).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ServiceCompletionReportEntity).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
