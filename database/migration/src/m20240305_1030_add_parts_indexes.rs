use database_model::prelude::*;
use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20240305_1030_add_parts_indexes"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("IDX_AvailablePart_Key")
                    .table(AvailablePartEntity)
                    .col(AvailablePartColumn::PartNumber)
                    .col(AvailablePartColumn::CategoryId)
                    .col(AvailablePartColumn::ManufacturerId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("IDX_PartsAllocation_AvailablePart")
                    .table(PartsAllocationEntity)
                    .col(PartsAllocationColumn::AvailablePartId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("IDX_Notification_User")
                    .table(NotificationEntity)
                    .col(NotificationColumn::UserId)
                    .col(NotificationColumn::IsRead)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("IDX_Notification_User").table(NotificationEntity).to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("IDX_PartsAllocation_AvailablePart")
                    .table(PartsAllocationEntity)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(Index::drop().name("IDX_AvailablePart_Key").table(AvailablePartEntity).to_owned())
            .await?;
        Ok(())
    }
}
