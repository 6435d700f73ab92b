use async_trait::async_trait;
use mockall::mock;
use servicing_architecture::repository::{DBRepository, MutableRepository, ReadOnlyRepository};
use uuid::Uuid;

use crate::{
    model::entity::{
        AvailablePart, PartKey, PartsActivityLog, PartsAllocation, SparePartOrder, SupplierOrder,
    },
    repository::{
        AvailablePartRepo, PartsActivityLogRepo, PartsAllocationRepo, SparePartOrderRepo,
        SupplierOrderRepo,
    },
};

mock! {
    pub SparePartOrderRepo {}
    #[async_trait]
    impl SparePartOrderRepo for SparePartOrderRepo {
        async fn update_versioned(&self, entity: &SparePartOrder) -> anyhow::Result<()>;
        async fn get_active(&self) -> anyhow::Result<Vec<SparePartOrder>>;
    }
    #[async_trait]
    impl ReadOnlyRepository<SparePartOrder> for SparePartOrderRepo {
        async fn find_by_id(&self, uuid: Uuid) -> anyhow::Result<Option<SparePartOrder>>;
        async fn get_all(&self) -> anyhow::Result<Vec<SparePartOrder>>;
    }
    #[async_trait]
    impl MutableRepository<SparePartOrder> for SparePartOrderRepo {
        async fn insert(&self, entity: &SparePartOrder) -> anyhow::Result<Uuid>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
    impl DBRepository<SparePartOrder> for SparePartOrderRepo {}
}

mock! {
    pub SupplierOrderRepo {}
    #[async_trait]
    impl SupplierOrderRepo for SupplierOrderRepo {
        async fn find_by_spare_part_order(
            &self,
            spare_part_order_id: Uuid,
        ) -> anyhow::Result<Option<SupplierOrder>>;
    }
    impl ReadOnlyRepository<SupplierOrder> for SupplierOrderRepo {}
    #[async_trait]
    impl MutableRepository<SupplierOrder> for SupplierOrderRepo {
        async fn insert(&self, entity: &SupplierOrder) -> anyhow::Result<Uuid>;
        async fn update(&self, entity: &SupplierOrder) -> anyhow::Result<()>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
    impl DBRepository<SupplierOrder> for SupplierOrderRepo {}
}


mock! {
    pub AvailablePartRepo {}
    #[async_trait]
    impl AvailablePartRepo for AvailablePartRepo {
        async fn find_by_key(&self, key: &PartKey) -> anyhow::Result<Option<AvailablePart>>;
        async fn get_active(&self) -> anyhow::Result<Vec<AvailablePart>>;
        async fn update_versioned(&self, entity: &AvailablePart) -> anyhow::Result<()>;
        async fn bump_version(&self, part_id: Uuid, expected_version: i32) -> anyhow::Result<()>;
    }
    #[async_trait]
    impl ReadOnlyRepository<AvailablePart> for AvailablePartRepo {
        async fn find_by_id(&self, uuid: Uuid) -> anyhow::Result<Option<AvailablePart>>;
    }
    #[async_trait]
    impl MutableRepository<AvailablePart> for AvailablePartRepo {
        async fn insert(&self, entity: &AvailablePart) -> anyhow::Result<Uuid>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
    impl DBRepository<AvailablePart> for AvailablePartRepo {}
}

mock! {
    pub PartsAllocationRepo {}
    #[async_trait]
    impl PartsAllocationRepo for PartsAllocationRepo {
        async fn get_by_part(&self, part_id: Uuid) -> anyhow::Result<Vec<PartsAllocation>>;
    }
    #[async_trait]
    impl ReadOnlyRepository<PartsAllocation> for PartsAllocationRepo {
        async fn find_by_id(&self, uuid: Uuid) -> anyhow::Result<Option<PartsAllocation>>;
    }
    #[async_trait]
    impl MutableRepository<PartsAllocation> for PartsAllocationRepo {
        async fn insert(&self, entity: &PartsAllocation) -> anyhow::Result<Uuid>;
        async fn update(&self, entity: &PartsAllocation) -> anyhow::Result<()>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
    impl DBRepository<PartsAllocation> for PartsAllocationRepo {}
}

mock! {
    pub PartsActivityLogRepo {}
    #[async_trait]
    impl PartsActivityLogRepo for PartsActivityLogRepo {
        async fn get_by_part(&self, part_id: Uuid) -> anyhow::Result<Vec<PartsActivityLog>>;
    }
    impl ReadOnlyRepository<PartsActivityLog> for PartsActivityLogRepo {}
    #[async_trait]
    impl MutableRepository<PartsActivityLog> for PartsActivityLogRepo {
        async fn insert(&self, entity: &PartsActivityLog) -> anyhow::Result<Uuid>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
    impl DBRepository<PartsActivityLog> for PartsActivityLogRepo {}
}
