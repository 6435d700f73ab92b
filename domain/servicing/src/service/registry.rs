use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    exception::ServicingResult,
    model::entity::{
        Appliance, ApplianceCategory, ApplianceCategoryInput, ApplianceInput, Client, ClientInput,
        Manufacturer, ManufacturerInput, Technician, TechnicianInput, User, UserInput,
    },
};

#[async_trait]
pub trait ClientService: Send + Sync {
    async fn create_client(&self, input: ClientInput) -> ServicingResult<Client>;
    async fn get_client(&self, id: Uuid) -> ServicingResult<Client>;
    async fn list_clients(&self) -> ServicingResult<Vec<Client>>;
}

#[async_trait]
pub trait ApplianceService: Send + Sync {
    /// The client, category and manufacturer must exist.
    async fn create_appliance(&self, input: ApplianceInput) -> ServicingResult<Appliance>;
    async fn get_appliance(&self, id: Uuid) -> ServicingResult<Appliance>;
    async fn create_category(&self, input: ApplianceCategoryInput)
        -> ServicingResult<ApplianceCategory>;
    async fn list_categories(&self) -> ServicingResult<Vec<ApplianceCategory>>;
    async fn create_manufacturer(&self, input: ManufacturerInput) -> ServicingResult<Manufacturer>;
    async fn list_manufacturers(&self) -> ServicingResult<Vec<Manufacturer>>;
}

#[async_trait]
pub trait TechnicianService: Send + Sync {
    async fn create_technician(&self, input: TechnicianInput) -> ServicingResult<Technician>;
    async fn get_technician(&self, id: Uuid) -> ServicingResult<Technician>;
    async fn list_technicians(&self) -> ServicingResult<Vec<Technician>>;
}

#[async_trait]
pub trait UserService: Send + Sync {
    async fn create_user(&self, input: UserInput) -> ServicingResult<User>;
    async fn get_user(&self, id: Uuid) -> ServicingResult<User>;
}
