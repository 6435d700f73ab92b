//! Validated create plus lookups for the reference entities.

use std::sync::Arc;

use async_trait::async_trait;
use domain_servicing::{
    exception::{ServicingException, ServicingResult},
    model::{
        entity::{
            Appliance, ApplianceCategory, ApplianceCategoryInput, ApplianceInput, Client,
            ClientInput, Manufacturer, ManufacturerInput, Technician, TechnicianInput, User,
            UserInput,
        },
        vo::{Clock, SystemClock, Validate, ValidationContext, ValidationErrors},
    },
    repository::{ManufacturerRepo, UserRepo},
    service::{ApplianceService, ClientService, TechnicianService, UserService},
};
use servicing_architecture::repository::DBRepository;
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct ClientServiceImpl {
    client_repo: Arc<dyn DBRepository<Client>>,
    #[builder(default = Arc::new(SystemClock))]
    clock: Arc<dyn Clock>,
}

#[async_trait]
impl ClientService for ClientServiceImpl {
    async fn create_client(&self, input: ClientInput) -> ServicingResult<Client> {
        let client = input.validate(&ValidationContext::on(self.clock.today()))?;
        self.client_repo.insert(&client).await?;
        self.client_repo.save_changed().await?;
        tracing::info!(client_id = %client.id, "Client created");
        Ok(client)
    }

    async fn get_client(&self, id: Uuid) -> ServicingResult<Client> {
        self.client_repo
            .find_by_id(id)
            .await?
            .ok_or(ServicingException::not_found("client", id))
    }

    async fn list_clients(&self) -> ServicingResult<Vec<Client>> {
        Ok(self.client_repo.get_all().await?)
    }
}

#[derive(TypedBuilder)]
pub struct ApplianceServiceImpl {
    appliance_repo: Arc<dyn DBRepository<Appliance>>,
    client_repo: Arc<dyn DBRepository<Client>>,
    category_repo: Arc<dyn DBRepository<ApplianceCategory>>,
    manufacturer_repo: Arc<dyn ManufacturerRepo>,
    #[builder(default = Arc::new(SystemClock))]
    clock: Arc<dyn Clock>,
}

#[async_trait]
impl ApplianceService for ApplianceServiceImpl {
    async fn create_appliance(&self, input: ApplianceInput) -> ServicingResult<Appliance> {
        let appliance = input.validate(&ValidationContext::on(self.clock.today()))?;
        self.client_repo
            .find_by_id(appliance.client_id)
            .await?
            .ok_or(ServicingException::not_found("client", appliance.client_id))?;
        self.category_repo
            .find_by_id(appliance.category_id)
            .await?
            .ok_or(ServicingException::not_found("category", appliance.category_id))?;
        self.manufacturer_repo
            .find_by_id(appliance.manufacturer_id)
            .await?
            .ok_or(ServicingException::not_found(
                "manufacturer",
                appliance.manufacturer_id,
            ))?;
        self.appliance_repo.insert(&appliance).await?;
        self.appliance_repo.save_changed().await?;
        tracing::info!(appliance_id = %appliance.id, client_id = %appliance.client_id, "Appliance created");
        Ok(appliance)
    }

    async fn get_appliance(&self, id: Uuid) -> ServicingResult<Appliance> {
        self.appliance_repo
            .find_by_id(id)
            .await?
            .ok_or(ServicingException::not_found("appliance", id))
    }

    async fn create_category(
        &self,
        input: ApplianceCategoryInput,
    ) -> ServicingResult<ApplianceCategory> {
        let category = input.validate(&ValidationContext::on(self.clock.today()))?;
        self.category_repo.insert(&category).await?;
        self.category_repo.save_changed().await?;
        Ok(category)
    }

    async fn list_categories(&self) -> ServicingResult<Vec<ApplianceCategory>> {
        Ok(self.category_repo.get_all().await?)
    }

    async fn create_manufacturer(&self, input: ManufacturerInput) -> ServicingResult<Manufacturer> {
        let manufacturer = input.validate(&ValidationContext::on(self.clock.today()))?;
        if self
            .manufacturer_repo
            .find_by_name(&manufacturer.name)
            .await?
            .is_some()
        {
            return Err(ValidationErrors::single(
                "name",
                format!("Manufacturer {} already exists", manufacturer.name),
            )
            .into());
        }
        self.manufacturer_repo.insert(&manufacturer).await?;
        self.manufacturer_repo.save_changed().await?;
        Ok(manufacturer)
    }

    async fn list_manufacturers(&self) -> ServicingResult<Vec<Manufacturer>> {
        Ok(self.manufacturer_repo.get_all().await?)
    }
}

#[derive(TypedBuilder)]
pub struct TechnicianServiceImpl {
    technician_repo: Arc<dyn DBRepository<Technician>>,
    #[builder(default = Arc::new(SystemClock))]
    clock: Arc<dyn Clock>,
}

#[async_trait]
impl TechnicianService for TechnicianServiceImpl {
    async fn create_technician(&self, input: TechnicianInput) -> ServicingResult<Technician> {
        let technician = input.validate(&ValidationContext::on(self.clock.today()))?;
        self.technician_repo.insert(&technician).await?;
        self.technician_repo.save_changed().await?;
        tracing::info!(technician_id = %technician.id, "Technician created");
        Ok(technician)
    }

    async fn get_technician(&self, id: Uuid) -> ServicingResult<Technician> {
        self.technician_repo
            .find_by_id(id)
            .await?
            .ok_or(ServicingException::not_found("technician", id))
    }

    async fn list_technicians(&self) -> ServicingResult<Vec<Technician>> {
        Ok(self.technician_repo.get_all().await?)
    }
}

#[derive(TypedBuilder)]
pub struct UserServiceImpl {
    user_repo: Arc<dyn UserRepo>,
    technician_repo: Arc<dyn DBRepository<Technician>>,
    #[builder(default = Arc::new(SystemClock))]
    clock: Arc<dyn Clock>,
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn create_user(&self, input: UserInput) -> ServicingResult<User> {
        let user = input.validate(&ValidationContext::on(self.clock.today()))?;
        if let Some(technician_id) = user.technician_id {
            self.technician_repo
                .find_by_id(technician_id)
                .await?
                .ok_or(ServicingException::not_found("technician", technician_id))?;
        }
        self.user_repo.insert(&user).await?;
        self.user_repo.save_changed().await?;
        tracing::info!(user_id = %user.id, role = ?user.role, "User created");
        Ok(user)
    }

    async fn get_user(&self, id: Uuid) -> ServicingResult<User> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or(ServicingException::not_found("user", id))
    }
}
