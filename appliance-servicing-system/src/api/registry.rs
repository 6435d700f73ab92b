use actix_web::{
    get, post,
    web::{Data, Json, Path},
};
use domain_servicing::model::entity::{
    Appliance, ApplianceCategory, ApplianceCategoryInput, ApplianceInput, Client, ClientInput,
    Manufacturer, ManufacturerInput, Technician, TechnicianInput, User, UserInput,
};

use super::{extract_uuid, ok, ApiResult};
use crate::infrastructure::ServiceProvider;

#[post("clients")]
pub async fn create_client(sp: Data<ServiceProvider>, input: Json<ClientInput>) -> ApiResult<Client> {
    ok(sp.scoped().clients.create_client(input.into_inner()).await?)
}

#[get("clients/{id}")]
pub async fn get_client(sp: Data<ServiceProvider>, id: Path<String>) -> ApiResult<Client> {
    let id = extract_uuid(&id)?;
    ok(sp.scoped().clients.get_client(id).await?)
}

#[post("appliances")]
pub async fn create_appliance(
    sp: Data<ServiceProvider>,
    input: Json<ApplianceInput>,
) -> ApiResult<Appliance> {
    ok(sp.scoped().appliances.create_appliance(input.into_inner()).await?)
}

#[post("categories")]
pub async fn create_category(
    sp: Data<ServiceProvider>,
    input: Json<ApplianceCategoryInput>,
) -> ApiResult<ApplianceCategory> {
    ok(sp.scoped().appliances.create_category(input.into_inner()).await?)
}

#[post("manufacturers")]
pub async fn create_manufacturer(
    sp: Data<ServiceProvider>,
    input: Json<ManufacturerInput>,
) -> ApiResult<Manufacturer> {
    ok(sp.scoped().appliances.create_manufacturer(input.into_inner()).await?)
}

#[post("technicians")]
pub async fn create_technician(
    sp: Data<ServiceProvider>,
    input: Json<TechnicianInput>,
) -> ApiResult<Technician> {
    ok(sp.scoped().technicians.create_technician(input.into_inner()).await?)
}

#[post("users")]
pub async fn create_user(sp: Data<ServiceProvider>, input: Json<UserInput>) -> ApiResult<User> {
    ok(sp.scoped().users.create_user(input.into_inner()).await?)
}
