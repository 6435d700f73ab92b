use chrono::NaiveDate;
use domain_servicing::model::vo::TextField;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AssignTechnicianDto {
    pub technician_id: String,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct ReopenDto {
    pub reason: String,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ApproveOrderDto {
    pub admin_notes: TextField,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmDeliveryDto {
    pub confirmed_by: String,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct CompleteMaintenanceDto {
    /// Today when missing.
    pub done_on: Option<NaiveDate>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct MessageFilterDto {
    pub status: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct StarDto {
    pub starred: bool,
}
