use serde::Deserialize;
use service_servicing::{BillingJobConfig, MaintenanceJobConfig};
use servicing_infrastructure::config::CommonConfig;

#[derive(Default, Clone, Deserialize, Debug)]
pub struct ServicingConfig {
    #[serde(default, flatten)]
    pub common: CommonConfig,
    #[serde(default)]
    pub jobs: JobsConfig,
}

#[derive(Default, Clone, Deserialize, Debug)]
pub struct JobsConfig {
    #[serde(default)]
    pub maintenance: MaintenanceJobConfig,
    #[serde(default)]
    pub billing: BillingJobConfig,
}
