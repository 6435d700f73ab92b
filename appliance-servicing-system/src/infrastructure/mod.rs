mod config;
mod database;
mod repository;
mod service_provider;

pub use self::config::ServicingConfig;
pub use service_provider::{ServiceProvider, ServiceProviderScoped};
