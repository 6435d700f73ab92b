use std::sync::Arc;

use colored::Colorize;
use servicing_architecture::background_service::BackgroundService;
use servicing_infrastructure::{config::build_config, telemetry::initialize_telemetry};
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::api;
use crate::infrastructure::ServiceProvider;

pub fn run() {
    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(x) => x,
        Err(e) => return eprintln!("{}: {}", "Cannot build tokio runtime".red(), e),
    };
    runtime.block_on(async_run());
}

pub async fn async_run() {
    let config = match build_config() {
        Ok(x) => x,
        Err(e) => {
            return eprintln!("{}: {}", "Cannot build config".red(), e);
        }
    };

    let service_provider = match ServiceProvider::build(config).await {
        Ok(x) => Arc::new(x),
        Err(e) => {
            return eprintln!("{}: {}", "Cannot build Service Provider".red(), e);
        }
    };
    if let Err(e) = initialize_telemetry(service_provider.config().common.telemetry()) {
        return eprintln!("{}: {}", "Cannot build logger".red(), e);
    };
    let handles = service_provider
        .background_services()
        .into_iter()
        .map(|x| {
            tokio::spawn(async move {
                let task = x.clone();
                task.run().await
            })
        })
        .collect::<Vec<JoinHandle<()>>>();
    info!(jobs = handles.len(), "Background jobs started.");
    tokio::select! {
        _ = initialize_web_host(service_provider) => {

        }
        _ = tokio::signal::ctrl_c() => {
            info!("Stoping Services (ctrl-c handling).");
            for handle in handles {
                handle.abort()
            }
            std::process::exit(0);
        }
    }
}

pub async fn initialize_web_host(sp: Arc<ServiceProvider>) {
    let host = sp.config().common.host().clone();
    let server = actix_web::HttpServer::new(move || {
        let cors = actix_cors::Cors::default()
            .allow_any_origin()
            .allow_any_header()
            .allow_any_method()
            .max_age(86400);

        actix_web::App::new()
            .wrap(tracing_actix_web::TracingLogger::default())
            .wrap(cors)
            .app_data(actix_web::web::Data::from(sp.clone()))
            .service(api::registry::create_client)
            .service(api::registry::get_client)
            .service(api::registry::create_appliance)
            .service(api::registry::create_category)
            .service(api::registry::create_manufacturer)
            .service(api::registry::create_technician)
            .service(api::registry::create_user)
            .service(api::services::create_service)
            .service(api::services::list_services_by_status)
            .service(api::services::get_service)
            .service(api::services::change_status)
            .service(api::services::assign_technician)
            .service(api::services::reopen)
            .service(api::services::complete_with_report)
            .service(api::services::completion_report)
            .service(api::services::register_removed_part)
            .service(api::services::list_removed_parts)
            .service(api::services::change_removed_part_status)
            .service(api::inventory::request_order)
            .service(api::inventory::active_orders)
            .service(api::inventory::order_history)
            .service(api::inventory::approve_order)
            .service(api::inventory::mark_ordered)
            .service(api::inventory::mark_received)
            .service(api::inventory::confirm_delivery)
            .service(api::inventory::cancel_order)
            .service(api::inventory::remove_from_ordering)
            .service(api::inventory::register_supplier)
            .service(api::inventory::add_stock)
            .service(api::inventory::available_parts)
            .service(api::inventory::allocate)
            .service(api::inventory::mark_allocation_used)
            .service(api::inventory::return_allocation)
            .service(api::inventory::add_catalog_entry)
            .service(api::maintenance::create_schedule)
            .service(api::maintenance::complete_maintenance)
            .service(api::notification::unread_notifications)
            .service(api::notification::mark_read)
            .service(api::notification::mark_all_read)
            .service(api::messages::send_message)
            .service(api::messages::list_messages)
            .service(api::messages::messages_of_partner)
            .service(api::messages::mark_message_read)
            .service(api::messages::reply_to_message)
            .service(api::messages::archive_message)
            .service(api::messages::star_message)
    })
    .bind((host.bind_address().to_owned(), *host.bind_port()));
    let server = match server {
        Ok(x) => x,
        Err(e) => return error!("Cannot bind web host: {}", e),
    };
    match server.disable_signals().run().await {
        Ok(_) => info!("Web server stopped successfully."),
        Err(e) => error!("Web server into erorr: {}", e),
    }
}
