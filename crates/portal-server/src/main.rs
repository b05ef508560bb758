// Portal Server
//
// Main server binary for the portal login service

mod config;
mod logging;
mod routes;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use anyhow::Result;
use log::info;
use portal_auth::{CredentialStore, StaticCredentialStore};
use std::sync::Arc;

#[actix_web::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = match config::ServerConfig::from_file("config.toml") {
        Ok(cfg) => cfg,
        Err(_) => {
            eprintln!("Warning: config.toml not found, using defaults");
            config::ServerConfig::default()
        }
    };

    // Initialize logging
    logging::init_logging(
        &config.logging.level,
        &config.logging.file_path,
        config.logging.log_to_console,
        &config.logging.format,
    )?;

    info!("Starting Portal Server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration loaded: host={}, port={}", config.server.host, config.server.port);

    // Fail-closed: no secret, no server. Also rejects an unconfigured credential.
    let auth_settings = config.auth_settings()?;
    let credential = config.credential().await?;
    info!("Credential configured for user '{}' (id={})", credential.username, credential.user_id);

    let store: Arc<dyn CredentialStore> = Arc::new(StaticCredentialStore::new(credential));

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Starting HTTP server on {}", bind_addr);
    info!("Endpoints: POST /login, POST /verify, GET /healthcheck");

    let workers = config.server.workers;

    // Start HTTP server
    HttpServer::new(move || {
        // CORS for browser clients: any origin, POST + preflight only
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["POST", "OPTIONS"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
            .max_age(3600);

        App::new()
            .wrap(middleware::Logger::default())
            .wrap(cors)
            .app_data(web::JsonConfig::default().error_handler(portal_api::json_error_handler))
            .app_data(web::Data::new(store.clone()))
            .app_data(web::Data::new(auth_settings.clone()))
            .configure(routes::configure)
    })
    .bind(&bind_addr)?
    .workers(if workers == 0 { num_cpus::get() } else { workers })
    .run()
    .await?;

    info!("Server shutdown complete");
    Ok(())
}
