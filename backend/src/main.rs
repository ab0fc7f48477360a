mod config;
mod error;
mod seed;
mod services;
mod state;
mod store;

use crate::config::Config;
use crate::state::AppState;
use crate::store::DocumentStore;
use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};
use std::io;

/// Any origin, method and header; credentials allowed.
fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
}

/// Opens the configured store, falling back to a disconnected one so the
/// server still starts (and `/test` can say what is wrong).
fn open_store(config: &Config) -> DocumentStore {
    let location = match config.store_location() {
        Ok(location) => location,
        Err(e) => {
            warn!("Document store not configured: {}", e);
            return DocumentStore::disconnected();
        }
    };

    DocumentStore::open(&location).unwrap_or_else(|e| {
        warn!("Document store unavailable: {}", e);
        DocumentStore::disconnected()
    })
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::load().map_err(io::Error::other)?;
    let store = open_store(&config);

    // Seeding is best-effort: the report is logged and dropped, and the
    // server starts whatever the outcome.
    match seed::seed_default_content(&store) {
        Ok(report) => {
            report.log();
            let failed = report.failures().count();
            if failed > 0 {
                warn!("{} content collections could not be seeded", failed);
            }
        }
        Err(e) => warn!("Skipping content seed: {}", e),
    }

    let host = config.host.clone();
    let port = config.port;
    let state = AppState::new(store, config);

    info!("Server running at http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(cors())
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(services::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
