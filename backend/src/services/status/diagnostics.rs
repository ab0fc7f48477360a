use crate::state::AppState;
use actix_web::{web, HttpResponse};
use serde::Serialize;

const MAX_ERROR_CHARS: usize = 80;

const RUNNING: &str = "✅ Running";
const CONNECTED: &str = "✅ Connected";
const NOT_INITIALIZED: &str = "❌ Not Initialized";
const SET: &str = "✅ Set";
const NOT_SET: &str = "❌ Not Set";

#[derive(Debug, Serialize)]
pub struct Diagnostics {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub collections: Vec<String>,
}

/// Actix web handler for the `GET /test` endpoint.
///
/// # Arguments
/// * `state` - The shared `AppState` holding the store and configuration.
///
/// # Returns
/// Always `200 OK` with a `Diagnostics` object. Store problems are described
/// in its `database` field instead of failing the request.
pub(crate) async fn process(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(diagnose(&state).await)
}

/// Collects the health report. Every failure ends up in `database` as text.
pub async fn diagnose(state: &AppState) -> Diagnostics {
    let mut status = Diagnostics {
        backend: RUNNING.to_string(),
        database: NOT_INITIALIZED.to_string(),
        database_url: presence(state.config.database_url.as_deref()),
        database_name: presence(state.config.database_name.as_deref()),
        collections: Vec::new(),
    };

    if !state.store.is_connected() {
        return status;
    }

    let probe = state
        .with_store(|store| {
            store.ping()?;
            Ok(store.list_collection_names())
        })
        .await;

    match probe {
        Ok(Ok(collections)) => {
            status.database = CONNECTED.to_string();
            status.collections = collections;
        }
        Ok(Err(e)) => {
            status.database = format!(
                "⚠️ Connected but error listing collections: {}",
                truncate(&e.to_string())
            );
        }
        Err(e) => {
            status.database = format!("❌ Error: {}", truncate(&e.to_string()));
        }
    }

    status
}

fn presence(value: Option<&str>) -> String {
    let label = if value.is_some() { SET } else { NOT_SET };
    label.to_string()
}

fn truncate(message: &str) -> String {
    message.chars().take(MAX_ERROR_CHARS).collect()
}
