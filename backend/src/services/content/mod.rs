//! # Content Service Module
//!
//! Read-only endpoints for the site content collections. Every endpoint has
//! the same shape: an optional equality filter, an optional `limit` with a
//! per-endpoint default, and a JSON array of the entity as response.
//!
//! ## Registered Routes (under `/api`):
//!
//! *   **`GET /testimonials?limit=`** (`testimonials::process`, default limit 10)
//! *   **`GET /menu?category=&limit=`** (`menu::process`, default limit 50)
//! *   **`GET /events?holiday_only=&limit=`** (`events::process`, default limit 20).
//!     `holiday_only=true` restricts to `is_holiday_special` events.
//! *   **`GET /gallery?category=&limit=`** (`gallery::process`, default limit 20)
//!
//! A `limit` of 0 returns every matching document; a negative `limit` is
//! read as its absolute value.

mod events;
mod gallery;
mod menu;
mod testimonials;

use crate::error::ApiError;
use crate::state::AppState;
use crate::store::{Document, Filter, ID_FIELD};
use actix_web::web::{get, scope};
use actix_web::Scope;
use jefferson_common::model::Collection;
use jefferson_common::validation::Validate;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// The base path for all content endpoints.
const API_PATH: &str = "/api";

/// Configures and returns the Actix `Scope` for the content routes.
///
/// The scope claims the whole `/api` prefix, so it must be registered after
/// any narrower `/api/...` scope.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/testimonials", get().to(testimonials::process))
        .route("/menu", get().to(menu::process))
        .route("/events", get().to(events::process))
        .route("/gallery", get().to(gallery::process))
}

/// Maps a caller-supplied limit onto the store's: sign is ignored, 0 means
/// unlimited.
fn store_limit(limit: i64) -> usize {
    usize::try_from(limit.unsigned_abs()).unwrap_or(usize::MAX)
}

/// Equality filter on a single string field. Empty values mean "no filter".
fn optional_filter(field: &str, value: Option<String>) -> Filter {
    let mut filter = Filter::new();
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        filter.insert(field.to_string(), Value::String(value));
    }
    filter
}

/// Fetches matching documents of `T`'s collection and converts each into `T`.
async fn list<T>(state: &AppState, filter: Filter, limit: i64) -> Result<Vec<T>, ApiError>
where
    T: Collection + DeserializeOwned + Validate + Send + 'static,
{
    let limit = store_limit(limit);
    let documents = state
        .with_store(move |store| store.find(T::NAME, &filter, limit))
        .await?;

    documents.into_iter().map(shape::<T>).collect()
}

/// Outbound conversion of a stored document: drop the store identity, then
/// require the remainder to match the current schema.
fn shape<T>(mut document: Document) -> Result<T, ApiError>
where
    T: Collection + DeserializeOwned + Validate,
{
    document.remove(ID_FIELD);

    let invalid = |reason: String| ApiError::InvalidRecord {
        collection: T::NAME.to_string(),
        reason,
    };
    let record: T =
        serde_json::from_value(Value::Object(document)).map_err(|e| invalid(e.to_string()))?;
    record.validate().map_err(|e| invalid(e.to_string()))?;
    Ok(record)
}
