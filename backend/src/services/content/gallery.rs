use crate::error::ApiError;
use crate::services::content::{list, optional_filter};
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use jefferson_common::model::GalleryItem;
use serde::Deserialize;

const DEFAULT_LIMIT: i64 = 20;

#[derive(Deserialize)]
pub struct GalleryQuery {
    category: Option<String>,
    #[serde(default = "default_limit")]
    limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

/// Actix web handler for the `GET /api/gallery` endpoint.
///
/// # Arguments
/// * `state` - The shared `AppState` holding the document store.
/// * `query` - Optional `category` (exact match) and `limit` (default 20).
///
/// # Returns
/// - `200 OK` with a JSON array of `GalleryItem` objects.
/// - `500 Internal Server Error` on store failure or an invalid stored item.
pub(crate) async fn process(
    state: web::Data<AppState>,
    query: web::Query<GalleryQuery>,
) -> Result<HttpResponse, ApiError> {
    let GalleryQuery { category, limit } = query.into_inner();
    let items = list::<GalleryItem>(&state, optional_filter("category", category), limit).await?;
    Ok(HttpResponse::Ok().json(items))
}
