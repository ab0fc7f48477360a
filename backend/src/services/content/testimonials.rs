use crate::error::ApiError;
use crate::services::content::list;
use crate::state::AppState;
use crate::store::Filter;
use actix_web::{web, HttpResponse};
use jefferson_common::model::Testimonial;
use serde::Deserialize;

const DEFAULT_LIMIT: i64 = 10;

#[derive(Deserialize)]
pub struct TestimonialsQuery {
    #[serde(default = "default_limit")]
    limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

/// Actix web handler for the `GET /api/testimonials` endpoint.
///
/// # Arguments
/// * `state` - The shared `AppState` holding the document store.
/// * `query` - Optional `limit` (default 10).
///
/// # Returns
/// - `200 OK` with a JSON array of `Testimonial` objects.
/// - `500 Internal Server Error` if the store is unavailable or a stored
///   testimonial no longer matches the schema.
pub(crate) async fn process(
    state: web::Data<AppState>,
    query: web::Query<TestimonialsQuery>,
) -> Result<HttpResponse, ApiError> {
    let testimonials = list::<Testimonial>(&state, Filter::new(), query.limit).await?;
    Ok(HttpResponse::Ok().json(testimonials))
}
