use crate::error::ApiError;
use crate::services::content::list;
use crate::state::AppState;
use crate::store::Filter;
use actix_web::{web, HttpResponse};
use jefferson_common::model::Event;
use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

const DEFAULT_LIMIT: i64 = 20;

#[derive(Deserialize)]
pub struct EventsQuery {
    #[serde(default, deserialize_with = "flexible_bool")]
    holiday_only: bool,
    #[serde(default = "default_limit")]
    limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

/// Accepts the usual spellings of a query-string flag.
fn flexible_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "t" | "y" => Ok(true),
        "false" | "0" | "no" | "off" | "f" | "n" => Ok(false),
        _ => Err(de::Error::custom(format!(
            "holiday_only: '{raw}' is not a valid boolean"
        ))),
    }
}

/// `GET /api/events`. With `holiday_only=true` only holiday specials are
/// returned; otherwise every event, whatever its flag.
pub(crate) async fn process(
    state: web::Data<AppState>,
    query: web::Query<EventsQuery>,
) -> Result<HttpResponse, ApiError> {
    let mut filter = Filter::new();
    if query.holiday_only {
        filter.insert("is_holiday_special".to_string(), Value::Bool(true));
    }

    let events = list::<Event>(&state, filter, query.limit).await?;
    Ok(HttpResponse::Ok().json(events))
}
