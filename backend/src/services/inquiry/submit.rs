use crate::error::ApiError;
use crate::state::AppState;
use crate::store::to_document;
use actix_web::{web, HttpResponse};
use jefferson_common::model::{Collection, Inquiry};
use jefferson_common::requests::InquiryIn;
use log::info;
use serde_json::json;

pub const ACKNOWLEDGEMENT: &str = "Thanks! We'll be in touch soon.";

/// Actix web handler for the `POST /api/inquiry` endpoint.
///
/// # Arguments
/// * `state` - The shared `AppState` holding the document store.
/// * `payload` - The JSON body: `name`, `email`, `message` and optional `phone`.
///
/// # Returns
/// - `200 OK` with `{"ok": true, "message": ...}` once the inquiry is stored.
/// - `422 Unprocessable Entity` if the email is not a valid address.
/// - `500 Internal Server Error` with the store error if the write fails.
pub(crate) async fn process(
    state: web::Data<AppState>,
    payload: web::Json<InquiryIn>,
) -> Result<HttpResponse, ApiError> {
    let id = submit_inquiry(&state, payload.into_inner()).await?;
    info!("Stored inquiry {}", id);

    Ok(HttpResponse::Ok().json(json!({ "ok": true, "message": ACKNOWLEDGEMENT })))
}

/// Validates the payload and stores it. Returns the new document identifier.
pub async fn submit_inquiry(state: &AppState, payload: InquiryIn) -> Result<String, ApiError> {
    let inquiry = Inquiry::try_from(payload)?;
    let document = to_document(Inquiry::NAME, &inquiry)?;

    let id = state
        .with_store(move |store| store.insert(Inquiry::NAME, document))
        .await?;
    Ok(id)
}
