//! Liveness and diagnostics endpoints, mounted at the root.
//!
//! *   **`GET /`**: `{"message": "Jefferson Bar & Grill API running"}`.
//! *   **`GET /test`**: store connectivity, configuration presence and the
//!     collections present in the store. Never fails; problems are reported as
//!     status strings.

mod diagnostics;

use actix_web::web::{get, scope};
use actix_web::{HttpResponse, Scope};
use serde_json::json;

pub const LIVENESS_MESSAGE: &str = "Jefferson Bar & Grill API running";

/// Configures and returns the root `Scope`. It has an empty prefix and so
/// matches every path; register it last.
pub fn configure_routes() -> Scope {
    scope("")
        .route("/", get().to(root))
        .route("/test", get().to(diagnostics::process))
}

async fn root() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "message": LIVENESS_MESSAGE }))
}
