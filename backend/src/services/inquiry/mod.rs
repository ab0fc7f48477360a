//! # Inquiry Service Module
//!
//! The only write endpoint of the API.
//!
//! ## Registered Routes:
//!
//! *   **`POST /api/inquiry`**:
//!     - **Handler**: `submit::process`
//!     - **Description**: Accepts `{name, email, message, phone?}`. The payload is
//!       validated before any store interaction (invalid email or missing field:
//!       `422`). A valid inquiry is stored in the `inquiry` collection with
//!       `source = "website"` and acknowledged with `{"ok": true, "message": ...}`.
//!       A store failure answers `500` with the error description.

mod submit;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/inquiry";

/// Configures and returns the Actix `Scope` for the inquiry route.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", post().to(submit::process))
}
