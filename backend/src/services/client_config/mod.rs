//! Publishes the settings the page needs to reach the catalog service.
//!
//! The provided route is:
//! - `GET /api/config`: returns the `ClientConfig` built from the host
//!   environment (catalog base URL and request timeout) as JSON. The page
//!   fetches it once on first render and keeps its built-in defaults if the
//!   call fails.

use actix_web::web::{get, scope};
use actix_web::Scope;

mod get;

const API_PATH: &str = "/api";

/// Configures and returns the Actix scope for the client configuration route.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        // Route to read the client configuration.
        .route("/config", get().to(get::process))
}
