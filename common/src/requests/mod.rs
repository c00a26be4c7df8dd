//! Wire contract with the catalog service and the local host.
//!
//! - `POST {api_base_url}/products/validate` with a JSON array of `RawRow`
//!   answers a JSON array of `ValidatedProduct`.
//! - `PUT {api_base_url}/products` with a JSON array of `ValidatedProduct`
//!   answers any 2xx on success; the body is ignored.
//! - `GET /api/config` on the host serving the page answers a `ClientConfig`.

use crate::config::ClientConfig;

pub const VALIDATE_PATH: &str = "/products/validate";
pub const UPDATE_PATH: &str = "/products";
pub const CONFIG_PATH: &str = "/api/config";

/// Request body of the validation call.
pub type ValidateProductsRequest = Vec<crate::model::csv::RawRow>;
/// Response body of the validation call, and request body of the update call.
pub type ValidatedProducts = Vec<crate::model::product::ValidatedProduct>;

pub fn validate_url(config: &ClientConfig) -> String {
    join(&config.api_base_url, VALIDATE_PATH)
}

pub fn update_url(config: &ClientConfig) -> String {
    join(&config.api_base_url, UPDATE_PATH)
}

fn join(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
