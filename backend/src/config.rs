//! Host configuration read from environment variables.
//!
//! | variable                  | default                 |
//! |---------------------------|-------------------------|
//! | `PRICE_TOOL_HOST`         | `127.0.0.1`             |
//! | `PRICE_TOOL_PORT`         | `8080`                  |
//! | `PRICE_TOOL_OPEN_BROWSER` | `true`                  |
//! | `CATALOG_API_URL`         | `http://localhost:3001` |
//! | `CATALOG_TIMEOUT_MS`      | `30000`                 |
//!
//! The two `CATALOG_*` values are not used by the host itself; they are handed
//! to the page through `GET /api/config`.

use common::config::{ClientConfig, DEFAULT_API_BASE_URL, DEFAULT_REQUEST_TIMEOUT_MS};
use std::fmt::Display;
use std::str::FromStr;

const HOST_VAR: &str = "PRICE_TOOL_HOST";
const PORT_VAR: &str = "PRICE_TOOL_PORT";
const OPEN_BROWSER_VAR: &str = "PRICE_TOOL_OPEN_BROWSER";
const API_URL_VAR: &str = "CATALOG_API_URL";
const TIMEOUT_VAR: &str = "CATALOG_TIMEOUT_MS";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
    pub client: ClientConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Unset keys take their
    /// default; set but unparsable keys are an error naming the variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let api_base_url = lookup(API_URL_VAR)
            .map(|url| url.trim().to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        if api_base_url.is_empty() {
            return Err(format!("{} must not be empty", API_URL_VAR));
        }

        let request_timeout_ms = parse_var(&lookup, TIMEOUT_VAR, DEFAULT_REQUEST_TIMEOUT_MS)?;
        if request_timeout_ms == 0 {
            return Err(format!("{} must be greater than zero", TIMEOUT_VAR));
        }

        Ok(Self {
            host: lookup(HOST_VAR).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_var(&lookup, PORT_VAR, DEFAULT_PORT)?,
            open_browser: parse_var(&lookup, OPEN_BROWSER_VAR, true)?,
            client: ClientConfig {
                api_base_url,
                request_timeout_ms,
            },
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T, String>
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| format!("invalid {}={:?}: {}", key, raw, e)),
    }
}
