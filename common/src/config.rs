use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 30_000;

/// Settings the browser page needs to reach the catalog service.
///
/// Published by the host at `requests::CONFIG_PATH`. Missing fields fall back
/// to the defaults so older hosts keep working.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the catalog service, without the endpoint paths.
    pub api_base_url: String,
    /// Time after which a validate or update call is aborted. Calls are never
    /// retried automatically.
    pub request_timeout_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"api_base_url":"https://catalog"}"#).unwrap();
        assert_eq!(config.api_base_url, "https://catalog");
        assert_eq!(config.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
    }
}
