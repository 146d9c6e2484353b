//! Client configuration.
//!
//! The only setting is the server base URL. Image paths returned by the
//! API are relative to it, and every endpoint lives under `<server>/api/`.

/// Server used when nothing else is configured.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

/// Environment variable overriding the server URL (CLI only).
pub const SERVER_URL_ENV: &str = "MIDDLEFRAME_SERVER_URL";

/// Path segment every endpoint hangs off.
const API_PREFIX: &str = "api/";

/// Connection settings shared by the gateways and the formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    server_url: String,
}

impl ClientConfig {
    /// Create a config for the given server; trailing slashes are dropped.
    pub fn new(server_url: impl Into<String>) -> Self {
        let server_url = server_url.into();
        Self {
            server_url: server_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read the server URL from `MIDDLEFRAME_SERVER_URL` (or `.env`).
    #[cfg(feature = "cli")]
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        match std::env::var(SERVER_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    /// Server base URL without trailing slash.
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// API base URL, always ending with `/api/`.
    pub fn api_base(&self) -> String {
        format!("{}/{}", self.server_url, API_PREFIX)
    }

    /// Absolute URL of an API endpoint path such as `photos/upload`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base(), path.trim_start_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_api_prefix() {
        let config = ClientConfig::new("http://localhost:8000/");
        assert_eq!(config.server_url(), "http://localhost:8000");
        assert_eq!(config.api_base(), "http://localhost:8000/api/");
        assert_eq!(config.endpoint("photos/"), "http://localhost:8000/api/photos/");
        assert_eq!(config.endpoint("/albums/3"), "http://localhost:8000/api/albums/3");
    }

    #[test]
    fn test_default_server() {
        assert_eq!(ClientConfig::default().server_url(), DEFAULT_SERVER_URL);
    }
}
