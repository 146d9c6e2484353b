//! Application configuration.
//!
//! Compile-time settings for the Middle Frame front-end. The API server
//! location is fixed at build time; there is no runtime config file.

use middleframe::ClientConfig;

/// API server origin. Relative image paths are resolved against it.
pub const SERVER_URL: &str = "http://127.0.0.1:8000";

/// Application name shown in the header and page titles.
pub const APP_NAME: &str = "The Middle Frame";

/// Short brand mark used as logo.
pub const LOGO_TEXT: &str = "TMF";

/// Gateway configuration for [`SERVER_URL`].
pub fn client_config() -> ClientConfig {
    ClientConfig::new(SERVER_URL)
}
