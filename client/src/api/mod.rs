//! API gateway.
//!
//! Endpoint paths, response interpretation shared by every transport, and
//! the transport seam used by the upload composer. The native `reqwest`
//! gateway lives in [`client`] (feature `cli`); the browser gateway lives
//! in the front-end crate.
//!
//! # Endpoints
//!
//! | Method | Path                    | Description                  |
//! |--------|-------------------------|------------------------------|
//! | GET    | `photos/`               | List all photos              |
//! | GET    | `albums/{id}`           | Album header and its photos  |
//! | POST   | `photos/upload`         | Upload a batch               |
//! | DELETE | `photos/delete/{id}`    | Delete one of your photos    |
//! | POST   | `auth/login`            | Exchange credentials         |
//! | POST   | `auth/register`         | Create an account            |

pub mod types;

#[cfg(feature = "cli")]
pub mod client;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

pub use types::*;

#[cfg(feature = "cli")]
pub use client::ApiClient;

/// Endpoint paths relative to the API base.
pub mod endpoints {
    pub const PHOTOS: &str = "photos/";
    pub const UPLOAD: &str = "photos/upload";
    pub const LOGIN: &str = "auth/login";
    pub const REGISTER: &str = "auth/register";

    pub fn album(id: i64) -> String {
        format!("albums/{}", id)
    }

    pub fn delete_photo(id: i64) -> String {
        format!("photos/delete/{}", id)
    }
}

/// `Authorization` header value for a token.
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Sends upload payloads. Implemented by both gateways and by test doubles.
#[allow(async_fn_in_trait)]
pub trait UploadTransport {
    async fn upload(&self, request: &UploadRequest) -> ApiResult<ApiStatus>;
}

/// Turn a raw HTTP response into a typed body or an [`ApiError`].
///
/// - a body carrying `success: false` is a server-reported failure, whatever
///   the status, and its `error` text is kept verbatim
/// - any other non-2xx status is an [`ApiError::Http`]
/// - a 2xx body that does not decode as `T` is an [`ApiError::Decode`]
pub fn interpret_response<T: DeserializeOwned>(status: u16, body: &str) -> ApiResult<T> {
    let parsed: Option<Value> = serde_json::from_str(body).ok();

    if let Some(Value::Object(map)) = &parsed {
        if map.get("success") == Some(&Value::Bool(false)) {
            let message = map
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            return Err(ApiError::Server(message));
        }
    }

    if !(200..300).contains(&status) {
        return Err(ApiError::Http {
            status,
            body: body.chars().take(500).collect(),
        });
    }

    match parsed {
        Some(value) => serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string())),
        None => Err(ApiError::Decode(format!(
            "invalid JSON body: {}",
            body.chars().take(200).collect::<String>()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PhotoRecord;

    #[test]
    fn test_success_body_decodes() {
        let status: ApiStatus = interpret_response(200, r#"{"success": true}"#).unwrap();
        assert!(status.success);

        let photos: Vec<PhotoRecord> = interpret_response(200, r#"[{"id": 1}, {"id": 2}]"#).unwrap();
        assert_eq!(photos.len(), 2);
    }

    #[test]
    fn test_business_failure_is_verbatim_on_any_status() {
        let err = interpret_response::<ApiStatus>(200, r#"{"success": false, "error": "Album not found"}"#)
            .unwrap_err();
        assert_eq!(err, ApiError::Server("Album not found".into()));

        let err = interpret_response::<ApiStatus>(403, r#"{"success": false, "error": "Only uploaders can upload photos"}"#)
            .unwrap_err();
        assert_eq!(err.user_message("Upload failed"), "Only uploaders can upload photos");
    }

    #[test]
    fn test_http_error_without_envelope() {
        let err = interpret_response::<ApiStatus>(502, "Bad gateway").unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 502, .. }));
    }

    #[test]
    fn test_undecodable_success_body() {
        let err = interpret_response::<Vec<PhotoRecord>>(200, "<html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(endpoints::album(12), "albums/12");
        assert_eq!(endpoints::delete_photo(5), "photos/delete/5");
        assert_eq!(bearer("abc"), "Bearer abc");
    }
}
