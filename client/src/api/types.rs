//! Request and response bodies of the marketplace REST API.

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::models::{AlbumDetails, PhotoRecord, Role, User};

/// `{success, error?}` envelope returned by mutating endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiStatus {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiStatus {
    pub fn ok() -> Self {
        Self { success: true, error: None }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self { success: false, error: Some(error.into()) }
    }

    /// Treat anything but `success: true` as a server rejection.
    ///
    /// A 2xx body without the flag (e.g. `{}`) is a rejection with no message.
    pub fn into_result(self) -> ApiResult<()> {
        if self.success {
            Ok(())
        } else {
            Err(ApiError::Server(self.error.unwrap_or_default()))
        }
    }
}

// =============================================================================
// Upload
// =============================================================================

/// Body of `POST photos/upload`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadRequest {
    /// Existing album to add the photos to.
    pub album_id: Option<i64>,
    /// Album to create for the photos.
    pub album: Option<NewAlbum>,
    pub photos: Vec<UploadPhoto>,
}

/// Fields of an album created by an upload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAlbum {
    pub title: String,
    pub description: String,
}

/// One photo of an upload payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadPhoto {
    /// Data URL of the image.
    pub photo: String,
    pub filename: String,
    pub title: String,
    pub description: String,
    pub capture_date: String,
}

// =============================================================================
// Albums
// =============================================================================

/// Response of `GET albums/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub album: Option<AlbumDetails>,
    #[serde(default)]
    pub photos: Vec<PhotoRecord>,
    #[serde(default)]
    pub error: Option<String>,
}

// =============================================================================
// Authentication
// =============================================================================

/// Body of `POST auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST auth/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Response of `auth/login` and `auth/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_without_success_flag_is_rejected() {
        let status: ApiStatus = serde_json::from_str("{}").unwrap();
        assert_eq!(status.into_result(), Err(ApiError::Server(String::new())));

        let status: ApiStatus =
            serde_json::from_str(r#"{"success": false, "error": "Photo not found"}"#).unwrap();
        assert_eq!(status.into_result(), Err(ApiError::Server("Photo not found".into())));

        assert_eq!(ApiStatus::ok().into_result(), Ok(()));
    }

    #[test]
    fn test_upload_request_wire_shape() {
        let request = UploadRequest {
            album_id: None,
            album: Some(NewAlbum { title: "Coast".into(), description: String::new() }),
            photos: vec![UploadPhoto {
                photo: "data:image/jpeg;base64,AAAA".into(),
                filename: "dawn.jpg".into(),
                title: "Dawn".into(),
                description: "Low tide".into(),
                capture_date: "2024-05-01".into(),
            }],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert!(value["album_id"].is_null());
        assert_eq!(value["album"]["title"], "Coast");
        assert_eq!(value["photos"][0]["capture_date"], "2024-05-01");
        assert_eq!(value["photos"][0]["photo"], "data:image/jpeg;base64,AAAA");
    }

    #[test]
    fn test_auth_failure_deserialization() {
        let response: AuthResponse =
            serde_json::from_str(r#"{"success": false, "error": "Invalid credentials"}"#).unwrap();
        assert!(!response.success);
        assert!(response.token.is_none());
        assert_eq!(response.error.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn test_album_response_deserialization() {
        let json = r#"{
            "success": true,
            "album": {"id": 4, "title": "Coast", "description": "", "uploader": "marc", "created_at": "2024-01-02"},
            "photos": [{"id": 1, "title": "A", "uploader": "marc", "album": {"id": 4, "title": "Coast"}}]
        }"#;
        let response: AlbumResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.album.unwrap().uploader.as_deref(), Some("marc"));
        assert_eq!(response.photos.len(), 1);
    }
}
