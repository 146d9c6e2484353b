//! Domain models as the API server sends them.
//!
//! These records are read-only to the client. Every field the server may
//! omit is optional so that malformed records still deserialize; the
//! formatter and the views decide how absent values are shown.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Users
// =============================================================================

/// Account role as stored by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Contributor allowed to upload and delete photos.
    Uploader,
    /// Viewer/purchaser.
    Buyer,
}

impl Role {
    /// Wire name (`uploader` / `buyer`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Uploader => "uploader",
            Role::Buyer => "buyer",
        }
    }

    /// Parse a wire name, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "uploader" => Some(Role::Uploader),
            "buyer" => Some(Role::Buyer),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authenticated user as returned by `auth/login` and `auth/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    pub role: Role,
}

impl User {
    /// Whether this user may upload photos.
    pub fn is_uploader(&self) -> bool {
        self.role == Role::Uploader
    }

    /// First letter of the username, upper-cased (profile avatar).
    pub fn initial(&self) -> Option<char> {
        self.username.chars().next().map(|c| c.to_ascii_uppercase())
    }
}

/// Uploader reference nested in photo records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: Option<i64>,
    pub username: Option<String>,
}

// =============================================================================
// Photos and albums
// =============================================================================

/// Album reference nested in photo records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumRef {
    pub id: i64,
    pub title: String,
}

/// Photo record from `GET photos/` and `GET albums/{id}`.
///
/// The listing nests the uploader as `user: {id, username}` while album
/// details flatten it to `uploader`; both shapes are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub capture_date: Option<String>,
    /// Watermarked, compressed rendition.
    #[serde(default)]
    pub image: Option<String>,
    /// High-quality original.
    #[serde(default)]
    pub original_image: Option<String>,
    #[serde(default)]
    pub user: Option<UserRef>,
    #[serde(default)]
    pub uploader: Option<String>,
    #[serde(default)]
    pub album: Option<AlbumRef>,
}

impl PhotoRecord {
    /// Uploader name from whichever shape the server used.
    pub fn uploader_name(&self) -> Option<&str> {
        self.user
            .as_ref()
            .and_then(|u| u.username.as_deref())
            .or(self.uploader.as_deref())
    }
}

/// Album header from `GET albums/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumDetails {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub uploader: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_record_deserialization() {
        let json = r#"{
            "id": 7,
            "title": "Harbor",
            "description": "Fog at dawn",
            "capture_date": "2024-03-01",
            "image": "/media/photos/compressed/harbor.jpg",
            "original_image": "/media/photos/original/harbor.jpg",
            "user": {"id": 2, "username": "ines"},
            "album": {"id": 4, "title": "Coast"}
        }"#;

        let record: PhotoRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.uploader_name(), Some("ines"));
        assert_eq!(record.album.unwrap().title, "Coast");
    }

    #[test]
    fn test_album_photo_uses_flat_uploader() {
        let json = r#"{"id": 1, "title": "A", "uploader": "marc", "image": null}"#;
        let record: PhotoRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.uploader_name(), Some("marc"));
        assert!(record.image.is_none());
    }

    #[test]
    fn test_missing_fields_still_deserialize() {
        let record: PhotoRecord = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert!(record.title.is_none());
        assert!(record.uploader_name().is_none());
    }

    #[test]
    fn test_role_wire_names() {
        let user: User = serde_json::from_str(
            r#"{"id": 1, "username": "ines", "email": "i@x.io", "role": "uploader"}"#,
        )
        .unwrap();
        assert!(user.is_uploader());
        assert_eq!(user.initial(), Some('I'));
        assert_eq!(Role::parse("Buyer"), Some(Role::Buyer));
        assert_eq!(Role::parse("admin"), None);
    }
}
