//! View-model formatting.
//!
//! Pure functions turning [`PhotoRecord`]s into display-ready
//! [`PhotoView`]s. Inputs are never mutated and there is no error path:
//! absent values stay absent and the views render placeholders.

use chrono::{Datelike, NaiveDate};

use crate::models::{AlbumDetails, AlbumRef, PhotoRecord};

/// Prefix identifying an already-absolute image URL.
const ABSOLUTE_URL_PREFIX: &str = "http";

/// Display-ready photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoView {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub capture_date: Option<String>,
    /// Image shown in grids and the detail modal.
    pub url: Option<String>,
    /// Low-quality, watermarked download.
    pub watermarked_url: Option<String>,
    /// Original, high-quality download.
    pub hq_url: Option<String>,
    pub uploader: Option<String>,
    pub album: Option<AlbumRef>,
}

impl PhotoView {
    /// Year shown on photo cards.
    pub fn capture_year(&self) -> Option<i32> {
        let date = self.capture_date.as_deref()?;
        NaiveDate::parse_from_str(date.get(..10).unwrap_or(date), "%Y-%m-%d")
            .ok()
            .map(|d| d.year())
    }
}

/// Resolve an image path against the server base URL.
///
/// Values starting with `http` pass through unchanged; anything else gets
/// `server_url` prepended exactly once.
pub fn resolve_image_url(server_url: &str, path: Option<&str>) -> Option<String> {
    let path = path?;
    if path.starts_with(ABSOLUTE_URL_PREFIX) {
        Some(path.to_string())
    } else {
        Some(format!("{}{}", server_url, path))
    }
}

/// Format one listing record.
pub fn format_photo(record: &PhotoRecord, server_url: &str) -> PhotoView {
    let url = resolve_image_url(server_url, record.image.as_deref());

    PhotoView {
        id: record.id,
        title: record.title.clone(),
        description: record.description.clone(),
        capture_date: record.capture_date.clone(),
        watermarked_url: url.clone(),
        url,
        hq_url: resolve_image_url(server_url, record.original_image.as_deref()),
        uploader: record.uploader_name().map(str::to_string),
        album: record.album.clone(),
    }
}

/// Format a whole listing, preserving order.
pub fn format_photos(records: &[PhotoRecord], server_url: &str) -> Vec<PhotoView> {
    records.iter().map(|r| format_photo(r, server_url)).collect()
}

/// Format the photos of an album.
///
/// Photos without their own uploader inherit the album's.
pub fn format_album_photos(
    album: &AlbumDetails,
    records: &[PhotoRecord],
    server_url: &str,
) -> Vec<PhotoView> {
    records
        .iter()
        .map(|record| {
            let mut view = format_photo(record, server_url);
            if view.uploader.is_none() {
                view.uploader = album.uploader.clone();
            }
            view
        })
        .collect()
}

/// Photos contributed by `username` (profile view).
pub fn photos_by_uploader(photos: &[PhotoView], username: &str) -> Vec<PhotoView> {
    photos
        .iter()
        .filter(|p| p.uploader.as_deref() == Some(username))
        .cloned()
        .collect()
}
