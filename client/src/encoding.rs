//! Inline image encoding.
//!
//! Selected files travel to the server (and to `<img src>` previews) as
//! `data:<mime>;base64,<payload>` URLs.

use base64::{prelude::BASE64_STANDARD, Engine};

/// MIME type used when the extension is unknown.
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Encode raw bytes as a data URL.
pub fn encode_data_url(bytes: &[u8], mime: &str) -> String {
    let mime = if mime.trim().is_empty() { FALLBACK_MIME } else { mime };
    format!("data:{};base64,{}", mime, BASE64_STANDARD.encode(bytes))
}

/// Guess an image MIME type from a filename extension.
pub fn mime_for_filename(filename: &str) -> &'static str {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        "svg" => "image/svg+xml",
        "heic" => "image/heic",
        "avif" => "image/avif",
        _ => FALLBACK_MIME,
    }
}

/// Default title for a freshly selected file: the name up to its first dot.
pub fn default_title(filename: &str) -> String {
    filename.split('.').next().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_data_url() {
        assert_eq!(encode_data_url(b"abc", "image/png"), "data:image/png;base64,YWJj");
        assert_eq!(
            encode_data_url(&[], ""),
            "data:application/octet-stream;base64,"
        );
    }

    #[test]
    fn test_mime_guess() {
        assert_eq!(mime_for_filename("DSC_0001.JPG"), "image/jpeg");
        assert_eq!(mime_for_filename("scan.final.tiff"), "image/tiff");
        assert_eq!(mime_for_filename("README"), FALLBACK_MIME);
    }

    #[test]
    fn test_default_title_stops_at_first_dot() {
        assert_eq!(default_title("dawn.over.bay.jpg"), "dawn");
        assert_eq!(default_title("harbor"), "harbor");
        assert_eq!(default_title(".hidden"), "");
    }
}
