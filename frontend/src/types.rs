//! Common types used across the frontend application.
//!
//! Page-level state that is not owned by the `middleframe` core, plus the
//! small pure helpers the views derive their text from.
//!
//! # Categories
//!
//! - **View Types** - Marketplace vs profile, viewer role
//! - **Derived Views** - Photos shown and empty messages
//! - **Labels** - Upload wizard text

use middleframe::{photos_by_uploader, PhotoView, Role, UploadMode, User};

// =============================================================================
// View Types
// =============================================================================

/// Which listing the page shell shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveView {
    /// Every published photo.
    #[default]
    Marketplace,
    /// The signed-in uploader's own photos.
    Profile,
}

/// Role the page is browsed as.
///
/// Drives whether the upload button is shown. Distinct from [`Role`]: a
/// visitor can arrive as `?role=photographer` before signing in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewerRole {
    Photographer,
    #[default]
    Buyer,
}

impl ViewerRole {
    /// Parse the `?role=` query value.
    pub fn from_query(value: &str) -> Option<Self> {
        match value {
            "photographer" => Some(ViewerRole::Photographer),
            "buyer" => Some(ViewerRole::Buyer),
            _ => None,
        }
    }

    /// Role implied by a stored account.
    pub fn for_user(user: &User) -> Self {
        match user.role {
            Role::Uploader => ViewerRole::Photographer,
            Role::Buyer => ViewerRole::Buyer,
        }
    }
}

/// Initial viewer role: a valid `?role=` query wins over the stored user.
pub fn initial_role(query: Option<&str>, user: Option<&User>) -> ViewerRole {
    query
        .and_then(ViewerRole::from_query)
        .or_else(|| user.map(ViewerRole::for_user))
        .unwrap_or_default()
}

// =============================================================================
// Derived Views
// =============================================================================

/// Photos listed for `view`.
///
/// The profile shows only photos whose uploader is the signed-in user, and
/// nothing when signed out.
pub fn visible_photos(photos: &[PhotoView], view: ActiveView, user: Option<&User>) -> Vec<PhotoView> {
    match view {
        ActiveView::Marketplace => photos.to_vec(),
        ActiveView::Profile => match user {
            Some(user) if !user.username.is_empty() => photos_by_uploader(photos, &user.username),
            _ => Vec::new(),
        },
    }
}

/// Placeholder text for an empty listing.
pub fn empty_message(view: ActiveView) -> &'static str {
    match view {
        ActiveView::Marketplace => "The marketplace archive is currently empty.",
        ActiveView::Profile => "You haven't contributed any frames to the archive yet.",
    }
}

// =============================================================================
// Labels
// =============================================================================

/// Upload wizard heading.
pub fn composer_heading(mode: Option<UploadMode>) -> &'static str {
    match mode {
        None => "Archive Entry",
        Some(UploadMode::Single) => "Single Frame",
        Some(UploadMode::Album) => "Create Collection",
    }
}

/// Label of the upload wizard's submit button.
pub fn submit_label(count: usize, submitting: bool) -> String {
    if submitting {
        "Processing Archive...".to_string()
    } else {
        format!("Commit {} Frame(s) to Archive", count)
    }
}

/// File name offered for a download.
pub fn download_filename(prefix: &str, title: Option<&str>) -> String {
    let title = title.filter(|t| !t.trim().is_empty()).unwrap_or("photo");
    format!("{}-{}.jpg", prefix, title)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, role: Role) -> User {
        User {
            id: 1,
            username: name.to_string(),
            email: format!("{}@example.com", name),
            role,
        }
    }

    fn photo(id: i64, uploader: &str) -> PhotoView {
        PhotoView {
            id,
            title: Some(format!("Photo {}", id)),
            description: None,
            capture_date: None,
            url: None,
            watermarked_url: None,
            hq_url: None,
            uploader: Some(uploader.to_string()),
            album: None,
        }
    }

    #[test]
    fn test_initial_role_prefers_query() {
        let ines = user("ines", Role::Uploader);
        assert_eq!(initial_role(Some("buyer"), Some(&ines)), ViewerRole::Buyer);
        assert_eq!(initial_role(None, Some(&ines)), ViewerRole::Photographer);
        assert_eq!(initial_role(Some("admin"), Some(&ines)), ViewerRole::Photographer);
        assert_eq!(initial_role(Some("photographer"), None), ViewerRole::Photographer);
        assert_eq!(initial_role(None, None), ViewerRole::Buyer);
    }

    #[test]
    fn test_profile_shows_own_photos_only() {
        let photos = vec![photo(1, "ines"), photo(2, "tom"), photo(3, "ines")];
        let ines = user("ines", Role::Uploader);

        let all = visible_photos(&photos, ActiveView::Marketplace, Some(&ines));
        assert_eq!(all.len(), 3);

        let mine = visible_photos(&photos, ActiveView::Profile, Some(&ines));
        assert_eq!(mine.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 3]);

        assert!(visible_photos(&photos, ActiveView::Profile, None).is_empty());
    }

    #[test]
    fn test_empty_messages() {
        assert_eq!(
            empty_message(ActiveView::Marketplace),
            "The marketplace archive is currently empty."
        );
        assert_eq!(
            empty_message(ActiveView::Profile),
            "You haven't contributed any frames to the archive yet."
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(submit_label(3, false), "Commit 3 Frame(s) to Archive");
        assert_eq!(submit_label(3, true), "Processing Archive...");
        assert_eq!(composer_heading(Some(UploadMode::Album)), "Create Collection");
        assert_eq!(download_filename("original", Some("Dawn")), "original-Dawn.jpg");
        assert_eq!(download_filename("watermarked", None), "watermarked-photo.jpg");
    }
}
