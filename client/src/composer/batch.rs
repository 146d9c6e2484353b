//! Batch data: pending uploads and the batch that owns them.

use chrono::NaiveDate;

use crate::api::{NewAlbum, UploadPhoto, UploadRequest};
use crate::encoding::default_title;
use crate::error::{ComposerError, ComposerResult};

/// How the selected photos are published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadMode {
    /// One photo, no album.
    Single,
    /// Several photos grouped in an album.
    Album,
}

impl UploadMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadMode::Single => "single",
            UploadMode::Album => "album",
        }
    }
}

/// Editable metadata of a pending upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataField {
    Title,
    Description,
    CaptureDate,
}

/// Editable fields of a new album.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlbumField {
    Title,
    Description,
}

/// Album the batch is published into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlbumTarget {
    /// Create a new album with these fields.
    New(NewAlbum),
    /// Add to an album that already exists.
    Existing(i64),
}

/// A selected file waiting to be uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUpload {
    /// `data:` URL of the file content; also used as preview source.
    pub data_url: String,
    pub filename: String,
    pub title: String,
    pub description: String,
    /// `YYYY-MM-DD`.
    pub capture_date: String,
}

impl PendingUpload {
    /// Fresh entry with default metadata: title from the filename, empty
    /// description, capture date `today`.
    pub fn new(filename: impl Into<String>, data_url: impl Into<String>, today: NaiveDate) -> Self {
        let filename = filename.into();
        Self {
            title: default_title(&filename),
            data_url: data_url.into(),
            description: String::new(),
            capture_date: today.format("%Y-%m-%d").to_string(),
            filename,
        }
    }

    /// Copy of this entry with one field replaced.
    pub fn with_field(&self, field: MetadataField, value: impl Into<String>) -> Self {
        let mut updated = self.clone();
        let value = value.into();
        match field {
            MetadataField::Title => updated.title = value,
            MetadataField::Description => updated.description = value,
            MetadataField::CaptureDate => updated.capture_date = value,
        }
        updated
    }

    /// Title shown in the batch list.
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            "Untitled Frame"
        } else {
            &self.title
        }
    }

    fn to_payload(&self) -> UploadPhoto {
        UploadPhoto {
            photo: self.data_url.clone(),
            filename: self.filename.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            capture_date: self.capture_date.clone(),
        }
    }
}

/// Photos being prepared for one submission.
///
/// Invariants kept by every mutation:
/// - in [`UploadMode::Single`] the batch holds at most one entry
/// - the expanded index, when set, addresses an existing entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadBatch {
    mode: UploadMode,
    entries: Vec<PendingUpload>,
    expanded: Option<usize>,
    album: Option<AlbumTarget>,
}

impl UploadBatch {
    /// Empty batch. Album batches start out creating a new album.
    pub fn new(mode: UploadMode) -> Self {
        Self {
            mode,
            entries: Vec::new(),
            expanded: None,
            album: match mode {
                UploadMode::Single => None,
                UploadMode::Album => Some(AlbumTarget::New(NewAlbum::default())),
            },
        }
    }

    pub fn mode(&self) -> UploadMode {
        self.mode
    }

    pub fn entries(&self) -> &[PendingUpload] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry currently open for editing.
    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn album(&self) -> Option<&AlbumTarget> {
        self.album.as_ref()
    }

    /// Single mode: replace the batch with `entry`.
    pub(super) fn replace_with(&mut self, entry: PendingUpload) {
        self.entries = vec![entry];
        self.expanded = Some(0);
    }

    /// Album mode: append `new_entries`, expanding the last one added.
    pub(super) fn append(&mut self, new_entries: Vec<PendingUpload>) {
        if new_entries.is_empty() {
            return;
        }
        let mut entries = self.entries.clone();
        entries.extend(new_entries);
        self.expanded = Some(entries.len() - 1);
        self.entries = entries;
    }

    pub(super) fn update_entry(
        &mut self,
        index: usize,
        field: MetadataField,
        value: String,
    ) -> ComposerResult<()> {
        self.check_index(index)?;
        let entries = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                if i == index {
                    entry.with_field(field, value.clone())
                } else {
                    entry.clone()
                }
            })
            .collect();
        self.entries = entries;
        Ok(())
    }

    pub(super) fn remove(&mut self, index: usize) -> ComposerResult<PendingUpload> {
        self.check_index(index)?;
        let mut entries = self.entries.clone();
        let removed = entries.remove(index);
        let len = entries.len();

        self.expanded = match self.expanded {
            _ if len == 0 => None,
            Some(current) if current == index => Some(index.min(len - 1)),
            Some(current) if current > index => Some(current - 1),
            other => other,
        };
        self.entries = entries;
        Ok(removed)
    }

    pub(super) fn expand(&mut self, index: usize) -> ComposerResult<()> {
        self.check_index(index)?;
        self.expanded = Some(index);
        Ok(())
    }

    pub(super) fn set_album_field(&mut self, field: AlbumField, value: String) -> ComposerResult<()> {
        if self.mode != UploadMode::Album {
            return Err(ComposerError::NotAlbumMode);
        }
        let mut album = match &self.album {
            Some(AlbumTarget::New(album)) => album.clone(),
            _ => NewAlbum::default(),
        };
        match field {
            AlbumField::Title => album.title = value,
            AlbumField::Description => album.description = value,
        }
        self.album = Some(AlbumTarget::New(album));
        Ok(())
    }

    pub(super) fn use_existing_album(&mut self, album_id: i64) -> ComposerResult<()> {
        if self.mode != UploadMode::Album {
            return Err(ComposerError::NotAlbumMode);
        }
        self.album = Some(AlbumTarget::Existing(album_id));
        Ok(())
    }

    /// Client-side checks run before anything is sent.
    pub fn validate(&self) -> ComposerResult<()> {
        if self.entries.is_empty() {
            return Err(ComposerError::EmptyBatch);
        }
        if let Some(index) = self.entries.iter().position(|e| e.title.trim().is_empty()) {
            return Err(ComposerError::MissingTitle { index });
        }
        Ok(())
    }

    /// Build the `photos/upload` payload.
    pub fn to_request(&self) -> UploadRequest {
        let (album_id, album) = match (&self.mode, &self.album) {
            (UploadMode::Album, Some(AlbumTarget::Existing(id))) => (Some(*id), None),
            (UploadMode::Album, Some(AlbumTarget::New(album))) => (None, Some(album.clone())),
            _ => (None, None),
        };

        UploadRequest {
            album_id,
            album,
            photos: self.entries.iter().map(PendingUpload::to_payload).collect(),
        }
    }

    fn check_index(&self, index: usize) -> ComposerResult<()> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(ComposerError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })
        }
    }
}
