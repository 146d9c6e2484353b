//! # Middle Frame - photography marketplace client
//!
//! Core of The Middle Frame front-ends: the upload batch composer, the
//! photo view-model formatter, the API gateway and the persisted session.
//! The WebAssembly front-end and the `middleframe` command-line tool are
//! both thin shells over this crate.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Selected   │────▶│  Composer   │────▶│   Gateway   │────▶│  REST API   │
//! │   files     │     │  (batch)    │     │ (+ bearer)  │     │  /api/...   │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//!                                                ▲                   │
//!                                         ┌─────────────┐     ┌─────────────┐
//!                                         │   Session   │     │  Formatter  │
//!                                         │ token/user  │     │ (PhotoView) │
//!                                         └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use middleframe::{ApiClient, ClientConfig, FileStore, SessionContext, format_photos};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ClientConfig::from_env();
//!     let client = ApiClient::new(config.clone(), SessionContext::new(FileStore::from_env()));
//!     let photos = client.list_photos().await.unwrap();
//!     println!("{} photos", format_photos(&photos, config.server_url()).len());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types per concern
//! - [`config`] - Server location
//! - [`models`] - Domain records (User, PhotoRecord, AlbumDetails)
//! - [`formatter`] - Raw records to display-ready views
//! - [`encoding`] - Data URLs and filename defaults
//! - [`api`] - Endpoints, payloads and the HTTP gateway
//! - [`session`] - Persisted token and user
//! - [`composer`] - Upload wizard state machine

// Core modules
pub mod config;
pub mod error;
pub mod models;

// Presentation
pub mod encoding;
pub mod formatter;

// Gateway
pub mod api;
pub mod session;

// Upload
pub mod composer;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    ApiError, ApiResult, AuthError, AuthResult, ComposerError, ComposerResult, SessionError,
    SessionResult, SubmitError,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use config::ClientConfig;
pub use models::{AlbumDetails, AlbumRef, PhotoRecord, Role, User, UserRef};

// =============================================================================
// Re-exports - Formatter
// =============================================================================

pub use formatter::{
    format_album_photos, format_photo, format_photos, photos_by_uploader, resolve_image_url,
    PhotoView,
};

// =============================================================================
// Re-exports - Gateway
// =============================================================================

pub use api::{
    interpret_response, AlbumResponse, ApiStatus, AuthResponse, LoginRequest, NewAlbum,
    RegisterRequest, UploadPhoto, UploadRequest, UploadTransport,
};

#[cfg(feature = "cli")]
pub use api::ApiClient;

// =============================================================================
// Re-exports - Session
// =============================================================================

pub use session::{complete_login, FileStore, KeyValueStore, MemoryStore, Session, SessionContext};

// =============================================================================
// Re-exports - Composer
// =============================================================================

pub use composer::{
    read_selection, AlbumField, AlbumTarget, ComposerState, FailedRead, MetadataField,
    PendingUpload, ReadOutcome, SelectedFile, SelectionReport, UploadBatch, UploadComposer,
    UploadMode,
};
