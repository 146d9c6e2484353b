//! Browser services.
//!
//! Everything that touches browser APIs outside of rendering:
//!
//! # Services
//!
//! - [`storage`] - `localStorage` backing for the session
//! - [`api`] - `gloo-net` gateway to the marketplace API
//! - [`files`] - Reading picked files for the upload composer
//! - [`download`] - Saving images through an object URL
//! - [`notify`] - Blocking `alert` / `confirm` dialogs

pub mod storage;
pub mod api;
pub mod files;
pub mod download;
pub mod notify;

pub use storage::*;
pub use api::*;
pub use files::*;
pub use download::*;
pub use notify::*;
