//! UI Components for The Middle Frame.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Navigation bar with view switch and account links
//! - [`Hero`] - Marketplace introduction
//! - [`ProfileSection`] - Contributor profile card
//! - [`Footer`] - Page footer
//!
//! # Gallery Components
//! - [`PhotoGrid`] - Listing with loading and empty states
//! - [`PhotoCard`] - One photo tile
//! - [`PhotoDetailModal`] - Full view with downloads and delete
//! - [`AlbumModal`] - Photos of one album
//!
//! # Feature Components
//! - [`UploadModal`] - Upload wizard driven by the batch composer
//! - [`LoginPage`] / [`RegisterPage`] - Authentication screens

mod header;
mod hero;
mod profile;
mod photo_grid;
mod photo_card;
mod photo_detail;
mod album_modal;
mod upload_modal;
mod footer;
mod login;
mod register;

pub use header::*;
pub use hero::*;
pub use profile::*;
pub use photo_grid::*;
pub use photo_card::*;
pub use photo_detail::*;
pub use album_modal::*;
pub use upload_modal::*;
pub use footer::*;
pub use login::*;
pub use register::*;
