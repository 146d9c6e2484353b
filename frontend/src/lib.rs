//! The Middle Frame - Frontend Rust/Leptos Application
//!
//! A WebAssembly front-end for browsing, uploading and downloading
//! photography on The Middle Frame marketplace.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App (Router)                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  /         MainContent                                       │
//! │            ├── Header (view switch, account, upload)         │
//! │            ├── Hero or ProfileSection                        │
//! │            ├── PhotoGrid                                     │
//! │            ├── Footer                                        │
//! │            └── PhotoDetailModal / AlbumModal / UploadModal   │
//! │  /login    LoginPage                                         │
//! │  /register RegisterPage                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Page-level types (ActiveView, ViewerRole) and derived views
//! - [`components`] - UI components (Header, PhotoGrid, UploadModal, etc.)
//! - [`services`] - Browser services (storage, API gateway, files, downloads)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use middleframe::{format_photos, AlbumRef, PhotoView, UploadComposer};
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Views
    ActiveView, ViewerRole,
    // Derived views
    empty_message, initial_role, visible_photos,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 The Middle Frame - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="The Middle Frame | Photography Marketplace"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/register" view=RegisterPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Page shell: session, listing, view switch and modals.
#[component]
fn MainContent() -> impl IntoView {
    // Session is read once at mount; logout navigates away.
    let session = browser_session().load();
    let (user, _) = create_signal(session.user);

    let query = use_query_map();
    let viewer_role = create_memo(move |_| {
        let requested = query.with(|q| q.get("role").cloned());
        user.with(|u| initial_role(requested.as_deref(), u.as_ref()))
    });

    let (active_view, set_active_view) = create_signal(ActiveView::Marketplace);
    let (photos, set_photos) = create_signal(Vec::<PhotoView>::new());
    let (is_loading, set_is_loading) = create_signal(true);
    let (selected_photo, set_selected_photo) = create_signal(None::<PhotoView>);
    let (viewing_album, set_viewing_album) = create_signal(None::<AlbumRef>);
    let composer = create_rw_signal(UploadComposer::new());

    let fetch_photos = move || {
        set_is_loading.set(true);
        spawn_local(async move {
            match Gateway::default().list_photos().await {
                Ok(records) => {
                    log::info!("Loaded {} photos", records.len());
                    set_photos.set(format_photos(&records, SERVER_URL));
                }
                Err(e) => log::error!("Failed to fetch photos: {}", e),
            }
            set_is_loading.set(false);
        });
    };
    fetch_photos();

    let displayed = Signal::derive(move || {
        photos.with(|all| user.with(|u| visible_photos(all, active_view.get(), u.as_ref())))
    });
    let my_photo_count = Signal::derive(move || {
        photos.with(|all| user.with(|u| visible_photos(all, ActiveView::Profile, u.as_ref()).len()))
    });

    let on_view_details = Callback::new(move |photo: PhotoView| set_selected_photo.set(Some(photo)));
    let on_album_click = Callback::new(move |album: AlbumRef| {
        set_viewing_album.set(Some(album));
        set_selected_photo.set(None);
    });
    let on_upload = Callback::new(move |_| {
        composer.update(|c| {
            if let Err(e) = c.open() {
                log::warn!("Upload wizard: {}", e);
            }
        })
    });
    let refresh = Callback::new(move |_| fetch_photos());

    view! {
        <Header
            user=user
            active_view=active_view
            set_active_view=set_active_view
            viewer_role=viewer_role
            on_upload=on_upload
        />

        <div class="container">
            {move || match active_view.get() {
                ActiveView::Marketplace => view! { <Hero/> }.into_view(),
                ActiveView::Profile => view! {
                    <ProfileSection user=user photo_count=my_photo_count/>
                }.into_view(),
            }}

            <PhotoGrid
                photos=displayed
                is_loading=is_loading
                empty_message=Signal::derive(move || empty_message(active_view.get()))
                on_view_details=on_view_details
                on_album_click=on_album_click
            />
        </div>

        <Footer/>

        <PhotoDetailModal
            photo=selected_photo
            on_close=Callback::new(move |_| set_selected_photo.set(None))
            on_album_click=on_album_click
            show_delete=Signal::derive(move || active_view.get() == ActiveView::Profile)
            on_delete_success=refresh
        />

        <UploadModal composer=composer on_upload_success=refresh/>

        <AlbumModal
            album=viewing_album
            on_close=Callback::new(move |_| set_viewing_album.set(None))
            on_view_details=on_view_details
        />
    }
}
