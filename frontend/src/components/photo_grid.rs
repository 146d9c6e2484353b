//! Photo listing with loading and empty states.

use leptos::*;
use middleframe::{AlbumRef, PhotoView};

use super::PhotoCard;

/// Placeholder tiles shown while loading.
const SKELETON_TILES: usize = 4;

#[component]
pub fn PhotoGrid(
    #[prop(into)] photos: Signal<Vec<PhotoView>>,
    #[prop(into)] is_loading: Signal<bool>,
    #[prop(into)] empty_message: Signal<&'static str>,
    on_view_details: Callback<PhotoView>,
    on_album_click: Callback<AlbumRef>,
) -> impl IntoView {
    move || {
        if is_loading.get() {
            return view! {
                <div class="photo-grid">
                    {(0..SKELETON_TILES)
                        .map(|_| view! { <div class="photo-skeleton"></div> })
                        .collect_view()}
                </div>
            }
            .into_view();
        }

        let photos = photos.get();
        if photos.is_empty() {
            return view! {
                <div class="empty-grid">
                    <p>{empty_message.get()}</p>
                </div>
            }
            .into_view();
        }

        view! {
            <div class="photo-grid">
                <For
                    each=move || photos.clone()
                    key=|photo| photo.id
                    children=move |photo| view! {
                        <PhotoCard
                            photo=photo
                            on_view_details=on_view_details
                            on_album_click=on_album_click
                        />
                    }
                />
            </div>
        }
        .into_view()
    }
}
