//! One photo tile.

use leptos::*;
use middleframe::{AlbumRef, PhotoView};

#[component]
pub fn PhotoCard(
    photo: PhotoView,
    on_view_details: Callback<PhotoView>,
    #[prop(optional)] on_album_click: Option<Callback<AlbumRef>>,
    #[prop(optional)] square: bool,
) -> impl IntoView {
    let title = photo.title.clone().filter(|t| !t.is_empty());
    let year = photo
        .capture_year()
        .map(|y| y.to_string())
        .unwrap_or_else(|| "—".to_string());
    let uploader = photo.uploader.clone().unwrap_or_else(|| "Unknown".to_string());
    let album = photo.album.clone();
    let url = photo.url.clone().unwrap_or_default();
    let alt = title.clone().unwrap_or_default();

    let details = photo.clone();
    let open_details = move |_| on_view_details.call(details.clone());

    view! {
        <div class="photo-card">
            <div class="photo-frame" class:square=square>
                <img src=url alt=alt/>
                <div class="photo-overlay" on:click=open_details>
                    <button class="details-button">"View Details"</button>
                </div>
            </div>
            <div class="photo-meta">
                <div class="photo-heading">
                    <h3>{title.unwrap_or_else(|| "Untitled".to_string())}</h3>
                    <span class="photo-year">{year}</span>
                </div>
                <p class="photo-uploader">"by " {uploader}</p>
                {album.map(|album| {
                    let label = album.title.clone();
                    view! {
                        <button
                            class="album-chip"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                if let Some(callback) = on_album_click {
                                    callback.call(album.clone());
                                }
                            }
                        >
                            <span class="chip-dot"></span>
                            <span class="chip-label">{label}</span>
                        </button>
                    }
                })}
            </div>
        </div>
    }
}
