//! Photos of one album.

use leptos::*;
use middleframe::{format_album_photos, AlbumDetails, AlbumRef, PhotoView};

use super::PhotoCard;
use crate::services::Gateway;

/// Album header and formatted photos, or the text to show instead.
type AlbumContent = Result<(Option<AlbumDetails>, Vec<PhotoView>), String>;

async fn load_album(album_id: i64) -> AlbumContent {
    let gateway = Gateway::default();
    let response = gateway
        .album_details(album_id)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch album {}: {}", album_id, e);
            e.user_message("Failed to fetch collection details")
        })?;

    let photos = match &response.album {
        Some(album) => format_album_photos(album, &response.photos, gateway.config().server_url()),
        None => Vec::new(),
    };
    Ok((response.album, photos))
}

#[component]
pub fn AlbumModal(
    album: ReadSignal<Option<AlbumRef>>,
    on_close: Callback<()>,
    on_view_details: Callback<PhotoView>,
) -> impl IntoView {
    let content = create_local_resource(
        move || album.get().map(|a| a.id),
        |album_id| async move {
            match album_id {
                Some(id) => Some(load_album(id).await),
                None => None,
            }
        },
    );

    move || {
        album.get().map(|current| {
            let uploader = move || {
                content
                    .get()
                    .flatten()
                    .and_then(|c| c.ok())
                    .and_then(|(details, _)| details)
                    .and_then(|d| d.uploader)
                    .unwrap_or_else(|| "Senior Contributor".to_string())
            };
            let count = move || {
                content
                    .get()
                    .flatten()
                    .and_then(|c| c.ok())
                    .map(|(_, photos)| photos.len())
                    .unwrap_or(0)
            };

            view! {
                <div class="modal album-modal">
                    <div class="modal-backdrop" on:click=move |_| on_close.call(())></div>
                    <div class="modal-panel">
                        <div class="album-header">
                            <div>
                                <span class="eyebrow">"Archive Collection"</span>
                                <h2>{current.title.clone()}</h2>
                                <p class="album-meta">
                                    {move || format!("{} Professional Assets", count())}
                                    " • by "
                                    {uploader}
                                </p>
                            </div>
                            <button class="close" on:click=move |_| on_close.call(())>"×"</button>
                        </div>
                        <div class="album-body">
                            {move || match content.get().flatten() {
                                None => view! {
                                    <div class="album-loading">
                                        <div class="spinner"></div>
                                        <p>"Scanning Archive Database..."</p>
                                    </div>
                                }.into_view(),
                                Some(Err(message)) => view! {
                                    <div class="album-empty">
                                        <p>{message}</p>
                                    </div>
                                }.into_view(),
                                Some(Ok((_, photos))) if photos.is_empty() => view! {
                                    <div class="album-empty">
                                        <h3>"Empty Archive"</h3>
                                        <p>"This collection currently contains no high-resolution assets."</p>
                                    </div>
                                }.into_view(),
                                Some(Ok((_, photos))) => view! {
                                    <div class="photo-grid">
                                        {photos
                                            .into_iter()
                                            .map(|photo| view! {
                                                <PhotoCard photo=photo on_view_details=on_view_details square=true/>
                                            })
                                            .collect_view()}
                                    </div>
                                }.into_view(),
                            }}
                        </div>
                    </div>
                </div>
            }
        })
    }
}
