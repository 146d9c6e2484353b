//! Full view of one photo: downloads, album link and delete.

use leptos::*;
use middleframe::{AlbumRef, ApiStatus, PhotoView};

use crate::services::{alert, confirm, download_image, Gateway};
use crate::types::download_filename;

const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this frame from your archive?";
const DELETE_FAILED: &str = "Delete failed";

#[component]
pub fn PhotoDetailModal(
    photo: ReadSignal<Option<PhotoView>>,
    on_close: Callback<()>,
    on_album_click: Callback<AlbumRef>,
    #[prop(into)] show_delete: Signal<bool>,
    on_delete_success: Callback<()>,
) -> impl IntoView {
    let (is_deleting, set_is_deleting) = create_signal(false);

    let delete_photo = move |photo_id: i64| {
        if !confirm(DELETE_CONFIRMATION) {
            return;
        }
        set_is_deleting.set(true);
        spawn_local(async move {
            match Gateway::default().delete_photo(photo_id).await.and_then(ApiStatus::into_result) {
                Ok(()) => {
                    log::info!("Deleted photo {}", photo_id);
                    on_close.call(());
                    on_delete_success.call(());
                }
                Err(e) => {
                    log::error!("Delete of photo {} failed: {}", photo_id, e);
                    alert(&e.user_message(DELETE_FAILED));
                }
            }
            set_is_deleting.set(false);
        });
    };

    move || {
        photo.get().map(|photo| {
            let id = photo.id;
            let title = photo.title.clone().filter(|t| !t.is_empty());
            let lq = photo.watermarked_url.clone();
            let hq = photo.hq_url.clone();
            let lq_name = download_filename("watermarked", title.as_deref());
            let hq_name = download_filename("original", title.as_deref());

            view! {
                <div class="modal detail-modal">
                    <div class="modal-backdrop" on:click=move |_| on_close.call(())></div>
                    <div class="modal-panel">
                        <div class="detail-image">
                            <img src=photo.url.clone().unwrap_or_default() alt=title.clone().unwrap_or_default()/>
                        </div>
                        <div class="detail-body">
                            <div class="detail-top">
                                <span class="eyebrow">{format!("Image Asset {}", id)}</span>
                                <button class="close" on:click=move |_| on_close.call(())>"×"</button>
                            </div>
                            <h2>{title.clone().unwrap_or_else(|| "Untitled Archive".to_string())}</h2>
                            <p class="detail-uploader">{photo.uploader.clone().unwrap_or_default()}</p>
                            {photo.album.clone().map(|album| {
                                let label = album.title.clone();
                                view! {
                                    <div class="detail-album">
                                        <span class="eyebrow">"Part of Archive"</span>
                                        <button
                                            class="album-chip large"
                                            on:click=move |_| on_album_click.call(album.clone())
                                        >
                                            <span class="chip-dot"></span>
                                            <span class="chip-label">{label}</span>
                                        </button>
                                    </div>
                                }
                            })}
                            <div class="detail-facts">
                                <h4>"Description"</h4>
                                <p>
                                    {photo
                                        .description
                                        .clone()
                                        .filter(|d| !d.is_empty())
                                        .unwrap_or_else(|| {
                                            "No detailed technical description provided for this frame."
                                                .to_string()
                                        })}
                                </p>
                                <h4>"Captured"</h4>
                                <p>{photo.capture_date.clone().unwrap_or_else(|| "Unknown Date".to_string())}</p>
                            </div>
                            <div class="detail-actions">
                                <button
                                    class="download-lq"
                                    disabled=lq.is_none()
                                    on:click=move |_| {
                                        if let Some(url) = lq.clone() {
                                            let name = lq_name.clone();
                                            spawn_local(async move { download_image(&url, &name).await });
                                        }
                                    }
                                >
                                    "Download Watermarked (LQ)"
                                </button>
                                <button
                                    class="download-hq"
                                    disabled=hq.is_none()
                                    on:click=move |_| {
                                        if let Some(url) = hq.clone() {
                                            let name = hq_name.clone();
                                            spawn_local(async move { download_image(&url, &name).await });
                                        }
                                    }
                                >
                                    "Download HQ (Original)"
                                </button>
                                <Show when=move || show_delete.get() fallback=|| ()>
                                    <button
                                        class="delete"
                                        disabled=move || is_deleting.get()
                                        on:click=move |_| delete_photo(id)
                                    >
                                        "Delete Frame"
                                    </button>
                                </Show>
                            </div>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
