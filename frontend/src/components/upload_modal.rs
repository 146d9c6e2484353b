//! Upload wizard.
//!
//! A view over an [`UploadComposer`] held by the page shell. Every user
//! action is a composer transition; the component keeps only the "files
//! are being read" flag of its own.

use leptos::*;
use middleframe::{
    AlbumField, AlbumTarget, ComposerError, MetadataField, SubmitError, UploadComposer, UploadMode,
    UploadTransport,
};
use web_sys::{Event, HtmlInputElement};

use crate::services::{alert, selected_files, Gateway};
use crate::types::{composer_heading, submit_label};

/// Current value of one metadata field of entry `index`.
fn entry_field(composer: &UploadComposer, index: usize, field: MetadataField) -> String {
    composer
        .batch()
        .and_then(|batch| batch.entries().get(index))
        .map(|entry| match field {
            MetadataField::Title => entry.title.clone(),
            MetadataField::Description => entry.description.clone(),
            MetadataField::CaptureDate => entry.capture_date.clone(),
        })
        .unwrap_or_default()
}

/// Current value of one field of the album to create.
fn album_field(composer: &UploadComposer, field: AlbumField) -> String {
    match composer.batch().and_then(|batch| batch.album()) {
        Some(AlbumTarget::New(album)) => match field {
            AlbumField::Title => album.title.clone(),
            AlbumField::Description => album.description.clone(),
        },
        _ => String::new(),
    }
}

/// `For` keys of the batch rows: position plus file name.
fn row_keys(composer: &UploadComposer) -> Vec<(usize, String)> {
    composer
        .batch()
        .map(|batch| {
            batch
                .entries()
                .iter()
                .enumerate()
                .map(|(index, entry)| (index, entry.filename.clone()))
                .collect()
        })
        .unwrap_or_default()
}

/// Preview data URL of entry `index`.
fn entry_thumbnail(composer: &UploadComposer, index: usize) -> String {
    composer
        .batch()
        .and_then(|batch| batch.entries().get(index))
        .map(|entry| entry.data_url.clone())
        .unwrap_or_default()
}

fn log_rejected(result: Result<(), ComposerError>) {
    if let Err(e) = result {
        log::warn!("Upload wizard: {}", e);
    }
}

#[component]
pub fn UploadModal(composer: RwSignal<UploadComposer>, on_upload_success: Callback<()>) -> impl IntoView {
    let (is_reading, set_is_reading) = create_signal(false);

    // Memos so that keystrokes do not rebuild the form.
    let mode = create_memo(move |_| composer.with(|c| c.mode()));
    let is_open = create_memo(move |_| composer.with(|c| c.is_open()));
    let submitting = create_memo(move |_| composer.with(|c| c.is_submitting()));
    let is_submitting = move || submitting.get();
    let entry_count = move || composer.with(|c| c.batch().map(|b| b.len()).unwrap_or(0));

    let close = move |_| {
        if !composer.with_untracked(|c| c.is_submitting()) {
            composer.update(|c| c.reset());
        }
    };

    let choose = move |mode: UploadMode| composer.update(|c| log_rejected(c.choose_mode(mode)));

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let files = selected_files(&input);
        input.set_value("");
        if files.is_empty() {
            return;
        }

        let generation = composer.with_untracked(|c| c.generation());
        let today = chrono::Local::now().date_naive();
        set_is_reading.set(true);

        spawn_local(async move {
            let outcomes = middleframe::read_selection(&files, today).await;
            match composer.try_update(|c| c.apply_selection(generation, outcomes)) {
                Some(Ok(report)) => {
                    if let Some(message) = report.failure_message() {
                        alert(&message);
                    }
                }
                Some(Err(ComposerError::StaleSelection)) => {
                    log::debug!("Ignoring files read for a closed upload wizard");
                }
                Some(Err(e)) => log::warn!("Upload wizard: {}", e),
                None => {}
            }
            set_is_reading.set(false);
        });
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let request = match composer.try_update(|c| c.begin_submit()) {
            Some(Ok(request)) => request,
            Some(Err(e)) => {
                alert(&SubmitError::from(e).user_message());
                return;
            }
            None => return,
        };

        spawn_local(async move {
            let result = Gateway::default().upload(&request).await;
            match composer.try_update(|c| c.finish_submit(result)) {
                Some(Ok(())) => on_upload_success.call(()),
                Some(Err(e)) => alert(&e.user_message()),
                None => {}
            }
        });
    };

    let entries = move || composer.with(row_keys);

    let entry_view = move |(index, filename): (usize, String)| {
        // A replaced file with the same name reuses its row.
        let thumbnail = move || composer.with(|c| entry_thumbnail(c, index));
        let is_expanded = move || composer.with(|c| c.batch().and_then(|b| b.expanded()) == Some(index));
        let display_title = move || {
            composer.with(|c| {
                c.batch()
                    .and_then(|b| b.entries().get(index))
                    .map(|e| e.display_title().to_string())
                    .unwrap_or_default()
            })
        };
        let edit = move |field: MetadataField| {
            move |ev: Event| {
                let value = event_target_value(&ev);
                composer.update(|c| log_rejected(c.update_metadata(index, field, value)));
            }
        };

        view! {
            <div class="batch-entry" class:expanded=is_expanded>
                <div class="entry-row" on:click=move |_| composer.update(|c| log_rejected(c.expand(index)))>
                    <img class="entry-thumb" src=thumbnail alt="Thumb"/>
                    <div class="entry-name">
                        <h4>{display_title}</h4>
                        <p>{filename}</p>
                    </div>
                    <button
                        type="button"
                        class="entry-remove"
                        disabled=is_submitting
                        on:click=move |ev| {
                            ev.stop_propagation();
                            composer.update(|c| {
                                if let Err(e) = c.remove_entry(index) {
                                    log::warn!("Upload wizard: {}", e);
                                }
                            });
                        }
                    >
                        "Remove"
                    </button>
                </div>
                <Show when=is_expanded fallback=|| ()>
                    <div class="entry-fields">
                        <label>"Asset Title"</label>
                        <input
                            required
                            type="text"
                            placeholder="Identifier..."
                            disabled=is_submitting
                            prop:value=move || composer.with(|c| entry_field(c, index, MetadataField::Title))
                            on:input=edit(MetadataField::Title)
                        />
                        <label>"Capture Date"</label>
                        <input
                            required
                            type="date"
                            disabled=is_submitting
                            prop:value=move || composer.with(|c| entry_field(c, index, MetadataField::CaptureDate))
                            on:input=edit(MetadataField::CaptureDate)
                        />
                        <label>"Technical Notes"</label>
                        <textarea
                            placeholder="Lighting, lens, location..."
                            disabled=is_submitting
                            prop:value=move || composer.with(|c| entry_field(c, index, MetadataField::Description))
                            on:input=edit(MetadataField::Description)
                        ></textarea>
                    </div>
                </Show>
            </div>
        }
    };

    let album_input = move |field: AlbumField| {
        move |ev: Event| {
            let value = event_target_value(&ev);
            composer.update(|c| log_rejected(c.set_album_field(field, value)));
        }
    };

    let composing_view = move || {
        view! {
            <form class="upload-form" on:submit=on_submit>
                <Show when=move || mode.get() == Some(UploadMode::Album) fallback=|| ()>
                    <div class="album-fields">
                        <label>"Archive Context"</label>
                        <input
                            required
                            type="text"
                            placeholder="Collection Title..."
                            disabled=is_submitting
                            prop:value=move || composer.with(|c| album_field(c, AlbumField::Title))
                            on:input=album_input(AlbumField::Title)
                        />
                        <textarea
                            placeholder="Collection description..."
                            disabled=is_submitting
                            prop:value=move || composer.with(|c| album_field(c, AlbumField::Description))
                            on:input=album_input(AlbumField::Description)
                        ></textarea>
                    </div>
                </Show>

                <label class="file-picker">
                    <span>
                        {move || if mode.get() == Some(UploadMode::Single) {
                            "Pick Masterpiece"
                        } else {
                            "Add Frames to Batch"
                        }}
                    </span>
                    <input
                        type="file"
                        accept="image/*"
                        multiple=move || mode.get() == Some(UploadMode::Album)
                        disabled=move || is_submitting() || is_reading.get()
                        on:change=on_file_change
                    />
                </label>

                <div class="batch-list">
                    <For each=entries key=|entry| entry.clone() children=entry_view/>
                </div>

                <button
                    type="submit"
                    class="submit"
                    disabled=move || is_reading.get() || is_submitting() || entry_count() == 0
                >
                    {move || submit_label(entry_count(), is_reading.get() || is_submitting())}
                </button>
                <button
                    type="button"
                    class="back"
                    disabled=is_submitting
                    on:click=move |_| composer.update(|c| log_rejected(c.back_to_mode_selection()))
                >
                    "Back to Type Selection"
                </button>
            </form>
        }
    };

    let mode_selection_view = move || {
        view! {
            <div class="mode-selection">
                <button class="mode-option" on:click=move |_| choose(UploadMode::Single)>
                    <h3>"Individual Frame"</h3>
                    <p>"Upload a single masterpiece with specific metadata."</p>
                </button>
                <button class="mode-option" on:click=move |_| choose(UploadMode::Album)>
                    <h3>"Curated Collection"</h3>
                    <p>"Bulk upload multiple frames, each with its own story."</p>
                </button>
            </div>
        }
    };

    view! {
        <Show when=move || is_open.get() fallback=|| ()>
            <div class="modal upload-modal">
                <div class="modal-backdrop" on:click=close></div>
                <div class="modal-panel">
                    <div class="upload-header">
                        <div>
                            <h2>{move || composer_heading(mode.get())}</h2>
                            <p>
                                {move || if mode.get().is_some() {
                                    "Each frame requires unique technical cataloging."
                                } else {
                                    "Choose how you want to contribute to the archive."
                                }}
                            </p>
                        </div>
                        <button class="close" disabled=is_submitting on:click=close>"×"</button>
                    </div>
                    {move || if mode.get().is_some() {
                        composing_view().into_view()
                    } else {
                        mode_selection_view().into_view()
                    }}
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use middleframe::{PendingUpload, ReadOutcome};

    fn picked(name: &str, data_url: &str) -> Vec<ReadOutcome> {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        vec![Ok(PendingUpload::new(name, data_url, today))]
    }

    #[test]
    fn test_same_name_replacement_keeps_row_but_changes_preview() {
        let mut composer = UploadComposer::new();
        composer.open().unwrap();
        composer.choose_mode(UploadMode::Single).unwrap();

        let generation = composer.generation();
        composer
            .apply_selection(generation, picked("IMG_0001.jpg", "data:image/jpeg;base64,AAAA"))
            .unwrap();
        let keys = row_keys(&composer);

        composer
            .apply_selection(generation, picked("IMG_0001.jpg", "data:image/jpeg;base64,BBBB"))
            .unwrap();

        assert_eq!(row_keys(&composer), keys);
        assert_eq!(entry_thumbnail(&composer, 0), "data:image/jpeg;base64,BBBB");
    }

    #[test]
    fn test_album_fields_follow_the_batch() {
        let mut composer = UploadComposer::new();
        composer.open().unwrap();
        composer.choose_mode(UploadMode::Album).unwrap();
        composer.set_album_field(AlbumField::Title, "Coast").unwrap();

        assert_eq!(album_field(&composer, AlbumField::Title), "Coast");
        assert_eq!(entry_thumbnail(&composer, 0), "");
        assert!(row_keys(&composer).is_empty());
    }
}
