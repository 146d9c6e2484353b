//! Upload batch composer.
//!
//! The upload wizard as an explicit state machine:
//!
//! ```text
//!            open()            choose_mode()                begin_submit()
//! ┌────────┐ ─────▶ ┌───────────────┐ ─────▶ ┌────────────┐ ─────▶ ┌────────────┐
//! │ Closed │        │ ModeSelection │        │ Composing  │        │ Submitting │
//! └────────┘ ◀───── └───────────────┘ ◀───── └────────────┘ ◀───── └────────────┘
//!     ▲   reset()          back_to_mode_selection()   ▲  finish_submit(Err) │
//!     └───────────────────────────────────────────────┴─────────────────────┘
//!                           finish_submit(Ok) / reset()
//! ```
//!
//! `Composing` loops over file selections and metadata edits. The batch
//! lives inside the state, so an expanded index or a batch can never exist
//! while the composer is closed.

mod batch;
mod reader;

pub use batch::{AlbumField, AlbumTarget, MetadataField, PendingUpload, UploadBatch, UploadMode};
pub use reader::{read_file, read_selection, FailedRead, ReadOutcome, SelectedFile};

use crate::api::{ApiStatus, UploadRequest, UploadTransport};
use crate::error::{ApiResult, ComposerError, ComposerResult, SubmitError};

/// Wizard state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ComposerState {
    #[default]
    Closed,
    ModeSelection,
    Composing(UploadBatch),
    Submitting(UploadBatch),
}

impl ComposerState {
    /// Short name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            ComposerState::Closed => "closed",
            ComposerState::ModeSelection => "choosing a mode",
            ComposerState::Composing(_) => "composing",
            ComposerState::Submitting(_) => "submitting",
        }
    }
}

/// Outcome of applying a file selection to the batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionReport {
    /// Entries that made it into the batch.
    pub added: usize,
    /// Files that could not be read; they are not in the batch.
    pub failed: Vec<FailedRead>,
}

impl SelectionReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    /// Notification text listing unreadable files.
    pub fn failure_message(&self) -> Option<String> {
        if self.failed.is_empty() {
            return None;
        }
        let names: Vec<&str> = self.failed.iter().map(|f| f.filename.as_str()).collect();
        Some(format!("Could not read {}: {}", plural_files(names.len()), names.join(", ")))
    }
}

fn plural_files(count: usize) -> String {
    if count == 1 {
        "1 file".to_string()
    } else {
        format!("{} files", count)
    }
}

/// Upload wizard state plus the generation of the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadComposer {
    state: ComposerState,
    generation: u64,
}

impl UploadComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ComposerState {
        &self.state
    }

    /// Token identifying the current wizard session.
    ///
    /// Capture it before starting a file read and hand it back to
    /// [`apply_selection`](Self::apply_selection).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, ComposerState::Closed)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, ComposerState::Submitting(_))
    }

    /// Batch being composed or submitted.
    pub fn batch(&self) -> Option<&UploadBatch> {
        match &self.state {
            ComposerState::Composing(batch) | ComposerState::Submitting(batch) => Some(batch),
            _ => None,
        }
    }

    pub fn mode(&self) -> Option<UploadMode> {
        self.batch().map(UploadBatch::mode)
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Show the wizard.
    pub fn open(&mut self) -> ComposerResult<()> {
        match self.state {
            ComposerState::Closed => {
                self.state = ComposerState::ModeSelection;
                self.next_generation();
                Ok(())
            }
            ComposerState::ModeSelection => Ok(()),
            _ => Err(self.invalid("open the uploader")),
        }
    }

    /// Pick single or album mode.
    pub fn choose_mode(&mut self, mode: UploadMode) -> ComposerResult<()> {
        match self.state {
            ComposerState::ModeSelection => {
                log::debug!("Upload mode: {}", mode.as_str());
                self.state = ComposerState::Composing(UploadBatch::new(mode));
                Ok(())
            }
            _ => Err(self.invalid("choose a mode")),
        }
    }

    /// Return to mode selection, discarding the batch.
    ///
    /// Reads started for the discarded batch are rejected when they complete.
    pub fn back_to_mode_selection(&mut self) -> ComposerResult<()> {
        match self.state {
            ComposerState::Composing(_) => {
                self.state = ComposerState::ModeSelection;
                self.next_generation();
                Ok(())
            }
            _ => Err(self.invalid("change the mode")),
        }
    }

    /// Clear everything back to the initial closed state.
    ///
    /// Called whenever the wizard is hidden. In-flight reads started before
    /// the reset are rejected when they complete.
    pub fn reset(&mut self) {
        self.state = ComposerState::Closed;
        self.next_generation();
    }

    fn next_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    // =========================================================================
    // Batch editing
    // =========================================================================

    /// Merge the outcome of a file selection into the batch.
    ///
    /// - single mode: the batch is replaced by the first file read
    /// - album mode: read files are appended and the last one is expanded
    ///
    /// Unreadable files are left out of the batch and listed in the report.
    /// When nothing could be read the batch is left untouched.
    pub fn apply_selection(
        &mut self,
        generation: u64,
        outcomes: Vec<ReadOutcome>,
    ) -> ComposerResult<SelectionReport> {
        if generation != self.generation {
            log::debug!("Dropping selection from upload session {}", generation);
            return Err(ComposerError::StaleSelection);
        }

        let batch = self.composing_batch("add photos")?;

        let mut report = SelectionReport::default();
        let mut read = Vec::new();
        for outcome in outcomes {
            match outcome {
                Ok(entry) => read.push(entry),
                Err(failed) => report.failed.push(failed),
            }
        }

        match batch.mode() {
            UploadMode::Single => {
                if read.len() > 1 {
                    log::debug!("Single mode keeps the first of {} files", read.len());
                }
                if let Some(entry) = read.into_iter().next() {
                    batch.replace_with(entry);
                    report.added = 1;
                }
            }
            UploadMode::Album => {
                report.added = read.len();
                batch.append(read);
            }
        }

        log::info!(
            "Batch now holds {} photo(s); {} added, {} unreadable",
            batch.len(),
            report.added,
            report.failed.len()
        );
        Ok(report)
    }

    /// Replace one metadata field of one entry.
    pub fn update_metadata(
        &mut self,
        index: usize,
        field: MetadataField,
        value: impl Into<String>,
    ) -> ComposerResult<()> {
        self.composing_batch("edit metadata")?
            .update_entry(index, field, value.into())
    }

    /// Remove one entry; later entries shift down.
    pub fn remove_entry(&mut self, index: usize) -> ComposerResult<PendingUpload> {
        self.composing_batch("remove a photo")?.remove(index)
    }

    /// Open one entry for editing.
    pub fn expand(&mut self, index: usize) -> ComposerResult<()> {
        self.composing_batch("select a photo")?.expand(index)
    }

    /// Edit the fields of the album to create.
    pub fn set_album_field(&mut self, field: AlbumField, value: impl Into<String>) -> ComposerResult<()> {
        self.composing_batch("edit the album")?
            .set_album_field(field, value.into())
    }

    /// Publish into an existing album instead of creating one.
    pub fn use_existing_album(&mut self, album_id: i64) -> ComposerResult<()> {
        self.composing_batch("choose an album")?
            .use_existing_album(album_id)
    }

    // =========================================================================
    // Submission
    // =========================================================================

    /// Validate the batch and move to `Submitting`.
    ///
    /// On validation failure the composer stays in `Composing` and no
    /// request must be sent.
    pub fn begin_submit(&mut self) -> ComposerResult<UploadRequest> {
        let batch = match &self.state {
            ComposerState::Composing(batch) => batch,
            _ => return Err(self.invalid("submit")),
        };
        batch.validate()?;

        let request = batch.to_request();
        self.state = match std::mem::take(&mut self.state) {
            ComposerState::Composing(batch) => ComposerState::Submitting(batch),
            other => other,
        };
        Ok(request)
    }

    /// Apply the server's answer to a submission started with
    /// [`begin_submit`](Self::begin_submit).
    ///
    /// Success closes the wizard; failure returns the unchanged batch to
    /// `Composing`.
    pub fn finish_submit(&mut self, result: ApiResult<ApiStatus>) -> Result<(), SubmitError> {
        if !self.is_submitting() {
            return Err(self.invalid("finish a submission").into());
        }

        match result.and_then(ApiStatus::into_result) {
            Ok(()) => {
                log::info!("Upload accepted");
                self.reset();
                Ok(())
            }
            Err(err) => {
                log::warn!("Upload failed: {}", err);
                self.state = match std::mem::take(&mut self.state) {
                    ComposerState::Submitting(batch) => ComposerState::Composing(batch),
                    other => other,
                };
                Err(err.into())
            }
        }
    }

    /// Validate, send the batch through `transport` and settle the result.
    ///
    /// `on_complete` runs exactly once, after a successful upload.
    pub async fn submit<T, F>(&mut self, transport: &T, on_complete: F) -> Result<(), SubmitError>
    where
        T: UploadTransport,
        F: FnOnce(),
    {
        let request = self.begin_submit()?;
        log::info!("Submitting {} photo(s)", request.photos.len());

        let result = transport.upload(&request).await;
        self.finish_submit(result)?;
        on_complete();
        Ok(())
    }

    fn composing_batch(&mut self, action: &'static str) -> ComposerResult<&mut UploadBatch> {
        let state = self.state.name();
        match &mut self.state {
            ComposerState::Composing(batch) => Ok(batch),
            _ => Err(ComposerError::InvalidTransition { action, state }),
        }
    }

    fn invalid(&self, action: &'static str) -> ComposerError {
        ComposerError::InvalidTransition {
            action,
            state: self.state.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::NewAlbum;
    use crate::error::ApiError;
    use chrono::NaiveDate;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    struct Fixture {
        name: &'static str,
        content: Result<&'static [u8], &'static str>,
    }

    impl Fixture {
        fn ok(name: &'static str) -> Self {
            Self { name, content: Ok(&b"jpeg-bytes"[..]) }
        }

        fn broken(name: &'static str) -> Self {
            Self { name, content: Err("permission denied") }
        }
    }

    impl SelectedFile for Fixture {
        fn name(&self) -> String {
            self.name.to_string()
        }

        async fn read_bytes(&self) -> Result<Vec<u8>, String> {
            self.content.map(<[u8]>::to_vec).map_err(str::to_string)
        }
    }

    /// Records every request and answers with a canned result.
    struct RecordingTransport {
        answer: ApiResult<ApiStatus>,
        sent: RefCell<Vec<UploadRequest>>,
    }

    impl RecordingTransport {
        fn answering(answer: ApiResult<ApiStatus>) -> Self {
            Self { answer, sent: RefCell::new(Vec::new()) }
        }
    }

    impl UploadTransport for RecordingTransport {
        async fn upload(&self, request: &UploadRequest) -> ApiResult<ApiStatus> {
            self.sent.borrow_mut().push(request.clone());
            self.answer.clone()
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn composing(mode: UploadMode) -> UploadComposer {
        let mut composer = UploadComposer::new();
        composer.open().unwrap();
        composer.choose_mode(mode).unwrap();
        composer
    }

    fn select(composer: &mut UploadComposer, files: &[Fixture]) -> SelectionReport {
        let outcomes = block_on(read_selection(files, today()));
        composer.apply_selection(composer.generation(), outcomes).unwrap()
    }

    fn titles(composer: &UploadComposer) -> Vec<String> {
        composer
            .batch()
            .unwrap()
            .entries()
            .iter()
            .map(|e| e.title.clone())
            .collect()
    }

    #[test]
    fn test_read_encodes_defaults() {
        let entry = block_on(read_file(&Fixture::ok("dawn.bay.JPG"), today())).unwrap();
        assert_eq!(entry.filename, "dawn.bay.JPG");
        assert_eq!(entry.title, "dawn");
        assert_eq!(entry.description, "");
        assert_eq!(entry.capture_date, "2024-06-15");
        assert!(entry.data_url.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn test_single_mode_replaces_batch() {
        let mut composer = composing(UploadMode::Single);

        select(&mut composer, &[Fixture::ok("first.jpg")]);
        select(&mut composer, &[Fixture::ok("second.jpg")]);

        let batch = composer.batch().unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch.entries()[0].filename, "second.jpg");
        assert_eq!(batch.expanded(), Some(0));
    }

    #[test]
    fn test_album_mode_appends_and_expands_last() {
        let mut composer = composing(UploadMode::Album);

        select(&mut composer, &[Fixture::ok("a.jpg"), Fixture::ok("b.jpg")]);
        let before = composer.batch().unwrap().entries().to_vec();

        let report = select(&mut composer, &[Fixture::ok("c.jpg"), Fixture::ok("d.jpg")]);
        let batch = composer.batch().unwrap();

        assert_eq!(report.added, 2);
        assert_eq!(batch.len(), before.len() + 2);
        assert_eq!(&batch.entries()[..2], &before[..]);
        assert_eq!(batch.expanded(), Some(3));
    }

    #[test]
    fn test_failed_reads_are_reported_not_dropped_silently() {
        let mut composer = composing(UploadMode::Album);

        let report = select(
            &mut composer,
            &[Fixture::ok("a.jpg"), Fixture::broken("b.jpg"), Fixture::ok("c.jpg")],
        );

        assert_eq!(report.added, 2);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].filename, "b.jpg");
        assert_eq!(report.failure_message().unwrap(), "Could not read 1 file: b.jpg");
        assert_eq!(titles(&composer), vec!["a", "c"]);
    }

    #[test]
    fn test_single_mode_failed_read_keeps_batch() {
        let mut composer = composing(UploadMode::Single);
        select(&mut composer, &[Fixture::ok("keep.jpg")]);

        let report = select(&mut composer, &[Fixture::broken("lost.jpg")]);
        assert_eq!(report.added, 0);
        assert_eq!(titles(&composer), vec!["keep"]);
    }

    #[test]
    fn test_stale_selection_is_rejected() {
        let mut composer = composing(UploadMode::Album);
        let generation = composer.generation();
        let outcomes = block_on(read_selection(&[Fixture::ok("late.jpg")], today()));

        composer.reset();
        composer.open().unwrap();
        composer.choose_mode(UploadMode::Album).unwrap();

        let err = composer.apply_selection(generation, outcomes).unwrap_err();
        assert_eq!(err, ComposerError::StaleSelection);
        assert!(composer.batch().unwrap().is_empty());
    }

    #[test]
    fn test_reads_for_discarded_batch_are_rejected() {
        let mut composer = composing(UploadMode::Album);
        let generation = composer.generation();
        let outcomes = block_on(read_selection(
            &[Fixture::ok("old1.jpg"), Fixture::ok("old2.jpg")],
            today(),
        ));

        composer.back_to_mode_selection().unwrap();
        composer.choose_mode(UploadMode::Single).unwrap();

        let err = composer.apply_selection(generation, outcomes).unwrap_err();
        assert_eq!(err, ComposerError::StaleSelection);
        assert!(composer.batch().unwrap().is_empty());
    }

    #[test]
    fn test_open_starts_a_new_generation() {
        let mut composer = UploadComposer::new();
        let before = composer.generation();
        composer.open().unwrap();
        assert_ne!(composer.generation(), before);

        // Opening an already open wizard keeps pending reads valid.
        let opened = composer.generation();
        composer.open().unwrap();
        assert_eq!(composer.generation(), opened);
    }

    #[test]
    fn test_single_mode_keeps_first_successful_read() {
        let mut composer = composing(UploadMode::Single);

        let report = select(
            &mut composer,
            &[Fixture::broken("a.jpg"), Fixture::ok("b.jpg"), Fixture::ok("c.jpg")],
        );

        assert_eq!(report.added, 1);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(titles(&composer), vec!["b"]);
        assert_eq!(composer.batch().unwrap().expanded(), Some(0));
    }

    #[test]
    fn test_update_metadata_touches_one_entry() {
        let mut composer = composing(UploadMode::Album);
        select(&mut composer, &[Fixture::ok("a.jpg"), Fixture::ok("b.jpg")]);
        let before = composer.batch().unwrap().entries().to_vec();

        composer
            .update_metadata(1, MetadataField::Description, "Low tide")
            .unwrap();
        composer
            .update_metadata(1, MetadataField::CaptureDate, "2020-01-01")
            .unwrap();

        let after = composer.batch().unwrap().entries();
        assert_eq!(after[0], before[0]);
        assert_eq!(after[1].description, "Low tide");
        assert_eq!(after[1].capture_date, "2020-01-01");
        assert_eq!(after[1].title, before[1].title);

        let err = composer.update_metadata(5, MetadataField::Title, "x").unwrap_err();
        assert_eq!(err, ComposerError::IndexOutOfRange { index: 5, len: 2 });
    }

    #[test]
    fn test_remove_keeps_expanded_pointer_valid() {
        let mut composer = composing(UploadMode::Album);
        select(
            &mut composer,
            &[Fixture::ok("a.jpg"), Fixture::ok("b.jpg"), Fixture::ok("c.jpg")],
        );
        assert_eq!(composer.batch().unwrap().expanded(), Some(2));

        // Removing before the expanded entry shifts the pointer with it.
        composer.remove_entry(0).unwrap();
        let batch = composer.batch().unwrap();
        assert_eq!(batch.expanded(), Some(1));
        assert_eq!(batch.entries()[1].title, "c");

        // Removing the expanded last entry moves to the new last entry.
        composer.remove_entry(1).unwrap();
        assert_eq!(composer.batch().unwrap().expanded(), Some(0));

        composer.remove_entry(0).unwrap();
        assert_eq!(composer.batch().unwrap().expanded(), None);
    }

    #[test]
    fn test_remove_expanded_middle_entry_selects_successor() {
        let mut composer = composing(UploadMode::Album);
        select(
            &mut composer,
            &[Fixture::ok("a.jpg"), Fixture::ok("b.jpg"), Fixture::ok("c.jpg")],
        );
        composer.expand(1).unwrap();

        composer.remove_entry(1).unwrap();
        let batch = composer.batch().unwrap();
        assert_eq!(batch.expanded(), Some(1));
        assert_eq!(batch.entries()[1].title, "c");
    }

    #[test]
    fn test_submit_rejects_empty_batch_without_request() {
        let mut composer = composing(UploadMode::Single);
        let transport = RecordingTransport::answering(Ok(ApiStatus::ok()));

        let err = block_on(composer.submit(&transport, || {})).unwrap_err();
        assert_eq!(err, SubmitError::Invalid(ComposerError::EmptyBatch));
        assert!(transport.sent.borrow().is_empty());
        assert!(matches!(composer.state(), ComposerState::Composing(_)));
    }

    #[test]
    fn test_submit_rejects_blank_title_without_request() {
        let mut composer = composing(UploadMode::Album);
        select(&mut composer, &[Fixture::ok("a.jpg"), Fixture::ok("b.jpg")]);
        composer.update_metadata(1, MetadataField::Title, "   ").unwrap();
        let transport = RecordingTransport::answering(Ok(ApiStatus::ok()));

        let err = block_on(composer.submit(&transport, || {})).unwrap_err();
        assert_eq!(err, SubmitError::Invalid(ComposerError::MissingTitle { index: 1 }));
        assert_eq!(err.user_message(), "All photos must have a title.");
        assert!(transport.sent.borrow().is_empty());
    }

    #[test]
    fn test_successful_submit_clears_and_completes_once() {
        let mut composer = composing(UploadMode::Single);
        select(&mut composer, &[Fixture::ok("solo.png")]);
        let transport = RecordingTransport::answering(Ok(ApiStatus::ok()));
        let completions = Cell::new(0);

        block_on(composer.submit(&transport, || completions.set(completions.get() + 1))).unwrap();

        assert_eq!(completions.get(), 1);
        assert_eq!(transport.sent.borrow().len(), 1);
        assert!(composer.batch().is_none());
        assert!(!composer.is_open());

        let request = &transport.sent.borrow()[0];
        assert_eq!(request.album_id, None);
        assert_eq!(request.album, None);
        assert_eq!(request.photos[0].filename, "solo.png");
    }

    #[test]
    fn test_server_failure_keeps_batch_and_message() {
        let mut composer = composing(UploadMode::Single);
        select(&mut composer, &[Fixture::ok("solo.png")]);
        let transport =
            RecordingTransport::answering(Err(ApiError::Server("Only uploaders can upload photos".into())));
        let completions = Cell::new(0);

        let err = block_on(composer.submit(&transport, || completions.set(completions.get() + 1)))
            .unwrap_err();

        assert_eq!(err.user_message(), "Only uploaders can upload photos");
        assert_eq!(completions.get(), 0);
        assert_eq!(composer.batch().unwrap().len(), 1);
        assert!(matches!(composer.state(), ComposerState::Composing(_)));
    }

    #[test]
    fn test_unsuccessful_status_and_transport_failure() {
        let mut composer = composing(UploadMode::Single);
        select(&mut composer, &[Fixture::ok("solo.png")]);

        composer.begin_submit().unwrap();
        let err = composer.finish_submit(Ok(ApiStatus::failed(""))).unwrap_err();
        assert_eq!(err.user_message(), "Upload failed");

        composer.begin_submit().unwrap();
        let err = composer
            .finish_submit(Err(ApiError::Transport("offline".into())))
            .unwrap_err();
        assert_eq!(err.user_message(), "Upload failed");
        assert_eq!(composer.batch().unwrap().len(), 1);
    }

    #[test]
    fn test_edits_blocked_while_submitting() {
        let mut composer = composing(UploadMode::Single);
        select(&mut composer, &[Fixture::ok("solo.png")]);
        composer.begin_submit().unwrap();

        let err = composer.update_metadata(0, MetadataField::Title, "late").unwrap_err();
        assert!(matches!(err, ComposerError::InvalidTransition { state: "submitting", .. }));
        assert!(composer.begin_submit().is_err());
    }

    #[test]
    fn test_album_payload_targets() {
        let mut composer = composing(UploadMode::Album);
        select(&mut composer, &[Fixture::ok("a.jpg")]);
        composer.set_album_field(AlbumField::Title, "Coast").unwrap();
        composer.set_album_field(AlbumField::Description, "Winter").unwrap();

        let request = composer.batch().unwrap().to_request();
        assert_eq!(request.album_id, None);
        assert_eq!(
            request.album,
            Some(NewAlbum { title: "Coast".into(), description: "Winter".into() })
        );

        composer.use_existing_album(42).unwrap();
        let request = composer.batch().unwrap().to_request();
        assert_eq!(request.album_id, Some(42));
        assert_eq!(request.album, None);
    }

    #[test]
    fn test_album_settings_need_album_mode() {
        let mut composer = composing(UploadMode::Single);
        assert_eq!(
            composer.set_album_field(AlbumField::Title, "x").unwrap_err(),
            ComposerError::NotAlbumMode
        );
    }

    #[test]
    fn test_transitions() {
        let mut composer = UploadComposer::new();
        assert!(composer.choose_mode(UploadMode::Album).is_err());

        composer.open().unwrap();
        composer.choose_mode(UploadMode::Album).unwrap();
        select(&mut composer, &[Fixture::ok("a.jpg")]);

        composer.back_to_mode_selection().unwrap();
        assert_eq!(composer.state(), &ComposerState::ModeSelection);
        assert!(composer.batch().is_none());

        let generation = composer.generation();
        composer.reset();
        assert_eq!(composer.state(), &ComposerState::Closed);
        assert_ne!(composer.generation(), generation);
        assert!(composer.finish_submit(Ok(ApiStatus::ok())).is_err());
    }

    #[test]
    fn test_album_scenario_edit_remove_submit() {
        let mut composer = composing(UploadMode::Album);
        select(
            &mut composer,
            &[Fixture::ok("one.jpg"), Fixture::ok("two.jpg"), Fixture::ok("three.jpg")],
        );

        composer.update_metadata(1, MetadataField::Title, "Dawn").unwrap();
        composer.remove_entry(0).unwrap();

        let transport = RecordingTransport::answering(Ok(ApiStatus::ok()));
        block_on(composer.submit(&transport, || {})).unwrap();

        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].photos.len(), 2);
        assert_eq!(sent[0].photos[0].title, "Dawn");
        assert_eq!(sent[0].photos[1].title, "three");
    }
}
