//! Parallel reading of a file selection.

use chrono::NaiveDate;
use futures::future::join_all;

use super::batch::PendingUpload;
use crate::encoding::{encode_data_url, mime_for_filename};

/// A file picked by the user: a browser `File`, a path on disk, a fixture.
#[allow(async_fn_in_trait)]
pub trait SelectedFile {
    /// File name shown in the batch and sent to the server.
    fn name(&self) -> String;

    /// MIME type reported by the source, if any.
    fn mime_type(&self) -> Option<String> {
        None
    }

    /// Full content of the file.
    async fn read_bytes(&self) -> Result<Vec<u8>, String>;
}

/// A file that could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedRead {
    pub filename: String,
    pub reason: String,
}

/// Result of reading one selected file.
pub type ReadOutcome = Result<PendingUpload, FailedRead>;

/// Read and encode one file.
pub async fn read_file<F: SelectedFile>(file: &F, today: NaiveDate) -> ReadOutcome {
    let filename = file.name();
    let mime = file
        .mime_type()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| mime_for_filename(&filename).to_string());

    match file.read_bytes().await {
        Ok(bytes) => {
            log::debug!("Read {} ({} bytes, {})", filename, bytes.len(), mime);
            let data_url = encode_data_url(&bytes, &mime);
            Ok(PendingUpload::new(filename, data_url, today))
        }
        Err(reason) => {
            log::warn!("Failed to read {}: {}", filename, reason);
            Err(FailedRead { filename, reason })
        }
    }
}

/// Read every file of a selection concurrently.
///
/// Outcomes come back in selection order once all reads have finished.
pub async fn read_selection<F: SelectedFile>(files: &[F], today: NaiveDate) -> Vec<ReadOutcome> {
    join_all(files.iter().map(|file| read_file(file, today))).await
}
