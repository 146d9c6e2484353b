//! Error types for the marketplace client.
//!
//! One enum per concern:
//!
//! - [`ComposerError`] - Upload batch validation and illegal transitions
//! - [`ApiError`] - Gateway failures (transport, server-reported, decoding)
//! - [`SessionError`] - Persistent session store failures
//! - [`SubmitError`] - Top-level submission errors (validation or gateway)
//! - [`AuthError`] - Login/register failures
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Composer Errors
// =============================================================================

/// Errors raised by the upload batch composer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposerError {
    /// Submission attempted with no photos in the batch.
    #[error("Please select at least one image")]
    EmptyBatch,

    /// At least one entry has a blank title.
    #[error("All photos must have a title.")]
    MissingTitle { index: usize },

    /// Index does not address an entry of the batch.
    #[error("No photo at position {index} (batch has {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// The operation is not allowed in the current composer state.
    #[error("Cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },

    /// Results of a file selection arrived after the composer was reset.
    #[error("Discarded file selection from a closed upload session")]
    StaleSelection,

    /// Album-only operation attempted in single mode.
    #[error("Album settings are only available in album mode")]
    NotAlbumMode,
}

// =============================================================================
// Gateway Errors
// =============================================================================

/// Errors from the API gateway.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request never produced a response (network, DNS, CORS...).
    #[error("Network error: {0}")]
    Transport(String),

    /// Server answered `success: false` with an error message.
    #[error("{0}")]
    Server(String),

    /// Non-2xx response without a readable error message.
    #[error("Server error ({status}): {body}")]
    Http { status: u16, body: String },

    /// Response body could not be decoded.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text shown to the user.
    ///
    /// Server-reported failures are shown verbatim; every other failure
    /// collapses to `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server(message) if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// Whether the server itself rejected the request.
    pub fn is_server_reported(&self) -> bool {
        matches!(self, ApiError::Server(_))
    }
}

// =============================================================================
// Session Errors
// =============================================================================

/// Errors from the persistent session store.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Failed to read or write the backing file.
    #[error("Session IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data is not valid JSON.
    #[error("Session JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Browser storage is unavailable or refused the write.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

// =============================================================================
// Submission Errors (top-level)
// =============================================================================

/// Errors returned by [`crate::composer::UploadComposer::submit`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Client-side validation failed; no request was sent.
    #[error("{0}")]
    Invalid(#[from] ComposerError),

    /// The request was sent and failed.
    #[error("Upload failed: {0}")]
    Api(#[from] ApiError),
}

impl SubmitError {
    /// Text for the blocking notification shown after a failed submit.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Invalid(err) => err.to_string(),
            SubmitError::Api(err) => err.user_message(GENERIC_UPLOAD_FAILURE),
        }
    }
}

/// Message shown when an upload fails without a server explanation.
pub const GENERIC_UPLOAD_FAILURE: &str = "Upload failed";

// =============================================================================
// Authentication Errors
// =============================================================================

/// Errors from signing in or registering.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The server refused the credentials.
    #[error("{0}")]
    Rejected(String),

    /// The request itself failed.
    #[error("Authentication request failed: {0}")]
    Api(ApiError),

    /// The token could not be persisted.
    #[error("Failed to store session: {0}")]
    Session(#[from] SessionError),
}

impl From<ApiError> for AuthError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Server(message) => AuthError::Rejected(message),
            other => AuthError::Api(other),
        }
    }
}

impl AuthError {
    /// Text shown on the login and register pages.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Rejected(message) if !message.trim().is_empty() => message.clone(),
            AuthError::Rejected(_) => INVALID_CREDENTIALS.to_string(),
            AuthError::Api(_) => UNABLE_TO_CONNECT.to_string(),
            AuthError::Session(err) => err.to_string(),
        }
    }
}

/// Shown when the server rejects a login without saying why.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Shown when the authentication server cannot be reached.
pub const UNABLE_TO_CONNECT: &str = "Unable to connect to the server";

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for composer operations.
pub type ComposerResult<T> = Result<T, ComposerError>;

/// Result type for gateway operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Result type for session store operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Result type for authentication flows.
pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_shown_verbatim() {
        let err = ApiError::Server("Only uploaders can upload photos".into());
        assert_eq!(err.user_message("Upload failed"), "Only uploaders can upload photos");
        assert!(err.is_server_reported());
    }

    #[test]
    fn test_transport_failure_uses_generic_message() {
        let err = ApiError::Transport("connection refused".into());
        assert_eq!(err.user_message("Upload failed"), "Upload failed");

        let err = ApiError::Http { status: 502, body: "<html>".into() };
        assert_eq!(err.user_message("Upload failed"), "Upload failed");
    }

    #[test]
    fn test_blank_server_message_falls_back() {
        let err = ApiError::Server("  ".into());
        assert_eq!(err.user_message("Delete failed"), "Delete failed");
    }

    #[test]
    fn test_submit_error_conversion_chain() {
        let submit: SubmitError = ComposerError::EmptyBatch.into();
        assert_eq!(submit.user_message(), "Please select at least one image");

        let submit: SubmitError = ApiError::Transport("timeout".into()).into();
        assert_eq!(submit.user_message(), GENERIC_UPLOAD_FAILURE);
        assert!(submit.to_string().contains("timeout"));
    }

    #[test]
    fn test_auth_error_messages() {
        let rejected: AuthError = ApiError::Server("Invalid email or password".into()).into();
        assert_eq!(rejected.user_message(), "Invalid email or password");

        let silent: AuthError = ApiError::Server(String::new()).into();
        assert_eq!(silent.user_message(), INVALID_CREDENTIALS);

        let offline: AuthError = ApiError::Transport("dns".into()).into();
        assert_eq!(offline.user_message(), UNABLE_TO_CONNECT);
    }

    #[test]
    fn test_invalid_transition_format() {
        let err = ComposerError::InvalidTransition {
            action: "edit metadata",
            state: "submitting",
        };
        assert_eq!(err.to_string(), "Cannot edit metadata while submitting");
    }
}
