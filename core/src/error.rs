//! Error types for the Unsent client.
//!
//! # Design
//! Every failure a call can hit is one `Error` variant: local encoding,
//! transport, a non-2xx answer from the API, or a 2xx body that does not match
//! the expected type. Non-2xx bodies come in two shapes (a flat
//! `{code, message}` object or one nested under `"error"`); both, and bodies
//! that are neither, are normalized into a single `ApiError`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error produced by a [`Transport`](crate::http::Transport).
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Code used when a non-2xx body carries no recognizable error object.
pub const FALLBACK_ERROR_CODE: &str = "INTERNAL_SERVER_ERROR";

/// Normalized error object returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Normalize a non-2xx response body.
    ///
    /// Tries the flat shape first, then the nested `{"error": {...}}` shape.
    /// A shape only counts when it carries a non-empty `code`. Anything else
    /// falls back to `INTERNAL_SERVER_ERROR` with the HTTP status line.
    pub fn from_response_body(status: u16, body: &str) -> Self {
        #[derive(Deserialize)]
        struct Nested {
            error: ApiError,
        }

        if let Ok(flat) = serde_json::from_str::<ApiError>(body) {
            if !flat.code.is_empty() {
                return flat;
            }
        }
        if let Ok(nested) = serde_json::from_str::<Nested>(body) {
            if !nested.error.code.is_empty() {
                return nested.error;
            }
        }
        Self::new(FALLBACK_ERROR_CODE, status_line(status))
    }
}

/// `"404 Not Found"`, or just the number for codes without a reason phrase.
fn status_line(status: u16) -> String {
    match ureq::http::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
    {
        Some(reason) => format!("{status} {reason}"),
        None => status.to_string(),
    }
}

/// Errors returned by every client operation.
#[derive(Debug, Error)]
pub enum Error {
    /// No API key was passed and `UNSENT_API_KEY` is not set.
    #[error("missing API key: pass one to the client builder or set UNSENT_API_KEY")]
    MissingApiKey,

    /// The configured base URL is not an absolute http(s) URL.
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The request never produced an HTTP response.
    #[error("transport error: {0}")]
    Transport(#[source] TransportError),

    /// The API answered with a non-2xx status.
    #[error("API error {status} ({}): {}", error.code, error.message)]
    Api { status: u16, error: ApiError },

    /// A 2xx body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),
}

impl Error {
    /// HTTP status for `Api` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The normalized error object for `Api` errors.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
