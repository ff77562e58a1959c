//! Error types for the edgequake-html2md library.
//!
//! Only construction can fail. Once a [`crate::DocumentSource`] exists, every
//! query over it is infallible: malformed or sparse markup produces partial
//! or empty collections rather than an error.
//!
//! * [`Html2MdError::InvalidInput`] is the one error this crate raises on its
//!   own account (contradictory `file` / `text` flags).
//! * [`Html2MdError::FetchFailed`] and [`Html2MdError::ReadFailed`] carry the
//!   transport or filesystem error unchanged as their `source`, so callers can
//!   still downcast to `reqwest::Error` or inspect `std::io::ErrorKind`.

use std::path::PathBuf;
use thiserror::Error;

/// Message carried by [`Html2MdError::InvalidInput`] when both mode flags are set.
pub const CONFLICTING_MODES: &str =
    "`file` and `text` are mutually exclusive; set at most one of them";

/// All errors returned by the edgequake-html2md library.
#[derive(Debug, Error)]
pub enum Html2MdError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// The caller's mode flags are contradictory.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Reading a local HTML file failed (not found, permission, bad UTF-8).
    #[error("Failed to read '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP request could not be sent or its body could not be read.
    #[error("Failed to fetch '{url}': {source}")]
    FetchFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    ///
    /// Only produced when [`crate::SourceConfig::error_for_status`] is set;
    /// by default the body of any response is parsed.
    #[error("Fetching '{url}' returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    // ── Output errors ─────────────────────────────────────────────────────
    /// Could not create or write the JSON output file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Html2MdError {
    /// The error returned when both `file` and `text` are requested.
    pub fn conflicting_modes() -> Self {
        Html2MdError::InvalidInput(CONFLICTING_MODES.to_string())
    }
}
