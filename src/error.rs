// src/error.rs
//! Error types for the annotator and its command-line front end.
//!
//! Annotating well-formed text never fails. Errors come from the edges:
//! a caller handing over an incomplete click listener, a configuration
//! that cannot be honored, or the CLI failing to read or write.

use thiserror::Error;

/// Main error type.
#[derive(Error, Debug)]
pub enum TaggerError {
    #[error("Invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: String,
    },

    #[error(transparent)]
    Validation(#[from] crate::types::ValidationError),

    #[error("Failed to compile tag pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TaggerError {
    /// A required listener callback was not supplied.
    pub(crate) fn missing_callback(callback: &'static str) -> Self {
        TaggerError::InvalidArgument {
            argument: "listener",
            reason: format!("the `{}` callback is required by this entry point", callback),
        }
    }
}

/// Result type alias for convenience
pub type Result<T, E = TaggerError> = std::result::Result<T, E>;
