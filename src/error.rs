//! Error handling for mixdown.
//!
//! Every failure in the fetch/decode/export pipeline surfaces as a
//! structured `MixdownError`; nothing is logged-and-swallowed. The
//! buffer algebra itself is total and never constructs one of these.

use thiserror::Error;

/// Result type alias for mixdown operations
pub type Result<T> = std::result::Result<T, MixdownError>;

/// Main error type for mixdown operations
#[derive(Error, Debug)]
pub enum MixdownError {
    // File Errors
    #[error("File not found: {path}")]
    FileNotFound {
        path: String,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Failed to decode audio: {reason}")]
    Decode {
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Unsupported audio format: {format}")]
    UnsupportedFormat { format: String },

    // Sample-rate enforcement at the decode boundary
    #[error("Sample rate mismatch: expected {expected} Hz, got {found} Hz")]
    RateMismatch { expected: u32, found: u32 },

    #[error("Input contains no samples")]
    EmptyInput,

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MixdownError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            MixdownError::FileNotFound { .. } => "FILE_NOT_FOUND",
            MixdownError::Decode { .. } => "DECODE_ERROR",
            MixdownError::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            MixdownError::RateMismatch { .. } => "RATE_MISMATCH",
            MixdownError::EmptyInput => "EMPTY_INPUT",
            MixdownError::Io(_) => "IO_ERROR",
        }
    }
}
