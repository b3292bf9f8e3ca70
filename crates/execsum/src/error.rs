//! Error types for CSV ingestion.
//!
//! Loading is the only fallible operation in the deterministic core: question
//! answering signals problems through returned diagnostic strings instead of
//! errors, and encoding-detection uncertainty is silently downgraded to a
//! UTF-8 default. The taxonomy here is therefore small and closed.
//!
//! Errors serialize as a `{code, message}` struct so embedding callers can
//! forward them to a frontend for display.

use serde::ser::SerializeStruct;
use serde::Serialize;
use thiserror::Error;

/// Error raised when a CSV source cannot be turned into a [`Table`].
///
/// Raised only when tabular parsing cannot succeed even after the forced
/// UTF-8-with-replacement retry (e.g. inconsistent row widths). Merely
/// garbled text never produces this error; illegible byte sequences decode
/// to the U+FFFD replacement character instead.
///
/// [`Table`]: crate::table::Table
#[derive(Error, Debug)]
pub enum IngestError {
    /// The underlying file or stream could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The decoded text is not structurally valid delimited data.
    #[error("Failed to parse CSV: {cause}")]
    Parse {
        #[source]
        cause: csv::Error,
    },

    /// The source contained no bytes at all.
    #[error("No columns to parse from empty input")]
    EmptyInput,
}

impl IngestError {
    /// Get a stable error code for frontend handling.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Io(_) => "IO_ERROR",
            Self::Parse { .. } => "PARSE_ERROR",
            Self::EmptyInput => "EMPTY_INPUT",
        }
    }
}

/// Serialize as a `{code, message}` struct for display in embedding UIs.
impl Serialize for IngestError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("IngestError", 2)?;
        state.serialize_field("code", &self.error_code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type alias for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
