//! Error types for CV scanning and upload validation.

use std::io;
use std::result::Result as StdResult;

use thiserror::Error;

/// Custom result type for cvscan operations
pub type Result<T> = StdResult<T, Error>;

/// Core error type for cvscan operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Could not read table: {0}")]
    TableRead(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Failure while decoding an uploaded document into plain text.
///
/// This never crosses the extractor boundary: `CvExtractor::extract` converts
/// it into the `error` field of an otherwise empty `ExtractedProfile` so the
/// caller can render a degraded result instead of handling a fault.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ExtractionError {
    #[error("unreadable document: {0}")]
    UnreadableDocument(String),

    #[error("could not extract text from page {page}: {reason}")]
    PageText { page: u32, reason: String },
}
