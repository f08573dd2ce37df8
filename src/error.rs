//! Error types for the question import pipeline.
//!
//! A single [`ImportError`] covers the whole pipeline:
//!
//! - I/O and decoding failures while turning file bytes into text
//! - non-recoverable CSV structure failures
//! - the one domain validation rule: a question without an explanation
//!
//! Record-length mismatches from the strict parser are handled internally
//! (they trigger the fallback parser) and never surface through this type.

use thiserror::Error;

use crate::models::QuestionPool;

/// Errors raised by the import pipeline.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Failed to read the input file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding detection produced a name no decoder is available for.
    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// The byte buffer could not be decoded under the chosen encoding.
    #[error("Failed to decode file as {encoding}")]
    Decode { encoding: String },

    /// Invalid CSV structure that the fallback parser cannot recover from.
    #[error("Invalid CSV format: {0}")]
    Parse(String),

    /// A row is missing its mandatory explanation. `row` is the 1-based
    /// line number in the source file, counting the header as line 1.
    #[error("CSV {pool}: pembahasan wajib diisi (baris {row}).")]
    MissingExplanation { pool: QuestionPool, row: usize },
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::Parse(err.to_string())
    }
}

/// Result type for import operations.
pub type ImportResult<T> = Result<T, ImportError>;
