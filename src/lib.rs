//! # soal-import - Exam question CSV ingestion
//!
//! Turns an arbitrary, possibly malformed, tabular file uploaded by a
//! content administrator into a validated sequence of exam questions, or
//! fails with a precise, row-addressable error.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────┐   ┌───────────┐   ┌────────────────────┐   ┌───────────┐
//! │ File bytes│──▶│  Decoder  │──▶│  Row parser        │──▶│ Assembler │
//! │ (any enc) │   │ (chardet) │   │ strict ▸ fallback  │   │ (domain)  │
//! └───────────┘   └───────────┘   └────────────────────┘   └───────────┘
//! ```
//!
//! The row parsers are encoding/dialect/domain agnostic; only the
//! assembler knows the question shape. Every call is a pure, synchronous,
//! single pass over the whole file.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use soal_import::import_tryout_csv;
//!
//! let questions = import_tryout_csv("soal.csv")?;
//! println!("Imported {} questions", questions.len());
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error taxonomy
//! - [`models`] - Domain models (ParsedQuestion, ParsedOption, QuestionPool)
//! - [`schema`] - Fixed column schema
//! - [`parser`] - Encoding/delimiter detection and two-phase row parsing
//! - [`assemble`] - Row-to-question assembly
//! - [`pipeline`] - Entry points

pub mod assemble;
pub mod error;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod schema;

// =============================================================================
// Re-exports - Errors
// =============================================================================

pub use error::{ImportError, ImportResult};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{ParsedOption, ParsedQuestion, QuestionPool};

// =============================================================================
// Re-exports - Parsing
// =============================================================================

pub use parser::{
    decode_content, detect_delimiter, detect_encoding, normalize_cell, parse_rows, RawRow,
};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use pipeline::{
    import_bytes_report, import_file_report, import_practice_csv, import_question_bytes,
    import_questions, import_tryout_csv, ImportReport,
};
