//! End-to-end import pipeline: file bytes to parsed questions.
//!
//! Each invocation is a single synchronous pass with no shared state:
//! decode bytes, pick a delimiter from the header line, parse rows
//! (strict first, heuristic fallback on a record-length mismatch), then
//! assemble one question per row. It either returns the full question
//! list or fails with one descriptive error.

use std::fs;
use std::path::Path;

use crate::assemble::assemble_question;
use crate::error::ImportResult;
use crate::models::{ParsedQuestion, QuestionPool};
use crate::parser;

/// Result of an import with detection metadata, for callers that want to
/// report what was detected (e.g. the CLI).
#[derive(Debug, Clone)]
pub struct ImportReport {
    /// Parsed questions in file order.
    pub questions: Vec<ParsedQuestion>,
    /// Detected source encoding.
    pub encoding: String,
    /// Detected field delimiter.
    pub delimiter: char,
}

/// Import a tryout-pool question CSV from a file path.
pub fn import_tryout_csv<P: AsRef<Path>>(path: P) -> ImportResult<Vec<ParsedQuestion>> {
    import_questions(path, QuestionPool::Tryout)
}

/// Import a practice-pool ("latihan") question CSV from a file path.
///
/// Identical to [`import_tryout_csv`] apart from the pool label used in
/// validation errors; which pool the result is stored under is the
/// caller's concern.
pub fn import_practice_csv<P: AsRef<Path>>(path: P) -> ImportResult<Vec<ParsedQuestion>> {
    import_questions(path, QuestionPool::Practice)
}

/// Import a question CSV from a file path into the given pool.
pub fn import_questions<P: AsRef<Path>>(
    path: P,
    pool: QuestionPool,
) -> ImportResult<Vec<ParsedQuestion>> {
    Ok(import_file_report(path, pool)?.questions)
}

/// Import a question CSV from an in-memory byte buffer.
pub fn import_question_bytes(
    bytes: &[u8],
    pool: QuestionPool,
) -> ImportResult<Vec<ParsedQuestion>> {
    Ok(import_bytes_report(bytes, pool)?.questions)
}

/// Import from a file path, returning detection metadata alongside the
/// questions.
pub fn import_file_report<P: AsRef<Path>>(
    path: P,
    pool: QuestionPool,
) -> ImportResult<ImportReport> {
    let bytes = fs::read(path.as_ref())?;
    import_bytes_report(&bytes, pool)
}

/// Import from a byte buffer, returning detection metadata alongside the
/// questions.
pub fn import_bytes_report(bytes: &[u8], pool: QuestionPool) -> ImportResult<ImportReport> {
    let encoding = parser::detect_encoding(bytes);
    let content = parser::decode_content(bytes, &encoding)?;
    let delimiter = parser::detect_delimiter(&content);

    let rows = parser::parse_rows(&content, delimiter)?;
    let questions = rows
        .iter()
        .enumerate()
        .map(|(index, row)| assemble_question(row, index, pool))
        .collect::<ImportResult<Vec<_>>>()?;

    Ok(ImportReport {
        questions,
        encoding,
        delimiter,
    })
}
