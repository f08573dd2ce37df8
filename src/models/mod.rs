//! Domain models for the question import pipeline.
//!
//! - [`ParsedQuestion`] - One exam question with its options
//! - [`ParsedOption`] - A single answer choice
//! - [`QuestionPool`] - Which content pool an import targets (tryout/latihan)
//!
//! Both records are pure values: built once per CSV row, returned to the
//! caller, never persisted by this crate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Question Pool
// =============================================================================

/// The content pool a parsed question list is destined for.
///
/// The two pools are parsed identically; the pool only selects the label
/// used in validation error messages and tells the caller where to store
/// the result.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QuestionPool {
    /// Tryout exam pool.
    Tryout,
    /// Practice ("latihan") pool.
    Practice,
}

impl QuestionPool {
    /// Label used in error messages and CLI output.
    pub fn label(&self) -> &'static str {
        match self {
            QuestionPool::Tryout => "tryout",
            QuestionPool::Practice => "latihan",
        }
    }
}

impl fmt::Display for QuestionPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for QuestionPool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tryout" => Ok(QuestionPool::Tryout),
            "latihan" | "practice" => Ok(QuestionPool::Practice),
            other => Err(format!(
                "Unknown pool '{}' (expected 'tryout' or 'latihan')",
                other
            )),
        }
    }
}

// =============================================================================
// Parsed Option
// =============================================================================

/// A single answer choice of a question.
///
/// An option exists only if its label is non-empty after normalization;
/// an empty label cell means "no option at this slot", not an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParsedOption {
    /// Display text of the choice. Never empty.
    pub label: String,
    /// Optional image shown next to the choice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Whether this choice is a correct answer. Multiple options may be
    /// correct; single-answer policy belongs to the consumer.
    pub is_correct: bool,
}

// =============================================================================
// Parsed Question
// =============================================================================

/// One exam question assembled from a CSV row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParsedQuestion {
    /// Question text. Defaults to `"Soal {n}"` when the cell is empty.
    pub prompt: String,
    /// Optional question image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Explanation shown after answering. Mandatory; an empty cell fails
    /// the whole import.
    pub explanation: String,
    /// Optional explanation image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation_image_url: Option<String>,
    /// Display/sequencing hint. Defaults to the row's 1-based position.
    pub order: i64,
    /// Answer choices in column order.
    pub options: Vec<ParsedOption>,
}
