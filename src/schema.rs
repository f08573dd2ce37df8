//! Fixed column schema for question CSV files.
//!
//! The schema serves two roles: it is the positional header for files that
//! ship without one, and it tells the fallback parser which columns hold
//! free-form text and may therefore contain unescaped delimiters.

use once_cell::sync::Lazy;

/// Letters of the five fixed option slots.
pub const OPTION_LETTERS: [&str; 5] = ["a", "b", "c", "d", "e"];

static DEFAULT_COLUMNS: Lazy<Vec<String>> = Lazy::new(|| {
    let mut columns: Vec<String> = [
        "prompt",
        "prompt_image",
        "explanation",
        "explanationImageUrl",
        "order",
    ]
    .into_iter()
    .map(String::from)
    .collect();

    for letter in OPTION_LETTERS {
        columns.push(format!("option_{letter}"));
        columns.push(format!("option_{letter}_image"));
        columns.push(format!("option_{letter}_correct"));
    }

    columns
});

/// The expected column names, in order. Used verbatim as the header for
/// files that have none.
pub fn default_columns() -> &'static [String] {
    &DEFAULT_COLUMNS
}

/// Whether a column is expected to hold free-form text.
///
/// Prompts, explanations, image URLs, and option labels all qualify; only
/// the numeric `order` column and the boolean `*_correct` columns do not.
/// Unknown custom columns are treated as text, which is the safe direction
/// for the fallback parser's token reattribution.
pub fn is_text_capable(column: &str) -> bool {
    column != "order" && !column.ends_with("_correct")
}
