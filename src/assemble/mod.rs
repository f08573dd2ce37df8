//! Row-to-question assembly.
//!
//! The only layer aware of the question domain shape. Every field except
//! the explanation has a well-defined default; the explanation is the one
//! hard validation rule and fails the whole import with the offending
//! file row number.

use crate::error::{ImportError, ImportResult};
use crate::models::{ParsedOption, ParsedQuestion, QuestionPool};
use crate::parser::RawRow;
use crate::schema::OPTION_LETTERS;

/// Build one question from a row at 0-based position `index`.
///
/// Every field except the explanation has a default: a non-numeric `order`
/// falls back to `index + 1`, an empty prompt becomes `"Soal {index + 1}"`.
/// A missing explanation is fatal and names file row `index + 2` (the
/// header counts as row 1).
pub fn assemble_question(
    row: &RawRow,
    index: usize,
    pool: QuestionPool,
) -> ImportResult<ParsedQuestion> {
    let explanation = cell(row, "explanation");
    if explanation.is_empty() {
        return Err(ImportError::MissingExplanation {
            pool,
            row: index + 2,
        });
    }

    let explanation_image_url = non_empty(cell(row, "explanationImageUrl"))
        .or_else(|| non_empty(cell(row, "explanation_image")));

    let order = cell(row, "order")
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .map(|n| n as i64)
        .unwrap_or(index as i64 + 1);

    let prompt = match non_empty(cell(row, "prompt")) {
        Some(prompt) => prompt,
        None => format!("Soal {}", index + 1),
    };

    Ok(ParsedQuestion {
        prompt,
        image_url: non_empty(cell(row, "prompt_image")),
        explanation,
        explanation_image_url,
        order,
        options: extract_options(row),
    })
}

/// Collect the row's answer options in column order.
///
/// The five fixed slots `option_a`..`option_e` come first, then any other
/// column starting with `option_` that does not end with `_correct`, in
/// first-seen order with duplicates dropped. A slot with an empty label
/// emits no option.
pub fn extract_options(row: &RawRow) -> Vec<ParsedOption> {
    let mut columns: Vec<String> = OPTION_LETTERS
        .iter()
        .map(|letter| format!("option_{letter}"))
        .collect();

    for column in row.columns() {
        if column.starts_with("option_")
            && !column.ends_with("_correct")
            && !columns.iter().any(|known| known == column)
        {
            columns.push(column.to_string());
        }
    }

    columns
        .iter()
        .filter_map(|column| {
            let label = non_empty(cell(row, column))?;
            Some(ParsedOption {
                label,
                image_url: non_empty(cell(row, &format!("{column}_image"))),
                is_correct: parse_correct_flag(&cell(row, &format!("{column}_correct"))),
            })
        })
        .collect()
}

/// A `_correct` cell is true iff it normalizes to `true`, `1`, or `y`.
pub fn parse_correct_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "true" | "1" | "y")
}

fn cell(row: &RawRow, column: &str) -> String {
    row.get(column).unwrap_or_default().trim().to_string()
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
