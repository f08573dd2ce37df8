//! Heuristic row recovery for files the strict parser rejects on a
//! record-length mismatch.
//!
//! Splits each line naively on the delimiter and walks the header
//! reattributing tokens: the last column absorbs all trailing tokens,
//! text-capable columns consume greedily until the tokens left match the
//! columns left, everything else takes exactly one. Plausible but not
//! guaranteed when adjacent text columns both contain stray delimiters.

use super::{normalize_cell, RawRow};
use crate::schema;

/// Reconstruct one row per non-blank line after the header.
///
/// The header is the file's own first non-blank line; a header line with
/// no usable names falls back to the default column schema.
pub fn parse(content: &str, delimiter: char) -> Vec<RawRow> {
    let mut lines = content.lines().filter(|line| !line.trim().is_empty());

    let headers: Vec<String> = match lines.next() {
        Some(header_line) => {
            let names: Vec<String> = header_line
                .split(delimiter)
                .map(normalize_cell)
                .collect();
            if names.iter().all(String::is_empty) {
                schema::default_columns().to_vec()
            } else {
                names
            }
        }
        None => return Vec::new(),
    };

    lines
        .map(|line| reattribute_line(line, delimiter, &headers))
        .collect()
}

fn reattribute_line(line: &str, delimiter: char, headers: &[String]) -> RawRow {
    let tokens: Vec<&str> = line.split(delimiter).collect();
    let separator = delimiter.to_string();

    let mut row = RawRow::new();
    let mut cursor = 0;

    for (index, column) in headers.iter().enumerate() {
        let columns_left = headers.len() - index - 1;

        // Cells are assembled from raw fragments and normalized once, so
        // an absorbed stray delimiter keeps its surrounding spacing.
        let raw = if index == headers.len() - 1 {
            // Last column: absorb all trailing tokens.
            let value = tokens[cursor.min(tokens.len())..].join(&separator);
            cursor = tokens.len();
            value
        } else if schema::is_text_capable(column) {
            let mut take = 1;
            while cursor + take < tokens.len()
                && tokens.len() - (cursor + take) > columns_left
            {
                take += 1;
            }
            let end = (cursor + take).min(tokens.len());
            let value = if cursor >= tokens.len() {
                String::new()
            } else {
                tokens[cursor..end].join(&separator)
            };
            cursor += take;
            value
        } else {
            let value = tokens.get(cursor).copied().unwrap_or_default().to_string();
            cursor += 1;
            value
        };

        row.insert(column.clone(), normalize_cell(&raw));
    }

    row
}
