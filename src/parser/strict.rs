//! Strict grammar-based CSV parsing via the `csv` crate.
//!
//! Standard quoting rules (embedded delimiter/newline, doubled-quote
//! escape), first record as header, uniform field counts. A field-count
//! mismatch surfaces as `csv::ErrorKind::UnequalLengths`, the caller's
//! trigger for the fallback parser.

use csv::ReaderBuilder;

use super::{normalize_cell, RawRow};
use crate::schema;

/// Parse decoded text into rows, using the first record as the header.
///
/// A file whose header line carries no usable names (every cell empty
/// after normalization) is keyed positionally by the default column
/// schema instead.
pub fn parse(content: &str, delimiter: char) -> Result<Vec<RawRow>, csv::Error> {
    // The csv crate only skips truly empty lines; a whitespace-only line
    // would register as a one-field record and trip UnequalLengths.
    let content: String = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .has_headers(true)
        .flexible(false)
        .from_reader(content.as_bytes());

    let mut headers: Vec<String> = reader.headers()?.iter().map(normalize_cell).collect();
    if headers.iter().all(String::is_empty) {
        headers = schema::default_columns().to_vec();
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row = RawRow::new();
        for (index, column) in headers.iter().enumerate() {
            let value = record.get(index).map(normalize_cell).unwrap_or_default();
            row.insert(column.clone(), value);
        }
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_rows() {
        let csv = "prompt;explanation\nApa?;Karena\nSiapa?;Dia";
        let rows = parse(csv, ';').unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("prompt"), Some("Apa?"));
        assert_eq!(rows[1].get("explanation"), Some("Dia"));
    }

    #[test]
    fn test_quoted_field_with_delimiter_and_newline() {
        let csv = "prompt,explanation\n\"Satu, dua,\ntiga\",Penjelasan";
        let rows = parse(csv, ',').unwrap();
        assert_eq!(rows[0].get("prompt"), Some("Satu, dua,\ntiga"));
    }

    #[test]
    fn test_doubled_quote_is_literal() {
        let csv = "prompt,explanation\n\"kata \"\"penting\"\"\",Penjelasan";
        let rows = parse(csv, ',').unwrap();
        // csv unescapes the doubled quotes to literal ones; normalization
        // then strips the quote run left at the end of the value.
        assert_eq!(rows[0].get("prompt"), Some("kata \"penting"));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let csv = "prompt,explanation\nA,B\n\nC,D\n";
        let rows = parse(csv, ',').unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_whitespace_only_lines_skipped() {
        // A whitespace-only line counts as blank; it must not register as
        // a one-field record and break the uniform field count.
        let csv = "prompt,explanation\n\"Satu, dua\",B\n   \nC,D\n";
        let rows = parse(csv, ',').unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("prompt"), Some("Satu, dua"));
        assert_eq!(rows[1].get("prompt"), Some("C"));
    }

    #[test]
    fn test_uneven_row_reports_unequal_lengths() {
        let csv = "prompt,explanation\nA,B,C";
        let err = parse(csv, ',').unwrap_err();
        assert!(matches!(err.kind(), csv::ErrorKind::UnequalLengths { .. }));
    }

    #[test]
    fn test_blank_header_uses_default_schema() {
        // Header line has 5 empty cells, so the default schema keys the
        // row positionally; the record itself still must match the header
        // line's field count.
        let csv = ",,,,\nA,B,C,D,5";
        let rows = parse(csv, ',').unwrap();
        assert_eq!(rows[0].get("prompt"), Some("A"));
        assert_eq!(rows[0].get("explanation"), Some("C"));
        assert_eq!(rows[0].get("order"), Some("5"));
    }

    #[test]
    fn test_duplicate_header_first_wins() {
        let csv = "prompt,prompt\nfirst,second";
        let rows = parse(csv, ',').unwrap();
        assert_eq!(rows[0].get("prompt"), Some("first"));
    }
}
