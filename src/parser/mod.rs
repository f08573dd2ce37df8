//! CSV row parsing with encoding and delimiter auto-detection.
//!
//! The parsing path is two-phase: a strict grammar-based pass using the
//! `csv` crate, and a heuristic fallback pass that is activated only when
//! the strict pass reports a record-length mismatch. Both produce the same
//! [`RawRow`] shape, so downstream assembly never knows which path ran.
//!
//! No question-domain logic lives here.

use crate::error::{ImportError, ImportResult};

pub mod fallback;
pub mod strict;

// =============================================================================
// Raw Row
// =============================================================================

/// A single parsed line: an ordered column-name -> cell-value mapping.
///
/// Keys are unique per row; when a header name repeats, the first
/// occurrence wins. Consumed immediately by question assembly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    cells: Vec<(String, String)>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a cell. A duplicate column name is ignored (first wins).
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        let column = column.into();
        if !self.cells.iter().any(|(name, _)| *name == column) {
            self.cells.push((column, value.into()));
        }
    }

    /// Cell value for a column, if the column exists in this row.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Column names in insertion (header) order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

// =============================================================================
// Cell Normalizer
// =============================================================================

/// Clean a raw cell value: leading BOM, then quote runs at both ends
/// (cosmetic cleanup, not CSV quote handling), then whitespace.
pub fn normalize_cell(raw: &str) -> String {
    let value = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    value.trim_matches('"').trim().to_string()
}

// =============================================================================
// Encoding Detection
// =============================================================================

/// Detect the encoding of raw bytes using chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let (charset, _confidence, _language) = chardet::detect(bytes);

    match charset.to_lowercase().as_str() {
        "" | "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        _ => charset,
    }
}

/// Decode bytes to text using the given encoding name.
///
/// UTF-8 decoding is strict, never lossy: silently mis-decoded text would
/// corrupt every downstream field. Other names resolve through
/// `encoding_rs`; an unresolvable name is fatal.
pub fn decode_content(bytes: &[u8], encoding: &str) -> ImportResult<String> {
    if matches!(encoding.to_lowercase().as_str(), "ascii" | "utf-8" | "utf8") {
        return String::from_utf8(bytes.to_vec()).map_err(|_| ImportError::Decode {
            encoding: "utf-8".to_string(),
        });
    }

    let charset = encoding.to_string();
    let label = chardet::charset2encoding(&charset);
    let decoder = encoding_rs::Encoding::for_label(label.as_bytes())
        .ok_or_else(|| ImportError::UnsupportedEncoding(encoding.to_string()))?;

    let (text, _, had_errors) = decoder.decode(bytes);
    if had_errors {
        return Err(ImportError::Decode {
            encoding: encoding.to_string(),
        });
    }
    Ok(text.into_owned())
}

// =============================================================================
// Dialect Detection
// =============================================================================

/// Choose the field delimiter from the first non-blank line alone.
///
/// Semicolon wins only when it strictly outnumbers commas and appears at
/// least five times (the column count of a plausible header); every other
/// case is comma. One-shot decision, never re-evaluated per row.
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content
        .lines()
        .map(|line| line.strip_prefix('\u{feff}').unwrap_or(line))
        .find(|line| !line.trim().is_empty())
        .unwrap_or("");

    let commas = first_line.matches(',').count();
    let semicolons = first_line.matches(';').count();

    if semicolons > commas && semicolons >= 5 {
        ';'
    } else {
        ','
    }
}

// =============================================================================
// Two-Phase Row Parsing
// =============================================================================

/// Parse decoded text into header-keyed rows.
///
/// Runs the strict parser first. A record-length mismatch switches to the
/// fallback parser over the full text; any other strict-parse failure is
/// fatal and propagates.
pub fn parse_rows(content: &str, delimiter: char) -> ImportResult<Vec<RawRow>> {
    match strict::parse(content, delimiter) {
        Ok(rows) => Ok(rows),
        Err(err) if is_uneven_record(&err) => Ok(fallback::parse(content, delimiter)),
        Err(err) => Err(err.into()),
    }
}

fn is_uneven_record(err: &csv::Error) -> bool {
    matches!(err.kind(), csv::ErrorKind::UnequalLengths { .. })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_cell() {
        assert_eq!(normalize_cell("  hello  "), "hello");
        assert_eq!(normalize_cell("\"quoted\""), "quoted");
        assert_eq!(normalize_cell("\"\"\"stacked\"\"\""), "stacked");
        assert_eq!(normalize_cell("\u{feff}prompt"), "prompt");
        assert_eq!(normalize_cell(""), "");
        assert_eq!(normalize_cell("\" padded \""), "padded");
    }

    #[test]
    fn test_raw_row_first_occurrence_wins() {
        let mut row = RawRow::new();
        row.insert("prompt", "first");
        row.insert("prompt", "second");
        assert_eq!(row.len(), 1);
        assert_eq!(row.get("prompt"), Some("first"));
    }

    #[test]
    fn test_raw_row_preserves_order() {
        let mut row = RawRow::new();
        row.insert("b", "2");
        row.insert("a", "1");
        let columns: Vec<&str> = row.columns().collect();
        assert_eq!(columns, vec!["b", "a"]);
    }

    #[test]
    fn test_detect_delimiter_semicolon_majority() {
        // 6 semicolons, 2 commas
        assert_eq!(detect_delimiter("a;b;c;d;e;f;g,h,i"), ';');
    }

    #[test]
    fn test_detect_delimiter_tie_is_comma() {
        // 5 semicolons, 5 commas
        assert_eq!(detect_delimiter("a;b;c;d;e;f,g,h,i,j,k"), ',');
    }

    #[test]
    fn test_detect_delimiter_below_floor_is_comma() {
        // 4 semicolons, 0 commas: below the 5-semicolon floor
        assert_eq!(detect_delimiter("a;b;c;d;e"), ',');
    }

    #[test]
    fn test_detect_delimiter_skips_blank_lines() {
        assert_eq!(detect_delimiter("\n   \na;b;c;d;e;f"), ';');
    }

    #[test]
    fn test_detect_delimiter_ignores_bom() {
        assert_eq!(detect_delimiter("\u{feff}a;b;c;d;e;f"), ';');
    }

    #[test]
    fn test_detect_encoding_utf8() {
        assert_eq!(detect_encoding("prompt,explanation".as_bytes()), "utf-8");
    }

    #[test]
    fn test_decode_latin1() {
        // "Société" in ISO-8859-1
        let bytes: &[u8] = &[0x53, 0x6F, 0x63, 0x69, 0xE9, 0x74, 0xE9];
        let encoding = detect_encoding(bytes);
        let decoded = decode_content(bytes, &encoding).unwrap();
        assert!(decoded.starts_with("Soci"));
        assert_eq!(decoded.chars().count(), 7);
    }

    #[test]
    fn test_decode_invalid_utf8_is_fatal() {
        let bytes: &[u8] = &[0xFF, 0xFE, 0x00];
        assert!(decode_content(bytes, "utf-8").is_err());
    }

    #[test]
    fn test_decode_unknown_encoding_is_fatal() {
        let err = decode_content(b"abc", "klingon-7").unwrap_err();
        assert!(matches!(err, ImportError::UnsupportedEncoding(_)));
    }

    #[test]
    fn test_parse_rows_strict_path_keeps_quoted_delimiter() {
        // Well-formed input must go through the strict parser: the quoted
        // comma survives intact, which the quote-unaware fallback could
        // not reproduce.
        let csv = "prompt,explanation\n\"Satu, dua\",Penjelasan";
        let rows = parse_rows(csv, ',').unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("prompt"), Some("Satu, dua"));
    }

    #[test]
    fn test_whitespace_line_keeps_strict_path() {
        // A stray whitespace-only line between well-formed rows must not
        // reroute the file through the quote-unaware fallback.
        let csv = "prompt,explanation\n\"Satu, dua\",Penjelasan\n   \nSiapa?,Dia";
        let rows = parse_rows(csv, ',').unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("prompt"), Some("Satu, dua"));
        assert_eq!(rows[1].get("prompt"), Some("Siapa?"));
    }

    #[test]
    fn test_parse_rows_falls_back_on_uneven_row() {
        // Unquoted comma in the row makes it one field too long; the
        // fallback attributes the excess to a text column instead of
        // shifting the trailing columns out of alignment.
        let csv = "prompt,explanation,order\nApa?,Karena a, dan b,3";
        let rows = parse_rows(csv, ',').unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("prompt"), Some("Apa?,Karena a"));
        assert_eq!(rows[0].get("explanation"), Some("dan b"));
        assert_eq!(rows[0].get("order"), Some("3"));
    }
}
