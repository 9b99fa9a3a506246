//! The Tablatal format: a fixed-column list database.
//!
//! ```text
//! NAME    AGE   COLOR
//! Erica   12    Opal
//! Alex    23    Cyan
//! ```
//!
//! The header line defines the columns: each header token starts a column
//! at its character offset, the column ends where the next token starts,
//! and the final column is unbounded so short trailing cells are legal.
//! Every data line is sliced by those fixed ranges; there is no structural
//! validation of the cells themselves, so data that does not line up with
//! the header is silently attributed to the wrong column.

use crate::error::{Diagnostic, ErrorKind, Reporter, Result};
use crate::lexer::{retained_lines, strip_template_wrapper, Line};
use crate::normalize::{normalize_name, squeeze, NameMode};
use crate::ParseOptions;
use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// One row of a Tablatal document, mapping column keys to cell text in
/// column order.
pub type Row = IndexMap<String, String>;

/// A column accepted from the header: its normalized key and its
/// half-open character range into each data line. `end` is `None` for the
/// final, unbounded column.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ColumnKey {
    name: String,
    start: usize,
    end: Option<usize>,
}

#[derive(Debug)]
pub(crate) struct Parser {
    mode: NameMode,
    reporter: Reporter,
    keys: Vec<ColumnKey>,
    rows: Vec<Row>,
}

impl Parser {
    pub(crate) fn new(options: ParseOptions, strict: bool) -> Self {
        Parser {
            mode: options.name_mode(),
            reporter: Reporter::new(strict),
            keys: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub(crate) fn run(&mut self, source: &str) -> Result<()> {
        let source = strip_template_wrapper(source);
        let mut lines = retained_lines(source);
        let Some(header) = lines.next() else {
            return Ok(());
        };
        self.read_header(header)?;
        for line in lines {
            let row = self.make_row(line.text);
            self.rows.push(row);
        }
        Ok(())
    }

    pub(crate) fn into_doc(self) -> TablatalDoc {
        TablatalDoc {
            keys: self.keys.into_iter().map(|key| key.name).collect(),
            rows: self.rows,
            diagnostics: self.reporter.into_diagnostics(),
        }
    }

    /// Derives the column set from the header line, dropping any column
    /// whose normalized key collides with an earlier one. A dropped
    /// column does not disturb its neighbors' ranges.
    fn read_header(&mut self, header: Line<'_>) -> Result<()> {
        for column in make_columns(header.text, self.mode) {
            if self.keys.iter().any(|key| key.name == column.name) {
                self.reporter
                    .report(ErrorKind::DuplicateColumnKey(column.name), header.num)?;
            } else {
                self.keys.push(column);
            }
        }
        Ok(())
    }

    fn make_row(&self, text: &str) -> Row {
        self.keys
            .iter()
            .map(|key| {
                let cell = char_slice(text, key.start, key.end);
                (key.name.clone(), squeeze(cell))
            })
            .collect()
    }
}

fn make_columns(header: &str, mode: NameMode) -> Vec<ColumnKey> {
    let segments = header_segments(header);
    segments
        .iter()
        .enumerate()
        .map(|(idx, (start, text))| ColumnKey {
            name: normalize_name(text, mode),
            start: *start,
            end: segments.get(idx + 1).map(|(next_start, _)| *next_start),
        })
        .collect()
}

/// The non-whitespace runs of the header, each paired with the character
/// offset it starts at.
fn header_segments(header: &str) -> Vec<(usize, &str)> {
    let mut segments = Vec::new();
    let mut run: Option<(usize, usize)> = None;
    for (char_pos, (byte_pos, ch)) in header.char_indices().enumerate() {
        if ch.is_whitespace() {
            if let Some((start, byte_start)) = run.take() {
                segments.push((start, &header[byte_start..byte_pos]));
            }
        } else if run.is_none() {
            run = Some((char_pos, byte_pos));
        }
    }
    if let Some((start, byte_start)) = run {
        segments.push((start, &header[byte_start..]));
    }
    segments
}

/// Slices `text` by character offsets, clamping to the end of the line.
/// A start past the end of the line yields an empty string.
fn char_slice(text: &str, start: usize, end: Option<usize>) -> &str {
    let mut iter = text.char_indices();
    let Some((byte_start, _)) = iter.nth(start) else {
        return "";
    };
    let byte_end = end
        .and_then(|end| iter.nth(end - start - 1))
        .map(|(byte_end, _)| byte_end);
    match byte_end {
        Some(byte_end) => &text[byte_start..byte_end],
        None => &text[byte_start..],
    }
}

/// A parsed Tablatal document: the ordered column keys from the header
/// line and one [`Row`] per data line, plus the diagnostics collected
/// while parsing.
///
/// # Examples
///
/// ```rust
/// use textdb::parse_tablatal;
///
/// let doc = parse_tablatal("NAME    AGE\nErica   12\nAlex    23\n");
///
/// assert!(doc.is_valid());
/// assert_eq!(doc.keys(), &["NAME", "AGE"]);
/// assert_eq!(doc.get(0).and_then(|row| row.get("NAME")).map(String::as_str), Some("Erica"));
/// assert_eq!(doc.pluck("AGE"), vec!["12", "23"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TablatalDoc {
    keys: Vec<String>,
    rows: Vec<Row>,
    diagnostics: Vec<Diagnostic>,
}

impl TablatalDoc {
    /// Returns `true` if the source parsed without errors.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// The diagnostics collected during parsing, in source order.
    #[must_use]
    pub fn errors(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The accepted column keys, in header order.
    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// The data rows, in source order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The row at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// The value of `key` in every row, or an empty vector when the key
    /// is not a column of this document.
    #[must_use]
    pub fn pluck(&self, key: &str) -> Vec<&str> {
        if !self.keys.iter().any(|k| k == key) {
            return Vec::new();
        }
        self.rows
            .iter()
            .filter_map(|row| row.get(key).map(String::as_str))
            .collect()
    }

    /// The number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the document has no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The rows, in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    /// Consumes the document, returning the rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }
}

impl<'a> IntoIterator for &'a TablatalDoc {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for TablatalDoc {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.rows.serialize(serializer)
    }
}

pub(crate) fn parse(source: &str, options: ParseOptions) -> TablatalDoc {
    let mut parser = Parser::new(options, false);
    // A permissive reporter never aborts.
    let _ = parser.run(source);
    parser.into_doc()
}

pub(crate) fn parse_strict(source: &str, options: ParseOptions) -> Result<TablatalDoc> {
    let mut parser = Parser::new(options, true);
    parser.run(source)?;
    Ok(parser.into_doc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_segments_keep_offsets() {
        assert_eq!(
            header_segments("NAME    AGE   COLOR"),
            vec![(0, "NAME"), (8, "AGE"), (14, "COLOR")]
        );
    }

    #[test]
    fn test_columns_span_to_the_next_segment() {
        let columns = make_columns("NAME  AGE", NameMode::Display);
        assert_eq!(columns.len(), 2);
        assert_eq!((columns[0].start, columns[0].end), (0, Some(6)));
        assert_eq!((columns[1].start, columns[1].end), (6, None));
    }

    #[test]
    fn test_char_slice_clamps_to_line_length() {
        assert_eq!(char_slice("abcdef", 2, Some(4)), "cd");
        assert_eq!(char_slice("abc", 2, Some(10)), "c");
        assert_eq!(char_slice("abc", 5, None), "");
    }

    #[test]
    fn test_rows_follow_the_header_ranges() {
        let doc = parse("NAME    AGE\nErica   12\n", ParseOptions::default());
        assert!(doc.is_valid());
        assert_eq!(doc.keys(), &["NAME", "AGE"]);
        assert_eq!(doc.get(0).unwrap().get("NAME").unwrap(), "Erica");
        assert_eq!(doc.get(0).unwrap().get("AGE").unwrap(), "12");
    }

    #[test]
    fn test_short_line_yields_empty_trailing_cells() {
        let doc = parse("NAME AGE\nA 1\nB\n", ParseOptions::default());
        assert!(doc.is_valid());
        assert_eq!(doc.get(1).unwrap().get("AGE").unwrap(), "");
    }

    #[test]
    fn test_duplicate_column_is_reported_and_dropped() {
        let doc = parse("NAME AGE NAME\nA    1   B\n", ParseOptions::default());
        assert_eq!(
            doc.errors()[0].to_string(),
            "Duplicate key NAME on line 1"
        );
        assert_eq!(doc.keys(), &["NAME", "AGE"]);
        assert_eq!(doc.get(0).unwrap().len(), 2);
    }

    #[test]
    fn test_misaligned_data_is_accepted() {
        // Values crossing a column boundary land in the wrong column,
        // not in a diagnostic.
        let doc = parse("NAME AGE\nAlexander 9\n", ParseOptions::default());
        assert!(doc.is_valid());
        assert_eq!(doc.get(0).unwrap().get("NAME").unwrap(), "Alexa");
        assert_eq!(doc.get(0).unwrap().get("AGE").unwrap(), "nder 9");
    }

    #[test]
    fn test_strict_mode_raises_on_duplicate_header() {
        let err = parse_strict("INVALID INVALID\n", ParseOptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "Duplicate key INVALID on line 1");
    }

    #[test]
    fn test_symbolized_column_keys() {
        let options = ParseOptions::new().with_symbolize_names(true);
        let doc = parse("First Name  AGE\nE           1\n", options);
        // "First" and "Name" are separate columns; symbolize applies per key.
        assert_eq!(doc.keys(), &["first", "name", "age"]);
    }

    #[test]
    fn test_blank_and_comment_lines_are_skipped() {
        let doc = parse("; table\nNAME AGE\n\nA    1\n", ParseOptions::default());
        assert!(doc.is_valid());
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_empty_input_yields_an_empty_document() {
        let doc = parse("", ParseOptions::default());
        assert!(doc.is_valid());
        assert!(doc.is_empty());
        assert!(doc.keys().is_empty());
    }
}
