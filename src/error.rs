//! Error types and diagnostics for Indental and Tablatal parsing.
//!
//! Every parse error in this crate is local to a single source line and is
//! *recoverable*: the parsers always have a well-defined skip-and-continue
//! action, so a permissive parse runs to the end of input and accumulates
//! the complete list of [`Diagnostic`]s. A strict parse converts the first
//! diagnostic into an immediate [`Error`] instead.
//!
//! ## Examples
//!
//! ```rust
//! use textdb::parse_indental;
//!
//! let doc = parse_indental("CATEGORY\n   BAD INDENT : X");
//! assert!(!doc.is_valid());
//! assert_eq!(
//!     doc.errors()[0].to_string(),
//!     "Unexpected indent level on line 2",
//! );
//! ```

use std::fmt;
use thiserror::Error;

/// The kind of a parse diagnostic.
///
/// The first seven variants are produced by the Indental parser, the last
/// by the Tablatal header reader. All share the same severity; only the
/// reporting mode (permissive vs strict) differs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The indent of a line contains tabs or other non-space whitespace.
    #[error("Indented with non-space characters")]
    BadIndentCharacters,

    /// The indent width is not 0, 2, or 4 spaces.
    #[error("Unexpected indent level")]
    UnexpectedIndentLevel,

    /// A key-value or list-name line appeared before any category header.
    #[error("No category specified")]
    NoCategorySpecified,

    /// A category header repeats an earlier category's normalized name.
    #[error("Duplicate category")]
    DuplicateCategory,

    /// A key-value line repeats a key already present in the category.
    #[error("Duplicate key")]
    DuplicateKey,

    /// A list-name line repeats a key already present in the category.
    #[error("Duplicate key for list")]
    DuplicateKeyForList,

    /// A list-item line appeared with no open list to receive it.
    #[error("No list specified")]
    NoListSpecified,

    /// A Tablatal header column repeats an earlier column's normalized key.
    #[error("Duplicate key {0}")]
    DuplicateColumnKey(String),
}

/// A single recoverable parse error, tied to a 1-based source line.
///
/// Displays as `"<message> on line <N>"`. Line numbers count every line of
/// the source, including the blank and comment lines the parsers discard.
///
/// # Examples
///
/// ```rust
/// use textdb::{Diagnostic, ErrorKind};
///
/// let diag = Diagnostic::new(ErrorKind::DuplicateCategory, 3);
/// assert_eq!(diag.to_string(), "Duplicate category on line 3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    kind: ErrorKind,
    line: Option<usize>,
}

impl Diagnostic {
    /// Creates a diagnostic at the given 1-based source line.
    #[must_use]
    pub fn new(kind: ErrorKind, line: usize) -> Self {
        Diagnostic {
            kind,
            line: Some(line),
        }
    }

    /// Creates a diagnostic with no associated source line.
    #[must_use]
    pub fn without_line(kind: ErrorKind) -> Self {
        Diagnostic { kind, line: None }
    }

    /// The kind of error this diagnostic reports.
    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// The 1-based source line the error occurred on, if known.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        self.line
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{} on line {}", self.kind, line),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// The error returned by the strict parse entry points.
///
/// Its message is exactly the text of the first diagnostic the parse
/// produced.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A parse aborted in strict mode.
    #[error("{0}")]
    Parse(Diagnostic),
}

impl Error {
    /// The diagnostic that aborted the parse.
    #[must_use]
    pub fn diagnostic(&self) -> &Diagnostic {
        match self {
            Error::Parse(diag) => diag,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// The strict-vs-permissive error sink shared by both parsers.
///
/// Appends every reported diagnostic to an ordered list; in strict mode the
/// report call also returns `Err`, unwinding the parse via `?` at the point
/// of failure.
#[derive(Debug)]
pub(crate) struct Reporter {
    strict: bool,
    diagnostics: Vec<Diagnostic>,
}

impl Reporter {
    pub(crate) fn new(strict: bool) -> Self {
        Reporter {
            strict,
            diagnostics: Vec::new(),
        }
    }

    /// Records a diagnostic; aborts with `Err` when strict.
    pub(crate) fn report(&mut self, kind: ErrorKind, line: usize) -> Result<()> {
        let diag = Diagnostic::new(kind, line);
        self.diagnostics.push(diag.clone());
        if self.strict {
            Err(Error::Parse(diag))
        } else {
            Ok(())
        }
    }

    pub(crate) fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display_includes_line_number() {
        let diag = Diagnostic::new(ErrorKind::NoListSpecified, 12);
        assert_eq!(diag.to_string(), "No list specified on line 12");
    }

    #[test]
    fn test_diagnostic_display_without_line() {
        let diag = Diagnostic::without_line(ErrorKind::DuplicateKey);
        assert_eq!(diag.to_string(), "Duplicate key");
    }

    #[test]
    fn test_duplicate_column_key_names_the_key() {
        let diag = Diagnostic::new(ErrorKind::DuplicateColumnKey("NAME".into()), 1);
        assert_eq!(diag.to_string(), "Duplicate key NAME on line 1");
    }

    #[test]
    fn test_permissive_reporter_accumulates() {
        let mut reporter = Reporter::new(false);
        assert!(reporter.report(ErrorKind::DuplicateKey, 2).is_ok());
        assert!(reporter.report(ErrorKind::NoListSpecified, 3).is_ok());
        assert_eq!(reporter.into_diagnostics().len(), 2);
    }

    #[test]
    fn test_strict_reporter_aborts_on_first_report() {
        let mut reporter = Reporter::new(true);
        let err = reporter.report(ErrorKind::DuplicateCategory, 4).unwrap_err();
        assert_eq!(err.to_string(), "Duplicate category on line 4");
    }
}
