//! # textdb
//!
//! Parsers for [Indental](https://wiki.xxiivv.com/#indental) and
//! [Tablatal](https://wiki.xxiivv.com/#tablatal), two small human-writable
//! plain-text database formats by Devine Lu Linvega.
//!
//! ## The formats
//!
//! **Indental** is an indentation-based dictionary database: categories at
//! the left margin, `KEY : VALUE` pairs indented two spaces, list items
//! indented four.
//!
//! **Tablatal** is a fixed-column list database: the first line names the
//! columns, and every following line is sliced by the header's character
//! positions.
//!
//! ## Key Features
//!
//! - **Best-effort parsing**: every malformed line has a defined recovery,
//!   so a permissive parse always returns a document plus an ordered list
//!   of diagnostics (`"<message> on line <N>"`)
//! - **Strict variants**: `parse_*_strict` entry points abort on the first
//!   diagnostic instead
//! - **Ordered data**: categories, keys, columns, and rows keep their
//!   source order via [`IndexMap`](indexmap::IndexMap)
//! - **Serde output**: parsed documents implement `Serialize`, so JSON or
//!   CSV rendering is one `serde` call away
//! - **No unsafe code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use textdb::parse_indental;
//!
//! let source = "\
//! NAME
//!   KEY : VALUE
//!   LIST
//!     ITEM1
//!     ITEM2
//! ";
//!
//! let doc = parse_indental(source);
//! assert!(doc.is_valid());
//!
//! let body = doc.get("NAME").unwrap();
//! assert_eq!(body.get_str("KEY"), Some("VALUE"));
//! assert_eq!(body.get_list("LIST").map(<[String]>::len), Some(2));
//! ```
//!
//! ### Tabular data
//!
//! ```rust
//! use textdb::parse_tablatal;
//!
//! let source = "\
//! NAME    AGE   COLOR
//! Erica   12    Opal
//! Alex    23    Cyan
//! ";
//!
//! let doc = parse_tablatal(source);
//! assert_eq!(doc.keys(), &["NAME", "AGE", "COLOR"]);
//! assert_eq!(doc.pluck("NAME"), vec!["Erica", "Alex"]);
//! ```
//!
//! ### Strict mode and diagnostics
//!
//! ```rust
//! use textdb::{parse_indental, parse_indental_strict};
//!
//! let source = "NAME\n  KEY : A\n  KEY : B\n";
//!
//! // Permissive: collect errors, keep the first value.
//! let doc = parse_indental(source);
//! assert_eq!(doc.errors()[0].to_string(), "Duplicate key on line 3");
//! assert_eq!(doc.get("NAME").unwrap().get_str("KEY"), Some("A"));
//!
//! // Strict: the first diagnostic aborts the parse.
//! let err = parse_indental_strict(source).unwrap_err();
//! assert_eq!(err.to_string(), "Duplicate key on line 3");
//! ```
//!
//! ## Format Specification
//!
//! See the [`format`] module for the full grammar of both formats as
//! implemented here.

pub mod error;
pub mod format;
pub mod indental;
mod lexer;
pub mod map;
mod normalize;
pub mod options;
pub mod tablatal;
pub mod value;

pub use error::{Diagnostic, Error, ErrorKind, Result};
pub use indental::IndentalDoc;
pub use map::Map;
pub use normalize::{squeeze, symbolize};
pub use options::ParseOptions;
pub use tablatal::{Row, TablatalDoc};
pub use value::Value;

/// Parses Indental source permissively.
///
/// Always returns a document; recoverable errors are collected on
/// [`IndentalDoc::errors`] and the affected lines are skipped.
///
/// # Examples
///
/// ```rust
/// use textdb::parse_indental;
///
/// let doc = parse_indental("NAME\n  KEY : VALUE\n");
/// assert!(doc.is_valid());
/// assert_eq!(doc.categories(), vec!["NAME"]);
/// ```
#[must_use]
pub fn parse_indental(source: &str) -> IndentalDoc {
    parse_indental_with_options(source, ParseOptions::default())
}

/// Parses Indental source permissively, with options.
///
/// # Examples
///
/// ```rust
/// use textdb::{parse_indental_with_options, ParseOptions};
///
/// let options = ParseOptions::new().with_symbolize_names(true);
/// let doc = parse_indental_with_options("My Category\n  Some Key : x\n", options);
/// assert_eq!(doc.get("my_category").unwrap().get_str("some_key"), Some("x"));
/// ```
#[must_use]
pub fn parse_indental_with_options(source: &str, options: ParseOptions) -> IndentalDoc {
    indental::parse(source, options)
}

/// Parses Indental source strictly: the first diagnostic aborts the parse.
///
/// # Errors
///
/// Returns an [`Error`] whose message equals the first diagnostic's text
/// (`"<message> on line <N>"`). No further lines are processed.
///
/// # Examples
///
/// ```rust
/// use textdb::parse_indental_strict;
///
/// let doc = parse_indental_strict("NAME\n  KEY : VALUE\n").unwrap();
/// assert!(doc.is_valid());
///
/// assert!(parse_indental_strict("\tINVALID").is_err());
/// ```
pub fn parse_indental_strict(source: &str) -> Result<IndentalDoc> {
    parse_indental_strict_with_options(source, ParseOptions::default())
}

/// Parses Indental source strictly, with options.
///
/// # Errors
///
/// Returns an [`Error`] carrying the first diagnostic.
pub fn parse_indental_strict_with_options(
    source: &str,
    options: ParseOptions,
) -> Result<IndentalDoc> {
    indental::parse_strict(source, options)
}

/// Parses Tablatal source permissively.
///
/// Always returns a document; recoverable errors are collected on
/// [`TablatalDoc::errors`].
///
/// # Examples
///
/// ```rust
/// use textdb::parse_tablatal;
///
/// let doc = parse_tablatal("NAME  AGE\nA     1\n");
/// assert!(doc.is_valid());
/// assert_eq!(doc.len(), 1);
/// ```
#[must_use]
pub fn parse_tablatal(source: &str) -> TablatalDoc {
    parse_tablatal_with_options(source, ParseOptions::default())
}

/// Parses Tablatal source permissively, with options.
///
/// # Examples
///
/// ```rust
/// use textdb::{parse_tablatal_with_options, ParseOptions};
///
/// let options = ParseOptions::new().with_symbolize_names(true);
/// let doc = parse_tablatal_with_options("NAME  AGE\nA     1\n", options);
/// assert_eq!(doc.keys(), &["name", "age"]);
/// ```
#[must_use]
pub fn parse_tablatal_with_options(source: &str, options: ParseOptions) -> TablatalDoc {
    tablatal::parse(source, options)
}

/// Parses Tablatal source strictly: the first diagnostic aborts the parse.
///
/// # Errors
///
/// Returns an [`Error`] whose message equals the first diagnostic's text.
///
/// # Examples
///
/// ```rust
/// use textdb::parse_tablatal_strict;
///
/// assert!(parse_tablatal_strict("NAME  AGE\nA     1\n").is_ok());
/// assert!(parse_tablatal_strict("NAME NAME\n").is_err());
/// ```
pub fn parse_tablatal_strict(source: &str) -> Result<TablatalDoc> {
    parse_tablatal_strict_with_options(source, ParseOptions::default())
}

/// Parses Tablatal source strictly, with options.
///
/// # Errors
///
/// Returns an [`Error`] carrying the first diagnostic.
pub fn parse_tablatal_strict_with_options(
    source: &str,
    options: ParseOptions,
) -> Result<TablatalDoc> {
    tablatal::parse_strict(source, options)
}
