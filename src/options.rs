//! Configuration options for parsing.
//!
//! Both formats accept the same [`ParseOptions`]. The only knob is
//! `symbolize_names`, which switches the name normalization applied to
//! category names, keys, list names, and column headers:
//!
//! - `false` (default): uppercase display strings, e.g. `"MY KEY"`.
//! - `true`: lowercase underscore-joined identifiers, e.g. `"my_key"`.
//!
//! ## Examples
//!
//! ```rust
//! use textdb::{parse_indental_with_options, ParseOptions};
//!
//! let options = ParseOptions::new().with_symbolize_names(true);
//! let doc = parse_indental_with_options("My Category\n  Some Key : x\n", options);
//!
//! assert_eq!(doc.categories(), vec!["my_category"]);
//! ```

use crate::normalize::NameMode;

/// Options shared by the Indental and Tablatal parsers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// Normalize names to lowercase underscore-joined identifiers instead
    /// of uppercase display strings.
    pub symbolize_names: bool,
}

impl ParseOptions {
    /// Creates the default options (uppercase display names).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use textdb::ParseOptions;
    ///
    /// let options = ParseOptions::new();
    /// assert!(!options.symbolize_names);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether names are symbolized.
    #[must_use]
    pub fn with_symbolize_names(mut self, symbolize_names: bool) -> Self {
        self.symbolize_names = symbolize_names;
        self
    }

    pub(crate) fn name_mode(self) -> NameMode {
        if self.symbolize_names {
            NameMode::Symbolize
        } else {
            NameMode::Display
        }
    }
}
