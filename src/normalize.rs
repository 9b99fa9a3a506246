//! Whitespace and name normalization shared by both formats.
//!
//! Category names, keys, list names, and Tablatal column headers are all
//! normalized through the same function, [`normalize_name`], so duplicate
//! detection means the same thing everywhere. Two modes exist:
//!
//! - **Display** (default): squeeze whitespace and upper-case, e.g.
//!   `" my  key "` becomes `"MY KEY"`.
//! - **Symbolize**: squeeze, lower-case, and join with underscores, e.g.
//!   `" my  key "` becomes `"my_key"`.
//!
//! [`squeeze`] and [`symbolize`] are also exported as standalone utilities.

/// Which identity a name normalizes to. Selected by
/// [`ParseOptions::symbolize_names`](crate::ParseOptions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum NameMode {
    /// Uppercase display strings (`"MY KEY"`).
    #[default]
    Display,
    /// Lowercase underscore-joined identifiers (`"my_key"`).
    Symbolize,
}

/// Normalizes the whitespace in a string.
///
/// Strips leading and trailing whitespace and collapses each interior run
/// of whitespace to a single space.
///
/// # Examples
///
/// ```rust
/// use textdb::squeeze;
///
/// assert_eq!(squeeze("  Some \t value "), "Some value");
/// assert_eq!(squeeze(""), "");
/// ```
#[must_use]
pub fn squeeze(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Converts a string into a normalized lowercase identifier.
///
/// Squeezes the string, lower-cases it, and replaces each run of
/// characters outside `[a-z0-9]` with a single underscore.
///
/// # Examples
///
/// ```rust
/// use textdb::symbolize;
///
/// assert_eq!(symbolize("Some  key"), "some_key");
/// assert_eq!(symbolize("A-B"), "a_b");
/// ```
#[must_use]
pub fn symbolize(input: &str) -> String {
    let lowered = squeeze(input).to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut in_run = false;
    for ch in lowered.chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            out.push(ch);
            in_run = false;
        } else if !in_run {
            out.push('_');
            in_run = true;
        }
    }
    out
}

/// Maps raw text to the comparison identity used for duplicate detection.
pub(crate) fn normalize_name(input: &str, mode: NameMode) -> String {
    match mode {
        NameMode::Display => squeeze(input).to_uppercase(),
        NameMode::Symbolize => symbolize(input),
    }
}
