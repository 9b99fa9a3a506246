//! Format reference for Indental and Tablatal.
//!
//! Both formats were created by Devine Lu Linvega as lightweight,
//! human-writable structured-data stores; see
//! <https://wiki.xxiivv.com/#indental> and <https://wiki.xxiivv.com/#tablatal>.
//! This module documents the grammars as implemented by this crate. It
//! contains no code.
//!
//! # Common lexical rules
//!
//! - Input is processed line by line; lines are numbered from 1.
//! - A line that is whitespace-only, or whose first non-whitespace
//!   character is `;`, is a comment and is discarded. Discarded lines
//!   still count towards the numbering of the lines that follow.
//! - A document may be embedded in a host script as a backtick-quoted
//!   template assignment:
//!
//!   ```text
//!   const palette = `
//!   SATURN
//!     HUE : 60
//!   `
//!   ```
//!
//!   When the *entire* input is such an assignment, the first and last
//!   lines are stripped before parsing. A missing delimiter on either end
//!   leaves the input unchanged.
//! - Names (category names, keys, list names, column headers) are
//!   whitespace-squeezed and normalized: upper-cased by default, or
//!   lower-cased and underscore-joined with
//!   [`symbolize_names`](crate::ParseOptions::symbolize_names). Values are
//!   squeezed but keep their case.
//!
//! # Indental
//!
//! Indentation width is the grammar. Only three widths are legal:
//!
//! | Indent | Meaning |
//! |--------|---------|
//! | 0      | Category header; the line text is the category name |
//! | 2      | `KEY : VALUE` pair, or a list name when no `" : "` separator is present |
//! | 4      | Item appended to the most recently opened list |
//!
//! ```text
//! NAME
//!   KEY : VALUE
//!   LIST
//!     ITEM1
//!     ITEM2
//! ```
//!
//! **Rules**:
//!
//! - The key-value separator is the *first* `" : "` (space, colon, space)
//!   of the line, so values may contain `" : "` literally. A line ending
//!   in `" :"` is a pair with an empty value. A colon not surrounded by
//!   spaces is ordinary text.
//! - Indenting with tabs is an error regardless of width; any width other
//!   than 0/2/4 is an indent-level error.
//! - Category names are unique per document; keys (scalar and list alike
//!   share one namespace) are unique per category. The first occurrence
//!   wins; later duplicates are reported and ignored.
//! - There is no nesting beyond category → list.
//!
//! # Tablatal
//!
//! The first retained line is the header; its tokens define fixed columns.
//! Each column starts at its header token's character offset and ends
//! where the next token starts; the last column extends to the end of the
//! line.
//!
//! ```text
//! NAME    AGE   COLOR
//! Erica   12    Opal
//! Alex    23    Cyan
//! ```
//!
//! **Rules**:
//!
//! - Every data line is sliced by the header's character ranges; each cell
//!   is whitespace-squeezed. Short lines yield empty cells, never errors.
//! - A header token whose normalized key repeats an earlier column is
//!   reported and dropped; earlier columns keep their ranges.
//! - Cell data that does not line up with the header columns is accepted
//!   as-is and attributed to whichever column its characters fall in.
//!
//! # Error reporting
//!
//! Every diagnostic reads `"<message> on line <N>"` with a 1-based line
//! number. Permissive parsing collects all diagnostics and returns a
//! best-effort document; strict parsing returns an error carrying the
//! first diagnostic's message and discards the partial document.
