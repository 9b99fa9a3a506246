//! The Indental format: an indentation-based dictionary database.
//!
//! ```text
//! NAME
//!   KEY : VALUE
//!   LIST
//!     ITEM1
//!     ITEM2
//! ```
//!
//! Indentation width selects the meaning of a line: 0 spaces opens a
//! category, 2 spaces holds a key-value pair or a list name, 4 spaces adds
//! an item to the most recently opened list. Parsing runs in two stages,
//! a lexer that classifies each retained line into a token and a state
//! machine that folds the token stream into an [`IndentalDoc`].
//!
//! Parsing is best-effort: every malformed line has a defined skip action
//! (see [`crate::error`]), so a permissive parse always yields a document
//! plus the full list of diagnostics.

use crate::error::{Diagnostic, ErrorKind, Reporter, Result};
use crate::lexer::{retained_lines, strip_template_wrapper, Line};
use crate::normalize::{normalize_name, squeeze, NameMode};
use crate::{Map, ParseOptions, Value};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// What a line's indent width says it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IndentLevel {
    Category,
    KeyOrList,
    ListItem,
}

/// The only legal indent widths, and what each one means.
const INDENT_LEVELS: [(usize, IndentLevel); 3] = [
    (0, IndentLevel::Category),
    (2, IndentLevel::KeyOrList),
    (4, IndentLevel::ListItem),
];

fn indent_level(width: usize) -> Option<IndentLevel> {
    INDENT_LEVELS
        .iter()
        .find(|(w, _)| *w == width)
        .map(|(_, level)| *level)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TokenKind {
    Category { name: String },
    KeyValue { key: String, value: String },
    ListName { key: String },
    ListItem { value: String },
    Error { kind: ErrorKind },
}

/// One classified source line. Text is whitespace-squeezed but not yet
/// normalized to an identity; the parser applies the name mode.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Token {
    kind: TokenKind,
    line: usize,
}

fn tokenize(source: &str) -> Vec<Token> {
    retained_lines(strip_template_wrapper(source))
        .map(token_for_line)
        .collect()
}

fn token_for_line(line: Line<'_>) -> Token {
    let rest = line.text.trim_start();
    let indent = &line.text[..line.text.len() - rest.len()];

    // Tabs in the indent take priority over the width check.
    if indent.chars().any(|ch| ch != ' ') {
        return Token {
            kind: TokenKind::Error {
                kind: ErrorKind::BadIndentCharacters,
            },
            line: line.num,
        };
    }

    let kind = match indent_level(indent.len()) {
        Some(IndentLevel::Category) => TokenKind::Category {
            name: squeeze(line.text),
        },
        Some(IndentLevel::KeyOrList) => key_or_list(line.text),
        Some(IndentLevel::ListItem) => TokenKind::ListItem {
            value: squeeze(line.text),
        },
        None => TokenKind::Error {
            kind: ErrorKind::UnexpectedIndentLevel,
        },
    };
    Token {
        kind,
        line: line.num,
    }
}

/// Splits a 2-space-indented line at the first `" : "` separator, or at a
/// trailing `" :"` for an empty value. A colon without surrounding spaces
/// is literal text, so the line becomes a list name; so does any `" : "`
/// past the first, which stays inside the value.
fn key_or_list(text: &str) -> TokenKind {
    let trimmed = text.trim_end();
    if let Some(idx) = trimmed.find(" : ") {
        TokenKind::KeyValue {
            key: squeeze(&trimmed[..idx]),
            value: squeeze(&trimmed[idx + 3..]),
        }
    } else if let Some(key) = trimmed.strip_suffix(" :") {
        TokenKind::KeyValue {
            key: squeeze(key),
            value: String::new(),
        }
    } else {
        TokenKind::ListName {
            key: squeeze(trimmed),
        }
    }
}

/// Parser-local cursor into the document being built. Holds the keys of
/// the current category and open list rather than references into the
/// document, so growing the document never invalidates it.
#[derive(Debug)]
struct CategoryState {
    name: String,
    open_list: Option<String>,
}

#[derive(Debug)]
pub(crate) struct Parser {
    mode: NameMode,
    reporter: Reporter,
    data: IndexMap<String, Map>,
    current: Option<CategoryState>,
}

impl Parser {
    pub(crate) fn new(options: ParseOptions, strict: bool) -> Self {
        Parser {
            mode: options.name_mode(),
            reporter: Reporter::new(strict),
            data: IndexMap::new(),
            current: None,
        }
    }

    pub(crate) fn run(&mut self, source: &str) -> Result<()> {
        for token in tokenize(source) {
            self.parse_token(token)?;
        }
        Ok(())
    }

    pub(crate) fn into_doc(self) -> IndentalDoc {
        IndentalDoc {
            data: self.data,
            diagnostics: self.reporter.into_diagnostics(),
        }
    }

    fn parse_token(&mut self, token: Token) -> Result<()> {
        match token.kind {
            TokenKind::Category { name } => self.parse_category(&name, token.line),
            TokenKind::KeyValue { key, value } => self.parse_key_value(&key, value, token.line),
            TokenKind::ListName { key } => self.parse_list_name(&key, token.line),
            TokenKind::ListItem { value } => self.parse_list_item(value, token.line),
            TokenKind::Error { kind } => self.reporter.report(kind, token.line),
        }
    }

    fn parse_category(&mut self, name: &str, line: usize) -> Result<()> {
        let name = normalize_name(name, self.mode);
        if self.data.contains_key(&name) {
            // Orphan subsequent indented lines until the next header.
            self.current = None;
            return self.reporter.report(ErrorKind::DuplicateCategory, line);
        }
        self.data.insert(name.clone(), Map::new());
        self.current = Some(CategoryState {
            name,
            open_list: None,
        });
        Ok(())
    }

    fn parse_key_value(&mut self, key: &str, value: String, line: usize) -> Result<()> {
        let key = normalize_name(key, self.mode);
        let Some(current) = self.current.as_mut() else {
            return self.reporter.report(ErrorKind::NoCategorySpecified, line);
        };
        let Some(body) = self.data.get_mut(&current.name) else {
            return Ok(());
        };
        if body.contains_key(&key) {
            current.open_list = None;
            return self.reporter.report(ErrorKind::DuplicateKey, line);
        }
        body.insert(key, Value::Scalar(value));
        current.open_list = None;
        Ok(())
    }

    fn parse_list_name(&mut self, key: &str, line: usize) -> Result<()> {
        let key = normalize_name(key, self.mode);
        let Some(current) = self.current.as_mut() else {
            return self.reporter.report(ErrorKind::NoCategorySpecified, line);
        };
        let Some(body) = self.data.get_mut(&current.name) else {
            return Ok(());
        };
        if body.contains_key(&key) {
            current.open_list = None;
            return self.reporter.report(ErrorKind::DuplicateKeyForList, line);
        }
        body.insert(key.clone(), Value::List(Vec::new()));
        current.open_list = Some(key);
        Ok(())
    }

    fn parse_list_item(&mut self, value: String, line: usize) -> Result<()> {
        match &self.current {
            Some(CategoryState {
                name,
                open_list: Some(list_key),
            }) => {
                if let Some(list) = self
                    .data
                    .get_mut(name)
                    .and_then(|body| body.get_mut(list_key))
                {
                    list.push_item(value);
                }
                Ok(())
            }
            _ => self.reporter.report(ErrorKind::NoListSpecified, line),
        }
    }
}

/// A parsed Indental document: an insertion-ordered mapping of category
/// names to key-value bodies, plus the diagnostics collected while
/// parsing.
///
/// # Examples
///
/// ```rust
/// use textdb::parse_indental;
///
/// let doc = parse_indental("NAME\n  KEY : VALUE\n  LIST\n    ITEM1\n    ITEM2\n");
///
/// assert!(doc.is_valid());
/// assert_eq!(doc.categories(), vec!["NAME"]);
///
/// let body = doc.get("NAME").unwrap();
/// assert_eq!(body.get_str("KEY"), Some("VALUE"));
/// assert_eq!(
///     body.get_list("LIST"),
///     Some(&["ITEM1".to_string(), "ITEM2".to_string()][..]),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IndentalDoc {
    data: IndexMap<String, Map>,
    diagnostics: Vec<Diagnostic>,
}

impl IndentalDoc {
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

    /// The category names, in source order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        self.data.keys().map(String::as_str).collect()
    }

    /// The body of the named category, if present. The name must already
    /// be normalized (`"NAME"`, or `"name"` with symbolized names).
    #[must_use]
    pub fn get(&self, category: &str) -> Option<&Map> {
        self.data.get(category)
    }

    /// The number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the document has no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The categories and their bodies, in source order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Map> {
        self.data.iter()
    }

    /// Consumes the document, returning the underlying map.
    #[must_use]
    pub fn into_inner(self) -> IndexMap<String, Map> {
        self.data
    }
}

impl<'a> IntoIterator for &'a IndentalDoc {
    type Item = (&'a String, &'a Map);
    type IntoIter = indexmap::map::Iter<'a, String, Map>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for IndentalDoc {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.data.serialize(serializer)
    }
}

pub(crate) fn parse(source: &str, options: ParseOptions) -> IndentalDoc {
    let mut parser = Parser::new(options, false);
    // A permissive reporter never aborts.
    let _ = parser.run(source);
    parser.into_doc()
}

pub(crate) fn parse_strict(source: &str, options: ParseOptions) -> Result<IndentalDoc> {
    let mut parser = Parser::new(options, true);
    parser.run(source)?;
    Ok(parser.into_doc())
}
