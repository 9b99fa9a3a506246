//! Shared line handling for both parsers.
//!
//! Splits raw source text into `(text, 1-based line number)` pairs,
//! discards blank and comment lines without disturbing the numbering of
//! the lines that follow, and strips the optional template wrapper that
//! lets a document live inside a host-script assignment:
//!
//! ```text
//! const doc = `
//! NAME
//!   KEY : VALUE
//! `
//! ```
//!
//! When the whole input is such a backtick-quoted assignment, the first and
//! last lines are removed and the interior is parsed on its own, with line
//! numbering restarting at 1 inside the wrapper. Anything short of a
//! well-formed wrapper leaves the input untouched.

/// One retained source line, with its original 1-based number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Line<'a> {
    pub(crate) text: &'a str,
    pub(crate) num: usize,
}

/// Splits the source into numbered lines, dropping blank and comment
/// lines. Dropped lines still count towards the numbering of later lines.
pub(crate) fn retained_lines(source: &str) -> impl Iterator<Item = Line<'_>> {
    source
        .split('\n')
        .enumerate()
        .map(|(idx, text)| Line {
            text,
            num: idx + 1,
        })
        .filter(|line| !is_blank_or_comment(line.text))
}

/// A line is dropped when it is whitespace-only, optionally followed by a
/// `;` comment.
pub(crate) fn is_blank_or_comment(line: &str) -> bool {
    let rest = line.trim_start();
    rest.is_empty() || rest.starts_with(';')
}

/// Strips a backtick-quoted template assignment wrapping the entire input,
/// returning the interior lines. Returns the input unchanged if either
/// delimiter line is missing or malformed.
pub(crate) fn strip_template_wrapper(source: &str) -> &str {
    template_interior(source).unwrap_or(source)
}

fn template_interior(source: &str) -> Option<&str> {
    let first_nl = source.find('\n')?;

    // Opening line: `<ident> = ` with only blanks after the backtick.
    let head = source[..first_nl].trim_end();
    let head = head.strip_suffix('`')?.trim_end();
    let head = head.strip_suffix('=')?;
    if head.trim().is_empty() || head.contains('`') {
        return None;
    }

    // Closing line: a lone backtick, surrounded by whitespace only.
    let rest = &source[first_nl + 1..];
    let trimmed = rest.trim_end();
    let tail_start = trimmed.rfind('\n')?;
    if trimmed[tail_start + 1..].trim() != "`" {
        return None;
    }

    Some(&rest[..tail_start + 1])
}
