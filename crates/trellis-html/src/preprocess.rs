//! Text clean-up performed before tree construction.
//!
//! Each step takes the whole buffer and returns a new one; the caller's
//! input is never modified. [`preprocess`] runs them in this order:
//!
//! 1. [`remove_comments`]
//! 2. [`lowercase_tag_names`]
//! 3. [`remove_line_breaks`]
//! 4. [`extract_doctype`]

use crate::ParseError;

/// Output of [`preprocess`]: the text to build the tree from, and the
/// payload of the doctype that was cut out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preprocessed {
    /// Cleaned text, without comments, line breaks or the doctype.
    pub text: String,
    /// Payload of the first `<!doctype ...>`, e.g. `html`.
    pub doctype: Option<String>,
}

/// Run all preprocessing steps over `raw`.
///
/// # Errors
///
/// Returns [`ParseError::UnterminatedComment`] if a comment is never closed.
pub fn preprocess(raw: &str) -> Result<Preprocessed, ParseError> {
    let text = remove_comments(raw)?;
    let text = lowercase_tag_names(&text);
    let text = remove_line_breaks(&text);
    let (text, doctype) = extract_doctype(&text);
    Ok(Preprocessed { text, doctype })
}

/// Delete every `<!--...-->` span.
///
/// # Errors
///
/// Returns [`ParseError::UnterminatedComment`] with the offset of the first
/// `<!--` that has no `-->` after it.
pub fn remove_comments(input: &str) -> Result<String, ParseError> {
    const OPEN: &str = "<!--";
    const CLOSE: &str = "-->";

    let mut out = String::with_capacity(input.len());
    let mut pos = 0;
    while let Some(found) = input[pos..].find(OPEN) {
        let start = pos + found;
        let body = start + OPEN.len();
        let Some(len) = input[body..].find(CLOSE) else {
            return Err(ParseError::UnterminatedComment { offset: start });
        };
        out.push_str(&input[pos..start]);
        pos = body + len + CLOSE.len();
    }
    out.push_str(&input[pos..]);
    Ok(out)
}

/// Lowercase the name part of every `<...>` span.
///
/// The name runs up to the first whitespace or the closing `>`, so closing
/// tags (`</DIV>`) are covered while attribute names and values are left as
/// written. Only ASCII letters change. A `<` with no `>` after it stops the
/// pass; the tree builder reports it.
#[must_use]
pub fn lowercase_tag_names(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pos = 0;
    while let Some(found) = input[pos..].find('<') {
        let open = pos + found;
        let Some(len) = input[open..].find('>') else {
            break;
        };
        let close = open + len;
        let content = &input[open + 1..close];
        let name_len = content
            .find(|c: char| c.is_ascii_whitespace())
            .unwrap_or(content.len());

        out.push_str(&input[pos..=open]);
        out.push_str(&content[..name_len].to_ascii_lowercase());
        out.push_str(&input[open + 1 + name_len..=close]);
        pos = close + 1;
    }
    out.push_str(&input[pos..]);
    out
}

/// Delete `\n` and `\r` from text.
///
/// Inside a tag a line break separates attributes, so there it becomes a
/// single space instead.
#[must_use]
pub fn remove_line_breaks(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;
    for c in input.chars() {
        match c {
            '\n' | '\r' => {
                if in_tag && !out.ends_with(|prev: char| prev.is_ascii_whitespace()) {
                    out.push(' ');
                }
            }
            '<' => {
                in_tag = true;
                out.push(c);
            }
            '>' => {
                in_tag = false;
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Cut the first `<!doctype ...>` (any case) out of `input`.
///
/// Returns the remaining text and the trimmed payload. A doctype with no
/// closing `>` is left in place.
#[must_use]
pub fn extract_doctype(input: &str) -> (String, Option<String>) {
    const MARKER: &str = "<!doctype";

    // ASCII lowercasing keeps byte offsets identical.
    let Some(start) = input.to_ascii_lowercase().find(MARKER) else {
        return (input.to_string(), None);
    };
    let Some(len) = input[start..].find('>') else {
        return (input.to_string(), None);
    };
    let end = start + len;
    let payload = input[start + MARKER.len()..end].trim().to_string();

    let mut text = String::with_capacity(input.len() - len);
    text.push_str(&input[..start]);
    text.push_str(&input[end + 1..]);
    (text, Some(payload))
}
