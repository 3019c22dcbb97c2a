//! Tag content splitting and attribute scanning.

use std::mem;

use trellis_dom::AttributesMap;

/// A tag's content (the text between `<` and `>`), taken apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagParts<'a> {
    /// Everything up to the first whitespace.
    pub name: &'a str,
    /// The rest, trimmed, without a trailing `/`.
    pub attributes: &'a str,
    /// Whether the content ended with `/`.
    pub self_closing: bool,
}

/// Split tag content such as `img src="a.png" /` into its parts.
#[must_use]
pub fn split_tag(content: &str) -> TagParts<'_> {
    let trimmed = content.trim();
    let (body, self_closing) = match trimmed.strip_suffix('/') {
        Some(rest) => (rest.trim_end(), true),
        None => (trimmed, false),
    };
    match body.find(|c: char| c.is_ascii_whitespace()) {
        Some(split) => TagParts {
            name: &body[..split],
            attributes: body[split..].trim(),
            self_closing,
        },
        None => TagParts {
            name: body,
            attributes: "",
            self_closing,
        },
    }
}

/// Keys that are dropped instead of stored.
fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && key != "/"
}

fn insert(attrs: &mut AttributesMap, key: String, value: String) {
    if is_valid_key(&key) {
        let _ = attrs.insert(key, value);
    }
}

/// Scan an attribute string such as `class="a b" disabled id=main`.
///
/// - `name="value"` and `name='value'`: the quoted span may hold whitespace.
/// - `name=value`: the value runs to the next whitespace.
/// - `name`: a boolean attribute, stored with an empty value.
/// - Whitespace around `=` is allowed.
/// - An unterminated quote takes the rest of the input.
/// - Empty keys and a lone `/` are dropped; a repeated key keeps its last value.
#[must_use]
pub fn parse_attributes(input: &str) -> AttributesMap {
    let mut attrs = AttributesMap::new();
    // Key being read, or an unquoted value once `=` was seen.
    let mut current = String::new();
    let mut pending_key: Option<String> = None;
    let mut quote: Option<char> = None;
    // A bare name just stored as boolean; `=` after whitespace reclaims it.
    let mut last_boolean: Option<String> = None;

    for c in input.chars() {
        if let Some(open) = quote {
            if c == open {
                quote = None;
                let key = pending_key.take().unwrap_or_default();
                insert(&mut attrs, key, mem::take(&mut current));
            } else {
                current.push(c);
            }
            continue;
        }

        match c {
            '=' if pending_key.is_none() => {
                let key = if current.is_empty() {
                    last_boolean.take().map_or_else(String::new, |key| {
                        let _ = attrs.remove(&key);
                        key
                    })
                } else {
                    mem::take(&mut current)
                };
                pending_key = Some(key);
            }
            '"' | '\'' if current.is_empty() => {
                quote = Some(c);
                last_boolean = None;
            }
            c if c.is_ascii_whitespace() => match pending_key.take() {
                None => {
                    let key = mem::take(&mut current);
                    if is_valid_key(&key) {
                        last_boolean = Some(key.clone());
                        let _ = attrs.insert(key, String::new());
                    }
                }
                // `name = "value"`: still waiting for the value.
                Some(key) if current.is_empty() => pending_key = Some(key),
                Some(key) => insert(&mut attrs, key, mem::take(&mut current)),
            },
            _ => {
                current.push(c);
                last_boolean = None;
            }
        }
    }

    match pending_key {
        Some(key) => insert(&mut attrs, key, current),
        // A quoted span with no name in front of it.
        None if quote.is_some() => {}
        None => insert(&mut attrs, current, String::new()),
    }
    attrs
}
