//! Markup parser for the trellis engine.
//!
//! # Scope
//!
//! This crate turns an HTML-like string into a forest of [`Node`]s:
//!
//! - **Preprocessor** ([`preprocess`]): strips comments, lowercases tag
//!   names, removes line breaks and cuts out the doctype.
//! - **Tree builder** ([`builder`]): recursive descent over the cleaned
//!   text, with void/self-closing elements and lenient recovery from missing
//!   and stray closing tags.
//! - **Attribute scanner** ([`attributes`]).
//!
//! # Not Implemented
//!
//! - Character references (`&amp;` stays as written)
//! - Raw-text elements (`<script>`, `<style>` content is parsed as markup)
//! - Encoding detection; input is already a decoded `&str`
//!
//! # Limits
//!
//! The tree builder recurses once per open element. Nesting beyond
//! [`ParseOptions::max_depth`] fails with [`ParseError::NestingTooDeep`].

pub mod attributes;
pub mod builder;
mod error;
mod options;
pub mod preprocess;

pub use attributes::{parse_attributes, split_tag};
pub use builder::{Stop, TreeBuilder};
pub use error::ParseError;
pub use options::{DEFAULT_MAX_DEPTH, ParseOptions};
pub use preprocess::{Preprocessed, preprocess};

use trellis_dom::Node;

/// Parse `text` into a forest with the default [`ParseOptions`].
///
/// A doctype, if present, becomes the first root.
///
/// # Errors
///
/// Returns a [`ParseError`] for unterminated comments or tags and for
/// closing tags inside an element that match no open element.
///
/// # Example
/// ```
/// let forest = trellis_html::parse("<div><p>Hi</p></div>").unwrap();
/// assert_eq!(forest[0].tag_name(), Some("div"));
/// assert_eq!(forest[0].text_content(), "Hi");
/// ```
pub fn parse(text: &str) -> Result<Vec<Node>, ParseError> {
    parse_with_options(text, &ParseOptions::default())
}

/// Parse `text` into a forest.
///
/// # Errors
///
/// See [`parse`]; additionally [`ParseError::NestingTooDeep`].
pub fn parse_with_options(text: &str, options: &ParseOptions) -> Result<Vec<Node>, ParseError> {
    let Preprocessed { text, doctype } = preprocess(text)?;
    let mut forest = Vec::new();
    if let Some(value) = doctype {
        forest.push(Node::new_doctype(value));
    }
    forest.extend(TreeBuilder::new(&text, *options).build()?);
    Ok(forest)
}

/// Parse `text` into a single fragment node holding the whole forest.
///
/// # Errors
///
/// See [`parse`].
pub fn parse_document(text: &str) -> Result<Node, ParseError> {
    Ok(parse(text)?.into_iter().collect())
}
