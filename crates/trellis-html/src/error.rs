use thiserror::Error;

/// Structural problems that abort a parse.
///
/// Incomplete markup is not an error: missing closing tags, whitespace-only
/// text, end tags with nothing open and end tags of void elements are
/// recovered from and reported through
/// [`trellis_common::warning::warn_once`]. Only the cases below leave the
/// parser unable to build a tree, and none of them yields a partial one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A `<!--` with no `-->` after it.
    #[error("unterminated comment starting at byte {offset}")]
    UnterminatedComment {
        /// Byte offset of the `<!--` in the raw input.
        offset: usize,
    },
    /// A `<` with no `>` after it.
    #[error("unterminated tag starting at byte {offset}")]
    UnterminatedTag {
        /// Byte offset of the `<` in the preprocessed text.
        offset: usize,
    },
    /// A closing tag that matches neither the current element nor any
    /// element still open around it.
    #[error("mismatched closing tag: expected </{expected}> but found </{found}> at byte {offset}")]
    MismatchedClosingTag {
        /// Name of the innermost open element.
        expected: String,
        /// Name written in the closing tag.
        found: String,
        /// Byte offset of the closing tag in the preprocessed text.
        offset: usize,
    },
    /// Elements nested deeper than [`crate::ParseOptions::max_depth`].
    #[error("elements nested deeper than {limit} levels")]
    NestingTooDeep {
        /// The configured limit.
        limit: usize,
    },
}
