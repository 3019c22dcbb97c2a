//! Recursive-descent tree construction over preprocessed text.
//!
//! [`TreeBuilder::build_range`] scans a half-open byte range left to right.
//! Every opening tag recurses into the rest of the range, and the recursive
//! call hands back the children it built together with the place where it
//! stopped: either the end of the range or the closing tag that ended it.
//! The caller then decides whether that closing tag is its own, belongs to
//! an element further out, or matches nothing at all.

use trellis_common::warning::warn_once;
use trellis_dom::{ElementData, Node, VoidData, is_void_element};

use crate::attributes::{parse_attributes, split_tag};
use crate::{ParseError, ParseOptions};

/// Where a call to [`TreeBuilder::build_range`] stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stop<'a> {
    /// Ran off the end of the range without meeting a closing tag.
    End,
    /// Stopped at a closing tag, which is left unconsumed.
    Closing {
        /// The tag name, e.g. `div` for `</div>`.
        name: &'a str,
        /// Offset of the `<`.
        at: usize,
        /// Offset just past the `>`.
        after: usize,
    },
}

/// Builds a node forest from preprocessed text.
pub struct TreeBuilder<'a> {
    input: &'a str,
    options: ParseOptions,
    /// Names of the elements currently open around the scan position.
    open_elements: Vec<&'a str>,
}

impl<'a> TreeBuilder<'a> {
    /// Create a builder over already preprocessed text.
    #[must_use]
    pub const fn new(input: &'a str, options: ParseOptions) -> Self {
        Self {
            input,
            options,
            open_elements: Vec::new(),
        }
    }

    /// Build the whole input as a top-level forest.
    ///
    /// A closing tag at the top level has nothing to close; it is dropped
    /// with a warning and the scan resumes after it.
    ///
    /// # Errors
    ///
    /// Any [`ParseError`] raised by [`TreeBuilder::build_range`].
    pub fn build(mut self) -> Result<Vec<Node>, ParseError> {
        let mut forest = Vec::new();
        let mut pos = 0;
        loop {
            let (nodes, stop) = self.build_range(pos, self.input.len())?;
            forest.extend(nodes);
            match stop {
                Stop::End => return Ok(forest),
                Stop::Closing { name, after, .. } => {
                    warn_once("HTML", &format!("ignored end tag </{name}> with no open element"));
                    pos = after;
                }
            }
        }
    }

    /// Build the nodes found in `input[start..end]`.
    ///
    /// Both offsets must lie on character boundaries.
    ///
    /// # Errors
    ///
    /// - [`ParseError::UnterminatedTag`] for a `<` with no `>` before `end`.
    /// - [`ParseError::MismatchedClosingTag`] for a closing tag that matches no
    ///   open element.
    /// - [`ParseError::NestingTooDeep`] past [`ParseOptions::max_depth`].
    pub fn build_range(
        &mut self,
        start: usize,
        end: usize,
    ) -> Result<(Vec<Node>, Stop<'a>), ParseError> {
        let input = self.input;
        let mut forest = Vec::new();
        let mut pos = start;

        while pos < end {
            let Some(open) = input[pos..end].find('<').map(|i| pos + i) else {
                push_text(&mut forest, &input[pos..end]);
                break;
            };
            push_text(&mut forest, &input[pos..open]);

            let close = input[open..end]
                .find('>')
                .map(|i| open + i)
                .ok_or(ParseError::UnterminatedTag { offset: open })?;
            let content = &input[open + 1..close];
            let after = close + 1;

            if content.trim().is_empty() {
                warn_once("HTML", "skipped empty tag <>");
                pos = after;
                continue;
            }

            if let Some(closing) = content.strip_prefix('/') {
                let name = match closing.split_ascii_whitespace().next() {
                    Some(name) => name,
                    // `</>` closes whatever is open.
                    None => self.open_elements.last().copied().unwrap_or_default(),
                };
                if is_void_element(name) {
                    // Void elements never own a closing tag.
                    warn_once("HTML", &format!("ignored end tag </{name}> of a void element"));
                    pos = after;
                    continue;
                }
                return Ok((forest, Stop::Closing { name, at: open, after }));
            }

            if content.starts_with('!') || content.starts_with('?') {
                warn_once("HTML", &format!("ignored declaration <{content}>"));
                pos = after;
                continue;
            }

            let tag = split_tag(content);
            if tag.name.is_empty() {
                warn_once("HTML", &format!("skipped tag without a name <{content}>"));
                pos = after;
                continue;
            }
            let attrs = parse_attributes(tag.attributes);

            if tag.self_closing || is_void_element(tag.name) {
                forest.push(Node::Void(VoidData::new(tag.name, attrs)));
                pos = after;
                continue;
            }

            if self.open_elements.len() >= self.options.max_depth {
                return Err(ParseError::NestingTooDeep {
                    limit: self.options.max_depth,
                });
            }
            self.open_elements.push(tag.name);
            let built = self.build_range(after, end);
            let _ = self.open_elements.pop();
            let (children, stop) = built?;

            let mut element = ElementData::with_attrs(tag.name, attrs);
            element.children = children;
            forest.push(Node::Element(element));

            match stop {
                Stop::End => {
                    warn_once("HTML", &format!("implicitly closed <{}> at end of input", tag.name));
                    pos = end;
                }
                Stop::Closing { name, after, .. } if name == tag.name => pos = after,
                Stop::Closing { name, at, .. } => {
                    if self.open_elements.contains(&name) {
                        warn_once(
                            "HTML",
                            &format!("implicitly closed <{}> before </{name}>", tag.name),
                        );
                        return Ok((forest, stop));
                    }
                    return Err(ParseError::MismatchedClosingTag {
                        expected: tag.name.to_string(),
                        found: name.to_string(),
                        offset: at,
                    });
                }
            }
        }

        Ok((forest, Stop::End))
    }
}

/// Append `text` as a text node unless it is whitespace only.
fn push_text(forest: &mut Vec<Node>, text: &str) {
    if !text.trim().is_empty() {
        forest.push(Node::new_text(text));
    }
}
