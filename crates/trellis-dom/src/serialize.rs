//! Rendering a node tree back to markup.
//!
//! The output is newline-padded rather than minified. Only the structure
//! (tag nesting, attributes, text) survives a serialize/parse round trip;
//! whitespace does not.

use std::fmt;

use crate::{AttributesMap, Node};

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Doctype { value } => write!(f, "<!DOCTYPE {value}>"),
            Self::Fragment { children } => {
                for child in children {
                    write!(f, "{child}")?;
                }
                Ok(())
            }
            Self::Text { data } => f.write_str(data),
            Self::Void(data) => {
                write!(f, "<{}", data.tag_name)?;
                write_attrs(f, &data.attrs)?;
                f.write_str("/>")
            }
            Self::Element(data) => {
                write!(f, "<{}", data.tag_name)?;
                write_attrs(f, &data.attrs)?;
                write!(f, ">\n{}\n", data.text)?;
                for child in &data.children {
                    write!(f, "{child}")?;
                }
                writeln!(f, "</{}>", data.tag_name)
            }
        }
    }
}

/// ` name` for boolean attributes, ` name="value"` otherwise.
///
/// A value containing `"` is wrapped in single quotes instead, and one
/// containing both quote characters is written unquoted. Markup has no
/// escapes, so an unquoted value only reads back when it has no whitespace,
/// does not start with a quote and does not end with `/`.
fn write_attrs(f: &mut fmt::Formatter<'_>, attrs: &AttributesMap) -> fmt::Result {
    for (name, value) in attrs {
        if value.is_empty() {
            write!(f, " {name}")?;
        } else if !value.contains('"') {
            write!(f, " {name}=\"{value}\"")?;
        } else if !value.contains('\'') {
            write!(f, " {name}='{value}'")?;
        } else {
            write!(f, " {name}={value}")?;
        }
    }
    Ok(())
}

/// Serialize a single node and its subtree.
#[must_use]
pub fn serialize(node: &Node) -> String {
    node.to_string()
}

/// Serialize a forest: each root in order, concatenated.
#[must_use]
pub fn serialize_forest(nodes: &[Node]) -> String {
    nodes.iter().map(ToString::to_string).collect()
}
