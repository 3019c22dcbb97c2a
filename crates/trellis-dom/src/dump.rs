//! Indented debug dump of a node tree.

use std::fmt;

use crate::Node;

/// Write an indented outline of `node` and its subtree, one node per line.
///
/// # Errors
///
/// Returns an error only if `out` fails to accept the text.
pub fn write_tree(out: &mut impl fmt::Write, node: &Node, indent: usize) -> fmt::Result {
    let prefix = "  ".repeat(indent);
    match node {
        Node::Doctype { value } => writeln!(out, "{prefix}<!DOCTYPE {value}>")?,
        Node::Fragment { .. } => writeln!(out, "{prefix}#fragment")?,
        Node::Text { data } => {
            let display = data.replace('\n', "\\n").replace(' ', "\u{00B7}");
            writeln!(out, "{prefix}\"{display}\"")?;
        }
        Node::Void(data) => writeln!(
            out,
            "{prefix}<{}{}/>",
            data.tag_name,
            format_attrs(node)
        )?,
        Node::Element(data) => {
            writeln!(out, "{prefix}<{}{}>", data.tag_name, format_attrs(node))?;
            if !data.text.is_empty() {
                writeln!(out, "{prefix}  text: {:?}", data.text)?;
            }
        }
    }
    for child in node.children() {
        write_tree(out, child, indent + 1)?;
    }
    Ok(())
}

fn format_attrs(node: &Node) -> String {
    node.attrs()
        .into_iter()
        .flatten()
        .map(|(k, v)| {
            if v.is_empty() {
                format!(" {k}")
            } else {
                format!(" {k}=\"{v}\"")
            }
        })
        .collect()
}

/// Print the outline produced by [`write_tree`] to stdout.
pub fn print_tree(node: &Node, indent: usize) {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_tree(&mut out, node, indent);
    print!("{out}");
}
