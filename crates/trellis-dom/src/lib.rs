//! Node tree for the trellis markup engine.
//!
//! # Design
//!
//! Every node owns its children outright (`Vec<Node>`), so the tree has no
//! parent pointers, no shared nodes and no reference counting. The node
//! kinds are variants of a single [`Node`] enum; operations that make no
//! sense for a kind (appending a child to a `<br/>`, setting the text of a
//! doctype) are ignored and report `false` instead of failing.

use std::collections::BTreeMap;

use serde::Serialize;
use strum_macros::{Display, EnumIter};

mod dump;
mod serialize;

pub use dump::{print_tree, write_tree};
pub use serialize::{serialize, serialize_forest};

/// Map of attribute names to values for an element.
///
/// A `BTreeMap`, so attributes always serialize in key-sorted order.
pub type AttributesMap = BTreeMap<String, String>;

/// Elements that never have content and never take a closing tag.
///
/// Any other tag becomes void only when written with a trailing `/>`.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Whether `tag_name` is in [`VOID_ELEMENTS`]. Expects a lowercase name.
#[must_use]
pub fn is_void_element(tag_name: &str) -> bool {
    VOID_ELEMENTS.contains(&tag_name)
}

/// Discriminant of a [`Node`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum NodeKind {
    /// A regular element with text and children.
    Element,
    /// A self-closing element.
    Void,
    /// A `<!DOCTYPE ...>` declaration.
    Doctype,
    /// A tagless container.
    Fragment,
    /// A run of character data.
    Text,
}

impl NodeKind {
    /// Whether nodes of this kind can hold children.
    #[must_use]
    pub const fn accepts_children(self) -> bool {
        matches!(self, Self::Element | Self::Fragment)
    }

    /// Whether nodes of this kind have settable text.
    #[must_use]
    pub const fn accepts_text(self) -> bool {
        matches!(self, Self::Element | Self::Text)
    }

    /// Whether nodes of this kind carry attributes.
    #[must_use]
    pub const fn has_attributes(self) -> bool {
        matches!(self, Self::Element | Self::Void)
    }
}

/// Payload of a regular element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ElementData {
    /// Lowercase tag name, never empty.
    pub tag_name: String,
    /// Attribute list; boolean attributes have an empty value.
    pub attrs: AttributesMap,
    /// Text set on the element itself, rendered before the children.
    pub text: String,
    /// Owned children in document order.
    pub children: Vec<Node>,
}

impl ElementData {
    /// Create an element with no attributes, text or children.
    #[must_use]
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            ..Self::default()
        }
    }

    /// Create an element with the given attributes.
    #[must_use]
    pub fn with_attrs(tag_name: impl Into<String>, attrs: AttributesMap) -> Self {
        Self {
            tag_name: tag_name.into(),
            attrs,
            ..Self::default()
        }
    }
}

/// Payload of a void element: a name and attributes, nothing else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VoidData {
    /// Lowercase tag name.
    pub tag_name: String,
    /// Attribute list; boolean attributes have an empty value.
    pub attrs: AttributesMap,
}

impl VoidData {
    /// Create a void element with the given attributes.
    #[must_use]
    pub fn new(tag_name: impl Into<String>, attrs: AttributesMap) -> Self {
        Self {
            tag_name: tag_name.into(),
            attrs,
        }
    }
}

/// A node of the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// `<tag attrs>text children</tag>`
    Element(ElementData),
    /// `<tag attrs/>`
    Void(VoidData),
    /// `<!DOCTYPE value>`
    Doctype {
        /// Everything between `<!DOCTYPE` and `>`, e.g. `html`.
        value: String,
    },
    /// Children rendered back to back, with no tag of its own.
    Fragment {
        /// Owned children in document order.
        children: Vec<Node>,
    },
    /// Character data, rendered verbatim.
    Text {
        /// The text itself.
        data: String,
    },
}

impl Node {
    /// A regular element with no attributes.
    #[must_use]
    pub fn new_element(tag_name: impl Into<String>) -> Self {
        Self::Element(ElementData::new(tag_name))
    }

    /// A void element with no attributes.
    #[must_use]
    pub fn new_void(tag_name: impl Into<String>) -> Self {
        Self::Void(VoidData::new(tag_name, AttributesMap::new()))
    }

    /// A doctype declaration.
    #[must_use]
    pub fn new_doctype(value: impl Into<String>) -> Self {
        Self::Doctype {
            value: value.into(),
        }
    }

    /// An empty fragment.
    #[must_use]
    pub const fn new_fragment() -> Self {
        Self::Fragment {
            children: Vec::new(),
        }
    }

    /// A text node.
    #[must_use]
    pub fn new_text(data: impl Into<String>) -> Self {
        Self::Text { data: data.into() }
    }

    /// The kind of this node.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Element(_) => NodeKind::Element,
            Self::Void(_) => NodeKind::Void,
            Self::Doctype { .. } => NodeKind::Doctype,
            Self::Fragment { .. } => NodeKind::Fragment,
            Self::Text { .. } => NodeKind::Text,
        }
    }

    /// Tag name of an element or void element.
    #[must_use]
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Self::Element(data) => Some(&data.tag_name),
            Self::Void(data) => Some(&data.tag_name),
            _ => None,
        }
    }

    /// Attributes of an element or void element.
    #[must_use]
    pub const fn attrs(&self) -> Option<&AttributesMap> {
        match self {
            Self::Element(data) => Some(&data.attrs),
            Self::Void(data) => Some(&data.attrs),
            _ => None,
        }
    }

    /// Mutable attributes of an element or void element.
    pub const fn attrs_mut(&mut self) -> Option<&mut AttributesMap> {
        match self {
            Self::Element(data) => Some(&mut data.attrs),
            Self::Void(data) => Some(&mut data.attrs),
            _ => None,
        }
    }

    /// Value of the attribute `name`, if present.
    #[must_use]
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attrs()?.get(name).map(String::as_str)
    }

    /// Set an attribute, replacing any previous value.
    ///
    /// Returns `false` (and does nothing) for kinds without attributes.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) -> bool {
        match self.attrs_mut() {
            Some(attrs) => {
                let _ = attrs.insert(name.into(), value.into());
                true
            }
            None => false,
        }
    }

    /// The node's own text: an element's text or a text node's data.
    ///
    /// Empty for every other kind. See [`Node::text_content`] for the text of
    /// a whole subtree.
    #[must_use]
    pub fn text(&self) -> &str {
        self.text_ref().map_or("", String::as_str)
    }

    const fn text_ref(&self) -> Option<&String> {
        match self {
            Self::Element(data) => Some(&data.text),
            Self::Text { data } => Some(data),
            _ => None,
        }
    }

    /// Mutable text of an element or text node.
    pub const fn text_mut(&mut self) -> Option<&mut String> {
        match self {
            Self::Element(data) => Some(&mut data.text),
            Self::Text { data } => Some(data),
            _ => None,
        }
    }

    /// Replace the node's own text.
    ///
    /// Returns `false` (and does nothing) for void, doctype and fragment nodes.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        match self.text_mut() {
            Some(slot) => {
                *slot = text.into();
                true
            }
            None => false,
        }
    }

    /// The node's own text followed by the text content of each child.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        out.push_str(self.text());
        for child in self.children() {
            child.collect_text(out);
        }
    }

    /// Children of an element or fragment; empty for every other kind.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Element(data) => &data.children,
            Self::Fragment { children } => children,
            _ => &[],
        }
    }

    /// Mutable children of an element or fragment; empty for every other kind.
    pub fn children_mut(&mut self) -> &mut [Self] {
        match self {
            Self::Element(data) => &mut data.children,
            Self::Fragment { children } => children,
            _ => &mut [],
        }
    }

    /// Append `child` as the last child.
    ///
    /// Returns `false` (and drops `child`) for kinds that cannot hold children.
    pub fn append_child(&mut self, child: Self) -> bool {
        match self {
            Self::Element(data) => {
                data.children.push(child);
                true
            }
            Self::Fragment { children } => {
                children.push(child);
                true
            }
            _ => false,
        }
    }

    /// Deep copy of this node and its whole subtree.
    ///
    /// The copy shares nothing with `self`: attributes, text and every
    /// descendant are owned anew, so one parsed template can be rendered many
    /// times with different parameters.
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }
}

impl From<ElementData> for Node {
    fn from(data: ElementData) -> Self {
        Self::Element(data)
    }
}

impl From<VoidData> for Node {
    fn from(data: VoidData) -> Self {
        Self::Void(data)
    }
}

impl FromIterator<Node> for Node {
    /// Collect nodes into a fragment.
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self::Fragment {
            children: iter.into_iter().collect(),
        }
    }
}
