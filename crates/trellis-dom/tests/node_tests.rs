//! Tests for the node model: kind rules, text content and deep copies.

use strum::IntoEnumIterator;
use trellis_dom::{AttributesMap, ElementData, Node, NodeKind, VoidData, is_void_element, serialize};

/// Helper to build one sample node of each kind.
fn sample(kind: NodeKind) -> Node {
    match kind {
        NodeKind::Element => Node::new_element("div"),
        NodeKind::Void => Node::new_void("br"),
        NodeKind::Doctype => Node::new_doctype("html"),
        NodeKind::Fragment => Node::new_fragment(),
        NodeKind::Text => Node::new_text("hello"),
    }
}

#[test]
fn test_kind_matches_variant() {
    for kind in NodeKind::iter() {
        assert_eq!(sample(kind).kind(), kind);
    }
}

#[test]
fn test_kind_display_is_lowercase() {
    assert_eq!(NodeKind::Element.to_string(), "element");
    assert_eq!(NodeKind::Void.to_string(), "void");
    assert_eq!(NodeKind::Doctype.to_string(), "doctype");
}

#[test]
fn test_append_child_respects_kind() {
    for kind in NodeKind::iter() {
        let mut node = sample(kind);
        let accepted = node.append_child(Node::new_text("x"));
        assert_eq!(accepted, kind.accepts_children(), "kind {kind}");
        assert_eq!(node.children().len(), usize::from(accepted));
    }
}

#[test]
fn test_void_and_doctype_ignore_children_and_text() {
    for mut node in [Node::new_void("img"), Node::new_doctype("html")] {
        let before = serialize(&node);
        assert!(!node.append_child(Node::new_element("p")));
        assert!(!node.set_text("ignored"));
        assert_eq!(serialize(&node), before);
        assert!(node.children().is_empty());
        assert_eq!(node.text(), "");
    }
}

#[test]
fn test_set_attribute_only_on_tagged_kinds() {
    for kind in NodeKind::iter() {
        let mut node = sample(kind);
        assert_eq!(node.set_attribute("id", "x"), kind.has_attributes());
        let expected = kind.has_attributes().then_some("x");
        assert_eq!(node.get_attribute("id"), expected);
    }
}

#[test]
fn test_set_attribute_last_write_wins() {
    let mut node = Node::new_element("a");
    assert!(node.set_attribute("href", "/one"));
    assert!(node.set_attribute("href", "/two"));
    assert_eq!(node.get_attribute("href"), Some("/two"));
    assert_eq!(node.attrs().map(AttributesMap::len), Some(1));
}

#[test]
fn test_text_content_concatenates_descendants() {
    let mut p = Node::new_element("p");
    assert!(p.append_child(Node::new_text("Hello ")));
    let mut b = Node::new_element("b");
    assert!(b.append_child(Node::new_text("World")));
    assert!(p.append_child(b));
    assert!(p.append_child(Node::new_void("br")));

    assert_eq!(p.text(), "");
    assert_eq!(p.text_content(), "Hello World");
}

#[test]
fn test_copy_is_independent() {
    let mut original = Node::Element(ElementData::with_attrs(
        "div",
        AttributesMap::from([("class".to_string(), "card".to_string())]),
    ));
    assert!(original.set_text("title"));
    assert!(original.append_child(Node::new_text("child")));

    let mut copy = original.copy();
    assert_eq!(copy, original);

    assert!(copy.set_text("changed"));
    assert!(copy.set_attribute("class", "other"));
    copy.children_mut()[0] = Node::new_text("replaced");

    assert_eq!(original.text(), "title");
    assert_eq!(original.get_attribute("class"), Some("card"));
    assert_eq!(original.children()[0].text(), "child");

    assert!(original.set_text("original changed"));
    assert_eq!(copy.text(), "changed");
}

#[test]
fn test_void_allow_list() {
    for tag in ["area", "br", "img", "input", "meta", "wbr"] {
        assert!(is_void_element(tag), "{tag}");
    }
    for tag in ["div", "p", "customtag", "BR"] {
        assert!(!is_void_element(tag), "{tag}");
    }
}

#[test]
fn test_collect_into_fragment() {
    let fragment: Node = vec![Node::new_text("a"), Node::from(VoidData::default())]
        .into_iter()
        .collect();
    assert_eq!(fragment.kind(), NodeKind::Fragment);
    assert_eq!(fragment.children().len(), 2);
}

#[test]
fn test_serde_json_is_tagged_by_kind() {
    let mut div = Node::new_element("div");
    assert!(div.append_child(Node::new_text("hi")));
    let json = serde_json::to_value(&div).expect("serializable");

    assert_eq!(json["type"], "element");
    assert_eq!(json["tag_name"], "div");
    assert_eq!(json["children"][0]["type"], "text");
    assert_eq!(json["children"][0]["data"], "hi");
}
