//! Tests for placeholder substitution over strings and trees.

use quickcheck_macros::quickcheck;
use trellis_common::warning::set_quiet;
use trellis_dom::{Node, serialize_forest};
use trellis_template::{Params, render, render_forest, substitute, substitute_recursive};

fn params(pairs: &[(&str, &str)]) -> Params {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

fn parse(html: &str) -> Vec<Node> {
    set_quiet(true);
    trellis_html::parse(html).expect("template parses")
}

// ========== substitute ==========

#[test]
fn test_basic_replacement() {
    assert_eq!(
        substitute("Hello {{name}}!", &params(&[("name", "World")])),
        "Hello World!"
    );
}

#[test]
fn test_missing_placeholder_left_verbatim() {
    assert_eq!(substitute("{{missing}}", &Params::new()), "{{missing}}");
    assert_eq!(
        substitute("{{a}} and {{b}}", &params(&[("a", "1")])),
        "1 and {{b}}"
    );
}

#[test]
fn test_every_occurrence_replaced() {
    assert_eq!(
        substitute("{{x}}-{{x}}-{{x}}", &params(&[("x", "ab")])),
        "ab-ab-ab"
    );
}

#[test]
fn test_multiple_keys() {
    assert_eq!(
        substitute(
            "{{greeting}}, {{name}}.",
            &params(&[("greeting", "Hi"), ("name", "Ada")])
        ),
        "Hi, Ada."
    );
}

#[test]
fn test_inserted_text_not_rescanned() {
    let p = params(&[("a", "{{b}}"), ("b", "boom"), ("self", "{{self}}")]);
    assert_eq!(substitute("{{a}}", &p), "{{b}}");
    assert_eq!(substitute("{{self}}{{self}}", &p), "{{self}}{{self}}");
}

#[test]
fn test_extra_braces_around_placeholder() {
    let p = params(&[("name", "World")]);
    assert_eq!(substitute("{{{name}}}", &p), "{World}");
    assert_eq!(substitute("{{ {{name}}", &p), "{{ World");
}

#[test]
fn test_unclosed_and_empty_placeholders() {
    let p = params(&[("name", "World")]);
    assert_eq!(substitute("{{name", &p), "{{name");
    assert_eq!(substitute("{{}}", &p), "{{}}");
    assert_eq!(substitute("{{}}", &params(&[("", "empty")])), "empty");
}

#[test]
fn test_key_containing_closing_braces() {
    assert_eq!(substitute("[{{a}}b}}]", &params(&[("a}}b", "X")])), "[X]");
    // Both `{{a}}` and `{{a}}b}}` start at the same brace: the longer wins.
    let p = params(&[("a", "short"), ("a}}b", "long")]);
    assert_eq!(substitute("{{a}}b}} {{a}}", &p), "long short");
}

#[test]
fn test_multibyte_text() {
    let p = params(&[("who", "wörld")]);
    assert_eq!(substitute("héllo {{who}} ✓", &p), "héllo wörld ✓");
}

// ========== substitute_recursive ==========

#[test]
fn test_recursive_text_and_attributes() {
    let mut forest = parse(r#"<a href="/u/{{id}}" title="{{name}}">{{name}}<img alt="{{name}}"></a>"#);
    let p = params(&[("id", "42"), ("name", "Ada")]);
    substitute_recursive(&mut forest[0], &p);

    let a = &forest[0];
    assert_eq!(a.get_attribute("href"), Some("/u/42"));
    assert_eq!(a.get_attribute("title"), Some("Ada"));
    assert_eq!(a.text_content(), "Ada");
    assert_eq!(a.children()[1].get_attribute("alt"), Some("Ada"));
}

#[test]
fn test_recursive_element_text_and_doctype() {
    let mut div = Node::new_element("div");
    assert!(div.set_text("{{t}}"));
    let mut doc: Node = [Node::new_doctype("{{t}}"), div].into_iter().collect();
    substitute_recursive(&mut doc, &params(&[("t", "x")]));

    assert_eq!(doc.children()[0], Node::new_doctype("{{t}}"));
    assert_eq!(doc.children()[1].text(), "x");
}

// ========== render ==========

#[test]
fn test_render_leaves_template_untouched() {
    let template = parse("<p class=\"{{kind}}\">Hello {{name}}</p>");
    let first = render(&template[0], &params(&[("kind", "a"), ("name", "Ada")]));
    let second = render(&template[0], &params(&[("kind", "b"), ("name", "Bob")]));

    assert_eq!(first.text_content(), "Hello Ada");
    assert_eq!(second.text_content(), "Hello Bob");
    assert_eq!(first.get_attribute("class"), Some("a"));
    assert_eq!(second.get_attribute("class"), Some("b"));
    assert_eq!(template[0].text_content(), "Hello {{name}}");
    assert_eq!(template[0].get_attribute("class"), Some("{{kind}}"));
}

#[test]
fn test_substituting_copy_does_not_touch_original() {
    let original = parse("<h1>{{title}}</h1>").remove(0);
    let mut copy = original.copy();
    substitute_recursive(&mut copy, &params(&[("title", "Dashboard")]));

    assert_eq!(copy.text_content(), "Dashboard");
    assert_eq!(original.text_content(), "{{title}}");
}

#[test]
fn test_render_forest() {
    let template = parse("<!doctype html><title>{{t}}</title>");
    let rendered = render_forest(&template, &params(&[("t", "Home")]));
    assert_eq!(
        serialize_forest(&rendered),
        "<!DOCTYPE html><title>\n\nHome</title>\n"
    );
}

// ========== properties ==========

#[quickcheck]
fn prop_no_params_is_identity(text: String) -> bool {
    substitute(&text, &Params::new()) == text
}

#[quickcheck]
fn prop_text_without_braces_is_identity(text: String, value: String) -> bool {
    let text: String = text.chars().filter(|&c| c != '{').collect();
    substitute(&text, &params(&[("k", value.as_str())])) == text
}

#[quickcheck]
fn prop_value_inserted_literally(value: String) -> bool {
    let p = params(&[("k", value.as_str()), ("other", "X")]);
    substitute("[{{k}}]", &p) == format!("[{value}]")
}
