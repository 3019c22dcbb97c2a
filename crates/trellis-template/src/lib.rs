//! `{{placeholder}}` substitution for the trellis markup engine.
//!
//! A parsed tree is a template: [`render`] copies it and fills in the
//! placeholders found in text and attribute values, leaving the original
//! ready to be rendered again with other parameters.
//!
//! Substitution is a single left-to-right pass. At each `{{` the longest
//! `{{key}}` among the parameters that starts there is replaced, so keys
//! may contain `}}`. Text inserted for a placeholder is never scanned
//! again, so a value that itself contains `{{name}}` is inserted
//! literally. Placeholders without a parameter stay as written.

use std::collections::BTreeMap;

use trellis_dom::Node;

/// Parameter names mapped to their replacement text.
pub type Params = BTreeMap<String, String>;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Replace every `{{key}}` in `text` whose key is in `params`.
///
/// # Example
/// ```
/// use trellis_template::{Params, substitute};
///
/// let params = Params::from([("name".to_string(), "World".to_string())]);
/// assert_eq!(substitute("Hello {{name}}!", &params), "Hello World!");
/// assert_eq!(substitute("{{missing}}", &params), "{{missing}}");
/// ```
#[must_use]
pub fn substitute(text: &str, params: &Params) -> String {
    if params.is_empty() || !text.contains(OPEN) {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find(OPEN) {
        out.push_str(&rest[..open]);
        let candidate = &rest[open..];
        let body = &candidate[OPEN.len()..];
        // Keys may themselves contain `}}`; the longest placeholder wins.
        let value = params
            .iter()
            .filter(|(key, _)| {
                body.strip_prefix(key.as_str())
                    .is_some_and(|tail| tail.starts_with(CLOSE))
            })
            .max_by_key(|(key, _)| key.len())
            .map(|(key, value)| (value, OPEN.len() + key.len() + CLOSE.len()));
        match value {
            Some((value, consumed)) => {
                out.push_str(value);
                rest = &candidate[consumed..];
            }
            None => {
                // Not a known placeholder: keep one brace and rescan from the
                // next one, so `{{{name}}}` still finds `{{name}}`.
                out.push('{');
                rest = &candidate[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Substitute into a node's own text, its attribute values and every
/// descendant, in place.
///
/// Doctype payloads are left alone.
pub fn substitute_recursive(node: &mut Node, params: &Params) {
    if let Some(text) = node.text_mut() {
        *text = substitute(text, params);
    }
    if let Some(attrs) = node.attrs_mut() {
        for value in attrs.values_mut() {
            *value = substitute(value, params);
        }
    }
    for child in node.children_mut() {
        substitute_recursive(child, params);
    }
}

/// A substituted copy of `template`; `template` itself is not modified.
#[must_use]
pub fn render(template: &Node, params: &Params) -> Node {
    let mut rendered = template.copy();
    substitute_recursive(&mut rendered, params);
    rendered
}

/// [`render`] applied to every root of a forest.
#[must_use]
pub fn render_forest(templates: &[Node], params: &Params) -> Vec<Node> {
    templates.iter().map(|node| render(node, params)).collect()
}
