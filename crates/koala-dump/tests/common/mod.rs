//! Shared fixtures for the dump tests.

#![allow(dead_code)]

use koala_css::cssom::{CssRule, CssStyleRule, StyleProperties};
use koala_css::selector::{ComplexSelector, CompoundSelector, Selector, SimpleSelector};
use koala_dom::{AttributesMap, DomTree, ElementData, NodeId, NodeType};

/// Remove ANSI SGR sequences (`ESC [ ... m`).
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Number of leading two-space indent units on `line`.
pub fn indent_of(line: &str) -> usize {
    (line.len() - line.trim_start_matches(' ').len()) / 2
}

/// Append an element with `attrs` under `parent`.
pub fn element(tree: &mut DomTree, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
    let id = tree.alloc(NodeType::Element(ElementData {
        tag_name: tag.to_string(),
        attrs: attrs.iter().copied().collect::<AttributesMap>(),
    }));
    tree.append_child(parent, id);
    id
}

/// Append a text node under `parent`.
pub fn text(tree: &mut DomTree, parent: NodeId, content: &str) -> NodeId {
    let id = tree.alloc(NodeType::Text(content.to_string()));
    tree.append_child(parent, id);
    id
}

/// `.name`
pub fn class_selector(name: &str) -> Selector {
    Selector::new(ComplexSelector::compound(CompoundSelector::new(vec![
        SimpleSelector::Class(name.to_string()),
    ])))
}

/// `.name { color: red; }`
pub fn style_rule(name: &str) -> CssRule {
    CssRule::Style(CssStyleRule::new(
        vec![class_selector(name)],
        StyleProperties::new().with("color", "red"),
    ))
}
