//! Tests for the DOM tree renderer and JSON export.

mod common;

use common::{element, indent_of, text};
use koala_dom::{DomTree, NodeId, NodeType};
use koala_dump::{DomDumpOptions, dom_to_json, dom_tree_to_string, dump_dom_tree};
use serde_json::json;

#[test]
fn test_three_node_chain_indents_by_depth() {
    let mut tree = DomTree::new();
    let html = element(&mut tree, NodeId::ROOT, "html", &[]);
    let body = element(&mut tree, html, "body", &[]);
    let _ = element(&mut tree, body, "p", &[]);

    let mut out = String::new();
    dump_dom_tree(&mut out, &tree, html, &DomDumpOptions::default());

    assert_eq!(out, "<html>\n  <body>\n    <p>\n");
    let indents: Vec<usize> = out.lines().map(indent_of).collect();
    assert_eq!(indents, [0, 1, 2]);
}

#[test]
fn test_every_node_kind() {
    let mut tree = DomTree::new();
    let doctype = tree.alloc(NodeType::DocumentType("html".to_string()));
    tree.append_child(NodeId::ROOT, doctype);
    let html = element(&mut tree, NodeId::ROOT, "html", &[("lang", "en")]);
    let comment = tree.alloc(NodeType::Comment(" note ".to_string()));
    tree.append_child(html, comment);
    let _ = text(&mut tree, html, "a\tb\nc");

    assert_eq!(
        dom_tree_to_string(&tree),
        "#document\n  <!DOCTYPE html>\n  <html lang=\"en\">\n    <!--  note  -->\n    \"a\\tb\\nc\"\n"
    );
}

#[test]
fn test_backslashes_and_quotes_are_escaped() {
    let mut tree = DomTree::new();
    let div = element(&mut tree, NodeId::ROOT, "div", &[("title", "say \"hi\"\n")]);
    let _ = text(&mut tree, div, "a\\nb");
    let _ = text(&mut tree, div, "a\nb");

    let out = dom_tree_to_string(&tree);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[1], "  <div title=\"say \\\"hi\\\"\\n\">");
    assert_eq!(lines[2], "    \"a\\\\nb\"");
    assert_eq!(lines[3], "    \"a\\nb\"");
    assert_ne!(lines[2], lines[3]);
}

#[test]
fn test_attributes_in_source_order() {
    let mut tree = DomTree::new();
    let _ = element(
        &mut tree,
        NodeId::ROOT,
        "input",
        &[("type", "checkbox"), ("id", "x"), ("checked", "")],
    );
    let out = dom_tree_to_string(&tree);
    assert_eq!(out.lines().nth(1), Some("  <input type=\"checkbox\" id=\"x\" checked>"));

    let mut out = String::new();
    let options = DomDumpOptions::default().with_attributes(false);
    dump_dom_tree(&mut out, &tree, NodeId::ROOT, &options);
    assert_eq!(out.lines().nth(1), Some("  <input>"));
}

#[test]
fn test_children_keep_their_order() {
    let mut tree = DomTree::new();
    let ul = element(&mut tree, NodeId::ROOT, "ul", &[]);
    for name in ["c", "a", "b", "a"] {
        let li = element(&mut tree, ul, "li", &[("class", name)]);
        let _ = text(&mut tree, li, name);
    }

    let out = dom_tree_to_string(&tree);
    let texts: Vec<&str> = out
        .lines()
        .filter(|line| line.trim_start().starts_with('"'))
        .map(str::trim)
        .collect();
    assert_eq!(texts, ["\"c\"", "\"a\"", "\"b\"", "\"a\""]);
}

#[test]
fn test_dump_appends_to_existing_buffer() {
    let tree = DomTree::new();
    let mut out = String::from("before\n");
    dump_dom_tree(&mut out, &tree, NodeId::ROOT, &DomDumpOptions::default());
    assert_eq!(out, "before\n#document\n");
}

#[test]
fn test_missing_node_renders_placeholder() {
    let tree = DomTree::new();
    let mut out = String::new();
    dump_dom_tree(&mut out, &tree, NodeId(99), &DomDumpOptions::default());
    assert_eq!(out, "<?>\n");
}

#[test]
fn test_deterministic() {
    let mut tree = DomTree::new();
    let div = element(&mut tree, NodeId::ROOT, "div", &[("b", "2"), ("a", "1")]);
    let _ = text(&mut tree, div, "x");
    assert_eq!(dom_tree_to_string(&tree), dom_tree_to_string(&tree));
}

#[test]
#[should_panic(expected = "beyond max_depth 3")]
fn test_depth_limit_is_fatal() {
    let mut tree = DomTree::new();
    let mut parent = NodeId::ROOT;
    for _ in 0..5 {
        parent = element(&mut tree, parent, "div", &[]);
    }
    let mut out = String::new();
    let options = DomDumpOptions::default().with_max_depth(3);
    dump_dom_tree(&mut out, &tree, NodeId::ROOT, &options);
}

#[test]
fn test_depth_limit_allows_exact_depth() {
    let mut tree = DomTree::new();
    let mut parent = NodeId::ROOT;
    for _ in 0..3 {
        parent = element(&mut tree, parent, "div", &[]);
    }
    let mut out = String::new();
    let options = DomDumpOptions::default().with_max_depth(3);
    dump_dom_tree(&mut out, &tree, NodeId::ROOT, &options);
    assert_eq!(out.lines().count(), 4);
}

#[test]
fn test_json_export() {
    let mut tree = DomTree::new();
    let div = element(&mut tree, NodeId::ROOT, "div", &[("id", "main"), ("class", "a")]);
    let _ = text(&mut tree, div, "hi");

    assert_eq!(
        dom_to_json(&tree, NodeId::ROOT),
        json!({
            "type": "document",
            "children": [{
                "type": "element",
                "tagName": "div",
                "attributes": [
                    { "name": "id", "value": "main" },
                    { "name": "class", "value": "a" }
                ],
                "children": [{ "type": "text", "content": "hi" }]
            }]
        })
    );
    assert_eq!(dom_to_json(&tree, NodeId(42)), serde_json::Value::Null);
}
