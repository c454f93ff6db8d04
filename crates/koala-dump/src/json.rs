//! DOM export as JSON.

use koala_dom::{DomTree, NodeId, NodeType};
use serde_json::{Map, Value, json};

use crate::options::DEFAULT_MAX_DEPTH;

/// Convert the subtree rooted at `node` to a JSON value.
///
/// Each node is an object with a `type` field. Elements carry `tagName`
/// and `attributes` (an array of `{name, value}` objects in attribute
/// order), text and comments carry `content`, doctypes carry `name`.
/// `children` is present when the node has children. A node id missing
/// from the tree converts to `null`.
///
/// # Panics
///
/// Panics if the tree nests deeper than [`DEFAULT_MAX_DEPTH`].
#[must_use]
pub fn dom_to_json(tree: &DomTree, node: NodeId) -> Value {
    node_to_json(tree, node, 0)
}

fn node_to_json(tree: &DomTree, id: NodeId, depth: usize) -> Value {
    assert!(
        depth <= DEFAULT_MAX_DEPTH,
        "DOM nesting reached level {depth}, beyond max_depth {DEFAULT_MAX_DEPTH}"
    );
    let Some(node) = tree.get(id) else {
        return Value::Null;
    };

    let mut obj = Map::new();
    match &node.node_type {
        NodeType::Document => {
            let _ = obj.insert("type".to_string(), json!("document"));
        }
        NodeType::DocumentType(name) => {
            let _ = obj.insert("type".to_string(), json!("doctype"));
            let _ = obj.insert("name".to_string(), json!(name));
        }
        NodeType::Element(data) => {
            let _ = obj.insert("type".to_string(), json!("element"));
            let _ = obj.insert("tagName".to_string(), json!(data.tag_name));
            let attrs: Vec<Value> = data
                .attrs
                .iter()
                .map(|attr| json!({ "name": attr.name, "value": attr.value }))
                .collect();
            let _ = obj.insert("attributes".to_string(), Value::Array(attrs));
        }
        NodeType::Text(text) => {
            let _ = obj.insert("type".to_string(), json!("text"));
            let _ = obj.insert("content".to_string(), json!(text));
        }
        NodeType::Comment(text) => {
            let _ = obj.insert("type".to_string(), json!("comment"));
            let _ = obj.insert("content".to_string(), json!(text));
        }
    }

    if !node.children.is_empty() {
        let children: Vec<Value> = node
            .children
            .iter()
            .map(|&child| node_to_json(tree, child, depth + 1))
            .collect();
        let _ = obj.insert("children".to_string(), Value::Array(children));
    }

    Value::Object(obj)
}
