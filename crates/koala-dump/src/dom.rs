//! DOM tree renderer.

use std::fmt::Write;

use koala_common::warning::warn_once;
use koala_dom::{DomTree, NodeId, NodeType};

use crate::escape::{OneLine, Quoted};
use crate::options::DomDumpOptions;
use crate::writer::TreeWriter;

/// Write the subtree rooted at `node` in pre-order, one line per node,
/// children one level deeper than their parent.
///
/// # Panics
///
/// Panics if the tree nests deeper than `options.max_depth`.
pub fn dump_dom_tree(out: &mut String, tree: &DomTree, node: NodeId, options: &DomDumpOptions) {
    let mut writer = TreeWriter::new(out).with_max_depth(options.max_depth);
    write_node(&mut writer, tree, node, options);
}

/// [`dump_dom_tree`] of the whole document with default options.
#[must_use]
pub fn dom_tree_to_string(tree: &DomTree) -> String {
    let mut out = String::new();
    dump_dom_tree(&mut out, tree, tree.root(), &DomDumpOptions::default());
    out
}

fn write_node(writer: &mut TreeWriter<'_>, tree: &DomTree, id: NodeId, options: &DomDumpOptions) {
    let Some(node) = tree.get(id) else {
        warn_once("Dump", &format!("DOM node {} is not in the tree", id.0));
        writer.line("<?>");
        return;
    };

    writer.line(&node_header(&node.node_type, options));
    if node.children.is_empty() {
        return;
    }

    let mut nested = writer.indent();
    for &child in &node.children {
        write_node(&mut nested, tree, child, options);
    }
}

fn node_header(node_type: &NodeType, options: &DomDumpOptions) -> String {
    match node_type {
        NodeType::Document => "#document".to_string(),
        NodeType::DocumentType(name) => format!("<!DOCTYPE {}>", OneLine(name)),
        NodeType::Element(data) => {
            let mut header = format!("<{}", OneLine(&data.tag_name));
            if options.show_attributes {
                for attr in &data.attrs {
                    if attr.value.is_empty() {
                        let _ = write!(header, " {}", OneLine(&attr.name));
                    } else {
                        let _ = write!(
                            header,
                            " {}=\"{}\"",
                            OneLine(&attr.name),
                            Quoted(&attr.value)
                        );
                    }
                }
            }
            header.push('>');
            header
        }
        NodeType::Text(text) => format!("\"{}\"", Quoted(text)),
        NodeType::Comment(text) => format!("<!-- {} -->", OneLine(text)),
    }
}
