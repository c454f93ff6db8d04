//! Human-readable dumps of Koala's in-memory trees.
//!
//! Each renderer turns an already-built structure into indented text,
//! two spaces per level, one node per line:
//!
//! - [`dump_dom_tree`] for the DOM
//! - [`dump_sheet`] and [`dump_rule`] for the CSSOM
//! - [`dump_selector`] for a single selector
//! - [`dump_layout_tree`] for the layout tree, optionally with box
//!   metrics and cascaded values
//! - [`dump_paint_tree`] for the paint tree
//!
//! Renderers append to a caller-owned `String` and never touch their
//! input. Each has a `*_to_string` counterpart that returns owned text.
//! [`dom_to_json`] exports the DOM as a `serde_json::Value` instead.
//!
//! # Example
//!
//! ```
//! use koala_dom::{DomTree, ElementData, NodeType};
//!
//! let mut tree = DomTree::new();
//! let p = tree.alloc(NodeType::Element(ElementData::new("p")));
//! tree.append_child(tree.root(), p);
//!
//! assert_eq!(koala_dump::dom_tree_to_string(&tree), "#document\n  <p>\n");
//! ```

pub mod css;
mod dom;
mod escape;
mod json;
mod layout;
mod options;
mod paint;
mod selector;
mod sheet;
mod writer;

pub use css::{dump_rule, rule_to_string};
pub use dom::{dom_tree_to_string, dump_dom_tree};
pub use json::dom_to_json;
pub use layout::{dump_layout_tree, layout_tree_to_string};
pub use options::{
    CssDumpOptions, DEFAULT_MAX_DEPTH, DomDumpOptions, InertRules, LayoutDumpOptions,
    PaintDumpOptions,
};
pub use paint::{dump_paint_tree, paint_tree_to_string};
pub use selector::{dump_selector, selector_to_string};
pub use sheet::{dump_sheet, sheet_to_string};
pub use writer::{IndentGuard, TreeWriter};
