//! Layout box types.
//!
//! [§ 9.2 Controlling box generation](https://www.w3.org/TR/CSS2/visuren.html#box-gen)

use std::fmt::Write;

use koala_common::warning::warn_once;
use koala_dom::{DomTree, NodeId, NodeType};

use crate::style::DisplayValue;

use super::box_model::BoxDimensions;

/// [§ 9.2 Controlling box generation](https://www.w3.org/TR/CSS2/visuren.html#box-gen)
///
/// "The following sections describe the types of boxes that may be generated
/// in CSS 2.1. A box's type affects, in part, its behavior in the visual
/// formatting model."
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoxType {
    /// [§ 9.2 Principal box](https://www.w3.org/TR/css-display-3/#principal-box)
    ///
    /// "Most elements generate a single principal box."
    /// Contains the `NodeId` to reference back to the DOM node. The box for
    /// the Document node is the initial containing block.
    Principal(NodeId),

    /// [§ 9.2.1.1 Anonymous inline boxes](https://www.w3.org/TR/CSS2/visuren.html#anonymous-inline)
    ///
    /// "Any text that is directly contained inside a block container element
    /// (not inside an inline element) must be treated as an anonymous inline
    /// element."
    AnonymousInline(String),

    /// [§ 9.2.1 Anonymous block boxes](https://www.w3.org/TR/CSS2/visuren.html#anonymous-block-level)
    AnonymousBlock,
}

/// [§ 9.3.1 Choosing a positioning scheme: 'position' property](https://www.w3.org/TR/CSS2/visuren.html#choose-position)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionType {
    /// "The box is a normal box, laid out according to the normal flow."
    #[default]
    Static,
    /// "The box's position is calculated according to the normal flow.
    /// Then the box is offset relative to its normal position."
    Relative,
    /// "The box's position (and possibly size) is specified with the
    /// 'top', 'right', 'bottom', and 'left' properties."
    Absolute,
    /// "The box's position is calculated according to the 'absolute' model,
    /// but the box is fixed with respect to some reference."
    Fixed,
    /// [CSS Positioned Layout § 3.2](https://www.w3.org/TR/css-position-3/#sticky-position)
    Sticky,
}

/// [§ 9.5.1 Positioning the float: the 'float' property](https://www.w3.org/TR/CSS2/visuren.html#float-position)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatSide {
    /// "The element generates a block box that is floated to the left."
    Left,
    /// "The element generates a block box that is floated to the right."
    Right,
}

/// [§ 11.2 Visibility: the 'visibility' property](https://www.w3.org/TR/CSS2/visufx.html#visibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// "The generated box is visible."
    #[default]
    Visible,
    /// "The generated box is invisible (fully transparent, nothing is drawn),
    /// but still affects layout. Descendants of the element will be visible
    /// if they have 'visibility: visible'."
    Hidden,
    /// Like `hidden`, except for table rows and columns.
    Collapse,
}

/// Cascaded values captured when the layout box was built, keyed by
/// property name. Entries stay in the order they were recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CascadedProperties {
    entries: Vec<(String, String)>,
}

impl CascadedProperties {
    /// An empty snapshot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record `name: value`, replacing an earlier value in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Resolved value of `name`, if recorded.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of recorded properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CascadedProperties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut properties = Self::new();
        for (name, value) in iter {
            properties.insert(name, value);
        }
        properties
    }
}

/// The class of layout node a box is, as shown in debug output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutClass {
    /// The box generated for the Document: the initial containing block.
    Viewport,
    /// [Glossary](https://www.w3.org/TR/css-display-3/#block-container)
    BlockContainer,
    /// [§ 9.2.2](https://www.w3.org/TR/CSS2/visuren.html#inline-boxes)
    /// A non-replaced inline box.
    InlineNode,
    /// [§ 2.5 Text Runs](https://www.w3.org/TR/css-display-3/#text-nodes)
    TextNode,
    /// Any other box: flex, grid and table containers.
    Box,
}

impl LayoutClass {
    /// Class name used in dumps.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Viewport => "Viewport",
            Self::BlockContainer => "BlockContainer",
            Self::InlineNode => "InlineNode",
            Self::TextNode => "TextNode",
            Self::Box => "Box",
        }
    }
}

/// A node in the layout tree.
///
/// [§ 9.2 Controlling box generation](https://www.w3.org/TR/CSS2/visuren.html#box-gen)
///
/// "Each box is associated with its generating element."
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutBox {
    /// The type of box (principal, anonymous inline, anonymous block)
    pub box_type: BoxType,

    /// The display type of this box.
    pub display: DisplayValue,

    /// [§ 9.3.1](https://www.w3.org/TR/CSS2/visuren.html#choose-position)
    pub position: PositionType,

    /// [§ 9.5.1](https://www.w3.org/TR/CSS2/visuren.html#float-position)
    /// `None` means `float: none`.
    pub float_side: Option<FloatSide>,

    /// [§ 11.2](https://www.w3.org/TR/CSS2/visufx.html#visibility)
    pub visibility: Visibility,

    /// Used box metrics in absolute coordinates, or `None` while the box
    /// has not been laid out.
    pub dimensions: Option<BoxDimensions>,

    /// Cascaded values recorded for this box, if captured.
    pub cascaded: Option<CascadedProperties>,

    /// Child boxes in the layout tree.
    pub children: Vec<Self>,
}

impl LayoutBox {
    /// A static, visible, not yet laid out box.
    #[must_use]
    pub const fn new(box_type: BoxType, display: DisplayValue) -> Self {
        Self {
            box_type,
            display,
            position: PositionType::Static,
            float_side: None,
            visibility: Visibility::Visible,
            dimensions: None,
            cascaded: None,
            children: Vec::new(),
        }
    }

    /// The initial containing block, generated for the Document node.
    #[must_use]
    pub const fn viewport() -> Self {
        Self::new(BoxType::Principal(NodeId::ROOT), DisplayValue::block())
    }

    /// An anonymous inline box for a run of text.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(BoxType::AnonymousInline(text.into()), DisplayValue::inline())
    }

    /// Append a child box.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Set the used box metrics.
    #[must_use]
    pub fn with_dimensions(mut self, dimensions: BoxDimensions) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    /// The DOM node that generated this box, if any.
    #[must_use]
    pub const fn node(&self) -> Option<NodeId> {
        match self.box_type {
            BoxType::Principal(id) => Some(id),
            BoxType::AnonymousInline(_) | BoxType::AnonymousBlock => None,
        }
    }

    /// Which kind of layout node this box is.
    ///
    /// Text runs are `TextNode`s whether they carry their own text or are
    /// the principal box of a DOM Text node.
    #[must_use]
    pub fn layout_class(&self, dom: &DomTree) -> LayoutClass {
        match self.box_type {
            BoxType::Principal(NodeId::ROOT) => LayoutClass::Viewport,
            BoxType::AnonymousInline(_) => LayoutClass::TextNode,
            BoxType::Principal(id) if dom.as_text(id).is_some() => LayoutClass::TextNode,
            BoxType::Principal(_) | BoxType::AnonymousBlock => {
                if self.display.is_block_container() {
                    LayoutClass::BlockContainer
                } else if self.display.is_inline_box() {
                    LayoutClass::InlineNode
                } else {
                    LayoutClass::Box
                }
            }
        }
    }

    /// Class name used in dumps, for example `BlockContainer`.
    #[must_use]
    pub fn layout_class_name(&self, dom: &DomTree) -> &'static str {
        self.layout_class(dom).name()
    }

    /// Whether this node generates a box with its own geometry. Inline
    /// nodes and text runs are laid out as fragments of their container.
    #[must_use]
    pub fn is_box(&self, dom: &DomTree) -> bool {
        !matches!(
            self.layout_class(dom),
            LayoutClass::InlineNode | LayoutClass::TextNode
        )
    }

    /// [§ 9.3](https://www.w3.org/TR/CSS2/visuren.html#positioning-scheme)
    /// "An element is said to be positioned if its 'position' property has
    /// a value other than 'static'."
    #[must_use]
    pub const fn is_positioned(&self) -> bool {
        !matches!(self.position, PositionType::Static)
    }

    /// [§ 9.3](https://www.w3.org/TR/CSS2/visuren.html#positioning-scheme)
    ///
    /// Floats and absolutely positioned boxes are taken out of flow.
    #[must_use]
    pub const fn is_out_of_flow(&self) -> bool {
        self.float_side.is_some()
            || matches!(self.position, PositionType::Absolute | PositionType::Fixed)
    }

    /// [§ 9.4.1 Block formatting contexts](https://www.w3.org/TR/CSS2/visuren.html#block-formatting)
    ///
    /// Whether this box lays out its in-flow children in an inline
    /// formatting context: it has in-flow children and all of them are
    /// inline-level. Out-of-flow children do not take part in the decision.
    #[must_use]
    pub fn children_are_inline(&self) -> bool {
        let mut in_flow = self.children.iter().filter(|c| !c.is_out_of_flow()).peekable();
        in_flow.peek().is_some() && in_flow.all(|c| c.display.is_inline_level())
    }

    /// Text content of a text run, read from the box or from the DOM.
    #[must_use]
    pub fn text_content<'a>(&'a self, dom: &'a DomTree) -> Option<&'a str> {
        match &self.box_type {
            BoxType::AnonymousInline(text) => Some(text),
            BoxType::Principal(id) => dom.as_text(*id),
            BoxType::AnonymousBlock => None,
        }
    }

    /// A bracketed label for the box's DOM node: `<div#main.a.b>`,
    /// `<#text>`, `<#document>`, or `(anonymous)` for anonymous blocks.
    ///
    /// A box whose node is missing from `dom` is labelled `<?>` and a
    /// warning is logged once.
    #[must_use]
    pub fn node_label(&self, dom: &DomTree) -> String {
        let id = match &self.box_type {
            BoxType::AnonymousBlock => return "(anonymous)".to_string(),
            BoxType::AnonymousInline(_) => return "<#text>".to_string(),
            BoxType::Principal(id) => *id,
        };
        let Some(node) = dom.get(id) else {
            warn_once(
                "Layout",
                &format!("layout box refers to missing DOM node {}", id.0),
            );
            return "<?>".to_string();
        };
        let mut label = String::from("<");
        match &node.node_type {
            NodeType::Element(data) => {
                label.push_str(&data.tag_name);
                if let Some(id) = data.id() {
                    let _ = write!(label, "#{id}");
                }
                for class in data.classes() {
                    let _ = write!(label, ".{class}");
                }
            }
            other => label.push_str(other.node_name()),
        }
        label.push('>');
        label
    }

    /// `<Class> <label>`, for example `BlockContainer <div#main.a.b>`.
    #[must_use]
    pub fn debug_description(&self, dom: &DomTree) -> String {
        format!("{} {}", self.layout_class_name(dom), self.node_label(dom))
    }
}
