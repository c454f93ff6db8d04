//! Paintables - the paint tree built from a layout tree
//!
//! [CSS 2.1 Appendix E.2 Painting order](https://www.w3.org/TR/CSS2/zindex.html#painting-order)

use strum_macros::{Display, IntoStaticStr};

use koala_dom::DomTree;

use crate::layout::{LayoutBox, LayoutClass, Rect, Visibility};

/// What a paintable draws, derived from its layout box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum PaintableKind {
    /// A block container: paints its box and the line boxes inside it.
    PaintableWithLines,
    /// Any other box: flex, grid and table containers.
    PaintableBox,
    /// A run of text.
    TextPaintable,
    /// A non-replaced inline box, painted as fragments on its lines.
    InlinePaintable,
}

impl PaintableKind {
    /// The kind for a layout box of the given class.
    #[must_use]
    pub const fn for_layout_class(class: LayoutClass) -> Self {
        match class {
            LayoutClass::Viewport | LayoutClass::BlockContainer => Self::PaintableWithLines,
            LayoutClass::Box => Self::PaintableBox,
            LayoutClass::InlineNode => Self::InlinePaintable,
            LayoutClass::TextNode => Self::TextPaintable,
        }
    }

    /// Class name used in dumps, for example `PaintableWithLines`.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Whether paintables of this kind own a box with geometry.
    #[must_use]
    pub const fn is_box(self) -> bool {
        matches!(self, Self::PaintableWithLines | Self::PaintableBox)
    }
}

/// A node in the paint tree.
///
/// Each paintable borrows the layout box it was built from. Its `children`
/// are paint-tree children and need not match the layout box's children.
#[derive(Debug, Clone)]
pub struct Paintable<'a> {
    /// What this paintable draws.
    pub kind: PaintableKind,
    /// The layout box this paintable was built from.
    pub layout_box: &'a LayoutBox,
    /// Paint-tree children, in painting order.
    pub children: Vec<Self>,
}

impl<'a> Paintable<'a> {
    /// A leaf paintable for `layout_box`, whose nodes live in `dom`.
    #[must_use]
    pub fn new(layout_box: &'a LayoutBox, dom: &DomTree) -> Self {
        Self {
            kind: PaintableKind::for_layout_class(layout_box.layout_class(dom)),
            layout_box,
            children: Vec::new(),
        }
    }

    /// Build the paint tree for a layout tree.
    ///
    /// [§ 11.2 Visibility](https://www.w3.org/TR/CSS2/visufx.html#visibility)
    ///
    /// "Descendants of the element will be visible if they have
    /// 'visibility: visible'."
    ///
    /// The root always gets a paintable. Below it, invisible boxes get none;
    /// their painted descendants attach to the nearest painted ancestor.
    #[must_use]
    pub fn build(root: &'a LayoutBox, dom: &DomTree) -> Self {
        let mut paintable = Self::new(root, dom);
        collect_painted_children(root, dom, &mut paintable.children);
        paintable
    }

    /// [§ 3.3 Borders](https://www.w3.org/TR/css-box-3/#borders)
    ///
    /// The layout box's border box. Layout stores absolute positions, so no
    /// offset is applied. `None` for non-box paintables and boxes that have
    /// not been laid out.
    #[must_use]
    pub fn absolute_border_box_rect(&self) -> Option<Rect> {
        if !self.kind.is_box() {
            return None;
        }
        self.layout_box.dimensions.map(|d| d.border_box())
    }

    /// Number of paintables in this subtree, including `self`.
    #[must_use]
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Self::subtree_len).sum::<usize>()
    }
}

fn collect_painted_children<'a>(
    layout_box: &'a LayoutBox,
    dom: &DomTree,
    out: &mut Vec<Paintable<'a>>,
) {
    for child in &layout_box.children {
        if child.visibility == Visibility::Visible {
            let mut paintable = Paintable::new(child, dom);
            collect_painted_children(child, dom, &mut paintable.children);
            out.push(paintable);
        } else {
            collect_painted_children(child, dom, out);
        }
    }
}
