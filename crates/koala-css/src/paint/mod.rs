//! CSS Painting
//!
//! [CSS 2.1 Appendix E - Elaborate description of Stacking Contexts](https://www.w3.org/TR/CSS2/zindex.html)
//!
//! The paint tree sits between layout and rendering:
//!
//! ```text
//! Style → Layout → Paint → Render
//! ```
//!
//! Each [`Paintable`] borrows the layout box it paints. Boxes that paint
//! nothing are left out, so the paint tree can be shallower than the
//! layout tree.

mod paintable;

pub use paintable::{Paintable, PaintableKind};
