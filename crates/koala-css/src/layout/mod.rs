//! Layout tree model.
//!
//! The layout tree is produced by the layout engine; this module defines
//! the boxes and their used metrics so they can be inspected.
//!
//! # Relevant Specifications
//!
//! - [CSS Display Module Level 3](https://www.w3.org/TR/css-display-3/)
//! - [CSS Box Model Module Level 3](https://www.w3.org/TR/css-box-3/)
//! - [CSS 2.1 Visual Formatting Model](https://www.w3.org/TR/CSS2/visuren.html)
//!
//! # Module Structure
//!
//! - [`box_model`] - Box dimensions, rectangles, and edge sizes
//! - [`layout_box`] - Layout box types and derived descriptions

pub mod box_model;
pub mod layout_box;

pub use box_model::{BoxDimensions, EdgeSizes, Rect};
pub use layout_box::{
    BoxType, CascadedProperties, FloatSide, LayoutBox, LayoutClass, PositionType, Visibility,
};
