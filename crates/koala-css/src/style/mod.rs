//! CSS style types shared by the layout and paint trees.
//!
//! - [CSS Display Module Level 3](https://www.w3.org/TR/css-display-3/)

mod display;

pub use display::{DisplayValue, InnerDisplayType, OuterDisplayType};
