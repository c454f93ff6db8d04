//! CSS object model, selectors, and the layout and paint tree models for the Koala engine.
//!
//! # Scope
//!
//! This crate implements the data structures that the style, layout and
//! paint stages hand to each other:
//!
//! - **CSSOM** ([CSS Object Model](https://drafts.csswg.org/cssom/))
//!   - Style sheets and the fourteen concrete rule kinds
//!   - Ordered declaration and descriptor blocks
//!   - Media lists and `@supports` conditions
//!
//! - **CSS Selectors** ([Selectors Level 4](https://www.w3.org/TR/selectors-4/))
//!   - Simple, compound and complex selectors with combinators
//!   - Specificity calculation
//!   - Serialization back to CSS syntax
//!
//! - **Layout tree** ([CSS Display Level 3](https://www.w3.org/TR/css-display-3/))
//!   - Display value types
//!   - Box model structures
//!
//! - **Paint tree** ([CSS 2.1 Appendix E](https://www.w3.org/TR/CSS2/zindex.html))
//!
//! # Not Yet Implemented
//!
//! - Tokenizing and parsing style sheets
//! - Selector matching and the cascade
//! - The layout algorithms themselves

/// CSS object model per [CSSOM](https://drafts.csswg.org/cssom/).
pub mod cssom;
/// Layout tree structures per [CSS Display Level 3](https://www.w3.org/TR/css-display-3/).
pub mod layout;
/// Paint tree per [CSS 2.1 Appendix E](https://www.w3.org/TR/CSS2/zindex.html).
pub mod paint;
/// CSS selectors per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;
/// Display types per [CSS Display Level 3](https://www.w3.org/TR/css-display-3/).
pub mod style;

// Re-exports for convenience
pub use cssom::{CssRule, CssRuleType, CssStyleSheet};
pub use layout::{BoxDimensions, BoxType, EdgeSizes, LayoutBox, Rect};
pub use paint::{Paintable, PaintableKind};
pub use selector::{ComplexSelector, Selector, Specificity};
pub use style::{DisplayValue, InnerDisplayType, OuterDisplayType};
