//! CSS Display property types
//!
//! [§ 2 Box Layout Modes: the display property](https://www.w3.org/TR/css-display-3/#the-display-properties)

// "The display property defines an element's display type, which consists of
// the two basic qualities of how an element generates boxes:
//   - the inner display type, which defines the kind of formatting context
//     it generates, dictating how its descendant boxes are laid out.
//   - the outer display type, which dictates how the principal box itself
//     participates in flow layout."

/// [§ 2.1 Outer Display Roles](https://www.w3.org/TR/css-display-3/#outer-role)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OuterDisplayType {
    /// "The element generates a block-level box when placed in flow layout."
    Block,
    /// "The element generates an inline-level box when placed in flow layout."
    Inline,
}

/// [§ 2.2 Inner Display Layout Models](https://www.w3.org/TR/css-display-3/#inner-model)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InnerDisplayType {
    /// "The element lays out its contents using flow layout (block-and-inline layout)."
    Flow,
    /// Same as Flow but establishes a new block formatting context.
    FlowRoot,
    /// "The element lays out its contents using table layout."
    Table,
    /// "The element lays out its contents using flex layout."
    Flex,
    /// "The element lays out its contents using grid layout."
    Grid,
}

/// Combined display value
/// [§ 2 Box Layout Modes](https://www.w3.org/TR/css-display-3/#the-display-properties)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayValue {
    /// How the box participates in flow layout.
    pub outer: OuterDisplayType,
    /// How its descendant boxes are laid out.
    pub inner: InnerDisplayType,
}

impl DisplayValue {
    /// `display: block`
    #[must_use]
    pub const fn block() -> Self {
        Self {
            outer: OuterDisplayType::Block,
            inner: InnerDisplayType::Flow,
        }
    }

    /// `display: inline`
    #[must_use]
    pub const fn inline() -> Self {
        Self {
            outer: OuterDisplayType::Inline,
            inner: InnerDisplayType::Flow,
        }
    }

    /// `display: inline-block`
    #[must_use]
    pub const fn inline_block() -> Self {
        Self {
            outer: OuterDisplayType::Inline,
            inner: InnerDisplayType::FlowRoot,
        }
    }

    /// `display: flex`
    #[must_use]
    pub const fn flex() -> Self {
        Self {
            outer: OuterDisplayType::Block,
            inner: InnerDisplayType::Flex,
        }
    }

    /// `display: grid`
    #[must_use]
    pub const fn grid() -> Self {
        Self {
            outer: OuterDisplayType::Block,
            inner: InnerDisplayType::Grid,
        }
    }

    /// `display: table`
    #[must_use]
    pub const fn table() -> Self {
        Self {
            outer: OuterDisplayType::Block,
            inner: InnerDisplayType::Table,
        }
    }

    /// [§ 2.1](https://www.w3.org/TR/css-display-3/#inline-level)
    /// "Content that participates in inline layout."
    #[must_use]
    pub const fn is_inline_level(self) -> bool {
        matches!(self.outer, OuterDisplayType::Inline)
    }

    /// [§ 2.1](https://www.w3.org/TR/css-display-3/#inline-box)
    /// "A non-replaced inline-level box whose inner display type is flow."
    #[must_use]
    pub const fn is_inline_box(self) -> bool {
        matches!(
            (self.outer, self.inner),
            (OuterDisplayType::Inline, InnerDisplayType::Flow)
        )
    }

    /// [§ 2.4](https://www.w3.org/TR/css-display-3/#valdef-display-inline-block)
    /// "This value causes an element to generate an inline-level block container."
    #[must_use]
    pub const fn is_inline_block(self) -> bool {
        matches!(
            (self.outer, self.inner),
            (OuterDisplayType::Inline, InnerDisplayType::FlowRoot)
        )
    }

    /// [Glossary](https://www.w3.org/TR/css-display-3/#block-container)
    /// "A block container either contains only inline-level boxes
    /// participating in an inline formatting context, or contains only
    /// block-level boxes participating in a block formatting context."
    #[must_use]
    pub const fn is_block_container(self) -> bool {
        match self.inner {
            InnerDisplayType::FlowRoot => true,
            InnerDisplayType::Flow => matches!(self.outer, OuterDisplayType::Block),
            InnerDisplayType::Table | InnerDisplayType::Flex | InnerDisplayType::Grid => false,
        }
    }

    /// The box establishes a flex formatting context.
    #[must_use]
    pub const fn is_flex_container(self) -> bool {
        matches!(self.inner, InnerDisplayType::Flex)
    }

    /// The box establishes a grid formatting context.
    #[must_use]
    pub const fn is_grid_container(self) -> bool {
        matches!(self.inner, InnerDisplayType::Grid)
    }
}
