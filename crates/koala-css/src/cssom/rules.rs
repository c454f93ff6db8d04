//! [CSSOM § 6.4 CSS Rules](https://drafts.csswg.org/cssom/#css-rules)
//!
//! One struct per concrete rule interface. Grouping rules own their child
//! rules directly, so a rule tree is an ordinary owned tree.

use crate::selector::Selector;

use super::conditions::{MediaList, SupportsCondition};
use super::declarations::{Descriptors, StyleProperties};
use super::CssRule;

/// [CSSOM § 6.4.3 The CSSStyleRule Interface](https://drafts.csswg.org/cssom/#the-cssstylerule-interface)
///
/// With [CSS Nesting](https://www.w3.org/TR/css-nesting-1/#cssom) a style
/// rule may also contain child rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssStyleRule {
    /// The selector list, in source order.
    pub selectors: Vec<Selector>,
    /// The rule's own declarations.
    pub declarations: StyleProperties,
    /// Nested rules, in source order.
    pub child_rules: Vec<CssRule>,
}

impl CssStyleRule {
    /// A style rule with no nested rules.
    #[must_use]
    pub const fn new(selectors: Vec<Selector>, declarations: StyleProperties) -> Self {
        Self {
            selectors,
            declarations,
            child_rules: Vec::new(),
        }
    }

    /// [CSSOM § 6.4.3 selectorText](https://drafts.csswg.org/cssom/#dom-cssstylerule-selectortext)
    ///
    /// "The selectorText attribute, on getting, must return the result of
    /// serializing the associated group of selectors."
    #[must_use]
    pub fn selector_text(&self) -> String {
        self.selectors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// [CSS Fonts § 4.1 The @font-face rule](https://www.w3.org/TR/css-fonts-4/#font-face-rule)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssFontFaceRule {
    /// `font-family`, `src`, `font-weight`, ...
    pub descriptors: Descriptors,
}

/// The `layer` part of an `@import` prelude.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportLayer {
    /// `layer`
    Anonymous,
    /// `layer(name)`
    Named(String),
}

/// [CSSOM § 6.4.5 The CSSImportRule Interface](https://drafts.csswg.org/cssom/#the-cssimportrule-interface)
///
/// ```text
/// @import [ <url> | <string> ]
///         [ layer | layer(<layer-name>) ]?
///         [ supports( [ <supports-condition> | <declaration> ] ) ]?
///         <media-query-list>? ;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssImportRule {
    /// "The href attribute must return the URL specified by the @import rule."
    pub href: String,
    /// Cascade layer the imported sheet is placed in.
    pub layer: Option<ImportLayer>,
    /// Import condition.
    pub supports: Option<SupportsCondition>,
    /// Media queries the import is restricted to.
    pub media: MediaList,
}

impl CssImportRule {
    /// An unconditional import of `href`.
    #[must_use]
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            layer: None,
            supports: None,
            media: MediaList::new(),
        }
    }
}

/// [CSS Animations § 3.1 The CSSKeyframeRule Interface](https://www.w3.org/TR/css-animations-1/#interface-csskeyframerule)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssKeyframeRule {
    /// "This attribute represents the keyframe selector as a comma-separated
    /// list of percentage values." For example `from`, `50%`, `0%, 100%`.
    pub key_text: String,
    /// The keyframe's declarations.
    pub declarations: StyleProperties,
}

/// [CSS Animations § 3.2 The CSSKeyframesRule Interface](https://www.w3.org/TR/css-animations-1/#interface-csskeyframesrule)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssKeyframesRule {
    /// Animation name.
    pub name: String,
    /// Keyframes, in source order.
    pub keyframes: Vec<CssKeyframeRule>,
}

/// [CSS Conditional § 7.2 The CSSMediaRule Interface](https://www.w3.org/TR/css-conditional-3/#the-cssmediarule-interface)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssMediaRule {
    /// The rule's media query list.
    pub media: MediaList,
    /// Child rules, in source order.
    pub rules: Vec<CssRule>,
}

/// [CSSOM § 6.4.8 The CSSPageRule Interface](https://drafts.csswg.org/cssom/#the-csspagerule-interface)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssPageRule {
    /// Page selector such as `:first`, empty when absent.
    pub selector: String,
    /// Page descriptors (`size`, `margin`, ...).
    pub descriptors: Descriptors,
    /// Margin-box rules such as `@top-left`.
    pub margin_rules: Vec<CssMarginRule>,
}

/// [CSSOM § 6.4.9 The CSSMarginRule Interface](https://drafts.csswg.org/cssom/#the-cssmarginrule-interface)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssMarginRule {
    /// "The name attribute must return the name of the margin at-rule."
    /// Stored without the `@`, for example `top-left`.
    pub name: String,
    /// The margin box's declarations.
    pub declarations: StyleProperties,
}

/// [CSS Conditional § 7.3 The CSSSupportsRule Interface](https://www.w3.org/TR/css-conditional-3/#the-csssupportsrule-interface)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssSupportsRule {
    /// The rule's condition.
    pub condition: SupportsCondition,
    /// Child rules, in source order.
    pub rules: Vec<CssRule>,
}

/// [CSS Properties and Values API § 3 The @property rule](https://www.w3.org/TR/css-properties-values-api-1/#at-property-rule)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssPropertyRule {
    /// The custom property name, including the leading `--`.
    pub name: String,
    /// The `syntax` descriptor, for example `<length>` or `*`.
    pub syntax: String,
    /// The `inherits` descriptor.
    pub inherits: bool,
    /// The `initial-value` descriptor, if given.
    pub initial_value: Option<String>,
}

/// [CSSOM § 6.4.10 The CSSNamespaceRule Interface](https://drafts.csswg.org/cssom/#the-cssnamespacerule-interface)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssNamespaceRule {
    /// "The prefix attribute must return the prefix specified by the
    /// @namespace rule or the empty string if there is no prefix."
    pub prefix: Option<String>,
    /// The namespace URL.
    pub namespace_uri: String,
}

/// [CSS Nesting § 3.2 The CSSNestedDeclarations Interface](https://www.w3.org/TR/css-nesting-1/#cssnesteddeclarations)
///
/// Declarations that follow a nested rule inside a style rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssNestedDeclarations {
    /// The declarations.
    pub declarations: StyleProperties,
}

/// [CSS Cascade 5 § 7.4.1 The CSSLayerBlockRule Interface](https://www.w3.org/TR/css-cascade-5/#the-csslayerblockrule-interface)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssLayerBlockRule {
    /// Layer name, `None` for an anonymous layer.
    pub name: Option<String>,
    /// Child rules, in source order.
    pub rules: Vec<CssRule>,
}

/// [CSS Cascade 5 § 7.4.2 The CSSLayerStatementRule Interface](https://www.w3.org/TR/css-cascade-5/#the-csslayerstatementrule-interface)
///
/// `@layer a, b.c;`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssLayerStatementRule {
    /// Declared layer names, in order.
    pub names: Vec<String>,
}
