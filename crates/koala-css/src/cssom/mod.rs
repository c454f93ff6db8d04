//! CSS Object Model.
//!
//! [CSSOM](https://drafts.csswg.org/cssom/)
//!
//! The rule tree of a style sheet: [`CssStyleSheet`] owns a list of
//! [`CssRule`]s, and grouping rules own their children. The set of rule
//! kinds is closed; [`CssRuleType`] mirrors it without payloads.

mod conditions;
mod declarations;
mod rules;
mod stylesheet;

use strum::EnumCount;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

pub use conditions::{MediaList, SupportsCondition};
pub use declarations::{Descriptor, Descriptors, StyleDeclaration, StyleProperties};
pub use rules::{
    CssFontFaceRule, CssImportRule, CssKeyframeRule, CssKeyframesRule, CssLayerBlockRule,
    CssLayerStatementRule, CssMarginRule, CssMediaRule, CssNamespaceRule, CssNestedDeclarations,
    CssPageRule, CssPropertyRule, CssStyleRule, CssSupportsRule, ImportLayer,
};
pub use stylesheet::{CssStyleSheet, StylesheetSource};

/// [CSSOM § 6.4.2 The CSSRule Interface](https://drafts.csswg.org/cssom/#the-cssrule-interface)
///
/// "A CSS rule is an abstract concept that denotes a rule as defined by
/// the CSS specification."
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CssRule {
    /// `selector { ... }`
    Style(CssStyleRule),
    /// `@font-face { ... }`
    FontFace(CssFontFaceRule),
    /// `@import url(...);`
    Import(CssImportRule),
    /// A single keyframe. Normally owned by a `@keyframes` rule.
    Keyframe(CssKeyframeRule),
    /// `@keyframes name { ... }`
    Keyframes(CssKeyframesRule),
    /// `@media ... { ... }`
    Media(CssMediaRule),
    /// `@page ... { ... }`
    Page(CssPageRule),
    /// `@top-left { ... }` and the other margin rules. Normally owned by `@page`.
    Margin(CssMarginRule),
    /// `@supports ... { ... }`
    Supports(CssSupportsRule),
    /// `@property --name { ... }`
    Property(CssPropertyRule),
    /// `@namespace ...;`
    Namespace(CssNamespaceRule),
    /// Declarations that follow nested rules.
    NestedDeclarations(CssNestedDeclarations),
    /// `@layer name { ... }`
    LayerBlock(CssLayerBlockRule),
    /// `@layer a, b;`
    LayerStatement(CssLayerStatementRule),
}

/// The kind of a [`CssRule`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCountMacro, EnumIter, IntoStaticStr)]
pub enum CssRuleType {
    /// `CSSStyleRule`
    #[strum(serialize = "CSSStyleRule")]
    Style,
    /// `CSSFontFaceRule`
    #[strum(serialize = "CSSFontFaceRule")]
    FontFace,
    /// `CSSImportRule`
    #[strum(serialize = "CSSImportRule")]
    Import,
    /// `CSSKeyframeRule`
    #[strum(serialize = "CSSKeyframeRule")]
    Keyframe,
    /// `CSSKeyframesRule`
    #[strum(serialize = "CSSKeyframesRule")]
    Keyframes,
    /// `CSSMediaRule`
    #[strum(serialize = "CSSMediaRule")]
    Media,
    /// `CSSPageRule`
    #[strum(serialize = "CSSPageRule")]
    Page,
    /// `CSSMarginRule`
    #[strum(serialize = "CSSMarginRule")]
    Margin,
    /// `CSSSupportsRule`
    #[strum(serialize = "CSSSupportsRule")]
    Supports,
    /// `CSSPropertyRule`
    #[strum(serialize = "CSSPropertyRule")]
    Property,
    /// `CSSNamespaceRule`
    #[strum(serialize = "CSSNamespaceRule")]
    Namespace,
    /// `CSSNestedDeclarations`
    #[strum(serialize = "CSSNestedDeclarations")]
    NestedDeclarations,
    /// `CSSLayerBlockRule`
    #[strum(serialize = "CSSLayerBlockRule")]
    LayerBlock,
    /// `CSSLayerStatementRule`
    #[strum(serialize = "CSSLayerStatementRule")]
    LayerStatement,
}

/// Number of concrete rule kinds. Adding a kind must be a deliberate change
/// to every consumer that matches on [`CssRule`].
pub const RULE_KIND_COUNT: usize = 14;

const _: () = assert!(CssRuleType::COUNT == RULE_KIND_COUNT);

impl CssRuleType {
    /// The CSSOM interface name, for example `CSSMediaRule`.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        self.into()
    }
}

impl CssRule {
    /// The payload-free kind of this rule.
    #[must_use]
    pub const fn rule_type(&self) -> CssRuleType {
        match self {
            Self::Style(_) => CssRuleType::Style,
            Self::FontFace(_) => CssRuleType::FontFace,
            Self::Import(_) => CssRuleType::Import,
            Self::Keyframe(_) => CssRuleType::Keyframe,
            Self::Keyframes(_) => CssRuleType::Keyframes,
            Self::Media(_) => CssRuleType::Media,
            Self::Page(_) => CssRuleType::Page,
            Self::Margin(_) => CssRuleType::Margin,
            Self::Supports(_) => CssRuleType::Supports,
            Self::Property(_) => CssRuleType::Property,
            Self::Namespace(_) => CssRuleType::Namespace,
            Self::NestedDeclarations(_) => CssRuleType::NestedDeclarations,
            Self::LayerBlock(_) => CssRuleType::LayerBlock,
            Self::LayerStatement(_) => CssRuleType::LayerStatement,
        }
    }

    /// The CSSOM interface name of this rule.
    #[must_use]
    pub fn class_name(&self) -> &'static str {
        self.rule_type().class_name()
    }

    /// [CSSOM § 6.4.4 The CSSGroupingRule Interface](https://drafts.csswg.org/cssom/#the-cssgroupingrule-interface)
    ///
    /// Child rules of grouping rules and nested style rules. Empty for
    /// every other kind, including `@keyframes` and `@page`, whose children
    /// are not general rules.
    #[must_use]
    pub fn child_rules(&self) -> &[Self] {
        match self {
            Self::Style(rule) => &rule.child_rules,
            Self::Media(rule) => &rule.rules,
            Self::Supports(rule) => &rule.rules,
            Self::LayerBlock(rule) => &rule.rules,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn class_names_are_distinct_cssom_interfaces() {
        let mut names: Vec<&str> = CssRuleType::iter().map(CssRuleType::class_name).collect();
        assert!(names.iter().all(|n| n.starts_with("CSS")));
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), RULE_KIND_COUNT);
    }

    #[test]
    fn rule_type_matches_variant() {
        let rule = CssRule::LayerStatement(CssLayerStatementRule {
            names: vec!["base".to_string()],
        });
        assert_eq!(rule.rule_type(), CssRuleType::LayerStatement);
        assert_eq!(rule.class_name(), "CSSLayerStatementRule");
        assert!(rule.child_rules().is_empty());
    }
}
