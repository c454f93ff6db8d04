//! [CSSOM § 6.1.2 The CSSStyleSheet Interface](https://drafts.csswg.org/cssom/#the-cssstylesheet-interface)

use super::CssRule;

/// Where a style sheet came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StylesheetSource {
    /// [§ 6.1](https://drafts.csswg.org/cssom/#concept-css-style-sheet-location)
    /// "location: Specified when created. The absolute-URL string of the
    /// first request of the CSS style sheet or null if the CSS style sheet
    /// was embedded."
    External {
        /// The sheet's URL.
        href: String,
    },
    /// A `<style>` element or a constructed sheet.
    Inline,
}

/// [CSSOM § 6.1 CSS Style Sheets](https://drafts.csswg.org/cssom/#css-style-sheets)
///
/// "A CSS style sheet is an abstract concept that represents a style sheet
/// as defined by the CSS specification."
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssStyleSheet {
    /// "location"
    pub source: StylesheetSource,
    /// "title: Specified when created. The title of the CSS style sheet,
    /// which can be the empty string."
    pub title: Option<String>,
    /// "disabled flag: Either set or unset. Unset by default."
    pub disabled: bool,
    /// "CSS rules: The CSS rules associated with the CSS style sheet."
    pub rules: Vec<CssRule>,
}

impl CssStyleSheet {
    /// An enabled, untitled inline sheet.
    #[must_use]
    pub const fn inline(rules: Vec<CssRule>) -> Self {
        Self {
            source: StylesheetSource::Inline,
            title: None,
            disabled: false,
            rules,
        }
    }

    /// An enabled, untitled sheet loaded from `href`.
    #[must_use]
    pub fn external(href: impl Into<String>, rules: Vec<CssRule>) -> Self {
        Self {
            source: StylesheetSource::External { href: href.into() },
            title: None,
            disabled: false,
            rules,
        }
    }

    /// [§ 6.1.1 href](https://drafts.csswg.org/cssom/#dom-stylesheet-href)
    #[must_use]
    pub fn href(&self) -> Option<&str> {
        match &self.source {
            StylesheetSource::External { href } => Some(href),
            StylesheetSource::Inline => None,
        }
    }

    /// Set the sheet title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the disabled flag.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}
