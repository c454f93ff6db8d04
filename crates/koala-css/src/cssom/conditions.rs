//! Conditional rule preludes: media query lists and `@supports` conditions.
//!
//! [CSS Conditional Rules Level 3](https://www.w3.org/TR/css-conditional-3/)

use std::fmt;

/// [CSSOM § 4.1 The MediaList Interface](https://drafts.csswg.org/cssom/#the-medialist-interface)
///
/// "An object that implements the MediaList interface has an associated
/// collection of media queries."
///
/// Queries are stored as their serialized text, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaList {
    queries: Vec<String>,
}

impl MediaList {
    /// An empty media list, which matches every medium.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            queries: Vec::new(),
        }
    }

    /// [CSSOM § 4.1 appendMedium()](https://drafts.csswg.org/cssom/#dom-medialist-appendmedium)
    ///
    /// Duplicates are ignored: "If comparing m with any of the media queries
    /// in the collection of media queries returns true, then return."
    pub fn append(&mut self, query: impl Into<String>) {
        let query = query.into();
        if !self.queries.contains(&query) {
            self.queries.push(query);
        }
    }

    /// The media queries in order.
    #[must_use]
    pub fn queries(&self) -> &[String] {
        &self.queries
    }

    /// Whether the list holds no queries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for MediaList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for query in iter {
            list.append(query);
        }
        list
    }
}

/// [CSSOM § 4.1](https://drafts.csswg.org/cssom/#serialize-a-media-query-list)
///
/// "To serialize a media query list run these steps: ... Serialize each
/// media query in the list of media queries, in the same order as they
/// appear in the media query list, and then serialize the list."
impl fmt::Display for MediaList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.queries.join(", "))
    }
}

/// [CSS Conditional § 6.1 Definition of @supports](https://www.w3.org/TR/css-conditional-3/#at-supports)
///
/// ```text
/// <supports-condition> = not <supports-in-parens>
///                      | <supports-in-parens> [ and <supports-in-parens> ]*
///                      | <supports-in-parens> [ or <supports-in-parens> ]*
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SupportsCondition {
    /// `(property: value)`
    Declaration {
        /// Property name.
        property: String,
        /// Property value text.
        value: String,
    },
    /// `selector(<complex-selector>)`, stored as selector text.
    Selector(String),
    /// `not <condition>`
    Not(Box<SupportsCondition>),
    /// Operands joined by `and`.
    And(Vec<SupportsCondition>),
    /// Operands joined by `or`.
    Or(Vec<SupportsCondition>),
    /// `<general-enclosed>`: anything the grammar does not recognize,
    /// kept verbatim. It always evaluates to false.
    GeneralEnclosed(String),
}

impl SupportsCondition {
    /// `(property: value)`
    #[must_use]
    pub fn declaration(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Declaration {
            property: property.into(),
            value: value.into(),
        }
    }

    const fn is_compound(&self) -> bool {
        matches!(self, Self::Not(_) | Self::And(_) | Self::Or(_))
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_compound() {
            write!(f, "({self})")
        } else {
            fmt::Display::fmt(self, f)
        }
    }

    fn fmt_joined(
        operands: &[Self],
        keyword: &str,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for (index, operand) in operands.iter().enumerate() {
            if index > 0 {
                write!(f, " {keyword} ")?;
            }
            operand.fmt_operand(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for SupportsCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Declaration { property, value } => write!(f, "({property}: {value})"),
            Self::Selector(selector) => write!(f, "selector({selector})"),
            Self::Not(inner) => {
                f.write_str("not ")?;
                inner.fmt_operand(f)
            }
            Self::And(operands) => Self::fmt_joined(operands, "and", f),
            Self::Or(operands) => Self::fmt_joined(operands, "or", f),
            Self::GeneralEnclosed(text) => f.write_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_list_joins_with_commas() {
        let list: MediaList = ["screen", "print", "screen"].into_iter().collect();
        assert_eq!(list.to_string(), "screen, print");
        assert_eq!(MediaList::new().to_string(), "");
    }

    #[test]
    fn nested_supports_conditions_are_parenthesized() {
        let condition = SupportsCondition::And(vec![
            SupportsCondition::declaration("display", "grid"),
            SupportsCondition::Not(Box::new(SupportsCondition::Or(vec![
                SupportsCondition::Selector(":has(a)".to_string()),
                SupportsCondition::declaration("gap", "1px"),
            ]))),
        ]);
        assert_eq!(
            condition.to_string(),
            "(display: grid) and (not (selector(:has(a)) or (gap: 1px)))"
        );
    }

    #[test]
    fn simple_operands_are_written_without_extra_parentheses() {
        let condition = SupportsCondition::Not(Box::new(SupportsCondition::declaration(
            "display", "grid",
        )));
        assert_eq!(condition.to_string(), "not (display: grid)");

        let general = SupportsCondition::Or(vec![
            SupportsCondition::GeneralEnclosed("(foo)".to_string()),
            SupportsCondition::Selector("a > b".to_string()),
        ]);
        assert_eq!(general.to_string(), "(foo) or selector(a > b)");
    }
}
