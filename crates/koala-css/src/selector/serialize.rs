//! [CSSOM § 6.7.2 Serializing Selectors](https://drafts.csswg.org/cssom/#serializing-selectors)
//!
//! `Display` implementations that turn the selector model back into
//! canonical CSS text, plus the identifier and string escaping helpers
//! from [CSSOM § 2.1 Common Serializing Idioms](https://drafts.csswg.org/cssom/#common-serializing-idioms).

use std::fmt::{self, Write};

use super::{
    AnPlusB, AttributeSelector, Combinator, ComplexSelector, CompoundSelector, PseudoClass,
    Selector, SimpleSelector, Specificity,
};

/// [CSSOM § 2.1](https://drafts.csswg.org/cssom/#serialize-an-identifier)
///
/// "To serialize an identifier means to create a string represented by the
/// concatenation of, for each character of the identifier: ..."
///
/// # Errors
///
/// Propagates errors from the underlying writer.
pub fn serialize_identifier(ident: &str, out: &mut impl Write) -> fmt::Result {
    let first = ident.chars().next();
    if ident == "-" {
        // "If the character is the first character and is a "-" (U+002D),
        // and there is no second character, then the escaped character."
        return out.write_str("\\-");
    }
    for (index, c) in ident.chars().enumerate() {
        match c {
            // "If the character is NULL (U+0000), then the REPLACEMENT CHARACTER (U+FFFD)."
            '\0' => out.write_char('\u{FFFD}')?,
            // "If the character is in the range [\1-\1f] (U+0001 to U+001F) or is U+007F,
            // then the character escaped as code point."
            '\u{1}'..='\u{1f}' | '\u{7f}' => write!(out, "\\{:x} ", u32::from(c))?,
            // "If the character is the first character and is in the range [0-9],
            // then the character escaped as code point."
            // "If the character is the second character and is in the range [0-9]
            // and the first character is a "-", then the character escaped as code point."
            '0'..='9' if index == 0 || (index == 1 && first == Some('-')) => {
                write!(out, "\\{:x} ", u32::from(c))?;
            }
            // "If the character is not handled by one of the above rules and is
            // greater than or equal to U+0080, is "-", "_", or in one of the
            // ranges [0-9], [A-Z], or [a-z], then the character itself."
            c if !c.is_ascii() || c == '-' || c == '_' || c.is_ascii_alphanumeric() => {
                out.write_char(c)?;
            }
            // "Otherwise, the escaped character."
            c => {
                out.write_char('\\')?;
                out.write_char(c)?;
            }
        }
    }
    Ok(())
}

/// [CSSOM § 2.1](https://drafts.csswg.org/cssom/#serialize-a-string)
///
/// "To serialize a string means to create a string represented by '"'
/// (U+0022), followed by the result of applying the rules below to each
/// character of the given string, followed by '"' (U+0022)."
///
/// # Errors
///
/// Propagates errors from the underlying writer.
pub fn serialize_string(value: &str, out: &mut impl Write) -> fmt::Result {
    out.write_char('"')?;
    for c in value.chars() {
        match c {
            '\0' => out.write_char('\u{FFFD}')?,
            '\u{1}'..='\u{1f}' | '\u{7f}' => write!(out, "\\{:x} ", u32::from(c))?,
            '"' | '\\' => {
                out.write_char('\\')?;
                out.write_char(c)?;
            }
            c => out.write_char(c)?,
        }
    }
    out.write_char('"')
}

/// Adapter so `serialize_identifier` can be used inside `format!`.
pub struct Ident<'a>(pub &'a str);

impl fmt::Display for Ident<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        serialize_identifier(self.0, f)
    }
}

/// Adapter so `serialize_string` can be used inside `format!`.
pub struct CssString<'a>(pub &'a str);

impl fmt::Display for CssString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        serialize_string(self.0, f)
    }
}

impl fmt::Display for SimpleSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(name) => serialize_identifier(name, f),
            Self::Universal => f.write_char('*'),
            Self::Class(name) => write!(f, ".{}", Ident(name)),
            Self::Id(name) => write!(f, "#{}", Ident(name)),
            Self::Attribute(attr) => fmt::Display::fmt(attr, f),
            Self::PseudoClass(pc) => fmt::Display::fmt(pc, f),
            Self::PseudoElement(name) => write!(f, "::{}", Ident(name)),
            Self::Nesting => f.write_char('&'),
        }
    }
}

impl fmt::Display for AttributeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (operator, value) = match self {
            Self::Exists(name) => return write!(f, "[{}]", Ident(name)),
            Self::Equals(_, value) => ("=", value),
            Self::Includes(_, value) => ("~=", value),
            Self::DashMatch(_, value) => ("|=", value),
            Self::PrefixMatch(_, value) => ("^=", value),
            Self::SuffixMatch(_, value) => ("$=", value),
            Self::SubstringMatch(_, value) => ("*=", value),
        };
        write!(f, "[{}{operator}{}]", Ident(self.name()), CssString(value))
    }
}

impl fmt::Display for PseudoClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Root => "root",
            Self::FirstChild => "first-child",
            Self::LastChild => "last-child",
            Self::FirstOfType => "first-of-type",
            Self::LastOfType => "last-of-type",
            Self::OnlyChild => "only-child",
            Self::Empty => "empty",
            Self::Link => "link",
            Self::Visited => "visited",
            Self::Hover => "hover",
            Self::Focus => "focus",
            Self::Active => "active",
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
            Self::NthChild(anb) => return write!(f, ":nth-child({anb})"),
            Self::NthOfType(anb) => return write!(f, ":nth-of-type({anb})"),
            Self::Not(list) => return write!(f, ":not({})", SelectorList(list)),
            Self::Is(list) => return write!(f, ":is({})", SelectorList(list)),
            Self::Where(list) => return write!(f, ":where({})", SelectorList(list)),
            Self::Other(name) => return write!(f, ":{}", Ident(name)),
        };
        write!(f, ":{name}")
    }
}

/// [CSS Syntax § 6.2 Serializing \<an+b\>](https://www.w3.org/TR/css-syntax-3/#serializing-anb)
impl fmt::Display for AnPlusB {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // "If A is zero, return the serialization of B."
        if self.step == 0 {
            return write!(f, "{}", self.offset);
        }
        // "If A is 1, append "n"; if A is -1, append "-n"; otherwise append A then "n"."
        match self.step {
            1 => f.write_str("n")?,
            -1 => f.write_str("-n")?,
            step => write!(f, "{step}n")?,
        }
        // "If B is greater than zero, append "+" followed by B.
        // If B is less than zero, append B."
        match self.offset {
            0 => Ok(()),
            b if b > 0 => write!(f, "+{b}"),
            b => write!(f, "{b}"),
        }
    }
}

/// Comma-separated selector list, as used inside `:is()` and friends.
struct SelectorList<'a>(&'a [ComplexSelector]);

impl fmt::Display for SelectorList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, selector) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(selector, f)?;
        }
        Ok(())
    }
}

impl fmt::Display for CompoundSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // An empty compound only appears as an implied universal selector.
        if self.simple_selectors.is_empty() {
            return f.write_char('*');
        }
        for simple in &self.simple_selectors {
            fmt::Display::fmt(simple, f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Descendant => " ",
            Self::Child => " > ",
            Self::NextSibling => " + ",
            Self::SubsequentSibling => " ~ ",
            Self::Column => " || ",
        })
    }
}

impl fmt::Display for ComplexSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (compound, combinator) in self.source_order() {
            fmt::Display::fmt(compound, f)?;
            if let Some(combinator) = combinator {
                fmt::Display::fmt(&combinator, f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.complex, f)
    }
}

impl fmt::Display for Specificity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.0, self.1, self.2)
    }
}
