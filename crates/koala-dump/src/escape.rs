//! Escaping for text that lands inside a dump line.
//!
//! Every renderer writes one entity per line, so user-supplied text must
//! never carry a raw line break. [`OneLine`] escapes line breaks and tabs
//! in free text such as CSS values. [`Quoted`] additionally escapes `\`
//! and `"` for text written between double quotes, so that a literal
//! backslash followed by `n` stays distinct from a newline.

use std::fmt::{self, Write};

/// Free text with `\n`, `\r`, `\f` and `\t` escaped.
pub(crate) struct OneLine<T>(pub T);

/// Text for a `"..."` slot with `\`, `"` and line breaks escaped.
pub(crate) struct Quoted<T>(pub T);

impl<T: fmt::Display> fmt::Display for OneLine<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = EscapingWriter { f, quoted: false };
        write!(out, "{}", self.0)
    }
}

impl<T: fmt::Display> fmt::Display for Quoted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = EscapingWriter { f, quoted: true };
        write!(out, "{}", self.0)
    }
}

struct EscapingWriter<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    quoted: bool,
}

impl Write for EscapingWriter<'_, '_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            match c {
                '\n' => self.f.write_str("\\n")?,
                '\r' => self.f.write_str("\\r")?,
                '\u{c}' => self.f.write_str("\\f")?,
                '\t' => self.f.write_str("\\t")?,
                '\\' | '"' if self.quoted => {
                    self.f.write_char('\\')?;
                    self.f.write_char(c)?;
                }
                c => self.f.write_char(c)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_line_escapes_breaks_and_keeps_backslashes() {
        assert_eq!(OneLine("{\n  a: b\r\n}").to_string(), "{\\n  a: b\\r\\n}");
        assert_eq!(OneLine("a\tb\u{c}c").to_string(), "a\\tb\\fc");
        assert_eq!(OneLine("\"\\201C\"").to_string(), "\"\\201C\"");
    }

    #[test]
    fn quoted_escapes_backslash_and_quote() {
        assert_eq!(Quoted("a\\nb").to_string(), "a\\\\nb");
        assert_eq!(Quoted("a\nb").to_string(), "a\\nb");
        assert_eq!(Quoted("say \"hi\"").to_string(), "say \\\"hi\\\"");
    }
}
