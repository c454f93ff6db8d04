//! Selector renderer.

use koala_css::selector::Selector;

use crate::writer::TreeWriter;

/// The selector's canonical text, followed by
/// ` /* specificity (a,b,c) */` when its specificity is known.
pub(crate) fn selector_line(selector: &Selector, separator: &str) -> String {
    match selector.specificity {
        Some(specificity) => format!("{selector}{separator} /* specificity {specificity} */"),
        None => format!("{selector}{separator}"),
    }
}

/// Write `selector` as a single line at `indent_levels`.
///
/// # Panics
///
/// Panics if `indent_levels` exceeds [`crate::DEFAULT_MAX_DEPTH`].
pub fn dump_selector(out: &mut String, selector: &Selector, indent_levels: usize) {
    let mut writer = TreeWriter::new(out).with_base_indent(indent_levels);
    writer.line(&selector_line(selector, ""));
}

/// [`dump_selector`] into a new string.
#[must_use]
pub fn selector_to_string(selector: &Selector) -> String {
    let mut out = String::new();
    dump_selector(&mut out, selector, 0);
    out
}
