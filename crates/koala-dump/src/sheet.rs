//! Style sheet renderer.

use std::fmt::Write;

use koala_css::cssom::{CssStyleSheet, StylesheetSource};
use owo_colors::Style;

use crate::css::write_rule;
use crate::escape::{OneLine, Quoted};
use crate::options::{CssDumpOptions, InertRules};
use crate::writer::TreeWriter;

/// Write a `CSSStyleSheet (...)` header line followed by every rule of
/// the sheet, in order, all at `options.indent_levels`.
///
/// A disabled sheet still lists all of its rules; see [`InertRules`].
///
/// # Panics
///
/// Panics if the rule tree nests deeper than `options.max_depth`.
pub fn dump_sheet(out: &mut String, sheet: &CssStyleSheet, options: &CssDumpOptions) {
    let mut writer = TreeWriter::new(out)
        .with_colorize(options.colorize)
        .with_max_depth(options.max_depth)
        .with_base_indent(options.indent_levels);

    let location = match &sheet.source {
        StylesheetSource::External { href } => href.as_str(),
        StylesheetSource::Inline => "inline",
    };
    let mut header = format!(
        "{} ({})",
        writer.paint("CSSStyleSheet", Style::new().bold()),
        OneLine(location)
    );
    if let Some(title) = &sheet.title {
        let _ = write!(header, " \"{}\"", Quoted(title));
    }
    let count = sheet.rules.len();
    let _ = write!(header, ": {count} {}", if count == 1 { "rule" } else { "rules" });
    if sheet.disabled && options.inert_rules == InertRules::Flagged {
        let _ = write!(header, " {}", writer.paint("[disabled]", Style::new().red()));
    }
    writer.line(&header);

    for rule in &sheet.rules {
        write_rule(&mut writer, rule);
    }
}

/// [`dump_sheet`] with default options, into a new string.
#[must_use]
pub fn sheet_to_string(sheet: &CssStyleSheet) -> String {
    let mut out = String::new();
    dump_sheet(&mut out, sheet, &CssDumpOptions::default());
    out
}
