//! CSS rule renderer.
//!
//! One `dump_*_rule` function per rule kind, plus [`write_rule`], which
//! dispatches on the kind. Each rule writes its header at the writer's
//! current level and its contents one level deeper.

use std::fmt::{self, Write};

use koala_css::cssom::{
    CssFontFaceRule, CssImportRule, CssKeyframeRule, CssKeyframesRule, CssLayerBlockRule,
    CssLayerStatementRule, CssMarginRule, CssMediaRule, CssNamespaceRule, CssNestedDeclarations,
    CssPageRule, CssPropertyRule, CssRule, CssStyleRule, CssSupportsRule, Descriptors,
    ImportLayer, StyleProperties, SupportsCondition,
};
use koala_css::selector::serialize::{CssString, Ident, serialize_identifier};
use owo_colors::Style;

use crate::escape::OneLine;
use crate::options::CssDumpOptions;
use crate::selector::selector_line;
use crate::writer::TreeWriter;

/// A dotted layer name, each segment serialized as an identifier.
struct LayerName<'a>(&'a str);

impl fmt::Display for LayerName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.0.split('.').enumerate() {
            if index > 0 {
                f.write_char('.')?;
            }
            serialize_identifier(segment, f)?;
        }
        Ok(())
    }
}

fn at_keyword(writer: &TreeWriter<'_>, keyword: &str) -> String {
    writer.paint(keyword, Style::new().cyan())
}

/// Write `rule` at `options.indent_levels`.
///
/// # Panics
///
/// Panics if the rule tree nests deeper than `options.max_depth`.
pub fn dump_rule(out: &mut String, rule: &CssRule, options: &CssDumpOptions) {
    let mut writer = TreeWriter::new(out)
        .with_colorize(options.colorize)
        .with_max_depth(options.max_depth)
        .with_base_indent(options.indent_levels);
    write_rule(&mut writer, rule);
}

/// [`dump_rule`] with default options, into a new string.
#[must_use]
pub fn rule_to_string(rule: &CssRule) -> String {
    let mut out = String::new();
    dump_rule(&mut out, rule, &CssDumpOptions::default());
    out
}

/// Write `rule` at the writer's current level.
pub fn write_rule(writer: &mut TreeWriter<'_>, rule: &CssRule) {
    match rule {
        CssRule::Style(rule) => dump_style_rule(writer, rule),
        CssRule::FontFace(rule) => dump_font_face_rule(writer, rule),
        CssRule::Import(rule) => dump_import_rule(writer, rule),
        CssRule::Keyframe(rule) => dump_keyframe_rule(writer, rule),
        CssRule::Keyframes(rule) => dump_keyframes_rule(writer, rule),
        CssRule::Media(rule) => dump_media_rule(writer, rule),
        CssRule::Page(rule) => dump_page_rule(writer, rule),
        CssRule::Margin(rule) => dump_margin_rule(writer, rule),
        CssRule::Supports(rule) => dump_supports_rule(writer, rule),
        CssRule::Property(rule) => dump_property_rule(writer, rule),
        CssRule::Namespace(rule) => dump_namespace_rule(writer, rule),
        CssRule::NestedDeclarations(rule) => dump_nested_declarations(writer, rule),
        CssRule::LayerBlock(rule) => dump_layer_block_rule(writer, rule),
        CssRule::LayerStatement(rule) => dump_layer_statement_rule(writer, rule),
    }
}

fn write_child_rules(writer: &mut TreeWriter<'_>, rules: &[CssRule]) {
    if rules.is_empty() {
        return;
    }
    let mut nested = writer.indent();
    for rule in rules {
        write_rule(&mut nested, rule);
    }
}

fn write_nested_declarations(writer: &mut TreeWriter<'_>, properties: &StyleProperties) {
    if !properties.is_empty() {
        dump_style_properties(&mut writer.indent(), properties);
    }
}

/// Write one `name: value;` line per declaration, at the current level.
pub fn dump_style_properties(writer: &mut TreeWriter<'_>, properties: &StyleProperties) {
    for declaration in properties {
        let important = if declaration.important {
            " !important"
        } else {
            ""
        };
        writer.line(&format!(
            "{}: {}{important};",
            OneLine(&declaration.name),
            OneLine(&declaration.value)
        ));
    }
}

/// Write one `name: value;` line per descriptor, at the current level.
pub fn dump_descriptors(writer: &mut TreeWriter<'_>, descriptors: &Descriptors) {
    for descriptor in descriptors {
        writer.line(&format!(
            "{}: {};",
            OneLine(&descriptor.name),
            OneLine(&descriptor.value)
        ));
    }
}

/// Selector lines, then declarations and nested rules one level deeper.
pub fn dump_style_rule(writer: &mut TreeWriter<'_>, rule: &CssStyleRule) {
    if rule.selectors.is_empty() {
        writer.line("/* empty selector list */");
    }
    let last = rule.selectors.len().saturating_sub(1);
    for (index, selector) in rule.selectors.iter().enumerate() {
        let separator = if index == last { "" } else { "," };
        writer.line(&selector_line(selector, separator));
    }
    write_nested_declarations(writer, &rule.declarations);
    write_child_rules(writer, &rule.child_rules);
}

/// `@font-face`, then its descriptors.
pub fn dump_font_face_rule(writer: &mut TreeWriter<'_>, rule: &CssFontFaceRule) {
    let header = at_keyword(writer, "@font-face");
    writer.line(&header);
    if !rule.descriptors.is_empty() {
        dump_descriptors(&mut writer.indent(), &rule.descriptors);
    }
}

/// `@import url("href")[ layer][ supports(...)][ media];`
pub fn dump_import_rule(writer: &mut TreeWriter<'_>, rule: &CssImportRule) {
    let mut line = format!("{} url({})", at_keyword(writer, "@import"), CssString(&rule.href));
    match &rule.layer {
        Some(ImportLayer::Anonymous) => line.push_str(" layer"),
        Some(ImportLayer::Named(name)) => {
            let _ = write!(line, " layer({})", LayerName(name));
        }
        None => {}
    }
    match &rule.supports {
        // The declaration form is written without its own parentheses.
        Some(SupportsCondition::Declaration { property, value }) => {
            let _ = write!(
                line,
                " supports({}: {})",
                OneLine(property),
                OneLine(value)
            );
        }
        Some(condition) => {
            let _ = write!(line, " supports({})", OneLine(condition));
        }
        None => {}
    }
    if !rule.media.is_empty() {
        let _ = write!(line, " {}", OneLine(&rule.media));
    }
    line.push(';');
    writer.line(&line);
}

/// The key text, then the keyframe's declarations.
pub fn dump_keyframe_rule(writer: &mut TreeWriter<'_>, rule: &CssKeyframeRule) {
    writer.line(&OneLine(&rule.key_text).to_string());
    write_nested_declarations(writer, &rule.declarations);
}

/// `@keyframes name`, then each keyframe.
pub fn dump_keyframes_rule(writer: &mut TreeWriter<'_>, rule: &CssKeyframesRule) {
    let header = format!("{} {}", at_keyword(writer, "@keyframes"), Ident(&rule.name));
    writer.line(&header);
    if rule.keyframes.is_empty() {
        return;
    }
    let mut nested = writer.indent();
    for keyframe in &rule.keyframes {
        dump_keyframe_rule(&mut nested, keyframe);
    }
}

/// `@media <list>`, then the child rules.
pub fn dump_media_rule(writer: &mut TreeWriter<'_>, rule: &CssMediaRule) {
    let mut header = at_keyword(writer, "@media");
    if !rule.media.is_empty() {
        let _ = write!(header, " {}", OneLine(&rule.media));
    }
    writer.line(&header);
    write_child_rules(writer, &rule.rules);
}

/// `@page[ selector]`, then descriptors and margin rules.
pub fn dump_page_rule(writer: &mut TreeWriter<'_>, rule: &CssPageRule) {
    let mut header = at_keyword(writer, "@page");
    if !rule.selector.is_empty() {
        let _ = write!(header, " {}", OneLine(&rule.selector));
    }
    writer.line(&header);
    if rule.descriptors.is_empty() && rule.margin_rules.is_empty() {
        return;
    }
    let mut nested = writer.indent();
    dump_descriptors(&mut nested, &rule.descriptors);
    for margin in &rule.margin_rules {
        dump_margin_rule(&mut nested, margin);
    }
}

/// `@<name>`, then the margin box's declarations.
pub fn dump_margin_rule(writer: &mut TreeWriter<'_>, rule: &CssMarginRule) {
    let header = at_keyword(writer, &format!("@{}", OneLine(&rule.name)));
    writer.line(&header);
    write_nested_declarations(writer, &rule.declarations);
}

/// `@supports <condition>`, then the child rules.
pub fn dump_supports_rule(writer: &mut TreeWriter<'_>, rule: &CssSupportsRule) {
    let header = format!(
        "{} {}",
        at_keyword(writer, "@supports"),
        OneLine(&rule.condition)
    );
    writer.line(&header);
    write_child_rules(writer, &rule.rules);
}

/// `@property name`, then its three descriptors.
pub fn dump_property_rule(writer: &mut TreeWriter<'_>, rule: &CssPropertyRule) {
    let header = format!("{} {}", at_keyword(writer, "@property"), Ident(&rule.name));
    writer.line(&header);
    let mut nested = writer.indent();
    nested.line(&format!("syntax: {};", CssString(&rule.syntax)));
    nested.line(&format!("inherits: {};", rule.inherits));
    if let Some(initial_value) = &rule.initial_value {
        nested.line(&format!("initial-value: {};", OneLine(initial_value)));
    }
}

/// `@namespace[ prefix] url("uri");`
pub fn dump_namespace_rule(writer: &mut TreeWriter<'_>, rule: &CssNamespaceRule) {
    let mut line = at_keyword(writer, "@namespace");
    if let Some(prefix) = rule.prefix.as_deref().filter(|p| !p.is_empty()) {
        let _ = write!(line, " {}", Ident(prefix));
    }
    let _ = write!(line, " url({});", CssString(&rule.namespace_uri));
    writer.line(&line);
}

/// A marker comment, then the declarations.
pub fn dump_nested_declarations(writer: &mut TreeWriter<'_>, rule: &CssNestedDeclarations) {
    writer.line("/* nested declarations */");
    write_nested_declarations(writer, &rule.declarations);
}

/// `@layer[ name]`, then the child rules.
pub fn dump_layer_block_rule(writer: &mut TreeWriter<'_>, rule: &CssLayerBlockRule) {
    let mut header = at_keyword(writer, "@layer");
    if let Some(name) = &rule.name {
        let _ = write!(header, " {}", LayerName(name));
    }
    writer.line(&header);
    write_child_rules(writer, &rule.rules);
}

/// `@layer a, b;`
pub fn dump_layer_statement_rule(writer: &mut TreeWriter<'_>, rule: &CssLayerStatementRule) {
    let mut line = at_keyword(writer, "@layer");
    for (index, name) in rule.names.iter().enumerate() {
        let separator = if index == 0 { " " } else { ", " };
        let _ = write!(line, "{separator}{}", LayerName(name));
    }
    line.push(';');
    writer.line(&line);
}
