//! Paint tree renderer.

use koala_css::paint::{Paintable, PaintableKind};
use koala_dom::DomTree;
use owo_colors::Style;

use crate::layout::format_rect;
use crate::options::PaintDumpOptions;
use crate::writer::TreeWriter;

fn kind_style(kind: PaintableKind) -> Style {
    match kind {
        PaintableKind::PaintableWithLines => Style::new().blue(),
        PaintableKind::PaintableBox => Style::new().yellow(),
        PaintableKind::TextPaintable => Style::new().magenta(),
        PaintableKind::InlinePaintable => Style::new().green(),
    }
}

/// Write the paint tree rooted at `root` in pre-order, following each
/// paintable's own children. Depth in the output is paint-tree depth.
///
/// # Panics
///
/// Panics if the tree nests deeper than `options.max_depth`.
pub fn dump_paint_tree(
    out: &mut String,
    root: &Paintable<'_>,
    dom: &DomTree,
    options: &PaintDumpOptions,
) {
    let mut writer = TreeWriter::new(out)
        .with_colorize(options.colorize)
        .with_max_depth(options.max_depth)
        .with_base_indent(options.indent);
    write_paintable(&mut writer, root, dom);
}

/// [`dump_paint_tree`] with default options, into a new string.
#[must_use]
pub fn paint_tree_to_string(root: &Paintable<'_>, dom: &DomTree) -> String {
    let mut out = String::new();
    dump_paint_tree(&mut out, root, dom, &PaintDumpOptions::default());
    out
}

fn write_paintable(writer: &mut TreeWriter<'_>, paintable: &Paintable<'_>, dom: &DomTree) {
    let name = writer.paint(paintable.kind.name(), kind_style(paintable.kind));
    let mut header = format!("{name} ({})", paintable.layout_box.debug_description(dom));
    if let Some(rect) = paintable.absolute_border_box_rect() {
        header.push(' ');
        header.push_str(&format_rect(rect));
    }
    writer.line(&header);

    if paintable.children.is_empty() {
        return;
    }
    let mut nested = writer.indent();
    for child in &paintable.children {
        write_paintable(&mut nested, child, dom);
    }
}
