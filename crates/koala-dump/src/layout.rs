//! Layout tree renderer.

use std::fmt::Write;

use koala_css::layout::{BoxDimensions, LayoutBox, Rect};
use koala_dom::DomTree;
use owo_colors::Style;

use crate::escape::{OneLine, Quoted};
use crate::options::LayoutDumpOptions;
use crate::writer::TreeWriter;

/// Write the layout tree rooted at `root` in pre-order.
///
/// Box nodes get a header of the form
/// `<Class> <label> at (x,y) content-size WxH[ flags] children: inline|not-inline`.
/// Other nodes get `<Class> <label>`, and text runs add their text.
/// `show_box_model` and `show_cascaded_properties` add detail lines one
/// level below the node, before its children.
///
/// # Panics
///
/// Panics if the tree nests deeper than `options.max_depth`.
pub fn dump_layout_tree(
    out: &mut String,
    root: &LayoutBox,
    dom: &DomTree,
    options: &LayoutDumpOptions,
) {
    let mut writer = TreeWriter::new(out)
        .with_colorize(options.colorize)
        .with_max_depth(options.max_depth);
    write_layout_node(&mut writer, root, dom, options);
}

/// [`dump_layout_tree`] with the box model shown.
#[must_use]
pub fn layout_tree_to_string(root: &LayoutBox, dom: &DomTree) -> String {
    let mut out = String::new();
    let options = LayoutDumpOptions::default().with_box_model(true);
    dump_layout_tree(&mut out, root, dom, &options);
    out
}

fn write_layout_node(
    writer: &mut TreeWriter<'_>,
    layout_box: &LayoutBox,
    dom: &DomTree,
    options: &LayoutDumpOptions,
) {
    let is_box = layout_box.is_box(dom);
    let header = if is_box {
        box_header(writer, layout_box, dom)
    } else {
        inline_header(writer, layout_box, dom)
    };
    writer.line(&header);

    let box_model = (options.show_box_model && is_box)
        .then(|| box_model_line(layout_box.dimensions.as_ref()));
    let cascaded = layout_box
        .cascaded
        .as_ref()
        .filter(|c| options.show_cascaded_properties && !c.is_empty());
    if box_model.is_none() && cascaded.is_none() && layout_box.children.is_empty() {
        return;
    }

    let mut nested = writer.indent();
    if let Some(line) = box_model {
        nested.line(&line);
    }
    for (name, value) in cascaded.into_iter().flat_map(|c| c.iter()) {
        nested.line(&format!("({}: {})", OneLine(name), OneLine(value)));
    }
    for child in &layout_box.children {
        write_layout_node(&mut nested, child, dom, options);
    }
}

fn box_header(writer: &TreeWriter<'_>, layout_box: &LayoutBox, dom: &DomTree) -> String {
    let class = writer.paint(layout_box.layout_class_name(dom), Style::new().blue());
    let mut header = format!("{class} {}", layout_box.node_label(dom));

    match &layout_box.dimensions {
        Some(dimensions) => {
            let content = dimensions.content;
            let _ = write!(
                header,
                " at ({:.2},{:.2}) content-size {:.2}x{:.2}",
                content.x, content.y, content.width, content.height
            );
        }
        None => header.push_str(" (not laid out)"),
    }

    let display = layout_box.display;
    let flags = [
        (layout_box.is_positioned(), "positioned", Style::new().red().bold()),
        (layout_box.float_side.is_some(), "floating", Style::new().green().bold()),
        (display.is_inline_block(), "inline-block", Style::new().cyan()),
        (display.is_flex_container(), "flex-container", Style::new().blue().bold()),
        (display.is_grid_container(), "grid-container", Style::new().magenta().bold()),
    ];
    for (set, flag, style) in flags {
        if set {
            let _ = write!(header, " {}", writer.paint(flag, style));
        }
    }

    let children = if layout_box.children_are_inline() {
        "inline"
    } else {
        "not-inline"
    };
    let _ = write!(header, " children: {children}");
    header
}

fn inline_header(writer: &TreeWriter<'_>, layout_box: &LayoutBox, dom: &DomTree) -> String {
    let class = writer.paint(layout_box.layout_class_name(dom), Style::new().yellow());
    let mut header = format!("{class} {}", layout_box.node_label(dom));
    if let Some(text) = layout_box.text_content(dom) {
        let _ = write!(header, " \"{}\"", Quoted(text));
    }
    header
}

/// `[x,y wxh]` with two decimals.
pub(crate) fn format_rect(rect: Rect) -> String {
    format!(
        "[{:.2},{:.2} {:.2}x{:.2}]",
        rect.x, rect.y, rect.width, rect.height
    )
}

fn box_model_line(dimensions: Option<&BoxDimensions>) -> String {
    match dimensions {
        Some(d) => format!(
            "box-model: content {} padding {} border {} margin {}",
            format_rect(d.content_box()),
            format_rect(d.padding_box()),
            format_rect(d.border_box()),
            format_rect(d.margin_box()),
        ),
        None => "box-model: unavailable".to_string(),
    }
}
