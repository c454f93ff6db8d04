//! Integration tests for the layout tree model.

use koala_css::layout::{
    BoxDimensions, BoxType, CascadedProperties, EdgeSizes, FloatSide, LayoutBox, LayoutClass,
    PositionType, Rect,
};
use koala_css::DisplayValue;
use koala_dom::{AttributesMap, DomTree, ElementData, NodeId, NodeType};

fn element(tree: &mut DomTree, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
    let id = tree.alloc(NodeType::Element(ElementData {
        tag_name: tag.to_string(),
        attrs: attrs.iter().copied().collect::<AttributesMap>(),
    }));
    tree.append_child(parent, id);
    id
}

#[test]
fn test_layout_class_from_display() {
    let dom = DomTree::new();
    let id = NodeId(1);
    let class = |display| LayoutBox::new(BoxType::Principal(id), display).layout_class(&dom);

    assert_eq!(class(DisplayValue::block()), LayoutClass::BlockContainer);
    assert_eq!(class(DisplayValue::inline_block()), LayoutClass::BlockContainer);
    assert_eq!(class(DisplayValue::inline()), LayoutClass::InlineNode);
    assert_eq!(class(DisplayValue::flex()), LayoutClass::Box);
    assert_eq!(class(DisplayValue::grid()), LayoutClass::Box);
    assert_eq!(LayoutBox::viewport().layout_class(&dom), LayoutClass::Viewport);
    assert_eq!(LayoutBox::text("hi").layout_class(&dom), LayoutClass::TextNode);
    assert_eq!(
        LayoutBox::new(BoxType::AnonymousBlock, DisplayValue::block()).layout_class_name(&dom),
        "BlockContainer"
    );
}

#[test]
fn test_is_box() {
    let dom = DomTree::new();
    assert!(LayoutBox::viewport().is_box(&dom));
    assert!(!LayoutBox::text("x").is_box(&dom));
    assert!(!LayoutBox::new(BoxType::Principal(NodeId(1)), DisplayValue::inline()).is_box(&dom));
    assert!(LayoutBox::new(BoxType::Principal(NodeId(1)), DisplayValue::flex()).is_box(&dom));
}

#[test]
fn test_children_are_inline_ignores_out_of_flow() {
    let mut float = LayoutBox::new(BoxType::AnonymousBlock, DisplayValue::block());
    float.float_side = Some(FloatSide::Left);
    let mut absolute = LayoutBox::new(BoxType::AnonymousBlock, DisplayValue::block());
    absolute.position = PositionType::Absolute;

    let parent = LayoutBox::new(BoxType::AnonymousBlock, DisplayValue::block())
        .with_child(LayoutBox::text("a"))
        .with_child(float)
        .with_child(absolute);
    assert!(parent.children_are_inline());

    let parent = parent.with_child(LayoutBox::new(BoxType::AnonymousBlock, DisplayValue::block()));
    assert!(!parent.children_are_inline());

    assert!(!LayoutBox::viewport().children_are_inline());
}

#[test]
fn test_debug_description_uses_id_and_classes() {
    let mut tree = DomTree::new();
    let div = element(
        &mut tree,
        NodeId::ROOT,
        "div",
        &[("class", "a b"), ("id", "main")],
    );
    let layout_box = LayoutBox::new(BoxType::Principal(div), DisplayValue::block());
    assert_eq!(
        layout_box.debug_description(&tree),
        "BlockContainer <div#main.a.b>"
    );
    assert_eq!(LayoutBox::viewport().debug_description(&tree), "Viewport <#document>");
    assert_eq!(LayoutBox::text("t").debug_description(&tree), "TextNode <#text>");
    assert_eq!(
        LayoutBox::new(BoxType::AnonymousBlock, DisplayValue::block()).debug_description(&tree),
        "BlockContainer (anonymous)"
    );
}

#[test]
fn test_missing_dom_node_is_labelled() {
    let tree = DomTree::new();
    let layout_box = LayoutBox::new(BoxType::Principal(NodeId(42)), DisplayValue::block());
    assert_eq!(layout_box.node_label(&tree), "<?>");
    assert!(koala_common::warning::was_warned(
        "Layout",
        "layout box refers to missing DOM node 42"
    ));
}

#[test]
fn test_text_content_from_box_or_dom() {
    let mut tree = DomTree::new();
    let text = tree.alloc(NodeType::Text("from dom".to_string()));
    tree.append_child(NodeId::ROOT, text);

    let principal = LayoutBox::new(BoxType::Principal(text), DisplayValue::inline());
    assert_eq!(principal.text_content(&tree), Some("from dom"));
    assert_eq!(LayoutBox::text("inline").text_content(&tree), Some("inline"));
}

#[test]
fn test_principal_box_of_text_node_is_text_node() {
    let mut tree = DomTree::new();
    let p = element(&mut tree, NodeId::ROOT, "p", &[]);
    let text = tree.alloc(NodeType::Text("hello".to_string()));
    tree.append_child(p, text);

    for display in [DisplayValue::inline(), DisplayValue::block()] {
        let layout_box = LayoutBox::new(BoxType::Principal(text), display);
        assert_eq!(layout_box.layout_class(&tree), LayoutClass::TextNode);
        assert!(!layout_box.is_box(&tree));
        assert_eq!(layout_box.debug_description(&tree), "TextNode <#text>");
    }

    let element_box = LayoutBox::new(BoxType::Principal(p), DisplayValue::inline());
    assert_eq!(element_box.layout_class(&tree), LayoutClass::InlineNode);
}

#[test]
fn test_cascaded_properties_keep_insertion_order() {
    let mut cascaded: CascadedProperties = [("display", "block"), ("color", "red")]
        .into_iter()
        .collect();
    cascaded.insert("margin-top", "8px");
    cascaded.insert("display", "flex");

    let names: Vec<&str> = cascaded.iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["display", "color", "margin-top"]);
    assert_eq!(cascaded.get("display"), Some("flex"));
}

#[test]
fn test_box_dimensions_border_box() {
    let dims = BoxDimensions {
        content: Rect::new(10.0, 10.0, 100.0, 20.0),
        padding: EdgeSizes::uniform(2.0),
        border: EdgeSizes::uniform(1.0),
        margin: EdgeSizes::default(),
    };
    let layout_box =
        LayoutBox::new(BoxType::AnonymousBlock, DisplayValue::block()).with_dimensions(dims);
    assert_eq!(
        layout_box.dimensions.map(|d| d.border_box()),
        Some(Rect::new(7.0, 7.0, 106.0, 26.0))
    );
}
