//! Tests for the CSSOM renderers: one per rule kind, plus style sheets
//! and selectors.

mod common;

use common::{class_selector, indent_of, strip_ansi, style_rule};
use koala_css::cssom::{
    CssFontFaceRule, CssImportRule, CssKeyframeRule, CssKeyframesRule, CssLayerBlockRule,
    CssLayerStatementRule, CssMarginRule, CssMediaRule, CssNamespaceRule, CssNestedDeclarations,
    CssPageRule, CssPropertyRule, CssRule, CssRuleType, CssStyleRule, CssStyleSheet,
    CssSupportsRule, Descriptors, ImportLayer, MediaList, RULE_KIND_COUNT, StyleProperties,
    SupportsCondition,
};
use koala_css::selector::{
    Combinator, ComplexSelector, CompoundSelector, Selector, SimpleSelector,
};
use koala_dump::{
    CssDumpOptions, InertRules, dump_rule, dump_selector, dump_sheet, rule_to_string,
    selector_to_string, sheet_to_string,
};
use strum::IntoEnumIterator;

fn media(queries: &[&str], rules: Vec<CssRule>) -> CssRule {
    CssRule::Media(CssMediaRule {
        media: queries.iter().copied().collect::<MediaList>(),
        rules,
    })
}

fn keyframe(key: &str, opacity: &str) -> CssKeyframeRule {
    CssKeyframeRule {
        key_text: key.to_string(),
        declarations: StyleProperties::new().with("opacity", opacity),
    }
}

/// One rule of every kind, in declaration order of `CssRuleType`.
fn one_of_each() -> Vec<CssRule> {
    vec![
        style_rule("a"),
        CssRule::FontFace(CssFontFaceRule {
            descriptors: Descriptors::new().with("font-family", "Foo"),
        }),
        CssRule::Import(CssImportRule::new("a.css")),
        CssRule::Keyframe(keyframe("50%", "0.5")),
        CssRule::Keyframes(CssKeyframesRule {
            name: "fade".to_string(),
            keyframes: vec![keyframe("from", "0")],
        }),
        media(&["screen"], vec![style_rule("foo")]),
        CssRule::Page(CssPageRule::default()),
        CssRule::Margin(CssMarginRule {
            name: "top-left".to_string(),
            declarations: StyleProperties::new(),
        }),
        CssRule::Supports(CssSupportsRule {
            condition: SupportsCondition::declaration("display", "grid"),
            rules: vec![],
        }),
        CssRule::Property(CssPropertyRule {
            name: "--x".to_string(),
            syntax: "*".to_string(),
            inherits: true,
            initial_value: None,
        }),
        CssRule::Namespace(CssNamespaceRule {
            prefix: None,
            namespace_uri: "http://www.w3.org/1999/xhtml".to_string(),
        }),
        CssRule::NestedDeclarations(CssNestedDeclarations::default()),
        CssRule::LayerBlock(CssLayerBlockRule::default()),
        CssRule::LayerStatement(CssLayerStatementRule {
            names: vec!["base".to_string()],
        }),
    ]
}

#[test]
fn test_every_rule_kind_has_a_renderer() {
    let rules = one_of_each();
    assert_eq!(rules.len(), RULE_KIND_COUNT);
    let kinds: Vec<CssRuleType> = rules.iter().map(CssRule::rule_type).collect();
    assert_eq!(kinds, CssRuleType::iter().collect::<Vec<_>>());

    for rule in &rules {
        let text = rule_to_string(rule);
        assert!(!text.is_empty(), "{} rendered nothing", rule.class_name());
        assert!(!text.starts_with(' '), "{} not at base level", rule.class_name());
    }
}

#[test]
fn test_media_rule_nests_style_rule() {
    let rule = media(&["screen"], vec![style_rule("foo")]);
    assert_eq!(rule_to_string(&rule), "@media screen\n  .foo\n    color: red;\n");
}

#[test]
fn test_media_rule_with_empty_list() {
    let rule = media(&[], vec![]);
    assert_eq!(rule_to_string(&rule), "@media\n");
}

#[test]
fn test_style_rule_selector_list() {
    let descendant = ComplexSelector::from_source(
        CompoundSelector::new(vec![SimpleSelector::Type("div".to_string())]),
        [(
            Combinator::Child,
            CompoundSelector::new(vec![SimpleSelector::Type("p".to_string())]),
        )],
    );
    let rule = CssRule::Style(CssStyleRule::new(
        vec![class_selector("a").with_specificity(), Selector::new(descendant)],
        StyleProperties::new()
            .with("color", "red")
            .with_important("margin", "0"),
    ));

    assert_eq!(
        rule_to_string(&rule),
        ".a, /* specificity (0,1,0) */\n\
         div > p\n  \
         color: red;\n  \
         margin: 0 !important;\n"
    );
}

#[test]
fn test_style_rule_without_selectors() {
    let rule = CssRule::Style(CssStyleRule::new(vec![], StyleProperties::new()));
    assert_eq!(rule_to_string(&rule), "/* empty selector list */\n");
}

#[test]
fn test_style_rule_nested_children() {
    let mut outer = CssStyleRule::new(
        vec![class_selector("card")],
        StyleProperties::new().with("padding", "4px"),
    );
    outer.child_rules = vec![
        CssRule::NestedDeclarations(CssNestedDeclarations {
            declarations: StyleProperties::new().with("color", "blue"),
        }),
        style_rule("title"),
    ];

    assert_eq!(
        rule_to_string(&CssRule::Style(outer)),
        ".card\n  \
         padding: 4px;\n  \
         /* nested declarations */\n    \
         color: blue;\n  \
         .title\n    \
         color: red;\n"
    );
}

#[test]
fn test_font_face_rule() {
    let rule = CssRule::FontFace(CssFontFaceRule {
        descriptors: Descriptors::new()
            .with("font-family", "Foo")
            .with("src", "url(foo.woff)"),
    });
    assert_eq!(
        rule_to_string(&rule),
        "@font-face\n  font-family: Foo;\n  src: url(foo.woff);\n"
    );
}

#[test]
fn test_import_rule() {
    let plain = CssRule::Import(CssImportRule::new("a.css"));
    assert_eq!(rule_to_string(&plain), "@import url(\"a.css\");\n");

    let mut import = CssImportRule::new("b.css");
    import.layer = Some(ImportLayer::Named("base".to_string()));
    import.supports = Some(SupportsCondition::declaration("display", "grid"));
    import.media = ["screen", "print"].into_iter().collect();
    assert_eq!(
        rule_to_string(&CssRule::Import(import)),
        "@import url(\"b.css\") layer(base) supports(display: grid) screen, print;\n"
    );

    let mut anonymous = CssImportRule::new("c.css");
    anonymous.layer = Some(ImportLayer::Anonymous);
    anonymous.supports = Some(SupportsCondition::Not(Box::new(
        SupportsCondition::declaration("gap", "1px"),
    )));
    assert_eq!(
        rule_to_string(&CssRule::Import(anonymous)),
        "@import url(\"c.css\") layer supports(not (gap: 1px));\n"
    );
}

#[test]
fn test_keyframes_rule() {
    let rule = CssRule::Keyframes(CssKeyframesRule {
        name: "fade".to_string(),
        keyframes: vec![keyframe("from", "0"), keyframe("to", "1")],
    });
    assert_eq!(
        rule_to_string(&rule),
        "@keyframes fade\n  from\n    opacity: 0;\n  to\n    opacity: 1;\n"
    );
}

#[test]
fn test_keyframe_rule_on_its_own() {
    let rule = CssRule::Keyframe(keyframe("50%", "0.5"));
    assert_eq!(rule_to_string(&rule), "50%\n  opacity: 0.5;\n");
}

#[test]
fn test_page_rule_with_margin_boxes() {
    let rule = CssRule::Page(CssPageRule {
        selector: ":first".to_string(),
        descriptors: Descriptors::new().with("margin", "1in"),
        margin_rules: vec![CssMarginRule {
            name: "top-left".to_string(),
            declarations: StyleProperties::new().with("content", "\"x\""),
        }],
    });
    assert_eq!(
        rule_to_string(&rule),
        "@page :first\n  margin: 1in;\n  @top-left\n    content: \"x\";\n"
    );
    assert_eq!(rule_to_string(&CssRule::Page(CssPageRule::default())), "@page\n");
}

#[test]
fn test_margin_rule_on_its_own() {
    let rule = CssRule::Margin(CssMarginRule {
        name: "bottom-center".to_string(),
        declarations: StyleProperties::new().with("color", "red"),
    });
    assert_eq!(rule_to_string(&rule), "@bottom-center\n  color: red;\n");
}

#[test]
fn test_supports_rule() {
    let rule = CssRule::Supports(CssSupportsRule {
        condition: SupportsCondition::And(vec![
            SupportsCondition::declaration("display", "grid"),
            SupportsCondition::Not(Box::new(SupportsCondition::Selector(
                ":has(a)".to_string(),
            ))),
        ]),
        rules: vec![style_rule("grid")],
    });
    assert_eq!(
        rule_to_string(&rule),
        "@supports (display: grid) and (not selector(:has(a)))\n  .grid\n    color: red;\n"
    );
}

#[test]
fn test_property_rule() {
    let rule = CssRule::Property(CssPropertyRule {
        name: "--gap".to_string(),
        syntax: "<length>".to_string(),
        inherits: false,
        initial_value: Some("0px".to_string()),
    });
    assert_eq!(
        rule_to_string(&rule),
        "@property --gap\n  syntax: \"<length>\";\n  inherits: false;\n  initial-value: 0px;\n"
    );
}

#[test]
fn test_namespace_rule() {
    let prefixed = CssRule::Namespace(CssNamespaceRule {
        prefix: Some("svg".to_string()),
        namespace_uri: "http://www.w3.org/2000/svg".to_string(),
    });
    assert_eq!(
        rule_to_string(&prefixed),
        "@namespace svg url(\"http://www.w3.org/2000/svg\");\n"
    );

    let default = CssRule::Namespace(CssNamespaceRule {
        prefix: None,
        namespace_uri: "http://www.w3.org/1999/xhtml".to_string(),
    });
    assert_eq!(
        rule_to_string(&default),
        "@namespace url(\"http://www.w3.org/1999/xhtml\");\n"
    );
}

#[test]
fn test_layer_rules() {
    let block = CssRule::LayerBlock(CssLayerBlockRule {
        name: Some("base".to_string()),
        rules: vec![style_rule("a")],
    });
    assert_eq!(rule_to_string(&block), "@layer base\n  .a\n    color: red;\n");

    let anonymous = CssRule::LayerBlock(CssLayerBlockRule::default());
    assert_eq!(rule_to_string(&anonymous), "@layer\n");

    let statement = CssRule::LayerStatement(CssLayerStatementRule {
        names: vec!["reset".to_string(), "base".to_string()],
    });
    assert_eq!(rule_to_string(&statement), "@layer reset, base;\n");
}

#[test]
fn test_layer_and_property_names_are_serialized_as_identifiers() {
    let block = CssRule::LayerBlock(CssLayerBlockRule {
        name: Some("1st.a b".to_string()),
        rules: vec![],
    });
    assert_eq!(rule_to_string(&block), "@layer \\31 st.a\\ b\n");

    let statement = CssRule::LayerStatement(CssLayerStatementRule {
        names: vec!["theme.dark".to_string(), "2x".to_string()],
    });
    assert_eq!(rule_to_string(&statement), "@layer theme.dark, \\32 x;\n");

    let property = CssRule::Property(CssPropertyRule {
        name: "--a b".to_string(),
        syntax: "*".to_string(),
        inherits: true,
        initial_value: None,
    });
    assert!(rule_to_string(&property).starts_with("@property --a\\ b\n"));

    let mut import = CssImportRule::new("a.css");
    import.layer = Some(ImportLayer::Named("0.base".to_string()));
    assert_eq!(
        rule_to_string(&CssRule::Import(import)),
        "@import url(\"a.css\") layer(\\30 .base);\n"
    );
}

#[test]
fn test_multiline_custom_property_stays_on_its_line() {
    let rule = media(
        &["screen"],
        vec![CssRule::Style(CssStyleRule::new(
            vec![class_selector("foo")],
            StyleProperties::new().with("--x", "{\n  a: b\n}"),
        ))],
    );
    let mut out = String::new();
    dump_rule(&mut out, &rule, &CssDumpOptions::default().with_indent_levels(1));

    assert_eq!(out, "  @media screen\n    .foo\n      --x: {\\n  a: b\\n};\n");
    for line in out.lines() {
        assert!(indent_of(line) >= 1, "line {line:?} below base indent");
    }
}

#[test]
fn test_line_breaks_in_rule_preludes_are_escaped() {
    let rules = vec![
        media(&["screen and\n(color)"], vec![]),
        CssRule::Supports(CssSupportsRule {
            condition: SupportsCondition::GeneralEnclosed("(foo:\nbar)".to_string()),
            rules: vec![],
        }),
        CssRule::Keyframe(CssKeyframeRule {
            key_text: "from,\nto".to_string(),
            declarations: StyleProperties::new(),
        }),
        CssRule::Page(CssPageRule {
            selector: ":first,\r\n:left".to_string(),
            descriptors: Descriptors::new().with("size", "a4\tlandscape"),
            margin_rules: vec![],
        }),
    ];
    let sheet = CssStyleSheet::external("a\nb.css", rules).with_title("Main\n\"dark\"");
    let mut out = String::new();
    dump_sheet(&mut out, &sheet, &CssDumpOptions::default().with_indent_levels(1));

    assert_eq!(
        out,
        "  CSSStyleSheet (a\\nb.css) \"Main\\n\\\"dark\\\"\": 4 rules\n\
         \x20 @media screen and\\n(color)\n\
         \x20 @supports (foo:\\nbar)\n\
         \x20 from,\\nto\n\
         \x20 @page :first,\\r\\n:left\n\
         \x20   size: a4\\tlandscape;\n"
    );
    for line in out.lines() {
        assert!(indent_of(line) >= 1, "line {line:?} below base indent");
    }
}

#[test]
fn test_indent_levels_shift_every_line() {
    let rule = media(&["screen"], vec![style_rule("foo")]);
    let mut out = String::new();
    dump_rule(&mut out, &rule, &CssDumpOptions::default().with_indent_levels(2));
    assert_eq!(out, "    @media screen\n      .foo\n        color: red;\n");
}

#[test]
fn test_child_rules_keep_their_order() {
    let names = ["z", "a", "m", "a"];
    let rule = media(&["print"], names.iter().map(|n| style_rule(n)).collect());
    let text = rule_to_string(&rule);
    let selectors: Vec<&str> = text
        .lines()
        .filter(|line| line.trim_start().starts_with('.'))
        .map(str::trim)
        .collect();
    assert_eq!(selectors, [".z", ".a", ".m", ".a"]);
}

#[test]
fn test_colorize_only_adds_escape_codes() {
    let sheet = CssStyleSheet::inline(one_of_each()).with_disabled(true);
    let plain = sheet_to_string(&sheet);

    let mut colored = String::new();
    dump_sheet(&mut colored, &sheet, &CssDumpOptions::default().with_colorize(true));

    assert!(colored.contains('\u{1b}'));
    assert!(!plain.contains('\u{1b}'));
    assert_eq!(strip_ansi(&colored), plain);
}

#[test]
fn test_sheet_header_and_rules() {
    let sheet = CssStyleSheet::inline(vec![style_rule("a"), style_rule("b")]);
    assert_eq!(
        sheet_to_string(&sheet),
        "CSSStyleSheet (inline): 2 rules\n.a\n  color: red;\n.b\n  color: red;\n"
    );

    let external = CssStyleSheet::external("https://example.com/a.css", vec![])
        .with_title("Main");
    assert_eq!(
        sheet_to_string(&external),
        "CSSStyleSheet (https://example.com/a.css) \"Main\": 0 rules\n"
    );
}

#[test]
fn test_disabled_sheet_still_lists_its_rules() {
    let sheet = CssStyleSheet::inline(vec![style_rule("a")]).with_disabled(true);

    assert_eq!(
        sheet_to_string(&sheet),
        "CSSStyleSheet (inline): 1 rule [disabled]\n.a\n  color: red;\n"
    );

    let mut identical = String::new();
    let options = CssDumpOptions::default().with_inert_rules(InertRules::Identical);
    dump_sheet(&mut identical, &sheet, &options);
    assert_eq!(
        identical,
        sheet_to_string(&CssStyleSheet::inline(vec![style_rule("a")]))
    );
}

#[test]
fn test_sheet_at_indent() {
    let sheet = CssStyleSheet::inline(vec![style_rule("a")]);
    let mut out = String::new();
    dump_sheet(&mut out, &sheet, &CssDumpOptions::default().with_indent_levels(1));
    assert_eq!(out, "  CSSStyleSheet (inline): 1 rule\n  .a\n    color: red;\n");
}

#[test]
#[should_panic(expected = "beyond max_depth 2")]
fn test_rule_nesting_limit() {
    let mut rule = style_rule("leaf");
    for _ in 0..4 {
        rule = media(&["screen"], vec![rule]);
    }
    let mut out = String::new();
    dump_rule(&mut out, &rule, &CssDumpOptions::default().with_max_depth(2));
}

#[test]
fn test_selector_dump() {
    let selector = ComplexSelector::from_source(
        CompoundSelector::new(vec![SimpleSelector::Id("nav".to_string())]),
        [(
            Combinator::Descendant,
            CompoundSelector::new(vec![
                SimpleSelector::Type("a".to_string()),
                SimpleSelector::Class("active".to_string()),
            ]),
        )],
    );
    let selector = Selector::new(selector);
    assert_eq!(selector_to_string(&selector), "#nav a.active\n");

    let mut out = String::new();
    dump_selector(&mut out, &selector.with_specificity(), 1);
    assert_eq!(out, "  #nav a.active /* specificity (1,1,1) */\n");
}
