/*
 * property_tests.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Property tests for overlay selectors, the bullet policy, role lookup
 * and source echoing.
 */

use beamer_filter::animate::overlay_selector;
use beamer_filter::roles::{format_interpreted_text, tokenize_literal};
use beamer_filter::slides::bullet_policy;
use beamer_filter::source_include::echo_lines;
use beamer_filter::{Environment, FilterConfig, FilterContext, Rewrite};
use beamer_pandoc_types::{Block, BlockQuote, Code, Inline, Paragraph, Strong, attr_with_classes};
use proptest::prelude::*;

// =============================================================================
// Helpers
// =============================================================================

fn role_code(role: &str, text: &str) -> Code {
    Code {
        attr: (
            String::new(),
            vec!["interpreted-text".to_string()],
            vec![("role".to_string(), role.to_string())],
        ),
        text: text.to_string(),
    }
}

fn format_role(role: &str, text: &str) -> Rewrite<Inline> {
    let mut ctx = FilterContext::new("beamer");
    format_interpreted_text(
        &role_code(role, text),
        &mut ctx,
        &FilterConfig::default(),
        &Environment::default(),
    )
    .expect("emphasis roles never fail")
}

fn paragraphs() -> impl Strategy<Value = Vec<Block>> {
    prop::collection::vec("[a-z ]{0,12}", 0..5).prop_map(|texts| {
        texts
            .into_iter()
            .map(|text| {
                Block::Paragraph(Paragraph {
                    content: vec![Inline::str(text)],
                })
            })
            .collect()
    })
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn selector_with_number(n in 0u32..10_000) {
        prop_assert_eq!(overlay_selector(Some(&n.to_string())), format!("<{}>", n));
        prop_assert_eq!(overlay_selector(Some(&format!("{}-", n))), format!("<{}->", n));
    }

    #[test]
    fn selector_without_digits_defaults(s in "[a-z_]*") {
        prop_assert_eq!(overlay_selector(Some(&s)), "<2->");
    }

    #[test]
    fn bullet_policy_ignores_content(content in paragraphs()) {
        let quote = BlockQuote { content: content.clone() };
        prop_assert_eq!(bullet_policy(&quote, false), Rewrite::Replace(content));
        prop_assert_eq!(bullet_policy(&quote, true), Rewrite::Unchanged);
    }

    #[test]
    fn unknown_roles_match_default_role(
        role in "[a-z]{1,10}",
        text in "[A-Za-z_ ]{0,20}",
    ) {
        prop_assume!(FilterConfig::default().role(&role).is_none());
        prop_assert_eq!(format_role(&role, &text), format_role("default", &text));
        prop_assert_eq!(
            format_role(&role, &text),
            Rewrite::Replace(vec![Inline::Strong(Strong { content: tokenize_literal(&text) })])
        );
    }

    #[test]
    fn tokenizing_keeps_the_text(text in "[a-z ]{0,30}") {
        let rebuilt: String = tokenize_literal(&text)
            .iter()
            .map(|inline| match inline {
                Inline::Str(s) => s.text.clone(),
                Inline::Space => " ".to_string(),
                other => panic!("unexpected inline {:?}", other),
            })
            .collect();
        prop_assert_eq!(rebuilt, text);
    }

    #[test]
    fn echo_between_markers_is_the_middle(
        before in prop::collection::vec("[a-z]{0,8}", 0..4),
        middle in prop::collection::vec("[a-z]{0,8}", 0..6),
        after in prop::collection::vec("[a-z]{0,8}", 0..4),
    ) {
        let mut text = String::new();
        for line in &before {
            text.push_str(line);
            text.push('\n');
        }
        text.push_str("-- START\n");
        for line in &middle {
            text.push_str(line);
            text.push('\n');
        }
        text.push_str("-- END\n");
        for line in &after {
            text.push_str(line);
            text.push('\n');
        }

        let expected: String = middle.iter().map(|line| format!("{}\n", line)).collect();
        prop_assert_eq!(echo_lines(&text, Some("START"), Some("END")), expected);
        prop_assert_eq!(echo_lines(&text, None, None), text.clone());
    }
}

#[test]
fn decorated_headers_keep_their_place() {
    use beamer_filter::filter_document;
    use beamer_pandoc_types::{Header, Pandoc};

    let header = |classes: Vec<&str>| {
        Block::Header(Header {
            level: 2,
            attr: attr_with_classes(classes),
            content: vec![Inline::str("Title")],
        })
    };
    let doc = Pandoc {
        blocks: vec![header(vec![]), Block::HorizontalRule, header(vec!["plain"])],
        ..Pandoc::default()
    };
    let rewriter =
        beamer_filter::BeamerRewriter::new(FilterConfig::default(), Environment::default());
    let (result, _) = filter_document(doc, "beamer", &rewriter);
    assert_eq!(
        result.blocks,
        vec![
            header(vec!["t", "shrink"]),
            Block::HorizontalRule,
            header(vec!["plain", "t", "shrink"]),
        ]
    );
}
