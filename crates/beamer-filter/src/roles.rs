/*
 * roles.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Interpreted-text roles.
//!
//! reStructuredText roles reach the filter in two shapes:
//!
//! - `` :menu:`File_Open` `` becomes a `Code` inline with class
//!   `interpreted-text` and a leading `role="menu"` attribute. The code text
//!   is the literal the role applies to.
//! - `` `Some Title` `` (no role) becomes a `Span` with class `title-ref`,
//!   formatted with the `default` role.

use crate::config::{Environment, FilterConfig, RoleFormat};
use crate::errors::RewriteError;
use crate::filter_context::FilterContext;
use crate::latex;
use crate::walk::Rewrite;
use beamer_pandoc_types::{Code, Inline, Inlines, SmallCaps, Span, Strong, first_pair, has_class};

const INTERPRETED_TEXT: &str = "interpreted-text";
const TITLE_REF: &str = "title-ref";
const ROLE_KEY: &str = "role";

/// Split a literal on single spaces into `Str` pieces joined by `Space`.
///
/// Consecutive spaces give empty `Str` pieces, so no text is lost.
pub fn tokenize_literal(text: &str) -> Inlines {
    let mut inlines = Vec::new();
    for (i, piece) in text.split(' ').enumerate() {
        if i > 0 {
            inlines.push(Inline::Space);
        }
        inlines.push(Inline::str(piece));
    }
    inlines
}

/// Wrap inlines for the AST-level role formats.
fn emphasize(format: RoleFormat, content: Inlines) -> Inline {
    match format {
        RoleFormat::SmallCaps => Inline::SmallCaps(SmallCaps { content }),
        _ => Inline::Strong(Strong { content }),
    }
}

/// The default role applied to inlines. A raw-markup default cannot apply
/// to inlines, so it becomes `Strong`.
fn apply_default_role(config: &FilterConfig, content: Inlines) -> Inline {
    match config.default_role() {
        format if format.is_raw() => Inline::Strong(Strong { content }),
        format => emphasize(format, content),
    }
}

/// LaTeX for the raw-markup role formats.
pub fn render_raw(
    format: RoleFormat,
    literal: &str,
    config: &FilterConfig,
    env: &Environment,
) -> Option<String> {
    let text = latex::escape(literal);
    let rendered = match format {
        RoleFormat::Menu => latex::colorbox(&latex::textcolor(&text, "white"), &config.box_color),
        RoleFormat::Command => {
            latex::colorbox(&latex::textcolor(&latex::monospace(&text), "white"), "black")
        }
        RoleFormat::Filename => latex::bold_italic(&text),
        RoleFormat::Answer if env.instructor => latex::answer_highlight(&text),
        RoleFormat::Answer => text,
        RoleFormat::Animate if env.instructor => latex::onslide(&text),
        // Handouts keep the space but not the explanation.
        RoleFormat::Animate => " ".to_string(),
        RoleFormat::SmallCaps | RoleFormat::Strong => return None,
    };
    Some(rendered)
}

/// Format a `title-ref` span with the default role.
pub fn format_title_ref(span: &Span, config: &FilterConfig) -> Rewrite<Inline> {
    if !has_class(&span.attr, TITLE_REF) {
        return Rewrite::Unchanged;
    }
    Rewrite::Replace(vec![apply_default_role(config, span.content.clone())])
}

/// Format a `Code` inline carrying an interpreted-text role.
///
/// Only the first key/value pair is consulted; a code inline whose first
/// pair is not `role` is left alone. A role missing from the table gets the
/// default role and an informational diagnostic.
pub fn format_interpreted_text(
    code: &Code,
    ctx: &mut FilterContext,
    config: &FilterConfig,
    env: &Environment,
) -> Result<Rewrite<Inline>, RewriteError> {
    if !has_class(&code.attr, INTERPRETED_TEXT) {
        return Ok(Rewrite::Unchanged);
    }
    let role = match first_pair(&code.attr) {
        Some((ROLE_KEY, value)) => value,
        _ => return Ok(Rewrite::Unchanged),
    };

    let Some(role_format) = config.role(role) else {
        ctx.record(&RewriteError::UnknownRole(role.to_string()));
        let inline = apply_default_role(config, tokenize_literal(&code.text));
        return Ok(Rewrite::Replace(vec![inline]));
    };

    if !role_format.is_raw() {
        let inline = emphasize(role_format, tokenize_literal(&code.text));
        return Ok(Rewrite::Replace(vec![inline]));
    }

    if !ctx.is_format(&config.slide_format) {
        return Err(RewriteError::UnsupportedRole {
            role: role.to_string(),
            format: ctx.format.clone(),
            raw_format: config.raw_format.clone(),
        });
    }

    match render_raw(role_format, &code.text, config, env) {
        Some(text) => Ok(Rewrite::Replace(vec![latex::raw_inline(&config.raw_format, text)])),
        None => Ok(Rewrite::Unchanged),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::DiagnosticKind;
    use beamer_pandoc_types::{attr_with_classes, empty_attr};

    fn code_with_pairs(pairs: &[(&str, &str)], text: &str) -> Code {
        let pairs = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Code {
            attr: (String::new(), vec![INTERPRETED_TEXT.to_string()], pairs),
            text: text.to_string(),
        }
    }

    fn role_code(role: &str, text: &str) -> Code {
        code_with_pairs(&[(ROLE_KEY, role)], text)
    }

    fn format_for(
        code: &Code,
        format: &str,
        env: &Environment,
    ) -> Result<Rewrite<Inline>, RewriteError> {
        let mut ctx = FilterContext::new(format);
        format_interpreted_text(code, &mut ctx, &FilterConfig::default(), env)
    }

    fn raw(text: &str) -> Rewrite<Inline> {
        Rewrite::Replace(vec![Inline::raw("latex", text)])
    }

    fn strong(content: Inlines) -> Inline {
        Inline::Strong(Strong { content })
    }

    #[test]
    fn test_tokenize_literal_keeps_empty_pieces() {
        assert_eq!(
            tokenize_literal("GNAT  Studio"),
            vec![
                Inline::str("GNAT"),
                Inline::Space,
                Inline::str(""),
                Inline::Space,
                Inline::str("Studio"),
            ]
        );
        assert_eq!(tokenize_literal(""), vec![Inline::str("")]);
    }

    #[test]
    fn test_menu_role_escapes_underscore() {
        let result = format_for(
            &role_code("menu", "File_Open"),
            "beamer",
            &Environment::default(),
        );
        assert_eq!(
            result.unwrap(),
            raw("\\colorbox{adacore2}{\\textcolor{white}{File\\_Open}}")
        );
    }

    #[test]
    fn test_menu_role_uses_configured_box_color() {
        let config = FilterConfig {
            box_color: "blue".to_string(),
            ..FilterConfig::default()
        };
        let mut ctx = FilterContext::new("beamer");
        let result = format_interpreted_text(
            &role_code("menu", "Edit"),
            &mut ctx,
            &config,
            &Environment::default(),
        );
        assert_eq!(result.unwrap(), raw("\\colorbox{blue}{\\textcolor{white}{Edit}}"));
    }

    #[test]
    fn test_toolname_role_any_format() {
        let result = format_for(
            &role_code("toolname", "GNAT Studio"),
            "html",
            &Environment::default(),
        );
        assert_eq!(
            result.unwrap(),
            Rewrite::Replace(vec![Inline::SmallCaps(SmallCaps {
                content: vec![Inline::str("GNAT"), Inline::Space, Inline::str("Studio")],
            })])
        );
    }

    #[test]
    fn test_command_and_filename_roles() {
        let env = Environment::default();
        let command = format_for(&role_code("command", "gprbuild -P"), "beamer", &env);
        assert_eq!(
            command.unwrap(),
            raw("\\colorbox{black}{\\textcolor{white}{\\texttt{gprbuild -P}}}")
        );

        let filename = format_for(&role_code("filename", "my_file.adb"), "beamer", &env);
        assert_eq!(filename.unwrap(), raw("\\textbf{\\textit{my\\_file.adb}}"));
    }

    #[test]
    fn test_answer_and_animate_depend_on_instructor_mode() {
        let student = Environment::default();
        let instructor = Environment {
            instructor: true,
            search_path: None,
        };

        let answer = role_code("answer", "A & B");
        assert_eq!(format_for(&answer, "beamer", &student).unwrap(), raw("A \\& B"));
        assert_eq!(
            format_for(&answer, "beamer", &instructor).unwrap(),
            raw("\\textit<2>{\\textbf<2>{\\textcolor<2>{green!65!black}{A \\& B}}}")
        );

        let animate = role_code("animate", "Because");
        assert_eq!(format_for(&animate, "beamer", &student).unwrap(), raw(" "));
        assert_eq!(
            format_for(&animate, "beamer", &instructor).unwrap(),
            raw("\\onslide<2->{Because}")
        );
    }

    #[test]
    fn test_raw_role_outside_slides_is_unsupported() {
        let err =
            format_for(&role_code("menu", "File"), "html", &Environment::default()).unwrap_err();
        assert!(
            matches!(err, RewriteError::UnsupportedRole { ref format, .. } if format == "html")
        );
    }

    #[test]
    fn test_unknown_role_falls_back_to_default() {
        let mut ctx = FilterContext::new("beamer");
        let result = format_interpreted_text(
            &role_code("keyword", "begin end"),
            &mut ctx,
            &FilterConfig::default(),
            &Environment::default(),
        );
        assert_eq!(
            result.unwrap(),
            Rewrite::Replace(vec![strong(vec![
                Inline::str("begin"),
                Inline::Space,
                Inline::str("end"),
            ])])
        );

        let diagnostics = ctx.into_diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind, DiagnosticKind::Info);
        assert_eq!(diagnostics[0].code.as_deref(), Some("B-3-2"));
    }

    #[test]
    fn test_only_first_pair_is_consulted() {
        let code = code_with_pairs(&[("lang", "ada"), (ROLE_KEY, "menu")], "File");
        let result = format_for(&code, "beamer", &Environment::default());
        assert_eq!(result.unwrap(), Rewrite::Unchanged);
    }

    #[test]
    fn test_repeated_role_key_uses_the_first() {
        let code = code_with_pairs(
            &[(ROLE_KEY, "menu"), ("x", "1"), (ROLE_KEY, "command")],
            "Edit",
        );
        let result = format_for(&code, "beamer", &Environment::default());
        assert_eq!(result.unwrap(), raw("\\colorbox{adacore2}{\\textcolor{white}{Edit}}"));
    }

    #[test]
    fn test_plain_code_is_unchanged() {
        let code = Code {
            attr: empty_attr(),
            text: "x := 1;".to_string(),
        };
        let result = format_for(&code, "beamer", &Environment::default());
        assert_eq!(result.unwrap(), Rewrite::Unchanged);
    }

    #[test]
    fn test_title_ref_uses_default_role() {
        let span = Span {
            attr: attr_with_classes([TITLE_REF]),
            content: vec![Inline::str("Ada"), Inline::Space, Inline::str("RM")],
        };
        assert_eq!(
            format_title_ref(&span, &FilterConfig::default()),
            Rewrite::Replace(vec![strong(span.content.clone())])
        );

        let mut config = FilterConfig::default();
        config.roles.insert("default".to_string(), RoleFormat::Menu);
        assert_eq!(
            format_title_ref(&span, &config),
            Rewrite::Replace(vec![strong(span.content.clone())])
        );

        config.roles.insert("default".to_string(), RoleFormat::SmallCaps);
        assert_eq!(
            format_title_ref(&span, &config),
            Rewrite::Replace(vec![Inline::SmallCaps(SmallCaps {
                content: span.content.clone(),
            })])
        );
    }

    #[test]
    fn test_other_spans_are_unchanged() {
        let span = Span {
            attr: attr_with_classes(["underline"]),
            content: vec![Inline::str("x")],
        };
        assert_eq!(
            format_title_ref(&span, &FilterConfig::default()),
            Rewrite::Unchanged
        );
    }
}
