/*
 * containers.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Container and admonition handling for slides.
//!
//! reStructuredText `container` directives become `Div`s whose first class
//! is `container` and whose second names the kind of container:
//!
//! ```rst
//! .. container:: speakernote
//!
//!    Only shown in the notes.
//!
//! .. container:: latex_environment footnotesize
//!
//!    Smaller text.
//! ```
//!
//! A "language variant" admonition puts a boxed subtitle on the slide:
//!
//! ```rst
//! .. admonition:: Language Variant
//!
//!    Ada 2012
//! ```

use crate::animate;
use crate::config::FilterConfig;
use crate::errors::RewriteError;
use crate::filter_context::FilterContext;
use crate::latex;
use crate::source_include;
use beamer_pandoc_types::{Block, Div, Inline, has_class};

const CONTAINER: &str = "container";
const ADMONITION: &str = "admonition";
const LANGUAGE_VARIANT: &str = "language variant";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    SpeakerNote,
    SourceInclude,
    Animate,
    LatexEnvironment,
    LanguageVariant,
}

impl ContainerKind {
    /// Marker classes, in the order they are tested.
    const MARKED: [(&'static str, ContainerKind); 4] = [
        ("speakernote", ContainerKind::SpeakerNote),
        ("source_include", ContainerKind::SourceInclude),
        ("animate", ContainerKind::Animate),
        ("latex_environment", ContainerKind::LatexEnvironment),
    ];
}

/// Classify a `Div`. The first matching kind wins.
pub fn classify(div: &Div, ctx: &mut FilterContext) -> Option<ContainerKind> {
    if has_class(&div.attr, CONTAINER) {
        let marked = ContainerKind::MARKED
            .iter()
            .find(|(marker, _)| has_class(&div.attr, marker));
        if let Some((_, kind)) = marked {
            return Some(*kind);
        }
    }
    if admonition_title(div, ctx).as_deref() == Some(LANGUAGE_VARIANT) {
        return Some(ContainerKind::LanguageVariant);
    }
    None
}

/// Flatten inlines to text: `Str` text as is, `Space` as a blank. Other
/// inlines are skipped and noted.
pub fn flatten_inlines(inlines: &[Inline], ctx: &mut FilterContext) -> String {
    let mut text = String::new();
    for inline in inlines {
        match inline {
            Inline::Str(s) => text.push_str(&s.text),
            Inline::Space => text.push(' '),
            other => ctx.record(&RewriteError::UnsupportedInline(other.tag())),
        }
    }
    text
}

/// The two paragraphs of an admonition: its title and its body.
fn admonition_paragraphs(div: &Div) -> Option<(&[Inline], &[Inline])> {
    if !has_class(&div.attr, ADMONITION) {
        return None;
    }
    match div.content.as_slice() {
        [Block::Paragraph(title), Block::Paragraph(body)] => Some((&title.content, &body.content)),
        _ => None,
    }
}

/// The lower-cased title of a two-paragraph admonition.
fn admonition_title(div: &Div, ctx: &mut FilterContext) -> Option<String> {
    let (title, _) = admonition_paragraphs(div)?;
    Some(flatten_inlines(title, ctx).to_lowercase())
}

pub fn speaker_note(div: &Div, raw_format: &str) -> Vec<Block> {
    latex::wrap_blocks(raw_format, "\\note{".to_string(), &div.content, "}".to_string())
}

/// Wrap the content in the environment named by the third class, or splice
/// it in unwrapped when there is none.
pub fn latex_environment(div: &Div, raw_format: &str) -> Vec<Block> {
    match div.attr.1.get(2) {
        Some(environment) => latex::wrap_blocks(
            raw_format,
            latex::begin(environment),
            &div.content,
            latex::end(environment),
        ),
        None => div.content.clone(),
    }
}

pub fn language_variant(
    div: &Div,
    config: &FilterConfig,
    ctx: &mut FilterContext,
) -> Result<Vec<Block>, RewriteError> {
    let Some((_, body)) = admonition_paragraphs(div) else {
        return Err(RewriteError::MalformedNode {
            node: "Div",
            reason: "language variant admonition needs two paragraphs".to_string(),
        });
    };
    let text = flatten_inlines(body, ctx);
    let subtitle = format!(
        "\\framesubtitle{{\\rightline{{{}\\hspace{{1cm}}}}}}",
        latex::colorbox(&text, &config.box_color)
    );
    Ok(vec![Block::raw(&config.raw_format, subtitle)])
}

/// Rewrite a classified container.
pub fn rewrite_container(
    kind: ContainerKind,
    div: &Div,
    config: &FilterConfig,
    ctx: &mut FilterContext,
) -> Result<Vec<Block>, RewriteError> {
    let raw_format = config.raw_format.as_str();
    match kind {
        ContainerKind::SpeakerNote => Ok(speaker_note(div, raw_format)),
        ContainerKind::SourceInclude => Ok(vec![source_include::include_source(
            &div.attr.1,
            &config.default_code_language,
            ctx,
        )?]),
        ContainerKind::Animate => Ok(animate::animate(&div.attr.1, &div.content, raw_format)),
        ContainerKind::LatexEnvironment => Ok(latex_environment(div, raw_format)),
        ContainerKind::LanguageVariant => language_variant(div, config, ctx),
    }
}
