/*
 * rewriter.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The beamer node rewriter and the document-level entry points.

use crate::config::{Environment, FilterConfig};
use crate::containers;
use crate::diagnostic::DiagnosticMessage;
use crate::errors::{Result, RewriteError};
use crate::filter_context::FilterContext;
use crate::path_resolver;
use crate::roles;
use crate::slides;
use crate::walk::{Rewrite, Rewriter, walk_document};
use beamer_pandoc_types::readers::json as json_reader;
use beamer_pandoc_types::writers::json as json_writer;
use beamer_pandoc_types::{Block, Image, Inline, Pandoc};
use std::io::{Read, Write};
use tracing::debug;

/// Rewrites roles, containers, headers, block quotes and images.
///
/// Images and roles are handled for every output format; everything else
/// only when pandoc is writing the slide format.
pub struct BeamerRewriter {
    config: FilterConfig,
    env: Environment,
}

impl BeamerRewriter {
    pub fn new(config: FilterConfig, env: Environment) -> Self {
        Self { config, env }
    }

    fn try_rewrite_block(
        &self,
        block: &Block,
        ctx: &mut FilterContext,
    ) -> std::result::Result<Rewrite<Block>, RewriteError> {
        if !ctx.is_format(&self.config.slide_format) {
            return Ok(Rewrite::Unchanged);
        }
        match block {
            Block::BlockQuote(quote) => Ok(slides::bullet_policy(
                quote,
                self.config.bullet_point_animation,
            )),
            Block::Header(header) => Ok(Rewrite::Replace(vec![Block::Header(
                slides::decorate_header(header, &self.config.slide_decorators),
            )])),
            Block::Div(div) => match containers::classify(div, ctx) {
                Some(kind) => Ok(Rewrite::Replace(containers::rewrite_container(
                    kind,
                    div,
                    &self.config,
                    ctx,
                )?)),
                None => Ok(Rewrite::Unchanged),
            },
            _ => Ok(Rewrite::Unchanged),
        }
    }

    fn try_rewrite_inline(
        &self,
        inline: &Inline,
        ctx: &mut FilterContext,
    ) -> std::result::Result<Rewrite<Inline>, RewriteError> {
        match inline {
            Inline::Image(image) => {
                let search_path = self.env.search_path.as_deref();
                let path = path_resolver::resolve(&image.target.0, search_path);
                Ok(Rewrite::Replace(vec![Inline::Image(Image {
                    target: (path, image.target.1.clone()),
                    ..image.clone()
                })]))
            }
            Inline::Code(code) => {
                roles::format_interpreted_text(code, ctx, &self.config, &self.env)
            }
            Inline::Span(span) => Ok(roles::format_title_ref(span, &self.config)),
            _ => Ok(Rewrite::Unchanged),
        }
    }
}

impl Rewriter for BeamerRewriter {
    fn rewrite_block(&self, block: &Block, ctx: &mut FilterContext) -> Rewrite<Block> {
        match self.try_rewrite_block(block, ctx) {
            Ok(Rewrite::Unchanged) => Rewrite::Unchanged,
            Ok(rewrite) => {
                debug!(node = block.tag(), "rewrote block");
                rewrite
            }
            Err(err) => {
                debug!(node = block.tag(), error = %err, "left block unchanged");
                ctx.record(&err);
                Rewrite::Unchanged
            }
        }
    }

    fn rewrite_inline(&self, inline: &Inline, ctx: &mut FilterContext) -> Rewrite<Inline> {
        match self.try_rewrite_inline(inline, ctx) {
            Ok(Rewrite::Unchanged) => Rewrite::Unchanged,
            Ok(rewrite) => {
                debug!(node = inline.tag(), "rewrote inline");
                rewrite
            }
            Err(err) => {
                debug!(node = inline.tag(), error = %err, "left inline unchanged");
                ctx.record(&err);
                Rewrite::Unchanged
            }
        }
    }
}

/// Run the rewriter over a whole document for output `format`.
pub fn filter_document(
    doc: Pandoc,
    format: &str,
    rewriter: &BeamerRewriter,
) -> (Pandoc, Vec<DiagnosticMessage>) {
    let mut ctx = FilterContext::new(format);
    let doc = walk_document(doc, rewriter, &mut ctx);
    debug!(diagnostics = ctx.diagnostics().len(), "walk finished");
    (doc, ctx.into_diagnostics())
}

/// Read pandoc JSON from `input`, filter it and write pandoc JSON to
/// `output`. Returns the diagnostics recorded along the way.
pub fn filter_json<R: Read, W: Write>(
    input: &mut R,
    output: &mut W,
    format: &str,
    rewriter: &BeamerRewriter,
) -> Result<Vec<DiagnosticMessage>> {
    let doc = json_reader::read(input)?;
    debug!(blocks = doc.blocks.len(), format, "read document");
    let (doc, diagnostics) = filter_document(doc, format, rewriter);
    json_writer::write(&doc, output)?;
    output.flush()?;
    Ok(diagnostics)
}
