/*
 * walk.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Top-down traversal of a document, offering each block and inline to a
//! [`Rewriter`].
//!
//! The walk follows the semantics of pandoc's Python `pandocfilters`:
//!
//! - every node in a block or inline list is offered to the rewriter in
//!   document order, metadata first;
//! - an unchanged node is kept and the walk descends into its children;
//! - a replacement is spliced in place of the node, and the walk descends
//!   into the children of each replacement node without offering the
//!   replacement node itself again;
//! - a deleted node is dropped.

use crate::filter_context::FilterContext;
use beamer_pandoc_types::{
    Block, BlockQuote, Blocks, BulletList, Caption, Cell, Cite, DefinitionList, Div, Emph, Figure,
    Header, Image, Inline, Inlines, LineBlock, Link, Meta, MetaValue, Note, OrderedList, Pandoc,
    Paragraph, Plain, Quoted, Row, SmallCaps, Span, Strikeout, Strong, Subscript, Superscript,
    Table, TableBody, TableFoot, TableHead, Underline,
};

/// What a rewriter wants done with one node.
#[derive(Debug, Clone, PartialEq)]
pub enum Rewrite<T> {
    /// Keep the node and walk its children
    Unchanged,
    /// Splice these nodes in place of the node
    Replace(Vec<T>),
    /// Drop the node
    Delete,
}

pub trait Rewriter {
    fn rewrite_block(&self, _block: &Block, _ctx: &mut FilterContext) -> Rewrite<Block> {
        Rewrite::Unchanged
    }

    fn rewrite_inline(&self, _inline: &Inline, _ctx: &mut FilterContext) -> Rewrite<Inline> {
        Rewrite::Unchanged
    }
}

pub fn walk_document<R: Rewriter + ?Sized>(
    doc: Pandoc,
    rewriter: &R,
    ctx: &mut FilterContext,
) -> Pandoc {
    let meta = walk_meta(doc.meta, rewriter, ctx);
    let blocks = walk_blocks(doc.blocks, rewriter, ctx);
    Pandoc {
        api_version: doc.api_version,
        meta,
        blocks,
    }
}

pub fn walk_blocks<R: Rewriter + ?Sized>(
    blocks: Blocks,
    rewriter: &R,
    ctx: &mut FilterContext,
) -> Blocks {
    let mut result = Vec::with_capacity(blocks.len());
    for block in blocks {
        match rewriter.rewrite_block(&block, ctx) {
            Rewrite::Unchanged => result.push(walk_block_children(block, rewriter, ctx)),
            Rewrite::Replace(replacement) => {
                for new_block in replacement {
                    result.push(walk_block_children(new_block, rewriter, ctx));
                }
            }
            Rewrite::Delete => {}
        }
    }
    result
}

pub fn walk_inlines<R: Rewriter + ?Sized>(
    inlines: Inlines,
    rewriter: &R,
    ctx: &mut FilterContext,
) -> Inlines {
    let mut result = Vec::with_capacity(inlines.len());
    for inline in inlines {
        match rewriter.rewrite_inline(&inline, ctx) {
            Rewrite::Unchanged => result.push(walk_inline_children(inline, rewriter, ctx)),
            Rewrite::Replace(replacement) => {
                for new_inline in replacement {
                    result.push(walk_inline_children(new_inline, rewriter, ctx));
                }
            }
            Rewrite::Delete => {}
        }
    }
    result
}

fn walk_blockss<R: Rewriter + ?Sized>(
    blockss: Vec<Blocks>,
    rewriter: &R,
    ctx: &mut FilterContext,
) -> Vec<Blocks> {
    blockss
        .into_iter()
        .map(|blocks| walk_blocks(blocks, rewriter, ctx))
        .collect()
}

fn walk_block_children<R: Rewriter + ?Sized>(
    block: Block,
    rewriter: &R,
    ctx: &mut FilterContext,
) -> Block {
    match block {
        Block::Plain(p) => Block::Plain(Plain {
            content: walk_inlines(p.content, rewriter, ctx),
        }),
        Block::Paragraph(p) => Block::Paragraph(Paragraph {
            content: walk_inlines(p.content, rewriter, ctx),
        }),
        Block::LineBlock(lb) => Block::LineBlock(LineBlock {
            content: lb
                .content
                .into_iter()
                .map(|line| walk_inlines(line, rewriter, ctx))
                .collect(),
        }),
        Block::BlockQuote(bq) => Block::BlockQuote(BlockQuote {
            content: walk_blocks(bq.content, rewriter, ctx),
        }),
        Block::OrderedList(ol) => Block::OrderedList(OrderedList {
            attr: ol.attr,
            content: walk_blockss(ol.content, rewriter, ctx),
        }),
        Block::BulletList(bl) => Block::BulletList(BulletList {
            content: walk_blockss(bl.content, rewriter, ctx),
        }),
        Block::DefinitionList(dl) => Block::DefinitionList(DefinitionList {
            content: dl
                .content
                .into_iter()
                .map(|(term, definitions)| {
                    (
                        walk_inlines(term, rewriter, ctx),
                        walk_blockss(definitions, rewriter, ctx),
                    )
                })
                .collect(),
        }),
        Block::Header(h) => Block::Header(Header {
            content: walk_inlines(h.content, rewriter, ctx),
            ..h
        }),
        Block::Table(t) => Block::Table(walk_table(t, rewriter, ctx)),
        Block::Figure(f) => Block::Figure(Figure {
            attr: f.attr,
            caption: walk_caption(f.caption, rewriter, ctx),
            content: walk_blocks(f.content, rewriter, ctx),
        }),
        Block::Div(d) => Block::Div(Div {
            attr: d.attr,
            content: walk_blocks(d.content, rewriter, ctx),
        }),
        Block::CodeBlock(_) | Block::RawBlock(_) | Block::HorizontalRule => block,
    }
}

fn walk_caption<R: Rewriter + ?Sized>(
    caption: Caption,
    rewriter: &R,
    ctx: &mut FilterContext,
) -> Caption {
    Caption {
        short: caption
            .short
            .map(|short| walk_inlines(short, rewriter, ctx)),
        long: caption.long.map(|long| walk_blocks(long, rewriter, ctx)),
    }
}

fn walk_rows<R: Rewriter + ?Sized>(
    rows: Vec<Row>,
    rewriter: &R,
    ctx: &mut FilterContext,
) -> Vec<Row> {
    rows.into_iter()
        .map(|row| Row {
            attr: row.attr,
            cells: row
                .cells
                .into_iter()
                .map(|cell| Cell {
                    content: walk_blocks(cell.content, rewriter, ctx),
                    ..cell
                })
                .collect(),
        })
        .collect()
}

fn walk_table<R: Rewriter + ?Sized>(table: Table, rewriter: &R, ctx: &mut FilterContext) -> Table {
    Table {
        attr: table.attr,
        caption: walk_caption(table.caption, rewriter, ctx),
        colspec: table.colspec,
        head: TableHead {
            attr: table.head.attr,
            rows: walk_rows(table.head.rows, rewriter, ctx),
        },
        bodies: table
            .bodies
            .into_iter()
            .map(|body| TableBody {
                attr: body.attr,
                rowhead_columns: body.rowhead_columns,
                head: walk_rows(body.head, rewriter, ctx),
                body: walk_rows(body.body, rewriter, ctx),
            })
            .collect(),
        foot: TableFoot {
            attr: table.foot.attr,
            rows: walk_rows(table.foot.rows, rewriter, ctx),
        },
    }
}

fn walk_inline_children<R: Rewriter + ?Sized>(
    inline: Inline,
    rewriter: &R,
    ctx: &mut FilterContext,
) -> Inline {
    match inline {
        Inline::Emph(e) => Inline::Emph(Emph {
            content: walk_inlines(e.content, rewriter, ctx),
        }),
        Inline::Underline(u) => Inline::Underline(Underline {
            content: walk_inlines(u.content, rewriter, ctx),
        }),
        Inline::Strong(s) => Inline::Strong(Strong {
            content: walk_inlines(s.content, rewriter, ctx),
        }),
        Inline::Strikeout(s) => Inline::Strikeout(Strikeout {
            content: walk_inlines(s.content, rewriter, ctx),
        }),
        Inline::Superscript(s) => Inline::Superscript(Superscript {
            content: walk_inlines(s.content, rewriter, ctx),
        }),
        Inline::Subscript(s) => Inline::Subscript(Subscript {
            content: walk_inlines(s.content, rewriter, ctx),
        }),
        Inline::SmallCaps(s) => Inline::SmallCaps(SmallCaps {
            content: walk_inlines(s.content, rewriter, ctx),
        }),
        Inline::Quoted(q) => Inline::Quoted(Quoted {
            quote_type: q.quote_type,
            content: walk_inlines(q.content, rewriter, ctx),
        }),
        Inline::Cite(c) => {
            // Citation prefixes and suffixes come before the cite's own text.
            let citations = c
                .citations
                .into_iter()
                .map(|mut citation| {
                    citation.prefix = walk_inlines(citation.prefix, rewriter, ctx);
                    citation.suffix = walk_inlines(citation.suffix, rewriter, ctx);
                    citation
                })
                .collect();
            Inline::Cite(Cite {
                citations,
                content: walk_inlines(c.content, rewriter, ctx),
            })
        }
        Inline::Link(l) => Inline::Link(Link {
            content: walk_inlines(l.content, rewriter, ctx),
            ..l
        }),
        Inline::Image(i) => Inline::Image(Image {
            content: walk_inlines(i.content, rewriter, ctx),
            ..i
        }),
        Inline::Note(n) => Inline::Note(Note {
            content: walk_blocks(n.content, rewriter, ctx),
        }),
        Inline::Span(s) => Inline::Span(Span {
            attr: s.attr,
            content: walk_inlines(s.content, rewriter, ctx),
        }),
        Inline::Str(_)
        | Inline::Code(_)
        | Inline::Space
        | Inline::SoftBreak
        | Inline::LineBreak
        | Inline::Math(_)
        | Inline::RawInline(_) => inline,
    }
}

fn walk_meta<R: Rewriter + ?Sized>(meta: Meta, rewriter: &R, ctx: &mut FilterContext) -> Meta {
    meta.into_iter()
        .map(|(key, value)| (key, walk_meta_value(value, rewriter, ctx)))
        .collect()
}

fn walk_meta_value<R: Rewriter + ?Sized>(
    value: MetaValue,
    rewriter: &R,
    ctx: &mut FilterContext,
) -> MetaValue {
    match value {
        MetaValue::MetaInlines(inlines) => {
            MetaValue::MetaInlines(walk_inlines(inlines, rewriter, ctx))
        }
        MetaValue::MetaBlocks(blocks) => MetaValue::MetaBlocks(walk_blocks(blocks, rewriter, ctx)),
        MetaValue::MetaList(items) => MetaValue::MetaList(
            items
                .into_iter()
                .map(|item| walk_meta_value(item, rewriter, ctx))
                .collect(),
        ),
        MetaValue::MetaMap(map) => MetaValue::MetaMap(
            map.into_iter()
                .map(|(key, item)| (key, walk_meta_value(item, rewriter, ctx)))
                .collect(),
        ),
        MetaValue::MetaString(_) | MetaValue::MetaBool(_) => value,
    }
}
