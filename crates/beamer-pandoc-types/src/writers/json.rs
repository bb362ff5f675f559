/*
 * json.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Writer for Pandoc's JSON serialization of the AST.
 */

use crate::attr::Attr;
use crate::block::Block;
use crate::caption::Caption;
use crate::inline::{Citation, CitationMode, Inline, Inlines, MathType, QuoteType, Target};
use crate::list::{ListAttributes, ListNumberDelim, ListNumberStyle};
use crate::meta::{Meta, MetaValue};
use crate::pandoc::Pandoc;
use crate::table::{Alignment, Cell, ColSpec, ColWidth, Row, TableBody, TableFoot, TableHead};
use serde_json::{Map, Value, json};

fn write_attr(attr: &Attr) -> Value {
    json!([
        attr.0, // id
        attr.1, // classes
        attr.2
            .iter()
            .map(|(k, v)| json!([k, v]))
            .collect::<Vec<_>>()  // key-value pairs
    ])
}

fn write_target(target: &Target) -> Value {
    json!([target.0, target.1])
}

fn write_citation_mode(mode: &CitationMode) -> Value {
    match mode {
        CitationMode::AuthorInText => json!({"t": "AuthorInText"}),
        CitationMode::SuppressAuthor => json!({"t": "SuppressAuthor"}),
        CitationMode::NormalCitation => json!({"t": "NormalCitation"}),
    }
}

fn write_citation(citation: &Citation) -> Value {
    json!({
        "citationId": citation.id,
        "citationPrefix": write_inlines(&citation.prefix),
        "citationSuffix": write_inlines(&citation.suffix),
        "citationMode": write_citation_mode(&citation.mode),
        "citationNoteNum": citation.note_num,
        "citationHash": citation.hash
    })
}

pub fn write_inline(inline: &Inline) -> Value {
    match inline {
        Inline::Str(s) => json!({"t": "Str", "c": s.text}),
        Inline::Space => json!({"t": "Space"}),
        Inline::SoftBreak => json!({"t": "SoftBreak"}),
        Inline::LineBreak => json!({"t": "LineBreak"}),
        Inline::Emph(e) => json!({"t": "Emph", "c": write_inlines(&e.content)}),
        Inline::Underline(u) => json!({"t": "Underline", "c": write_inlines(&u.content)}),
        Inline::Strong(s) => json!({"t": "Strong", "c": write_inlines(&s.content)}),
        Inline::Strikeout(s) => json!({"t": "Strikeout", "c": write_inlines(&s.content)}),
        Inline::Superscript(s) => json!({"t": "Superscript", "c": write_inlines(&s.content)}),
        Inline::Subscript(s) => json!({"t": "Subscript", "c": write_inlines(&s.content)}),
        Inline::SmallCaps(s) => json!({"t": "SmallCaps", "c": write_inlines(&s.content)}),
        Inline::Quoted(q) => {
            let quote_type = match q.quote_type {
                QuoteType::SingleQuote => json!({"t": "SingleQuote"}),
                QuoteType::DoubleQuote => json!({"t": "DoubleQuote"}),
            };
            json!({"t": "Quoted", "c": [quote_type, write_inlines(&q.content)]})
        }
        Inline::Cite(c) => json!({
            "t": "Cite",
            "c": [
                c.citations.iter().map(write_citation).collect::<Vec<_>>(),
                write_inlines(&c.content)
            ]
        }),
        Inline::Code(c) => json!({"t": "Code", "c": [write_attr(&c.attr), c.text]}),
        Inline::Math(m) => {
            let math_type = match m.math_type {
                MathType::InlineMath => json!({"t": "InlineMath"}),
                MathType::DisplayMath => json!({"t": "DisplayMath"}),
            };
            json!({"t": "Math", "c": [math_type, m.text]})
        }
        Inline::RawInline(r) => json!({"t": "RawInline", "c": [r.format, r.text]}),
        Inline::Link(l) => json!({
            "t": "Link",
            "c": [write_attr(&l.attr), write_inlines(&l.content), write_target(&l.target)]
        }),
        Inline::Image(i) => json!({
            "t": "Image",
            "c": [write_attr(&i.attr), write_inlines(&i.content), write_target(&i.target)]
        }),
        Inline::Note(n) => json!({"t": "Note", "c": write_blocks(&n.content)}),
        Inline::Span(s) => json!({
            "t": "Span",
            "c": [write_attr(&s.attr), write_inlines(&s.content)]
        }),
    }
}

pub fn write_inlines(inlines: &Inlines) -> Value {
    Value::Array(inlines.iter().map(write_inline).collect())
}

fn write_list_attributes(attr: &ListAttributes) -> Value {
    let style = match attr.1 {
        ListNumberStyle::Default => "DefaultStyle",
        ListNumberStyle::Example => "Example",
        ListNumberStyle::Decimal => "Decimal",
        ListNumberStyle::LowerRoman => "LowerRoman",
        ListNumberStyle::UpperRoman => "UpperRoman",
        ListNumberStyle::LowerAlpha => "LowerAlpha",
        ListNumberStyle::UpperAlpha => "UpperAlpha",
    };
    let delim = match attr.2 {
        ListNumberDelim::Default => "DefaultDelim",
        ListNumberDelim::Period => "Period",
        ListNumberDelim::OneParen => "OneParen",
        ListNumberDelim::TwoParens => "TwoParens",
    };
    json!([attr.0, {"t": style}, {"t": delim}])
}

fn write_blockss(blockss: &[Vec<Block>]) -> Value {
    Value::Array(blockss.iter().map(|blocks| write_blocks(blocks)).collect())
}

fn write_caption(caption: &Caption) -> Value {
    let short = match &caption.short {
        Some(inlines) => write_inlines(inlines),
        None => Value::Null,
    };
    let long = match &caption.long {
        Some(blocks) => write_blocks(blocks),
        None => json!([]),
    };
    json!([short, long])
}

fn write_alignment(alignment: &Alignment) -> Value {
    match alignment {
        Alignment::Left => json!({"t": "AlignLeft"}),
        Alignment::Center => json!({"t": "AlignCenter"}),
        Alignment::Right => json!({"t": "AlignRight"}),
        Alignment::Default => json!({"t": "AlignDefault"}),
    }
}

fn write_colwidth(colwidth: &ColWidth) -> Value {
    match colwidth {
        ColWidth::Default => json!({"t": "ColWidthDefault"}),
        ColWidth::Percentage(width) => json!({"t": "ColWidth", "c": width}),
    }
}

fn write_colspec(colspec: &ColSpec) -> Value {
    json!([write_alignment(&colspec.0), write_colwidth(&colspec.1)])
}

fn write_cell(cell: &Cell) -> Value {
    json!([
        write_attr(&cell.attr),
        write_alignment(&cell.alignment),
        cell.row_span,
        cell.col_span,
        write_blocks(&cell.content)
    ])
}

fn write_row(row: &Row) -> Value {
    json!([
        write_attr(&row.attr),
        row.cells.iter().map(write_cell).collect::<Vec<_>>()
    ])
}

fn write_rows(rows: &[Row]) -> Value {
    Value::Array(rows.iter().map(write_row).collect())
}

fn write_table_head(head: &TableHead) -> Value {
    json!([write_attr(&head.attr), write_rows(&head.rows)])
}

fn write_table_body(body: &TableBody) -> Value {
    json!([
        write_attr(&body.attr),
        body.rowhead_columns,
        write_rows(&body.head),
        write_rows(&body.body)
    ])
}

fn write_table_foot(foot: &TableFoot) -> Value {
    json!([write_attr(&foot.attr), write_rows(&foot.rows)])
}

pub fn write_block(block: &Block) -> Value {
    match block {
        Block::Plain(p) => json!({"t": "Plain", "c": write_inlines(&p.content)}),
        Block::Paragraph(p) => json!({"t": "Para", "c": write_inlines(&p.content)}),
        Block::LineBlock(lb) => json!({
            "t": "LineBlock",
            "c": lb.content.iter().map(write_inlines).collect::<Vec<_>>()
        }),
        Block::CodeBlock(cb) => json!({"t": "CodeBlock", "c": [write_attr(&cb.attr), cb.text]}),
        Block::RawBlock(rb) => json!({"t": "RawBlock", "c": [rb.format, rb.text]}),
        Block::BlockQuote(bq) => json!({"t": "BlockQuote", "c": write_blocks(&bq.content)}),
        Block::OrderedList(ol) => json!({
            "t": "OrderedList",
            "c": [write_list_attributes(&ol.attr), write_blockss(&ol.content)]
        }),
        Block::BulletList(bl) => json!({"t": "BulletList", "c": write_blockss(&bl.content)}),
        Block::DefinitionList(dl) => json!({
            "t": "DefinitionList",
            "c": dl
                .content
                .iter()
                .map(|(term, defs)| json!([write_inlines(term), write_blockss(defs)]))
                .collect::<Vec<_>>()
        }),
        Block::Header(h) => json!({
            "t": "Header",
            "c": [h.level, write_attr(&h.attr), write_inlines(&h.content)]
        }),
        Block::HorizontalRule => json!({"t": "HorizontalRule"}),
        Block::Table(t) => json!({
            "t": "Table",
            "c": [
                write_attr(&t.attr),
                write_caption(&t.caption),
                t.colspec.iter().map(write_colspec).collect::<Vec<_>>(),
                write_table_head(&t.head),
                t.bodies.iter().map(write_table_body).collect::<Vec<_>>(),
                write_table_foot(&t.foot)
            ]
        }),
        Block::Figure(f) => json!({
            "t": "Figure",
            "c": [write_attr(&f.attr), write_caption(&f.caption), write_blocks(&f.content)]
        }),
        Block::Div(d) => json!({"t": "Div", "c": [write_attr(&d.attr), write_blocks(&d.content)]}),
    }
}

pub fn write_blocks(blocks: &[Block]) -> Value {
    Value::Array(blocks.iter().map(write_block).collect())
}

pub fn write_meta_value(value: &MetaValue) -> Value {
    match value {
        MetaValue::MetaString(s) => json!({"t": "MetaString", "c": s}),
        MetaValue::MetaBool(b) => json!({"t": "MetaBool", "c": b}),
        MetaValue::MetaInlines(inlines) => json!({"t": "MetaInlines", "c": write_inlines(inlines)}),
        MetaValue::MetaBlocks(blocks) => json!({"t": "MetaBlocks", "c": write_blocks(blocks)}),
        MetaValue::MetaList(items) => json!({
            "t": "MetaList",
            "c": items.iter().map(write_meta_value).collect::<Vec<_>>()
        }),
        MetaValue::MetaMap(map) => {
            let mut obj = Map::new();
            for (key, value) in map {
                obj.insert(key.clone(), write_meta_value(value));
            }
            json!({"t": "MetaMap", "c": obj})
        }
    }
}

fn write_meta(meta: &Meta) -> Value {
    let mut obj = Map::new();
    for (key, value) in meta {
        obj.insert(key.clone(), write_meta_value(value));
    }
    Value::Object(obj)
}

/// Serialize a whole document to a JSON value.
pub fn write_pandoc(pandoc: &Pandoc) -> Value {
    json!({
        "pandoc-api-version": pandoc.api_version,
        "meta": write_meta(&pandoc.meta),
        "blocks": write_blocks(&pandoc.blocks)
    })
}

/// Serialize a whole document as JSON to `writer`.
pub fn write<W: std::io::Write>(pandoc: &Pandoc, writer: &mut W) -> serde_json::Result<()> {
    serde_json::to_writer(writer, &write_pandoc(pandoc))
}
