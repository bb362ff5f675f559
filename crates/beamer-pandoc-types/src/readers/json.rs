/*
 * json.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Reader for Pandoc's JSON serialization of the AST.
 */

use crate::attr::Attr;
use crate::block::{
    Block, BlockQuote, Blocks, BulletList, CodeBlock, DefinitionList, Div, Figure, Header,
    LineBlock, OrderedList, Paragraph, Plain, RawBlock,
};
use crate::caption::Caption;
use crate::inline::{
    Citation, CitationMode, Cite, Code, Emph, Image, Inline, Inlines, Link, Math, MathType, Note,
    QuoteType, Quoted, RawInline, SmallCaps, Span, Str, Strikeout, Strong, Subscript,
    Superscript, Target, Underline,
};
use crate::list::{ListAttributes, ListNumberDelim, ListNumberStyle};
use crate::meta::{Meta, MetaValue};
use crate::pandoc::{PANDOC_API_VERSION, Pandoc};
use crate::table::{Alignment, Cell, ColSpec, ColWidth, Row, Table, TableBody, TableFoot, TableHead};
use hashlink::LinkedHashMap;
use serde_json::{Map, Value};

#[derive(Debug, thiserror::Error)]
pub enum JsonReadError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid type: {0}")]
    InvalidType(String),

    #[error("Unsupported variant: {0}")]
    UnsupportedVariant(String),
}

type Result<T> = std::result::Result<T, JsonReadError>;

/// Read a whole Pandoc document from a JSON byte stream.
pub fn read<R: std::io::Read>(reader: &mut R) -> Result<Pandoc> {
    let value: Value = serde_json::from_reader(reader)?;
    read_pandoc(&value)
}

/// Read a whole Pandoc document from an already-parsed JSON value.
pub fn read_pandoc(value: &Value) -> Result<Pandoc> {
    let obj = value
        .as_object()
        .ok_or_else(|| JsonReadError::InvalidType("Expected object for Pandoc".to_string()))?;

    let api_version = match obj.get("pandoc-api-version") {
        Some(v) => v
            .as_array()
            .ok_or_else(|| {
                JsonReadError::InvalidType("pandoc-api-version must be array".to_string())
            })?
            .iter()
            .map(|n| {
                n.as_u64().ok_or_else(|| {
                    JsonReadError::InvalidType(
                        "pandoc-api-version entries must be integers".to_string(),
                    )
                })
            })
            .collect::<Result<Vec<_>>>()?,
        None => PANDOC_API_VERSION.to_vec(),
    };

    let meta = match obj.get("meta") {
        Some(m) => read_meta(m)?,
        None => Meta::new(),
    };

    let blocks = read_blocks(
        obj.get("blocks")
            .ok_or_else(|| JsonReadError::MissingField("blocks".to_string()))?,
    )?;

    Ok(Pandoc {
        api_version,
        meta,
        blocks,
    })
}

/// Split a `{"t": ..., "c": ...}` node into its tag and (optional) content.
fn tagged<'a>(value: &'a Value, what: &str) -> Result<(&'a str, Option<&'a Value>)> {
    let obj = value
        .as_object()
        .ok_or_else(|| JsonReadError::InvalidType(format!("Expected object for {}", what)))?;
    let t = obj
        .get("t")
        .and_then(|v| v.as_str())
        .ok_or_else(|| JsonReadError::MissingField(format!("t in {}", what)))?;
    Ok((t, obj.get("c")))
}

fn content<'a>(c: Option<&'a Value>, tag: &str) -> Result<&'a Value> {
    c.ok_or_else(|| JsonReadError::MissingField(format!("c in {}", tag)))
}

fn field<'a>(obj: &'a Map<String, Value>, name: &str) -> Result<&'a Value> {
    obj.get(name)
        .ok_or_else(|| JsonReadError::MissingField(name.to_string()))
}

fn tuple<'a>(value: &'a Value, len: usize, what: &str) -> Result<&'a [Value]> {
    let arr = value
        .as_array()
        .ok_or_else(|| JsonReadError::InvalidType(format!("{} content must be array", what)))?;
    if arr.len() != len {
        return Err(JsonReadError::InvalidType(format!(
            "{} array must have {} elements",
            what, len
        )));
    }
    Ok(arr)
}

fn array<'a>(value: &'a Value, what: &str) -> Result<&'a Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| JsonReadError::InvalidType(format!("{} must be array", what)))
}

fn string(value: &Value, what: &str) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| JsonReadError::InvalidType(format!("{} must be string", what)))
}

fn integer(value: &Value, what: &str) -> Result<i64> {
    value
        .as_i64()
        .ok_or_else(|| JsonReadError::InvalidType(format!("{} must be integer", what)))
}

fn read_attr(value: &Value) -> Result<Attr> {
    let arr = tuple(value, 3, "Attr")?;

    let id = string(&arr[0], "Attr id")?;

    let classes = array(&arr[1], "Attr classes")?
        .iter()
        .map(|v| string(v, "Class"))
        .collect::<Result<Vec<_>>>()?;

    let kvs = array(&arr[2], "Attr key-values")?
        .iter()
        .map(|kv| {
            let pair = tuple(kv, 2, "Key-value pair")?;
            Ok((string(&pair[0], "Key")?, string(&pair[1], "Value")?))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok((id, classes, kvs))
}

fn read_target(value: &Value) -> Result<Target> {
    let arr = tuple(value, 2, "Target")?;
    Ok((string(&arr[0], "Target url")?, string(&arr[1], "Target title")?))
}

fn read_citation_mode(value: &Value) -> Result<CitationMode> {
    let (t, _) = tagged(value, "CitationMode")?;
    match t {
        "AuthorInText" => Ok(CitationMode::AuthorInText),
        "SuppressAuthor" => Ok(CitationMode::SuppressAuthor),
        "NormalCitation" => Ok(CitationMode::NormalCitation),
        other => Err(JsonReadError::UnsupportedVariant(format!(
            "CitationMode: {}",
            other
        ))),
    }
}

fn read_citation(value: &Value) -> Result<Citation> {
    let obj = value
        .as_object()
        .ok_or_else(|| JsonReadError::InvalidType("Expected object for Citation".to_string()))?;
    Ok(Citation {
        id: string(field(obj, "citationId")?, "citationId")?,
        prefix: read_inlines(field(obj, "citationPrefix")?)?,
        suffix: read_inlines(field(obj, "citationSuffix")?)?,
        mode: read_citation_mode(field(obj, "citationMode")?)?,
        note_num: integer(field(obj, "citationNoteNum")?, "citationNoteNum")?,
        hash: integer(field(obj, "citationHash")?, "citationHash")?,
    })
}

pub fn read_inlines(value: &Value) -> Result<Inlines> {
    array(value, "Inlines")?.iter().map(read_inline).collect()
}

pub fn read_inline(value: &Value) -> Result<Inline> {
    let (t, c) = tagged(value, "Inline")?;

    match t {
        "Str" => Ok(Inline::Str(Str {
            text: string(content(c, t)?, "Str content")?,
        })),
        "Space" => Ok(Inline::Space),
        "SoftBreak" => Ok(Inline::SoftBreak),
        "LineBreak" => Ok(Inline::LineBreak),
        "Emph" => Ok(Inline::Emph(Emph {
            content: read_inlines(content(c, t)?)?,
        })),
        "Underline" => Ok(Inline::Underline(Underline {
            content: read_inlines(content(c, t)?)?,
        })),
        "Strong" => Ok(Inline::Strong(Strong {
            content: read_inlines(content(c, t)?)?,
        })),
        "Strikeout" => Ok(Inline::Strikeout(Strikeout {
            content: read_inlines(content(c, t)?)?,
        })),
        "Superscript" => Ok(Inline::Superscript(Superscript {
            content: read_inlines(content(c, t)?)?,
        })),
        "Subscript" => Ok(Inline::Subscript(Subscript {
            content: read_inlines(content(c, t)?)?,
        })),
        "SmallCaps" => Ok(Inline::SmallCaps(SmallCaps {
            content: read_inlines(content(c, t)?)?,
        })),
        "Quoted" => {
            let arr = tuple(content(c, t)?, 2, t)?;
            let (quote_t, _) = tagged(&arr[0], "QuoteType")?;
            let quote_type = match quote_t {
                "SingleQuote" => QuoteType::SingleQuote,
                "DoubleQuote" => QuoteType::DoubleQuote,
                other => {
                    return Err(JsonReadError::UnsupportedVariant(format!(
                        "QuoteType: {}",
                        other
                    )));
                }
            };
            Ok(Inline::Quoted(Quoted {
                quote_type,
                content: read_inlines(&arr[1])?,
            }))
        }
        "Cite" => {
            let arr = tuple(content(c, t)?, 2, t)?;
            let citations = array(&arr[0], "Citations")?
                .iter()
                .map(read_citation)
                .collect::<Result<Vec<_>>>()?;
            Ok(Inline::Cite(Cite {
                citations,
                content: read_inlines(&arr[1])?,
            }))
        }
        "Code" => {
            let arr = tuple(content(c, t)?, 2, t)?;
            Ok(Inline::Code(Code {
                attr: read_attr(&arr[0])?,
                text: string(&arr[1], "Code text")?,
            }))
        }
        "Math" => {
            let arr = tuple(content(c, t)?, 2, t)?;
            let (math_t, _) = tagged(&arr[0], "MathType")?;
            let math_type = match math_t {
                "InlineMath" => MathType::InlineMath,
                "DisplayMath" => MathType::DisplayMath,
                other => {
                    return Err(JsonReadError::UnsupportedVariant(format!(
                        "MathType: {}",
                        other
                    )));
                }
            };
            Ok(Inline::Math(Math {
                math_type,
                text: string(&arr[1], "Math text")?,
            }))
        }
        "RawInline" => {
            let arr = tuple(content(c, t)?, 2, t)?;
            Ok(Inline::RawInline(RawInline {
                format: string(&arr[0], "RawInline format")?,
                text: string(&arr[1], "RawInline text")?,
            }))
        }
        "Link" => {
            let arr = tuple(content(c, t)?, 3, t)?;
            Ok(Inline::Link(Link {
                attr: read_attr(&arr[0])?,
                content: read_inlines(&arr[1])?,
                target: read_target(&arr[2])?,
            }))
        }
        "Image" => {
            let arr = tuple(content(c, t)?, 3, t)?;
            Ok(Inline::Image(Image {
                attr: read_attr(&arr[0])?,
                content: read_inlines(&arr[1])?,
                target: read_target(&arr[2])?,
            }))
        }
        "Note" => Ok(Inline::Note(Note {
            content: read_blocks(content(c, t)?)?,
        })),
        "Span" => {
            let arr = tuple(content(c, t)?, 2, t)?;
            Ok(Inline::Span(Span {
                attr: read_attr(&arr[0])?,
                content: read_inlines(&arr[1])?,
            }))
        }
        other => Err(JsonReadError::UnsupportedVariant(format!(
            "Inline: {}",
            other
        ))),
    }
}

pub fn read_blocks(value: &Value) -> Result<Blocks> {
    array(value, "Blocks")?.iter().map(read_block).collect()
}

fn read_blockss(value: &Value) -> Result<Vec<Blocks>> {
    array(value, "List items")?.iter().map(read_blocks).collect()
}

fn read_list_attributes(value: &Value) -> Result<ListAttributes> {
    let arr = tuple(value, 3, "ListAttributes")?;
    let start = integer(&arr[0], "List start")?;

    let (style_t, _) = tagged(&arr[1], "ListNumberStyle")?;
    let style = match style_t {
        "DefaultStyle" => ListNumberStyle::Default,
        "Example" => ListNumberStyle::Example,
        "Decimal" => ListNumberStyle::Decimal,
        "LowerRoman" => ListNumberStyle::LowerRoman,
        "UpperRoman" => ListNumberStyle::UpperRoman,
        "LowerAlpha" => ListNumberStyle::LowerAlpha,
        "UpperAlpha" => ListNumberStyle::UpperAlpha,
        other => {
            return Err(JsonReadError::UnsupportedVariant(format!(
                "ListNumberStyle: {}",
                other
            )));
        }
    };

    let (delim_t, _) = tagged(&arr[2], "ListNumberDelim")?;
    let delim = match delim_t {
        "DefaultDelim" => ListNumberDelim::Default,
        "Period" => ListNumberDelim::Period,
        "OneParen" => ListNumberDelim::OneParen,
        "TwoParens" => ListNumberDelim::TwoParens,
        other => {
            return Err(JsonReadError::UnsupportedVariant(format!(
                "ListNumberDelim: {}",
                other
            )));
        }
    };

    Ok((start, style, delim))
}

fn read_caption(value: &Value) -> Result<Caption> {
    let arr = tuple(value, 2, "Caption")?;
    let short = if arr[0].is_null() {
        None
    } else {
        Some(read_inlines(&arr[0])?)
    };
    Ok(Caption {
        short,
        long: Some(read_blocks(&arr[1])?),
    })
}

fn read_alignment(value: &Value) -> Result<Alignment> {
    let (t, _) = tagged(value, "Alignment")?;
    match t {
        "AlignLeft" => Ok(Alignment::Left),
        "AlignCenter" => Ok(Alignment::Center),
        "AlignRight" => Ok(Alignment::Right),
        "AlignDefault" => Ok(Alignment::Default),
        other => Err(JsonReadError::UnsupportedVariant(format!(
            "Alignment: {}",
            other
        ))),
    }
}

fn read_colwidth(value: &Value) -> Result<ColWidth> {
    let (t, c) = tagged(value, "ColWidth")?;
    match t {
        "ColWidthDefault" => Ok(ColWidth::Default),
        "ColWidth" => {
            let width = content(c, t)?.as_f64().ok_or_else(|| {
                JsonReadError::InvalidType("ColWidth must be a number".to_string())
            })?;
            Ok(ColWidth::Percentage(width))
        }
        other => Err(JsonReadError::UnsupportedVariant(format!(
            "ColWidth: {}",
            other
        ))),
    }
}

fn read_colspec(value: &Value) -> Result<ColSpec> {
    let arr = tuple(value, 2, "ColSpec")?;
    Ok((read_alignment(&arr[0])?, read_colwidth(&arr[1])?))
}

fn read_cell(value: &Value) -> Result<Cell> {
    let arr = tuple(value, 5, "Cell")?;
    Ok(Cell {
        attr: read_attr(&arr[0])?,
        alignment: read_alignment(&arr[1])?,
        row_span: integer(&arr[2], "Cell row span")?,
        col_span: integer(&arr[3], "Cell col span")?,
        content: read_blocks(&arr[4])?,
    })
}

fn read_row(value: &Value) -> Result<Row> {
    let arr = tuple(value, 2, "Row")?;
    Ok(Row {
        attr: read_attr(&arr[0])?,
        cells: array(&arr[1], "Row cells")?
            .iter()
            .map(read_cell)
            .collect::<Result<Vec<_>>>()?,
    })
}

fn read_rows(value: &Value) -> Result<Vec<Row>> {
    array(value, "Rows")?.iter().map(read_row).collect()
}

fn read_table_head(value: &Value) -> Result<TableHead> {
    let arr = tuple(value, 2, "TableHead")?;
    Ok(TableHead {
        attr: read_attr(&arr[0])?,
        rows: read_rows(&arr[1])?,
    })
}

fn read_table_body(value: &Value) -> Result<TableBody> {
    let arr = tuple(value, 4, "TableBody")?;
    Ok(TableBody {
        attr: read_attr(&arr[0])?,
        rowhead_columns: integer(&arr[1], "TableBody row head columns")?,
        head: read_rows(&arr[2])?,
        body: read_rows(&arr[3])?,
    })
}

fn read_table_foot(value: &Value) -> Result<TableFoot> {
    let arr = tuple(value, 2, "TableFoot")?;
    Ok(TableFoot {
        attr: read_attr(&arr[0])?,
        rows: read_rows(&arr[1])?,
    })
}

pub fn read_block(value: &Value) -> Result<Block> {
    let (t, c) = tagged(value, "Block")?;

    match t {
        "Plain" => Ok(Block::Plain(Plain {
            content: read_inlines(content(c, t)?)?,
        })),
        "Para" => Ok(Block::Paragraph(Paragraph {
            content: read_inlines(content(c, t)?)?,
        })),
        "LineBlock" => Ok(Block::LineBlock(LineBlock {
            content: array(content(c, t)?, "LineBlock content")?
                .iter()
                .map(read_inlines)
                .collect::<Result<Vec<_>>>()?,
        })),
        "CodeBlock" => {
            let arr = tuple(content(c, t)?, 2, t)?;
            Ok(Block::CodeBlock(CodeBlock {
                attr: read_attr(&arr[0])?,
                text: string(&arr[1], "CodeBlock text")?,
            }))
        }
        "RawBlock" => {
            let arr = tuple(content(c, t)?, 2, t)?;
            Ok(Block::RawBlock(RawBlock {
                format: string(&arr[0], "RawBlock format")?,
                text: string(&arr[1], "RawBlock text")?,
            }))
        }
        "BlockQuote" => Ok(Block::BlockQuote(BlockQuote {
            content: read_blocks(content(c, t)?)?,
        })),
        "OrderedList" => {
            let arr = tuple(content(c, t)?, 2, t)?;
            Ok(Block::OrderedList(OrderedList {
                attr: read_list_attributes(&arr[0])?,
                content: read_blockss(&arr[1])?,
            }))
        }
        "BulletList" => Ok(Block::BulletList(BulletList {
            content: read_blockss(content(c, t)?)?,
        })),
        "DefinitionList" => {
            let items = array(content(c, t)?, "DefinitionList content")?
                .iter()
                .map(|item| {
                    let pair = tuple(item, 2, "DefinitionList item")?;
                    Ok((read_inlines(&pair[0])?, read_blockss(&pair[1])?))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(Block::DefinitionList(DefinitionList { content: items }))
        }
        "Header" => {
            let arr = tuple(content(c, t)?, 3, t)?;
            let level = arr[0].as_u64().ok_or_else(|| {
                JsonReadError::InvalidType("Header level must be a positive integer".to_string())
            })? as usize;
            Ok(Block::Header(Header {
                level,
                attr: read_attr(&arr[1])?,
                content: read_inlines(&arr[2])?,
            }))
        }
        "HorizontalRule" => Ok(Block::HorizontalRule),
        "Table" => {
            let arr = tuple(content(c, t)?, 6, t)?;
            Ok(Block::Table(Table {
                attr: read_attr(&arr[0])?,
                caption: read_caption(&arr[1])?,
                colspec: array(&arr[2], "Table colspecs")?
                    .iter()
                    .map(read_colspec)
                    .collect::<Result<Vec<_>>>()?,
                head: read_table_head(&arr[3])?,
                bodies: array(&arr[4], "Table bodies")?
                    .iter()
                    .map(read_table_body)
                    .collect::<Result<Vec<_>>>()?,
                foot: read_table_foot(&arr[5])?,
            }))
        }
        "Figure" => {
            let arr = tuple(content(c, t)?, 3, t)?;
            Ok(Block::Figure(Figure {
                attr: read_attr(&arr[0])?,
                caption: read_caption(&arr[1])?,
                content: read_blocks(&arr[2])?,
            }))
        }
        "Div" => {
            let arr = tuple(content(c, t)?, 2, t)?;
            Ok(Block::Div(Div {
                attr: read_attr(&arr[0])?,
                content: read_blocks(&arr[1])?,
            }))
        }
        other => Err(JsonReadError::UnsupportedVariant(format!(
            "Block: {}",
            other
        ))),
    }
}

fn read_meta_map(obj: &Map<String, Value>) -> Result<LinkedHashMap<String, MetaValue>> {
    let mut map = LinkedHashMap::new();
    for (key, value) in obj {
        map.insert(key.clone(), read_meta_value(value)?);
    }
    Ok(map)
}

fn read_meta(value: &Value) -> Result<Meta> {
    let obj = value
        .as_object()
        .ok_or_else(|| JsonReadError::InvalidType("Meta must be object".to_string()))?;
    read_meta_map(obj)
}

pub fn read_meta_value(value: &Value) -> Result<MetaValue> {
    let (t, c) = tagged(value, "MetaValue")?;
    match t {
        "MetaString" => Ok(MetaValue::MetaString(string(
            content(c, t)?,
            "MetaString content",
        )?)),
        "MetaBool" => Ok(MetaValue::MetaBool(content(c, t)?.as_bool().ok_or_else(
            || JsonReadError::InvalidType("MetaBool content must be boolean".to_string()),
        )?)),
        "MetaInlines" => Ok(MetaValue::MetaInlines(read_inlines(content(c, t)?)?)),
        "MetaBlocks" => Ok(MetaValue::MetaBlocks(read_blocks(content(c, t)?)?)),
        "MetaList" => Ok(MetaValue::MetaList(
            array(content(c, t)?, "MetaList content")?
                .iter()
                .map(read_meta_value)
                .collect::<Result<Vec<_>>>()?,
        )),
        "MetaMap" => {
            let obj = content(c, t)?.as_object().ok_or_else(|| {
                JsonReadError::InvalidType("MetaMap content must be object".to_string())
            })?;
            Ok(MetaValue::MetaMap(read_meta_map(obj)?))
        }
        other => Err(JsonReadError::UnsupportedVariant(format!(
            "MetaValue: {}",
            other
        ))),
    }
}
