/*
 * latex.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! LaTeX fragment builders.

use beamer_pandoc_types::{Block, Inline};

/// Escape the characters that show up in menu paths and file names.
pub fn escape(text: &str) -> String {
    text.replace('_', "\\_").replace('&', "\\&")
}

pub fn colorbox(text: &str, color: &str) -> String {
    format!("\\colorbox{{{}}}{{{}}}", color, text)
}

pub fn textcolor(text: &str, color: &str) -> String {
    format!("\\textcolor{{{}}}{{{}}}", color, text)
}

pub fn bold_italic(text: &str) -> String {
    format!("\\textbf{{\\textit{{{}}}}}", text)
}

pub fn monospace(text: &str) -> String {
    format!("\\texttt{{{}}}", text)
}

/// Highlight that appears from the second overlay on.
pub fn answer_highlight(text: &str) -> String {
    format!(
        "\\textit<2>{{\\textbf<2>{{\\textcolor<2>{{green!65!black}}{{{}}}}}}}",
        text
    )
}

/// Text revealed from the second overlay on.
pub fn onslide(text: &str) -> String {
    format!("\\onslide<2->{{{}}}", text)
}

pub fn begin(environment: &str) -> String {
    format!("\\begin{{{}}}", environment)
}

pub fn end(environment: &str) -> String {
    format!("\\end{{{}}}", environment)
}

/// Wrap `content` between two raw blocks.
pub fn wrap_blocks(format: &str, open: String, content: &[Block], close: String) -> Vec<Block> {
    let mut blocks = Vec::with_capacity(content.len() + 2);
    blocks.push(Block::raw(format, open));
    blocks.extend(content.iter().cloned());
    blocks.push(Block::raw(format, close));
    blocks
}

pub fn raw_inline(format: &str, text: String) -> Inline {
    Inline::raw(format, text)
}
