/*
 * source_include.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Source inclusion containers.
//!
//! Pandoc does not support the reStructuredText `include` directive, so a
//! container stands in for it:
//!
//! ```rst
//! .. container:: source_include labs/answers/main.adb :start-after:--begin :end-before:--end :code:Ada
//! ```
//!
//! Options:
//!
//! - `:start-after:<text>`: echo the lines after the first line containing
//!   `<text>`.
//! - `:end-before:<text>`: stop at the first later line containing `<text>`.
//! - `:code:<language>`: language of the generated code block.

use crate::errors::RewriteError;
use crate::filter_context::FilterContext;
use beamer_pandoc_types::{Block, CodeBlock, attr_with_classes};
use hashlink::LinkedHashMap;
use std::path::Path;

/// Classes marking a source-include container. They may sit anywhere in
/// the class list and are not arguments.
pub const MARKERS: [&str; 2] = ["container", "source_include"];

pub const START_AFTER: &str = "start-after";
pub const END_BEFORE: &str = "end-before";
pub const CODE: &str = "code";

/// The arguments of one source-include container.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SourceInclude {
    /// The last argument naming an existing file
    pub filename: Option<String>,
    /// Arguments that are neither a file nor a `:keyword:value` option
    pub unresolved: Vec<String>,
    pub keywords: LinkedHashMap<String, String>,
    /// Every argument, in order
    pub arguments: Vec<String>,
}

impl SourceInclude {
    /// Parse the arguments of a container, its classes minus the markers.
    pub fn parse(arguments: &[String]) -> Self {
        let mut include = SourceInclude {
            arguments: arguments.to_vec(),
            ..Default::default()
        };
        for argument in arguments {
            if Path::new(argument).is_file() {
                include.filename = Some(argument.clone());
                continue;
            }
            let fields: Vec<&str> = argument.split(':').collect();
            if let [_, keyword, value] = fields.as_slice() {
                include
                    .keywords
                    .insert((*keyword).to_string(), (*value).to_string());
            } else {
                include.unresolved.push(argument.clone());
            }
        }
        include
    }

    pub fn language<'a>(&'a self, default: &'a str) -> &'a str {
        self.keywords.get(CODE).map_or(default, String::as_str)
    }

    pub fn start_after(&self) -> Option<&str> {
        self.keywords.get(START_AFTER).map(String::as_str)
    }

    pub fn end_before(&self) -> Option<&str> {
        self.keywords.get(END_BEFORE).map(String::as_str)
    }

    /// The name reported when no file exists: the first argument that is
    /// not an option, or all arguments joined by spaces.
    pub fn missing_name(&self) -> String {
        match self.unresolved.first() {
            Some(name) => name.clone(),
            None => self.arguments.join(" "),
        }
    }
}

/// Echo the lines of `text` selected by the start and end markers.
///
/// - With `start_after`, echoing starts after the first line containing it;
///   an empty marker never matches, so nothing is echoed.
/// - With a non-empty `end_before`, echoing stops before the first later
///   line containing it.
///
/// Lines keep their terminators.
pub fn echo_lines(text: &str, start_after: Option<&str>, end_before: Option<&str>) -> String {
    let end_before = end_before.filter(|marker| !marker.is_empty());
    let mut echo_on = start_after.is_none();
    let mut result = String::new();

    for line in text.split_inclusive('\n') {
        if !echo_on {
            if let Some(marker) = start_after {
                if !marker.is_empty() && line.contains(marker) {
                    echo_on = true;
                }
            }
        } else if end_before.is_some_and(|marker| line.contains(marker)) {
            break;
        } else {
            result.push_str(line);
        }
    }
    result
}

/// Build the code block for a source-include container.
///
/// A missing file degrades to a code block holding the file name, with a
/// warning.
pub fn include_source(
    classes: &[String],
    default_language: &str,
    ctx: &mut FilterContext,
) -> Result<Block, RewriteError> {
    let arguments: Vec<String> = classes
        .iter()
        .filter(|class| !MARKERS.contains(&class.as_str()))
        .cloned()
        .collect();
    if arguments.is_empty() {
        return Err(RewriteError::MalformedNode {
            node: "Div",
            reason: "source_include container names no file".to_string(),
        });
    }
    let include = SourceInclude::parse(&arguments);

    let text = match &include.filename {
        Some(filename) => {
            let contents =
                std::fs::read_to_string(filename).map_err(|source| RewriteError::SourceRead {
                    path: filename.into(),
                    source,
                })?;
            echo_lines(&contents, include.start_after(), include.end_before())
        }
        None => {
            let name = include.missing_name();
            ctx.record(&RewriteError::SourceMissing(name.clone()));
            name
        }
    };

    Ok(Block::CodeBlock(CodeBlock {
        attr: attr_with_classes([include.language(default_language)]),
        text,
    }))
}
