/*
 * errors.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for beamer-filter

use crate::diagnostic::{DiagnosticKind, DiagnosticMessage, codes};
use beamer_pandoc_types::JsonReadError;
use std::path::PathBuf;
use thiserror::Error;

/// A failure while rewriting a single node.
///
/// These never abort the document: the rewriter records them as
/// diagnostics and keeps the node as it was.
#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("Malformed {node} node: {reason}")]
    MalformedNode { node: &'static str, reason: String },

    #[error("Could not read source file {}: {source}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Source file `{0}` not found")]
    SourceMissing(String),

    #[error("Role `{role}` produces raw {raw_format} and cannot be used for format `{format}`")]
    UnsupportedRole {
        role: String,
        format: String,
        raw_format: String,
    },

    #[error("Unknown role `{0}`, using the default role")]
    UnknownRole(String),

    #[error("Cannot flatten {0} inline to plain text, ignoring it")]
    UnsupportedInline(&'static str),
}

impl RewriteError {
    pub fn code(&self) -> &'static str {
        match self {
            RewriteError::MalformedNode { .. } => codes::MALFORMED_NODE,
            RewriteError::SourceRead { .. } => codes::SOURCE_READ,
            RewriteError::SourceMissing(_) => codes::SOURCE_MISSING,
            RewriteError::UnsupportedRole { .. } => codes::UNSUPPORTED_ROLE,
            RewriteError::UnknownRole(_) => codes::UNKNOWN_ROLE,
            RewriteError::UnsupportedInline(_) => codes::UNSUPPORTED_INLINE,
        }
    }

    /// Documented fallbacks are informational; everything else is a warning.
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            RewriteError::UnknownRole(_) | RewriteError::UnsupportedInline(_) => {
                DiagnosticKind::Info
            }
            _ => DiagnosticKind::Warning,
        }
    }

    pub fn to_diagnostic(&self) -> DiagnosticMessage {
        let title = match self {
            RewriteError::MalformedNode { .. } => "Malformed node",
            RewriteError::SourceRead { .. } => "Source file unreadable",
            RewriteError::SourceMissing(_) => "Source file not found",
            RewriteError::UnsupportedRole { .. } => "Role not supported for this format",
            RewriteError::UnknownRole(_) => "Unknown role",
            RewriteError::UnsupportedInline(_) => "Unsupported inline",
        };
        let msg = DiagnosticMessage::new(self.kind(), title)
            .with_code(self.code())
            .with_problem(self.to_string());
        match self {
            RewriteError::SourceMissing(_) => {
                msg.with_hint("Is the path relative to the directory pandoc runs in?")
            }
            RewriteError::UnknownRole(_) => {
                msg.with_hint("Add the role to the `roles` table of the configuration?")
            }
            _ => msg,
        }
    }
}

/// Fatal errors of a filter run.
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read pandoc JSON: {0}")]
    Json(#[from] JsonReadError),

    #[error("Failed to write pandoc JSON: {0}")]
    Write(#[from] serde_json::Error),

    #[error("Invalid configuration in {origin}: {source}")]
    Config {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },
}

pub type Result<T> = std::result::Result<T, FilterError>;
