/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * A pandoc JSON filter for beamer slide decks.
 *
 * The filter reads a pandoc document as JSON, rewrites reStructuredText
 * roles, containers and admonitions into beamer LaTeX, and writes the
 * document back as JSON.
 */

pub mod animate;
pub mod config;
pub mod containers;
pub mod diagnostic;
pub mod errors;
pub mod filter_context;
pub mod latex;
pub mod logging;
pub mod path_resolver;
pub mod rewriter;
pub mod roles;
pub mod slides;
pub mod source_include;
pub mod utils;
pub mod walk;

pub use config::{Environment, FilterConfig, RoleFormat};
pub use diagnostic::{DiagnosticKind, DiagnosticMessage};
pub use errors::{FilterError, Result, RewriteError};
pub use filter_context::FilterContext;
pub use rewriter::{BeamerRewriter, filter_document, filter_json};
pub use walk::{Rewrite, Rewriter};
