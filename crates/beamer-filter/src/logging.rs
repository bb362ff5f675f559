/*
 * logging.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Tracing setup and diagnostic reporting.
//!
//! Standard output carries the filtered document, so logs go to standard
//! error or, when `debug-log` is configured, to that file.

use crate::diagnostic::{DiagnosticKind, DiagnosticMessage};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV_VAR: &str = "BEAMER_FILTER_LOG";

const DEFAULT_DIRECTIVE: &str = "beamer_filter=warn";
const DEBUG_LOG_DIRECTIVE: &str = "beamer_filter=debug";

/// A [`MakeWriter`] appending to a file.
///
/// The file is opened for each write and closed again straight after, so
/// no handle outlives a log line.
#[derive(Debug, Clone)]
pub struct AppendFile {
    path: PathBuf,
}

impl AppendFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Write for AppendFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for AppendFile {
    type Writer = AppendFile;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Install the global subscriber.
pub fn init(debug_log: Option<&Path>) {
    let registry = tracing_subscriber::registry();
    match debug_log {
        Some(path) => registry
            .with(env_filter(DEBUG_LOG_DIRECTIVE))
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(AppendFile::new(path)),
            )
            .init(),
        None => registry
            .with(env_filter(DEFAULT_DIRECTIVE))
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
    }
}

/// Emit collected diagnostics through tracing.
pub fn report_diagnostics(diagnostics: &[DiagnosticMessage]) {
    for diagnostic in diagnostics {
        let message = diagnostic.to_text();
        match diagnostic.kind {
            DiagnosticKind::Warning => warn!("{}", message),
            DiagnosticKind::Info => info!("{}", message),
        }
    }
}
