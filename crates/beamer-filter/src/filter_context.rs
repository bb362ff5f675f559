/*
 * filter_context.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Context for a filter run: target format and diagnostics.

use crate::diagnostic::DiagnosticMessage;
use crate::errors::RewriteError;
use crate::utils::diagnostic_collector::DiagnosticCollector;

/// Context threaded through the walk so every node invocation sees the
/// target format and can record diagnostics.
pub struct FilterContext {
    /// Output format pandoc is writing (the filter's first argument)
    pub format: String,
    /// Accumulated diagnostics
    pub diagnostics: DiagnosticCollector,
}

impl FilterContext {
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            diagnostics: DiagnosticCollector::new(),
        }
    }

    pub fn is_format(&self, format: &str) -> bool {
        self.format == format
    }

    /// Record a node-level failure as a diagnostic
    pub fn record(&mut self, error: &RewriteError) {
        self.diagnostics.add(error.to_diagnostic());
    }

    pub fn diagnostics(&self) -> &[DiagnosticMessage] {
        self.diagnostics.diagnostics()
    }

    pub fn into_diagnostics(self) -> Vec<DiagnosticMessage> {
        self.diagnostics.into_diagnostics()
    }
}
