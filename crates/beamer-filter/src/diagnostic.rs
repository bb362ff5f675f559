/*
 * diagnostic.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Core diagnostic message types.
//!
//! A node that cannot be rewritten never aborts the document. Instead the
//! failure is recorded as a [`DiagnosticMessage`] and reported once the walk
//! is over.

/// Diagnostic codes, in the form `B-<subsystem>-<number>`.
pub mod codes {
    /// A node did not have the shape its handler expects.
    pub const MALFORMED_NODE: &str = "B-1-1";
    /// A source-include file exists but could not be read.
    pub const SOURCE_READ: &str = "B-2-1";
    /// A source-include container names no existing file.
    pub const SOURCE_MISSING: &str = "B-2-2";
    /// A raw-markup role was used for a format that is not the slide format.
    pub const UNSUPPORTED_ROLE: &str = "B-3-1";
    /// A role name with no entry in the role table.
    pub const UNKNOWN_ROLE: &str = "B-3-2";
    /// An inline that cannot be flattened to plain text.
    pub const UNSUPPORTED_INLINE: &str = "B-4-1";
}

/// The kind of diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A node was left unchanged or degraded because of a problem
    Warning,
    /// A documented fallback was used
    Info,
}

/// A diagnostic message following tidyverse-style structure.
///
/// Structure:
/// 1. **Code**: error code (e.g., "B-2-1") for searchability
/// 2. **Title**: brief message
/// 3. **Kind**: Warning or Info
/// 4. **Problem**: what went wrong
/// 5. **Hints**: optional guidance for fixing (ends with ?)
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticMessage {
    pub code: Option<String>,
    pub title: String,
    pub kind: DiagnosticKind,
    pub problem: Option<String>,
    pub hints: Vec<String>,
}

impl DiagnosticMessage {
    pub fn new(kind: DiagnosticKind, title: impl Into<String>) -> Self {
        Self {
            code: None,
            title: title.into(),
            kind,
            problem: None,
            hints: Vec::new(),
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_problem(mut self, problem: impl Into<String>) -> Self {
        self.problem = Some(problem.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    /// Render this diagnostic message as text.
    ///
    /// Format:
    /// ```text
    /// Warning [B-2-1]: title
    /// Problem statement here
    /// ? Hint 1
    /// ```
    pub fn to_text(&self) -> String {
        use std::fmt::Write;

        let kind_str = match self.kind {
            DiagnosticKind::Warning => "Warning",
            DiagnosticKind::Info => "Info",
        };

        let mut result = String::new();
        match &self.code {
            Some(code) => {
                let _ = write!(result, "{} [{}]: {}", kind_str, code, self.title);
            }
            None => {
                let _ = write!(result, "{}: {}", kind_str, self.title);
            }
        }
        if let Some(problem) = &self.problem {
            let _ = write!(result, "\n{}", problem);
        }
        for hint in &self.hints {
            let _ = write!(result, "\n? {}", hint);
        }
        result
    }
}
