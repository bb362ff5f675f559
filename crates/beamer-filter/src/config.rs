/*
 * config.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Filter configuration and the process environment captured at start-up.
//!
//! A configuration file is YAML with kebab-case keys. Every key is optional:
//!
//! ```yaml
//! bullet-point-animation: true
//! slide-decorators: [t]
//! roles:
//!   keyword: strong
//! debug-log: /tmp/beamer-filter.log
//! ```

use crate::errors::{FilterError, Result};
use hashlink::LinkedHashMap;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::warn;

/// How a role formats its text.
///
/// `SmallCaps` and `Strong` wrap the tokenized text in an AST node and work
/// for any output format. The others build raw LaTeX from the literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoleFormat {
    SmallCaps,
    Strong,
    Menu,
    Command,
    Filename,
    Answer,
    Animate,
}

impl RoleFormat {
    /// True for roles that produce raw markup rather than an AST node.
    pub fn is_raw(self) -> bool {
        !matches!(self, RoleFormat::SmallCaps | RoleFormat::Strong)
    }
}

/// The role used for `title-ref` spans and for unknown roles.
pub const DEFAULT_ROLE: &str = "default";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct FilterConfig {
    /// Output format the slide-deck rules apply to
    pub slide_format: String,
    /// Format tag for generated raw blocks and inlines
    pub raw_format: String,
    /// Keep block quotes so bullets are revealed one at a time
    pub bullet_point_animation: bool,
    /// Classes appended to every header
    pub slide_decorators: Vec<String>,
    pub roles: LinkedHashMap<String, RoleFormat>,
    /// Box color for menu items and language variant subtitles
    pub box_color: String,
    /// Language of included source when no `:code:` option is given
    pub default_code_language: String,
    /// Append debug output to this file
    pub debug_log: Option<PathBuf>,
    /// Environment variable holding the image search path
    pub search_path_var: String,
    /// Environment variable whose presence turns on instructor mode
    pub instructor_var: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        let mut roles = LinkedHashMap::new();
        roles.insert("toolname".to_string(), RoleFormat::SmallCaps);
        roles.insert("menu".to_string(), RoleFormat::Menu);
        roles.insert("command".to_string(), RoleFormat::Command);
        roles.insert("answer".to_string(), RoleFormat::Answer);
        roles.insert("animate".to_string(), RoleFormat::Animate);
        roles.insert("filename".to_string(), RoleFormat::Filename);
        roles.insert(DEFAULT_ROLE.to_string(), RoleFormat::Strong);

        Self {
            slide_format: "beamer".to_string(),
            raw_format: "latex".to_string(),
            bullet_point_animation: false,
            slide_decorators: vec!["t".to_string(), "shrink".to_string()],
            roles,
            box_color: "adacore2".to_string(),
            default_code_language: "Ada".to_string(),
            debug_log: None,
            search_path_var: "TEXINPUTS".to_string(),
            instructor_var: "INSTRUCTOR".to_string(),
        }
    }
}

impl FilterConfig {
    pub fn from_yaml_str(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        // An empty file deserializes to null rather than an empty mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content).map_err(|source| FilterError::Config {
            origin: path.display().to_string(),
            source,
        })
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|source| FilterError::Config {
            origin: "effective configuration".to_string(),
            source,
        })
    }

    pub fn role(&self, name: &str) -> Option<RoleFormat> {
        self.roles.get(name).copied()
    }

    /// The format of the `default` role, `Strong` when the table has none.
    pub fn default_role(&self) -> RoleFormat {
        self.role(DEFAULT_ROLE).unwrap_or(RoleFormat::Strong)
    }
}

/// Environment variables the filter consults, read once when it starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    /// Instructor mode reveals answers and animated explanations
    pub instructor: bool,
    /// Directory list used to find images
    pub search_path: Option<String>,
}

impl Environment {
    pub fn capture(config: &FilterConfig) -> Self {
        Self::from_lookup(config, |name| std::env::var_os(name))
    }

    /// Build the environment from a variable lookup.
    ///
    /// Instructor mode only needs the variable to be set, even to an empty
    /// value. A search path that is not valid UTF-8 is ignored with a
    /// warning.
    pub fn from_lookup<F>(config: &FilterConfig, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let search_path = match lookup(&config.search_path_var).map(OsString::into_string) {
            Some(Ok(value)) => Some(value),
            Some(Err(value)) => {
                warn!(
                    var = %config.search_path_var,
                    value = ?value,
                    "ignoring search path that is not valid UTF-8"
                );
                None
            }
            None => None,
        };
        Self {
            instructor: lookup(&config.instructor_var).is_some(),
            search_path,
        }
    }
}
