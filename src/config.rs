use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AriaGuardError, Result};
use crate::level::ComplianceLevel;

/// Audit configuration, typically loaded from a TOML file:
///
/// ```toml
/// level = "AA"
///
/// [checks]
/// contrast = true
/// focus_order = false
///
/// [reporting]
/// max_issues_shown = 50
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Compliance level to audit against.
    #[serde(default)]
    pub level: ComplianceLevel,

    #[serde(default)]
    pub checks: CheckConfig,

    #[serde(default)]
    pub reporting: ReportingConfig,
}

/// Per-check enable flags.
///
/// Only environment-dependent checks are switchable; the static ARIA
/// checks (roles, properties, names, live regions) always run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)] // independent feature flags
pub struct CheckConfig {
    /// Color contrast (WCAG 1.4.3 / 1.4.6).
    #[serde(default = "default_true")]
    pub contrast: bool,

    /// Keyboard reachability against the supplied tab order (WCAG 2.1.1).
    #[serde(default = "default_true")]
    pub focus_order: bool,

    /// Minimum font size (WCAG 1.4.4).
    #[serde(default = "default_true")]
    pub font_size: bool,

    /// Color as the only information carrier (WCAG 1.4.1).
    #[serde(default = "default_true")]
    pub color_only: bool,

    /// Hierarchy depth (WCAG 4.1.1).
    #[serde(default = "default_true")]
    pub nesting: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            contrast: true,
            focus_order: true,
            font_size: true,
            color_only: true,
            nesting: true,
        }
    }
}

/// Display options for the reporting layer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReportingConfig {
    /// Cap on issues rendered by the text formatter. The issue list
    /// itself is never truncated.
    #[serde(default)]
    pub max_issues_shown: Option<usize>,
}

impl AuditConfig {
    /// Parse a configuration from TOML text.
    ///
    /// # Errors
    /// Returns [`AriaGuardError::TomlParse`] for malformed TOML or an
    /// unknown compliance level.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a configuration from a TOML file.
    ///
    /// # Errors
    /// Returns [`AriaGuardError::ConfigRead`] when the file cannot be
    /// read, or [`AriaGuardError::TomlParse`] when it does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| AriaGuardError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
