mod checks;

use crate::config::{AuditConfig, CheckConfig};
use crate::contrast::Palette;
use crate::issue::{Issue, IssueKind};
use crate::level::ComplianceLevel;
use crate::tree::{ElementId, ElementTree};

/// Audits an element tree against the ARIA rule table and the WCAG
/// checks for a compliance level.
///
/// The validator is stateless across calls: `validate` is a pure
/// function of the tree snapshot and the configuration it was built
/// with, and its output order equals traversal order.
pub struct Validator {
    level: ComplianceLevel,
    palette: Palette,
    tab_order: Option<Vec<ElementId>>,
    checks: CheckConfig,
}

impl Validator {
    #[must_use]
    pub fn new(level: ComplianceLevel) -> Self {
        Self {
            level,
            palette: Palette::new(),
            tab_order: None,
            checks: CheckConfig::default(),
        }
    }

    #[must_use]
    pub fn from_config(config: &AuditConfig) -> Self {
        Self {
            level: config.level,
            palette: Palette::new(),
            tab_order: None,
            checks: config.checks.clone(),
        }
    }

    /// Named-color table from the theming collaborator, consulted before
    /// hex parsing.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Tab order from the focus-order collaborator. Without it the
    /// keyboard-reachability check is skipped entirely.
    #[must_use]
    pub fn with_tab_order(mut self, tab_order: Vec<ElementId>) -> Self {
        self.tab_order = Some(tab_order);
        self
    }

    #[must_use]
    pub const fn level(&self) -> ComplianceLevel {
        self.level
    }

    /// Walk the tree and collect every issue, in traversal order.
    ///
    /// Checks run independently per element; results are never merged or
    /// deduplicated, so the list is byte-for-byte reproducible for a
    /// fixed tree snapshot and configuration.
    #[must_use]
    pub fn validate(&self, tree: &ElementTree) -> Vec<Issue> {
        let ctx = checks::CheckContext {
            level: self.level,
            palette: &self.palette,
            tab_order: self.tab_order.as_deref(),
            checks: &self.checks,
        };

        let mut issues = Vec::new();
        for entry in tree.walk() {
            if entry.cycle {
                issues.push(Issue::new(IssueKind::MalformedTree, entry.id, &entry.path));
                continue;
            }
            let Some(element) = tree.get(entry.id) else {
                continue;
            };
            checks::run_all(element, &entry, &ctx, &mut issues);
        }
        issues
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
