use crate::contrast::MIN_FONT_PT;
use crate::issue::{Issue, IssueKind};
use crate::taxonomy::{DEFAULT_LIVE_TOKEN, LIVE_TOKENS, Property, PropertyValue};
use crate::tree::{Element, ElementTree};

/// Outcome of one auto-fix pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixSummary {
    /// Mutations actually written to the tree.
    pub applied: usize,
    /// Fixable issues that no longer matched element state (already
    /// fixed, element gone, or prerequisite missing).
    pub skipped: usize,
}

impl FixSummary {
    const fn applied(mut self) -> Self {
        self.applied += 1;
        self
    }

    const fn skipped(mut self) -> Self {
        self.skipped += 1;
        self
    }
}

/// Apply the conservative fixes for every `auto_fixable` issue, in issue
/// order, one pass.
///
/// Each strategy re-checks the element's current state before writing,
/// so a stale issue (state already corrected, possibly by an earlier fix
/// in the same batch) is skipped rather than reapplied. That makes the
/// whole pass idempotent: a second `validate` + `auto_fix` round with no
/// external mutation applies zero further fixes.
///
/// Deliberately no fixed-point iteration; whether to re-validate after
/// fixing is the caller's decision.
pub fn auto_fix(tree: &mut ElementTree, issues: &[Issue]) -> FixSummary {
    let mut summary = FixSummary::default();

    for issue in issues {
        if !issue.auto_fixable {
            continue;
        }
        let Some(element) = tree.get_mut(issue.element) else {
            summary = summary.skipped();
            continue;
        };
        summary = match &issue.kind {
            IssueKind::MissingAccessibleName => fix_missing_name(element, summary),
            IssueKind::InvalidLiveRegion { .. }
            | IssueKind::MissingRequiredProperty {
                property: Property::Live,
                ..
            } => fix_live_region(element, summary),
            IssueKind::UnsupportedProperty { property, .. } => {
                fix_unsupported_property(element, *property, summary)
            }
            IssueKind::FontTooSmall { .. } => fix_font_size(element, summary),
            // Marked fixable but no strategy exists: never apply a guess.
            _ => summary.skipped(),
        };
    }

    summary
}

/// Name synthesis: promote trimmed visible text to `aria-label`.
fn fix_missing_name(element: &mut Element, summary: FixSummary) -> FixSummary {
    if element.accessible_name().is_some() {
        return summary.skipped();
    }
    let Some(text) = element.text().map(str::trim).filter(|text| !text.is_empty()) else {
        return summary.skipped();
    };
    let label = text.to_string();
    element.set_property(Property::Label, label.as_str());
    summary.applied()
}

/// Politeness synthesis: absent or unrecognized tokens become `polite`.
fn fix_live_region(element: &mut Element, summary: FixSummary) -> FixSummary {
    let current_valid = element
        .property(Property::Live)
        .and_then(PropertyValue::as_str)
        .is_some_and(|token| LIVE_TOKENS.contains(&token));
    if current_valid {
        return summary.skipped();
    }
    element.set_property(Property::Live, DEFAULT_LIVE_TOKEN);
    summary.applied()
}

/// Destructive by design: the unsupported property is removed outright.
fn fix_unsupported_property(
    element: &mut Element,
    property: Property,
    summary: FixSummary,
) -> FixSummary {
    if element.remove_property(property).is_some() {
        summary.applied()
    } else {
        summary.skipped()
    }
}

fn fix_font_size(element: &mut Element, summary: FixSummary) -> FixSummary {
    match element.font_size() {
        Some(size) if size < MIN_FONT_PT => {
            element.set_font_size(MIN_FONT_PT);
            summary.applied()
        }
        _ => summary.skipped(),
    }
}

#[cfg(test)]
#[path = "fixer_tests.rs"]
mod tests;
