use serde::Serialize;

use crate::issue::{Issue, Principle, Severity};
use crate::level::ComplianceLevel;

/// Issue tallies by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SeverityCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub info: usize,
}

impl SeverityCounts {
    fn tally(issues: &[Issue]) -> Self {
        issues.iter().fold(Self::default(), |mut counts, issue| {
            match issue.severity {
                Severity::Critical => counts.critical += 1,
                Severity::High => counts.high += 1,
                Severity::Medium => counts.medium += 1,
                Severity::Low => counts.low += 1,
                Severity::Info => counts.info += 1,
            }
            counts
        })
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low + self.info
    }
}

/// Issue tallies by WCAG principle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PrincipleCounts {
    pub perceivable: usize,
    pub operable: usize,
    pub understandable: usize,
    pub robust: usize,
}

impl PrincipleCounts {
    fn tally(issues: &[Issue]) -> Self {
        issues.iter().fold(Self::default(), |mut counts, issue| {
            match issue.principle {
                Principle::Perceivable => counts.perceivable += 1,
                Principle::Operable => counts.operable += 1,
                Principle::Understandable => counts.understandable += 1,
                Principle::Robust => counts.robust += 1,
            }
            counts
        })
    }
}

/// Aggregated audit outcome: the ordered issue list plus a compliance
/// score and tallies. A pure reduction of the issues; building it twice
/// from the same list yields identical output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub level: ComplianceLevel,
    /// 0-100; 100 means no issues. Monotonic: more or worse issues
    /// never raise the score.
    pub score: u8,
    pub severity_counts: SeverityCounts,
    pub principle_counts: PrincipleCounts,
    pub issues: Vec<Issue>,
}

impl Report {
    #[must_use]
    pub fn from_issues(level: ComplianceLevel, issues: Vec<Issue>) -> Self {
        let severity_counts = SeverityCounts::tally(&issues);
        let principle_counts = PrincipleCounts::tally(&issues);
        let score = score(&issues);
        Self {
            level,
            score,
            severity_counts,
            principle_counts,
            issues,
        }
    }

    #[must_use]
    pub fn total_issues(&self) -> usize {
        self.issues.len()
    }

    /// How many of the issues the auto-fix engine could attempt.
    #[must_use]
    pub fn fixable_issues(&self) -> usize {
        self.issues.iter().filter(|issue| issue.auto_fixable).count()
    }
}

/// Score = 100 minus a fixed weight per issue, clamped to [0, 100].
fn score(issues: &[Issue]) -> u8 {
    let penalty: u32 = issues.iter().map(|issue| issue.severity.weight()).sum();
    u8::try_from(100_u32.saturating_sub(penalty)).expect("clamped to 0-100")
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
