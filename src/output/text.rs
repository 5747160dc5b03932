use std::fmt::Write;

use crate::error::Result;
use crate::issue::{Issue, Severity};
use crate::report::Report;

use super::OutputFormatter;

/// Human-readable audit summary.
pub struct TextFormatter {
    max_issues_shown: Option<usize>,
}

impl TextFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_issues_shown: None,
        }
    }

    /// Cap the number of issue lines rendered. The report itself is
    /// never truncated; the summary line always reflects every issue.
    #[must_use]
    pub const fn with_max_issues(mut self, max_issues_shown: Option<usize>) -> Self {
        self.max_issues_shown = max_issues_shown;
        self
    }

    const fn severity_icon(severity: Severity) -> &'static str {
        match severity {
            Severity::Critical => "✗",
            Severity::High | Severity::Medium => "⚠",
            Severity::Low => "·",
            Severity::Info => "○",
        }
    }

    fn format_issue(issue: &Issue, output: &mut String) {
        let icon = Self::severity_icon(issue.severity);
        writeln!(
            output,
            "{icon} [{}] {}: {}",
            issue.severity.as_str().to_uppercase(),
            issue.element_path,
            issue.title
        )
        .ok();
        writeln!(output, "   {}", issue.description).ok();
        writeln!(
            output,
            "   WCAG {} | {} | fix: {}",
            issue.wcag,
            issue.principle.as_str(),
            if issue.auto_fixable { "auto" } else { "manual" }
        )
        .ok();
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "Accessibility audit (level {})", report.level).ok();
        writeln!(output, "Score: {}/100", report.score).ok();
        writeln!(output).ok();

        let shown = self
            .max_issues_shown
            .unwrap_or(report.issues.len())
            .min(report.issues.len());

        for issue in &report.issues[..shown] {
            Self::format_issue(issue, &mut output);
            writeln!(output).ok();
        }

        if shown < report.issues.len() {
            writeln!(output, "... {} more issues not shown", report.issues.len() - shown).ok();
            writeln!(output).ok();
        }

        let counts = &report.severity_counts;
        writeln!(
            output,
            "Summary: {} issues ({} critical, {} high, {} medium, {} low, {} info), {} auto-fixable",
            counts.total(),
            counts.critical,
            counts.high,
            counts.medium,
            counts.low,
            counts.info,
            report.fixable_issues()
        )
        .ok();

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
