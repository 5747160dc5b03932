use serde::Serialize;

use crate::taxonomy::{Property, Role};
use crate::tree::ElementId;

/// Severity of an accessibility issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Info,
}

impl Severity {
    /// Score weight subtracted per issue of this severity.
    #[must_use]
    pub const fn weight(self) -> u32 {
        match self {
            Self::Critical => 10,
            Self::High => 5,
            Self::Medium => 2,
            Self::Low => 1,
            Self::Info => 0,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Info => "info",
        }
    }
}

/// WCAG principle (POUR) an issue falls under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Principle {
    Perceivable,
    Operable,
    Understandable,
    Robust,
}

impl Principle {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Perceivable => "perceivable",
            Self::Operable => "operable",
            Self::Understandable => "understandable",
            Self::Robust => "robust",
        }
    }
}

/// What exactly is wrong. Typed so the auto-fix engine dispatches on
/// data instead of matching issue titles.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IssueKind {
    UnknownElementKind {
        kind: String,
    },
    MissingRequiredProperty {
        role: Role,
        property: Property,
    },
    UnsupportedProperty {
        role: Role,
        property: Property,
    },
    InvalidPropertyValue {
        property: Property,
    },
    MissingAccessibleName,
    UnparseableColor {
        value: String,
    },
    InsufficientContrast {
        ratio: f64,
        required: f64,
    },
    NotInTabOrder,
    InvalidLiveRegion {
        declared: Option<String>,
    },
    FontTooSmall {
        size_pt: f32,
    },
    ColorOnlyInformation,
    ExcessiveNesting {
        depth: usize,
    },
    MalformedTree,
}

impl IssueKind {
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::MissingAccessibleName | Self::MalformedTree => Severity::Critical,
            Self::MissingRequiredProperty { .. }
            | Self::InsufficientContrast { .. }
            | Self::NotInTabOrder
            | Self::ColorOnlyInformation => Severity::High,
            Self::UnsupportedProperty { .. }
            | Self::InvalidPropertyValue { .. }
            | Self::UnparseableColor { .. }
            | Self::InvalidLiveRegion { .. }
            | Self::FontTooSmall { .. } => Severity::Medium,
            Self::ExcessiveNesting { .. } => Severity::Low,
            Self::UnknownElementKind { .. } => Severity::Info,
        }
    }

    #[must_use]
    pub const fn principle(&self) -> Principle {
        match self {
            Self::MissingAccessibleName
            | Self::InsufficientContrast { .. }
            | Self::FontTooSmall { .. }
            | Self::ColorOnlyInformation => Principle::Perceivable,
            Self::NotInTabOrder => Principle::Operable,
            Self::UnknownElementKind { .. }
            | Self::MissingRequiredProperty { .. }
            | Self::UnsupportedProperty { .. }
            | Self::InvalidPropertyValue { .. }
            | Self::UnparseableColor { .. }
            | Self::InvalidLiveRegion { .. }
            | Self::ExcessiveNesting { .. }
            | Self::MalformedTree => Principle::Robust,
        }
    }

    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::UnknownElementKind { .. } => "Unrecognized widget kind",
            Self::MissingRequiredProperty { .. } => "Missing required property",
            Self::UnsupportedProperty { .. } => "Unsupported property for role",
            Self::InvalidPropertyValue { .. } => "Invalid property value",
            Self::MissingAccessibleName => "Missing accessible name",
            Self::UnparseableColor { .. } => "Unparseable color value",
            Self::InsufficientContrast { .. } => "Insufficient color contrast",
            Self::NotInTabOrder => "Interactive element not keyboard reachable",
            Self::InvalidLiveRegion { .. } => "Invalid live region politeness",
            Self::FontTooSmall { .. } => "Font size too small",
            Self::ColorOnlyInformation => "Color used as only means of information",
            Self::ExcessiveNesting { .. } => "Excessive widget nesting",
            Self::MalformedTree => "Malformed element tree",
        }
    }

    #[must_use]
    pub const fn recommendation(&self) -> &'static str {
        match self {
            Self::UnknownElementKind { .. } => {
                "Declare an explicit role so assistive technology can classify the widget"
            }
            Self::MissingRequiredProperty { .. } => "Declare the required property on the element",
            Self::UnsupportedProperty { .. } => {
                "Remove the property or declare a role that supports it"
            }
            Self::InvalidPropertyValue { .. } => "Use a value of the kind the property expects",
            Self::MissingAccessibleName => "Set aria-label or give the element visible text",
            Self::UnparseableColor { .. } => "Use a palette name or #RRGGBB hex color",
            Self::InsufficientContrast { .. } => {
                "Adjust foreground or background to meet the required contrast ratio"
            }
            Self::NotInTabOrder => "Include the element in the keyboard focus order",
            Self::InvalidLiveRegion { .. } => "Use one of: off, polite, assertive",
            Self::FontTooSmall { .. } => "Use a font size of at least 12pt",
            Self::ColorOnlyInformation => "Add a text label so color is not the only signal",
            Self::ExcessiveNesting { .. } => "Flatten the widget hierarchy",
            Self::MalformedTree => "Remove the cyclic parent/child link",
        }
    }

    /// WCAG success criterion id. Contrast distinguishes the minimum
    /// (1.4.3) from the enhanced (1.4.6) criterion by the required ratio.
    #[must_use]
    pub fn wcag(&self) -> &'static str {
        match self {
            Self::MissingAccessibleName => "1.1.1",
            Self::ColorOnlyInformation => "1.4.1",
            Self::InsufficientContrast { required, .. } => {
                if *required > 4.5 { "1.4.6" } else { "1.4.3" }
            }
            Self::FontTooSmall { .. } => "1.4.4",
            Self::NotInTabOrder => "2.1.1",
            Self::UnparseableColor { .. } | Self::ExcessiveNesting { .. } | Self::MalformedTree => {
                "4.1.1"
            }
            Self::UnknownElementKind { .. }
            | Self::MissingRequiredProperty { .. }
            | Self::UnsupportedProperty { .. }
            | Self::InvalidPropertyValue { .. }
            | Self::InvalidLiveRegion { .. } => "4.1.2",
        }
    }

    /// Whether this kind has a deterministic fix, before any per-element
    /// context (the name fix additionally needs visible text).
    #[must_use]
    pub const fn default_fixable(&self) -> bool {
        match self {
            Self::UnsupportedProperty { .. } | Self::InvalidLiveRegion { .. } => true,
            Self::MissingRequiredProperty { property, .. } => {
                matches!(property, Property::Live)
            }
            Self::FontTooSmall { .. } => true,
            _ => false,
        }
    }

    fn description(&self) -> String {
        match self {
            Self::UnknownElementKind { kind } => {
                format!("Widget kind '{kind}' has no default accessibility role")
            }
            Self::MissingRequiredProperty { role, property } => {
                format!("Role '{role}' requires {property}, which is not declared")
            }
            Self::UnsupportedProperty { role, property } => {
                format!("{property} is not supported by role '{role}'")
            }
            Self::InvalidPropertyValue { property } => {
                format!("Value of {property} does not match its expected kind")
            }
            Self::MissingAccessibleName => {
                "Interactive element exposes no accessible name".to_string()
            }
            Self::UnparseableColor { value } => {
                format!("Color '{value}' is neither a palette name nor valid hex")
            }
            Self::InsufficientContrast { ratio, required } => {
                format!("Contrast ratio {ratio:.2} is below required {required:.1}")
            }
            Self::NotInTabOrder => {
                "Enabled interactive element is absent from the tab order".to_string()
            }
            Self::InvalidLiveRegion { declared } => match declared {
                Some(value) => format!("Live region politeness '{value}' is not recognized"),
                None => "Live region declares no politeness value".to_string(),
            },
            Self::FontTooSmall { size_pt } => {
                format!("Font size {size_pt}pt is below the 12pt minimum")
            }
            Self::ColorOnlyInformation => {
                "Element relies on a color-coded background without text".to_string()
            }
            Self::ExcessiveNesting { depth } => {
                format!("Element sits {depth} levels deep in the hierarchy")
            }
            Self::MalformedTree => {
                "Subtree revisits an already-traversed element (cyclic link)".to_string()
            }
        }
    }
}

/// A single accessibility violation, bound to the element it was found
/// on. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub severity: Severity,
    pub principle: Principle,
    pub title: &'static str,
    pub description: String,
    pub element: ElementId,
    pub element_path: String,
    pub wcag: &'static str,
    pub recommendation: &'static str,
    pub auto_fixable: bool,
}

impl Issue {
    /// Build an issue from its kind; severity, principle, titles and the
    /// wcag id all derive from the kind so they cannot drift.
    #[must_use]
    pub fn new(kind: IssueKind, element: ElementId, element_path: &str) -> Self {
        let severity = kind.severity();
        let principle = kind.principle();
        let title = kind.title();
        let description = kind.description();
        let wcag = kind.wcag();
        let recommendation = kind.recommendation();
        let auto_fixable = kind.default_fixable();
        Self {
            kind,
            severity,
            principle,
            title,
            description,
            element,
            element_path: element_path.to_string(),
            wcag,
            recommendation,
            auto_fixable,
        }
    }

    /// Override fixability where it depends on element context.
    #[must_use]
    pub const fn with_auto_fixable(mut self, auto_fixable: bool) -> Self {
        self.auto_fixable = auto_fixable;
        self
    }

    /// Override the success criterion where it depends on the audited
    /// level rather than the kind alone (contrast at AAA).
    #[must_use]
    pub const fn with_wcag(mut self, wcag: &'static str) -> Self {
        self.wcag = wcag;
        self
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
