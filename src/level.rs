use serde::{Deserialize, Serialize};

use crate::error::AriaGuardError;

/// WCAG conformance tier. Selects contrast thresholds and which checks
/// are enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum ComplianceLevel {
    A,
    #[default]
    AA,
    AAA,
}

impl ComplianceLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::AA => "AA",
            Self::AAA => "AAA",
        }
    }
}

impl std::fmt::Display for ComplianceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ComplianceLevel {
    type Err = AriaGuardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(Self::A),
            "AA" => Ok(Self::AA),
            "AAA" => Ok(Self::AAA),
            _ => Err(AriaGuardError::InvalidLevel(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "level_tests.rs"]
mod tests;
