mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::error::Result;
use crate::report::Report;

/// Trait for rendering an audit report into various output formats.
pub trait OutputFormatter {
    /// Render the report into a string.
    ///
    /// # Errors
    /// Returns an error if the rendering fails.
    fn format(&self, report: &Report) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
