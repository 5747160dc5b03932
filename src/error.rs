use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AriaGuardError {
    #[error("Invalid compliance level: {0} (expected A, AA or AAA)")]
    InvalidLevel(String),

    #[error("Invalid color value: {value}")]
    InvalidColor { value: String },

    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AriaGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
