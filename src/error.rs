//! Error types for json-highlight
//!
//! Highlighting itself never fails; these cover the edges around it
//! (reading input, loading configuration, writing terminal output).

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for json-highlight operations
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Error types
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid style value: {0}")]
    InvalidStyle(String),

    #[error("Invalid output mode: {0}")]
    InvalidOutput(String),

    #[error("{0}")]
    Message(String),
}
