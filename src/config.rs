//! Configuration file support
//!
//! Loads settings from ~/.json-highlight.toml (or
//! %USERPROFILE%\.json-highlight.toml on Windows), or from a path given
//! on the command line.
//!
//! Example:
//! ```toml
//! # json-highlight configuration
//! output = "page"
//!
//! [theme]
//! key = "#b22222"
//! number = "darkorange"
//! outline = "1px dashed #999"
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{HighlightError, Result};
use crate::syntax::{Color, TokenClass};
use crate::theme::Theme;

const CONFIG_FILE_NAME: &str = ".json-highlight.toml";

/// What the command line tool writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// HTML fragment
    #[default]
    Html,
    /// Standalone HTML page with the stylesheet in its head
    Page,
    /// ANSI-colored terminal text
    Ansi,
}

impl FromStr for OutputMode {
    type Err = HighlightError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "html" => Ok(OutputMode::Html),
            "page" => Ok(OutputMode::Page),
            "ansi" | "terminal" => Ok(OutputMode::Ansi),
            _ => Err(HighlightError::InvalidOutput(s.to_string())),
        }
    }
}

/// Theme overrides as written in the file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeSettings {
    pub string: Option<String>,
    pub number: Option<String>,
    pub boolean: Option<String>,
    pub null: Option<String>,
    pub key: Option<String>,
    pub outline: Option<String>,
    pub padding: Option<String>,
    pub margin: Option<String>,
}

/// Configuration settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Default output mode
    pub output: Option<String>,
    /// Theme overrides
    pub theme: ThemeSettings,
}

impl Config {
    /// Get the default config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(CONFIG_FILE_NAME))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(CONFIG_FILE_NAME))
        }
    }

    /// Load configuration from the default path
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            Some(path) => {
                log::debug!("no config file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => {
                log::debug!("no home directory, using default config");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(HighlightError::ConfigNotFound(path.to_path_buf()));
        }
        let contents = fs::read_to_string(path)?;
        let config = Self::parse(&contents)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse config file contents and check every value
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.output_mode()?;
        config.theme()?;
        Ok(config)
    }

    /// Output mode, `Html` if unset
    pub fn output_mode(&self) -> Result<OutputMode> {
        self.output
            .as_deref()
            .map_or(Ok(OutputMode::default()), OutputMode::from_str)
    }

    /// Build a theme from the defaults plus any overrides
    pub fn theme(&self) -> Result<Theme> {
        let mut theme = Theme::default();
        let settings = &self.theme;

        let colors = [
            (TokenClass::String, &settings.string),
            (TokenClass::Number, &settings.number),
            (TokenClass::Boolean, &settings.boolean),
            (TokenClass::Null, &settings.null),
            (TokenClass::Key, &settings.key),
        ];
        for (class, value) in colors {
            if let Some(value) = value {
                theme.set_color(class, value.parse::<Color>()?);
            }
        }

        if let Some(outline) = &settings.outline {
            theme.frame.outline = frame_value(outline)?;
        }
        if let Some(padding) = &settings.padding {
            theme.frame.padding = frame_value(padding)?;
        }
        if let Some(margin) = &settings.margin {
            theme.frame.margin = frame_value(margin)?;
        }

        Ok(theme)
    }
}

/// Frame values end up inside a `<style>` element, so `<` may not appear
fn frame_value(value: &str) -> Result<String> {
    if value.contains('<') {
        return Err(HighlightError::InvalidStyle(value.to_string()));
    }
    Ok(value.to_string())
}
