//! Token classes for JSON highlighting
//!
//! This module defines the five classes a JSON token can be given,
//! their CSS class names, and their default colors.

use super::style::Color;

/// Semantic token classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// Quoted string values
    String,
    /// Numeric literals (integers, fractions, exponents)
    Number,
    /// `true` and `false`
    Boolean,
    /// `null`
    Null,
    /// Quoted strings followed by a colon (object property names)
    Key,
}

impl TokenClass {
    /// All classes, in stylesheet order
    pub const ALL: [TokenClass; 5] = [
        TokenClass::String,
        TokenClass::Number,
        TokenClass::Boolean,
        TokenClass::Null,
        TokenClass::Key,
    ];

    /// CSS class name used on the `<span>` wrapping a token
    pub fn css_class(&self) -> &'static str {
        match self {
            TokenClass::String => "string",
            TokenClass::Number => "number",
            TokenClass::Boolean => "boolean",
            TokenClass::Null => "null",
            TokenClass::Key => "key",
        }
    }

    /// Get the default color for this class
    pub fn default_color(&self) -> Color {
        match self {
            TokenClass::String => Color::Green,
            TokenClass::Number => Color::DarkOrange,
            TokenClass::Boolean => Color::Blue,
            TokenClass::Null => Color::Magenta,
            TokenClass::Key => Color::Red,
        }
    }

    /// Parse a class from its CSS class name (for config loading)
    pub fn from_name(name: &str) -> Option<Self> {
        TokenClass::ALL
            .into_iter()
            .find(|class| class.css_class() == name)
    }
}

/// Classify a quoted-string match: a trailing colon makes it a key
pub fn classify_quoted(text: &str) -> TokenClass {
    if text.ends_with(':') {
        TokenClass::Key
    } else {
        TokenClass::String
    }
}

/// Classify a keyword match
pub fn classify_keyword(text: &str) -> TokenClass {
    if text == "null" {
        TokenClass::Null
    } else {
        TokenClass::Boolean
    }
}

/// Classify a number match
pub fn classify_number(_text: &str) -> TokenClass {
    TokenClass::Number
}
