//! Colors and token spans
//!
//! Colors render two ways: as CSS text for the HTML stylesheet and as
//! crossterm RGB colors for terminal output.

use std::fmt;
use std::str::FromStr;

use crate::error::HighlightError;

use super::tokens::TokenClass;

/// Display colors (CSS named colors plus arbitrary RGB)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
    Gray,
    Red,
    Green,
    Blue,
    Cyan,
    Yellow,
    Magenta,
    DarkOrange,
    /// `#rrggbb` or `#rgb`
    Rgb(u8, u8, u8),
}

impl Color {
    /// RGB components as CSS defines them
    pub fn rgb(&self) -> (u8, u8, u8) {
        match *self {
            Color::Black => (0, 0, 0),
            Color::White => (255, 255, 255),
            Color::Gray => (128, 128, 128),
            Color::Red => (255, 0, 0),
            Color::Green => (0, 128, 0),
            Color::Blue => (0, 0, 255),
            Color::Cyan => (0, 255, 255),
            Color::Yellow => (255, 255, 0),
            Color::Magenta => (255, 0, 255),
            Color::DarkOrange => (255, 140, 0),
            Color::Rgb(r, g, b) => (r, g, b),
        }
    }

    /// CSS value for this color
    pub fn to_css(&self) -> String {
        match self {
            Color::Black => "black".to_string(),
            Color::White => "white".to_string(),
            Color::Gray => "gray".to_string(),
            Color::Red => "red".to_string(),
            Color::Green => "green".to_string(),
            Color::Blue => "blue".to_string(),
            Color::Cyan => "cyan".to_string(),
            Color::Yellow => "yellow".to_string(),
            Color::Magenta => "magenta".to_string(),
            Color::DarkOrange => "darkorange".to_string(),
            Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
        }
    }

    /// Terminal color for this color
    pub fn to_crossterm(&self) -> crossterm::style::Color {
        let (r, g, b) = self.rgb();
        crossterm::style::Color::Rgb { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromStr for Color {
    type Err = HighlightError;

    /// Parse a color name or a `#rgb` / `#rrggbb` hex value
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        let color = match name.as_str() {
            "black" => Color::Black,
            "white" => Color::White,
            "gray" | "grey" => Color::Gray,
            "red" => Color::Red,
            "green" => Color::Green,
            "blue" => Color::Blue,
            "cyan" => Color::Cyan,
            "yellow" => Color::Yellow,
            "magenta" => Color::Magenta,
            "darkorange" => Color::DarkOrange,
            _ => return parse_hex(&name).ok_or_else(|| HighlightError::InvalidColor(s.to_string())),
        };
        Ok(color)
    }
}

fn parse_hex(s: &str) -> Option<Color> {
    let hex = s.strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            // #abc expands to #aabbcc
            let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|d| d * 17);
            Some(Color::Rgb(digit(0)?, digit(1)?, digit(2)?))
        }
        6 => {
            let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(Color::Rgb(pair(0)?, pair(2)?, pair(4)?))
        }
        _ => None,
    }
}

/// A classified token within a text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// Byte offset where this token starts (inclusive)
    pub start: usize,
    /// Byte offset where this token ends (exclusive)
    pub end: usize,
    /// Class assigned by the matching rule
    pub class: TokenClass,
}

impl Token {
    /// Create a new token
    pub fn new(start: usize, end: usize, class: TokenClass) -> Self {
        Self { start, end, class }
    }

    /// The token's text within `source`
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}
