//! json-highlight - color-annotated rendering of JSON text
//!
//! `highlight` turns JSON text into an HTML fragment where strings, keys,
//! numbers, booleans and nulls are wrapped in `<span class="...">` elements.
//! The input is never parsed or validated; anything that is not a
//! recognizable token passes through (HTML-escaped) unchanged.
//!
//! ```
//! use json_highlight::highlight;
//!
//! assert_eq!(
//!     highlight(r#"{"a": 1}"#),
//!     r#"{<span class="key">"a":</span> <span class="number">1</span>}"#
//! );
//! ```
//!
//! Colors come from a `Theme`, whose stylesheet a host installs once with
//! `Theme::install`.

pub mod config;
pub mod error;
pub mod highlight;
pub mod page;
pub mod syntax;
pub mod terminal;
pub mod theme;

pub use error::{HighlightError, Result};
pub use highlight::{escape_html, highlight, highlight_with};
pub use syntax::{Color, Token, TokenClass, Tokenizer};
pub use theme::{StyleHost, StyleSheets, Theme};
