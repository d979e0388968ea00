//! Tokenizing and styling module
//!
//! This module provides the pieces the renderers share:
//! - Token classes and their default colors
//! - Pattern rules for JSON token shapes
//! - A lazy, priority-ordered tokenizer

mod rules;
mod style;
mod tokenizer;
mod tokens;

pub use rules::{json_rules, PatternRule};
pub use style::{Color, Token};
pub use tokenizer::{Tokenizer, Tokens};
pub use tokens::TokenClass;
