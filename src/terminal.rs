//! Terminal output using crossterm
//!
//! Same tokens as the HTML renderer, but colored with ANSI escape
//! sequences and without HTML escaping.

use std::io::Write;

use crossterm::{
    queue,
    style::{Print, ResetColor, SetForegroundColor},
};

use crate::error::Result;
use crate::syntax::Tokenizer;
use crate::theme::Theme;

/// Highlight JSON text for a terminal
pub fn highlight_to_terminal(text: &str, theme: &Theme) -> Result<String> {
    let mut out = Vec::with_capacity(text.len() * 2);
    write_highlighted(&mut out, Tokenizer::shared_json(), text, theme)?;
    // Only whole `str` slices and ASCII escapes were written
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Write highlighted text to any writer
pub fn write_highlighted<W: Write>(
    out: &mut W,
    tokenizer: &Tokenizer,
    text: &str,
    theme: &Theme,
) -> Result<()> {
    let mut last = 0;
    for token in tokenizer.tokens(text) {
        queue!(
            out,
            Print(&text[last..token.start]),
            SetForegroundColor(theme.color(token.class).to_crossterm()),
            Print(token.text(text)),
            ResetColor
        )?;
        last = token.end;
    }
    queue!(out, Print(&text[last..]))?;
    out.flush()?;
    Ok(())
}
