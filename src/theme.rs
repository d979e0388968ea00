//! Stylesheet theme and installation
//!
//! A `Theme` renders the CSS that colors highlighted output. Hosts that
//! hold stylesheets (a page head, an application theme registry) implement
//! `StyleHost`; `Theme::install` adds the sheet to a host at most once.

use crate::syntax::{Color, TokenClass};

/// Id under which the highlight stylesheet is registered
pub const STYLE_ID: &str = "json-highlight";

/// Frame drawn around `<pre>` blocks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameStyle {
    pub outline: String,
    pub padding: String,
    pub margin: String,
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            outline: "1px solid #ccc".to_string(),
            padding: "5px".to_string(),
            margin: "5px".to_string(),
        }
    }
}

/// Colors for each token class plus the `pre` frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub frame: FrameStyle,
    pub string: Color,
    pub number: Color,
    pub boolean: Color,
    pub null: Color,
    pub key: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            frame: FrameStyle::default(),
            string: TokenClass::String.default_color(),
            number: TokenClass::Number.default_color(),
            boolean: TokenClass::Boolean.default_color(),
            null: TokenClass::Null.default_color(),
            key: TokenClass::Key.default_color(),
        }
    }
}

impl Theme {
    /// Color for a token class
    pub fn color(&self, class: TokenClass) -> Color {
        match class {
            TokenClass::String => self.string,
            TokenClass::Number => self.number,
            TokenClass::Boolean => self.boolean,
            TokenClass::Null => self.null,
            TokenClass::Key => self.key,
        }
    }

    /// Set the color for a token class
    pub fn set_color(&mut self, class: TokenClass, color: Color) {
        let slot = match class {
            TokenClass::String => &mut self.string,
            TokenClass::Number => &mut self.number,
            TokenClass::Boolean => &mut self.boolean,
            TokenClass::Null => &mut self.null,
            TokenClass::Key => &mut self.key,
        };
        *slot = color;
    }

    /// Render the stylesheet text
    pub fn to_css(&self) -> String {
        let mut css = format!(
            "pre {{outline: {}; padding: {}; margin: {}; }}",
            self.frame.outline, self.frame.padding, self.frame.margin
        );
        for class in TokenClass::ALL {
            css.push_str(&format!(
                ".{} {{ color: {}; }}",
                class.css_class(),
                self.color(class)
            ));
        }
        css
    }

    /// Add this theme's stylesheet to `host` unless it is already there
    ///
    /// Returns `true` if the sheet was appended.
    pub fn install<H: StyleHost + ?Sized>(&self, host: &mut H) -> bool {
        if host.has_style(STYLE_ID) {
            log::debug!("stylesheet {} already installed, skipping", STYLE_ID);
            return false;
        }
        host.append_style(STYLE_ID, &self.to_css());
        log::debug!("installed stylesheet {}", STYLE_ID);
        true
    }
}

/// Anything that can hold named stylesheets
pub trait StyleHost {
    /// Whether a sheet with this id is present
    fn has_style(&self, id: &str) -> bool;

    /// Append a sheet
    fn append_style(&mut self, id: &str, css: &str);
}

/// In-memory stylesheet list, rendered as `<style>` elements
#[derive(Debug, Clone, Default)]
pub struct StyleSheets {
    sheets: Vec<(String, String)>,
}

impl StyleSheets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// CSS text of the sheet with this id
    pub fn get(&self, id: &str) -> Option<&str> {
        self.sheets
            .iter()
            .find(|(sheet_id, _)| sheet_id == id)
            .map(|(_, css)| css.as_str())
    }

    /// Render every sheet as a `<style>` element, one per line
    pub fn to_html(&self) -> String {
        self.sheets
            .iter()
            .map(|(id, css)| format!("<style type=\"text/css\" id=\"{}\">{}</style>", id, css))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl StyleHost for StyleSheets {
    fn has_style(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    fn append_style(&mut self, id: &str, css: &str) {
        self.sheets.push((id.to_string(), css.to_string()));
    }
}
