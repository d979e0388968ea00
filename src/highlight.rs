//! HTML highlighting
//!
//! Escapes the input for embedding in HTML, then wraps every recognized
//! token in `<span class="CLASS">...</span>`. Text between tokens passes
//! through unchanged. Every input is accepted; non-JSON text just ends up
//! with fewer spans.

use std::borrow::Cow;
use std::fmt::Write;

use crate::syntax::Tokenizer;

/// Escape `&`, `<` and `>` for HTML text content
///
/// Escaping is not idempotent: `&amp;` escapes again to `&amp;amp;`.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    html_escape::encode_text(text)
}

/// Highlight JSON text as an HTML fragment
pub fn highlight(json: &str) -> String {
    highlight_with(Tokenizer::shared_json(), json)
}

/// Highlight text as an HTML fragment using a custom tokenizer
pub fn highlight_with(tokenizer: &Tokenizer, json: &str) -> String {
    let escaped = escape_html(json);
    let mut html = String::with_capacity(escaped.len() * 2);
    let mut last = 0;

    for token in tokenizer.tokens(&escaped) {
        html.push_str(&escaped[last..token.start]);
        // Writing to a String cannot fail
        let _ = write!(
            html,
            "<span class=\"{}\">{}</span>",
            token.class.css_class(),
            token.text(&escaped)
        );
        last = token.end;
    }
    html.push_str(&escaped[last..]);

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_object_with_number() {
        assert_eq!(
            highlight(r#"{"a": 1}"#),
            r#"{<span class="key">"a":</span> <span class="number">1</span>}"#
        );
    }

    #[test]
    fn test_object_with_string() {
        assert_eq!(
            highlight(r#"{"b": "c"}"#),
            r#"{<span class="key">"b":</span> <span class="string">"c"</span>}"#
        );
    }

    #[test]
    fn test_keywords() {
        assert_eq!(
            highlight("[true, false, null]"),
            r#"[<span class="boolean">true</span>, <span class="boolean">false</span>, <span class="null">null</span>]"#
        );
    }

    #[test]
    fn test_keywords_after_non_ascii_text() {
        assert_eq!(
            highlight("日本true"),
            r#"日本<span class="boolean">true</span>"#
        );
        assert_eq!(highlight("ünull"), r#"ü<span class="null">null</span>"#);
        assert_eq!(highlight("xtrue"), "xtrue");
    }

    #[test]
    fn test_key_before_byte_order_mark_colon() {
        assert_eq!(
            highlight("{\"k\"\u{feff}: 1}"),
            "{<span class=\"key\">\"k\"\u{feff}:</span> <span class=\"number\">1</span>}"
        );
    }

    #[test]
    fn test_number_with_exponent() {
        assert_eq!(
            highlight("-3.14e-2"),
            r#"<span class="number">-3.14e-2</span>"#
        );
    }

    #[test]
    fn test_ampersand_in_string_and_key() {
        assert_eq!(
            highlight(r#""a&b""#),
            r#"<span class="string">"a&amp;b"</span>"#
        );
        assert_eq!(
            highlight(r#"{"a&b" : 0}"#),
            r#"{<span class="key">"a&amp;b" :</span> <span class="number">0</span>}"#
        );
    }

    #[test]
    fn test_angle_brackets_escaped() {
        assert_eq!(
            highlight(r#"["<b>"]"#),
            r#"[<span class="string">"&lt;b&gt;"</span>]"#
        );
        assert_eq!(highlight("a < b > c"), "a &lt; b &gt; c");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(highlight("hello world"), "hello world");
        assert_eq!(highlight(""), "");
    }

    #[test]
    fn test_malformed_input_degrades() {
        assert_eq!(
            highlight(r#"{"open: 1"#),
            r#"{"open: <span class="number">1</span>"#
        );
    }

    #[test]
    fn test_escaping_is_not_idempotent() {
        assert_eq!(escape_html("&<>"), "&amp;&lt;&gt;");
        assert_eq!(escape_html(&escape_html("&")), "&amp;amp;");
    }

    #[test]
    fn test_escape_leaves_quotes() {
        assert_eq!(escape_html(r#""it's""#), r#""it's""#);
    }

    fn strip_spans(html: &str) -> String {
        let tags = regex::Regex::new(r#"<span class="[a-z]+">|</span>"#).unwrap();
        tags.replace_all(html, "").into_owned()
    }

    fn unescape(text: &str) -> String {
        text.replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&amp;", "&")
    }

    proptest! {
        #[test]
        fn prop_no_raw_angle_brackets_outside_spans(input in ".*") {
            let stripped = strip_spans(&highlight(&input));
            prop_assert!(!stripped.contains('<'));
            prop_assert!(!stripped.contains('>'));
        }

        #[test]
        fn prop_text_survives_highlighting(input in r#"[\[\]{}:,"0-9a-z &<>\\.eE+-]*"#) {
            let stripped = strip_spans(&highlight(&input));
            prop_assert_eq!(unescape(&stripped), input);
        }
    }
}
