//! Pattern rules for JSON tokenizing
//!
//! A rule pairs a token shape with a classifier that names the
//! class of each match.

use regex::Regex;

use super::tokens::{classify_keyword, classify_number, classify_quoted, TokenClass};

/// Quoted string, with an optional trailing colon for object keys
///
/// The gap before the colon also accepts U+FEFF, as browser `\s` does.
pub const QUOTED_PATTERN: &str = r#""(?:\\u[0-9a-fA-F]{4}|\\[^u]|[^\\"])*"(?:[\s\x{FEFF}]*:)?"#;

/// `true`, `false` or `null` as whole words
///
/// Word boundaries are ASCII-only: a keyword right after `é` or `日`
/// still counts as a whole word.
pub const KEYWORD_PATTERN: &str = r"(?-u:\b)(?:true|false|null)(?-u:\b)";

/// Optional minus, digits, optional fraction, optional exponent
pub const NUMBER_PATTERN: &str = r"-?[0-9]+(?:\.[0-9]*)?(?:[eE][+\-]?[0-9]+)?";

/// A single pattern rule
///
/// Matches a regex pattern and classifies each match.
/// Rules are tried in priority order (highest first).
pub struct PatternRule {
    /// Name for debugging
    pub name: String,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Priority (higher = preferred when two rules match at the same offset)
    pub priority: i32,
    /// Class for a matched substring
    pub classify: fn(&str) -> TokenClass,
}

impl PatternRule {
    /// Create a new pattern rule
    pub fn new(
        name: &str,
        pattern: &str,
        priority: i32,
        classify: fn(&str) -> TokenClass,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            name: name.to_string(),
            pattern: Regex::new(pattern)?,
            priority,
            classify,
        })
    }

    /// Find the first match in text starting at position
    ///
    /// Text before `start` still counts as context for `\b`.
    pub fn find_at(&self, text: &str, start: usize) -> Option<(usize, usize)> {
        if start > text.len() {
            return None;
        }
        self.pattern.find_at(text, start).map(|m| (m.start(), m.end()))
    }
}

impl std::fmt::Debug for PatternRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternRule")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .field("priority", &self.priority)
            .finish()
    }
}

/// The three JSON rules, highest priority first
pub fn json_rules() -> Vec<PatternRule> {
    let table: [(&str, &str, i32, fn(&str) -> TokenClass); 3] = [
        ("quoted", QUOTED_PATTERN, 100, classify_quoted),
        ("keyword", KEYWORD_PATTERN, 90, classify_keyword),
        ("number", NUMBER_PATTERN, 80, classify_number),
    ];

    table
        .into_iter()
        .filter_map(|(name, pattern, priority, classify)| {
            match PatternRule::new(name, pattern, priority, classify) {
                Ok(rule) => Some(rule),
                Err(e) => {
                    log::warn!("skipping rule {}: {}", name, e);
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(pattern: &str) -> PatternRule {
        PatternRule::new("test", pattern, 0, classify_number).unwrap()
    }

    #[test]
    fn test_json_rules_compile() {
        let rules = json_rules();
        let names: Vec<_> = rules.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["quoted", "keyword", "number"]);
    }

    #[test]
    fn test_pattern_rule_find_at() {
        let number = rule(NUMBER_PATTERN);
        assert_eq!(number.find_at("abc 123 def", 0), Some((4, 7)));
        assert_eq!(number.find_at("abc 123 def", 5), Some((5, 7)));
        assert_eq!(number.find_at("no numbers", 0), None);
        assert_eq!(number.find_at("12", 2), None);
        assert_eq!(number.find_at("12", 3), None);
    }

    #[test]
    fn test_number_shapes() {
        let number = rule(NUMBER_PATTERN);
        assert_eq!(number.find_at("-3.14e-2", 0), Some((0, 8)));
        assert_eq!(number.find_at("1.", 0), Some((0, 2)));
        assert_eq!(number.find_at("2E+10", 0), Some((0, 5)));
        // Exponent without digits is not part of the number
        assert_eq!(number.find_at("5e", 0), Some((0, 1)));
        // Leading dot is not a number start
        assert_eq!(number.find_at(".5", 0), Some((1, 2)));
    }

    #[test]
    fn test_quoted_shapes() {
        let quoted = rule(QUOTED_PATTERN);
        assert_eq!(quoted.find_at(r#""abc""#, 0), Some((0, 5)));
        assert_eq!(quoted.find_at(r#""a\"b""#, 0), Some((0, 6)));
        assert_eq!(quoted.find_at(r#""\u00e9""#, 0), Some((0, 8)));
        assert_eq!(quoted.find_at("\"k\" \n :", 0), Some((0, 7)));
        assert_eq!(quoted.find_at(r#""""#, 0), Some((0, 2)));
    }

    #[test]
    fn test_quoted_bad_unicode_escape() {
        let quoted = rule(QUOTED_PATTERN);
        // `\u` must be followed by four hex digits
        assert_eq!(quoted.find_at(r#""\uZZZZ""#, 0), None);
    }

    #[test]
    fn test_keyword_word_boundary_context() {
        let keyword = rule(KEYWORD_PATTERN);
        assert_eq!(keyword.find_at("[true]", 0), Some((1, 5)));
        assert_eq!(keyword.find_at("untrue", 2), None);
        assert_eq!(keyword.find_at("nullable", 0), None);
        assert_eq!(keyword.find_at("true_", 0), None);
    }

    #[test]
    fn test_keyword_after_non_ascii_letters() {
        let keyword = rule(KEYWORD_PATTERN);
        assert_eq!(keyword.find_at("日本true", 0), Some((6, 10)));
        assert_eq!(keyword.find_at("\u{e9}null", 0), Some((2, 6)));
    }

    #[test]
    fn test_key_colon_after_byte_order_mark() {
        let quoted = rule(QUOTED_PATTERN);
        assert_eq!(quoted.find_at("\"k\"\u{feff}: 1", 0), Some((0, 7)));
    }
}
