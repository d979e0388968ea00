//! Rule-driven tokenizer
//!
//! A `Tokenizer` holds pattern rules sorted by priority and scans text
//! left to right. At each step the leftmost match across all rules wins;
//! among matches starting at the same offset, the highest-priority rule
//! wins. Matches never overlap.

use once_cell::sync::Lazy;

use super::rules::{json_rules, PatternRule};
use super::style::Token;

static JSON_TOKENIZER: Lazy<Tokenizer> = Lazy::new(Tokenizer::json);

/// An ordered set of pattern rules
#[derive(Debug, Default)]
pub struct Tokenizer {
    /// Pattern rules, sorted by priority (highest first)
    patterns: Vec<PatternRule>,
}

impl Tokenizer {
    /// Create a new empty tokenizer
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenizer for JSON: quoted strings/keys, keywords, numbers
    pub fn json() -> Self {
        let mut tokenizer = Self::new();
        for rule in json_rules() {
            tokenizer.add_pattern(rule);
        }
        tokenizer
    }

    /// Shared JSON tokenizer, built on first use
    pub fn shared_json() -> &'static Tokenizer {
        &JSON_TOKENIZER
    }

    /// Add a pattern rule
    pub fn add_pattern(&mut self, rule: PatternRule) {
        self.patterns.push(rule);
        // Stable sort: equal priorities keep insertion order
        self.patterns.sort_by(|a, b| b.priority.cmp(&a.priority));
    }

    /// Rules in the order they are tried
    pub fn patterns(&self) -> &[PatternRule] {
        &self.patterns
    }

    /// Lazily tokenize `text`
    pub fn tokens<'t>(&'t self, text: &'t str) -> Tokens<'t> {
        Tokens {
            patterns: &self.patterns,
            text,
            pos: 0,
            next_matches: vec![None; self.patterns.len()],
        }
    }
}

/// Lazy token sequence over a text
///
/// Each rule's next match is cached and only recomputed once the scan
/// position passes its start, so a text is searched at most a few times
/// per rule rather than once per byte.
pub struct Tokens<'t> {
    patterns: &'t [PatternRule],
    text: &'t str,
    pos: usize,
    /// Per rule: `None` = not searched yet, `Some(None)` = exhausted
    next_matches: Vec<Option<Option<(usize, usize)>>>,
}

impl Tokens<'_> {
    /// Next match of rule `idx` starting at or after the scan position
    fn next_match(&mut self, idx: usize) -> Option<(usize, usize)> {
        let stale = match self.next_matches[idx] {
            None => true,
            Some(Some((start, _))) => start < self.pos,
            Some(None) => false,
        };
        if stale {
            self.next_matches[idx] = Some(self.patterns[idx].find_at(self.text, self.pos));
        }
        self.next_matches[idx].flatten()
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        while self.pos <= self.text.len() {
            let mut best: Option<(usize, usize, usize)> = None;
            for idx in 0..self.patterns.len() {
                if let Some((start, end)) = self.next_match(idx) {
                    // Strictly earlier only: ties go to the higher-priority rule
                    if best.map_or(true, |(best_start, _, _)| start < best_start) {
                        best = Some((start, end, idx));
                    }
                }
            }

            let (start, end, idx) = match best {
                Some(found) => found,
                None => {
                    self.pos = self.text.len() + 1;
                    return None;
                }
            };

            if start == end {
                // Empty matches are skipped; step past one char
                self.pos = start
                    + self.text[start..]
                        .chars()
                        .next()
                        .map_or(1, char::len_utf8);
                continue;
            }

            self.pos = end;
            let rule = &self.patterns[idx];
            let class = (rule.classify)(&self.text[start..end]);
            log::trace!("{} token {}..{} as {:?}", rule.name, start, end, class);
            return Some(Token::new(start, end, class));
        }
        None
    }
}
