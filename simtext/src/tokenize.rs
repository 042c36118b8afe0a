//! Splitting raw text into lowercase tokens.
use crate::Token;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::*;

/// The lexical pattern that defines a token, tried in priority order:
///
/// 1. A word, possibly with internal hyphens or apostrophes (`don't`, `well-known`)
/// 2. A lone apostrophe
/// 3. A run of `-`, `.` or `(` characters
/// 4. Any other non-whitespace character, plus any word characters that follow it
const TOKEN_PATTERN: &str = r"\w+(?:[-']\w+)*|'|[-.(]+|\S\w*";

static TOKEN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(TOKEN_PATTERN).expect("BUG: invalid token regex"));

/// Iterator over the raw substrings of some text that match the token pattern, in the order they
/// appear.  No case folding is applied.
///
/// Whitespace between matches is skipped.
pub struct Words<'a> {
    text: &'a str,

    /// The offset into `text` where the next search should start
    pos: usize,
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        TOKEN_REGEX.find_at(self.text, self.pos).map(|m| {
            self.pos = m.end();

            m.as_str()
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every token consumes at least one byte
        (0, Some(self.text.len() - self.pos))
    }
}

/// Find the raw words in `text`, without lowercasing them.
pub fn words(text: &str) -> Words<'_> {
    Words { text, pos: 0 }
}

/// Split `text` into a sequence of lowercase tokens.
pub fn tokenize(text: &str) -> Vec<Token> {
    let tokens: Vec<Token> = words(text).map(str::to_lowercase).collect();

    trace!(chars = text.len(), tokens = tokens.len(), "Tokenized text");

    tokens
}
