//! Optional filtering of punctuation and stopwords out of a token sequence.
use crate::{lexicon, Token};
use tracing::*;

/// Drop punctuation tokens and/or stopword tokens from `tokens`.
///
/// Surviving tokens keep their relative order and their duplicates.  Each filter is a test on the
/// token's value alone, so applying both in either order, or applying this function again with the
/// same flags, gives the same result.
pub fn normalize(
    mut tokens: Vec<Token>,
    remove_punctuation: bool,
    remove_stopwords: bool,
) -> Vec<Token> {
    let before = tokens.len();

    if remove_punctuation {
        tokens.retain(|token| !lexicon::is_punctuation(token));
    }

    if remove_stopwords {
        tokens.retain(|token| !lexicon::is_stopword(token));
    }

    trace!(
        before,
        after = tokens.len(),
        remove_punctuation,
        remove_stopwords,
        "Normalized tokens"
    );

    tokens
}
