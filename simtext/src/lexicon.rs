//! Static word lists used to filter tokens before they're compared.
//!
//! The lists are plain constants; the hash sets used for lookups are built from them lazily, once
//! per process, and never modified after that.
use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

/// Punctuation tokens dropped when punctuation removal is enabled.
///
/// Only tokens exactly equal to one of these are removed.  Runs like `...` or `--` are single
/// tokens that don't match, and survive.
pub const PUNCTUATION: &[&str] = &[",", ".", "!", "?", "-", ":", ";"];

/// English function words and contractions dropped when stopword removal is enabled.
///
/// All entries are lowercase, matching tokens after case folding.
pub const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can't", "cannot", "could", "couldn't", "did", "didn't", "do", "does", "doesn't",
    "doing", "don't", "down", "during", "each", "few", "for", "from", "further", "had", "hadn't",
    "has", "hasn't", "have", "haven't", "having", "he", "he'd", "he'll", "he's", "her", "here",
    "here's", "hers", "herself", "him", "himself", "his", "how", "how's", "i", "i'd", "i'll", "i'm",
    "i've", "if", "in", "into", "is", "isn't", "it", "it's", "its", "itself", "let's", "me", "more",
    "most", "mustn't", "my", "myself", "no", "nor", "not", "of", "off", "on", "once", "only", "or",
    "other", "ought", "our", "ours", "ourselves", "out", "over", "own", "same", "shan't", "she",
    "she'd", "she'll", "she's", "should", "shouldn't", "so", "some", "such", "than", "that",
    "that's", "the", "their", "theirs", "them", "themselves", "then", "there", "there's", "these",
    "they", "they'd", "they'll", "they're", "they've", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "wasn't", "we", "we'd", "we'll", "we're", "we've",
    "were", "weren't", "what", "what's", "when", "when's", "where", "where's", "which", "while",
    "who", "who's", "whom", "why", "why's", "with", "won't", "would", "wouldn't", "you", "you'd",
    "you'll", "you're", "you've", "your", "yours", "yourself", "yourselves",
];

static PUNCTUATION_SET: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| PUNCTUATION.iter().copied().collect());

static STOPWORD_SET: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| STOPWORDS.iter().copied().collect());

/// Whether `token` is one of the [`PUNCTUATION`] marks.
pub fn is_punctuation(token: &str) -> bool {
    PUNCTUATION_SET.contains(token)
}

/// Whether `token` is one of the [`STOPWORDS`].  The token must already be lowercase.
pub fn is_stopword(token: &str) -> bool {
    STOPWORD_SET.contains(token)
}
