//! Similarity scoring of free text.
//!
//! Two texts are split into lowercase tokens, optionally stripped of punctuation and stopwords,
//! and indexed with a vocabulary shared between them.  Their similarity is the Jaccard similarity
//! of their token sets, optionally multiplied by the Jaccard similarity of their n-gram sets so
//! that word order counts too.
//!
//! ```
//! use simtext::{compare_texts, CompareOptions};
//!
//! let score = compare_texts(
//!     "The quick brown fox.",
//!     "the quick brown fox",
//!     &CompareOptions::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(1.0, score);
//! ```
mod engine;
mod error;
mod jaccard;
pub mod lexicon;
mod ngram;
mod normalize;
mod token;
mod tokenize;
mod vocab;

pub use engine::*;
pub use error::*;
pub use jaccard::*;
pub use ngram::*;
pub use normalize::*;
pub use token::*;
pub use tokenize::*;
pub use vocab::*;

pub type Result<T> = std::result::Result<T, SimtextError>;
