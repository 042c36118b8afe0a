//! The similarity engine, which runs two texts through the whole pipeline and combines the token
//! and n-gram similarities into one score.
use crate::{
    build_vocabulary, error, jaccard, ngrams, normalize, tokenize, Result, SimtextError, TokenId,
    Vocabulary, DEFAULT_NGRAM_LENGTH,
};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, EnumVariantNames};
use tracing::*;

/// What to do when the n-gram similarity is undefined because neither text has a single n-gram,
/// which happens whenever both texts are shorter than the n-gram length after normalization.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    PartialEq,
    EnumString,
    EnumIter,
    EnumVariantNames,
    strum::Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum EmptyNgramPolicy {
    /// Return [`SimtextError::EmptyUnion`] to the caller
    #[default]
    Propagate,

    /// Treat the n-gram similarity as 0, which makes the combined score 0
    Zero,

    /// Leave the n-gram factor out and return the token similarity alone
    Skip,
}

/// Knobs controlling how two texts are compared.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompareOptions {
    /// Length of the n-grams used to measure how much word order the texts share.  Must be at
    /// least 1.
    pub ngram_length: usize,

    /// If true, the score is the token similarity multiplied by the n-gram similarity.  If false
    /// it's the token similarity alone, and no n-grams are computed at all.
    pub preserve_order: bool,

    pub remove_stopwords: bool,

    pub remove_punctuation: bool,

    pub empty_ngrams: EmptyNgramPolicy,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            ngram_length: DEFAULT_NGRAM_LENGTH,
            preserve_order: true,
            remove_stopwords: true,
            remove_punctuation: true,
            empty_ngrams: EmptyNgramPolicy::default(),
        }
    }
}

impl CompareOptions {
    fn validate(&self) -> Result<()> {
        snafu::ensure!(
            self.ngram_length > 0,
            error::InvalidNgramLengthSnafu {
                length: self.ngram_length
            }
        );

        Ok(())
    }
}

/// Two texts after tokenization and normalization, translated into ids from one shared
/// vocabulary.
#[derive(Clone, Debug)]
pub struct PreparedTexts {
    pub vocabulary: Vocabulary,
    pub x: Vec<TokenId>,
    pub y: Vec<TokenId>,
}

/// Tokenize and normalize both texts, then index them with a shared vocabulary.
pub fn prepare_texts(x: &str, y: &str, options: &CompareOptions) -> PreparedTexts {
    let x_tokens = normalize(
        tokenize(x),
        options.remove_punctuation,
        options.remove_stopwords,
    );
    let y_tokens = normalize(
        tokenize(y),
        options.remove_punctuation,
        options.remove_stopwords,
    );

    let (vocabulary, x, y) = build_vocabulary(&x_tokens, &y_tokens);

    PreparedTexts { vocabulary, x, y }
}

/// The breakdown of a comparison.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Similarity {
    /// Jaccard similarity of the two texts' distinct tokens
    pub token: f64,

    /// Jaccard similarity of the two texts' distinct n-grams.
    ///
    /// `None` if order wasn't considered, or the n-gram factor was skipped under
    /// [`EmptyNgramPolicy::Skip`].
    pub ngram: Option<f64>,

    /// The final score, in `[0, 1]`
    pub score: f64,
}

/// Compare two texts and return their similarity score, between 0 (nothing in common) and 1 (the
/// same tokens, and if order is preserved, the same n-grams).
///
/// See [`compare_texts_detailed`] to get the individual factors as well.
pub fn compare_texts(x: &str, y: &str, options: &CompareOptions) -> Result<f64> {
    compare_texts_detailed(x, y, options).map(|similarity| similarity.score)
}

/// Compare two texts, returning the token similarity, the n-gram similarity and the combined
/// score.
///
/// The combination is a product, not an average: texts only count as similar in the
/// order-sensitive sense when they share both their vocabulary and their local word order.
///
/// Fails with [`SimtextError::InvalidNgramLength`] before doing any work if the n-gram length is
/// 0, and with [`SimtextError::EmptyUnion`] if both texts are empty after normalization.
pub fn compare_texts_detailed(x: &str, y: &str, options: &CompareOptions) -> Result<Similarity> {
    options.validate()?;

    let prepared = prepare_texts(x, y, options);

    let token = jaccard(&prepared.x, &prepared.y)?;

    if !options.preserve_order {
        debug!(token, "Order not preserved; using token similarity alone");
        return Ok(Similarity {
            token,
            ngram: None,
            score: token,
        });
    }

    let x_ngrams = ngrams(&prepared.x, options.ngram_length)?;
    let y_ngrams = ngrams(&prepared.y, options.ngram_length)?;

    let ngram = match jaccard(x_ngrams, y_ngrams) {
        Ok(ngram) => Some(ngram),
        Err(SimtextError::EmptyUnion) => {
            debug!(
                policy = %options.empty_ngrams,
                ngram_length = options.ngram_length,
                "Neither text has any n-grams"
            );
            match options.empty_ngrams {
                EmptyNgramPolicy::Propagate => return error::EmptyUnionSnafu.fail(),
                EmptyNgramPolicy::Zero => Some(0.0),
                EmptyNgramPolicy::Skip => None,
            }
        }
        Err(e) => return Err(e),
    };

    let score = token * ngram.unwrap_or(1.0);

    debug!(token, ?ngram, score, "Compared texts");

    Ok(Similarity {
        token,
        ngram,
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::init_test_logging;
    use assert_matches::assert_matches;
    use strum::IntoEnumIterator;

    fn literal() -> CompareOptions {
        CompareOptions {
            remove_stopwords: false,
            remove_punctuation: false,
            ..Default::default()
        }
    }

    #[test]
    fn identical_sentences() {
        init_test_logging();

        let similarity = compare_texts_detailed(
            "The quick brown fox.",
            "The quick brown fox.",
            &CompareOptions::default(),
        )
        .unwrap();

        assert_eq!(
            Similarity {
                token: 1.0,
                ngram: Some(1.0),
                score: 1.0
            },
            similarity
        );
    }

    #[test]
    fn case_and_punctuation_dont_matter_by_default() {
        init_test_logging();

        assert_eq!(
            1.0,
            compare_texts(
                "THE QUICK, BROWN FOX!",
                "the quick brown fox",
                &CompareOptions::default()
            )
            .unwrap()
        );
    }

    #[test]
    fn short_disjoint_texts_propagate_by_default() {
        init_test_logging();

        // After filtering both sides are two tokens long, so neither has a trigram
        assert_matches!(
            compare_texts("I love cats", "I hate dogs", &CompareOptions::default()),
            Err(SimtextError::EmptyUnion)
        );
    }

    #[test]
    fn short_disjoint_texts_with_zero_policy() {
        init_test_logging();

        let options = CompareOptions {
            empty_ngrams: EmptyNgramPolicy::Zero,
            ..Default::default()
        };

        let similarity = compare_texts_detailed("I love cats", "I hate dogs", &options).unwrap();
        assert_eq!(0.0, similarity.token);
        assert_eq!(Some(0.0), similarity.ngram);
        assert_eq!(0.0, similarity.score);
    }

    #[test]
    fn skip_policy_falls_back_to_token_similarity() {
        init_test_logging();

        let options = CompareOptions {
            empty_ngrams: EmptyNgramPolicy::Skip,
            ..Default::default()
        };

        // {love, cats} vs {love, dogs}
        let similarity = compare_texts_detailed("I love cats", "I love dogs", &options).unwrap();
        assert_eq!(None, similarity.ngram);
        assert!((similarity.score - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn without_order_ngrams_are_never_computed() {
        init_test_logging();

        let options = CompareOptions {
            preserve_order: false,
            ..Default::default()
        };

        // Under the default policy the n-gram term would fail, so success here means it was never
        // evaluated
        let similarity = compare_texts_detailed("I love cats", "I hate dogs", &options).unwrap();
        assert_eq!(
            Similarity {
                token: 0.0,
                ngram: None,
                score: 0.0
            },
            similarity
        );
    }

    #[test]
    fn order_sensitivity() {
        init_test_logging();

        let options = CompareOptions {
            ngram_length: 2,
            ..literal()
        };

        let similarity = compare_texts_detailed("a b c d", "b c d a", &options).unwrap();

        // Same four tokens; bigrams {ab, bc, cd} vs {bc, cd, da} share 2 of 4
        assert_eq!(1.0, similarity.token);
        assert_eq!(Some(0.5), similarity.ngram);
        assert_eq!(0.5, similarity.score);
        assert!(similarity.score < similarity.token);

        let unordered = CompareOptions {
            preserve_order: false,
            ..options
        };
        assert_eq!(1.0, compare_texts("a b c d", "b c d a", &unordered).unwrap());
    }

    #[test]
    fn everything_filtered_out_is_an_error() {
        init_test_logging();

        for preserve_order in [true, false] {
            let options = CompareOptions {
                preserve_order,
                ..Default::default()
            };

            assert_matches!(
                compare_texts("It is what it is.", "Was it?", &options),
                Err(SimtextError::EmptyUnion)
            );
        }
    }

    #[test]
    fn zero_ngram_length_is_rejected_up_front() {
        init_test_logging();

        for preserve_order in [true, false] {
            let options = CompareOptions {
                ngram_length: 0,
                preserve_order,
                ..Default::default()
            };

            assert_matches!(
                compare_texts("a b c", "a b c", &options),
                Err(SimtextError::InvalidNgramLength { length: 0 })
            );
        }
    }

    #[test]
    fn prepared_texts_share_ids() {
        let prepared = prepare_texts("Brown fox, red fox", "red dog", &CompareOptions::default());

        let fox = prepared.vocabulary.id_of("fox").unwrap();
        let red = prepared.vocabulary.id_of("red").unwrap();

        assert_eq!(4, prepared.vocabulary.len());
        assert_eq!(4, prepared.x.len());
        assert_eq!(fox, prepared.x[1]);
        assert_eq!(fox, prepared.x[3]);
        assert_eq!(red, prepared.y[0]);
    }

    #[test]
    fn policy_names() {
        let names: Vec<String> = EmptyNgramPolicy::iter().map(|p| p.to_string()).collect();
        assert_eq!(vec!["propagate", "zero", "skip"], names);

        for policy in EmptyNgramPolicy::iter() {
            assert_eq!(policy, policy.to_string().parse::<EmptyNgramPolicy>().unwrap());
        }
    }

    #[test]
    fn options_from_partial_json() {
        let options: CompareOptions =
            serde_json::from_str(r#"{ "ngram_length": 2, "empty_ngrams": "skip" }"#).unwrap();

        assert_eq!(
            CompareOptions {
                ngram_length: 2,
                empty_ngrams: EmptyNgramPolicy::Skip,
                ..Default::default()
            },
            options
        );

        assert!(serde_json::from_str::<CompareOptions>(r#"{ "ngram": 2 }"#).is_err());
    }
}
