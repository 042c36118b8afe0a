//! Layering of comparison options from the command line, the environment and a config file.
use crate::prompt;
use anyhow::Context;
use clap::Args;
use serde::Deserialize;
use simtext::{CompareOptions, EmptyNgramPolicy};
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::*;

/// Comparison options that may or may not have been given.  Anything left out falls through to
/// the next layer down: command line and environment first, then the config file, then the
/// defaults of this tool.
///
/// The same struct is used for the command line arguments and for the JSON config file.
#[derive(Args, Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Overrides {
    /// Length of the n-grams compared when word order is preserved
    #[arg(long, value_name = "N", env = "SIMT_NGRAM_LENGTH")]
    pub ngram_length: Option<usize>,

    /// Also compare word order, multiplying the token similarity by the n-gram similarity
    #[arg(long, value_name = "BOOL", env = "SIMT_PRESERVE_ORDER")]
    pub preserve_order: Option<bool>,

    /// Leave common English words out of the comparison
    #[arg(long, value_name = "BOOL", env = "SIMT_REMOVE_STOPWORDS")]
    pub remove_stopwords: Option<bool>,

    /// Leave punctuation marks out of the comparison
    #[arg(long, value_name = "BOOL", env = "SIMT_REMOVE_PUNCTUATION")]
    pub remove_punctuation: Option<bool>,

    /// What to do when neither text has any n-grams: propagate, zero or skip
    #[arg(long, value_name = "POLICY", env = "SIMT_EMPTY_NGRAMS")]
    pub empty_ngrams: Option<EmptyNgramPolicy>,
}

impl Overrides {
    /// Read overrides from a JSON config file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Invalid config file '{}'", path.display()))
    }

    /// Fill in whatever is missing here from `fallback`.
    pub fn or(self, fallback: Overrides) -> Self {
        Self {
            ngram_length: self.ngram_length.or(fallback.ngram_length),
            preserve_order: self.preserve_order.or(fallback.preserve_order),
            remove_stopwords: self.remove_stopwords.or(fallback.remove_stopwords),
            remove_punctuation: self.remove_punctuation.or(fallback.remove_punctuation),
            empty_ngrams: self.empty_ngrams.or(fallback.empty_ngrams),
        }
    }

    /// Ask on the terminal for each true/false option that hasn't been given yet.  Options that
    /// already have a value are left alone and not asked about.
    pub fn ask_missing(
        &mut self,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> anyhow::Result<()> {
        let questions = [
            (&mut self.preserve_order, "Consider word order? (True/False): "),
            (&mut self.remove_stopwords, "Remove stopwords? (True/False): "),
            (&mut self.remove_punctuation, "Remove punctuation? (True/False): "),
        ];

        for (option, question) in questions {
            if option.is_none() {
                *option = Some(prompt::prompt_bool(input, output, question)?);
            }
        }

        Ok(())
    }

    /// Apply these overrides on top of `options`.
    pub fn apply(self, options: CompareOptions) -> CompareOptions {
        CompareOptions {
            ngram_length: self.ngram_length.unwrap_or(options.ngram_length),
            preserve_order: self.preserve_order.unwrap_or(options.preserve_order),
            remove_stopwords: self.remove_stopwords.unwrap_or(options.remove_stopwords),
            remove_punctuation: self.remove_punctuation.unwrap_or(options.remove_punctuation),
            empty_ngrams: self.empty_ngrams.unwrap_or(options.empty_ngrams),
        }
    }
}

/// The options used when nothing else is specified.
///
/// These match the engine's defaults except that word order is ignored.
pub fn defaults() -> CompareOptions {
    CompareOptions {
        preserve_order: false,
        ..Default::default()
    }
}

/// Merge the command line over an optional config file, without filling in any defaults.
pub fn layered(cli: &Overrides, config_file: Option<&Path>) -> anyhow::Result<Overrides> {
    let file = match config_file {
        Some(path) => {
            debug!(path = %path.display(), "Loading config file");
            Overrides::load(path)?
        }
        None => Overrides::default(),
    };

    Ok(cli.clone().or(file))
}

/// Work out the effective options from the command line and an optional config file.
pub fn resolve(cli: &Overrides, config_file: Option<&Path>) -> anyhow::Result<CompareOptions> {
    Ok(layered(cli, config_file)?.apply(defaults()))
}
