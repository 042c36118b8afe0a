//! Contiguous n-gram windows over a sequence of token ids.
use crate::{error, Result, TokenId};
use std::slice::Windows;

/// N-gram length used when the caller doesn't pick one.
pub const DEFAULT_NGRAM_LENGTH: usize = 3;

/// Iterator over the n-grams of a token id sequence, left to right.
///
/// Each n-gram borrows its window straight out of the source sequence.
#[derive(Clone, Debug)]
pub struct Ngrams<'a> {
    windows: Windows<'a, TokenId>,
}

impl<'a> Iterator for Ngrams<'a> {
    type Item = &'a [TokenId];

    fn next(&mut self) -> Option<Self::Item> {
        self.windows.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.windows.size_hint()
    }
}

impl ExactSizeIterator for Ngrams<'_> {}

/// Produce every contiguous window of `n` ids from `seq`.
///
/// A sequence of length `L` yields `max(0, L - n + 1)` n-grams, so a sequence shorter than `n`
/// simply yields nothing.  `n` must be at least 1.
pub fn ngrams(seq: &[TokenId], n: usize) -> Result<Ngrams<'_>> {
    snafu::ensure!(n > 0, error::InvalidNgramLengthSnafu { length: n });

    Ok(Ngrams {
        windows: seq.windows(n),
    })
}
