//! Set-based Jaccard similarity.
use crate::{error, Result};
use rustc_hash::FxHashSet as HashSet;
use std::hash::Hash;

/// Jaccard similarity of the items in `a` and `b`, treated as sets: the size of their
/// intersection divided by the size of their union.
///
/// Order and duplicates in the inputs make no difference.  When both inputs are empty the ratio is
/// undefined and [`crate::SimtextError::EmptyUnion`] is returned instead.
pub fn jaccard<T, A, B>(a: A, b: B) -> Result<f64>
where
    T: Eq + Hash,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    let a: HashSet<T> = a.into_iter().collect();
    let b: HashSet<T> = b.into_iter().collect();

    let intersection = a.intersection(&b).count();
    let union = a.len() + b.len() - intersection;

    snafu::ensure!(union > 0, error::EmptyUnionSnafu);

    Ok(intersection as f64 / union as f64)
}
