use snafu::Snafu;

#[derive(Debug, Snafu, Clone, PartialEq, Eq)]
#[snafu(visibility(pub(crate)))]
pub enum SimtextError {
    /// Both sides of a Jaccard comparison were empty, so the ratio has no defined value.
    ///
    /// This is reachable from perfectly ordinary input, for example two texts made up entirely of
    /// stopwords, or texts shorter than the n-gram length.  It's up to the caller to decide what
    /// that means for them.
    #[snafu(display("Undefined similarity: both sequences are empty"))]
    EmptyUnion,

    #[snafu(display("Invalid n-gram length {length}; the length must be at least 1"))]
    InvalidNgramLength { length: usize },
}
