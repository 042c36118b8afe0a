use std::fmt::Display;

/// A token produced by the tokenizer: one lexical unit of the input text, already case folded to
/// lowercase.
///
/// Tokens have no identity beyond their value, so a plain `String` is all that's needed.
pub type Token = String;

/// Opaque integer handle for a distinct token within one [`crate::Vocabulary`].
///
/// The only guarantee is that two equal tokens in the same vocabulary get the same id and two
/// unequal tokens get different ids.  The numeric value itself means nothing, and ids from two
/// different vocabularies are not comparable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenId(pub(crate) usize);

impl TokenId {
    /// The raw integer behind this id.  Only useful for display and debugging.
    pub fn raw(self) -> usize {
        self.0
    }
}

impl Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
