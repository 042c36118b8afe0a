//! The shared vocabulary that turns the tokens of two texts into comparable integer ids.
//!
//! A vocabulary is built fresh for every comparison and covers exactly the distinct tokens of the
//! two texts being compared.  Nothing about it is meant to outlive that comparison.
use crate::{Token, TokenId};
use rustc_hash::FxHashMap as HashMap;
use tracing::*;

/// Mapping between each distinct token and the [`TokenId`] assigned to it.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    ids: HashMap<Token, TokenId>,

    /// Reverse lookup; the token with id `n` is at index `n`
    tokens: Vec<Token>,
}

impl Vocabulary {
    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn id_of(&self, token: &str) -> Option<TokenId> {
        self.ids.get(token).copied()
    }

    pub fn token_of(&self, id: TokenId) -> Option<&str> {
        self.tokens.get(id.0).map(String::as_str)
    }

    /// All of the token/id pairs, in id order
    pub fn iter(&self) -> impl Iterator<Item = (&str, TokenId)> {
        self.tokens
            .iter()
            .enumerate()
            .map(|(index, token)| (token.as_str(), TokenId(index)))
    }

    /// Get the id for `token`, assigning the next free id if it's not in the vocabulary yet.
    fn intern(&mut self, token: &str) -> TokenId {
        if let Some(id) = self.ids.get(token) {
            return *id;
        }

        let id = TokenId(self.tokens.len());
        self.tokens.push(token.to_owned());
        self.ids.insert(token.to_owned(), id);

        id
    }

    fn intern_all(&mut self, tokens: &[Token]) -> Vec<TokenId> {
        tokens.iter().map(|token| self.intern(token)).collect()
    }
}

/// Build one vocabulary over the union of the tokens in `x` and `y`, and translate both sequences
/// into ids from it.
///
/// The returned id sequences have the same length and order as the token sequences they came
/// from.  Because the vocabulary is shared, an id appearing in both sequences stands for the same
/// token on both sides.
pub fn build_vocabulary(x: &[Token], y: &[Token]) -> (Vocabulary, Vec<TokenId>, Vec<TokenId>) {
    let mut vocab = Vocabulary {
        ids: HashMap::with_capacity_and_hasher(x.len() + y.len(), Default::default()),
        tokens: Vec::new(),
    };

    let x_ids = vocab.intern_all(x);
    let y_ids = vocab.intern_all(y);

    debug!(
        distinct = vocab.len(),
        x_tokens = x_ids.len(),
        y_tokens = y_ids.len(),
        "Built shared vocabulary"
    );

    (vocab, x_ids, y_ids)
}
