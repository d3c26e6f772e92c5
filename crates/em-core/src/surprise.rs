//! Deterministic fallback for pairs without a curated recipe.
//!
//! The pick is the sum of every code point in both tokens, modulo the pool
//! size. Addition commutes, so the pick is symmetric without normalising
//! the pair first. This only needs to feel varied; it is not a hash.

use crate::error::{MixerError, MixerResult};
use crate::token::Token;

/// Ordered, non-empty list of fallback results.
#[derive(Debug, Clone)]
pub struct SurprisePool {
    tokens: Vec<Token>,
}

impl SurprisePool {
    /// Build a pool, rejecting an empty list or blank tokens.
    pub fn new(tokens: impl IntoIterator<Item = Token>) -> MixerResult<Self> {
        let tokens: Vec<Token> = tokens.into_iter().collect();
        if tokens.is_empty() {
            return Err(MixerError::EmptySurprisePool);
        }
        if let Some(blank) = tokens.iter().find(|t| t.is_blank()) {
            return Err(MixerError::InvalidToken {
                token: blank.as_str().to_string(),
                table: "surprise pool",
            });
        }
        Ok(Self { tokens })
    }

    /// Index of the pool entry selected for `a` and `b`.
    pub fn index_for(&self, a: &Token, b: &Token) -> usize {
        let total = a.code_point_sum() + b.code_point_sum();
        (total % self.tokens.len() as u64) as usize
    }

    /// The pool entry selected for `a` and `b`.
    pub fn pick(&self, a: &Token, b: &Token) -> &Token {
        &self.tokens[self.index_for(a, b)]
    }

    /// Entry at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Returns true if `token` is one of the pool entries.
    pub fn contains(&self, token: &Token) -> bool {
        self.tokens.contains(token)
    }

    /// Number of entries; never zero.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the pool has no entries. Never true once built.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over the pool in order.
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }
}
