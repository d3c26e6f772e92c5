//! The ordered catalog of selectable tokens.

use std::collections::HashSet;

use crate::error::{MixerError, MixerResult};
use crate::token::Token;

/// The fixed, ordered list of tokens a user may pick from.
#[derive(Debug, Clone)]
pub struct Catalog {
    tokens: Vec<Token>,
}

impl Catalog {
    /// Build a catalog, rejecting empty lists, blank tokens, and duplicates.
    pub fn new(tokens: impl IntoIterator<Item = Token>) -> MixerResult<Self> {
        let tokens: Vec<Token> = tokens.into_iter().collect();
        if tokens.is_empty() {
            return Err(MixerError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for token in &tokens {
            if token.is_blank() {
                return Err(MixerError::InvalidToken {
                    token: token.as_str().to_string(),
                    table: "catalog",
                });
            }
            if !seen.insert(token) {
                return Err(MixerError::DuplicateToken(token.clone()));
            }
        }

        Ok(Self { tokens })
    }

    /// Returns true if `token` is selectable.
    pub fn contains(&self, token: &Token) -> bool {
        self.tokens.contains(token)
    }

    /// Resolve user input to a catalog token.
    ///
    /// An exact token match wins; otherwise the input is read as a
    /// 1-based index into the catalog.
    pub fn resolve_choice(&self, input: &str) -> Option<&Token> {
        let input = input.trim();
        if let Some(token) = self.tokens.iter().find(|t| t.as_str() == input) {
            return Some(token);
        }
        let n: usize = input.parse().ok()?;
        n.checked_sub(1).and_then(|i| self.tokens.get(i))
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the catalog has no tokens. Never true once built.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }
}
