//! Order-independent pair keys.

use std::fmt;

use crate::token::Token;

/// Canonical identifier for an unordered pair of tokens.
///
/// The two tokens are stored in ascending order, so `PairKey::new(a, b)`
/// and `PairKey::new(b, a)` are equal, and two keys are equal exactly when
/// they were built from the same two tokens (including `a == b`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey {
    low: Token,
    high: Token,
}

impl PairKey {
    /// Build the key for `a` and `b` in either order.
    pub fn new(a: &Token, b: &Token) -> Self {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        Self {
            low: low.clone(),
            high: high.clone(),
        }
    }

    /// The lesser of the two tokens.
    pub fn low(&self) -> &Token {
        &self.low
    }

    /// The greater of the two tokens.
    pub fn high(&self) -> &Token {
        &self.high
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.low, self.high)
    }
}

/// Canonicalize an unordered pair into its lookup key.
pub fn normalize(a: &Token, b: &Token) -> PairKey {
    PairKey::new(a, b)
}
