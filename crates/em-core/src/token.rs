//! The opaque symbol type everything else is built on.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque printable symbol, in practice a single emoji.
///
/// Identity is exact string equality, so variation selectors such as the
/// U+FE0F in "☀️" are significant. Ordering is lexicographic by code point.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    /// Create a token from its textual form.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    /// The textual form of this token.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the token is empty or only whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// The numeric Unicode scalar values making up this token.
    pub fn code_points(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.chars().map(u32::from)
    }

    /// Sum of all code points in the token.
    pub fn code_point_sum(&self) -> u64 {
        self.code_points().map(u64::from).sum()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Token {
    fn from(symbol: &str) -> Self {
        Self::new(symbol)
    }
}

impl From<String> for Token {
    fn from(symbol: String) -> Self {
        Self(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_round_trips_text() {
        assert_eq!(Token::new("🔥").to_string(), "🔥");
    }

    #[test]
    fn variation_selector_is_part_of_identity() {
        let sun = Token::new("☀️");
        let bare = Token::new("☀");
        assert_ne!(sun, bare);
        assert_eq!(sun.code_points().collect::<Vec<_>>(), vec![0x2600, 0xFE0F]);
    }

    #[test]
    fn code_point_sum() {
        assert_eq!(Token::new("🔥").code_point_sum(), 0x1F525);
        assert_eq!(Token::new("☀️").code_point_sum(), 0x2600 + 0xFE0F);
    }

    #[test]
    fn blank_tokens() {
        assert!(Token::new("").is_blank());
        assert!(Token::new("  ").is_blank());
        assert!(!Token::new("🌊").is_blank());
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&Token::new("🌱")).unwrap();
        assert_eq!(json, "\"🌱\"");
        let back: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Token::new("🌱"));
    }
}
