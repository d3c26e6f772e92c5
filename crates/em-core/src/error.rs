//! Error types used throughout the crate.

use std::path::PathBuf;

use crate::pair::PairKey;
use crate::token::Token;

/// Alias for `Result<T, MixerError>`.
pub type MixerResult<T> = Result<T, MixerError>;

/// Errors raised while building a mixer from its configuration.
///
/// All of these are fatal at startup. Once a [`crate::Mixer`] exists,
/// resolving a pair cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum MixerError {
    /// Two curated recipes normalise to the same unordered pair.
    #[error("duplicate recipe for {key}: \"{first}\" and \"{second}\"")]
    DuplicateRecipe {
        /// The colliding pair key.
        key: PairKey,
        /// Result of the recipe declared first.
        first: Token,
        /// Result of the recipe declared second.
        second: Token,
    },

    /// The surprise pool has no tokens to fall back on.
    #[error("surprise pool must contain at least one token")]
    EmptySurprisePool,

    /// The input catalog has no tokens to pick from.
    #[error("catalog must contain at least one token")]
    EmptyCatalog,

    /// The input catalog lists the same token more than once.
    #[error("catalog lists \"{0}\" more than once")]
    DuplicateToken(Token),

    /// A table contains an empty or whitespace-only token.
    #[error("invalid token {token:?} in {table}")]
    InvalidToken {
        /// The offending token text.
        token: String,
        /// Which table it appeared in.
        table: &'static str,
    },

    /// The configuration file could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for a mixer config.
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}
