//! Error types for the session crate.

use thiserror::Error;

/// The hosting environment rejected the ready handshake.
///
/// Reported and logged, never retried.
#[derive(Debug, Error)]
#[error("host handshake failed: {0}")]
pub struct HostError(String);

impl HostError {
    /// Create an error with a descriptive message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
