//! Display phase of a mix session.
//!
//! The phase is never stored. It is derived from the session's slots, the
//! pending flag, and whether any result exists.

use std::fmt;

/// What the user should be shown right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MixPhase {
    /// Nothing picked, nothing mixed.
    Idle,
    /// At least one slot is still empty.
    AwaitingInput,
    /// Both slots filled; no result has been revealed yet.
    Ready,
    /// A reveal timer is outstanding.
    Mixing,
    /// A result is showing. It may belong to an earlier pair if the user
    /// changed a slot since.
    Revealed,
}

impl MixPhase {
    /// One-line headline for this phase.
    pub fn headline(self) -> &'static str {
        match self {
            Self::Idle | Self::AwaitingInput => "Pick two vibes to blend",
            Self::Mixing => "Mixing up something new",
            Self::Ready | Self::Revealed => "Tap remix to reveal",
        }
    }

    /// Returns true while a reveal is pending.
    pub fn is_mixing(self) -> bool {
        self == Self::Mixing
    }
}

impl fmt::Display for MixPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Idle => "idle",
            Self::AwaitingInput => "awaiting input",
            Self::Ready => "ready",
            Self::Mixing => "mixing",
            Self::Revealed => "revealed",
        };
        f.write_str(label)
    }
}
