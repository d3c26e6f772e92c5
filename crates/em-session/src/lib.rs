//! Mix session state machine for the emoji mixer.
//!
//! A [`MixSession`] holds the user's two picks, starts a delayed "mixing"
//! reveal when asked to remix, and applies the reveal once the delay
//! elapses. At most one reveal timer is ever outstanding: re-triggering
//! cancels the previous one, and dropping the session cancels whatever is
//! left. Everything runs on the caller's tokio runtime; no locks are
//! involved.

pub mod config;
pub mod error;
pub mod host;
pub mod phase;
pub mod session;
pub mod timer;

pub use config::SessionConfig;
pub use error::HostError;
pub use host::{Host, ReadySignal};
pub use phase::MixPhase;
pub use session::{MixSession, Reveal};
pub use timer::DelayTimer;
