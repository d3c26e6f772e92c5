//! One-shot "ready" handshake with the hosting environment.
//!
//! The shell around a session tells its host it is ready exactly once at
//! startup. The outcome is logged and otherwise ignored: failures are not
//! retried and nothing waits on the host.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{info, warn};

use crate::error::HostError;

/// The environment hosting the mixer.
pub trait Host {
    /// Tell the host the app is ready. Must not block.
    fn ready(&self) -> Result<(), HostError>;
}

/// Guard that lets the ready handshake go out at most once.
#[derive(Debug, Default)]
pub struct ReadySignal {
    sent: AtomicBool,
}

impl ReadySignal {
    /// Create a guard that has not signalled yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal `host` if this guard has not done so before.
    ///
    /// Returns true if this call performed the handshake, whether or not
    /// the host accepted it.
    pub fn signal(&self, host: &dyn Host) -> bool {
        if self.sent.swap(true, Ordering::AcqRel) {
            return false;
        }
        match host.ready() {
            Ok(()) => info!("host ready signal sent"),
            Err(e) => warn!(error = %e, "host ready signal failed"),
        }
        true
    }

    /// Returns true once the handshake has been attempted.
    pub fn is_sent(&self) -> bool {
        self.sent.load(Ordering::Acquire)
    }
}
