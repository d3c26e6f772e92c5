use tracing::info;

use em_session::{Host, HostError};

/// The terminal is the host; being ready just means saying so in the log.
pub struct TerminalHost;

impl Host for TerminalHost {
    fn ready(&self) -> Result<(), HostError> {
        info!(pid = std::process::id(), "emix ready");
        Ok(())
    }
}
