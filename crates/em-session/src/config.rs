//! Configuration for a mix session.

use std::time::Duration;

use em_core::Mixer;
use em_core::config::DEFAULT_MIX_DELAY_MS;

/// Configuration for a mix session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// How long a remix mixes before its result is revealed.
    pub mix_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mix_delay: Duration::from_millis(DEFAULT_MIX_DELAY_MS),
        }
    }
}

impl SessionConfig {
    /// Take settings from a built mixer.
    pub fn from_mixer(mixer: &Mixer) -> Self {
        Self {
            mix_delay: mixer.mix_delay(),
        }
    }

    /// Set the mixing delay.
    pub fn with_mix_delay(mut self, delay: Duration) -> Self {
        self.mix_delay = delay;
        self
    }
}
