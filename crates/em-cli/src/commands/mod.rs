pub mod catalog;
pub mod check;
pub mod grid;
pub mod mix;
pub mod play;
pub mod recipes;

use std::path::Path;
use std::time::Duration;

use em_core::{Mixer, MixerConfig, Token};

/// Load the config (file or built-in), apply overrides, and validate it.
pub fn load_mixer(config: Option<&Path>, delay_ms: Option<u64>) -> Result<Mixer, String> {
    let mut cfg = match config {
        Some(path) => MixerConfig::load(path).map_err(|e| e.to_string())?,
        None => MixerConfig::default(),
    };
    if let Some(ms) = delay_ms {
        cfg = cfg.with_mix_delay(Duration::from_millis(ms));
    }
    cfg.build().map_err(|e| e.to_string())
}

/// Look up a user's pick in the catalog.
fn pick<'a>(mixer: &'a Mixer, input: &str) -> Result<&'a Token, String> {
    mixer
        .catalog()
        .resolve_choice(input)
        .ok_or_else(|| format!("'{}' is not in the catalog (see `emix catalog`)", input.trim()))
}
