//! Core types for the emoji mixer: tokens, curated recipes, and the resolver.
//!
//! Two tokens picked by the user combine into a third. A curated
//! [`RecipeTable`] answers known pairs; every other pair falls back to a
//! deterministic pick from the [`SurprisePool`]. The [`Resolver`] composes
//! both into a pure, total function over unordered pairs. Nothing in this
//! crate is stateful or async; the mixing lifecycle lives in `em-session`.

pub mod catalog;
pub mod config;
pub mod error;
pub mod mixer;
pub mod pair;
pub mod recipe;
pub mod resolver;
pub mod surprise;
pub mod token;

pub use catalog::Catalog;
pub use config::MixerConfig;
pub use error::{MixerError, MixerResult};
pub use mixer::Mixer;
pub use pair::{PairKey, normalize};
pub use recipe::{Recipe, RecipeTable};
pub use resolver::{Resolution, ResolutionSource, Resolver};
pub use surprise::SurprisePool;
pub use token::Token;
