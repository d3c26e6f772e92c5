//! Configuration for a mixer.
//!
//! A config can be built in code with the `with_*` methods or loaded from a
//! JSON file. Any field left out of the file keeps its built-in default:
//!
//! ```json
//! {
//!     "catalog": ["🔥", "🌊", "💎"],
//!     "recipes": [{ "left": "🔥", "right": "🌊", "result": "🌪️" }],
//!     "surprise_pool": ["💫", "🌀"],
//!     "mix_delay_ms": 200
//! }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{MixerError, MixerResult};
use crate::mixer::Mixer;
use crate::recipe::{Recipe, RecipeTable};
use crate::resolver::Resolver;
use crate::surprise::SurprisePool;
use crate::token::Token;

/// Selectable tokens, in display order.
pub const DEFAULT_CATALOG: &[&str] = &["🔥", "🌊", "🌱", "💎", "⚡", "🌙", "☀️", "🎵", "🍋", "🍩"];

/// Curated `(left, right, result)` triples.
pub const DEFAULT_RECIPES: &[(&str, &str, &str)] = &[
    ("🔥", "🌊", "🌪️"),
    ("🔥", "🌱", "🌶️"),
    ("🔥", "🎵", "🥁"),
    ("🌊", "🌙", "🌫️"),
    ("🌊", "🍋", "🥤"),
    ("🌱", "💎", "🧪"),
    ("🌱", "☀️", "🌻"),
    ("💎", "⚡", "🔮"),
    ("⚡", "🎵", "🎧"),
    ("🌙", "☀️", "🌈"),
    ("🎵", "🍩", "🎂"),
    ("🍋", "🍩", "🍰"),
];

/// Fallback results for uncurated pairs.
pub const DEFAULT_SURPRISE_POOL: &[&str] = &["💫", "🌀", "🧬", "🎇", "🌠", "✨"];

/// How long a remix "mixes" before the result is revealed.
pub const DEFAULT_MIX_DELAY_MS: u64 = 350;

/// Raw, unvalidated mixer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MixerConfig {
    /// Tokens the user may pick, in order.
    pub catalog: Vec<Token>,
    /// Curated recipes.
    pub recipes: Vec<Recipe>,
    /// Fallback results, in order.
    pub surprise_pool: Vec<Token>,
    /// Mixing delay in milliseconds.
    pub mix_delay_ms: u64,
}

impl Default for MixerConfig {
    fn default() -> Self {
        Self {
            catalog: DEFAULT_CATALOG.iter().map(|s| Token::new(*s)).collect(),
            recipes: DEFAULT_RECIPES
                .iter()
                .map(|(l, r, out)| Recipe::new(*l, *r, *out))
                .collect(),
            surprise_pool: DEFAULT_SURPRISE_POOL.iter().map(|s| Token::new(*s)).collect(),
            mix_delay_ms: DEFAULT_MIX_DELAY_MS,
        }
    }
}

impl MixerConfig {
    /// Parse a config from JSON text.
    pub fn from_json(text: &str) -> MixerResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: &Path) -> MixerResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| MixerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Replace the catalog.
    pub fn with_catalog(mut self, tokens: impl IntoIterator<Item = impl Into<Token>>) -> Self {
        self.catalog = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Replace all recipes.
    pub fn with_recipes(mut self, recipes: impl IntoIterator<Item = Recipe>) -> Self {
        self.recipes = recipes.into_iter().collect();
        self
    }

    /// Append one recipe.
    pub fn with_recipe(mut self, recipe: Recipe) -> Self {
        self.recipes.push(recipe);
        self
    }

    /// Replace the surprise pool.
    pub fn with_surprise_pool(
        mut self,
        tokens: impl IntoIterator<Item = impl Into<Token>>,
    ) -> Self {
        self.surprise_pool = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Set the mixing delay.
    pub fn with_mix_delay(mut self, delay: Duration) -> Self {
        self.mix_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// The mixing delay as a [`Duration`].
    pub fn mix_delay(&self) -> Duration {
        Duration::from_millis(self.mix_delay_ms)
    }

    /// Validate the tables and build the immutable engine.
    pub fn build(&self) -> MixerResult<Mixer> {
        let catalog = Catalog::new(self.catalog.iter().cloned())?;
        let recipes = RecipeTable::new(self.recipes.iter().cloned())?;
        let surprises = SurprisePool::new(self.surprise_pool.iter().cloned())?;
        let resolver = Resolver::new(recipes, surprises);
        Ok(Mixer::new(catalog, resolver, self.mix_delay()))
    }
}
