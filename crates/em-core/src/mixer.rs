//! The validated, immutable engine built from a configuration.

use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use crate::catalog::Catalog;
use crate::resolver::Resolver;

/// A validated, immutable mixer: what the user may pick and how picks combine.
///
/// The resolver sits behind an [`Arc`] so delayed work can hold onto it
/// without borrowing the mixer.
#[derive(Debug, Clone)]
pub struct Mixer {
    catalog: Catalog,
    resolver: Arc<Resolver>,
    mix_delay: Duration,
}

impl Mixer {
    /// Assemble a mixer from already-validated parts.
    pub fn new(catalog: Catalog, resolver: Resolver, mix_delay: Duration) -> Self {
        for recipe in resolver.recipes().iter() {
            if !catalog.contains(&recipe.left) || !catalog.contains(&recipe.right) {
                warn!(
                    left = %recipe.left,
                    right = %recipe.right,
                    "recipe uses a token outside the catalog and can never be picked"
                );
            }
        }
        Self {
            catalog,
            resolver: Arc::new(resolver),
            mix_delay,
        }
    }

    /// The selectable tokens.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The shared resolver.
    pub fn resolver(&self) -> &Arc<Resolver> {
        &self.resolver
    }

    /// How long a remix mixes before revealing.
    pub fn mix_delay(&self) -> Duration {
        self.mix_delay
    }
}
