//! The combination resolver.
//!
//! Resolution is an ordered two-step chain: the curated recipe table is
//! consulted with the normalised pair key, and only on a miss does the
//! surprise pool pick a fallback.

use tracing::warn;

use crate::pair::PairKey;
use crate::recipe::RecipeTable;
use crate::surprise::SurprisePool;
use crate::token::Token;

/// Which tier produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    /// A curated recipe matched the pair.
    Recipe,
    /// No recipe matched; the surprise pool entry at `index` was used.
    Surprise {
        /// Position in the surprise pool.
        index: usize,
    },
}

impl ResolutionSource {
    /// Short label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Recipe => "recipe",
            Self::Surprise { .. } => "surprise",
        }
    }
}

/// A resolved combination and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The combined token.
    pub result: Token,
    /// Which tier produced it.
    pub source: ResolutionSource,
}

/// Pure function from an unordered pair of tokens to their combination.
#[derive(Debug, Clone)]
pub struct Resolver {
    recipes: RecipeTable,
    surprises: SurprisePool,
}

impl Resolver {
    /// Compose a recipe table and a surprise pool.
    pub fn new(recipes: RecipeTable, surprises: SurprisePool) -> Self {
        for recipe in recipes.iter() {
            if surprises.contains(&recipe.result) {
                warn!(
                    result = %recipe.result,
                    "curated result also appears in the surprise pool"
                );
            }
        }
        Self { recipes, surprises }
    }

    /// Combine `a` and `b`.
    pub fn resolve(&self, a: &Token, b: &Token) -> Token {
        self.resolve_detailed(a, b).result
    }

    /// Combine `a` and `b`, reporting which tier answered.
    pub fn resolve_detailed(&self, a: &Token, b: &Token) -> Resolution {
        let key = PairKey::new(a, b);
        if let Some(result) = self.recipes.lookup(&key) {
            return Resolution {
                result: result.clone(),
                source: ResolutionSource::Recipe,
            };
        }

        let index = self.surprises.index_for(a, b);
        Resolution {
            result: self.surprises.pick(a, b).clone(),
            source: ResolutionSource::Surprise { index },
        }
    }

    /// The curated recipe table.
    pub fn recipes(&self) -> &RecipeTable {
        &self.recipes
    }

    /// The fallback pool.
    pub fn surprises(&self) -> &SurprisePool {
        &self.surprises
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MixerConfig;
    use crate::recipe::Recipe;
    use proptest::prelude::*;

    fn t(s: &str) -> Token {
        Token::new(s)
    }

    fn default_resolver() -> Resolver {
        let mixer = MixerConfig::default().build().unwrap();
        mixer.resolver().as_ref().clone()
    }

    fn catalog_tokens() -> Vec<Token> {
        MixerConfig::default().catalog
    }

    #[test]
    fn two_token_example() {
        let resolver = Resolver::new(
            RecipeTable::new([Recipe::new("🔥", "🌊", "🌪️")]).unwrap(),
            SurprisePool::new([t("💫"), t("🌀")]).unwrap(),
        );
        assert_eq!(resolver.resolve(&t("🔥"), &t("🌊")), t("🌪️"));
        assert_eq!(resolver.resolve(&t("🌊"), &t("🔥")), t("🌪️"));
    }

    #[test]
    fn fallback_example() {
        let resolver = Resolver::new(
            RecipeTable::new([Recipe::new("🔥", "🌊", "🌪️")]).unwrap(),
            SurprisePool::new([t("💫"), t("🌀")]).unwrap(),
        );
        let first = resolver.resolve_detailed(&t("🔥"), &t("💎"));
        assert_eq!(first.result, t("🌀"));
        assert_eq!(first.source, ResolutionSource::Surprise { index: 1 });
        for _ in 0..5 {
            assert_eq!(resolver.resolve_detailed(&t("🔥"), &t("💎")), first);
        }
    }

    #[test]
    fn curated_results_take_precedence() {
        let resolver = default_resolver();
        for recipe in resolver.recipes().iter() {
            let forward = resolver.resolve_detailed(&recipe.left, &recipe.right);
            assert_eq!(forward.result, recipe.result);
            assert_eq!(forward.source, ResolutionSource::Recipe);
            let backward = resolver.resolve_detailed(&recipe.right, &recipe.left);
            assert_eq!(backward, forward);
        }
    }

    #[test]
    fn recipe_shadows_pool_member() {
        // Curated result is also in the pool; the recipe still wins.
        let resolver = Resolver::new(
            RecipeTable::new([Recipe::new("🔥", "💎", "💫")]).unwrap(),
            SurprisePool::new([t("💫"), t("🌀")]).unwrap(),
        );
        let res = resolver.resolve_detailed(&t("💎"), &t("🔥"));
        assert_eq!(res.source, ResolutionSource::Recipe);
        assert_eq!(res.result, t("💫"));
    }

    #[test]
    fn known_defaults() {
        let resolver = default_resolver();
        assert_eq!(resolver.resolve(&t("🌙"), &t("☀️")), t("🌈"));
        assert_eq!(resolver.resolve(&t("🍩"), &t("🍋")), t("🍰"));
        assert_eq!(resolver.resolve(&t("🌊"), &t("⚡")), t("🎇"));
        assert_eq!(resolver.resolve(&t("☀️"), &t("🍩")), t("🧬"));
        assert_eq!(resolver.resolve(&t("🌱"), &t("🌙")), t("🌠"));
    }

    #[test]
    fn every_catalog_pair_is_symmetric_and_total() {
        let resolver = default_resolver();
        let tokens = catalog_tokens();
        for a in &tokens {
            for b in &tokens {
                let ab = resolver.resolve_detailed(a, b);
                assert_eq!(ab, resolver.resolve_detailed(b, a), "{a} + {b}");
                match ab.source {
                    ResolutionSource::Recipe => {
                        assert_eq!(resolver.recipes().get(a, b), Some(&ab.result));
                    }
                    ResolutionSource::Surprise { index } => {
                        assert!(!resolver.recipes().contains(a, b));
                        assert_eq!(resolver.surprises().get(index), Some(&ab.result));
                    }
                }
            }
        }
    }

    #[test]
    fn source_labels() {
        assert_eq!(ResolutionSource::Recipe.label(), "recipe");
        assert_eq!(ResolutionSource::Surprise { index: 3 }.label(), "surprise");
    }

    proptest! {
        #[test]
        fn symmetric_for_arbitrary_tokens(a in "\\PC{1,4}", b in "\\PC{1,4}") {
            let resolver = default_resolver();
            prop_assert_eq!(
                resolver.resolve(&t(&a), &t(&b)),
                resolver.resolve(&t(&b), &t(&a))
            );
        }

        #[test]
        fn deterministic(a in "\\PC{1,4}", b in "\\PC{1,4}") {
            let resolver = default_resolver();
            let first = resolver.resolve_detailed(&t(&a), &t(&b));
            prop_assert_eq!(resolver.resolve_detailed(&t(&a), &t(&b)), first);
        }

        #[test]
        fn misses_land_in_pool(a in "\\PC{1,4}", b in "\\PC{1,4}") {
            let resolver = default_resolver();
            let (a, b) = (t(&a), t(&b));
            if !resolver.recipes().contains(&a, &b) {
                prop_assert!(resolver.surprises().contains(&resolver.resolve(&a, &b)));
            }
        }
    }
}
