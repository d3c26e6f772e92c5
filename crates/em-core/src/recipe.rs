//! Curated recipes and the lookup table built from them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{MixerError, MixerResult};
use crate::pair::PairKey;
use crate::token::Token;

/// A curated combination: `left + right = result`.
///
/// The order of `left` and `right` is only for display; lookups treat the
/// pair as unordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// First ingredient.
    pub left: Token,
    /// Second ingredient.
    pub right: Token,
    /// The curated result.
    pub result: Token,
}

impl Recipe {
    /// Create a recipe from three tokens.
    pub fn new(left: impl Into<Token>, right: impl Into<Token>, result: impl Into<Token>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            result: result.into(),
        }
    }

    /// The normalised key for this recipe's ingredients.
    pub fn key(&self) -> PairKey {
        PairKey::new(&self.left, &self.right)
    }
}

/// Read-only lookup table of curated recipes.
///
/// Built once from a list of recipes; construction fails if any two recipes
/// share a normalised key, so the table is always a partial function on
/// unordered pairs.
#[derive(Debug, Clone, Default)]
pub struct RecipeTable {
    recipes: Vec<Recipe>,
    index: HashMap<PairKey, usize>,
}

impl RecipeTable {
    /// Build a table, rejecting blank tokens and duplicate pairs.
    pub fn new(recipes: impl IntoIterator<Item = Recipe>) -> MixerResult<Self> {
        let mut table = Self::default();

        for recipe in recipes {
            for token in [&recipe.left, &recipe.right, &recipe.result] {
                if token.is_blank() {
                    return Err(MixerError::InvalidToken {
                        token: token.as_str().to_string(),
                        table: "recipes",
                    });
                }
            }

            let key = recipe.key();
            if let Some(&existing) = table.index.get(&key) {
                return Err(MixerError::DuplicateRecipe {
                    key,
                    first: table.recipes[existing].result.clone(),
                    second: recipe.result,
                });
            }

            table.index.insert(key, table.recipes.len());
            table.recipes.push(recipe);
        }

        Ok(table)
    }

    /// Look up the curated result for a normalised key.
    pub fn lookup(&self, key: &PairKey) -> Option<&Token> {
        self.index.get(key).map(|&i| &self.recipes[i].result)
    }

    /// Look up the curated result for two tokens in either order.
    pub fn get(&self, a: &Token, b: &Token) -> Option<&Token> {
        self.lookup(&PairKey::new(a, b))
    }

    /// Returns true if a curated recipe exists for the pair.
    pub fn contains(&self, a: &Token, b: &Token) -> bool {
        self.get(a, b).is_some()
    }

    /// Number of curated recipes.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Returns true if there are no curated recipes.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Iterate over recipes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }
}
