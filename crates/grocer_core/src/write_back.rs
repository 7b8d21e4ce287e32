use serde::{Deserialize, Serialize};

use crate::{stringify_ingredients, Recipe};

/// What gets written back to the recipe database for one recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeUpdate {
    pub id: String,
    pub name: String,
    pub adjusted_servings: f64,
    pub ingredients_text: String,
}

impl RecipeUpdate {
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.clone(),
            name: recipe.name.clone(),
            adjusted_servings: recipe.adjusted_servings,
            ingredients_text: stringify_ingredients(recipe),
        }
    }
}

/// A recipe is written back when it was rescaled or has not been formatted yet.
pub fn needs_write_back(recipe: &Recipe) -> bool {
    recipe.servings != recipe.adjusted_servings || !recipe.formatted
}

/// Updates for every recipe that needs one, in recipe order.
pub fn write_backs(recipes: &[Recipe]) -> Vec<RecipeUpdate> {
    recipes
        .iter()
        .filter(|recipe| needs_write_back(recipe))
        .map(RecipeUpdate::from_recipe)
        .collect()
}
