use crate::{
    flatten_recipes, generate_grocery_list, scale_servings, write_backs, GroceryList, Recipe,
    RecipeUpdate, SourceRecipe,
};

/// Everything one run derives from the week's structured recipes.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekPlan {
    /// Flattened and scaled recipes, in input order.
    pub recipes: Vec<Recipe>,
    /// Write-backs for rescaled or unformatted recipes.
    pub updates: Vec<RecipeUpdate>,
    pub grocery_list: GroceryList,
}

/// Flatten, scale, then derive the write-backs and the grocery list.
pub fn plan_week(sources: Vec<SourceRecipe>) -> WeekPlan {
    let recipes = scale_servings(flatten_recipes(sources));
    let updates = write_backs(&recipes);
    let grocery_list = generate_grocery_list(&recipes);
    WeekPlan {
        recipes,
        updates,
        grocery_list,
    }
}
