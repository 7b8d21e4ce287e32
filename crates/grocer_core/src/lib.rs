//! Grocer core: pure recipe pipeline from sectioned ingredients to a grocery list.
mod flatten;
mod format;
mod grocery;
mod model;
mod ordered_map;
mod plan;
mod scale;
mod stringify;
mod write_back;

pub use flatten::{flatten_recipe, flatten_recipes};
pub use format::{capitalize, format_quantity};
pub use grocery::{generate_grocery_list, GroceryList, UnitTotal};
pub use model::{
    Ingredient, IngredientList, IngredientSection, Measurement, RawRecipe, Recipe,
    SectionMarker, SourceRecipe,
};
pub use ordered_map::OrderedMap;
pub use plan::{plan_week, WeekPlan};
pub use scale::{degenerate_ratio, scale_measurement, scale_servings};
pub use stringify::stringify_ingredients;
pub use write_back::{needs_write_back, write_backs, RecipeUpdate};
