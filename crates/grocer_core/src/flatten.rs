use crate::{IngredientList, IngredientSection, Recipe, SectionMarker, SourceRecipe};

/// Converts section-grouped recipes into the pipeline form, keeping order.
pub fn flatten_recipes(recipes: Vec<SourceRecipe>) -> Vec<Recipe> {
    recipes.into_iter().map(flatten_recipe).collect()
}

/// Converts one section-grouped recipe into the pipeline form.
///
/// Named sections leave a marker at the index of their first ingredient.
/// Unnamed sections, and named sections without ingredients, contribute no
/// marker, so marker indices are strictly increasing and always in bounds.
pub fn flatten_recipe(recipe: SourceRecipe) -> Recipe {
    Recipe {
        id: recipe.id,
        name: recipe.name,
        num_days: recipe.num_days,
        servings: recipe.servings,
        adjusted_servings: recipe.adjusted_servings,
        formatted: recipe.formatted,
        ingredients: recipe.ingredient_sections.map(flatten_sections),
    }
}

fn flatten_sections(sections: Vec<IngredientSection>) -> IngredientList {
    let mut list = IngredientList::default();
    for section in sections {
        match section.name {
            Some(name) if !name.is_empty() && !section.ingredients.is_empty() => {
                list.sections.push(SectionMarker {
                    name,
                    first_ingredient_index: list.items.len(),
                });
            }
            _ => {}
        }
        list.items.extend(section.ingredients);
    }
    list
}
