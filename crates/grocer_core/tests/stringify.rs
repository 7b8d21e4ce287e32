use grocer_core::{
    flatten_recipe, stringify_ingredients, Ingredient, IngredientSection, Measurement,
    SourceRecipe,
};
use pretty_assertions::assert_eq;

fn source(sections: Option<Vec<IngredientSection>>) -> SourceRecipe {
    SourceRecipe {
        id: "id-1".to_string(),
        name: "Teriyaki Chicken".to_string(),
        num_days: 1,
        servings: 2.0,
        adjusted_servings: 2.0,
        formatted: false,
        ingredient_sections: sections,
    }
}

#[test]
fn renders_headers_quantities_and_notes() {
    let recipe = flatten_recipe(source(Some(vec![
        IngredientSection::named(
            "Chicken & Marinade",
            vec![
                Ingredient::new("chicken thighs", Some(Measurement::new("g", 500.0)))
                    .with_note("boneless"),
                Ingredient::new("soy sauce", Some(Measurement::new("tbsp", 2.5))),
            ],
        ),
        IngredientSection::named(
            "To Serve",
            vec![
                Ingredient::new("rice", Some(Measurement::new("cups", 1.0 / 3.0))),
                Ingredient::new("sesame seeds", None).with_note("to taste"),
            ],
        ),
    ])));

    assert_eq!(
        stringify_ingredients(&recipe),
        "**Chicken & Marinade**\n\
         500 g chicken thighs (boneless)\n\
         2.50 tbsp soy sauce\n\
         **To Serve**\n\
         0.33 cups rice\n\
         sesame seeds (to taste)"
    );
}

#[test]
fn unnamed_sections_render_without_headers() {
    let recipe = flatten_recipe(source(Some(vec![
        IngredientSection::unnamed(vec![Ingredient::new("salt", None)]),
        IngredientSection::named("Sauce", vec![Ingredient::new("tahini", None)]),
    ])));

    assert_eq!(stringify_ingredients(&recipe), "salt\n**Sauce**\ntahini");
}

#[test]
fn unstructured_recipe_renders_empty() {
    let recipe = flatten_recipe(source(None));
    assert_eq!(stringify_ingredients(&recipe), "");
}

#[test]
fn output_is_trimmed() {
    let recipe = flatten_recipe(source(Some(vec![IngredientSection::unnamed(vec![
        Ingredient::new("  ", None),
        Ingredient::new("lemon", Some(Measurement::new("", 1.0))),
    ])])));

    // An empty unit still gets both separating spaces; the parse prompt asks for
    // "whole" so well-formed input never hits this.
    assert_eq!(stringify_ingredients(&recipe), "1  lemon");
}
