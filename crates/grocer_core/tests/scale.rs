use grocer_core::{
    degenerate_ratio, format_quantity, scale_measurement, scale_servings, stringify_ingredients,
    Ingredient, IngredientList, Measurement, Recipe,
};
use pretty_assertions::assert_eq;

fn recipe(servings: f64, adjusted: f64, items: Vec<Ingredient>) -> Recipe {
    Recipe {
        id: "r".to_string(),
        name: "Stew".to_string(),
        num_days: 1,
        servings,
        adjusted_servings: adjusted,
        formatted: true,
        ingredients: Some(IngredientList {
            items,
            sections: Vec::new(),
        }),
    }
}

fn values(recipe: &Recipe) -> Vec<Option<f64>> {
    recipe
        .items()
        .iter()
        .map(|i| i.measurement.as_ref().map(|m| m.value))
        .collect()
}

#[test]
fn scales_measured_ingredients_by_ratio() {
    let scaled = scale_servings(vec![recipe(
        2.0,
        3.0,
        vec![
            Ingredient::new("beef", Some(Measurement::new("g", 500.0))),
            Ingredient::new("salt", None),
            Ingredient::new("water", Some(Measurement::new("ml", 0.0))),
        ],
    )]);

    assert_eq!(values(&scaled[0]), vec![Some(750.0), None, Some(0.0)]);
    assert_eq!(scaled[0].servings, 2.0);
    assert_eq!(scaled[0].adjusted_servings, 3.0);
}

#[test]
fn ratio_of_one_is_bit_for_bit_noop() {
    let original = recipe(
        4.0,
        4.0,
        vec![
            Ingredient::new("oil", Some(Measurement::new("tbsp", 0.1 + 0.2))),
            Ingredient::new("egg", Some(Measurement::new("", 1.0 / 3.0))),
        ],
    );
    let scaled = scale_servings(vec![original.clone()]);

    for (before, after) in original.items().iter().zip(scaled[0].items()) {
        let before = before.measurement.as_ref().unwrap().value.to_bits();
        let after = after.measurement.as_ref().unwrap().value.to_bits();
        assert_eq!(before, after);
    }
}

#[test]
fn unstructured_recipe_is_skipped() {
    let mut unstructured = recipe(1.0, 5.0, Vec::new());
    unstructured.ingredients = None;
    let scaled = scale_servings(vec![unstructured.clone()]);
    assert_eq!(scaled, vec![unstructured]);
}

#[test]
fn zero_servings_is_left_unscaled() {
    let zero = recipe(
        0.0,
        4.0,
        vec![Ingredient::new("flour", Some(Measurement::new("g", 200.0)))],
    );
    assert!(degenerate_ratio(&zero));

    let scaled = scale_servings(vec![zero]);
    assert_eq!(values(&scaled[0]), vec![Some(200.0)]);
}

#[test]
fn zero_to_zero_servings_is_not_degenerate() {
    let zero = recipe(0.0, 0.0, Vec::new());
    assert!(!degenerate_ratio(&zero));
}

#[test]
fn scale_measurement_leaves_nan_alone() {
    let mut measurement = Measurement::new("g", f64::NAN);
    scale_measurement(&mut measurement, 2.0);
    assert!(measurement.value.is_nan());
}

#[test]
fn scaling_then_rendering_matches_rendering_scaled_values() {
    let ratio = 7.0 / 3.0;
    let raw = [1.0, 2.5, 0.75, 12.0, 1.0 / 3.0];
    let items = raw
        .iter()
        .enumerate()
        .map(|(i, &v)| Ingredient::new(format!("item{i}"), Some(Measurement::new("cup", v))))
        .collect();

    let scaled = scale_servings(vec![recipe(3.0, 7.0, items)]);
    let rendered = stringify_ingredients(&scaled[0]);

    let expected = raw
        .iter()
        .enumerate()
        .map(|(i, &v)| format!("{} cup item{i}", format_quantity(v * ratio)))
        .collect::<Vec<_>>()
        .join("\n");
    assert_eq!(rendered, expected);
}

#[test]
fn halving_a_quarter_cup_reads_as_thirteen_hundredths() {
    let scaled = scale_servings(vec![recipe(
        4.0,
        2.0,
        vec![Ingredient::new("butter", Some(Measurement::new("cup", 0.25)))],
    )]);

    assert_eq!(values(&scaled[0]), vec![Some(0.125)]);
    assert_eq!(stringify_ingredients(&scaled[0]), "0.13 cup butter");
    assert_eq!(
        grocer_core::generate_grocery_list(&scaled).render(),
        "Butter: 0.13 cup"
    );
}
