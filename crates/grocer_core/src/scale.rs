use crate::{Measurement, Recipe};

/// Multiplies a measurement by `ratio`.
///
/// Zero (and NaN) values are left alone: they mean "no usable quantity".
pub fn scale_measurement(measurement: &mut Measurement, ratio: f64) {
    if measurement.value != 0.0 && !measurement.value.is_nan() {
        measurement.value *= ratio;
    }
}

/// True when scaling would need a non-finite ratio, e.g. `servings == 0`
/// with a different adjusted count. Such recipes are not scaled.
pub fn degenerate_ratio(recipe: &Recipe) -> bool {
    recipe.adjusted_servings != recipe.servings
        && !(recipe.adjusted_servings / recipe.servings).is_finite()
}

/// Scales every recipe's quantities from `servings` to `adjusted_servings`.
///
/// `servings` and `adjusted_servings` are returned unchanged.
pub fn scale_servings(mut recipes: Vec<Recipe>) -> Vec<Recipe> {
    for recipe in &mut recipes {
        if recipe.adjusted_servings == recipe.servings || degenerate_ratio(recipe) {
            continue;
        }
        let ratio = recipe.adjusted_servings / recipe.servings;
        let Some(list) = recipe.ingredients.as_mut() else {
            continue;
        };
        for measurement in list
            .items
            .iter_mut()
            .filter_map(|ingredient| ingredient.measurement.as_mut())
        {
            scale_measurement(measurement, ratio);
        }
    }
    recipes
}
