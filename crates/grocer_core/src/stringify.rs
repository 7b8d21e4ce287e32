use std::collections::HashMap;

use crate::{format_quantity, Ingredient, Recipe};

/// Renders a recipe's ingredients as plain text, one ingredient per line, with
/// `**Section**` headers reinserted where named sections began.
///
/// Returns an empty string for recipes without structured ingredients.
pub fn stringify_ingredients(recipe: &Recipe) -> String {
    let Some(list) = recipe.ingredients.as_ref() else {
        return String::new();
    };

    let headers: HashMap<usize, &str> = list
        .sections
        .iter()
        .map(|marker| (marker.first_ingredient_index, marker.name.as_str()))
        .collect();

    let mut lines = Vec::with_capacity(list.items.len() + headers.len());
    for (index, ingredient) in list.items.iter().enumerate() {
        if let Some(header) = headers.get(&index) {
            lines.push(format!("**{header}**"));
        }
        lines.push(ingredient_line(ingredient));
    }
    lines.join("\n").trim().to_string()
}

fn ingredient_line(ingredient: &Ingredient) -> String {
    let mut line = match &ingredient.measurement {
        Some(measurement) => format!(
            "{} {} ",
            format_quantity(measurement.value),
            measurement.unit
        ),
        None => String::new(),
    };
    line.push_str(&ingredient.name);
    if let Some(note) = &ingredient.note {
        line.push_str(&format!(" ({note})"));
    }
    line
}
