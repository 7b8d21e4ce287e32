use std::fmt;

use crate::{capitalize, format_quantity, OrderedMap, Recipe};

/// Running total for one unit of one ingredient.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitTotal {
    pub unit: String,
    pub value: f64,
}

/// Week-wide ingredient totals keyed by lower-cased name.
///
/// Names and units are merged only on exact matches: "g" and "grams" stay
/// separate, as do "tomato" and "tomatoes".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroceryList {
    entries: OrderedMap<String, Vec<UnitTotal>>,
}

impl GroceryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every ingredient of `recipe`, multiplied by its `num_days`.
    pub fn add_recipe(&mut self, recipe: &Recipe) {
        let days = f64::from(recipe.num_days);
        for ingredient in recipe.items() {
            if ingredient.name.is_empty() {
                continue;
            }
            let totals = self
                .entries
                .get_or_insert_with(ingredient.name.to_lowercase(), Vec::new);
            let Some(measurement) = &ingredient.measurement else {
                continue;
            };

            let value = measurement.value * days;
            match totals.iter_mut().find(|t| t.unit == measurement.unit) {
                Some(total) => total.value += value,
                None => totals.push(UnitTotal {
                    unit: measurement.unit.clone(),
                    value,
                }),
            }
        }
    }

    /// Totals for a (case-insensitive) ingredient name.
    pub fn totals(&self, name: &str) -> Option<&[UnitTotal]> {
        self.entries
            .get(&name.to_lowercase())
            .map(|totals| totals.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// One line per ingredient, in the order ingredients were first seen.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GroceryList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (line, (name, totals)) in self.entries.iter().enumerate() {
            if line > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", capitalize(name))?;
            if totals.is_empty() {
                continue;
            }
            let amounts = totals
                .iter()
                .map(|t| format!("{} {}", format_quantity(t.value), t.unit))
                .collect::<Vec<_>>()
                .join(" + ");
            write!(f, ": {amounts}")?;
        }
        Ok(())
    }
}

/// Aggregates already-scaled recipes into a grocery list.
pub fn generate_grocery_list(recipes: &[Recipe]) -> GroceryList {
    let mut list = GroceryList::new();
    for recipe in recipes {
        list.add_recipe(recipe);
    }
    list
}
