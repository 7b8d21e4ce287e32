use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A quantity attached to an ingredient, e.g. `250 g`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub value: f64,
}

impl Measurement {
    pub fn new(unit: impl Into<String>, value: f64) -> Self {
        Self {
            unit: unit.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Empty when the structuring service omitted it; such entries are skipped
    /// by the aggregator.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub measurement: Option<Measurement>,
    #[serde(default)]
    pub note: Option<String>,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, measurement: Option<Measurement>) -> Self {
        Self {
            name: name.into(),
            measurement,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// A group of ingredients as the structuring service returns them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientSection {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

impl IngredientSection {
    pub fn named(name: impl Into<String>, ingredients: Vec<Ingredient>) -> Self {
        Self {
            name: Some(name.into()),
            ingredients,
        }
    }

    pub fn unnamed(ingredients: Vec<Ingredient>) -> Self {
        Self {
            name: None,
            ingredients,
        }
    }
}

/// Recipe record as loaded from the recipe database, before its free-text
/// ingredients are structured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecipe {
    pub id: String,
    pub name: String,
    pub num_days: u32,
    pub servings: f64,
    pub adjusted_servings: f64,
    pub formatted: bool,
    pub ingredients: String,
}

/// Recipe record with section-grouped ingredients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceRecipe {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub num_days: u32,
    #[serde(default)]
    pub servings: f64,
    #[serde(default)]
    pub adjusted_servings: f64,
    #[serde(default)]
    pub formatted: bool,
    /// `None` when the structuring service could not extract any structure.
    #[serde(default, deserialize_with = "sections_or_none")]
    pub ingredient_sections: Option<Vec<IngredientSection>>,
}

/// Boundary marker: the named section starting at `first_ingredient_index`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionMarker {
    pub name: String,
    pub first_ingredient_index: usize,
}

/// Flat ingredient sequence together with its section boundaries.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IngredientList {
    pub items: Vec<Ingredient>,
    pub sections: Vec<SectionMarker>,
}

/// Pipeline form of a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub num_days: u32,
    pub servings: f64,
    pub adjusted_servings: f64,
    pub formatted: bool,
    /// Absent when the source recipe had no usable structure.
    pub ingredients: Option<IngredientList>,
}

impl Recipe {
    pub fn items(&self) -> &[Ingredient] {
        self.ingredients
            .as_ref()
            .map(|list| list.items.as_slice())
            .unwrap_or_default()
    }
}

fn sections_or_none<'de, D>(deserializer: D) -> Result<Option<Vec<IngredientSection>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => serde_json::from_value(Value::Array(items))
            .map(Some)
            .map_err(de::Error::custom),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::SourceRecipe;

    #[test]
    fn non_array_sections_deserialize_as_none() {
        let json = r#"{"id":"a","name":"A","numDays":1,"servings":2,"adjustedServings":2,
            "formatted":true,"ingredientSections":"could not parse"}"#;
        let recipe: SourceRecipe = serde_json::from_str(json).unwrap();
        assert!(recipe.ingredient_sections.is_none());
    }

    #[test]
    fn missing_optional_fields_fall_back_to_defaults() {
        let json = r#"{"id":"a","ingredientSections":[{"ingredients":[{"measurement":null}]}]}"#;
        let recipe: SourceRecipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.num_days, 0);
        assert!(!recipe.formatted);
        let sections = recipe.ingredient_sections.unwrap();
        assert_eq!(sections[0].name, None);
        assert_eq!(sections[0].ingredients[0].name, "");
    }
}
