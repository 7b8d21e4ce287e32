use grocer_core::{RawRecipe, RecipeUpdate, SourceRecipe};

use crate::ServiceError;

/// Where the week's recipes come from.
#[async_trait::async_trait]
pub trait RecipeSource: Send + Sync {
    /// Recipes scheduled at least once this week, in database order.
    async fn load_recipes(&self) -> Result<Vec<RawRecipe>, ServiceError>;
}

/// Turns free-text ingredient lists into section-grouped ingredients.
#[async_trait::async_trait]
pub trait Structurer: Send + Sync {
    async fn structure_recipes(
        &self,
        recipes: &[RawRecipe],
    ) -> Result<Vec<SourceRecipe>, ServiceError>;
}

/// Optional reformatting step applied to the aggregated grocery list.
#[async_trait::async_trait]
pub trait ListOrganizer: Send + Sync {
    async fn organize(&self, grocery_list: &str) -> Result<String, ServiceError>;
}

#[async_trait::async_trait]
pub trait RecipeSink: Send + Sync {
    async fn write_back(&self, update: &RecipeUpdate) -> Result<(), ServiceError>;
}

#[async_trait::async_trait]
pub trait ListPublisher: Send + Sync {
    async fn publish(&self, title: &str, grocery_list: &str) -> Result<(), ServiceError>;
}
