use grocer_core::{RawRecipe, RecipeUpdate};
use grocer_logging::{grocer_debug, grocer_info};
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::http::{build_client, endpoint, map_reqwest_error, read_json};
use crate::{
    ConfigError, HttpSettings, ListPublisher, NotionSettings, RecipeSink, RecipeSource,
    ServiceError,
};

/// Maximum characters Notion accepts in one rich-text object.
pub const NOTION_TEXT_LIMIT: usize = 2000;

const PAGE_SIZE: u32 = 100;

const PROP_NAME: &str = "Recipe Name";
const PROP_DAYS: &str = "Day";
const PROP_SERVINGS: &str = "Servings";
const PROP_ADJUSTED: &str = "Adjusted Servings";
const PROP_FORMATTED: &str = "Formatted";
const PROP_INGREDIENTS: &str = "Ingredients";

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    results: Vec<NotionPage>,
    #[serde(default)]
    has_more: bool,
    #[serde(default)]
    next_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NotionPage {
    id: String,
    #[serde(default)]
    properties: Map<String, Value>,
}

/// Notion-backed recipe database, write-back sink and list publisher.
#[derive(Debug, Clone)]
pub struct NotionClient {
    settings: NotionSettings,
    max_bytes: u64,
    client: reqwest::Client,
}

impl NotionClient {
    pub fn new(settings: NotionSettings, http: &HttpSettings) -> Result<Self, ConfigError> {
        Ok(Self {
            client: build_client(http)?,
            max_bytes: http.max_bytes,
            settings,
        })
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &Value,
    ) -> Result<T, ServiceError> {
        let url = endpoint(&self.settings.base_url, path)?;
        let response = self
            .client
            .request(method, url)
            .bearer_auth(&self.settings.api_key)
            .header("Notion-Version", &self.settings.version)
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .send()
            .await
            .map_err(map_reqwest_error)?;
        read_json(response, self.max_bytes).await
    }
}

#[async_trait::async_trait]
impl RecipeSource for NotionClient {
    async fn load_recipes(&self) -> Result<Vec<RawRecipe>, ServiceError> {
        let path = format!("databases/{}/query", self.settings.database_id);
        let mut recipes = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut body = json!({ "page_size": PAGE_SIZE });
            if let Some(cursor) = &cursor {
                body["start_cursor"] = json!(cursor);
            }
            let page: QueryResponse = self.send(Method::POST, &path, &body).await?;
            grocer_debug!("Notion query returned {} pages", page.results.len());
            recipes.extend(page.results.iter().map(recipe_from_page));

            match page.next_cursor {
                Some(next) if page.has_more => cursor = Some(next),
                _ => break,
            }
        }

        let total = recipes.len();
        recipes.retain(|recipe| recipe.num_days > 0);
        grocer_info!(
            "Loaded {} scheduled recipes ({} unscheduled skipped)",
            recipes.len(),
            total - recipes.len()
        );
        Ok(recipes)
    }
}

#[async_trait::async_trait]
impl RecipeSink for NotionClient {
    async fn write_back(&self, update: &RecipeUpdate) -> Result<(), ServiceError> {
        let body = json!({
            "properties": {
                PROP_SERVINGS: { "number": update.adjusted_servings },
                PROP_FORMATTED: { "checkbox": true },
                PROP_INGREDIENTS: { "rich_text": rich_text_chunks(&update.ingredients_text) },
            }
        });
        let _: Value = self
            .send(Method::PATCH, &format!("pages/{}", update.id), &body)
            .await?;
        grocer_debug!("Updated recipe {} ({})", update.name, update.id);
        Ok(())
    }
}

#[async_trait::async_trait]
impl ListPublisher for NotionClient {
    async fn publish(&self, title: &str, grocery_list: &str) -> Result<(), ServiceError> {
        let body = json!({
            "parent": { "page_id": self.settings.page_id },
            "properties": {
                "title": rich_text_chunks(title),
            },
            "children": [{
                "object": "block",
                "type": "paragraph",
                "paragraph": { "rich_text": rich_text_chunks(grocery_list) },
            }],
        });
        let _: Value = self.send(Method::POST, "pages", &body).await?;
        grocer_info!("Created grocery list page \"{}\"", title);
        Ok(())
    }
}

/// Extracts the recipe fields from one database row.
///
/// Missing properties fall back to the same defaults the database UI shows:
/// no name, zero days, zero servings, not formatted, no ingredients.
pub(crate) fn recipe_from_page(page: &NotionPage) -> RawRecipe {
    let props = &page.properties;

    let name = props
        .get(PROP_NAME)
        .and_then(|p| p.pointer("/title/0/plain_text"))
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .unwrap_or("No Name")
        .to_string();
    let num_days = props
        .get(PROP_DAYS)
        .and_then(|p| p.get("multi_select"))
        .and_then(Value::as_array)
        .map_or(0, |days| days.len() as u32);
    let formatted = props
        .get(PROP_FORMATTED)
        .and_then(|p| p.get("checkbox"))
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let ingredients = props
        .get(PROP_INGREDIENTS)
        .and_then(|p| p.get("rich_text"))
        .and_then(Value::as_array)
        .map(|parts| {
            parts
                .iter()
                .filter_map(|part| part.get("plain_text").and_then(Value::as_str))
                .collect::<String>()
        })
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| "No Ingredients".to_string());

    RawRecipe {
        id: page.id.clone(),
        name,
        num_days,
        servings: number_property(props, PROP_SERVINGS),
        adjusted_servings: number_property(props, PROP_ADJUSTED),
        formatted,
        ingredients,
    }
}

fn number_property(props: &Map<String, Value>, key: &str) -> f64 {
    props
        .get(key)
        .and_then(|p| p.get("number"))
        .and_then(Value::as_f64)
        .unwrap_or(0.0)
}

/// Splits `text` into rich-text objects of at most [`NOTION_TEXT_LIMIT`] characters.
pub fn rich_text_chunks(text: &str) -> Vec<Value> {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(NOTION_TEXT_LIMIT)
        .map(|chunk| {
            json!({
                "type": "text",
                "text": { "content": chunk.iter().collect::<String>() },
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{recipe_from_page, rich_text_chunks, NotionPage, NOTION_TEXT_LIMIT};

    fn page(properties: serde_json::Value) -> NotionPage {
        serde_json::from_value(json!({ "id": "page-1", "properties": properties })).unwrap()
    }

    #[test]
    fn reads_all_recipe_properties() {
        let recipe = recipe_from_page(&page(json!({
            "Recipe Name": { "title": [{ "plain_text": "Chili" }] },
            "Day": { "multi_select": [{ "name": "Mon" }, { "name": "Thu" }] },
            "Servings": { "number": 4 },
            "Adjusted Servings": { "number": 6 },
            "Formatted": { "checkbox": true },
            "Ingredients": { "rich_text": [
                { "plain_text": "500 g beef\n" },
                { "plain_text": "1 can beans" }
            ] }
        })));

        assert_eq!(recipe.id, "page-1");
        assert_eq!(recipe.name, "Chili");
        assert_eq!(recipe.num_days, 2);
        assert_eq!(recipe.servings, 4.0);
        assert_eq!(recipe.adjusted_servings, 6.0);
        assert!(recipe.formatted);
        assert_eq!(recipe.ingredients, "500 g beef\n1 can beans");
    }

    #[test]
    fn missing_properties_use_defaults() {
        let recipe = recipe_from_page(&page(json!({
            "Recipe Name": { "title": [] },
            "Servings": { "number": null }
        })));

        assert_eq!(recipe.name, "No Name");
        assert_eq!(recipe.num_days, 0);
        assert_eq!(recipe.servings, 0.0);
        assert_eq!(recipe.adjusted_servings, 0.0);
        assert!(!recipe.formatted);
        assert_eq!(recipe.ingredients, "No Ingredients");
    }

    #[test]
    fn long_text_is_split_on_char_boundaries() {
        let text = "é".repeat(NOTION_TEXT_LIMIT + 5);
        let chunks = rich_text_chunks(&text);
        assert_eq!(chunks.len(), 2);
        let first = chunks[0]["text"]["content"].as_str().unwrap();
        let second = chunks[1]["text"]["content"].as_str().unwrap();
        assert_eq!(first.chars().count(), NOTION_TEXT_LIMIT);
        assert_eq!(second.chars().count(), 5);
    }

    #[test]
    fn empty_text_has_no_chunks() {
        assert!(rich_text_chunks("").is_empty());
    }
}
