use std::fs;

use grocer_core::{RawRecipe, SourceRecipe};
use grocer_logging::{grocer_debug, grocer_info};
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::http::{build_client, endpoint, map_reqwest_error, read_json};
use crate::local::parse_structured_recipes;
use crate::{
    ConfigError, FailureKind, HttpSettings, ListOrganizer, OpenAiSettings, ServiceError,
    Structurer, ORGANIZE_GROCERY_LIST_PROMPT, PARSE_RECIPES_PROMPT,
};

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    refusal: Option<String>,
}

/// Chat-completions client used both to structure recipes and to organize the list.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    settings: OpenAiSettings,
    parse_prompt: String,
    max_bytes: u64,
    client: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(settings: OpenAiSettings, http: &HttpSettings) -> Result<Self, ConfigError> {
        let parse_prompt = match &settings.parse_prompt_path {
            Some(path) => fs::read_to_string(path).map_err(|source| ConfigError::PromptFile {
                path: path.clone(),
                source,
            })?,
            None => PARSE_RECIPES_PROMPT.to_string(),
        };
        Ok(Self {
            client: build_client(http)?,
            settings,
            parse_prompt,
            max_bytes: http.max_bytes,
        })
    }

    async fn complete(&self, body: Value) -> Result<String, ServiceError> {
        let url = endpoint(&self.settings.base_url, "chat/completions")?;
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.settings.api_key)
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let completion: ChatCompletion = read_json(response, self.max_bytes).await?;

        let message = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message)
            .ok_or_else(|| ServiceError::new(FailureKind::EmptyCompletion, "no choices returned"))?;
        if let Some(refusal) = message.refusal.filter(|r| !r.is_empty()) {
            return Err(ServiceError::new(FailureKind::Refusal, refusal));
        }
        message
            .content
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| ServiceError::new(FailureKind::EmptyCompletion, "message has no content"))
    }
}

#[async_trait::async_trait]
impl Structurer for OpenAiClient {
    async fn structure_recipes(
        &self,
        recipes: &[RawRecipe],
    ) -> Result<Vec<SourceRecipe>, ServiceError> {
        let user_message = serde_json::to_string(recipes)
            .map_err(|err| ServiceError::new(FailureKind::Decode, err.to_string()))?;
        let body = json!({
            "model": self.settings.model,
            "messages": [
                { "role": "system", "content": self.parse_prompt },
                { "role": "user", "content": user_message },
            ],
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": "recipes",
                    "strict": true,
                    "schema": recipes_schema(),
                },
            },
        });

        let content = self.complete(body).await?;
        grocer_debug!("Structured recipes response: {} bytes", content.len());
        let structured = parse_structured_recipes(&content)
            .map_err(|err| ServiceError::new(FailureKind::Decode, err.to_string()))?;
        grocer_info!("Structured {} recipes", structured.len());
        Ok(structured)
    }
}

#[async_trait::async_trait]
impl ListOrganizer for OpenAiClient {
    async fn organize(&self, grocery_list: &str) -> Result<String, ServiceError> {
        let body = json!({
            "model": self.settings.model,
            "messages": [
                { "role": "system", "content": ORGANIZE_GROCERY_LIST_PROMPT },
                { "role": "user", "content": grocery_list },
            ],
            "temperature": self.settings.organize_temperature,
        });
        let organized = self.complete(body).await?;
        Ok(organized.trim().to_string())
    }
}

/// Strict JSON schema for `{ "recipes": [SourceRecipe] }`.
pub fn recipes_schema() -> Value {
    let measurement = json!({
        "type": "object",
        "properties": {
            "unit": { "type": "string" },
            "value": { "type": "number" },
        },
        "required": ["unit", "value"],
        "additionalProperties": false,
    });
    let ingredient = json!({
        "type": "object",
        "properties": {
            "name": { "type": "string" },
            "measurement": { "anyOf": [measurement, { "type": "null" }] },
            "note": { "type": ["string", "null"] },
        },
        "required": ["name", "measurement", "note"],
        "additionalProperties": false,
    });
    let section = json!({
        "type": "object",
        "properties": {
            "name": { "type": ["string", "null"] },
            "ingredients": { "type": "array", "items": ingredient },
        },
        "required": ["name", "ingredients"],
        "additionalProperties": false,
    });
    let recipe = json!({
        "type": "object",
        "properties": {
            "id": { "type": "string" },
            "name": { "type": "string" },
            "numDays": { "type": "integer" },
            "servings": { "type": "number" },
            "adjustedServings": { "type": "number" },
            "formatted": { "type": "boolean" },
            "ingredientSections": {
                "anyOf": [{ "type": "array", "items": section }, { "type": "null" }],
            },
        },
        "required": [
            "id", "name", "numDays", "servings", "adjustedServings", "formatted",
            "ingredientSections",
        ],
        "additionalProperties": false,
    });
    json!({
        "type": "object",
        "properties": {
            "recipes": { "type": "array", "items": recipe },
        },
        "required": ["recipes"],
        "additionalProperties": false,
    })
}

#[cfg(test)]
mod tests {
    use super::recipes_schema;

    #[test]
    fn schema_requires_every_recipe_field() {
        let schema = recipes_schema();
        let recipe = &schema["properties"]["recipes"]["items"];
        let required: Vec<_> = recipe["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        let properties = recipe["properties"].as_object().unwrap();
        assert_eq!(required.len(), properties.len());
        for key in properties.keys() {
            assert!(required.contains(&key.as_str()), "{key} not required");
        }
        assert_eq!(recipe["additionalProperties"], false);
    }
}
