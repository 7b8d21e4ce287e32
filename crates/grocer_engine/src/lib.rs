//! Grocer engine: external collaborators and the async weekly pipeline.
mod config;
mod http;
mod local;
mod notion;
mod openai;
mod persist;
mod pipeline;
mod prompts;
mod service;
mod types;

pub use config::{ConfigError, GrocerConfig, HttpSettings, NotionSettings, OpenAiSettings};
pub use local::{load_structured_recipes, parse_structured_recipes, LocalInputError};
pub use notion::{rich_text_chunks, NotionClient, NOTION_TEXT_LIMIT};
pub use openai::{recipes_schema, OpenAiClient};
pub use persist::{
    ensure_output_dir, write_grocery_list, ListStore, PersistError, GROCERY_LIST_FILENAME,
};
pub use pipeline::{run_blocking, LogProgressSink, ProgressSink, WeeklyPipeline};
pub use prompts::{ORGANIZE_GROCERY_LIST_PROMPT, PARSE_RECIPES_PROMPT};
pub use service::{ListOrganizer, ListPublisher, RecipeSink, RecipeSource, Structurer};
pub use types::{FailureKind, PipelineError, PipelineEvent, ServiceError, Stage, WeekSummary};
