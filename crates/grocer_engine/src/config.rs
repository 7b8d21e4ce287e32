use std::path::PathBuf;
use std::time::Duration;

use grocer_logging::grocer_debug;

use crate::ServiceError;

pub const DEFAULT_NOTION_BASE_URL: &str = "https://api.notion.com/v1";
pub const DEFAULT_NOTION_VERSION: &str = "2022-06-28";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-2024-08-06";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required setting {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
    #[error("cannot build http client: {0}")]
    HttpClient(#[from] ServiceError),
    #[error("cannot read prompt file {}: {source}", path.display())]
    PromptFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            // Structured completions over a whole week of recipes are slow.
            request_timeout: Duration::from_secs(120),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NotionSettings {
    pub api_key: String,
    pub database_id: String,
    /// Parent page for new grocery list pages.
    pub page_id: String,
    pub base_url: String,
    pub version: String,
}

impl NotionSettings {
    pub fn new(
        api_key: impl Into<String>,
        database_id: impl Into<String>,
        page_id: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            database_id: database_id.into(),
            page_id: page_id.into(),
            base_url: DEFAULT_NOTION_BASE_URL.to_string(),
            version: DEFAULT_NOTION_VERSION.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OpenAiSettings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub organize_temperature: f64,
    /// Replaces the built-in recipe parsing prompt when set.
    pub parse_prompt_path: Option<PathBuf>,
}

impl OpenAiSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            model: DEFAULT_OPENAI_MODEL.to_string(),
            organize_temperature: 0.2,
            parse_prompt_path: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GrocerConfig {
    pub notion: NotionSettings,
    pub openai: OpenAiSettings,
    pub http: HttpSettings,
}

impl GrocerConfig {
    /// Reads settings from the process environment, loading `.env` first when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(err) = dotenvy::dotenv() {
            grocer_debug!("No .env file loaded: {}", err);
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |key: &'static str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &'static str| value(key).ok_or(ConfigError::Missing(key));

        let mut notion = NotionSettings::new(
            required("NOTION_API_KEY")?,
            required("NOTION_DATABASE_ID")?,
            required("NOTION_PAGE_ID")?,
        );
        if let Some(url) = value("NOTION_BASE_URL") {
            notion.base_url = url;
        }
        if let Some(version) = value("NOTION_VERSION") {
            notion.version = version;
        }

        let mut openai = OpenAiSettings::new(required("OPENAI_API_KEY")?);
        if let Some(url) = value("OPENAI_BASE_URL") {
            openai.base_url = url;
        }
        if let Some(model) = value("OPENAI_MODEL") {
            openai.model = model;
        }
        openai.parse_prompt_path = value("GROCER_PARSE_PROMPT_PATH").map(PathBuf::from);

        let mut http = HttpSettings::default();
        if let Some(raw) = value("GROCER_REQUEST_TIMEOUT_SECS") {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::Invalid {
                    key: "GROCER_REQUEST_TIMEOUT_SECS",
                    value: raw.clone(),
                })?;
            http.request_timeout = Duration::from_secs(secs);
        }

        Ok(Self {
            notion,
            openai,
            http,
        })
    }
}
