use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Loading,
    Structuring,
    Planning,
    WritingBack,
    Organizing,
    Publishing,
    Done,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekSummary {
    pub recipe_count: usize,
    pub unstructured_count: usize,
    pub updated: usize,
    pub write_back_failures: usize,
    /// Aggregated list before any reorganization.
    pub grocery_list: String,
    /// The text actually handed to the publisher.
    pub published_list: String,
    pub organized: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PipelineEvent {
    StageStarted(Stage),
    WriteBackFailed {
        recipe_id: String,
        kind: FailureKind,
    },
    Finished(WeekSummary),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ServiceError {
    pub kind: FailureKind,
    pub message: String,
}

impl ServiceError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Decode,
    EmptyCompletion,
    Refusal,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Decode => write!(f, "unexpected response body"),
            FailureKind::EmptyCompletion => write!(f, "empty completion"),
            FailureKind::Refusal => write!(f, "model refused"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("loading recipes failed: {0}")]
    Load(#[source] ServiceError),
    #[error("structuring recipes failed: {0}")]
    Structure(#[source] ServiceError),
    #[error("publishing grocery list failed: {0}")]
    Publish(#[source] ServiceError),
    #[error("could not start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
}
