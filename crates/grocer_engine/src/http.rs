use futures_util::StreamExt;
use grocer_logging::grocer_trace;
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::{FailureKind, HttpSettings, ServiceError};

const ERROR_BODY_PREVIEW: usize = 512;

pub(crate) fn build_client(settings: &HttpSettings) -> Result<reqwest::Client, ServiceError> {
    reqwest::Client::builder()
        .connect_timeout(settings.connect_timeout)
        .timeout(settings.request_timeout)
        .build()
        .map_err(|err| ServiceError::new(FailureKind::Network, err.to_string()))
}

/// Joins `base` and `path` with exactly one slash and validates the result.
pub(crate) fn endpoint(base: &str, path: &str) -> Result<Url, ServiceError> {
    let joined = format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    Url::parse(&joined).map_err(|err| ServiceError::new(FailureKind::InvalidUrl, err.to_string()))
}

/// Reads a successful JSON response, enforcing the byte limit while streaming.
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
    max_bytes: u64,
) -> Result<T, ServiceError> {
    let status = response.status();
    if !status.is_success() {
        let body = read_body(response, max_bytes).await.unwrap_or_default();
        let preview: String = String::from_utf8_lossy(&body)
            .chars()
            .take(ERROR_BODY_PREVIEW)
            .collect();
        return Err(ServiceError::new(
            FailureKind::HttpStatus(status.as_u16()),
            format!("{status}: {preview}"),
        ));
    }

    let body = read_body(response, max_bytes).await?;
    serde_json::from_slice(&body).map_err(|err| ServiceError::new(FailureKind::Decode, err.to_string()))
}

async fn read_body(response: reqwest::Response, max_bytes: u64) -> Result<Vec<u8>, ServiceError> {
    if let Some(content_len) = response.content_length() {
        if content_len > max_bytes {
            return Err(too_large(max_bytes, content_len));
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(map_reqwest_error)?;
        let next_len = bytes.len() as u64 + chunk.len() as u64;
        if next_len > max_bytes {
            return Err(too_large(max_bytes, next_len));
        }
        bytes.extend_from_slice(&chunk);
    }
    grocer_trace!("Read {} response bytes", bytes.len());
    Ok(bytes)
}

fn too_large(max_bytes: u64, actual: u64) -> ServiceError {
    ServiceError::new(
        FailureKind::TooLarge {
            max_bytes,
            actual: Some(actual),
        },
        "response too large",
    )
}

pub(crate) fn map_reqwest_error(err: reqwest::Error) -> ServiceError {
    if err.is_timeout() {
        return ServiceError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_builder() {
        return ServiceError::new(FailureKind::InvalidUrl, err.to_string());
    }
    ServiceError::new(FailureKind::Network, err.to_string())
}
