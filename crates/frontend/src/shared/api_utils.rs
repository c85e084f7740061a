//! API utilities for frontend-backend communication
//!
//! Provides endpoint paths, URL construction and the shared JSON GET helper.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Список видов обучения
pub const TRAINING_TYPES_PATH: &str = "/get_training_types";
/// Программы обучения для вида (`?type_id=...`)
pub const PROGRAMS_PATH: &str = "/get_programs";
/// Приём заявки
pub const SUBMIT_APPLICATION_PATH: &str = "/submit_application";

/// Errors produced by the HTTP layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never completed (network, CORS, DNS)
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("HTTP error: {0}")]
    Http(u16),
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

/// Get the base URL for API requests
///
/// The mini-app is served by the same origin as its API, so the base is empty
/// unless `INTAKE_API_BASE` was set at build time.
pub fn api_base() -> String {
    option_env!("INTAKE_API_BASE")
        .unwrap_or_default()
        .trim_end_matches('/')
        .to_string()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url(TRAINING_TYPES_PATH);
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// GET `url` and decode the JSON body, treating non-2xx as an error
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
