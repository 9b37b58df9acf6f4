//! API utilities for frontend-backend communication
//!
//! Provides URL construction, the tagged `ApiError` and thin JSON helpers over
//! `gloo_net` shared by every `api.rs` module.

use contracts::shared::violations::{Violation, ViolationList};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::shared::config::config;

/// JSON-LD keeps `hydra:member`/`hydra:totalItems` in collection responses
const ACCEPT: &str = "application/ld+json";

/// Get the base URL for API requests
///
/// Absolute URLs from the configuration are used as is; a path such as
/// `/api` is resolved against the current window origin.
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/customers/{}", api_base(), id);
/// ```
pub fn api_base() -> String {
    let base = &config().api.base_url;
    if !base.starts_with('/') {
        return base.clone();
    }
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    format!("{}{}", origin, base)
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - resource path relative to the API root, e.g. `/customers/12`
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Failure of an API call
///
/// Only `Validation` carries information that is shown next to form fields;
/// the other variants are logged or lead to a redirect.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, serialization)
    #[error("Failed to send request: {0}")]
    Transport(String),

    /// A successful response whose body did not match the expected type
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The server refused the request without field-level detail
    #[error("HTTP {status}: {detail}")]
    Rejected { status: u16, detail: String },

    /// The server refused the request and listed invalid fields
    #[error("Validation failed: {} violation(s)", .0.len())]
    Validation(Vec<Violation>),
}

impl ApiError {
    /// Classify an unsuccessful response by its body
    pub fn from_response(status: u16, body: &str) -> Self {
        if let Some(list) = ViolationList::parse(body) {
            return ApiError::Validation(list.violations);
        }
        ApiError::Rejected {
            status,
            detail: extract_detail(body),
        }
    }

    pub fn violations(&self) -> Option<&[Violation]> {
        match self {
            ApiError::Validation(v) => Some(v),
            _ => None,
        }
    }
}

/// Human-readable part of an error body (`hydra:description`, `detail`) or the
/// beginning of the raw text
fn extract_detail(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["hydra:description", "detail", "message"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }
    body.chars().take(200).collect()
}

async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_response(status, &body))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = check(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// GET `url` and decode the JSON body
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    log::debug!("GET {}", url);
    let response = Request::get(url)
        .header("Accept", ACCEPT)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_json(response).await
}

async fn send_json<B, T>(builder: RequestBuilder, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = builder
        .header("Accept", ACCEPT)
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_json(response).await
}

/// POST `body` as JSON and decode the created resource
pub async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    log::debug!("POST {}", url);
    send_json(Request::post(url), body).await
}

/// PUT `body` as JSON and decode the updated resource
pub async fn put_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    log::debug!("PUT {}", url);
    send_json(Request::put(url), body).await
}

/// DELETE `url`; the body of a successful response is ignored
pub async fn delete(url: &str) -> Result<(), ApiError> {
    log::debug!("DELETE {}", url);
    let response = Request::delete(url)
        .header("Accept", ACCEPT)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    check(response).await.map(|_| ())
}
