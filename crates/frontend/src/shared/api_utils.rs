//! API utilities for frontend-backend communication
//!
//! Every request goes through here so that URL building, the bearer token
//! and error decoding are handled the same way for reports, metadata and
//! mutations.

use crate::shared::config::config;
use crate::system::auth::storage;
use contracts::shared::api_error::ErrorPayload;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("HTTP error: {status}")]
    Http {
        status: u16,
        /// Backend-provided message, shown to the user as is
        message: Option<String>,
    },
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("failed to serialize request: {0}")]
    Serialize(String),
    #[error("missing privilege: {privilege}")]
    PermissionDenied { privilege: String },
}

impl ApiError {
    /// Text for notifications: the backend message when there is one,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Http {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::PermissionDenied { .. } => {
                "You do not have permission to perform this action.".to_string()
            }
            _ => fallback.to_string(),
        }
    }

    /// Build an HTTP error from a non-2xx status and its raw body.
    pub fn from_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorPayload>(body)
            .ok()
            .and_then(|payload| payload.text().map(str::to_string));
        ApiError::Http { status, message }
    }
}

/// Build a full API URL from a path relative to the configured base
///
/// # Example
/// ```ignore
/// let url = api_url("/projects/12");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&config().api.base_path, path)
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_body(status, &body))
}

/// GET returning the raw JSON document.
pub async fn get_json(path: &str) -> Result<Value, ApiError> {
    get(path).await
}

/// GET decoding into `T`.
pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = with_auth(Request::get(&api_url(path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    check(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Post,
    Put,
}

/// POST/PUT with a JSON body, returning the persisted entity.
pub async fn send_json<B, T>(method: Method, path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let url = api_url(path);
    let builder = match method {
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
    };

    let response = with_auth(builder)
        .json(body)
        .map_err(|e| ApiError::Serialize(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    check(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// DELETE; the response body is ignored.
pub async fn delete(path: &str) -> Result<(), ApiError> {
    let response = with_auth(Request::delete(&api_url(path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("/api", "/projects"), "/api/projects");
        assert_eq!(join_url("/api/", "/projects"), "/api/projects");
        assert_eq!(join_url("https://x/api", "projects/1"), "https://x/api/projects/1");
    }

    #[test]
    fn test_backend_message_is_kept() {
        let err = ApiError::from_body(409, r#"{"message":"Project code already exists"}"#);
        assert_eq!(
            err,
            ApiError::Http {
                status: 409,
                message: Some("Project code already exists".into())
            }
        );
        assert_eq!(
            err.user_message("Failed to save project"),
            "Project code already exists"
        );
    }

    #[test]
    fn test_generic_fallback_without_message() {
        let err = ApiError::from_body(500, "<html>Internal Server Error</html>");
        assert_eq!(err.user_message("Failed to save project"), "Failed to save project");

        let err = ApiError::Network("offline".into());
        assert_eq!(err.user_message("Failed to delete"), "Failed to delete");
    }
}
