//! REST API Client
//!
//! gloo-net bindings to the remote project store, organized by domain.

mod auth;
mod projects;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

// Re-export all public items
pub use auth::*;
pub use projects::*;

/// Store URL used when no override is baked in at build time
const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Base URL of the remote project store
pub fn api_base() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or(DEFAULT_API_BASE)
}

/// Failures crossing the client/store boundary
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The request never completed
    #[error("request failed: {0}")]
    Network(String),
    /// HTTP 401; the session credential is missing or no longer valid
    #[error("{0}")]
    Unauthorized(String),
    /// Any other non-success status, with the store's message when it sent one
    #[error("{message}")]
    Server { status: u16, message: String },
    /// The response body did not match the expected shape
    #[error("unreadable response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// Error body shape the store uses for failures
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Map a non-success response to an ApiError
async fn error_from_response(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => format!("request failed with status {status}"),
    };
    if status == 401 {
        ApiError::Unauthorized(message)
    } else {
        ApiError::Server { status, message }
    }
}

/// Decode a JSON response, converting non-success statuses first
pub(crate) async fn decode<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(error_from_response(resp).await);
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Check a response where only the status matters
pub(crate) async fn expect_ok(resp: gloo_net::http::Response) -> Result<(), ApiError> {
    if !resp.ok() {
        return Err(error_from_response(resp).await);
    }
    Ok(())
}
