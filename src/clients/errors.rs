//! HTTP-level error types.
//!
//! - [`HttpResponseError`]: a non-2xx response (the transport error)
//! - [`InvalidHttpRequestError`]: a request rejected before it is sent
//! - [`HttpError`]: unified error type for everything the transport can fail with
//!
//! # Example
//!
//! ```rust,ignore
//! use cdn_api::clients::{HttpClient, HttpError};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when a request receives a non-successful response.
///
/// The status code is preserved untouched so that a resource module can
/// remap specific codes one layer up.
///
/// # Example
///
/// ```rust
/// use cdn_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: "Record not found".to_string(),
///     request_id: Some("abc-123".to_string()),
/// };
///
/// assert_eq!(error.to_string(), "HTTP 404: Record not found");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Best-effort message decoded from the response body.
    pub message: String,
    /// Request identifier echoed by the API, if any.
    pub request_id: Option<String>,
}

/// Error returned when a request fails validation before being sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// Request paths are absolute (`/service/...`).
    #[error("Request path '{path}' must start with '/'.")]
    RelativePath {
        /// The rejected path.
        path: String,
    },

    /// A header name or value that cannot be sent.
    #[error("Invalid header '{name}'.")]
    InvalidHeader {
        /// The rejected header name.
        name: String,
    },

    /// GET requests never carry a body.
    #[error("Cannot send a body with {method}.")]
    BodyNotAllowed {
        /// The HTTP method that was used.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx response.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network, TLS, or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code for response errors.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
};
