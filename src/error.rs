//! Configuration error types.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that a
//! bad host URL or header is rejected when the client is built, not when the
//! first request goes out.
//!
//! # Example
//!
//! ```rust
//! use cdn_api::{ConfigError, HostUrl};
//!
//! let result = HostUrl::new("api.example.com");
//! assert!(matches!(result, Err(ConfigError::InvalidHostUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while building a [`ClientConfig`](crate::ClientConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.example.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A default header name is not a valid HTTP header name.
    #[error("Invalid header name '{name}'.")]
    InvalidHeaderName {
        /// The rejected header name.
        name: String,
    },

    /// A default header value contains characters not allowed in HTTP headers.
    #[error("Invalid value for header '{name}'. Header values must be visible ASCII.")]
    InvalidHeaderValue {
        /// The header whose value was rejected.
        name: String,
    },
}
