//! Configuration types for the API client.
//!
//! # Overview
//!
//! - [`ClientConfig`]: immutable settings shared by every request
//! - [`ClientConfigBuilder`]: fluent builder, validated at [`build`](ClientConfigBuilder::build)
//! - [`HostUrl`]: a validated API host URL
//!
//! Credentials are not modelled here. Callers that need an auth header pass
//! it through [`ClientConfigBuilder::default_header`] or per call through
//! [`RequestOptions`](crate::clients::RequestOptions); the client forwards
//! headers without interpreting them.
//!
//! # Example
//!
//! ```rust
//! use cdn_api::{ClientConfig, HostUrl};
//!
//! let config = ClientConfig::builder()
//!     .api_host(HostUrl::new("https://api.example.com").unwrap())
//!     .user_agent_prefix("deploy-bot/2.1")
//!     .default_header("Fastly-Key", "my-token")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_host().as_ref(), "https://api.example.com");
//! ```

mod newtypes;

pub use newtypes::{HostUrl, DEFAULT_API_HOST};

use std::collections::HashMap;

use reqwest::header::{HeaderName, HeaderValue};

use crate::error::ConfigError;

/// Settings shared by every request a client sends.
///
/// # Thread Safety
///
/// `ClientConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    api_host: HostUrl,
    user_agent_prefix: Option<String>,
    default_headers: HashMap<String, String>,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the API host.
    #[must_use]
    pub const fn api_host(&self) -> &HostUrl {
        &self.api_host
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the headers attached to every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// # Defaults
///
/// - `api_host`: [`DEFAULT_API_HOST`]
/// - `user_agent_prefix`: `None`
/// - `default_headers`: empty
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
    default_headers: Vec<(String, String)>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API host.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Adds a header sent with every request.
    ///
    /// A later call with the same name, compared case-insensitively,
    /// replaces the earlier value.
    #[must_use]
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Builds the [`ClientConfig`], validating header names and values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHeaderName`] or
    /// [`ConfigError::InvalidHeaderValue`] for headers `reqwest` would reject.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let mut default_headers: HashMap<String, String> =
            HashMap::with_capacity(self.default_headers.len());
        for (name, value) in self.default_headers {
            if HeaderName::from_bytes(name.as_bytes()).is_err() {
                return Err(ConfigError::InvalidHeaderName { name });
            }
            if HeaderValue::from_str(&value).is_err() {
                return Err(ConfigError::InvalidHeaderValue { name });
            }
            default_headers.retain(|existing, _| !existing.eq_ignore_ascii_case(&name));
            default_headers.insert(name, value);
        }

        Ok(ClientConfig {
            api_host: self.api_host.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
            default_headers,
        })
    }
}
