//! Validated newtype wrappers for configuration values.

use crate::error::ConfigError;
use std::fmt;

/// The API host used when none is configured.
pub const DEFAULT_API_HOST: &str = "https://api.fastly.com";

/// A validated API host URL.
///
/// The URL must carry a scheme and a non-empty host. An optional path
/// prefix is kept (useful behind a proxy); a trailing slash is dropped so
/// request paths, which always begin with `/`, can be appended directly.
/// Query strings and fragments are rejected.
///
/// # Example
///
/// ```rust
/// use cdn_api::HostUrl;
///
/// let url = HostUrl::new("https://api.example.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.example.com");
/// assert_eq!(url.host_name(), Some("api.example.com"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = url.into();
        let url = raw.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidHostUrl { url: raw.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() || url.contains(['?', '#']) {
            return Err(invalid());
        }

        // Host ends at port, path, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let host = &self.url[self.host_start..self.host_end];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }
}

impl Default for HostUrl {
    fn default() -> Self {
        let scheme_end = DEFAULT_API_HOST.find("://").unwrap_or_default();
        Self {
            url: DEFAULT_API_HOST.to_string(),
            scheme_end,
            host_start: scheme_end + 3,
            host_end: DEFAULT_API_HOST.len(),
        }
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Debug for HostUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HostUrl").field(&self.url).finish()
    }
}

impl fmt::Display for HostUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
