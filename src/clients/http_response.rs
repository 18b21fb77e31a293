//! HTTP response types.
//!
//! [`HttpResponse`] keeps the raw body text; decoding into typed outputs is
//! the job of [`rest::decode`](crate::rest::decode).

use std::collections::HashMap;

use chrono::{DateTime, Utc};

/// Rate limit information parsed from the `Fastly-RateLimit-Remaining`
/// and `Fastly-RateLimit-Reset` headers.
///
/// # Example
///
/// ```rust
/// use cdn_api::clients::RateLimit;
///
/// let limit = RateLimit::parse("42", Some("1700000000")).unwrap();
/// assert_eq!(limit.remaining, 42);
/// assert_eq!(limit.reset.unwrap().timestamp(), 1_700_000_000);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests left in the current window.
    pub remaining: u32,
    /// When the window resets, if the API said so.
    pub reset: Option<DateTime<Utc>>,
}

impl RateLimit {
    /// Parses the header values. Returns `None` if `remaining` is not a number.
    #[must_use]
    pub fn parse(remaining: &str, reset: Option<&str>) -> Option<Self> {
        let remaining = remaining.trim().parse().ok()?;
        let reset = reset
            .and_then(|value| value.trim().parse::<i64>().ok())
            .and_then(|secs| DateTime::from_timestamp(secs, 0));

        Some(Self { remaining, reset })
    }
}

/// An HTTP response from the API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
    /// Rate limit information, if the API reported it.
    pub rate_limit: Option<RateLimit>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing rate limit headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: impl Into<String>) -> Self {
        let first = |name: &str| {
            headers
                .get(name)
                .and_then(|values| values.first())
                .map(String::as_str)
        };

        let rate_limit = first("fastly-ratelimit-remaining")
            .and_then(|remaining| RateLimit::parse(remaining, first("fastly-ratelimit-reset")));

        Self {
            code,
            headers,
            body: body.into(),
            rate_limit,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the request identifier, if present.
    ///
    /// Checks `Fastly-Request-Id` first, then `X-Request-Id`.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        ["fastly-request-id", "x-request-id"]
            .iter()
            .find_map(|name| self.headers.get(*name).and_then(|values| values.first()))
            .map(String::as_str)
    }
}
