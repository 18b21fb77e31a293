//! HTTP client for API communication.
//!
//! [`HttpClient`] sends exactly one request per call. It performs no retries:
//! retry policy belongs to the caller.

use std::collections::HashMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};

use crate::clients::errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
use crate::clients::http_request::{HttpMethod, HttpRequest, RequestBody};
use crate::clients::http_response::HttpResponse;
use crate::config::ClientConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// A remaining-request count at or below this logs a warning.
const RATE_LIMIT_WARN_THRESHOLD: u32 = 10;

/// HTTP client for making requests to the API.
///
/// The client handles:
/// - URL construction from the configured API host
/// - Default headers including User-Agent and caller-supplied headers
/// - Classification of non-2xx responses into [`HttpResponseError`]
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`. The inner connection pool is shared by all
/// calls, so one client can serve concurrent tasks.
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_uri: String,
    default_headers: HeaderMap,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the TLS backend cannot be initialized,
    /// or [`HttpError::InvalidRequest`] if a configured header is malformed.
    pub fn new(config: &ClientConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}cdn-api-rust/{SDK_VERSION}");

        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, header_value(USER_AGENT.as_str(), &user_agent)?);
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        for (key, value) in config.default_headers() {
            let (name, value) = header_pair(key, value)?;
            default_headers.insert(name, value);
        }

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_uri: config.api_host().as_ref().to_string(),
            default_headers,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// Sends one request and classifies the response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs (`Network`)
    /// - A non-2xx response is received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}", self.base_uri, request.path);

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Patch => self.client.patch(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        // header names compare case-insensitively, so `insert` replaces a default
        let mut headers = self.default_headers.clone();
        for (key, value) in &request.extra_headers {
            let (name, value) = header_pair(key, value)?;
            headers.insert(name, value);
        }
        req_builder = req_builder.headers(headers);

        if !request.query.is_empty() {
            req_builder = req_builder.query(&request.query);
        }

        if let Some(body) = request.body {
            let content_type = body.data_type().as_content_type();
            req_builder = match body {
                RequestBody::Form(form) => req_builder.header(CONTENT_TYPE, content_type).body(form),
                RequestBody::Json(json) => req_builder
                    .header(CONTENT_TYPE, content_type)
                    .body(json.to_string()),
                // reqwest writes the boundary into Content-Type itself
                RequestBody::Multipart(form) => req_builder.multipart(form),
            };
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        let response = HttpResponse::new(code, res_headers, body);

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            status = code,
            "API request completed"
        );

        if let Some(limit) = response.rate_limit {
            if limit.remaining <= RATE_LIMIT_WARN_THRESHOLD {
                tracing::warn!(
                    remaining = limit.remaining,
                    reset = ?limit.reset,
                    "API rate limit nearly exhausted"
                );
            }
        }

        if response.is_ok() {
            return Ok(response);
        }

        Err(HttpError::Response(HttpResponseError {
            code,
            message: error_message(code, &response.body),
            request_id: response.request_id().map(String::from),
        }))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

fn header_pair(
    name: &str,
    value: &str,
) -> Result<(HeaderName, HeaderValue), InvalidHttpRequestError> {
    let header = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
        InvalidHttpRequestError::InvalidHeader {
            name: name.to_string(),
        }
    })?;
    Ok((header, header_value(name, value)?))
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, InvalidHttpRequestError> {
    HeaderValue::from_str(value).map_err(|_| InvalidHttpRequestError::InvalidHeader {
        name: name.to_string(),
    })
}

/// Extracts a human readable message from an error response body.
///
/// Understands the API's `{"msg", "detail"}` shape, JSON:API style
/// `{"errors": [{"title", "detail"}]}`, and plain `error` / `message`
/// fields. Falls back to the raw body, then to the status reason phrase.
pub(crate) fn error_message(code: u16, body: &str) -> String {
    let trimmed = body.trim();
    let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) else {
        return if trimmed.is_empty() {
            reason_phrase(code)
        } else {
            trimmed.to_string()
        };
    };

    let text = |key: &str, from: &serde_json::Value| {
        from.get(key)
            .and_then(serde_json::Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };
    let join = |head: Option<String>, tail: Option<String>| match (head, tail) {
        (Some(head), Some(tail)) => Some(format!("{head}: {tail}")),
        (head, tail) => head.or(tail),
    };

    if let Some(message) = join(text("msg", &value), text("detail", &value)) {
        return message;
    }

    if let Some(errors) = value.get("errors").and_then(serde_json::Value::as_array) {
        let messages: Vec<String> = errors
            .iter()
            .filter_map(|e| join(text("title", e), text("detail", e)))
            .collect();
        if !messages.is_empty() {
            return messages.join("; ");
        }
    }

    text("error", &value)
        .or_else(|| text("message", &value))
        .unwrap_or_else(|| {
            if value.as_object().is_some_and(serde_json::Map::is_empty) {
                reason_phrase(code)
            } else {
                trimmed.to_string()
            }
        })
}

fn reason_phrase(code: u16) -> String {
    reqwest::StatusCode::from_u16(code)
        .ok()
        .and_then(|status| status.canonical_reason())
        .map_or_else(|| format!("HTTP status {code}"), str::to_string)
}
