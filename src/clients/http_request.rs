//! HTTP request types.
//!
//! [`HttpRequest`] is built with a fluent builder and validated before it is
//! sent. [`RequestOptions`] carries the caller's per-call headers and query
//! parameters.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the configuration API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Read a resource or a listing.
    Get,
    /// Create a resource.
    Post,
    /// Replace or update a resource.
    Put,
    /// Partially update a resource.
    Patch,
    /// Remove a resource.
    Delete,
}

impl HttpMethod {
    /// Returns the method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wire codec of a request body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    /// `application/x-www-form-urlencoded`.
    Form,
    /// `multipart/form-data`; the boundary is appended by the transport.
    Multipart,
    /// `application/json`.
    Json,
}

impl DataType {
    /// Returns the MIME type string for this data type.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Form => "application/x-www-form-urlencoded",
            Self::Multipart => "multipart/form-data",
            Self::Json => "application/json",
        }
    }
}

/// An encoded request body.
///
/// Produced by the [`encode`](crate::rest::encode) module; the multipart
/// variant owns any file handle the encoder opened, so the handle is closed
/// whenever the body is dropped.
#[derive(Debug)]
pub enum RequestBody {
    /// A url-encoded form, already serialized.
    Form(String),
    /// A JSON document.
    Json(serde_json::Value),
    /// A multipart form with text parts and a file part.
    Multipart(reqwest::multipart::Form),
}

impl RequestBody {
    /// Returns the codec of this body.
    #[must_use]
    pub const fn data_type(&self) -> DataType {
        match self {
            Self::Form(_) => DataType::Form,
            Self::Json(_) => DataType::Json,
            Self::Multipart(_) => DataType::Multipart,
        }
    }
}

/// Headers and query parameters attached to a single call.
///
/// Per-call headers override client default headers with the same name.
/// Query parameters keep their insertion order.
///
/// # Example
///
/// ```rust
/// use cdn_api::clients::RequestOptions;
///
/// let options = RequestOptions::new()
///     .header("Fastly-Key", "token")
///     .param("filter[status]", "active");
///
/// assert_eq!(options.params, vec![("filter[status]".to_string(), "active".to_string())]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Extra request headers.
    pub headers: HashMap<String, String>,
    /// Extra query parameters, in order.
    pub params: Vec<(String, String)>,
}

impl RequestOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.headers.retain(|existing, _| !existing.eq_ignore_ascii_case(&name));
        self.headers.insert(name, value.into());
        self
    }

    /// Adds a query parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }
}

/// Header names compare case-insensitively; the new value replaces any match.
fn insert_header(headers: &mut HashMap<String, String>, name: String, value: String) {
    headers.retain(|existing, _| !existing.eq_ignore_ascii_case(&name));
    headers.insert(name, value);
}

/// An HTTP request to be sent to the API.
///
/// # Example
///
/// ```rust
/// use cdn_api::clients::{HttpRequest, HttpMethod, RequestBody};
///
/// let request = HttpRequest::builder(HttpMethod::Put, "/service/abc/version/3/cache_settings/static")
///     .body(RequestBody::Form("ttl=300".to_string()))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.path, "/service/abc/version/3/cache_settings/static");
/// ```
#[derive(Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The absolute, already escaped path for this request.
    pub path: String,
    /// The request body, if any.
    pub body: Option<RequestBody>,
    /// Query parameters to append to the URL, in order.
    pub query: Vec<(String, String)>,
    /// Additional headers to include in the request.
    pub extra_headers: HashMap<String, String>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `path` does not start with `/`
    /// - a GET request carries a body
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if !self.path.starts_with('/') {
            return Err(InvalidHttpRequestError::RelativePath {
                path: self.path.clone(),
            });
        }

        if self.http_method == HttpMethod::Get && self.body.is_some() {
            return Err(InvalidHttpRequestError::BodyNotAllowed {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<RequestBody>,
    query: Vec<(String, String)>,
    extra_headers: HashMap<String, String>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            query: Vec::new(),
            extra_headers: HashMap::new(),
        }
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets the request body when one is present.
    #[must_use]
    pub fn maybe_body(mut self, body: Option<RequestBody>) -> Self {
        self.body = body;
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        insert_header(&mut self.extra_headers, key.into(), value.into());
        self
    }

    /// Merges per-call options: headers override, parameters append.
    #[must_use]
    pub fn options(mut self, options: &RequestOptions) -> Self {
        for (key, value) in &options.headers {
            insert_header(&mut self.extra_headers, key.clone(), value.clone());
        }
        self.query.extend(options.params.iter().cloned());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            query: self.query,
            extra_headers: self.extra_headers,
        };
        request.verify()?;
        Ok(request)
    }
}
