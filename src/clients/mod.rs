//! HTTP transport for the configuration API.
//!
//! # Overview
//!
//! - [`RestClient`]: runs typed operations and hands out paginators
//! - [`HttpClient`]: the async HTTP client, one round trip per call
//! - [`HttpRequest`]: a request to be sent to the API
//! - [`HttpResponse`]: a response with its raw body and rate limit headers
//! - [`RequestOptions`]: per-call headers and query parameters
//! - [`RequestBody`] / [`DataType`]: form, multipart, or JSON bodies
//! - [`HttpError`]: everything the transport can fail with
//!
//! # Example
//!
//! ```rust,ignore
//! use cdn_api::clients::{HttpClient, HttpMethod, HttpRequest};
//! use cdn_api::ClientConfig;
//!
//! let client = HttpClient::new(&ClientConfig::default())?;
//! let request = HttpRequest::builder(HttpMethod::Get, "/service").build()?;
//! let response = client.request(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! None. A non-2xx response is returned as [`HttpError::Response`] with the
//! status code intact, and the caller decides whether to retry.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod rest;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{
    DataType, HttpMethod, HttpRequest, HttpRequestBuilder, RequestBody, RequestOptions,
};
pub use http_response::{HttpResponse, RateLimit};
pub use rest::RestClient;
