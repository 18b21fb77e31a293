//! Edge rate limiter resource.
//!
//! Rate limiters are created and listed under a service version, but read
//! and deleted through a flat top-level collection keyed by opaque id:
//!
//! ```text
//! POST,GET /service/{service_id}/version/{service_version}/rate-limiters
//! GET,DEL  /rate-limiters/{id}
//! ```
//!
//! Collection settings such as `http_methods` go on the wire as repeated
//! `http_methods[]=...` pairs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, HttpResponse, RequestBody};
use crate::rest::decode::{lenient, timestamp};
use crate::rest::{
    build_path, decode_json, decode_status, encode, require, require_version, sort, version_path,
    ApiError, EncodeError, Operation, ValidationError,
};

/// What happens when a client exceeds the limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateLimiterAction {
    /// Answer with a custom response.
    Response,
    /// Answer with a named response object.
    ResponseObject,
    /// Only log the violation.
    LogOnly,
}

/// Custom response sent to limited clients.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimiterResponse {
    /// Body content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Content type of the body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// HTTP status code.
    #[serde(default, with = "lenient", skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

/// An edge rate limiter as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimiter {
    /// Opaque identifier.
    pub id: Option<String>,
    /// Human readable name.
    pub name: Option<String>,
    /// Action on violation.
    pub action: Option<RateLimiterAction>,
    /// Variables that identify a client.
    #[serde(default)]
    pub client_key: Vec<String>,
    /// Methods the limiter counts.
    #[serde(default)]
    pub http_methods: Vec<String>,
    /// Logging endpoint type for `log_only`.
    pub logger_type: Option<String>,
    /// Minutes a violator stays penalized.
    #[serde(default, with = "lenient")]
    pub penalty_box_duration: Option<u32>,
    /// Custom response.
    pub response: Option<RateLimiterResponse>,
    /// Name of the response object.
    pub response_object_name: Option<String>,
    /// Requests per second allowed.
    #[serde(default, with = "lenient")]
    pub rps_limit: Option<u32>,
    /// Counting window in seconds.
    #[serde(default, with = "lenient")]
    pub window_size: Option<u32>,
    /// Alphanumeric service identifier.
    pub service_id: Option<String>,
    /// Service version number.
    #[serde(rename = "version", default, with = "lenient")]
    pub service_version: Option<u32>,
    /// Creation time.
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
    /// Deletion time.
    #[serde(default, with = "timestamp::option")]
    pub deleted_at: Option<DateTime<Utc>>,
    /// Last update time.
    #[serde(default, with = "timestamp::option")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Lists rate limiters of a service version, sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListRateLimitersInput {
    /// Alphanumeric service identifier (required).
    pub service_id: String,
    /// Service version number (required).
    pub service_version: u32,
}

impl Operation for ListRateLimitersInput {
    type Output = Vec<RateLimiter>;
    const METHOD: HttpMethod = HttpMethod::Get;
    const NAME: &'static str = "ListRateLimiters";

    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.service_id, ValidationError::MissingServiceId)?;
        require_version(self.service_version)
    }

    fn path(&self) -> String {
        version_path(&self.service_id, self.service_version, &["rate-limiters"])
    }

    fn decode(response: &HttpResponse) -> Result<Vec<RateLimiter>, ApiError> {
        let mut limiters: Vec<RateLimiter> = decode_json(response, Self::NAME)?;
        limiters.sort_by(|a, b| sort::by_name(a.name.as_deref(), b.name.as_deref()));
        Ok(limiters)
    }
}

/// Creates a rate limiter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateRateLimiterInput {
    /// Alphanumeric service identifier (required).
    #[serde(skip)]
    pub service_id: String,
    /// Service version number (required).
    #[serde(skip)]
    pub service_version: u32,
    /// Human readable name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Action on violation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<RateLimiterAction>,
    /// Variables that identify a client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_key: Option<Vec<String>>,
    /// Methods to count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_methods: Option<Vec<String>>,
    /// Logging endpoint type for `log_only`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logger_type: Option<String>,
    /// Minutes a violator stays penalized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penalty_box_duration: Option<u32>,
    /// Custom response, sent as `response[...]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<RateLimiterResponse>,
    /// Name of the response object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_object_name: Option<String>,
    /// Requests per second allowed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rps_limit: Option<u32>,
    /// Counting window in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_size: Option<u32>,
}

impl Operation for CreateRateLimiterInput {
    type Output = RateLimiter;
    const METHOD: HttpMethod = HttpMethod::Post;
    const NAME: &'static str = "CreateRateLimiter";

    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.service_id, ValidationError::MissingServiceId)?;
        require_version(self.service_version)
    }

    fn path(&self) -> String {
        version_path(&self.service_id, self.service_version, &["rate-limiters"])
    }

    async fn body(&self) -> Result<Option<RequestBody>, EncodeError> {
        encode::form(self).map(Some)
    }

    fn decode(response: &HttpResponse) -> Result<RateLimiter, ApiError> {
        decode_json(response, Self::NAME)
    }
}

/// Fetches a rate limiter by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetRateLimiterInput {
    /// Opaque rate limiter id (required).
    pub id: String,
}

impl Operation for GetRateLimiterInput {
    type Output = RateLimiter;
    const METHOD: HttpMethod = HttpMethod::Get;
    const NAME: &'static str = "GetRateLimiter";

    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.id, ValidationError::MissingId)
    }

    fn path(&self) -> String {
        build_path(&["rate-limiters", self.id.as_str()])
    }

    fn decode(response: &HttpResponse) -> Result<RateLimiter, ApiError> {
        decode_json(response, Self::NAME)
    }
}

/// Deletes a rate limiter by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteRateLimiterInput {
    /// Opaque rate limiter id (required).
    pub id: String,
}

impl Operation for DeleteRateLimiterInput {
    type Output = ();
    const METHOD: HttpMethod = HttpMethod::Delete;
    const NAME: &'static str = "DeleteRateLimiter";

    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.id, ValidationError::MissingId)
    }

    fn path(&self) -> String {
        build_path(&["rate-limiters", self.id.as_str()])
    }

    fn decode(response: &HttpResponse) -> Result<(), ApiError> {
        decode_status(response)
    }
}
