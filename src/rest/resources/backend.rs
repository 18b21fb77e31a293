//! Backend resource.
//!
//! A backend is an origin server the edge fetches from. Backends belong to
//! a service version and are addressed by name. Boolean settings use the
//! legacy `"1"` / `"0"` encoding, see [`Compatibool`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, HttpResponse, RequestBody};
use crate::rest::decode::{lenient, timestamp};
use crate::rest::{
    decode_json, decode_status, encode, require, require_version, sort, version_path, ApiError,
    Compatibool, EncodeError, Operation, ValidationError,
};

/// An origin server as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backend {
    /// Unique name within the service version.
    pub name: Option<String>,
    /// Hostname or IP address of the origin.
    pub address: Option<String>,
    /// Whether the backend takes part in automatic load balancing.
    pub auto_loadbalance: Option<Compatibool>,
    /// Free-form comment.
    pub comment: Option<String>,
    /// Milliseconds to wait for a connection.
    #[serde(default, with = "lenient")]
    pub connect_timeout: Option<u32>,
    /// Milliseconds to wait for the first byte.
    #[serde(default, with = "lenient")]
    pub first_byte_timeout: Option<u32>,
    /// Name of the health check.
    pub healthcheck: Option<String>,
    /// Resolved hostname.
    pub hostname: Option<String>,
    /// Maximum concurrent connections.
    #[serde(default, with = "lenient")]
    pub max_conn: Option<u32>,
    /// Host header override.
    pub override_host: Option<String>,
    /// Port number.
    #[serde(default, with = "lenient")]
    pub port: Option<u16>,
    /// Hostname to match against the certificate.
    pub ssl_cert_hostname: Option<String>,
    /// Whether TLS is used to reach the origin.
    pub use_ssl: Option<Compatibool>,
    /// Load-balancing weight.
    #[serde(default, with = "lenient")]
    pub weight: Option<u32>,
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

/// Writable backend settings, shared by create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BackendSettings {
    /// Hostname or IP address of the origin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Automatic load balancing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_loadbalance: Option<Compatibool>,
    /// Free-form comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Milliseconds to wait for a connection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connect_timeout: Option<u32>,
    /// Milliseconds to wait for the first byte.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_byte_timeout: Option<u32>,
    /// Name of the health check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub healthcheck: Option<String>,
    /// Maximum concurrent connections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_conn: Option<u32>,
    /// Host header override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_host: Option<String>,
    /// Port number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// Hostname to match against the certificate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_cert_hostname: Option<String>,
    /// Use TLS to reach the origin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_ssl: Option<Compatibool>,
    /// Load-balancing weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

/// Lists backends, sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListBackendsInput {
    /// Alphanumeric service identifier (required).
    pub service_id: String,
    /// Service version number (required).
    pub service_version: u32,
}

impl Operation for ListBackendsInput {
    type Output = Vec<Backend>;
    const METHOD: HttpMethod = HttpMethod::Get;
    const NAME: &'static str = "ListBackends";

    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.service_id, ValidationError::MissingServiceId)?;
        require_version(self.service_version)
    }

    fn path(&self) -> String {
        version_path(&self.service_id, self.service_version, &["backend"])
    }

    fn decode(response: &HttpResponse) -> Result<Vec<Backend>, ApiError> {
        let mut backends: Vec<Backend> = decode_json(response, Self::NAME)?;
        backends.sort_by(|a, b| sort::by_name(a.name.as_deref(), b.name.as_deref()));
        Ok(backends)
    }
}

/// Creates a backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateBackendInput {
    /// Alphanumeric service identifier (required).
    #[serde(skip)]
    pub service_id: String,
    /// Service version number (required).
    #[serde(skip)]
    pub service_version: u32,
    /// Name for the new backend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Backend settings.
    #[serde(flatten)]
    pub settings: BackendSettings,
}

impl Operation for CreateBackendInput {
    type Output = Backend;
    const METHOD: HttpMethod = HttpMethod::Post;
    const NAME: &'static str = "CreateBackend";

    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.service_id, ValidationError::MissingServiceId)?;
        require_version(self.service_version)
    }

    fn path(&self) -> String {
        version_path(&self.service_id, self.service_version, &["backend"])
    }

    async fn body(&self) -> Result<Option<RequestBody>, EncodeError> {
        encode::form(self).map(Some)
    }

    fn decode(response: &HttpResponse) -> Result<Backend, ApiError> {
        decode_json(response, Self::NAME)
    }
}

/// Fetches one backend by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBackendInput {
    /// Alphanumeric service identifier (required).
    pub service_id: String,
    /// Service version number (required).
    pub service_version: u32,
    /// Backend name (required).
    pub name: String,
}

impl Operation for GetBackendInput {
    type Output = Backend;
    const METHOD: HttpMethod = HttpMethod::Get;
    const NAME: &'static str = "GetBackend";

    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.service_id, ValidationError::MissingServiceId)?;
        require_version(self.service_version)?;
        require(&self.name, ValidationError::MissingName)
    }

    fn path(&self) -> String {
        version_path(&self.service_id, self.service_version, &["backend", &self.name])
    }

    fn decode(response: &HttpResponse) -> Result<Backend, ApiError> {
        decode_json(response, Self::NAME)
    }
}

/// Updates a backend. `new_name` renames it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateBackendInput {
    /// Alphanumeric service identifier (required).
    #[serde(skip)]
    pub service_id: String,
    /// Service version number (required).
    #[serde(skip)]
    pub service_version: u32,
    /// Current backend name (required).
    #[serde(skip)]
    pub name: String,
    /// New name; sent as `name`.
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub new_name: Option<String>,
    /// Backend settings.
    #[serde(flatten)]
    pub settings: BackendSettings,
}

impl Operation for UpdateBackendInput {
    type Output = Backend;
    const METHOD: HttpMethod = HttpMethod::Put;
    const NAME: &'static str = "UpdateBackend";

    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.service_id, ValidationError::MissingServiceId)?;
        require_version(self.service_version)?;
        require(&self.name, ValidationError::MissingName)
    }

    fn path(&self) -> String {
        version_path(&self.service_id, self.service_version, &["backend", &self.name])
    }

    async fn body(&self) -> Result<Option<RequestBody>, EncodeError> {
        encode::form(self).map(Some)
    }

    fn decode(response: &HttpResponse) -> Result<Backend, ApiError> {
        decode_json(response, Self::NAME)
    }
}

/// Deletes a backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteBackendInput {
    /// Alphanumeric service identifier (required).
    pub service_id: String,
    /// Service version number (required).
    pub service_version: u32,
    /// Backend name (required).
    pub name: String,
}

impl Operation for DeleteBackendInput {
    type Output = ();
    const METHOD: HttpMethod = HttpMethod::Delete;
    const NAME: &'static str = "DeleteBackend";

    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.service_id, ValidationError::MissingServiceId)?;
        require_version(self.service_version)?;
        require(&self.name, ValidationError::MissingName)
    }

    fn path(&self) -> String {
        version_path(&self.service_id, self.service_version, &["backend", &self.name])
    }

    fn decode(response: &HttpResponse) -> Result<(), ApiError> {
        decode_status(response)
    }
}
