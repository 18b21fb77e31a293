//! Cache setting resource.
//!
//! Cache settings override the TTL and caching action for requests that
//! match a condition. They belong to one version of a service:
//!
//! ```text
//! /service/{service_id}/version/{service_version}/cache_settings[/{name}]
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use cdn_api::rest::resources::cache_setting::*;
//!
//! let updated = client
//!     .execute(&UpdateCacheSettingInput {
//!         service_id: "SU1Z0isxPaozGVKXdv0eY".to_string(),
//!         service_version: 2,
//!         name: "static".to_string(),
//!         new_name: Some("static-assets".to_string()),
//!         ttl: Some(0),
//!         ..Default::default()
//!     })
//!     .await?;
//! assert_eq!(updated.name.as_deref(), Some("static-assets"));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, HttpResponse, RequestBody};
use crate::rest::decode::{lenient, timestamp};
use crate::rest::{
    decode_json, decode_status, encode, require, require_version, sort, version_path, ApiError,
    EncodeError, Operation, ValidationError,
};

/// What the edge does with a matching request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheSettingAction {
    /// Cache the response.
    Cache,
    /// Do not cache.
    Pass,
    /// Restart request processing.
    Restart,
}

/// A cache setting as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheSetting {
    /// The setting's name, unique within the service version.
    pub name: Option<String>,

    /// Action taken for matching requests.
    pub action: Option<CacheSettingAction>,

    /// Name of the cache condition that selects requests.
    pub cache_condition: Option<String>,

    /// Seconds to serve stale content while revalidating.
    #[serde(default, with = "lenient")]
    pub stale_ttl: Option<u32>,

    /// Seconds to cache the response.
    #[serde(default, with = "lenient")]
    pub ttl: Option<u32>,

    /// Alphanumeric service identifier.
    pub service_id: Option<String>,

    /// Service version number.
    #[serde(rename = "version", default, with = "lenient")]
    pub service_version: Option<u32>,

    /// Creation time.
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,

    /// Deletion time, if deleted.
    #[serde(default, with = "timestamp::option")]
    pub deleted_at: Option<DateTime<Utc>>,

    /// Last update time.
    #[serde(default, with = "timestamp::option")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Lists the cache settings of a service version, sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCacheSettingsInput {
    /// Alphanumeric service identifier (required).
    pub service_id: String,
    /// Service version number (required).
    pub service_version: u32,
}

impl Operation for ListCacheSettingsInput {
    type Output = Vec<CacheSetting>;
    const METHOD: HttpMethod = HttpMethod::Get;
    const NAME: &'static str = "ListCacheSettings";

    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.service_id, ValidationError::MissingServiceId)?;
        require_version(self.service_version)
    }

    fn path(&self) -> String {
        version_path(&self.service_id, self.service_version, &["cache_settings"])
    }

    fn decode(response: &HttpResponse) -> Result<Vec<CacheSetting>, ApiError> {
        let mut settings: Vec<CacheSetting> = decode_json(response, Self::NAME)?;
        settings.sort_by(|a, b| sort::by_name(a.name.as_deref(), b.name.as_deref()));
        Ok(settings)
    }
}

/// Creates a cache setting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateCacheSettingInput {
    /// Alphanumeric service identifier (required).
    #[serde(skip)]
    pub service_id: String,

    /// Service version number (required).
    #[serde(skip)]
    pub service_version: u32,

    /// Action taken for matching requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<CacheSettingAction>,

    /// Name of the cache condition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_condition: Option<String>,

    /// Name for the new setting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Seconds to serve stale content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stale_ttl: Option<u32>,

    /// Seconds to cache.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

impl Operation for CreateCacheSettingInput {
    type Output = CacheSetting;
    const METHOD: HttpMethod = HttpMethod::Post;
    const NAME: &'static str = "CreateCacheSetting";

    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.service_id, ValidationError::MissingServiceId)?;
        require_version(self.service_version)
    }

    fn path(&self) -> String {
        version_path(&self.service_id, self.service_version, &["cache_settings"])
    }

    async fn body(&self) -> Result<Option<RequestBody>, EncodeError> {
        encode::form(self).map(Some)
    }

    fn decode(response: &HttpResponse) -> Result<CacheSetting, ApiError> {
        decode_json(response, Self::NAME)
    }
}

/// Fetches one cache setting by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetCacheSettingInput {
    /// Alphanumeric service identifier (required).
    pub service_id: String,
    /// Service version number (required).
    pub service_version: u32,
    /// Name of the setting (required).
    pub name: String,
}

impl Operation for GetCacheSettingInput {
    type Output = CacheSetting;
    const METHOD: HttpMethod = HttpMethod::Get;
    const NAME: &'static str = "GetCacheSetting";

    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.service_id, ValidationError::MissingServiceId)?;
        require_version(self.service_version)?;
        require(&self.name, ValidationError::MissingName)
    }

    fn path(&self) -> String {
        version_path(
            &self.service_id,
            self.service_version,
            &["cache_settings", &self.name],
        )
    }

    fn decode(response: &HttpResponse) -> Result<CacheSetting, ApiError> {
        decode_json(response, Self::NAME)
    }
}

/// Updates a cache setting. `new_name` renames it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateCacheSettingInput {
    /// Alphanumeric service identifier (required).
    #[serde(skip)]
    pub service_id: String,

    /// Service version number (required).
    #[serde(skip)]
    pub service_version: u32,

    /// Current name of the setting (required).
    #[serde(skip)]
    pub name: String,

    /// New name; sent as `name`.
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub new_name: Option<String>,

    /// Action taken for matching requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<CacheSettingAction>,

    /// Name of the cache condition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_condition: Option<String>,

    /// Seconds to serve stale content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stale_ttl: Option<u32>,

    /// Seconds to cache.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

impl Operation for UpdateCacheSettingInput {
    type Output = CacheSetting;
    const METHOD: HttpMethod = HttpMethod::Put;
    const NAME: &'static str = "UpdateCacheSetting";

    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.service_id, ValidationError::MissingServiceId)?;
        require_version(self.service_version)?;
        require(&self.name, ValidationError::MissingName)
    }

    fn path(&self) -> String {
        version_path(
            &self.service_id,
            self.service_version,
            &["cache_settings", &self.name],
        )
    }

    async fn body(&self) -> Result<Option<RequestBody>, EncodeError> {
        encode::form(self).map(Some)
    }

    fn decode(response: &HttpResponse) -> Result<CacheSetting, ApiError> {
        decode_json(response, Self::NAME)
    }
}

/// Deletes a cache setting. The API acknowledges with a status envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteCacheSettingInput {
    /// Alphanumeric service identifier (required).
    pub service_id: String,
    /// Service version number (required).
    pub service_version: u32,
    /// Name of the setting (required).
    pub name: String,
}

impl Operation for DeleteCacheSettingInput {
    type Output = ();
    const METHOD: HttpMethod = HttpMethod::Delete;
    const NAME: &'static str = "DeleteCacheSetting";

    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.service_id, ValidationError::MissingServiceId)?;
        require_version(self.service_version)?;
        require(&self.name, ValidationError::MissingName)
    }

    fn path(&self) -> String {
        version_path(
            &self.service_id,
            self.service_version,
            &["cache_settings", &self.name],
        )
    }

    fn decode(response: &HttpResponse) -> Result<(), ApiError> {
        decode_status(response)
    }
}
