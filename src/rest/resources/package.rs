//! Compute package resource.
//!
//! A service version carries at most one deployable package. Uploads are
//! `multipart/form-data` with the archive in a part named `package`; the
//! archive can come from a local path or from bytes already in memory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, HttpResponse, RequestBody};
use crate::rest::decode::{lenient, timestamp};
use crate::rest::encode::{self, FileSource};
use crate::rest::{
    decode_json, require, require_version, version_path, ApiError, EncodeError, Operation,
    ValidationError,
};

/// Name of the multipart part carrying the archive.
pub const PACKAGE_PART: &str = "package";

/// Metadata extracted from an uploaded package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageMetadata {
    /// Package name from its manifest.
    pub name: Option<String>,
    /// Description from its manifest.
    pub description: Option<String>,
    /// Authors from its manifest.
    #[serde(default)]
    pub authors: Vec<String>,
    /// Source language.
    pub language: Option<String>,
    /// Archive size in bytes.
    #[serde(default, with = "lenient")]
    pub size: Option<u64>,
    /// Hash of the archive.
    pub hashsum: Option<String>,
    /// Hash of the archive's file contents.
    pub files_hash: Option<String>,
}

/// A package as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Package identifier.
    pub id: Option<String>,
    /// Alphanumeric service identifier.
    pub service_id: Option<String>,
    /// Service version number.
    #[serde(rename = "version", default, with = "lenient")]
    pub service_version: Option<u32>,
    /// Manifest metadata.
    pub metadata: Option<PackageMetadata>,
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

/// Fetches the package of a service version.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetPackageInput {
    /// Alphanumeric service identifier (required).
    pub service_id: String,
    /// Service version number (required).
    pub service_version: u32,
}

impl Operation for GetPackageInput {
    type Output = Package;
    const METHOD: HttpMethod = HttpMethod::Get;
    const NAME: &'static str = "GetPackage";

    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.service_id, ValidationError::MissingServiceId)?;
        require_version(self.service_version)
    }

    fn path(&self) -> String {
        version_path(&self.service_id, self.service_version, &["package"])
    }

    fn decode(response: &HttpResponse) -> Result<Package, ApiError> {
        decode_json(response, Self::NAME)
    }
}

/// Uploads a package archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdatePackageInput<'a> {
    /// Alphanumeric service identifier (required).
    #[serde(skip)]
    pub service_id: String,
    /// Service version number (required).
    #[serde(skip)]
    pub service_version: u32,
    /// The archive (required).
    #[serde(skip)]
    pub source: Option<FileSource<'a>>,
}

impl Operation for UpdatePackageInput<'_> {
    type Output = Package;
    const METHOD: HttpMethod = HttpMethod::Put;
    const NAME: &'static str = "UpdatePackage";

    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.service_id, ValidationError::MissingServiceId)?;
        require_version(self.service_version)?;
        match &self.source {
            Some(source) if !source.is_empty() => Ok(()),
            _ => Err(ValidationError::MissingPackage),
        }
    }

    fn path(&self) -> String {
        version_path(&self.service_id, self.service_version, &["package"])
    }

    async fn body(&self) -> Result<Option<RequestBody>, EncodeError> {
        let Some(source) = &self.source else {
            return Ok(None);
        };
        encode::multipart(self, PACKAGE_PART, source).await.map(Some)
    }

    fn decode(response: &HttpResponse) -> Result<Package, ApiError> {
        decode_json(response, Self::NAME)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn upload(source: Option<FileSource<'_>>) -> UpdatePackageInput<'_> {
        UpdatePackageInput {
            service_id: "abc".to_string(),
            service_version: 2,
            source,
        }
    }

    #[test]
    fn test_upload_requires_a_source() {
        assert_eq!(upload(None).validate(), Err(ValidationError::MissingPackage));
        assert_eq!(
            upload(Some(FileSource::Memory(&[]))).validate(),
            Err(ValidationError::MissingPackage)
        );
        assert_eq!(
            upload(Some(FileSource::Path(PathBuf::new()))).validate(),
            Err(ValidationError::MissingPackage)
        );
        assert_eq!(upload(Some(FileSource::Memory(b"tgz"))).validate(), Ok(()));
    }

    #[test]
    fn test_validation_order_service_id_first() {
        let input = UpdatePackageInput {
            service_id: String::new(),
            service_version: 0,
            source: None,
        };
        assert_eq!(input.validate(), Err(ValidationError::MissingServiceId));
    }

    #[test]
    fn test_decode_package_metadata() {
        let body = r#"{
            "id": "pkg1",
            "service_id": "abc",
            "version": 2,
            "metadata": {"name": "edge-app", "authors": ["dev@example.com"], "size": "2048", "language": "rust"},
            "created_at": "2024-02-01T12:00:00Z",
            "updated_at": "2024-02-01 12:05:00"
        }"#;
        let response = HttpResponse::new(200, std::collections::HashMap::new(), body);
        let package = GetPackageInput::decode(&response).unwrap();
        let metadata = package.metadata.unwrap();
        assert_eq!(metadata.name.as_deref(), Some("edge-app"));
        assert_eq!(metadata.size, Some(2048));
        assert_eq!(metadata.authors.len(), 1);
        assert!(package.updated_at > package.created_at);
    }
}
