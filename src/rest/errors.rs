//! Error types for REST operations.
//!
//! Errors come in three phases:
//!
//! - **Pre-flight** [`ValidationError`]: a required field is missing. Raised
//!   before any I/O; one variant per required field, compared by kind.
//! - **Transport / codec** [`ApiError::Http`], [`ApiError::Encode`],
//!   [`ApiError::Decode`]: network failure, non-2xx status, or a body that
//!   could not be encoded or decoded.
//! - **Logical** [`ApiError::NotAcknowledged`]: a 2xx response whose status
//!   envelope reports failure.
//!
//! # Example
//!
//! ```rust,ignore
//! use cdn_api::rest::{ApiError, ValidationError};
//!
//! match client.execute(&input).await {
//!     Ok(setting) => println!("Found: {:?}", setting.name),
//!     Err(ApiError::Validation(ValidationError::MissingName)) => println!("name is required"),
//!     Err(e) if e.is_not_found() => println!("no such cache setting"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

use crate::clients::HttpError;

/// A required field was missing. Raised before any network access.
///
/// Operations check their required fields in a fixed order and return the
/// first failure, so the same invalid input always yields the same variant.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// `service_id` is empty.
    #[error("missing required field 'service_id'")]
    MissingServiceId,

    /// `service_version` is zero.
    #[error("missing required field 'service_version'")]
    MissingServiceVersion,

    /// `name` is empty.
    #[error("missing required field 'name'")]
    MissingName,

    /// An opaque resource `id` is empty.
    #[error("missing required field 'id'")]
    MissingId,

    /// `store_id` is empty.
    #[error("missing required field 'store_id'")]
    MissingStoreId,

    /// No package file or content was supplied.
    #[error("missing required field 'package'")]
    MissingPackage,
}

impl ValidationError {
    /// Returns the name of the missing field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingServiceId => "service_id",
            Self::MissingServiceVersion => "service_version",
            Self::MissingName => "name",
            Self::MissingId => "id",
            Self::MissingStoreId => "store_id",
            Self::MissingPackage => "package",
        }
    }
}

/// Fails with `error` when `value` is empty.
///
/// # Errors
///
/// Returns `error` unchanged if `value` is empty.
pub const fn require(value: &str, error: ValidationError) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(error)
    } else {
        Ok(())
    }
}

/// Fails with [`ValidationError::MissingServiceVersion`] for version zero.
///
/// # Errors
///
/// Returns [`ValidationError::MissingServiceVersion`] if `version` is 0.
pub const fn require_version(version: u32) -> Result<(), ValidationError> {
    if version == 0 {
        Err(ValidationError::MissingServiceVersion)
    } else {
        Ok(())
    }
}

/// A typed input could not be turned into a request body.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The field's type has no representation in the target codec.
    #[error("field '{field}' cannot be encoded: {kind} is not supported")]
    Unsupported {
        /// Wire key of the offending field (empty for the top-level value).
        field: String,
        /// What kind of value was rejected.
        kind: &'static str,
    },

    /// A field's `Serialize` implementation reported an error.
    #[error("field '{field}' cannot be encoded: {message}")]
    Custom {
        /// Wire key of the offending field.
        field: String,
        /// The serializer's message.
        message: String,
    },

    /// JSON serialization failed.
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// A local upload file could not be opened.
    #[error("cannot open file for part '{field}' at {}: {source}", path.display())]
    Io {
        /// Multipart part name.
        field: String,
        /// The path that failed to open.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl EncodeError {
    /// Attaches a field name to errors that do not carry one yet.
    #[must_use]
    pub fn with_field(self, field: &str) -> Self {
        match self {
            Self::Unsupported { field: f, kind } if f.is_empty() => Self::Unsupported {
                field: field.to_string(),
                kind,
            },
            Self::Custom { field: f, message } if f.is_empty() => Self::Custom {
                field: field.to_string(),
                message,
            },
            other => other,
        }
    }
}

impl serde::ser::Error for EncodeError {
    fn custom<T: std::fmt::Display>(msg: T) -> Self {
        Self::Custom {
            field: String::new(),
            message: msg.to_string(),
        }
    }
}

/// A response body could not be decoded into its target type.
///
/// Decoding is all-or-nothing: when this error is returned no partially
/// populated value exists.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("failed to decode {target}: {message}")]
pub struct DecodeError {
    /// Name of the type being decoded.
    pub target: &'static str,
    /// Description of the first value that could not be coerced.
    pub message: String,
    /// Line of the offending input (1-based, 0 if unknown).
    pub line: usize,
    /// Column of the offending input (1-based, 0 if unknown).
    pub column: usize,
}

impl DecodeError {
    pub(crate) fn from_json(target: &'static str, error: &serde_json::Error) -> Self {
        Self {
            target,
            message: error.to_string(),
            line: error.line(),
            column: error.column(),
        }
    }
}

/// Error type returned by every API operation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field was missing; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Network failure or non-2xx response.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The input could not be encoded.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// The response could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A 2xx response whose status envelope did not say `ok`.
    #[error("operation not acknowledged: status {status:?}, message {message:?}")]
    NotAcknowledged {
        /// The envelope's `status` value, if any.
        status: Option<String>,
        /// The envelope's `message` value, if any.
        message: Option<String>,
    },

    /// The product is already enabled on the service (HTTP 409 on enable).
    #[error("product '{product}' is already enabled")]
    AlreadyEnabled {
        /// The product identifier.
        product: &'static str,
    },
}

impl ApiError {
    /// Returns the HTTP status code for transport errors.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status_code(),
            Self::AlreadyEnabled { .. } => Some(409),
            _ => None,
        }
    }

    /// Returns `true` for a 404 response.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.status_code(), Some(404))
    }

    /// Returns `true` for pre-flight validation failures.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiError>();
    assert_send_sync::<EncodeError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    #[test]
    fn test_validation_errors_compare_by_kind() {
        assert_eq!(ValidationError::MissingName, ValidationError::MissingName);
        assert_ne!(ValidationError::MissingName, ValidationError::MissingServiceId);
        assert_eq!(ValidationError::MissingServiceVersion.field(), "service_version");
        assert_eq!(
            ValidationError::MissingServiceId.to_string(),
            "missing required field 'service_id'"
        );
    }

    #[test]
    fn test_require_helpers() {
        assert_eq!(require("", ValidationError::MissingId), Err(ValidationError::MissingId));
        assert_eq!(require("x", ValidationError::MissingId), Ok(()));
        assert_eq!(require_version(0), Err(ValidationError::MissingServiceVersion));
        assert_eq!(require_version(1), Ok(()));
    }

    #[test]
    fn test_with_field_fills_only_empty_field() {
        let error = EncodeError::Unsupported {
            field: String::new(),
            kind: "bytes",
        }
        .with_field("content");
        assert!(matches!(&error, EncodeError::Unsupported { field, .. } if field == "content"));

        let error = error.with_field("other");
        assert!(matches!(&error, EncodeError::Unsupported { field, .. } if field == "content"));
    }

    #[test]
    fn test_status_code_and_not_found() {
        let error = ApiError::Http(HttpError::Response(HttpResponseError {
            code: 404,
            message: "Record not found".to_string(),
            request_id: None,
        }));
        assert_eq!(error.status_code(), Some(404));
        assert!(error.is_not_found());
        assert!(!error.is_validation());

        let error: ApiError = ValidationError::MissingName.into();
        assert!(error.is_validation());
        assert_eq!(error.status_code(), None);
    }

    #[test]
    fn test_not_acknowledged_message() {
        let error = ApiError::NotAcknowledged {
            status: Some("error".to_string()),
            message: Some("locked version".to_string()),
        };
        let message = error.to_string();
        assert!(message.contains("not acknowledged"));
        assert!(message.contains("locked version"));
    }

    #[test]
    fn test_decode_error_from_json() {
        let json_error = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let error = DecodeError::from_json("CacheSetting", &json_error);
        assert_eq!(error.target, "CacheSetting");
        assert_eq!(error.line, 1);
        assert!(error.to_string().starts_with("failed to decode CacheSetting"));
    }
}
