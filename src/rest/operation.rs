//! The per-operation seam.
//!
//! Every resource call is a typed input implementing [`Operation`]. The
//! trait says how to validate the input, where to send it, how to encode
//! it, and how to read the answer; [`RestClient::execute`] runs the steps in
//! order.
//!
//! [`RestClient::execute`]: crate::clients::RestClient::execute

use crate::clients::{HttpError, HttpMethod, HttpResponse, RequestBody};
use crate::rest::decode;
use crate::rest::errors::{ApiError, EncodeError, ValidationError};
use crate::rest::status;

/// A single API operation described by its typed input.
///
/// # Implementing
///
/// ```rust,ignore
/// impl Operation for GetCacheSettingInput {
///     type Output = CacheSetting;
///     const METHOD: HttpMethod = HttpMethod::Get;
///     const NAME: &'static str = "GetCacheSetting";
///
///     fn validate(&self) -> Result<(), ValidationError> {
///         require(&self.service_id, ValidationError::MissingServiceId)?;
///         require_version(self.service_version)?;
///         require(&self.name, ValidationError::MissingName)
///     }
///
///     fn path(&self) -> String {
///         version_path(&self.service_id, self.service_version, &["cache_settings", &self.name])
///     }
///
///     fn decode(response: &HttpResponse) -> Result<CacheSetting, ApiError> {
///         decode_json(response, Self::NAME)
///     }
/// }
/// ```
#[allow(async_fn_in_trait)]
pub trait Operation: Sync {
    /// The decoded result.
    type Output;

    /// HTTP method of the operation.
    const METHOD: HttpMethod;

    /// Operation name, used in logs and decode errors.
    const NAME: &'static str;

    /// Checks required fields in a fixed order and returns the first
    /// failure.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] of the first missing field.
    fn validate(&self) -> Result<(), ValidationError>;

    /// The escaped request path.
    fn path(&self) -> String;

    /// Query parameters, in order.
    fn query(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    /// Encodes the request body, if the operation has one.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError`] if the input cannot be encoded.
    async fn body(&self) -> Result<Option<RequestBody>, EncodeError> {
        Ok(None)
    }

    /// Decodes a 2xx response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the body cannot be decoded or reports a
    /// logical failure.
    fn decode(response: &HttpResponse) -> Result<Self::Output, ApiError>;

    /// Converts a transport error, letting an operation turn a specific
    /// status into a domain error. Passes the error through by default.
    fn map_error(&self, error: HttpError) -> ApiError {
        ApiError::Http(error)
    }
}

/// Decodes a JSON body for [`Operation::decode`].
///
/// # Errors
///
/// Returns [`ApiError::Decode`] on failure.
pub fn decode_json<T: serde::de::DeserializeOwned>(
    response: &HttpResponse,
    target: &'static str,
) -> Result<T, ApiError> {
    Ok(decode::from_response(response, target)?)
}

/// Accepts a status envelope for [`Operation::decode`].
///
/// # Errors
///
/// See [`status::acknowledge`].
pub fn decode_status(response: &HttpResponse) -> Result<(), ApiError> {
    status::acknowledge(response)
}

/// Ignores the body for [`Operation::decode`], for `204 No Content` style
/// endpoints.
///
/// # Errors
///
/// Never fails.
#[allow(clippy::unnecessary_wraps)]
pub const fn decode_empty(_response: &HttpResponse) -> Result<(), ApiError> {
    Ok(())
}
