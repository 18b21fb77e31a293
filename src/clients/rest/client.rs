//! REST client implementation.
//!
//! This module provides the [`RestClient`] type, which runs typed
//! [`Operation`]s against the configuration API and hands out cursor
//! [`Paginator`]s for listing endpoints.

use serde::de::DeserializeOwned;

use crate::clients::{HttpClient, HttpError, HttpRequest, RequestOptions};
use crate::config::ClientConfig;
use crate::rest::{ApiError, Operation, Paginator};

/// REST API client for the configuration API.
///
/// Each call goes through two phases. Pre-flight, the input validates its
/// required fields and nothing is sent on failure. Post-flight, the
/// response is classified: non-2xx becomes [`ApiError::Http`], 2xx is
/// decoded by the operation.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use cdn_api::{ClientConfig, RestClient};
/// use cdn_api::rest::resources::cache_setting::GetCacheSettingInput;
///
/// let config = ClientConfig::builder()
///     .default_header("Fastly-Key", "my-token")
///     .build()?;
/// let client = RestClient::new(&config)?;
///
/// let setting = client
///     .execute(&GetCacheSettingInput {
///         service_id: "SU1Z0isxPaozGVKXdv0eY".to_string(),
///         service_version: 1,
///         name: "static assets".to_string(),
///     })
///     .await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, HttpError> {
        Ok(Self {
            http_client: HttpClient::new(config)?,
        })
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Runs an operation with no extra options.
    ///
    /// # Errors
    ///
    /// See [`execute_with`](Self::execute_with).
    pub async fn execute<O: Operation>(&self, operation: &O) -> Result<O::Output, ApiError> {
        self.execute_with(operation, &RequestOptions::default())
            .await
    }

    /// Runs an operation, merging per-call headers and query parameters.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Validation`] if a required field is missing; no request
    ///   is sent
    /// - [`ApiError::Encode`] if the input cannot be encoded
    /// - [`ApiError::Http`] (or an operation-specific error) for network
    ///   failures and non-2xx responses
    /// - [`ApiError::Decode`] / [`ApiError::NotAcknowledged`] if a 2xx
    ///   response cannot be read or reports failure
    pub async fn execute_with<O: Operation>(
        &self,
        operation: &O,
        options: &RequestOptions,
    ) -> Result<O::Output, ApiError> {
        if let Err(error) = operation.validate() {
            tracing::debug!(
                operation = O::NAME,
                field = error.field(),
                "validation failed, request not sent"
            );
            return Err(error.into());
        }

        let body = operation.body().await?;

        let mut builder = HttpRequest::builder(O::METHOD, operation.path()).maybe_body(body);
        for (key, value) in operation.query() {
            builder = builder.query_param(key, value);
        }
        let request = builder.options(options).build().map_err(HttpError::from)?;

        let response = self
            .http_client
            .request(request)
            .await
            .map_err(|e| operation.map_error(e))?;

        O::decode(&response)
    }

    /// Starts a cursor listing over `path`, `limit` items per page.
    ///
    /// A `limit` of zero leaves the page size to the server.
    #[must_use]
    pub fn paginate<T: DeserializeOwned>(
        &self,
        path: impl Into<String>,
        limit: u32,
    ) -> Paginator<'_, T> {
        Paginator::new(self, path.into(), limit)
    }
}
