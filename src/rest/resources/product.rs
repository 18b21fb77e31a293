//! Product enablement.
//!
//! Optional platform products are switched on per service:
//!
//! ```text
//! PUT,GET,DELETE /enabled-products/{product}/services/{service_id}
//! ```
//!
//! Enabling a product twice answers `409 Conflict`, which is reported as
//! [`ApiError::AlreadyEnabled`] rather than a plain transport error.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clients::{HttpError, HttpMethod, HttpResponse};
use crate::rest::{
    build_path, decode_empty, decode_json, require, ApiError, Operation, ValidationError,
};

/// Products that can be enabled on a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductId {
    /// Bot management.
    BotManagement,
    /// Brotli compression.
    BrotliCompression,
    /// Domain inspector.
    DomainInspector,
    /// Fanout real-time messaging.
    Fanout,
    /// Image optimizer.
    ImageOptimizer,
    /// Log explorer and insights.
    LogExplorerInsights,
    /// Origin inspector.
    OriginInspector,
    /// WebSockets passthrough.
    #[serde(rename = "websockets")]
    WebSockets,
}

impl ProductId {
    /// Returns the identifier used in URLs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BotManagement => "bot_management",
            Self::BrotliCompression => "brotli_compression",
            Self::DomainInspector => "domain_inspector",
            Self::Fanout => "fanout",
            Self::ImageOptimizer => "image_optimizer",
            Self::LogExplorerInsights => "log_explorer_insights",
            Self::OriginInspector => "origin_inspector",
            Self::WebSockets => "websockets",
        }
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `{id, object}` reference inside an enablement record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRef {
    /// Identifier.
    pub id: Option<String>,
    /// Object type.
    pub object: Option<String>,
}

/// An enablement record as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductEnablement {
    /// The enabled product.
    pub product: Option<ObjectRef>,
    /// The service it is enabled on.
    pub service: Option<ObjectRef>,
}

fn enablement_path(product: ProductId, service_id: &str) -> String {
    build_path(&["enabled-products", product.as_str(), "services", service_id])
}

/// Enables a product on a service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnableProductInput {
    /// The product to enable.
    pub product: ProductId,
    /// Alphanumeric service identifier (required).
    pub service_id: String,
}

impl Operation for EnableProductInput {
    type Output = ProductEnablement;
    const METHOD: HttpMethod = HttpMethod::Put;
    const NAME: &'static str = "EnableProduct";

    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.service_id, ValidationError::MissingServiceId)
    }

    fn path(&self) -> String {
        enablement_path(self.product, &self.service_id)
    }

    fn decode(response: &HttpResponse) -> Result<ProductEnablement, ApiError> {
        decode_json(response, Self::NAME)
    }

    fn map_error(&self, error: HttpError) -> ApiError {
        if error.status_code() == Some(409) {
            return ApiError::AlreadyEnabled {
                product: self.product.as_str(),
            };
        }
        ApiError::Http(error)
    }
}

/// Reads the enablement of a product; 404 means not enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetProductInput {
    /// The product to check.
    pub product: ProductId,
    /// Alphanumeric service identifier (required).
    pub service_id: String,
}

impl Operation for GetProductInput {
    type Output = ProductEnablement;
    const METHOD: HttpMethod = HttpMethod::Get;
    const NAME: &'static str = "GetProduct";

    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.service_id, ValidationError::MissingServiceId)
    }

    fn path(&self) -> String {
        enablement_path(self.product, &self.service_id)
    }

    fn decode(response: &HttpResponse) -> Result<ProductEnablement, ApiError> {
        decode_json(response, Self::NAME)
    }
}

/// Disables a product on a service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisableProductInput {
    /// The product to disable.
    pub product: ProductId,
    /// Alphanumeric service identifier (required).
    pub service_id: String,
}

impl Operation for DisableProductInput {
    type Output = ();
    const METHOD: HttpMethod = HttpMethod::Delete;
    const NAME: &'static str = "DisableProduct";

    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.service_id, ValidationError::MissingServiceId)
    }

    fn path(&self) -> String {
        enablement_path(self.product, &self.service_id)
    }

    fn decode(response: &HttpResponse) -> Result<(), ApiError> {
        decode_empty(response)
    }
}
