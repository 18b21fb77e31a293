//! # CDN Configuration API Rust SDK
//!
//! A typed binding to a CDN configuration API: cache settings, backends,
//! rate limiters, packages, KV stores, product enablement, each exposed as
//! create / read / update / delete / list operations.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - An async HTTP transport that sends one request per call, with no retries
//! - Safe path construction: every user-supplied segment is escaped
//! - Request encoding from typed inputs: url-encoded form, multipart, JSON
//! - All-or-nothing response decoding into typed outputs
//! - Two-phase errors: pre-flight [`ValidationError`]s before any I/O,
//!   post-flight transport and status-envelope errors after
//! - Cursor pagination via [`Paginator`]
//!
//! ## Quick Start
//!
//! ```rust
//! use cdn_api::{ClientConfig, HostUrl};
//!
//! let config = ClientConfig::builder()
//!     .api_host(HostUrl::new("https://api.fastly.com").unwrap())
//!     .user_agent_prefix("deploy-bot/2.1")
//!     .default_header("Fastly-Key", "your-api-token")
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Running Operations
//!
//! ```rust,ignore
//! use cdn_api::{ClientConfig, RestClient};
//! use cdn_api::rest::resources::backend::{CreateBackendInput, BackendSettings};
//! use cdn_api::rest::Compatibool;
//!
//! let client = RestClient::new(&config)?;
//!
//! let backend = client
//!     .execute(&CreateBackendInput {
//!         service_id: "SU1Z0isxPaozGVKXdv0eY".to_string(),
//!         service_version: 3,
//!         name: Some("origin-eu".to_string()),
//!         settings: BackendSettings {
//!             address: Some("eu.example.com".to_string()),
//!             port: Some(443),
//!             use_ssl: Some(Compatibool(true)),
//!             ..Default::default()
//!         },
//!     })
//!     .await?;
//! ```
//!
//! ## Handling Errors
//!
//! ```rust,ignore
//! use cdn_api::{ApiError, ValidationError};
//!
//! match client.execute(&input).await {
//!     Ok(setting) => println!("{:?}", setting.name),
//!     Err(ApiError::Validation(ValidationError::MissingServiceId)) => { /* nothing was sent */ }
//!     Err(e) if e.is_not_found() => { /* 404 */ }
//!     Err(ApiError::NotAcknowledged { message, .. }) => { /* 200, but status != "ok" */ }
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes and inputs validate before any I/O
//! - **Thread-safe**: Clients are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **Caller owns policy**: no retries, no credential handling beyond headers

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ClientConfig, ClientConfigBuilder, HostUrl};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, RateLimit, RequestBody, RequestOptions,
    RestClient,
};

// Re-export the REST core
pub use rest::{
    ApiError, Compatibool, DecodeError, EncodeError, FileSource, Operation, PageState, Paginator,
    ValidationError,
};
