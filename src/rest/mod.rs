//! Typed REST layer for the configuration API.
//!
//! This module provides the machinery every resource is built on:
//!
//! - **Paths**: [`build_path`] escapes each user-supplied segment on its own
//! - **[`encode`]**: typed inputs to form, multipart, or JSON bodies
//! - **[`decode`]**: JSON bodies to typed outputs, all-or-nothing
//! - **Errors**: pre-flight [`ValidationError`], post-flight [`ApiError`]
//! - **[`status`]**: `{status, message}` envelopes on 2xx responses
//! - **[`Operation`]**: the per-call seam run by
//!   [`RestClient::execute`](crate::clients::RestClient::execute)
//! - **[`Paginator`]**: cursor listings
//!
//! Resource modules live in [`resources`].
//!
//! # Example
//!
//! ```rust,ignore
//! use cdn_api::rest::resources::cache_setting::{CreateCacheSettingInput, CacheSettingAction};
//!
//! let setting = client
//!     .execute(&CreateCacheSettingInput {
//!         service_id: service_id.clone(),
//!         service_version: 3,
//!         name: Some("static assets".to_string()),
//!         action: Some(CacheSettingAction::Cache),
//!         ttl: Some(3600),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```

mod compatibool;
mod errors;
mod operation;
mod paginator;
mod path;

pub mod decode;
pub mod encode;
pub mod resources;
pub mod sort;
pub mod status;

pub use compatibool::Compatibool;
pub use encode::FileSource;
pub use errors::{require, require_version, ApiError, DecodeError, EncodeError, ValidationError};
pub use operation::{decode_empty, decode_json, decode_status, Operation};
pub use paginator::{Cursor, Page, PageMeta, PageState, Paginator};
pub use path::{build_path, escape_segment, version_path};
pub use status::StatusEnvelope;
