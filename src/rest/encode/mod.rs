//! Request body encoding.
//!
//! Typed inputs describe their wire shape through `serde` attributes:
//! `#[serde(skip)]` for path identifiers, `rename` for wire keys, and
//! `Option<T>` for optional fields. This module turns such a value into a
//! [`RequestBody`] in one of three codecs:
//!
//! | Codec | Function | Notes |
//! |-------|----------|-------|
//! | form | [`form`] | `None` omitted, sequences as `key[]`, see [`form::to_pairs`] |
//! | multipart | [`multipart`] | form fields as text parts plus one file part |
//! | JSON | [`json`] | optional fields use `skip_serializing_if` |
//!
//! # Example
//!
//! ```rust
//! use cdn_api::clients::RequestBody;
//! use cdn_api::rest::{encode, Compatibool};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct UpdateBackend {
//!     #[serde(skip)]
//!     service_id: String,
//!     port: Option<u16>,
//!     use_ssl: Option<Compatibool>,
//! }
//!
//! let input = UpdateBackend {
//!     service_id: "abc".to_string(),
//!     port: Some(0),
//!     use_ssl: Some(Compatibool(false)),
//! };
//!
//! match encode::form(&input).unwrap() {
//!     RequestBody::Form(body) => assert_eq!(body, "port=0&use_ssl=0"),
//!     _ => unreachable!(),
//! }
//! ```

pub mod form;

use std::path::{Path, PathBuf};

use reqwest::multipart::{Form, Part};
use serde::Serialize;

use crate::clients::RequestBody;
use crate::rest::errors::EncodeError;

/// The file part of a multipart upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSource<'a> {
    /// A local file. The encoder opens it and the request body owns the
    /// handle, which is closed when the body is dropped.
    Path(PathBuf),
    /// Caller-owned bytes. The encoder copies them and never takes the
    /// caller's buffer.
    Memory(&'a [u8]),
}

impl FileSource<'_> {
    /// Returns `true` if the source names no file and holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Path(path) => path.as_os_str().is_empty(),
            Self::Memory(bytes) => bytes.is_empty(),
        }
    }
}

/// Encodes `input` as a url-encoded form body.
///
/// # Errors
///
/// Returns [`EncodeError`] naming the first field that cannot be encoded.
pub fn form<T: Serialize + ?Sized>(input: &T) -> Result<RequestBody, EncodeError> {
    Ok(RequestBody::Form(form::to_string(input)?))
}

/// Encodes `input` as a JSON body.
///
/// # Errors
///
/// Returns [`EncodeError::Json`] if serialization fails.
pub fn json<T: Serialize + ?Sized>(input: &T) -> Result<RequestBody, EncodeError> {
    Ok(RequestBody::Json(serde_json::to_value(input)?))
}

/// Encodes `input` as a multipart form with one file part named `field`.
///
/// The typed fields are encoded exactly as [`form`] would encode them and
/// added as text parts in the same order.
///
/// # Errors
///
/// Returns [`EncodeError::Io`] if a [`FileSource::Path`] cannot be opened,
/// or any form encoding error for the typed fields.
pub async fn multipart<T: Serialize + ?Sized>(
    input: &T,
    field: &str,
    source: &FileSource<'_>,
) -> Result<RequestBody, EncodeError> {
    let part = file_part(field, source).await?;

    // The opened file lives inside `part`; an error below drops it.
    let mut body = Form::new();
    for (key, value) in form::to_pairs(input)? {
        body = body.text(key, value);
    }

    Ok(RequestBody::Multipart(body.part(field.to_string(), part)))
}

async fn file_part(field: &str, source: &FileSource<'_>) -> Result<Part, EncodeError> {
    match source {
        FileSource::Path(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .map_err(|source| EncodeError::Io {
                    field: field.to_string(),
                    path: path.clone(),
                    source,
                })?;

            tracing::debug!(field, path = %path.display(), "opened upload file");

            Ok(Part::stream(reqwest::Body::from(file)).file_name(file_name(path)))
        }
        FileSource::Memory(bytes) => Ok(Part::bytes(bytes.to_vec()).file_name(field.to_string())),
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| "upload".to_string(), |name| name.to_string_lossy().into_owned())
}
