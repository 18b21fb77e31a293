//! Status envelopes.
//!
//! Some mutate and delete endpoints answer `200 OK` with a body such as
//! `{"status": "ok"}`. A 2xx status alone does not mean the change was
//! applied; the envelope has to say `ok` as well.

use serde::{Deserialize, Serialize};

use crate::clients::HttpResponse;
use crate::rest::decode;
use crate::rest::errors::ApiError;

/// The `{status, message}` body returned by acknowledging endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEnvelope {
    /// `"ok"` on success.
    pub status: Option<String>,
    /// Explanation, usually present only on failure.
    pub message: Option<String>,
}

impl StatusEnvelope {
    /// Returns `true` if the status is exactly `"ok"`.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status.as_deref() == Some("ok")
    }
}

/// Checks the status envelope of a successful response.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if the body is not an envelope, and
/// [`ApiError::NotAcknowledged`] if the status is anything other than `ok`,
/// missing status included.
pub fn acknowledge(response: &HttpResponse) -> Result<(), ApiError> {
    let envelope: StatusEnvelope = decode::from_response(response, "StatusEnvelope")?;
    if envelope.is_ok() {
        return Ok(());
    }

    tracing::warn!(
        status = ?envelope.status,
        message = ?envelope.message,
        "API did not acknowledge the operation"
    );

    Err(ApiError::NotAcknowledged {
        status: envelope.status,
        message: envelope.message,
    })
}
