//! Response body decoding.
//!
//! Outputs are plain `Deserialize` structs whose fields are `Option`s,
//! nested structs, or `Vec`s of nested structs. Absent keys stay `None`,
//! unknown keys are ignored, and any value that cannot be coerced fails
//! the whole decode: callers never see a half-filled output.
//!
//! Two field helpers cover the API's loose typing:
//!
//! - [`timestamp`] for `Option<DateTime<Utc>>` in several textual formats
//! - [`lenient`] for numbers that are sometimes sent as strings

pub mod lenient;
pub mod timestamp;

use serde::de::DeserializeOwned;

use crate::clients::HttpResponse;
use crate::rest::errors::DecodeError;

/// Decodes a JSON body into `T`.
///
/// An empty or whitespace-only body is treated as `{}`.
///
/// # Errors
///
/// Returns [`DecodeError`] carrying `target` and the position of the first
/// value that could not be decoded.
///
/// # Example
///
/// ```rust
/// use cdn_api::rest::decode;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Setting {
///     name: Option<String>,
///     ttl: Option<u32>,
/// }
///
/// let setting: Setting = decode::decode(br#"{"name":"static","extra":true}"#, "Setting").unwrap();
/// assert_eq!(setting.name.as_deref(), Some("static"));
/// assert_eq!(setting.ttl, None);
/// ```
pub fn decode<T: DeserializeOwned>(raw: &[u8], target: &'static str) -> Result<T, DecodeError> {
    let raw = if raw.iter().all(u8::is_ascii_whitespace) {
        b"{}".as_slice()
    } else {
        raw
    };

    serde_json::from_slice(raw).map_err(|e| DecodeError::from_json(target, &e))
}

/// Decodes the body of `response` into `T`.
///
/// # Errors
///
/// See [`decode`].
pub fn from_response<T: DeserializeOwned>(
    response: &HttpResponse,
    target: &'static str,
) -> Result<T, DecodeError> {
    decode(response.body.as_bytes(), target)
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Healthcheck {
        name: Option<String>,
        threshold: Option<u32>,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Pool {
        name: Option<String>,
        quorum: Option<u32>,
        #[serde(default, with = "timestamp::option")]
        created_at: Option<DateTime<Utc>>,
        healthcheck: Option<Healthcheck>,
        #[serde(default)]
        servers: Vec<Healthcheck>,
    }

    #[test]
    fn test_absent_and_null_fields_are_none() {
        let pool: Pool = decode(br#"{"name":"p1","quorum":null}"#, "Pool").unwrap();
        assert_eq!(pool.name.as_deref(), Some("p1"));
        assert_eq!(pool.quorum, None);
        assert_eq!(pool.created_at, None);
        assert!(pool.servers.is_empty());
    }

    #[test]
    fn test_present_zero_is_some() {
        let pool: Pool = decode(br#"{"quorum":0}"#, "Pool").unwrap();
        assert_eq!(pool.quorum, Some(0));
    }

    #[test]
    fn test_nested_structs_and_sequences() {
        let raw = br#"{
            "name": "p1",
            "created_at": "2023-01-15T10:30:00Z",
            "healthcheck": {"name": "hc", "threshold": 3, "unknown": [1,2]},
            "servers": [{"name": "a"}, {"name": "b", "threshold": 1}]
        }"#;
        let pool: Pool = decode(raw, "Pool").unwrap();
        assert_eq!(pool.healthcheck.unwrap().threshold, Some(3));
        assert_eq!(pool.servers.len(), 2);
        assert_eq!(pool.servers[1].name.as_deref(), Some("b"));
        assert_eq!(pool.created_at.unwrap().timestamp(), 1_673_778_600);
    }

    #[test]
    fn test_any_failure_aborts_whole_decode() {
        let raw = br#"{"name":"p1","servers":[{"name":"a"},{"threshold":"many"}]}"#;
        let error = decode::<Pool>(raw, "Pool").unwrap_err();
        assert_eq!(error.target, "Pool");
        assert!(error.message.contains("invalid type"), "{}", error.message);
        assert_eq!(error.line, 1);
        assert!(error.column > 0);
    }

    #[test]
    fn test_unparsable_timestamp_fails() {
        let error = decode::<Pool>(br#"{"created_at":"yesterday"}"#, "Pool").unwrap_err();
        assert!(error.message.contains("yesterday"), "{}", error.message);
    }

    #[test]
    fn test_empty_body_is_empty_object() {
        let pool: Pool = decode(b"", "Pool").unwrap();
        assert_eq!(pool.name, None);
        let pool: Pool = decode(b" \n", "Pool").unwrap();
        assert_eq!(pool.quorum, None);
    }

    #[test]
    fn test_from_response() {
        let response = HttpResponse::new(200, std::collections::HashMap::new(), r#"{"name":"p9"}"#);
        let pool: Pool = from_response(&response, "Pool").unwrap();
        assert_eq!(pool.name.as_deref(), Some("p9"));
    }
}
