//! Numbers that may arrive as JSON strings.
//!
//! Several endpoints write numeric settings as strings (`"ttl": "3600"`).
//! Fields using `#[serde(default, with = "lenient")]` accept either form;
//! anything else, including an empty string, still fails the decode.

use std::fmt::Display;
use std::str::FromStr;

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Writes the number as a plain JSON number.
///
/// # Errors
///
/// Propagates serializer errors.
#[allow(clippy::ref_option)]
pub fn serialize<T: Serialize, S: Serializer>(
    value: &Option<T>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    value.serialize(serializer)
}

/// Reads a number, a numeric string, `null`, or an absent key.
///
/// # Errors
///
/// Fails for strings that do not parse and for any other JSON type.
pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + FromStr,
    T::Err: Display,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| de::Error::custom(format!("invalid number {text:?}: {e}"))),
        Some(number @ Value::Number(_)) => {
            serde_json::from_value(number).map(Some).map_err(de::Error::custom)
        }
        Some(other) => Err(de::Error::custom(format!(
            "invalid number: expected a number or numeric string, found {other}"
        ))),
    }
}
