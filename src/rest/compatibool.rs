//! Boolean flag with the API's legacy wire representation.

use std::fmt;

use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// A boolean encoded on the wire as `"1"` / `"0"`.
///
/// Older form endpoints reject `true` / `false` and only accept the numeric
/// string form. Wrap such input fields as `Option<Compatibool>`: `None`
/// omits the key, `Some(Compatibool(false))` sends `key=0`.
///
/// Decoding is lenient and accepts JSON booleans, the integers `0` / `1`,
/// and the strings `"0"`, `"1"`, `"true"` and `"false"`.
///
/// # Example
///
/// ```rust
/// use cdn_api::rest::Compatibool;
///
/// let flag: Compatibool = true.into();
/// assert_eq!(serde_json::to_string(&flag).unwrap(), "\"1\"");
/// assert!(bool::from(serde_json::from_str::<Compatibool>("\"true\"").unwrap()));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Compatibool(pub bool);

impl From<bool> for Compatibool {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl From<Compatibool> for bool {
    fn from(value: Compatibool) -> Self {
        value.0
    }
}

impl Serialize for Compatibool {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if self.0 { "1" } else { "0" })
    }
}

struct CompatiboolVisitor;

impl Visitor<'_> for CompatiboolVisitor {
    type Value = Compatibool;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a boolean, 0 or 1, or one of \"0\", \"1\", \"true\", \"false\"")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Compatibool(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        match v {
            0 => Ok(Compatibool(false)),
            1 => Ok(Compatibool(true)),
            _ => Err(E::invalid_value(Unexpected::Unsigned(v), &self)),
        }
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        match v {
            0 => Ok(Compatibool(false)),
            1 => Ok(Compatibool(true)),
            _ => Err(E::invalid_value(Unexpected::Signed(v), &self)),
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        match v {
            "1" | "true" => Ok(Compatibool(true)),
            "0" | "false" => Ok(Compatibool(false)),
            _ => Err(E::invalid_value(Unexpected::Str(v), &self)),
        }
    }
}

impl<'de> Deserialize<'de> for Compatibool {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(CompatiboolVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_numeric_string() {
        assert_eq!(serde_json::to_string(&Compatibool(true)).unwrap(), "\"1\"");
        assert_eq!(serde_json::to_string(&Compatibool(false)).unwrap(), "\"0\"");
    }

    #[test]
    fn test_deserializes_all_accepted_forms() {
        for (input, expected) in [
            ("true", true),
            ("false", false),
            ("1", true),
            ("0", false),
            ("\"1\"", true),
            ("\"0\"", false),
            ("\"true\"", true),
            ("\"false\"", false),
        ] {
            let flag: Compatibool = serde_json::from_str(input).unwrap();
            assert_eq!(flag.0, expected, "input {input}");
        }
    }

    #[test]
    fn test_rejects_other_values() {
        assert!(serde_json::from_str::<Compatibool>("2").is_err());
        assert!(serde_json::from_str::<Compatibool>("\"yes\"").is_err());
        assert!(serde_json::from_str::<Compatibool>("null").is_err());
    }

    #[test]
    fn test_option_null_is_none() {
        let flag: Option<Compatibool> = serde_json::from_str("null").unwrap();
        assert_eq!(flag, None);
    }
}
