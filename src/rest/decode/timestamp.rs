//! Timestamp fields.
//!
//! The API is not consistent about how it writes times. Accepted inputs:
//!
//! - RFC 3339, with or without fractional seconds (`2023-01-15T10:30:00Z`,
//!   `2023-01-15T10:30:00.123+02:00`)
//! - space separated with an offset (`2023-01-15 10:30:00+00:00`)
//! - naive, read as UTC (`2023-01-15 10:30:00`, `2023-01-15T10:30:00`)
//!
//! Use through `#[serde(default, with = "timestamp::option")]` on an
//! `Option<DateTime<Utc>>` field.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// Offset-carrying formats tried after RFC 3339.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%:z", "%Y-%m-%d %H:%M:%S%.f%:z"];

/// Naive formats, interpreted as UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Parses a timestamp in any accepted format.
#[must_use]
pub fn parse(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(value, format).ok())
        .map(|parsed| parsed.with_timezone(&Utc))
        .or_else(|| {
            NAIVE_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
                .map(|naive| Utc.from_utc_datetime(&naive))
        })
}

/// `serde(with)` helpers for `Option<DateTime<Utc>>`.
pub mod option {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Writes the timestamp as RFC 3339 in UTC.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => {
                serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            None => serializer.serialize_none(),
        }
    }

    /// Reads `null` or an absent key as `None`, and any accepted format as
    /// `Some`.
    ///
    /// # Errors
    ///
    /// Fails for a string that matches no accepted format.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };

        super::parse(&raw).map(Some).ok_or_else(|| {
            de::Error::custom(format!(
                "invalid timestamp {raw:?}: expected RFC 3339 or \"YYYY-MM-DD HH:MM:SS\""
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[test]
    fn test_parses_rfc3339_variants() {
        let expected = Utc.with_ymd_and_hms(2023, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(parse("2023-01-15T10:30:00Z"), Some(expected));
        assert_eq!(parse("2023-01-15T12:30:00+02:00"), Some(expected));
        assert_eq!(
            parse("2023-01-15T10:30:00.250Z").unwrap().timestamp_millis(),
            expected.timestamp_millis() + 250
        );
    }

    #[test]
    fn test_parses_space_separated_and_naive() {
        let expected = Utc.with_ymd_and_hms(2023, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(parse("2023-01-15 10:30:00+00:00"), Some(expected));
        assert_eq!(parse("2023-01-15 10:30:00"), Some(expected));
        assert_eq!(parse("2023-01-15T10:30:00"), Some(expected));
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse("yesterday"), None);
        assert_eq!(parse(""), None);
        assert_eq!(parse("2023-13-45T99:00:00Z"), None);
    }

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Stamped {
        #[serde(default, with = "option")]
        updated_at: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_option_helpers() {
        let stamped: Stamped = serde_json::from_str(r#"{"updated_at":null}"#).unwrap();
        assert_eq!(stamped.updated_at, None);

        let stamped: Stamped = serde_json::from_str("{}").unwrap();
        assert_eq!(stamped.updated_at, None);

        let stamped: Stamped =
            serde_json::from_str(r#"{"updated_at":"2024-06-01 08:00:00"}"#).unwrap();
        assert_eq!(
            serde_json::to_string(&stamped).unwrap(),
            r#"{"updated_at":"2024-06-01T08:00:00Z"}"#
        );

        let error = serde_json::from_str::<Stamped>(r#"{"updated_at":"soon"}"#).unwrap_err();
        assert!(error.to_string().contains("\"soon\""));
    }
}
