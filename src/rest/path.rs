//! Path building for REST resources.
//!
//! Resource names are user supplied and may contain spaces, slashes, or any
//! other reserved character. Every segment is escaped on its own, so a `/`
//! inside a name becomes `%2F` and never introduces an extra path level.
//!
//! # Example
//!
//! ```rust
//! use cdn_api::rest::{build_path, version_path};
//!
//! assert_eq!(
//!     build_path(&["service", "abc def", "version", "3"]),
//!     "/service/abc%20def/version/3"
//! );
//!
//! assert_eq!(
//!     version_path("SU1Z0isxPaozGVKXdv0eY", 1, &["backend", "origin/eu"]),
//!     "/service/SU1Z0isxPaozGVKXdv0eY/version/1/backend/origin%2Feu"
//! );
//! ```

use std::borrow::Cow;

/// Percent-escapes one path segment.
///
/// Everything outside the RFC 3986 unreserved set (`A-Z a-z 0-9 - . _ ~`) is
/// escaped, including `/`.
#[must_use]
pub fn escape_segment(segment: &str) -> Cow<'_, str> {
    urlencoding::encode(segment)
}

/// Joins path segments into one absolute, escaped URL path.
///
/// Pure and total: the same input always yields the same output.
#[must_use]
pub fn build_path<S: AsRef<str>>(segments: &[S]) -> String {
    let mut path = String::new();
    for segment in segments {
        path.push('/');
        path.push_str(&escape_segment(segment.as_ref()));
    }
    path
}

/// Builds `/service/{service_id}/version/{version}/...rest`.
///
/// The common prefix for versioned configuration resources.
#[must_use]
pub fn version_path(service_id: &str, version: u32, rest: &[&str]) -> String {
    let version = version.to_string();
    let mut segments = Vec::with_capacity(4 + rest.len());
    segments.extend(["service", service_id, "version", version.as_str()]);
    segments.extend_from_slice(rest);
    build_path(&segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_space_in_segment() {
        assert_eq!(
            build_path(&["service", "abc def", "version", "3"]),
            "/service/abc%20def/version/3"
        );
    }

    #[test]
    fn test_build_path_is_stable_across_calls() {
        let segments = ["service", "abc def", "version", "3"];
        let first = build_path(&segments);
        for _ in 0..10 {
            assert_eq!(build_path(&segments), first);
        }
    }

    #[test]
    fn test_slash_does_not_add_path_levels() {
        let path = build_path(&["service", "id", "version", "1", "dictionary", "a/b"]);
        assert_eq!(path, "/service/id/version/1/dictionary/a%2Fb");
        assert_eq!(path.matches('/').count(), 6);
    }

    #[test]
    fn test_escapes_reserved_characters() {
        assert_eq!(escape_segment("a?b#c"), "a%3Fb%23c");
        assert_eq!(escape_segment("100%"), "100%25");
        assert_eq!(escape_segment("caché"), "cach%C3%A9");
        assert_eq!(escape_segment("safe-name_1.0~x"), "safe-name_1.0~x");
    }

    #[test]
    fn test_empty_input_and_empty_segments() {
        let empty: [&str; 0] = [];
        assert_eq!(build_path(&empty), "");
        assert_eq!(build_path(&["service", ""]), "/service/");
    }

    #[test]
    fn test_version_path_prefix() {
        assert_eq!(
            version_path("abc", 7, &["cache_settings", "my setting"]),
            "/service/abc/version/7/cache_settings/my%20setting"
        );
        assert_eq!(version_path("abc", 7, &[]), "/service/abc/version/7");
    }

    #[test]
    fn test_accepts_owned_strings() {
        let segments = vec!["resources".to_string(), "stores".to_string()];
        assert_eq!(build_path(&segments), "/resources/stores");
    }
}
