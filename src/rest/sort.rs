//! Ordering helpers for list results.

use std::cmp::Ordering;

/// Orders two optional names; unnamed items sort first.
///
/// Pass it to [`slice::sort_by`] through a key projection:
///
/// ```rust
/// use cdn_api::rest::sort::by_name;
///
/// let mut names = vec![Some("b"), None, Some("a")];
/// names.sort_by(|a, b| by_name(*a, *b));
/// assert_eq!(names, vec![None, Some("a"), Some("b")]);
/// ```
#[must_use]
pub fn by_name(a: Option<&str>, b: Option<&str>) -> Ordering {
    a.cmp(&b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name_is_stable_for_equal_names() {
        let mut items = vec![(Some("x"), 1), (Some("a"), 2), (Some("x"), 3)];
        items.sort_by(|a, b| by_name(a.0, b.0));
        assert_eq!(items, vec![(Some("a"), 2), (Some("x"), 1), (Some("x"), 3)]);
    }
}
