//! Pagination envelope and input clamping helpers.
//!
//! This module lives in `core` (zero internal deps) so it can be used by both
//! the repository layer and any future CLI or worker tooling.

use serde::Serialize;

/// Default number of items per list page.
pub const DEFAULT_LIST_LIMIT: i64 = 10;

/// Maximum number of items per list page.
pub const MAX_LIST_LIMIT: i64 = 100;

/// One page of a list query.
///
/// `total` is the count of all rows matching the filters, independent of
/// the limit/offset window that produced `items`.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
}

/// Clamp a user-provided limit to `0..=max`, falling back to `default`.
///
/// A limit of zero is honoured: the caller gets an empty page but a real
/// `total` count.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).clamp(0, max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- clamp_limit ---------------------------------------------------------

    #[test]
    fn clamp_limit_uses_default_when_none() {
        assert_eq!(clamp_limit(None, 10, 100), 10);
    }

    #[test]
    fn clamp_limit_respects_max() {
        assert_eq!(clamp_limit(Some(200), 10, 100), 100);
    }

    #[test]
    fn clamp_limit_floors_at_zero() {
        assert_eq!(clamp_limit(Some(-5), 10, 100), 0);
    }

    #[test]
    fn clamp_limit_allows_zero() {
        assert_eq!(clamp_limit(Some(0), 10, 100), 0);
    }

    #[test]
    fn clamp_limit_passes_through_valid_value() {
        assert_eq!(clamp_limit(Some(50), 10, 100), 50);
    }

    // -- clamp_offset --------------------------------------------------------

    #[test]
    fn clamp_offset_defaults_to_zero() {
        assert_eq!(clamp_offset(None), 0);
    }

    #[test]
    fn clamp_offset_floors_at_zero() {
        assert_eq!(clamp_offset(Some(-10)), 0);
    }

    #[test]
    fn clamp_offset_passes_through_valid_value() {
        assert_eq!(clamp_offset(Some(40)), 40);
    }

    // -- Page serialization --------------------------------------------------

    #[test]
    fn page_serializes_items_and_total() {
        let page = Page {
            items: vec![1, 2, 3],
            total: 7,
        };
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["items"], serde_json::json!([1, 2, 3]));
        assert_eq!(json["total"], 7);
    }
}
