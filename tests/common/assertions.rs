//! Domain-specific assertion macros for jobagg harnesses.
//!
//! These wrap plain assertions with failure messages that say *which*
//! canonical-record invariant was violated and on which record.

use jobagg_core::tables::SENTINEL_MARKERS;
use jobagg_core::CanonicalJobRecord;

/// Assert that no string field of a `CanonicalJobRecord` carries a
/// missing-value marker, and that the record serialises without nulls.
///
/// ```rust
/// assert_no_sentinels!(record);
/// ```
#[macro_export]
macro_rules! assert_no_sentinels {
    ($record:expr) => {{
        let record: &jobagg_core::CanonicalJobRecord = &$record;
        if let Some((key, value)) = $crate::common::assertions::sentinel_field(record) {
            panic!(
                "assert_no_sentinels! failed: field {:?} holds {:?}\n  title: {:?}",
                key, value, record.title
            );
        }
    }};
}

/// Assert that a record's `salary_display` matches its salary columns.
#[macro_export]
macro_rules! assert_salary_consistent {
    ($record:expr) => {{
        let record: &jobagg_core::CanonicalJobRecord = &$record;
        let expected = jobagg_core::normalizer::salary_display(
            &record.min_amount,
            &record.max_amount,
            &record.currency,
        );
        if record.salary_display != expected {
            panic!(
                "assert_salary_consistent! failed:\n  expected: {:?}\n  actual:   {:?}",
                expected, record.salary_display
            );
        }
    }};
}

/// First serialised field that is `null` or a textual missing-value marker.
pub fn sentinel_field(record: &CanonicalJobRecord) -> Option<(String, serde_json::Value)> {
    let serde_json::Value::Object(map) = serde_json::to_value(record).ok()? else {
        return None;
    };
    map.into_iter().find(|(_, value)| match value {
        serde_json::Value::Null => true,
        serde_json::Value::String(s) => SENTINEL_MARKERS.contains(s.trim()),
        _ => false,
    })
}
