//! Normalization of raw backend list payloads into the canonical page shape.
//!
//! The backend services answer with one of two key-casing conventions:
//!
//! ```json
//! { "data": [...], "metadata": { "total": 1, "page_size": 20, ... } }
//! { "Data": [...], "Metadata": { "Total": 1, "PageSize": 20, ... } }
//! ```
//!
//! Each logical field has an explicit ordered list of candidate keys, tried
//! in sequence; adding a third schema variant means adding a key to a list,
//! nothing else. Normalization never fails: an unusable payload becomes an
//! empty result with all-zero metadata.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::meta::{PageMetadata, PagedResult};

/// Candidate keys per logical field, lower-snake preferred.
const ITEMS_KEYS: &[&str] = &["data", "Data"];
const METADATA_KEYS: &[&str] = &["metadata", "Metadata"];
const TOTAL_KEYS: &[&str] = &["total", "Total"];
const PAGE_SIZE_KEYS: &[&str] = &["page_size", "PageSize"];
const PAGE_NUMBER_KEYS: &[&str] = &["page_number", "PageNumber"];

/// First present, non-null value among the candidate keys.
fn lookup<'a>(value: &'a Value, candidates: &[&str]) -> Option<&'a Value> {
    candidates
        .iter()
        .find_map(|key| value.get(key))
        .filter(|found| !found.is_null())
}

/// Read a metadata count. Negative or non-integer values count as absent.
fn count_field(metadata: Option<&Value>, candidates: &[&str]) -> u64 {
    metadata
        .and_then(|meta| lookup(meta, candidates))
        .and_then(Value::as_u64)
        .unwrap_or(0)
}

fn clamp_u32(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Convert a raw backend payload into a canonical `PagedResult`.
///
/// Rows that do not match the expected item shape are dropped with a warning
/// rather than failing the page. `total_pages` is recomputed from the counts;
/// whatever the payload claims is ignored.
pub fn normalize<T: DeserializeOwned>(raw: Value) -> PagedResult<T> {
    let items = lookup(&raw, ITEMS_KEYS)
        .and_then(Value::as_array)
        .map(|rows| {
            rows.iter()
                .filter_map(|row| match serde_json::from_value::<T>(row.clone()) {
                    Ok(item) => Some(item),
                    Err(err) => {
                        tracing::warn!(error = %err, "dropping list row with unexpected shape");
                        None
                    }
                })
                .collect()
        })
        .unwrap_or_default();

    let metadata = lookup(&raw, METADATA_KEYS);
    let total = count_field(metadata, TOTAL_KEYS);
    let page_size = clamp_u32(count_field(metadata, PAGE_SIZE_KEYS));
    let page_number = clamp_u32(count_field(metadata, PAGE_NUMBER_KEYS));

    PagedResult {
        items,
        metadata: PageMetadata::from_counts(total, page_size, page_number),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: String,
    }

    #[test]
    fn both_casings_normalize_identically() {
        let snake = json!({
            "data": [{"id": "a"}, {"id": "b"}],
            "metadata": {"total": 42, "page_size": 20, "page_number": 2, "total_pages": 3}
        });
        let camel = json!({
            "Data": [{"id": "a"}, {"id": "b"}],
            "Metadata": {"Total": 42, "PageSize": 20, "PageNumber": 2, "TotalPages": 3}
        });

        let from_snake: PagedResult<Row> = normalize(snake);
        let from_camel: PagedResult<Row> = normalize(camel);
        assert_eq!(from_snake, from_camel);
        assert_eq!(from_snake.items.len(), 2);
        assert_eq!(from_snake.metadata.total, 42);
        assert_eq!(from_snake.metadata.page_number, 2);
    }

    #[test]
    fn lower_snake_wins_when_both_casings_present() {
        let raw = json!({
            "data": [{"id": "snake"}],
            "Data": [{"id": "camel"}],
            "metadata": {"total": 1, "page_size": 20, "page_number": 1},
            "Metadata": {"Total": 99, "PageSize": 5, "PageNumber": 9}
        });
        let result: PagedResult<Row> = normalize(raw);
        assert_eq!(result.items, vec![Row { id: "snake".into() }]);
        assert_eq!(result.metadata.total, 1);
    }

    #[test]
    fn empty_object_yields_empty_zeroed_result() {
        let result: PagedResult<Row> = normalize(json!({}));
        assert!(result.items.is_empty());
        assert_eq!(result.metadata, PageMetadata::empty());
    }

    #[test]
    fn non_object_payload_yields_empty_result() {
        let result: PagedResult<Row> = normalize(json!("not a list"));
        assert!(result.is_empty());
        let result: PagedResult<Row> = normalize(Value::Null);
        assert!(result.is_empty());
    }

    #[test]
    fn negative_and_non_numeric_counts_default_to_zero() {
        let raw = json!({
            "data": [],
            "metadata": {"total": -5, "page_size": "twenty", "page_number": 1.5}
        });
        let result: PagedResult<Row> = normalize(raw);
        assert_eq!(result.metadata.total, 0);
        assert_eq!(result.metadata.page_size, 0);
        assert_eq!(result.metadata.page_number, 0);
        assert_eq!(result.metadata.total_pages, 0);
    }

    #[test]
    fn total_pages_is_recomputed_not_trusted() {
        let raw = json!({
            "data": [],
            "metadata": {"total": 45, "page_size": 20, "page_number": 1, "total_pages": 999}
        });
        let result: PagedResult<Row> = normalize(raw);
        assert_eq!(result.metadata.total_pages, 3);
    }

    #[test]
    fn malformed_rows_are_dropped_not_fatal() {
        let raw = json!({
            "data": [{"id": "ok"}, {"id": 7}, "garbage", {"id": "also ok"}],
            "metadata": {"total": 4, "page_size": 20, "page_number": 1}
        });
        let result: PagedResult<Row> = normalize(raw);
        assert_eq!(
            result.items,
            vec![Row { id: "ok".into() }, Row { id: "also ok".into() }]
        );
    }

    #[test]
    fn camel_fallback_applies_per_field() {
        // A payload may mix conventions; each field falls back independently.
        let raw = json!({
            "Data": [{"id": "a"}],
            "metadata": {"Total": 10, "page_size": 5, "PageNumber": 2}
        });
        let result: PagedResult<Row> = normalize(raw);
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.metadata.total, 10);
        assert_eq!(result.metadata.page_size, 5);
        assert_eq!(result.metadata.page_number, 2);
        assert_eq!(result.metadata.total_pages, 2);
    }
}
