//! Canonical response-envelope normalization
//!
//! The backend's list payload may appear at `data`, `data.data`, `items`,
//! or `data.items`, and single objects at `data.data`, `data`, or the
//! root. That variance is normalized here, once, immediately after every
//! network call; no other module probes response shapes.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use core_kernel::lenient;

use crate::error::ApiError;

/// Pagination metadata when the server sends it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListMeta {
    #[serde(default, deserialize_with = "lenient::count")]
    pub page: u64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub limit: u64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub total: u64,
}

/// A normalized list response
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: Option<ListMeta>,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Locates the list payload inside whichever envelope the server used
fn list_slot(body: &Value) -> Option<&Value> {
    if body.is_array() {
        return Some(body);
    }

    let data = body.get("data");
    if let Some(value) = data {
        if value.is_array() {
            return Some(value);
        }
        if let Some(nested) = value.get("data").filter(|v| v.is_array()) {
            return Some(nested);
        }
        if let Some(nested) = value.get("items").filter(|v| v.is_array()) {
            return Some(nested);
        }
    }

    body.get("items").filter(|v| v.is_array())
}

/// Locates pagination metadata next to wherever the list payload sat
fn meta_slot(body: &Value) -> Option<&Value> {
    body.get("meta")
        .or_else(|| body.get("data").and_then(|d| d.get("meta")))
        .filter(|v| v.is_object())
}

/// Normalizes a list response into typed items plus optional metadata
///
/// An envelope with no recognizable list payload yields an empty page:
/// the backend genuinely sends that for empty collections, so it is not
/// treated as a decode failure.
pub fn page<T: DeserializeOwned>(body: &Value) -> Result<Page<T>, ApiError> {
    let items = match list_slot(body) {
        Some(list) => serde_json::from_value(list.clone())
            .map_err(|e| ApiError::Decode(format!("list payload: {e}")))?,
        None => Vec::new(),
    };

    let meta = match meta_slot(body) {
        Some(value) => serde_json::from_value(value.clone()).ok(),
        None => None,
    };

    Ok(Page { items, meta })
}

/// Normalizes a single-object response
pub fn item<T: DeserializeOwned>(body: &Value) -> Result<T, ApiError> {
    let slot = body
        .get("data")
        .map(|data| data.get("data").filter(|v| !v.is_null()).unwrap_or(data))
        .filter(|v| !v.is_null())
        .unwrap_or(body);

    serde_json::from_value(slot.clone()).map_err(|e| ApiError::Decode(format!("item payload: {e}")))
}

/// Extracts the server's human-readable message, if present
pub fn message(body: &Value) -> Option<String> {
    for key in ["message", "error"] {
        if let Some(Value::String(msg)) = body.get(key) {
            if !msg.trim().is_empty() {
                return Some(msg.clone());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Row {
        id: String,
    }

    #[test]
    fn test_list_at_data() {
        let body = json!({"message": "ok", "data": [{"id": "a"}, {"id": "b"}]});
        let page: Page<Row> = page(&body).unwrap();
        assert_eq!(page.len(), 2);
    }

    #[test]
    fn test_list_at_data_data() {
        let body = json!({"data": {"data": [{"id": "a"}], "meta": {"page": 1, "limit": 10, "total": 1}}});
        let page: Page<Row> = page(&body).unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page.meta.unwrap().total, 1);
    }

    #[test]
    fn test_list_at_items() {
        let body = json!({"items": [{"id": "a"}], "meta": {"total": "7"}});
        let page: Page<Row> = page(&body).unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page.meta.unwrap().total, 7);
    }

    #[test]
    fn test_list_at_data_items() {
        let body = json!({"data": {"items": [{"id": "a"}, {"id": "b"}, {"id": "c"}]}});
        let page: Page<Row> = page(&body).unwrap();
        assert_eq!(page.len(), 3);
    }

    #[test]
    fn test_bare_array() {
        let body = json!([{"id": "a"}]);
        let page: Page<Row> = page(&body).unwrap();
        assert_eq!(page.len(), 1);
    }

    #[test]
    fn test_missing_list_is_empty_not_error() {
        let body = json!({"message": "nothing here"});
        let page: Page<Row> = page(&body).unwrap();
        assert!(page.is_empty());
    }

    #[test]
    fn test_malformed_rows_are_a_decode_error() {
        let body = json!({"data": [{"nope": 1}]});
        let result: Result<Page<Row>, _> = page(&body);
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_item_at_data() {
        let body = json!({"message": "ok", "data": {"id": "a"}});
        let row: Row = item(&body).unwrap();
        assert_eq!(row.id, "a");
    }

    #[test]
    fn test_item_at_data_data() {
        let body = json!({"data": {"message": "ok", "data": {"id": "a"}}});
        let row: Row = item(&body).unwrap();
        assert_eq!(row.id, "a");
    }

    #[test]
    fn test_item_at_root() {
        let body = json!({"id": "a"});
        let row: Row = item(&body).unwrap();
        assert_eq!(row.id, "a");
    }

    #[test]
    fn test_message_extraction() {
        assert_eq!(
            message(&json!({"message": "Invoice sudah dibayar"})),
            Some("Invoice sudah dibayar".to_string())
        );
        assert_eq!(
            message(&json!({"error": "Bad request"})),
            Some("Bad request".to_string())
        );
        assert_eq!(message(&json!({"message": ""})), None);
        assert_eq!(message(&json!({"code": 42})), None);
    }
}
