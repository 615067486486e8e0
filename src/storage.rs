//! Local Storage Adapter
//!
//! JSON-encoded values under string keys in the browser's localStorage.
//! A value that is missing or fails to decode is indistinguishable from
//! one that was never written: the caller's fallback is returned.

use serde::de::DeserializeOwned;
use serde::Serialize;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Decode a raw stored string, falling back on absence or malformed data.
pub fn decode_or<T: DeserializeOwned>(raw: Option<String>, fallback: T) -> T {
    raw.and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or(fallback)
}

/// Read and decode the value under `key`, or `fallback`.
pub fn load<T: DeserializeOwned>(key: &str, fallback: T) -> T {
    let raw = local_storage().and_then(|s| s.get_item(key).ok().flatten());
    decode_or(raw, fallback)
}

/// Encode `value` and write it under `key`, overwriting any prior value.
/// Write failures (quota, unavailable storage) are ignored.
pub fn save<T: Serialize>(key: &str, value: &T) {
    let Ok(encoded) = serde_json::to_string(value) else {
        return;
    };
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, &encoded);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TodoItem;

    #[test]
    fn test_decode_or_missing_returns_fallback() {
        let v: Vec<TodoItem> = decode_or(None, Vec::new());
        assert!(v.is_empty());
        assert_eq!(decode_or(None, "fb".to_string()), "fb");
    }

    #[test]
    fn test_decode_or_malformed_returns_fallback() {
        let v: Vec<TodoItem> = decode_or(Some("not json".to_string()), Vec::new());
        assert!(v.is_empty());
        // Well-formed JSON of the wrong shape is also treated as missing
        let v: Vec<TodoItem> = decode_or(Some("{\"a\":1}".to_string()), Vec::new());
        assert!(v.is_empty());
    }

    #[test]
    fn test_decode_roundtrip() {
        let todos = vec![
            TodoItem {
                text: "Buy milk".to_string(),
                done: false,
            },
            TodoItem {
                text: "Ship it".to_string(),
                done: true,
            },
        ];
        let encoded = serde_json::to_string(&todos).unwrap();
        let decoded: Vec<TodoItem> = decode_or(Some(encoded), Vec::new());
        assert_eq!(decoded, todos);
    }
}
