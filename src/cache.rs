//! Food Cache Repository
//!
//! Read access to dishes cached in the browser's persisted key-value store.
//! Cached values are JSON: an array of dishes or a single dish.

use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::models::FoodItem;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("persisted storage is not available: {0}")]
    Unavailable(String),
    #[error("could not read key {key}: {reason}")]
    Read { key: String, reason: String },
    #[error("cached value under {key} is not a dish list: {source}")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Source of previously cached dishes
pub trait FoodCache {
    /// `Ok(None)` when nothing is cached
    fn load(&self) -> Result<Option<Vec<FoodItem>>, CacheError>;
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CachedFoods {
    Many(Vec<FoodItem>),
    One(FoodItem),
}

/// Parse a cached value stored under `key`
pub fn decode_cached(key: &str, raw: &str) -> Result<Vec<FoodItem>, CacheError> {
    let cached = serde_json::from_str::<CachedFoods>(raw).map_err(|source| CacheError::Parse {
        key: key.to_string(),
        source,
    })?;

    Ok(match cached {
        CachedFoods::Many(foods) => foods,
        CachedFoods::One(food) => vec![food],
    })
}

/// `window.localStorage` under a fixed key
#[derive(Debug, Clone)]
pub struct LocalStorageCache {
    key: String,
}

impl LocalStorageCache {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl FoodCache for LocalStorageCache {
    fn load(&self) -> Result<Option<Vec<FoodItem>>, CacheError> {
        let window = web_sys::window()
            .ok_or_else(|| CacheError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| CacheError::Unavailable(js_error(e)))?
            .ok_or_else(|| CacheError::Unavailable("localStorage disabled".to_string()))?;

        let raw = storage.get_item(&self.key).map_err(|e| CacheError::Read {
            key: self.key.clone(),
            reason: js_error(e),
        })?;

        match raw {
            Some(raw) => {
                log::debug!("[CACHE] Found cached value under {}", self.key);
                decode_cached(&self.key, &raw).map(Some)
            }
            None => Ok(None),
        }
    }
}

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

/// In-memory stand-in for tests
#[cfg(test)]
pub struct MemoryCache {
    pub key: String,
    pub value: Option<String>,
}

#[cfg(test)]
impl FoodCache for MemoryCache {
    fn load(&self) -> Result<Option<Vec<FoodItem>>, CacheError> {
        self.value
            .as_deref()
            .map(|raw| decode_cached(&self.key, raw))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DISH: &str = r#"{"id":1,"name":"Ao molho","image":"a.png","price":"19.90","description":"Pasta","available":true}"#;

    #[test]
    fn test_decode_array() {
        let raw = format!("[{},{}]", DISH, DISH.replace("\"id\":1", "\"id\":2"));
        let foods = decode_cached("@GoRestaurante", &raw).unwrap();
        assert_eq!(foods.len(), 2);
        assert_eq!(foods[1].id, 2);
    }

    #[test]
    fn test_decode_single_object() {
        let foods = decode_cached("@GoRestaurante", DISH).unwrap();
        assert_eq!(foods.len(), 1);
        assert_eq!(foods[0].name, "Ao molho");
    }

    #[test]
    fn test_decode_rejects_raw_text() {
        let err = decode_cached("@GoRestaurante", "just some text").unwrap_err();
        assert!(matches!(err, CacheError::Parse { ref key, .. } if key == "@GoRestaurante"));
    }

    #[test]
    fn test_memory_cache() {
        let empty = MemoryCache { key: "k".to_string(), value: None };
        assert!(empty.load().unwrap().is_none());

        let filled = MemoryCache { key: "k".to_string(), value: Some(DISH.to_string()) };
        assert_eq!(filled.load().unwrap().map(|f| f.len()), Some(1));
    }
}
