//! Initial Load
//!
//! Fetches the menu once and puts any cached dishes in front of it.

use std::collections::HashSet;

use crate::cache::FoodCache;
use crate::commands::{self, ApiError};
use crate::config::AppConfig;
use crate::models::FoodItem;

/// Result of the mount-time load
#[derive(Debug)]
pub struct InitialLoad {
    pub foods: Vec<FoodItem>,
    /// How many of `foods` came from the cache
    pub cached: usize,
    /// Set when the backend read failed; `foods` then holds cached dishes only
    pub fetch_error: Option<ApiError>,
}

pub async fn load_initial_foods(config: &AppConfig, cache: &dyn FoodCache) -> InitialLoad {
    let fetched = commands::list_foods(config).await;
    let cached = read_cache(cache);
    compose(cached, fetched)
}

/// Cache failures count as "nothing cached"
pub fn read_cache(cache: &dyn FoodCache) -> Option<Vec<FoodItem>> {
    match cache.load() {
        Ok(cached) => cached,
        Err(e) => {
            log::warn!("[CACHE] Ignoring cached dishes: {}", e);
            None
        }
    }
}

/// Cached dishes go first. A cached dish whose id the backend also returned is
/// dropped (the backend copy wins), and only the first dish per id is kept, so
/// ids are unique in the result.
pub fn compose(cached: Option<Vec<FoodItem>>, fetched: Result<Vec<FoodItem>, ApiError>) -> InitialLoad {
    let (fetched, fetch_error) = match fetched {
        Ok(foods) => (foods, None),
        Err(e) => (Vec::new(), Some(e)),
    };

    let fetched_ids: HashSet<u32> = fetched.iter().map(|food| food.id).collect();
    let mut seen = HashSet::with_capacity(fetched.len());

    let cached: Vec<FoodItem> = cached
        .unwrap_or_default()
        .into_iter()
        .filter(|food| !fetched_ids.contains(&food.id) && seen.insert(food.id))
        .collect();
    let count = cached.len();
    if count > 0 {
        log::info!("[DASHBOARD] Prepending {} cached dishes", count);
    }

    let mut foods = cached;
    foods.extend(fetched.into_iter().filter(|food| seen.insert(food.id)));

    InitialLoad { foods, cached: count, fetch_error }
}
