//! App Configuration
//!
//! Values are baked in at build time from `GORESTAURANT_*` environment variables.

use std::str::FromStr;

pub const DEFAULT_API_URL: &str = "http://localhost:3333";
pub const DEFAULT_CACHE_KEY: &str = "@GoRestaurante";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend base URL, without trailing slash
    pub api_base_url: String,
    /// localStorage key holding cached dishes
    pub cache_key: String,
    /// Mirror local add/update/delete to the backend
    pub write_through: bool,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            cache_key: DEFAULT_CACHE_KEY.to_string(),
            write_through: false,
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("GORESTAURANT_API_URL"),
            option_env!("GORESTAURANT_CACHE_KEY"),
            option_env!("GORESTAURANT_WRITE_THROUGH"),
            option_env!("GORESTAURANT_LOG_LEVEL"),
        )
    }

    fn from_values(
        api_url: Option<&str>,
        cache_key: Option<&str>,
        write_through: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let defaults = Self::default();

        let api_base_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base_url);

        let cache_key = cache_key
            .filter(|key| !key.trim().is_empty())
            .map(str::to_string)
            .unwrap_or(defaults.cache_key);

        Self {
            api_base_url,
            cache_key,
            write_through: write_through.map(parse_flag).unwrap_or(defaults.write_through),
            log_level: log_level
                .and_then(|level| log::Level::from_str(level.trim()).ok())
                .unwrap_or(defaults.log_level),
        }
    }

    /// `GET`/`POST` endpoint for the collection
    pub fn foods_url(&self) -> String {
        format!("{}/foods", self.api_base_url)
    }

    /// `PUT`/`DELETE` endpoint for one dish
    pub fn food_url(&self, id: u32) -> String {
        format!("{}/foods/{}", self.api_base_url, id)
    }
}

fn default_log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
