use std::time::Duration;

use serde::Deserialize;

use crate::services::discovery::DiscoveryLimits;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// TMDB API key (v3 auth)
    pub tmdb_api_key: String,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// Display language sent with catalog requests
    #[serde(default = "default_catalog_language")]
    pub catalog_language: String,

    /// Region whose flatrate offers count as streaming availability
    #[serde(default = "default_watch_region")]
    pub watch_region: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Timeout applied to every upstream request, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Maximum pages sampled per search (0 = unbounded)
    ///
    /// Defaults to 500. The original service kept sampling until it found a
    /// match; set this and `search_timeout_secs` to 0 to get that behavior.
    #[serde(default = "default_max_search_attempts")]
    pub max_search_attempts: u32,

    /// Wall-clock budget per search, in seconds (0 = unbounded)
    ///
    /// Defaults to 60. The original service had no deadline.
    #[serde(default = "default_search_timeout_secs")]
    pub search_timeout_secs: u64,

    /// Directory with the static front-end, served as a fallback when set
    #[serde(default)]
    pub static_dir: Option<String>,
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_catalog_language() -> String {
    "es-ES".to_string()
}

fn default_watch_region() -> String {
    "ES".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_max_search_attempts() -> u32 {
    500
}

fn default_search_timeout_secs() -> u64 {
    60
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Search bounds derived from the attempt and timeout settings
    pub fn discovery_limits(&self) -> DiscoveryLimits {
        DiscoveryLimits {
            max_attempts: (self.max_search_attempts > 0).then_some(self.max_search_attempts),
            max_duration: (self.search_timeout_secs > 0)
                .then(|| Duration::from_secs(self.search_timeout_secs)),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
