use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod filters;
pub mod movie;

pub use filters::{GenreFilter, PlatformFilter};
pub use movie::{EnrichedMovie, ProviderInfo};

/// Upper bound on the pages the discover endpoint will serve
pub const MAX_CATALOG_PAGES: u32 = 500;

/// Single movie summary as returned by the discover endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Candidate {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<u32>,
}

/// One page of discover results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogPage {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<Candidate>,
    #[serde(default)]
    pub total_pages: u32,
}

impl CatalogPage {
    /// Number of pages that may be sampled, never zero and never above
    /// [`MAX_CATALOG_PAGES`]
    pub fn sampling_pages(&self) -> u32 {
        self.total_pages.clamp(1, MAX_CATALOG_PAGES)
    }
}

/// Subset of `GET /movie/{id}` used for enrichment
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MovieDetails {
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub vote_average: Option<f64>,
}

// ============================================================================
// Videos
// ============================================================================

pub const TRAILER_SITE: &str = "YouTube";
pub const TRAILER_TYPE: &str = "Trailer";

/// Raw entry from `GET /movie/{id}/videos`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiVideo {
    pub key: String,
    pub site: String,
    #[serde(rename = "type")]
    pub video_type: String,
}

#[derive(Debug, Deserialize)]
pub struct ApiVideosResponse {
    #[serde(default)]
    pub results: Vec<ApiVideo>,
}

/// Trailer reference returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Trailer {
    pub key: String,
    pub site: String,
    #[serde(rename = "type")]
    pub video_type: String,
}

impl ApiVideo {
    pub fn is_trailer(&self) -> bool {
        self.site == TRAILER_SITE && self.video_type == TRAILER_TYPE
    }
}

impl From<ApiVideo> for Trailer {
    fn from(video: ApiVideo) -> Self {
        Trailer {
            key: video.key,
            site: video.site,
            video_type: video.video_type,
        }
    }
}

// ============================================================================
// Watch providers
// ============================================================================

/// Raw provider offer from `GET /movie/{id}/watch/providers`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderEntry {
    pub provider_name: String,
    #[serde(default)]
    pub logo_path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegionProviders {
    #[serde(default)]
    pub flatrate: Vec<ProviderEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ApiWatchProvidersResponse {
    #[serde(default)]
    pub results: HashMap<String, RegionProviders>,
}

impl ApiWatchProvidersResponse {
    /// Subscription offers for one region, empty when the region is absent
    pub fn flatrate_for(mut self, region: &str) -> Vec<ProviderEntry> {
        self.results
            .remove(region)
            .map(|r| r.flatrate)
            .unwrap_or_default()
    }
}

// ============================================================================
// Genres
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ApiGenresResponse {
    pub genres: Vec<Genre>,
}
