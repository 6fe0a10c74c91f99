//! Remote movie catalog abstraction
//!
//! The discovery loop only ever talks to the catalog through this trait, so the
//! TMDB client can be swapped for an in-memory catalog in tests.
use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{CatalogPage, Genre, MovieDetails, ProviderEntry, Trailer},
};

pub mod tmdb;

pub use tmdb::TmdbCatalog;

/// Trait for paginated movie catalogs
///
/// Every method is a single upstream round-trip. Failures surface as
/// `AppError::CatalogUnavailable` and are never retried here.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Fetch one page of discover results (1-based)
    async fn fetch_page(&self, page: u32) -> AppResult<CatalogPage>;

    /// Fetch runtime and rating for a movie
    async fn fetch_details(&self, movie_id: u64) -> AppResult<MovieDetails>;

    /// Fetch the YouTube trailers of a movie
    async fn fetch_videos(&self, movie_id: u64) -> AppResult<Vec<Trailer>>;

    /// Fetch the subscription offers of a movie in the configured region
    async fn fetch_providers(&self, movie_id: u64) -> AppResult<Vec<ProviderEntry>>;

    /// Fetch the catalog's genre list in the configured display language
    async fn fetch_genres(&self) -> AppResult<Vec<Genre>>;

    /// Catalog name for logging and debugging
    fn name(&self) -> &'static str;
}
