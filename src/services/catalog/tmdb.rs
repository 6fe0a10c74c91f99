//! TMDB (The Movie Database) catalog client
//!
//! API Flow:
//! 1. Sampling: /discover/movie?page=N → movie summaries + total page count
//! 2. Filtering: /movie/{id}/watch/providers → per-region offers
//! 3. Enrichment: /movie/{id} and /movie/{id}/videos
use crate::{
    error::{AppError, AppResult},
    models::{
        ApiGenresResponse, ApiVideo, ApiVideosResponse, ApiWatchProvidersResponse, CatalogPage,
        Genre, MovieDetails, ProviderEntry, Trailer,
    },
    services::catalog::CatalogClient,
};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::time::Duration;

const DISCOVER_SORT: &str = "popularity.desc";

#[derive(Clone)]
pub struct TmdbCatalog {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    language: String,
    region: String,
}

impl TmdbCatalog {
    pub fn new(
        api_key: String,
        api_url: String,
        language: String,
        region: String,
        request_timeout: Duration,
    ) -> AppResult<Self> {
        if api_key.trim().is_empty() {
            return Err(AppError::Internal(
                "TMDB API key cannot be empty".to_string(),
            ));
        }

        let http_client = HttpClient::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
            language,
            region,
        })
    }

    /// GET `{api_url}{path}` with the API key appended and decode the body
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> AppResult<T> {
        let url = format!("{}{}", self.api_url, path);
        tracing::debug!(url = %url, "TMDB request");

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::CatalogUnavailable(format!(
                "TMDB returned status {} for {}: {}",
                status, path, body
            )));
        }

        response.json::<T>().await.map_err(|e| {
            AppError::CatalogUnavailable(format!("Failed to parse TMDB response for {}: {}", path, e))
        })
    }
}

#[async_trait::async_trait]
impl CatalogClient for TmdbCatalog {
    async fn fetch_page(&self, page: u32) -> AppResult<CatalogPage> {
        let page_param = page.to_string();
        let catalog_page: CatalogPage = self
            .get_json(
                "/discover/movie",
                &[
                    ("language", self.language.as_str()),
                    ("sort_by", DISCOVER_SORT),
                    ("page", page_param.as_str()),
                ],
            )
            .await?;

        tracing::debug!(
            page = page,
            results = catalog_page.results.len(),
            total_pages = catalog_page.total_pages,
            "Discover page fetched"
        );

        Ok(catalog_page)
    }

    async fn fetch_details(&self, movie_id: u64) -> AppResult<MovieDetails> {
        self.get_json(
            &format!("/movie/{}", movie_id),
            &[("language", self.language.as_str())],
        )
        .await
    }

    async fn fetch_videos(&self, movie_id: u64) -> AppResult<Vec<Trailer>> {
        let videos: ApiVideosResponse = self
            .get_json(
                &format!("/movie/{}/videos", movie_id),
                &[("language", self.language.as_str())],
            )
            .await?;

        Ok(videos
            .results
            .into_iter()
            .filter(ApiVideo::is_trailer)
            .map(Trailer::from)
            .collect())
    }

    async fn fetch_providers(&self, movie_id: u64) -> AppResult<Vec<ProviderEntry>> {
        let providers: ApiWatchProvidersResponse = self
            .get_json(&format!("/movie/{}/watch/providers", movie_id), &[])
            .await?;

        Ok(providers.flatrate_for(&self.region))
    }

    async fn fetch_genres(&self) -> AppResult<Vec<Genre>> {
        let response: ApiGenresResponse = self
            .get_json("/genre/movie/list", &[("language", self.language.as_str())])
            .await?;

        tracing::info!(
            genres = response.genres.len(),
            catalog = self.name(),
            "Genre list fetched"
        );

        Ok(response.genres)
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
