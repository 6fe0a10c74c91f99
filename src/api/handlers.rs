use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{EnrichedMovie, Genre, GenreFilter, PlatformFilter},
    services::SearchCriteria,
};

use super::AppState;

// Request types

/// Query string of `GET /movies/random`, both lists comma-separated
#[derive(Debug, Default, Deserialize)]
pub struct RandomMovieQuery {
    pub genre: Option<String>,
    pub providers: Option<String>,
}

impl RandomMovieQuery {
    pub fn into_criteria(self) -> AppResult<SearchCriteria> {
        let genres = match self.genre.as_deref() {
            Some(raw) => GenreFilter::parse(raw)?,
            None => GenreFilter::default(),
        };
        let platforms = self
            .providers
            .as_deref()
            .map(PlatformFilter::parse)
            .unwrap_or_default();

        Ok(SearchCriteria { genres, platforms })
    }
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Genre list passthrough
pub async fn get_genres(State(state): State<AppState>) -> AppResult<Json<Vec<Genre>>> {
    let genres = state.catalog.fetch_genres().await?;
    Ok(Json(genres))
}

/// Find a random movie matching the requested genres and platforms
pub async fn random_movie(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    query: Result<Query<RandomMovieQuery>, QueryRejection>,
) -> AppResult<Json<EnrichedMovie>> {
    let Query(query) = query.map_err(|e| AppError::InvalidInput(e.body_text()))?;
    let criteria = query.into_criteria()?;

    tracing::info!(
        request_id = %request_id,
        genre_count = criteria.genres.len(),
        platform_count = criteria.platforms.terms().len(),
        "Processing random movie request"
    );

    let movie = state.discovery.clone().discover_detached(criteria).await?;

    tracing::info!(
        request_id = %request_id,
        movie_id = movie.id,
        "Random movie selected"
    );

    Ok(Json(movie))
}
