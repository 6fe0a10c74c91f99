use std::collections::HashMap;
use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::Value;

use movie_roulette::{
    api::{create_router, AppState},
    error::{AppError, AppResult},
    models::{Candidate, CatalogPage, Genre, MovieDetails, ProviderEntry, Trailer},
    services::{CatalogClient, DiscoveryLimits},
};

/// In-memory catalog with a fixed set of pages
#[derive(Default)]
struct FakeCatalog {
    total_pages: u32,
    pages: HashMap<u32, Vec<Candidate>>,
    offers: HashMap<u64, Vec<ProviderEntry>>,
    offline: bool,
    details_offline: bool,
}

impl FakeCatalog {
    fn with_page(mut self, page: u32, results: Vec<Candidate>) -> Self {
        self.total_pages = self.total_pages.max(page);
        self.pages.insert(page, results);
        self
    }

    fn with_offers(mut self, movie_id: u64, names: &[&str]) -> Self {
        let entries = names
            .iter()
            .map(|name| ProviderEntry {
                provider_name: name.to_string(),
                logo_path: Some(format!("/{}.jpg", movie_id)),
            })
            .collect();
        self.offers.insert(movie_id, entries);
        self
    }

    fn unavailable() -> AppError {
        AppError::CatalogUnavailable("fake catalog offline".to_string())
    }
}

#[async_trait::async_trait]
impl CatalogClient for FakeCatalog {
    async fn fetch_page(&self, page: u32) -> AppResult<CatalogPage> {
        if self.offline {
            return Err(Self::unavailable());
        }
        Ok(CatalogPage {
            page,
            results: self.pages.get(&page).cloned().unwrap_or_default(),
            total_pages: self.total_pages,
        })
    }

    async fn fetch_details(&self, _movie_id: u64) -> AppResult<MovieDetails> {
        if self.details_offline {
            return Err(Self::unavailable());
        }
        Ok(MovieDetails {
            runtime: Some(148),
            vote_average: Some(8.3),
        })
    }

    async fn fetch_videos(&self, movie_id: u64) -> AppResult<Vec<Trailer>> {
        Ok(vec![Trailer {
            key: format!("trailer-{}", movie_id),
            site: "YouTube".to_string(),
            video_type: "Trailer".to_string(),
        }])
    }

    async fn fetch_providers(&self, movie_id: u64) -> AppResult<Vec<ProviderEntry>> {
        Ok(self.offers.get(&movie_id).cloned().unwrap_or_default())
    }

    async fn fetch_genres(&self) -> AppResult<Vec<Genre>> {
        if self.offline {
            return Err(Self::unavailable());
        }
        Ok(vec![
            Genre {
                id: 28,
                name: "Acción".to_string(),
            },
            Genre {
                id: 35,
                name: "Comedia".to_string(),
            },
        ])
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}

fn movie(id: u64, genre_ids: &[u32]) -> Candidate {
    Candidate {
        id,
        title: format!("Película {}", id),
        overview: Some("Sinopsis".to_string()),
        release_date: Some("2010-07-16".to_string()),
        poster_path: Some(format!("/poster-{}.jpg", id)),
        genre_ids: genre_ids.to_vec(),
    }
}

/// Three pages where only movie 27205 is action and on HBO Max
fn sample_catalog() -> FakeCatalog {
    FakeCatalog::default()
        .with_page(1, vec![movie(1, &[35]), movie(2, &[28])])
        .with_page(2, vec![])
        .with_page(3, vec![movie(27205, &[28, 878]), movie(4, &[18])])
        .with_offers(1, &["Netflix"])
        .with_offers(2, &["Hulu"])
        .with_offers(27205, &["HBO Max", "Filmin"])
        .with_offers(4, &["HBO Max"])
}

fn create_test_server(catalog: FakeCatalog, limits: DiscoveryLimits) -> TestServer {
    let state = AppState::new(Arc::new(catalog), limits);
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

fn generous_limits() -> DiscoveryLimits {
    DiscoveryLimits {
        max_attempts: Some(100_000),
        max_duration: None,
    }
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server(FakeCatalog::default(), generous_limits());
    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_genres_passthrough() {
    let server = create_test_server(FakeCatalog::default(), generous_limits());
    let response = server.get("/genres").await;
    response.assert_status_ok();

    let genres: Vec<Value> = response.json();
    assert_eq!(genres.len(), 2);
    assert_eq!(genres[0]["id"], 28);
    assert_eq!(genres[0]["name"], "Acción");
}

#[tokio::test]
async fn test_genres_upstream_failure() {
    let catalog = FakeCatalog {
        offline: true,
        ..FakeCatalog::default()
    };
    let server = create_test_server(catalog, generous_limits());
    let response = server.get("/genres").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json();
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_random_movie_matches_filters() {
    let server = create_test_server(sample_catalog(), generous_limits());
    let response = server.get("/movies/random?genre=28&providers=hbo").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["id"], 27205);
    assert_eq!(body["title"], "Película 27205");
    assert_eq!(body["genre_ids"], serde_json::json!([28, 878]));
    assert_eq!(body["runtime"], 148);
    assert_eq!(body["vote_average"], 8.3);
    assert_eq!(body["release_date"], "2010-07-16");
    assert_eq!(body["poster_path"], "/poster-27205.jpg");

    let providers = body["providers"].as_array().unwrap();
    assert_eq!(providers.len(), 1);
    assert_eq!(providers[0]["name"], "HBO Max");
    assert_eq!(providers[0]["logo_path"], "/27205.jpg");

    assert_eq!(body["trailers"][0]["key"], "trailer-27205");
    assert_eq!(body["trailers"][0]["site"], "YouTube");
    assert_eq!(body["trailers"][0]["type"], "Trailer");
}

#[tokio::test]
async fn test_random_movie_without_filters_is_streamable() {
    let server = create_test_server(sample_catalog(), generous_limits());

    for _ in 0..5 {
        let response = server.get("/movies/random").await;
        response.assert_status_ok();

        let body: Value = response.json();
        let id = body["id"].as_u64().unwrap();
        // movie 2 is only on Hulu and can never be returned
        assert!([1, 27205, 4].contains(&id), "unexpected movie {}", id);
        assert!(!body["providers"].as_array().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_random_movie_rejects_bad_genre() {
    let server = create_test_server(sample_catalog(), generous_limits());
    let response = server.get("/movies/random?genre=accion").await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert!(body["message"].as_str().unwrap().contains("accion"));
}

#[tokio::test]
async fn test_random_movie_malformed_query_is_json_400() {
    let server = create_test_server(sample_catalog(), generous_limits());
    let response = server.get("/movies/random?genre=28&genre=35").await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert!(body["message"].as_str().unwrap().contains("genre"));
}

#[tokio::test]
async fn test_random_movie_upstream_failure() {
    let catalog = FakeCatalog {
        offline: true,
        ..sample_catalog()
    };
    let server = create_test_server(catalog, generous_limits());
    let response = server.get("/movies/random").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json();
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_random_movie_details_failure_is_500() {
    let catalog = FakeCatalog {
        details_offline: true,
        ..sample_catalog()
    };
    let server = create_test_server(catalog, generous_limits());
    let response = server.get("/movies/random?genre=28&providers=hbo").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_random_movie_unsatisfiable_filter_is_404() {
    let limits = DiscoveryLimits {
        max_attempts: Some(50),
        max_duration: None,
    };
    let server = create_test_server(sample_catalog(), limits);
    let response = server.get("/movies/random?genre=99&providers=netflix").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = create_test_server(FakeCatalog::default(), generous_limits());
    let request_id = "5f0c6b2e-8a47-4f7e-9d1b-3c2a1e0f9b7d";

    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static(request_id),
        )
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        request_id
    );
}

#[tokio::test]
async fn test_request_id_is_generated() {
    let server = create_test_server(FakeCatalog::default(), generous_limits());
    let response = server.get("/health").await;

    let header = response.headers().get("x-request-id").unwrap();
    assert!(uuid::Uuid::parse_str(header.to_str().unwrap()).is_ok());
}
