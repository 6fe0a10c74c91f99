use serde::{Deserialize, Serialize};

use super::{Candidate, MovieDetails, ProviderEntry, Trailer};

/// Streaming platform a movie can be watched on
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderInfo {
    pub name: String,
    pub logo_path: Option<String>,
}

impl From<&ProviderEntry> for ProviderInfo {
    fn from(entry: &ProviderEntry) -> Self {
        Self {
            name: entry.provider_name.clone(),
            logo_path: entry.logo_path.clone(),
        }
    }
}

/// Fully enriched movie returned by `GET /movies/random`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnrichedMovie {
    pub id: u64,
    pub title: String,
    pub overview: Option<String>,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
    pub genre_ids: Vec<u32>,
    pub providers: Vec<ProviderInfo>,
    pub runtime: Option<u32>,
    pub vote_average: Option<f64>,
    pub trailers: Vec<Trailer>,
}

impl EnrichedMovie {
    pub fn assemble(
        candidate: Candidate,
        providers: Vec<ProviderInfo>,
        details: MovieDetails,
        trailers: Vec<Trailer>,
    ) -> Self {
        Self {
            id: candidate.id,
            title: candidate.title,
            overview: candidate.overview,
            release_date: candidate.release_date,
            poster_path: candidate.poster_path,
            genre_ids: candidate.genre_ids,
            providers,
            runtime: details.runtime,
            vote_average: details.vote_average,
            trailers,
        }
    }
}
