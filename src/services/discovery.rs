//! Random movie discovery.
//!
//! Samples random discover pages, draws one candidate per page and keeps going
//! until a candidate passes both the genre and the platform filters. The
//! accepted candidate is then enriched with details and trailers.
//!
//! Every upstream call is sequential since each step gates the next one. The
//! search is bounded by [`DiscoveryLimits`] and stops early when its
//! [`CancellationToken`] fires.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio_util::sync::CancellationToken;

use crate::{
    error::{AppError, AppResult},
    models::{Candidate, EnrichedMovie, GenreFilter, PlatformFilter, ProviderInfo},
    services::{catalog::CatalogClient, enrichment, genre_matcher, platforms},
};

/// Source of uniform draws for page and candidate selection.
pub trait RandomSource: Send {
    /// Returns an index in `0..upper`. `upper` is never zero.
    fn pick(&mut self, upper: usize) -> usize;
}

impl RandomSource for StdRng {
    fn pick(&mut self, upper: usize) -> usize {
        self.random_range(0..upper)
    }
}

/// Bounds on a single search. `None` disables the bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscoveryLimits {
    pub max_attempts: Option<u32>,
    pub max_duration: Option<Duration>,
}

/// What the caller asked for
#[derive(Debug, Clone, Default)]
pub struct SearchCriteria {
    pub genres: GenreFilter,
    pub platforms: PlatformFilter,
}

/// Per-request bookkeeping, discarded with the search
#[derive(Debug)]
struct SearchSession {
    attempts: u32,
    started: Instant,
}

impl SearchSession {
    fn new() -> Self {
        Self {
            attempts: 0,
            started: Instant::now(),
        }
    }

    fn exhausted(&self, limits: &DiscoveryLimits) -> bool {
        limits.max_attempts.is_some_and(|max| self.attempts >= max)
            || limits
                .max_duration
                .is_some_and(|max| self.started.elapsed() >= max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    EmptyPage,
    GenreMismatch,
    NotStreamable,
    PlatformMismatch,
}

#[derive(Debug)]
enum Evaluation {
    Accepted(Candidate, Vec<ProviderInfo>),
    Rejected(Rejection),
}

pub struct DiscoveryLoop {
    catalog: Arc<dyn CatalogClient>,
    limits: DiscoveryLimits,
}

impl DiscoveryLoop {
    pub fn new(catalog: Arc<dyn CatalogClient>, limits: DiscoveryLimits) -> Self {
        Self { catalog, limits }
    }

    /// Runs a search on its own task with an OS-seeded random source.
    ///
    /// Dropping the returned future cancels the task, so a caller that goes
    /// away stops the upstream traffic at the next catalog call.
    pub async fn discover_detached(
        self: Arc<Self>,
        criteria: SearchCriteria,
    ) -> AppResult<EnrichedMovie> {
        let cancel = CancellationToken::new();
        let _guard = cancel.clone().drop_guard();

        let task = tokio::spawn(async move {
            let mut rng = StdRng::from_os_rng();
            self.discover(&criteria, &mut rng, &cancel).await
        });

        task.await
            .map_err(|e| AppError::Internal(format!("Discovery task failed: {}", e)))?
    }

    /// Samples the catalog until a candidate matches `criteria`.
    pub async fn discover<R: RandomSource>(
        &self,
        criteria: &SearchCriteria,
        rng: &mut R,
        cancel: &CancellationToken,
    ) -> AppResult<EnrichedMovie> {
        tracing::info!(
            genres = ?criteria.genres,
            platforms = ?criteria.platforms,
            catalog = self.catalog.name(),
            "Searching for a movie matching filters"
        );

        let first_page = guarded(cancel, self.catalog.fetch_page(1)).await?;
        let total_pages = first_page.sampling_pages();
        let mut session = SearchSession::new();

        loop {
            if cancel.is_cancelled() {
                tracing::info!(attempts = session.attempts, "Search cancelled by caller");
                return Err(AppError::Cancelled);
            }

            if session.exhausted(&self.limits) {
                tracing::warn!(
                    attempts = session.attempts,
                    elapsed_ms = session.started.elapsed().as_millis() as u64,
                    "Search budget exhausted"
                );
                return Err(AppError::NotFound(
                    "No movie matching the filters was found".to_string(),
                ));
            }

            session.attempts += 1;
            let page = rng.pick(total_pages as usize) as u32 + 1;

            match self.evaluate(page, criteria, rng, cancel).await? {
                Evaluation::Accepted(candidate, providers) => {
                    tracing::info!(
                        attempts = session.attempts,
                        movie_id = candidate.id,
                        title = %candidate.title,
                        "Found matching movie"
                    );

                    return guarded(
                        cancel,
                        enrichment::enrich(self.catalog.as_ref(), candidate, providers),
                    )
                    .await;
                }
                Evaluation::Rejected(reason) => {
                    tracing::debug!(
                        attempt = session.attempts,
                        page = page,
                        reason = ?reason,
                        "Candidate rejected"
                    );
                }
            }
        }
    }

    /// Draws one candidate from `page` and runs it through both filters.
    async fn evaluate<R: RandomSource>(
        &self,
        page: u32,
        criteria: &SearchCriteria,
        rng: &mut R,
        cancel: &CancellationToken,
    ) -> AppResult<Evaluation> {
        let mut catalog_page = guarded(cancel, self.catalog.fetch_page(page)).await?;
        if catalog_page.results.is_empty() {
            return Ok(Evaluation::Rejected(Rejection::EmptyPage));
        }

        let index = rng.pick(catalog_page.results.len());
        let candidate = catalog_page.results.swap_remove(index);

        if !genre_matcher::matches(&candidate, &criteria.genres) {
            return Ok(Evaluation::Rejected(Rejection::GenreMismatch));
        }

        let raw = guarded(cancel, self.catalog.fetch_providers(candidate.id)).await?;
        let resolved = platforms::resolve(&raw);
        if resolved.is_empty() {
            return Ok(Evaluation::Rejected(Rejection::NotStreamable));
        }

        if !platforms::matches_filter(&resolved, &criteria.platforms) {
            return Ok(Evaluation::Rejected(Rejection::PlatformMismatch));
        }

        Ok(Evaluation::Accepted(candidate, resolved))
    }
}

/// Races a catalog call against cancellation
async fn guarded<T>(
    cancel: &CancellationToken,
    call: impl Future<Output = AppResult<T>>,
) -> AppResult<T> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(AppError::Cancelled),
        result = call => result,
    }
}
