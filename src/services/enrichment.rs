use crate::{
    error::AppResult,
    models::{Candidate, EnrichedMovie, ProviderInfo},
    services::catalog::CatalogClient,
};

/// Fetches details and trailers for an accepted candidate.
///
/// Failures are returned as-is: once a candidate has been accepted the search
/// does not fall back to another one.
pub async fn enrich(
    catalog: &dyn CatalogClient,
    candidate: Candidate,
    providers: Vec<ProviderInfo>,
) -> AppResult<EnrichedMovie> {
    let details = catalog.fetch_details(candidate.id).await?;
    let trailers = catalog.fetch_videos(candidate.id).await?;

    tracing::debug!(
        movie_id = candidate.id,
        runtime = ?details.runtime,
        trailers = trailers.len(),
        "Candidate enriched"
    );

    Ok(EnrichedMovie::assemble(candidate, providers, details, trailers))
}
