use crate::models::{Candidate, GenreFilter};

/// True when the filter is empty or the candidate carries at least one of
/// the requested genres.
pub fn matches(candidate: &Candidate, filter: &GenreFilter) -> bool {
    filter.is_empty() || candidate.genre_ids.iter().any(|id| filter.contains(*id))
}
