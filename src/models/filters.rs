use std::collections::BTreeSet;

use crate::error::{AppError, AppResult};

/// Genre ids requested by the caller. Empty means any genre.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreFilter(BTreeSet<u32>);

impl GenreFilter {
    pub fn new(ids: impl IntoIterator<Item = u32>) -> Self {
        Self(ids.into_iter().collect())
    }

    /// Parses a comma-separated list such as `28,35`
    pub fn parse(raw: &str) -> AppResult<Self> {
        split_list(raw)
            .map(|part| {
                part.parse::<u32>()
                    .map_err(|_| AppError::InvalidInput(format!("Invalid genre id: {}", part)))
            })
            .collect::<AppResult<BTreeSet<u32>>>()
            .map(Self)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.0.contains(&id)
    }
}

/// Lower-cased platform name fragments. Empty means any allowed platform.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformFilter(Vec<String>);

impl PlatformFilter {
    pub fn new<S: AsRef<str>>(terms: impl IntoIterator<Item = S>) -> Self {
        let mut normalized: Vec<String> = Vec::new();
        for term in terms {
            let term = term.as_ref().trim().to_lowercase();
            if !term.is_empty() && !normalized.contains(&term) {
                normalized.push(term);
            }
        }
        Self(normalized)
    }

    /// Parses a comma-separated list such as `netflix,hbo`
    pub fn parse(raw: &str) -> Self {
        Self::new(split_list(raw))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn terms(&self) -> &[String] {
        &self.0
    }
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|part| !part.is_empty())
}
