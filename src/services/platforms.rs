use crate::models::{PlatformFilter, ProviderEntry, ProviderInfo};

/// Platforms a movie may be reported on, lower-cased. Anything else the
/// catalog reports is ignored.
pub const ALLOWED_PLATFORMS: [&str; 5] = [
    "netflix",
    "amazon prime video",
    "disney plus",
    "hbo max",
    "apple tv+",
];

pub fn is_allowed(provider_name: &str) -> bool {
    let name = provider_name.to_lowercase();
    ALLOWED_PLATFORMS.contains(&name.as_str())
}

/// Restricts raw offers to the allowed platforms, keeping upstream order.
///
/// An empty result means the movie is not streamable anywhere we support.
pub fn resolve(raw: &[ProviderEntry]) -> Vec<ProviderInfo> {
    raw.iter()
        .filter(|entry| is_allowed(&entry.provider_name))
        .map(ProviderInfo::from)
        .collect()
}

/// Loose match: some resolved platform name contains some filter term.
///
/// "hbo" matches "HBO Max". Short terms can over-match; kept intentionally.
pub fn matches_filter(resolved: &[ProviderInfo], filter: &PlatformFilter) -> bool {
    if filter.is_empty() {
        return true;
    }

    resolved.iter().any(|provider| {
        let name = provider.name.to_lowercase();
        filter.terms().iter().any(|term| name.contains(term.as_str()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> ProviderEntry {
        ProviderEntry {
            provider_name: name.to_string(),
            logo_path: Some(format!("/{}.jpg", name.to_lowercase().replace(' ', "_"))),
        }
    }

    fn info(name: &str) -> ProviderInfo {
        ProviderInfo {
            name: name.to_string(),
            logo_path: None,
        }
    }

    #[test]
    fn test_resolve_drops_unknown_platforms() {
        let resolved = resolve(&[entry("Hulu")]);
        assert!(resolved.is_empty());
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let resolved = resolve(&[entry("NETFLIX"), entry("Filmin"), entry("Disney Plus")]);
        let names: Vec<&str> = resolved.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["NETFLIX", "Disney Plus"]);
    }

    #[test]
    fn test_resolve_keeps_logo() {
        let resolved = resolve(&[entry("HBO Max")]);
        assert_eq!(resolved[0].logo_path.as_deref(), Some("/hbo_max.jpg"));
    }

    #[test]
    fn test_resolve_never_leaks_disallowed_names() {
        let raw = vec![
            entry("Apple TV+"),
            entry("apple tv"),
            entry("Netflix basic with Ads"),
            entry("amazon PRIME video"),
            entry("Movistar Plus+"),
            entry("hbo max"),
        ];

        for rotation in 0..raw.len() {
            let mut ordered = raw.clone();
            ordered.rotate_left(rotation);
            for provider in resolve(&ordered) {
                assert!(is_allowed(&provider.name), "{} leaked", provider.name);
            }
        }
        assert_eq!(resolve(&raw).len(), 3);
    }

    #[test]
    fn test_empty_filter_matches() {
        assert!(matches_filter(&[info("Netflix")], &PlatformFilter::default()));
    }

    #[test]
    fn test_substring_match() {
        let filter = PlatformFilter::parse("hbo");
        assert!(matches_filter(&[info("HBO Max")], &filter));
    }

    #[test]
    fn test_any_term_any_platform() {
        let filter = PlatformFilter::parse("disney,netflix");
        assert!(matches_filter(&[info("Amazon Prime Video"), info("Netflix")], &filter));
        assert!(!matches_filter(&[info("Amazon Prime Video")], &filter));
    }

    #[test]
    fn test_short_term_over_matches() {
        // "tv" is contained in "apple tv+"
        let filter = PlatformFilter::parse("tv");
        assert!(matches_filter(&[info("Apple TV+")], &filter));
    }

    #[test]
    fn test_no_resolved_platforms_never_match_filter() {
        assert!(!matches_filter(&[], &PlatformFilter::parse("netflix")));
    }
}
