pub mod catalog;
pub mod discovery;
pub mod enrichment;
pub mod genre_matcher;
pub mod platforms;

pub use catalog::{CatalogClient, TmdbCatalog};
pub use discovery::{DiscoveryLimits, DiscoveryLoop, SearchCriteria};
