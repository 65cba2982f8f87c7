use crate::fuzzy::MATCH_THRESHOLD;
use bon::Builder;
use std::time::Duration;

pub const DEFAULT_CATALOG_BASE_URL: &str = "https://climate.onebuilding.org";
pub const DEFAULT_GEOCODER_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_TRANSLATOR_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";
pub const DEFAULT_USER_AGENT: &str = concat!("epw_finder/", env!("CARGO_PKG_VERSION"));

/// Settings of an [`EpwFinder`](crate::EpwFinder).
///
/// Every field has a default, so only the ones that differ need to be set.
///
/// ```
/// use epw_finder::FinderConfig;
/// use std::time::Duration;
///
/// let config = FinderConfig::builder()
///     .user_agent("my-simulation-tool/1.0 (ops@example.org)")
///     .request_timeout(Duration::from_secs(30))
///     .build();
/// assert_eq!(config.match_threshold, 80);
/// assert_eq!(config.catalog_base_url, "https://climate.onebuilding.org");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct FinderConfig {
    /// Root of the provider site holding the `WMO_Region_*` directories.
    #[builder(into, default = DEFAULT_CATALOG_BASE_URL.to_string())]
    pub catalog_base_url: String,

    #[builder(into, default = DEFAULT_GEOCODER_ENDPOINT.to_string())]
    pub geocoder_endpoint: String,

    #[builder(into, default = DEFAULT_TRANSLATOR_ENDPOINT.to_string())]
    pub translator_endpoint: String,

    /// Sent with every request. Nominatim's usage policy asks for one that identifies the application.
    #[builder(into, default = DEFAULT_USER_AGENT.to_string())]
    pub user_agent: String,

    /// Preferred language of geocoder results.
    #[builder(into, default = "en".to_string())]
    pub language: String,

    /// Extension of the file to pull out of a dataset archive.
    #[builder(into, default = "epw".to_string())]
    pub payload_extension: String,

    #[builder(default = MATCH_THRESHOLD)]
    pub match_threshold: u8,

    /// Region index pages fetched at the same time.
    #[builder(default = 4)]
    pub max_parallel_fetches: usize,

    /// Per HTTP request.
    #[builder(default = Duration::from_secs(60))]
    pub request_timeout: Duration,

    /// For loading all region catalogs together.
    #[builder(default = Duration::from_secs(120))]
    pub catalog_timeout: Duration,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FinderConfig::default();
        assert_eq!(config.catalog_base_url, DEFAULT_CATALOG_BASE_URL);
        assert_eq!(config.language, "en");
        assert_eq!(config.payload_extension, "epw");
        assert_eq!(config.match_threshold, 80);
        assert_eq!(config.max_parallel_fetches, 4);
        assert_eq!(config.request_timeout, Duration::from_secs(60));
        assert_eq!(config.catalog_timeout, Duration::from_secs(120));
        assert!(config.user_agent.starts_with("epw_finder/"));
    }

    #[test]
    fn test_builder_overrides() {
        let config = FinderConfig::builder()
            .catalog_base_url("http://localhost:8080")
            .max_parallel_fetches(1)
            .build();
        assert_eq!(config.catalog_base_url, "http://localhost:8080");
        assert_eq!(config.max_parallel_fetches, 1);
        assert_eq!(config.geocoder_endpoint, DEFAULT_GEOCODER_ENDPOINT);
    }
}
