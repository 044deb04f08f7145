//! Public configuration for the endpoint prober.
//!
//! The candidate lists and per-attempt timeouts are explicit inputs — no
//! endpoint is hard-coded anywhere past this module. Defaults mirror the
//! LAN addresses the companion catalog server is usually reachable on.

use std::time::Duration;

/// Configuration for the endpoint prober.
///
/// Use the builder pattern methods to customize the candidate lists and
/// timeouts. Candidates are probed strictly in order, so put the most
/// likely endpoint (a user-configured one, say) first.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Candidate URLs for the medicine catalog, probed in order.
    pub(crate) catalog_candidates: Vec<String>,
    /// Candidate URLs for the per-store price listings, probed in order.
    pub(crate) listing_candidates: Vec<String>,
    /// Per-attempt timeout for catalog probes.
    pub(crate) catalog_timeout: Duration,
    /// Per-attempt timeout for listing probes.
    pub(crate) listing_timeout: Duration,
    /// User agent string for HTTP requests.
    pub(crate) user_agent: String,
}

const DEFAULT_HOSTS: [&str; 4] = [
    "http://192.168.1.141:3000",
    "http://10.0.0.141:3000",
    "http://172.16.0.141:3000",
    "http://localhost:3000",
];

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            catalog_candidates: DEFAULT_HOSTS
                .iter()
                .map(|host| format!("{host}/Medicamentos"))
                .collect(),
            listing_candidates: DEFAULT_HOSTS
                .iter()
                .map(|host| format!("{host}/Lojas"))
                .collect(),
            catalog_timeout: Duration::from_secs(8),
            listing_timeout: Duration::from_secs(5),
            user_agent: concat!("petmed/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl CatalogConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the catalog candidate list.
    #[must_use]
    pub fn with_catalog_candidates(mut self, candidates: Vec<String>) -> Self {
        self.catalog_candidates = candidates;
        self
    }

    /// Replace the listing candidate list.
    #[must_use]
    pub fn with_listing_candidates(mut self, candidates: Vec<String>) -> Self {
        self.listing_candidates = candidates;
        self
    }

    /// Put a user-configured base URL in front of both candidate lists.
    ///
    /// The catalog and listing paths are appended to it, so
    /// `http://10.0.0.5:3000` probes `/Medicamentos` and `/Lojas` there
    /// before any default candidate.
    #[must_use]
    pub fn with_preferred_base(mut self, base: impl AsRef<str>) -> Self {
        let base = base.as_ref().trim_end_matches('/').to_string();
        if !base.is_empty() {
            self.catalog_candidates
                .insert(0, format!("{base}/Medicamentos"));
            self.listing_candidates.insert(0, format!("{base}/Lojas"));
        }
        self
    }

    /// Set the per-attempt timeout for catalog probes.
    ///
    /// Defaults to 8 seconds.
    #[must_use]
    pub const fn with_catalog_timeout(mut self, timeout: Duration) -> Self {
        self.catalog_timeout = timeout;
        self
    }

    /// Set the per-attempt timeout for listing probes.
    ///
    /// Defaults to 5 seconds.
    #[must_use]
    pub const fn with_listing_timeout(mut self, timeout: Duration) -> Self {
        self.listing_timeout = timeout;
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::new();
        assert_eq!(config.catalog_candidates.len(), 4);
        assert!(config.catalog_candidates[0].ends_with("/Medicamentos"));
        assert!(config.listing_candidates[0].ends_with("/Lojas"));
        assert_eq!(config.catalog_timeout, Duration::from_secs(8));
        assert_eq!(config.listing_timeout, Duration::from_secs(5));
        assert!(config.user_agent.contains("petmed"));
    }

    #[test]
    fn test_preferred_base_goes_first() {
        let config = CatalogConfig::new().with_preferred_base("http://10.0.0.5:3000/");
        assert_eq!(
            config.catalog_candidates[0],
            "http://10.0.0.5:3000/Medicamentos"
        );
        assert_eq!(config.listing_candidates[0], "http://10.0.0.5:3000/Lojas");
        assert_eq!(config.catalog_candidates.len(), 5);
    }

    #[test]
    fn test_blank_preferred_base_is_ignored() {
        let config = CatalogConfig::new().with_preferred_base("");
        assert_eq!(config.catalog_candidates.len(), 4);
    }

    #[test]
    fn test_builder_pattern() {
        let config = CatalogConfig::new()
            .with_catalog_candidates(vec!["http://example.com/meds".to_string()])
            .with_catalog_timeout(Duration::from_secs(2))
            .with_user_agent("test-agent");

        assert_eq!(config.catalog_candidates, vec!["http://example.com/meds"]);
        assert_eq!(config.catalog_timeout, Duration::from_secs(2));
        assert_eq!(config.user_agent, "test-agent");
    }
}
