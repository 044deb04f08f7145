//! The endpoint prober: first-success linear probing over an ordered
//! candidate list.
//!
//! Latency is the sum of failed attempts' timeouts in the worst case — a
//! deliberate trade-off favoring simplicity, acceptable because candidate
//! lists are short and timeouts capped. No candidate is tried after the
//! first success, and no attempt is ever retried.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use petmed_core::domain::{Medicine, StoreListing};
use petmed_core::ports::{CandidateFailure, CatalogPort, ProbeOutcome};

use crate::config::CatalogConfig;
use crate::error::CatalogResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::sample;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default endpoint prober using the reqwest HTTP backend.
pub type DefaultEndpointProber = EndpointProber<ReqwestBackend>;

// ============================================================================
// Prober
// ============================================================================

/// Probes candidate endpoints for a working catalog/price service.
///
/// Generic over an HTTP backend for testing; production code uses
/// [`DefaultEndpointProber`].
pub struct EndpointProber<B: HttpBackend> {
    backend: B,
    config: CatalogConfig,
}

impl DefaultEndpointProber {
    /// Create a new prober with the given configuration.
    pub fn new(config: CatalogConfig) -> CatalogResult<Self> {
        let backend = ReqwestBackend::new(&config)?;
        Ok(Self { backend, config })
    }
}

impl<B: HttpBackend> EndpointProber<B> {
    /// Create a prober with a custom backend (tests).
    #[cfg(test)]
    pub(crate) const fn with_backend(config: CatalogConfig, backend: B) -> Self {
        Self { backend, config }
    }

    /// Probe the catalog candidates, falling back to the given dataset.
    pub async fn fetch_medicines_with_fallback(
        &self,
        fallback: Vec<Medicine>,
    ) -> ProbeOutcome<Medicine> {
        self.probe(
            &self.config.catalog_candidates,
            self.config.catalog_timeout,
            fallback,
        )
        .await
    }

    /// Probe the listing candidates, falling back to the given dataset.
    pub async fn fetch_listings_with_fallback(
        &self,
        fallback: Vec<StoreListing>,
    ) -> ProbeOutcome<StoreListing> {
        self.probe(
            &self.config.listing_candidates,
            self.config.listing_timeout,
            fallback,
        )
        .await
    }

    /// One probe sweep: candidates strictly in order, first 2xx wins, every
    /// failure recorded. Blank and unparseable candidates are skipped (a
    /// user-typed custom endpoint lands in the list unvalidated).
    async fn probe<T: DeserializeOwned + Send>(
        &self,
        candidates: &[String],
        timeout: Duration,
        fallback: Vec<T>,
    ) -> ProbeOutcome<T> {
        let mut failures = Vec::new();

        for candidate in candidates {
            let candidate = candidate.trim();
            if candidate.is_empty() {
                continue;
            }

            let url = match Url::parse(candidate) {
                Ok(url) => url,
                Err(e) => {
                    failures.push(CandidateFailure {
                        endpoint: candidate.to_string(),
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            debug!(endpoint = %url, "probing candidate endpoint");
            match self.backend.get_json::<Vec<T>>(&url, timeout).await {
                Ok(items) => {
                    info!(endpoint = %url, count = items.len(), "candidate endpoint answered");
                    return ProbeOutcome {
                        items,
                        source: Some(url.to_string()),
                        failures,
                    };
                }
                Err(e) => {
                    warn!(endpoint = %url, error = %e, "candidate endpoint failed");
                    failures.push(CandidateFailure {
                        endpoint: url.to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(
            candidates = failures.len(),
            "no endpoint answered, using fallback data"
        );
        ProbeOutcome {
            items: fallback,
            source: None,
            failures,
        }
    }
}

/// The prober is the production implementation of the core catalog port,
/// with the bundled sample data as its fallback.
#[async_trait]
impl<B: HttpBackend> CatalogPort for EndpointProber<B> {
    async fn fetch_medicines(&self) -> ProbeOutcome<Medicine> {
        self.fetch_medicines_with_fallback(sample::sample_medicines())
            .await
    }

    async fn fetch_store_listings(&self) -> ProbeOutcome<StoreListing> {
        self.fetch_listings_with_fallback(sample::sample_listings())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::{Canned, FakeBackend};
    use serde_json::json;

    fn config(candidates: &[&str]) -> CatalogConfig {
        CatalogConfig::new()
            .with_catalog_candidates(candidates.iter().map(ToString::to_string).collect())
    }

    fn three_medicines() -> serde_json::Value {
        json!([
            { "id": 1, "nome": "Dipirona 500mg" },
            { "id": 2, "nome": "Paracetamol 750mg" },
            { "id": 3, "nome": "Ibuprofeno 600mg" }
        ])
    }

    #[tokio::test]
    async fn first_success_wins_and_later_candidates_are_not_tried() {
        let backend = FakeBackend::new()
            .with_response("e1", Canned::TimedOut)
            .with_response("e2", Canned::Status(500))
            .with_response("e3", Canned::Json(three_medicines()))
            .with_response("e4", Canned::Json(json!([])));

        let prober = EndpointProber::with_backend(
            config(&[
                "http://e1:3000/Medicamentos",
                "http://e2:3000/Medicamentos",
                "http://e3:3000/Medicamentos",
                "http://e4:3000/Medicamentos",
            ]),
            backend,
        );

        let outcome = prober.fetch_medicines_with_fallback(Vec::new()).await;

        assert_eq!(outcome.items.len(), 3);
        assert_eq!(
            outcome.source.as_deref(),
            Some("http://e3:3000/Medicamentos")
        );
        // e1 timed out and e2 errored before e3 answered
        assert_eq!(outcome.failures.len(), 2);
        assert!(outcome.failures[0].reason.contains("timed out"));
        assert!(outcome.failures[1].reason.contains("500"));

        // e4 was never attempted
        let requested = prober.backend.requested();
        assert_eq!(requested.len(), 3);
        assert!(!requested.iter().any(|u| u.contains("e4")));
    }

    #[tokio::test]
    async fn total_failure_returns_the_fallback_with_null_source() {
        let backend = FakeBackend::new()
            .with_response("e1", Canned::Status(404))
            .with_response("e2", Canned::TimedOut);

        let prober = EndpointProber::with_backend(
            config(&["http://e1:3000/Medicamentos", "http://e2:3000/Medicamentos"]),
            backend,
        );

        let outcome = prober
            .fetch_medicines_with_fallback(sample::sample_medicines())
            .await;

        assert!(outcome.is_fallback());
        assert_eq!(outcome.items.len(), 3);
        // every candidate is accounted for
        assert_eq!(outcome.failures.len(), 2);
        assert!(outcome.failures[0].endpoint.contains("e1"));
        assert!(outcome.failures[1].endpoint.contains("e2"));
    }

    #[tokio::test]
    async fn blank_and_invalid_candidates_are_skipped() {
        let backend =
            FakeBackend::new().with_response("good", Canned::Json(three_medicines()));

        let prober = EndpointProber::with_backend(
            config(&["   ", "not a url", "http://good:3000/Medicamentos"]),
            backend,
        );

        let outcome = prober.fetch_medicines_with_fallback(Vec::new()).await;

        assert!(outcome.source.is_some());
        // the invalid candidate is reported, the blank one silently dropped
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].endpoint, "not a url");
        assert_eq!(prober.backend.requested().len(), 1);
    }

    #[tokio::test]
    async fn malformed_body_counts_as_a_candidate_failure() {
        let backend = FakeBackend::new()
            .with_response("bad", Canned::Json(json!({"not": "an array"})))
            .with_response("good", Canned::Json(three_medicines()));

        let prober = EndpointProber::with_backend(
            config(&["http://bad:3000/Medicamentos", "http://good:3000/Medicamentos"]),
            backend,
        );

        let outcome = prober.fetch_medicines_with_fallback(Vec::new()).await;
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.items.len(), 3);
    }

    #[tokio::test]
    async fn port_impl_serves_samples_when_offline() {
        let prober = EndpointProber::with_backend(config(&["http://down:3000/x"]), FakeBackend::new());

        let outcome = CatalogPort::fetch_medicines(&prober).await;
        assert!(outcome.is_fallback());
        assert_eq!(outcome.items.len(), 3);

        let listings = CatalogPort::fetch_store_listings(&prober).await;
        assert!(listings.is_fallback());
        assert_eq!(listings.items.len(), 3);
    }
}
