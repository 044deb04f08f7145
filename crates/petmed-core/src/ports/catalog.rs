//! Remote catalog port.
//!
//! The catalog/price service is reached by probing an ordered list of
//! candidate endpoints. A sweep that exhausts every candidate resolves to
//! the fallback dataset — degraded mode is reported as data (`source:
//! None` plus per-candidate failure reasons), never as an error crossing
//! this boundary.

use async_trait::async_trait;

use crate::domain::{Medicine, StoreListing};

/// Why one candidate endpoint was skipped during a probe sweep.
#[derive(Debug, Clone)]
pub struct CandidateFailure {
    pub endpoint: String,
    pub reason: String,
}

/// Result of one probe sweep.
///
/// `source` is the first candidate that answered 2xx, or `None` when the
/// sweep fell back — in which case `items` is the fallback dataset and
/// `failures` names every candidate tried.
#[derive(Debug, Clone)]
pub struct ProbeOutcome<T> {
    pub items: Vec<T>,
    pub source: Option<String>,
    pub failures: Vec<CandidateFailure>,
}

impl<T> ProbeOutcome<T> {
    /// True when no endpoint answered and `items` is fallback data.
    pub const fn is_fallback(&self) -> bool {
        self.source.is_none()
    }
}

/// Port for the remote catalog/price service.
#[async_trait]
pub trait CatalogPort: Send + Sync {
    /// Probe for the medicine catalog.
    async fn fetch_medicines(&self) -> ProbeOutcome<Medicine>;

    /// Probe for per-store product listings.
    async fn fetch_store_listings(&self) -> ProbeOutcome<StoreListing>;
}
