//! Catalog search with the remote-authoritative cache policy.
//!
//! The remote catalog wins whenever any endpoint answers; each successful
//! sweep refreshes the local cache. When every endpoint fails, the cache
//! is served if it has anything, otherwise the prober's bundled fallback
//! passes through.

use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::{Medicine, StoreListing};
use crate::ports::{
    CandidateFailure, CatalogPort, MedicineRepository, ProbeOutcome, RepositoryError,
};

/// Where a search result actually came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// A remote endpoint answered; carries its URL.
    Remote(String),
    /// Every endpoint failed; the last-known-good cache was served.
    LocalCache,
    /// Every endpoint failed and the cache was empty; bundled sample data.
    Samples,
}

/// A catalog search result with its provenance.
#[derive(Debug)]
pub struct CatalogSearch {
    pub medicines: Vec<Medicine>,
    pub source: CatalogSource,
    pub failures: Vec<CandidateFailure>,
}

/// Orchestrates the catalog port and the local medicine cache.
pub struct CatalogService {
    catalog: Arc<dyn CatalogPort>,
    cache: Arc<dyn MedicineRepository>,
}

impl CatalogService {
    pub fn new(catalog: Arc<dyn CatalogPort>, cache: Arc<dyn MedicineRepository>) -> Self {
        Self { catalog, cache }
    }

    /// Probe the catalog, apply the cache policy, and filter by the
    /// optional search term.
    pub async fn search(&self, term: Option<&str>) -> Result<CatalogSearch, RepositoryError> {
        let ProbeOutcome {
            items,
            source,
            failures,
        } = self.catalog.fetch_medicines().await;

        let (medicines, source) = match source {
            Some(url) => {
                self.cache.replace_all(&items).await?;
                info!(count = items.len(), source = %url, "catalog refreshed from remote");
                (items, CatalogSource::Remote(url))
            }
            None => {
                let cached = self.cache.list().await?;
                if cached.is_empty() {
                    debug!("offline with empty cache, serving sample data");
                    (items, CatalogSource::Samples)
                } else {
                    debug!(count = cached.len(), "offline, serving cached catalog");
                    (cached, CatalogSource::LocalCache)
                }
            }
        };

        let medicines = match term.map(str::trim) {
            Some(term) if !term.is_empty() => {
                medicines.into_iter().filter(|m| m.matches(term)).collect()
            }
            _ => medicines,
        };

        Ok(CatalogSearch {
            medicines,
            source,
            failures,
        })
    }

    /// Probe for per-store price listings. Listings are never cached; a
    /// failed sweep just hands back the fallback outcome.
    pub async fn fetch_listings(&self) -> ProbeOutcome<StoreListing> {
        self.catalog.fetch_store_listings().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::domain::{MedicineUpdate, NewMedicine};

    fn med(id: i64, nome: &str) -> Medicine {
        Medicine {
            id,
            nome: nome.to_string(),
            ean: None,
            tipo: None,
            laboratorio: None,
            forma_administracao: None,
            indicacoes: None,
        }
    }

    struct FakeCatalog {
        outcome: ProbeOutcome<Medicine>,
    }

    #[async_trait]
    impl CatalogPort for FakeCatalog {
        async fn fetch_medicines(&self) -> ProbeOutcome<Medicine> {
            ProbeOutcome {
                items: self.outcome.items.clone(),
                source: self.outcome.source.clone(),
                failures: self.outcome.failures.clone(),
            }
        }

        async fn fetch_store_listings(&self) -> ProbeOutcome<StoreListing> {
            ProbeOutcome {
                items: Vec::new(),
                source: None,
                failures: Vec::new(),
            }
        }
    }

    #[derive(Default)]
    struct FakeCache {
        medicines: Mutex<Vec<Medicine>>,
    }

    #[async_trait]
    impl MedicineRepository for FakeCache {
        async fn insert(&self, _medicine: &NewMedicine) -> Result<i64, RepositoryError> {
            unimplemented!("not used by CatalogService")
        }

        async fn list(&self) -> Result<Vec<Medicine>, RepositoryError> {
            Ok(self.medicines.lock().unwrap().clone())
        }

        async fn update(&self, _id: i64, _u: &MedicineUpdate) -> Result<(), RepositoryError> {
            unimplemented!("not used by CatalogService")
        }

        async fn delete(&self, _id: i64) -> Result<(), RepositoryError> {
            unimplemented!("not used by CatalogService")
        }

        async fn replace_all(&self, catalog: &[Medicine]) -> Result<(), RepositoryError> {
            *self.medicines.lock().unwrap() = catalog.to_vec();
            Ok(())
        }

        async fn count(&self) -> Result<i64, RepositoryError> {
            Ok(self.medicines.lock().unwrap().len() as i64)
        }
    }

    fn service(outcome: ProbeOutcome<Medicine>, cache: Arc<FakeCache>) -> CatalogService {
        CatalogService::new(Arc::new(FakeCatalog { outcome }), cache)
    }

    #[tokio::test]
    async fn remote_success_refreshes_the_cache() {
        let cache = Arc::new(FakeCache::default());
        let svc = service(
            ProbeOutcome {
                items: vec![med(1, "Dipirona 500mg"), med(2, "Paracetamol 750mg")],
                source: Some("http://localhost:3000/Medicamentos".to_string()),
                failures: Vec::new(),
            },
            cache.clone(),
        );

        let result = svc.search(None).await.unwrap();
        assert_eq!(result.medicines.len(), 2);
        assert!(matches!(result.source, CatalogSource::Remote(_)));
        assert_eq!(cache.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn offline_serves_the_cache_when_populated() {
        let cache = Arc::new(FakeCache::default());
        cache.replace_all(&[med(1, "Dipirona 500mg")]).await.unwrap();

        let svc = service(
            ProbeOutcome {
                items: vec![med(99, "Sample")],
                source: None,
                failures: vec![CandidateFailure {
                    endpoint: "http://localhost:3000/Medicamentos".to_string(),
                    reason: "timed out".to_string(),
                }],
            },
            cache,
        );

        let result = svc.search(None).await.unwrap();
        assert_eq!(result.source, CatalogSource::LocalCache);
        assert_eq!(result.medicines.len(), 1);
        assert_eq!(result.medicines[0].nome, "Dipirona 500mg");
        assert_eq!(result.failures.len(), 1);
    }

    #[tokio::test]
    async fn offline_with_empty_cache_passes_samples_through() {
        let svc = service(
            ProbeOutcome {
                items: vec![med(99, "Sample")],
                source: None,
                failures: Vec::new(),
            },
            Arc::new(FakeCache::default()),
        );

        let result = svc.search(None).await.unwrap();
        assert_eq!(result.source, CatalogSource::Samples);
        assert_eq!(result.medicines[0].nome, "Sample");
    }

    #[tokio::test]
    async fn search_term_filters_results() {
        let svc = service(
            ProbeOutcome {
                items: vec![med(1, "Dipirona 500mg"), med(2, "Paracetamol 750mg")],
                source: Some("http://localhost:3000/Medicamentos".to_string()),
                failures: Vec::new(),
            },
            Arc::new(FakeCache::default()),
        );

        let result = svc.search(Some("dipirona")).await.unwrap();
        assert_eq!(result.medicines.len(), 1);

        // blank terms are ignored
        let result = svc.search(Some("   ")).await.unwrap();
        assert_eq!(result.medicines.len(), 2);
    }
}
