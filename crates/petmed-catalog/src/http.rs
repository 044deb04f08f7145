//! HTTP backend abstraction for probe attempts.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest with an explicit per-attempt timeout: when the timeout
//! elapses the attempt future is dropped, which aborts the in-flight
//! request rather than leaving it running.

use crate::config::CatalogConfig;
use crate::error::{CatalogError, CatalogResult};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can fetch JSON from URLs.
///
/// This is an implementation detail — external code talks to the
/// `EndpointProber`, which talks to the core `CatalogPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it, bounded by `timeout`.
    async fn get_json<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        timeout: Duration,
    ) -> CatalogResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// Deliberately retry-free: the prober reports each candidate's failure
/// once and moves on; the user retries by repeating the action.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    ///
    /// No client-level timeout is set — each attempt carries its own.
    pub fn new(config: &CatalogConfig) -> CatalogResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        timeout: Duration,
    ) -> CatalogResult<T> {
        let attempt = async {
            let response = self
                .client
                .get(url.as_str())
                .header("Accept", "application/json")
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                return Err(CatalogError::RequestFailed {
                    status: status.as_u16(),
                    url: url.to_string(),
                });
            }

            let data: T = response.json().await?;
            Ok(data)
        };

        // Dropping the attempt on timeout cancels the in-flight request.
        match tokio::time::timeout(timeout, attempt).await {
            Ok(result) => result,
            Err(_) => Err(CatalogError::Timeout {
                url: url.to_string(),
            }),
        }
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Canned behavior for one URL pattern.
    #[derive(Clone)]
    pub enum Canned {
        /// Answer 200 with this JSON body.
        Json(serde_json::Value),
        /// Answer with this HTTP status.
        Status(u16),
        /// Simulate an attempt that hits the per-attempt timeout.
        TimedOut,
    }

    /// A fake HTTP backend that returns canned responses and records every
    /// URL it was asked for, so tests can assert probe order and early
    /// exit.
    #[derive(Default)]
    pub struct FakeBackend {
        responses: Vec<(String, Canned)>,
        requests: Mutex<Vec<String>>,
    }

    impl FakeBackend {
        pub fn new() -> Self {
            Self::default()
        }

        /// Add a canned behavior for a URL pattern (substring match).
        #[must_use]
        pub fn with_response(mut self, url_contains: &str, canned: Canned) -> Self {
            self.responses.push((url_contains.to_string(), canned));
            self
        }

        /// Every URL requested so far, in order.
        pub fn requested(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }

        fn find(&self, url: &str) -> Option<Canned> {
            self.responses
                .iter()
                .find(|(pattern, _)| url.contains(pattern.as_str()))
                .map(|(_, canned)| canned.clone())
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn get_json<T: DeserializeOwned + Send>(
            &self,
            url: &Url,
            _timeout: Duration,
        ) -> CatalogResult<T> {
            self.requests.lock().unwrap().push(url.to_string());

            match self.find(url.as_str()) {
                Some(Canned::Json(value)) => serde_json::from_value(value).map_err(Into::into),
                Some(Canned::Status(status)) => Err(CatalogError::RequestFailed {
                    status,
                    url: url.to_string(),
                }),
                Some(Canned::TimedOut) | None => Err(CatalogError::Timeout {
                    url: url.to_string(),
                }),
            }
        }
    }
}
