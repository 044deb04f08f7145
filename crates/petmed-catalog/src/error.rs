//! Internal error types for probe attempts.
//!
//! One value describes why one candidate failed; the prober flattens these
//! into `CandidateFailure` reasons at the port boundary, so they never
//! escape the crate as errors.

use thiserror::Error;

/// Result type alias for probe attempts.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Why a single candidate endpoint attempt failed.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The endpoint answered with a non-2xx status.
    #[error("endpoint returned status {status}: {url}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The attempt exceeded the per-attempt timeout and was cancelled.
    #[error("endpoint timed out: {url}")]
    Timeout {
        /// The URL that was requested
        url: String,
    },

    /// Network or HTTP client error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The candidate was not a valid URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The body was not the expected JSON shape.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
