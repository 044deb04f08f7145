#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

mod config;
mod error;
mod http;
mod prober;
mod sample;

// ============================================================================
// Public API
// ============================================================================

// Prober
pub use prober::{DefaultEndpointProber, EndpointProber};

// Configuration
pub use config::CatalogConfig;

// Errors
pub use error::{CatalogError, CatalogResult};

// Bundled offline fallback data
pub use sample::{sample_listings, sample_medicines};
