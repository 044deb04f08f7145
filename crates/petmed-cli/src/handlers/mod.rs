//! Command handlers. One module per command group; each handler receives
//! the composed [`CliContext`](crate::bootstrap::CliContext) and prints
//! human-readable output.

pub mod cabinet;
pub mod catalog;
pub mod pet;
pub mod prices;
pub mod store;

use petmed_core::ports::{CandidateFailure, ProbeOutcome};
use petmed_core::services::CatalogSource;

/// One line per skipped endpoint, matching the degraded-mode detail the
/// app shows after a failed sweep.
pub(crate) fn print_failures(failures: &[CandidateFailure]) {
    for failure in failures {
        println!("  tried {} - {}", failure.endpoint, failure.reason);
    }
}

/// Describe where catalog data came from.
pub(crate) fn print_catalog_source(source: &CatalogSource, failures: &[CandidateFailure]) {
    match source {
        CatalogSource::Remote(url) => println!("Connected to catalog server at {url}"),
        CatalogSource::LocalCache => {
            println!("Offline mode: no catalog server reachable, showing the last fetched catalog.");
            print_failures(failures);
        }
        CatalogSource::Samples => {
            println!("Offline mode: no catalog server reachable, showing sample data.");
            println!("Check that the server is running and set PETMED_ENDPOINT or --endpoint.");
            print_failures(failures);
        }
    }
}

/// Describe where a listing sweep came from.
pub(crate) fn print_listing_source<T>(outcome: &ProbeOutcome<T>) {
    match &outcome.source {
        Some(url) => println!("Prices from {url}"),
        None => {
            println!("Offline mode: no price server reachable, showing sample listings.");
            print_failures(&outcome.failures);
        }
    }
}
