//! Fetching and parsing of the weekly BOGO listing page.
//!
//! [`ListingFetcher`] downloads a store's listing once and exposes the extraction
//! operations; [`ListingDocument`] holds the parsed page and can be built from
//! markup directly.

mod document;
mod fetcher;

// Re-export public API
pub use document::{extract_date_range, ListingDocument};
pub use fetcher::{listing_url, ListingFetcher};
