//! publix-bogo library
//!
//! This crate provides the core functionality for the `publix-bogo` binary: it
//! fetches the accessible weekly-ad page of a Publix store and reads the BOGO
//! ("buy one get one") listing out of it.
//!
//! ## Overview
//!
//! - [`listing`] - Builds the listing URL, fetches the page and extracts dates and items
//! - [`config`] - Endpoint and timeout settings, optionally loaded from TOML
//! - [`cli`] - Command-line entry point printing one store's listing
//! - [`models`] - Store identifiers and the listing summary
//! - [`errors`] - Error types used throughout the application
//!
//! ## Example Usage
//!
//! ```no_run
//! use publix_bogo::{errors::AppResult, listing::ListingFetcher, models::StoreId};
//!
//! # fn example() -> AppResult<()> {
//! let listing = ListingFetcher::new(StoreId::from(2500579))?;
//! println!("{}", listing.validity_date_raw()?);
//! println!("{}", listing.validity_date_normalized()?);
//! println!("{:?}", listing.bogo_items());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod listing;
pub mod models;
