use crate::constants::{BASE_URL, BOGO_CATEGORY_ID, DEFAULT_TIMEOUT_SECS};
use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Settings for fetching a listing page.
///
/// All fields have concrete values; `Default` holds the production endpoint, and
/// a TOML file only needs the keys it overrides.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FetcherConfig {
    /// Listing path up to and including the `StoreID` parameter name
    pub base_url: String,
    /// Value of the `CategoryID` query parameter
    pub category_id: String,
    /// Request timeout in seconds, covering connect through body read
    pub timeout_secs: u64,
    /// `User-Agent` header sent with the request
    pub user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            category_id: BOGO_CATEGORY_ID.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FetcherConfig {
    /// Loads and validates configuration from a TOML file.
    ///
    /// Missing keys fall back to the defaults. Unknown keys are rejected so a typo
    /// is never silently ignored.
    ///
    /// # Errors
    ///
    /// Returns `IoError` if the file cannot be read, and `InvalidInput` if the TOML
    /// is malformed, has unknown keys, or fails [`FetcherConfig::validate`].
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config: FetcherConfig = toml::from_str(&contents)
            .map_err(|e| AppError::InvalidInput(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the timeout is positive and the URL parts are non-empty.
    pub fn validate(&self) -> AppResult<()> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidInput(
                "Timeout must be greater than 0".into(),
            ));
        }
        if self.base_url.trim().is_empty() {
            return Err(AppError::InvalidInput("Base URL must not be empty".into()));
        }
        if self.category_id.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Category ID must not be empty".into(),
            ));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
