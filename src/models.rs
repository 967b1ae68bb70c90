use crate::constants::STORE_ID_FORBIDDEN_CHARS;
use crate::errors::{AppError, AppResult};
use std::fmt;
use std::str::FromStr;

/// Identifier of a Publix store, as used in the `StoreID` query parameter.
///
/// The value is interpolated into the listing URL verbatim, so construction
/// rejects anything that would need percent-encoding to survive in a query value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoreId(String);

impl StoreId {
    /// Creates a store identifier from a raw token.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the token is empty or contains whitespace,
    /// control characters, `&`, `#` or `=`.
    ///
    /// # Example
    ///
    /// ```
    /// use publix_bogo::models::StoreId;
    ///
    /// assert!(StoreId::new("2500579").is_ok());
    /// assert!(StoreId::new("25 00").is_err());
    /// assert!(StoreId::new("1&CategoryID=2").is_err());
    /// ```
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(AppError::InvalidInput(
                "Store identifier must not be empty".to_string(),
            ));
        }
        if let Some(c) = value
            .chars()
            .find(|c| c.is_whitespace() || c.is_control() || STORE_ID_FORBIDDEN_CHARS.contains(c))
        {
            return Err(AppError::InvalidInput(format!(
                "Store identifier contains a character that would break the query string: {c:?} (in {value:?})"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u32> for StoreId {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

impl FromStr for StoreId {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Self::new(s)
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Snapshot of one store's weekly BOGO listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyBogo {
    pub store: StoreId,
    /// Validity text as shown on the page, whitespace-trimmed
    pub validity_raw: String,
    /// The `M/D - M/D` range extracted from `validity_raw`
    pub validity: String,
    /// Item names, sorted ascending
    pub items: Vec<String>,
}
