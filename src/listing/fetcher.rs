use crate::config::FetcherConfig;
use crate::errors::{AppError, AppResult};
use crate::listing::document::ListingDocument;
use crate::models::{StoreId, WeeklyBogo};
use tracing::{debug, info};
use url::Url;

/// Builds the listing URL for a store.
///
/// The store identifier is interpolated verbatim. The result is rejected if it is
/// not a valid URL, or if a URL parser would have to re-encode any part of it.
///
/// # Example
///
/// ```
/// use publix_bogo::listing::listing_url;
/// use publix_bogo::models::StoreId;
///
/// # fn main() -> Result<(), publix_bogo::errors::AppError> {
/// let url = listing_url("https://example.com/ByCategory/?StoreID", &StoreId::from(42), "7")?;
/// assert_eq!(url, "https://example.com/ByCategory/?StoreID=42&CategoryID=7");
/// # Ok(())
/// # }
/// ```
pub fn listing_url(base_url: &str, store: &StoreId, category_id: &str) -> AppResult<String> {
    let raw = format!("{base_url}={store}&CategoryID={category_id}");
    let parsed = Url::parse(&raw)?;
    if parsed.as_str() != raw {
        return Err(AppError::UrlError(format!(
            "{raw} is not in canonical form (parses as {parsed})"
        )));
    }
    Ok(raw)
}

/// Performs one blocking GET and returns the body of a successful response.
fn fetch_page(url: &str, config: &FetcherConfig) -> AppResult<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(config.timeout())
        .user_agent(config.user_agent.as_str())
        .pool_max_idle_per_host(0)
        .build()?;

    let body = client.get(url).send()?.error_for_status()?.text()?;
    Ok(body)
}

/// Weekly BOGO listing of one store.
///
/// The page is fetched once, in the constructor. Every accessor reads from that
/// snapshot; build a new fetcher to see a newer listing.
#[derive(Debug)]
pub struct ListingFetcher {
    store: StoreId,
    url: String,
    document: ListingDocument,
}

impl ListingFetcher {
    /// Fetches the listing for `store` from the production site.
    ///
    /// # Errors
    ///
    /// Returns `NetworkError` on DNS, connection or timeout failures and on any
    /// non-success status.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use publix_bogo::listing::ListingFetcher;
    /// use publix_bogo::models::StoreId;
    ///
    /// # fn main() -> Result<(), publix_bogo::errors::AppError> {
    /// let listing = ListingFetcher::new(StoreId::from(2500579))?;
    /// println!("{}", listing.validity_date_normalized()?);
    /// for item in listing.bogo_items() {
    ///     println!("{item}");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(store: StoreId) -> AppResult<Self> {
        Self::with_config(store, &FetcherConfig::default())
    }

    /// Fetches the listing for `store` using `config` for endpoint and timeout.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an invalid config, `UrlError` if the store cannot be
    /// placed in the URL as-is, and `NetworkError` if the fetch fails.
    pub fn with_config(store: StoreId, config: &FetcherConfig) -> AppResult<Self> {
        config.validate()?;
        let url = listing_url(&config.base_url, &store, &config.category_id)?;
        debug!(%url, timeout_secs = config.timeout_secs, "Fetching BOGO listing");

        let body = fetch_page(&url, config)?;
        debug!(bytes = body.len(), "Listing page received");

        let document = ListingDocument::parse(&body);
        info!(store = %store, "BOGO listing fetched");

        Ok(Self {
            store,
            url,
            document,
        })
    }

    pub fn store(&self) -> &StoreId {
        &self.store
    }

    /// The URL the listing was fetched from.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn document(&self) -> &ListingDocument {
        &self.document
    }

    /// See [`ListingDocument::validity_date_raw`].
    pub fn validity_date_raw(&self) -> AppResult<String> {
        self.document.validity_date_raw()
    }

    /// See [`ListingDocument::validity_date_normalized`].
    pub fn validity_date_normalized(&self) -> AppResult<String> {
        self.document.validity_date_normalized()
    }

    /// See [`ListingDocument::bogo_items`].
    pub fn bogo_items(&self) -> Vec<String> {
        self.document.bogo_items()
    }

    /// Collects both date forms and the item list.
    ///
    /// # Errors
    ///
    /// Fails with the first error of the date operations.
    pub fn summary(&self) -> AppResult<WeeklyBogo> {
        let summary = WeeklyBogo {
            store: self.store.clone(),
            validity_raw: self.validity_date_raw()?,
            validity: self.validity_date_normalized()?,
            items: self.bogo_items(),
        };
        info!(
            store = %summary.store,
            validity = %summary.validity,
            items = summary.items.len(),
            "BOGO listing parsed"
        );
        Ok(summary)
    }
}
