//! Common test utilities for integration tests

use httpmock::MockServer;
use publix_bogo::config::FetcherConfig;

/// Path of the listing endpoint, up to the `StoreID` parameter name
#[allow(dead_code)]
pub const LISTING_PATH: &str = "/PublixAccessibility/BrowseByListing/ByCategory/";

/// Config pointing the fetcher at a mock server
#[allow(dead_code)]
pub fn mock_config(server: &MockServer) -> FetcherConfig {
    FetcherConfig {
        base_url: format!("{}?StoreID", server.url(LISTING_PATH)),
        ..FetcherConfig::default()
    }
}

/// Listing page with a padded date container and three items out of order
#[allow(dead_code)]
pub const SAMPLE_LISTING: &str = r#"<!DOCTYPE html>
<html>
<head><title>Weekly Ad</title></head>
<body>
  <div class="action-elide validDates"> 5/21 - 5/27 </div>
  <ul>
    <li><h2 class="ellipsis_text">Yogurt</h2></li>
    <li><h2 class="ellipsis_text">Bread</h2></li>
    <li><h2 class="ellipsis_text">Apples</h2></li>
  </ul>
</body>
</html>"#;

/// Listing page whose date container has no date range yet
#[allow(dead_code)]
pub const COMING_SOON_LISTING: &str = r#"<html><body>
  <div class="action-elide validDates">
      Dates coming soon
  </div>
</body></html>"#;

/// Page without any listing markup
#[allow(dead_code)]
pub const EMPTY_LISTING: &str = r#"<html><body><p>No ad available for this store.</p></body></html>"#;
