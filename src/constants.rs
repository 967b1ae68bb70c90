// Data source
pub const BASE_URL: &str =
    "https://accessibleweeklyad.publix.com/PublixAccessibility/BrowseByListing/ByCategory/?StoreID";
pub const BOGO_CATEGORY_ID: &str = "5232540";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// Palm Crossings
pub const DEFAULT_STORE_ID: &str = "2500579";

// Selectors and class attributes
pub const VALID_DATES_SELECTOR: &str = "div.action-elide.validDates";
pub const VALID_DATES_TAG: &str = "div";
pub const VALID_DATES_CLASS: &str = "action-elide validDates";
pub const BOGO_ITEM_SELECTOR: &str = "h2.ellipsis_text";
pub const BOGO_ITEM_CLASS: &str = "ellipsis_text";

// Patterns
pub const DATE_RANGE_REGEX_PATTERN: &str = r"\d{1,2}/\d{1,2}\s-\s\d{1,2}/\d{1,2}";

// Characters that would split or end the StoreID query value.
pub const STORE_ID_FORBIDDEN_CHARS: &[char] = &['&', '#', '='];
