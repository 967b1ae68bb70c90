use crate::constants::{
    BOGO_ITEM_CLASS, BOGO_ITEM_SELECTOR, DATE_RANGE_REGEX_PATTERN, VALID_DATES_CLASS,
    VALID_DATES_SELECTOR, VALID_DATES_TAG,
};
use crate::errors::{AppError, AppResult};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::OnceLock;

/// Cached regex for the `M/D - M/D` validity range.
/// Compiled once at initialization for performance.
static DATE_RANGE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Cached CSS selector for the validity-dates container.
static VALID_DATES_SELECTOR_CACHED: OnceLock<Selector> = OnceLock::new();

/// Cached CSS selector for BOGO item headings.
static BOGO_ITEM_SELECTOR_CACHED: OnceLock<Selector> = OnceLock::new();

fn date_range_regex() -> &'static Regex {
    DATE_RANGE_REGEX.get_or_init(|| {
        Regex::new(DATE_RANGE_REGEX_PATTERN).expect("DATE_RANGE_REGEX_PATTERN is a valid regex pattern")
    })
}

fn valid_dates_selector() -> &'static Selector {
    VALID_DATES_SELECTOR_CACHED.get_or_init(|| {
        Selector::parse(VALID_DATES_SELECTOR).expect("VALID_DATES_SELECTOR is a valid CSS selector")
    })
}

fn bogo_item_selector() -> &'static Selector {
    BOGO_ITEM_SELECTOR_CACHED.get_or_init(|| {
        Selector::parse(BOGO_ITEM_SELECTOR).expect("BOGO_ITEM_SELECTOR is a valid CSS selector")
    })
}

/// Returns whether an element's `class` attribute matches `class`.
///
/// A query with several tokens must equal the element's whole class list, in
/// order. A single-token query matches any element carrying that class.
fn class_matches(element: &ElementRef<'_>, class: &str) -> bool {
    let Some(attr) = element.value().attr("class") else {
        return false;
    };
    let wanted: Vec<&str> = class.split_whitespace().collect();
    match wanted.as_slice() {
        [] => false,
        [single] => attr.split_whitespace().any(|c| c == *single),
        _ => attr.split_whitespace().eq(wanted.iter().copied()),
    }
}

/// Concatenated text of all descendant text nodes.
fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect()
}

/// Extracts the first `M/D - M/D` range from `text`, exactly as matched.
///
/// # Example
///
/// ```
/// use publix_bogo::listing::extract_date_range;
///
/// assert_eq!(extract_date_range("Valid 5/21 - 5/27 only"), Some("5/21 - 5/27"));
/// assert_eq!(extract_date_range("5/21-5/27"), None);
/// ```
pub fn extract_date_range(text: &str) -> Option<&str> {
    date_range_regex().find(text).map(|m| m.as_str())
}

/// Parsed listing page.
///
/// Immutable once built. All extraction reads from this one snapshot.
#[derive(Debug)]
pub struct ListingDocument {
    html: Html,
}

impl ListingDocument {
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    /// First element matching `selector` whose class attribute matches `class`.
    pub fn find_first<'a>(&'a self, selector: &Selector, class: &str) -> Option<ElementRef<'a>> {
        self.html
            .select(selector)
            .find(|el| class_matches(el, class))
    }

    /// All elements matching `selector` whose class attribute matches `class`, in document order.
    pub fn find_all<'a>(&'a self, selector: &Selector, class: &str) -> Vec<ElementRef<'a>> {
        self.html
            .select(selector)
            .filter(|el| class_matches(el, class))
            .collect()
    }

    fn valid_dates_text(&self) -> AppResult<String> {
        self.find_first(valid_dates_selector(), VALID_DATES_CLASS)
            .map(|el| element_text(&el))
            .ok_or_else(|| AppError::NotFound {
                tag: VALID_DATES_TAG.to_string(),
                class: VALID_DATES_CLASS.to_string(),
            })
    }

    /// Validity text of the listing with surrounding whitespace removed.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the page has no `<div class="action-elide validDates">`.
    pub fn validity_date_raw(&self) -> AppResult<String> {
        Ok(self.valid_dates_text()?.trim().to_string())
    }

    /// The `M/D - M/D` range inside the validity text.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the validity container is missing, and `NoMatch` if its
    /// text has no date range.
    pub fn validity_date_normalized(&self) -> AppResult<String> {
        let text = self.valid_dates_text()?;
        match extract_date_range(&text) {
            Some(range) => Ok(range.to_string()),
            None => Err(AppError::NoMatch { text }),
        }
    }

    /// Names of every `<h2 class="ellipsis_text">`, verbatim, sorted ascending.
    ///
    /// An empty page yields an empty list.
    pub fn bogo_items(&self) -> Vec<String> {
        let mut items: Vec<String> = self
            .find_all(bogo_item_selector(), BOGO_ITEM_CLASS)
            .iter()
            .map(element_text)
            .collect();
        items.sort();
        items
    }
}
