use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Transport failure: DNS, connect, timeout or a non-success status
    #[error("Network error: {0}")]
    NetworkError(String),
    /// The expected element is absent from the listing page
    #[error("Element not found: <{tag} class=\"{class}\">")]
    NotFound { tag: String, class: String },
    /// The element exists but its text has no date range in it
    #[error("No date range found in text: {text:?}")]
    NoMatch { text: String },
    /// Invalid URL format
    #[error("Invalid URL: {0}")]
    UrlError(String),
    /// Invalid input format
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// IO operation failed
    #[error("IO error: {0}")]
    IoError(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::NetworkError(err.to_string())
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::UrlError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

// Custom type alias for Results in this application
pub type AppResult<T> = Result<T, AppError>;
