//! HTTP transport errors.

use derive_more::{Display, Error};

/// A request to the endpoint could not be completed.
///
/// Covers client construction, connection failures, timeouts and bodies that
/// cannot be read. An answered request with a bad status is not an
/// `HttpError`; the body decides the outcome.
///
/// # Examples
///
/// ```
/// use tableus_error::HttpError;
///
/// let err = HttpError::new("https://api.example/users?page=1", "connection refused");
/// assert_eq!(err.url, "https://api.example/users?page=1");
/// assert!(err.to_string().contains("connection refused"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("HTTP Error: request to '{}' failed: {} at line {} in {}", url, message, line, file)]
pub struct HttpError {
    /// Request URL, or the configured endpoint when no request was built
    pub url: String,
    /// Transport message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl HttpError {
    /// Create a new HttpError for `url` at the current location.
    #[track_caller]
    pub fn new(url: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            url: url.into(),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
