//! URL error types.

use derive_more::{Display, Error};

/// A request URL that could not be parsed.
#[derive(Debug, Clone, Display, Error)]
#[display("URL Error: cannot parse '{}': {} at line {} in {}", url, message, line, file)]
pub struct UrlError {
    /// The URL text that failed to parse
    pub url: String,
    /// Parser message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl UrlError {
    /// Create a new UrlError for `url` at the current location.
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
