//! Fetcher configuration errors.

use derive_more::{Display, Error};

/// Fetcher settings are missing or invalid.
///
/// # Examples
///
/// ```
/// use tableus_error::ConfigError;
///
/// let err = ConfigError::new("TABLEUS_ORIGIN", "relative url '/api/users' needs an origin");
/// assert_eq!(err.setting, "TABLEUS_ORIGIN");
/// assert!(err.to_string().starts_with("Configuration Error: TABLEUS_ORIGIN:"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Configuration Error: {}: {} at line {} in {}", setting, message, line, file)]
pub struct ConfigError {
    /// Where the bad value came from: a file path or a `TABLEUS_*` key
    pub setting: String,
    /// What is wrong with it
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError for `setting` at the current location.
    #[track_caller]
    pub fn new(setting: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            setting: setting.into(),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
