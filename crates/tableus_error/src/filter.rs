//! Filter encoding error types.

use derive_more::{Display, Error};

/// A filter in the table state has no definition with a matching key.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Filter definition not found for {} at line {} in {}", key, line, file)]
pub struct FilterDefinitionNotFoundError {
    /// Key of the filter that could not be resolved
    pub key: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl FilterDefinitionNotFoundError {
    /// Create a new FilterDefinitionNotFoundError at the current location.
    #[track_caller]
    pub fn new(key: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            key: key.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

/// A builtin filter carries a type other than `search`, `select` or `check`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unsupported filter type: {} at line {} in {}", filter_type, line, file)]
pub struct UnsupportedFilterTypeError {
    /// The offending filter type name
    pub filter_type: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl UnsupportedFilterTypeError {
    /// Create a new UnsupportedFilterTypeError at the current location.
    #[track_caller]
    pub fn new(filter_type: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            filter_type: filter_type.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
