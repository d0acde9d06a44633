//! Response body decoding errors.

use derive_more::{Display, Error};

/// A response body, or part of it, could not be read.
///
/// `subject` names the part that failed: the whole body, its records or its
/// pagination meta.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("JSON Error: cannot read {}: {} at line {} in {}", subject, message, line, file)]
pub struct JsonError {
    /// Part of the body being read
    pub subject: String,
    /// Decoder message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Create a new JsonError about `subject` at the current location.
    #[track_caller]
    pub fn new(subject: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            subject: subject.into(),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
