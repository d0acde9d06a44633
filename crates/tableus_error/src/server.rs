//! Errors reported by the backend inside a response body.

use derive_more::{Display, Error};

/// The response body carried a truthy `error` member.
///
/// Raised regardless of the HTTP status the server answered with.
///
/// # Examples
///
/// ```
/// use tableus_error::ServerReportedError;
///
/// let err = ServerReportedError::new("bad request", 200);
/// assert_eq!(err.message, "bad request");
/// assert_eq!(err.status, 200);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Server Error: {} (status {}) at line {} in {}", message, status, line, file)]
pub struct ServerReportedError {
    /// The value of the `error` member, rendered as text
    pub message: String,
    /// HTTP status code of the response that carried the error
    pub status: u16,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ServerReportedError {
    /// Create a new ServerReportedError at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>, status: u16) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            status,
            line: location.line(),
            file: location.file(),
        }
    }
}
