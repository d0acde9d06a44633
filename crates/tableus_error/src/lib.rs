//! Error types for the Tableus Laravel fetcher.
//!
//! Every error carries the source location where it was raised. The
//! [`TableusErrorKind`] enum unifies them and [`TableusError`] wraps the kind
//! so that `?` converts any of them at call sites.

mod config;
mod filter;
mod http;
mod json;
mod server;
mod url;

pub use config::ConfigError;
pub use filter::{FilterDefinitionNotFoundError, UnsupportedFilterTypeError};
pub use http::HttpError;
pub use json::JsonError;
pub use server::ServerReportedError;
pub use url::UrlError;

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum TableusErrorKind {
    /// Response body carried a truthy `error` member
    ServerReported(ServerReportedError),
    /// Filter key without a matching definition
    FilterDefinitionNotFound(FilterDefinitionNotFoundError),
    /// Builtin filter with an unknown type
    UnsupportedFilterType(UnsupportedFilterTypeError),
    /// HTTP transport error
    Http(HttpError),
    /// JSON parsing or shape error
    Json(JsonError),
    /// Unparsable request URL
    Url(UrlError),
    /// Configuration error
    Config(ConfigError),
}

impl std::fmt::Display for TableusErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableusErrorKind::ServerReported(e) => write!(f, "{}", e),
            TableusErrorKind::FilterDefinitionNotFound(e) => write!(f, "{}", e),
            TableusErrorKind::UnsupportedFilterType(e) => write!(f, "{}", e),
            TableusErrorKind::Http(e) => write!(f, "{}", e),
            TableusErrorKind::Json(e) => write!(f, "{}", e),
            TableusErrorKind::Url(e) => write!(f, "{}", e),
            TableusErrorKind::Config(e) => write!(f, "{}", e),
        }
    }
}

/// Tableus error with kind discrimination.
#[derive(Debug)]
pub struct TableusError(Box<TableusErrorKind>);

impl TableusError {
    /// Create a new error from a kind.
    pub fn new(kind: TableusErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &TableusErrorKind {
        &self.0
    }

    /// Consume the error and return its kind.
    pub fn into_kind(self) -> TableusErrorKind {
        *self.0
    }
}

impl std::fmt::Display for TableusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tableus Error: {}", self.0)
    }
}

impl std::error::Error for TableusError {}

// Generic From implementation for any type that converts to TableusErrorKind
impl<T> From<T> for TableusError
where
    T: Into<TableusErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Tableus operations.
pub type TableusResult<T> = std::result::Result<T, TableusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_mark_converts_into_tableus_error() {
        fn lookup() -> TableusResult<()> {
            let missing: Result<(), FilterDefinitionNotFoundError> =
                Err(FilterDefinitionNotFoundError::new("status"));
            missing?;
            Ok(())
        }

        let err = lookup().unwrap_err();
        match err.kind() {
            TableusErrorKind::FilterDefinitionNotFound(e) => assert_eq!(e.key, "status"),
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn test_display_includes_location() {
        let err = TableusError::from(UnsupportedFilterTypeError::new("range"));
        let text = err.to_string();
        assert!(text.starts_with("Tableus Error: Unsupported filter type: range"));
        assert!(text.contains("lib.rs"));
    }

    #[test]
    fn test_transport_and_config_errors_name_their_subject() {
        let err = TableusError::from(HttpError::new("https://api.example/users", "timed out"));
        assert!(err.to_string().starts_with(
            "Tableus Error: HTTP Error: request to 'https://api.example/users' failed: timed out"
        ));

        let err = TableusError::from(JsonError::new("records", "expected u8"));
        assert!(err.to_string().contains("JSON Error: cannot read records: expected u8"));

        match TableusError::from(ConfigError::new("tableus.toml", "missing url")).into_kind() {
            TableusErrorKind::Config(e) => {
                assert_eq!(e.setting, "tableus.toml");
                assert_eq!(e.message, "missing url");
                assert!(e.file.ends_with("lib.rs"));
            }
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn test_server_reported_message_is_preserved() {
        let err = TableusError::from(ServerReportedError::new("bad request", 422));
        match err.into_kind() {
            TableusErrorKind::ServerReported(e) => {
                assert_eq!(e.message, "bad request");
                assert_eq!(e.status, 422);
            }
            other => panic!("unexpected kind: {other:?}"),
        }
    }
}
