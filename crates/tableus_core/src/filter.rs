//! Filters and the definitions that say how to encode them.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tableus_error::TableusResult;
use url::Url;

/// Kind of a filter as reported by the table component.
///
/// Names other than `search`, `select` and `check` are kept in
/// [`FilterType::Other`] so that the encoder decides whether it can handle
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FilterType {
    /// Free-text search box
    #[display("search")]
    Search,
    /// Single choice from a list
    #[display("select")]
    Select,
    /// Checkbox
    #[display("check")]
    Check,
    /// Any other type name
    #[display("{_0}")]
    Other(String),
}

impl From<String> for FilterType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "search" => Self::Search,
            "select" => Self::Select,
            "check" => Self::Check,
            _ => Self::Other(name),
        }
    }
}

impl From<&str> for FilterType {
    fn from(name: &str) -> Self {
        Self::from(name.to_string())
    }
}

impl From<FilterType> for String {
    fn from(filter_type: FilterType) -> Self {
        filter_type.to_string()
    }
}

/// An active filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    /// Key matching a [`FilterDefinition`]
    pub key: String,
    /// Filter kind
    #[serde(rename = "type")]
    pub filter_type: FilterType,
    /// Current value; `null` when unset
    #[serde(default)]
    pub value: Value,
}

impl Filter {
    /// Creates a filter.
    pub fn new(key: impl Into<String>, filter_type: impl Into<FilterType>, value: Value) -> Self {
        Self {
            key: key.into(),
            filter_type: filter_type.into(),
            value,
        }
    }
}

/// Encodes a custom filter into the outgoing request URL.
///
/// The translator owns every change it makes to the URL; the fetcher applies
/// no further policy. Closures of the matching shape are translators.
///
/// # Examples
///
/// ```
/// use tableus_core::{Filter, FilterDefinition};
/// use url::Url;
///
/// let definition = FilterDefinition::custom(
///     "created",
///     |filter: &Filter, url: &mut Url| -> tableus_error::TableusResult<()> {
///         url.query_pairs_mut()
///             .append_pair("created_after", &tableus_core::render_value(&filter.value));
///         Ok(())
///     },
/// );
/// assert!(!definition.is_builtin());
/// ```
pub trait FilterTranslator: Send + Sync {
    /// Writes `filter` into `url`.
    fn translate(&self, filter: &Filter, url: &mut Url) -> TableusResult<()>;
}

impl<F> FilterTranslator for F
where
    F: Fn(&Filter, &mut Url) -> TableusResult<()> + Send + Sync,
{
    fn translate(&self, filter: &Filter, url: &mut Url) -> TableusResult<()> {
        self(filter, url)
    }
}

/// How a filter key is encoded into a request.
#[derive(Clone)]
pub enum FilterDefinition {
    /// Encoded by the fetcher's own rules for `filter_type`
    Builtin {
        /// Filter key
        key: String,
        /// Declared filter kind
        filter_type: FilterType,
    },
    /// Encoded by a caller-supplied translator
    Custom {
        /// Filter key
        key: String,
        /// Translator writing the filter into the URL
        translator: Arc<dyn FilterTranslator>,
    },
}

impl FilterDefinition {
    /// Definition encoded with the builtin rules.
    pub fn builtin(key: impl Into<String>, filter_type: impl Into<FilterType>) -> Self {
        Self::Builtin {
            key: key.into(),
            filter_type: filter_type.into(),
        }
    }

    /// Definition encoded by `translator`.
    pub fn custom(key: impl Into<String>, translator: impl FilterTranslator + 'static) -> Self {
        Self::Custom {
            key: key.into(),
            translator: Arc::new(translator),
        }
    }

    /// Key this definition applies to.
    pub fn key(&self) -> &str {
        match self {
            Self::Builtin { key, .. } | Self::Custom { key, .. } => key,
        }
    }

    /// Whether the fetcher's builtin rules encode this filter.
    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::Builtin { .. })
    }
}

impl std::fmt::Debug for FilterDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Builtin { key, filter_type } => f
                .debug_struct("Builtin")
                .field("key", key)
                .field("filter_type", filter_type)
                .finish(),
            Self::Custom { key, .. } => f
                .debug_struct("Custom")
                .field("key", key)
                .finish_non_exhaustive(),
        }
    }
}

/// Table configuration consumed by fetchers.
#[derive(Debug, Clone, Default)]
pub struct TableConfig {
    /// Definitions for every filter the table can emit
    pub filter_definitions: Vec<FilterDefinition>,
}

impl TableConfig {
    /// Creates a configuration from filter definitions.
    pub fn new(filter_definitions: Vec<FilterDefinition>) -> Self {
        Self { filter_definitions }
    }

    /// Adds a definition.
    pub fn with_definition(mut self, definition: FilterDefinition) -> Self {
        self.filter_definitions.push(definition);
        self
    }

    /// First definition registered for `key`.
    pub fn find_definition(&self, key: &str) -> Option<&FilterDefinition> {
        self.filter_definitions.iter().find(|d| d.key() == key)
    }
}
