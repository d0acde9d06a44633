//! Fetcher configuration.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tableus_error::{ConfigError, TableusResult};

/// Configuration for a [`LaravelRestFetcher`](crate::LaravelRestFetcher).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, Builder)]
#[builder(setter(into))]
pub struct FetcherConfig {
    /// Endpoint URL, absolute or relative to `origin`
    url: String,
    /// Origin used to resolve a relative `url` (e.g. "https://app.example")
    #[builder(default)]
    #[serde(default)]
    origin: Option<String>,
    /// Request timeout in seconds; no timeout when unset
    #[builder(default)]
    #[serde(default)]
    timeout_secs: Option<u64>,
}

impl FetcherConfig {
    /// Creates a new builder for FetcherConfig.
    pub fn builder() -> FetcherConfigBuilder {
        FetcherConfigBuilder::default()
    }

    /// Loads configuration from an optional TOML file overlaid with the
    /// environment.
    ///
    /// Reads:
    /// - `TABLEUS_URL` (required unless the file sets `url`)
    /// - `TABLEUS_ORIGIN` (optional)
    /// - `TABLEUS_TIMEOUT_SECS` (optional)
    ///
    /// Environment variables take precedence over the file.
    #[tracing::instrument]
    pub fn load(path: Option<&Path>) -> TableusResult<Self> {
        let setting = path.map_or_else(|| "TABLEUS_*".to_string(), |p| p.display().to_string());

        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        let config = builder
            .add_source(config::Environment::with_prefix("TABLEUS").try_parsing(true))
            .build()
            .map_err(|e| ConfigError::new(&setting, format!("cannot read: {}", e)))?;

        let loaded: Self = config
            .try_deserialize()
            .map_err(|e| ConfigError::new(&setting, format!("cannot parse: {}", e)))?;

        tracing::debug!(url = %loaded.url, origin = ?loaded.origin, "Loaded fetcher config");
        Ok(loaded)
    }

    /// Loads configuration from the environment only.
    pub fn from_env() -> TableusResult<Self> {
        Self::load(None)
    }

    /// Replaces the origin.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }
}
