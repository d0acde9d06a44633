//! Fetcher for Laravel API resource collections.

use crate::query::{
    resolve_url, set_filters_query_params, set_pagination_query_params, set_sorting_query_params,
};
use crate::{FetcherConfig, parse_response};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tableus_core::{FetchResult, Fetcher, TableConfig, TableState};
use tableus_error::{HttpError, JsonError, TableusResult};
use tracing::{debug, error, instrument};
use url::Url;

/// Fetches table rows from a Laravel-style REST endpoint.
///
/// Each fetch issues a single `GET`; there is no retry, caching or
/// cancellation. Clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct LaravelRestFetcher {
    client: Client,
    url: String,
    origin: Option<String>,
}

impl LaravelRestFetcher {
    /// Creates a fetcher for `url`.
    ///
    /// A relative `url` needs an origin, see [`with_origin`](Self::with_origin).
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
            origin: None,
        }
    }

    /// Creates a fetcher from configuration.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error if the client cannot be built.
    #[instrument(skip(config), fields(url = %config.url()))]
    pub fn from_config(config: &FetcherConfig) -> TableusResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs() {
            builder = builder.timeout(Duration::from_secs(*secs));
        }
        let client = builder
            .build()
            .map_err(|e| HttpError::new(config.url(), format!("cannot build client: {}", e)))?;

        debug!(origin = ?config.origin(), "Created Laravel fetcher");

        Ok(Self {
            client,
            url: config.url().clone(),
            origin: config.origin().clone(),
        })
    }

    /// Sets the origin relative URLs are resolved against.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Uses `client` for requests.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Returns the configured endpoint URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the origin relative URLs are resolved against.
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    /// Builds the request URL for `table_state`.
    ///
    /// Returns `None` when the state has no pagination; this backend always
    /// pages, so there is nothing to request.
    ///
    /// # Errors
    ///
    /// Fails when the URL cannot be resolved or a filter cannot be encoded.
    pub fn request_url(
        &self,
        table_state: &TableState,
        table_config: &TableConfig,
    ) -> TableusResult<Option<Url>> {
        let Some(pagination) = &table_state.pagination else {
            return Ok(None);
        };

        let mut url = resolve_url(&self.url, self.origin.as_deref())?;
        set_pagination_query_params(&mut url, pagination);
        if !table_state.sorting.is_empty() {
            set_sorting_query_params(&mut url, &table_state.sorting);
        }
        if !table_state.filters.is_empty() {
            set_filters_query_params(&mut url, &table_state.filters, table_config)?;
        }

        Ok(Some(url))
    }

    /// Fetches the rows for `table_state`.
    ///
    /// Without pagination the result is empty and no request is made.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be built, the request fails, the
    /// body is not JSON, or the body carries a truthy `error` member.
    #[instrument(skip_all, fields(url = %self.url))]
    pub async fn fetch<D>(
        &self,
        table_state: &TableState,
        table_config: &TableConfig,
    ) -> TableusResult<FetchResult<D>>
    where
        D: DeserializeOwned,
    {
        let Some(url) = self.request_url(table_state, table_config)? else {
            debug!("No pagination state, skipping request");
            return Ok(FetchResult::Records(Vec::new()));
        };

        debug!(request = %url, "Sending request");

        let response = self.client.get(url.as_str()).send().await.map_err(|e| {
            error!(error = ?e, "HTTP request failed");
            HttpError::new(url.as_str(), e.to_string())
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            error!(status = %status, error = ?e, "Failed to read response body");
            HttpError::new(url.as_str(), format!("cannot read body: {}", e))
        })?;

        let body: Value = serde_json::from_str(&text).map_err(|e| {
            error!(status = %status, error = %e, "Response is not JSON");
            JsonError::new("response body", e.to_string())
        })?;

        debug!(status = %status, "Received response");

        parse_response(body, status.as_u16())
    }
}

#[async_trait]
impl<D> Fetcher<D> for LaravelRestFetcher
where
    D: DeserializeOwned + Send + 'static,
{
    async fn fetch(
        &self,
        table_state: &TableState,
        table_config: &TableConfig,
    ) -> TableusResult<FetchResult<D>> {
        LaravelRestFetcher::fetch::<D>(self, table_state, table_config).await
    }
}
