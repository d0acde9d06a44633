//! Tableus fetcher for Laravel API resource collections.
//!
//! [`LaravelRestFetcher`] turns a [`TableState`](tableus_core::TableState)
//! into a `GET` request with `page`, `per_page`, `sort` and `filter[...]`
//! query parameters, and reads the `{data, meta}` envelope Laravel paginators
//! answer with.

mod config;
mod fetcher;
mod query;
mod response;

pub use config::{FetcherConfig, FetcherConfigBuilder};
pub use fetcher::LaravelRestFetcher;
pub use query::{
    filter_param_name, is_absolute_url, parse_sort_param, resolve_url, set_filters_query_params,
    set_pagination_query_params, set_query_param, set_sorting_query_params,
};
pub use response::{LaravelMeta, is_laravel_meta, parse_response, server_error};
