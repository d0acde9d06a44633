//! Core data types for the Tableus Laravel fetcher.
//!
//! This crate holds the table state a data-table component hands to a
//! fetcher, the filter definitions supplied by the table configuration, and
//! the result a fetcher returns.

mod fetch;
mod filter;
mod state;
mod value;

pub use fetch::{FetchResult, Fetcher, ResponsePagination};
pub use filter::{Filter, FilterDefinition, FilterTranslator, FilterType, TableConfig};
pub use state::{PaginationState, SortingEntry, TableState, TableStateBuilder};
pub use value::{is_empty_value, is_truthy, render_value};
