//! Table state handed to a fetcher.

use crate::Filter;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Requested page of a table.
///
/// `page_index` is 0-based. Backends that count pages from 1 convert at the
/// wire boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    /// 0-based page index
    pub page_index: u64,
    /// Number of rows per page
    pub page_size: u64,
}

impl PaginationState {
    /// Creates a pagination state for the given 0-based page.
    pub fn new(page_index: u64, page_size: u64) -> Self {
        Self {
            page_index,
            page_size,
        }
    }
}

/// One column of the sort order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortingEntry {
    /// Column id, sent to the backend as the field name
    pub id: String,
    /// Sort descending
    #[serde(default)]
    pub desc: bool,
}

impl SortingEntry {
    /// Ascending sort on `id`.
    pub fn asc(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            desc: false,
        }
    }

    /// Descending sort on `id`.
    pub fn desc(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            desc: true,
        }
    }
}

/// Pagination, sorting and filtering owned by the table component.
///
/// Fetchers only read it. Serializes with the camelCase names the table
/// component uses, so a state dumped by the front end can be fed straight in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into, strip_option), default)]
pub struct TableState {
    /// Requested page; absent when the table is not paginated
    #[serde(default)]
    pub pagination: Option<PaginationState>,
    /// Sort order, most significant column first
    #[serde(default)]
    pub sorting: Vec<SortingEntry>,
    /// Active filters in the order the table lists them
    #[serde(default)]
    pub filters: Vec<Filter>,
}

impl TableState {
    /// Creates a new builder for TableState.
    pub fn builder() -> TableStateBuilder {
        TableStateBuilder::default()
    }
}
