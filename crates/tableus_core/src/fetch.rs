//! Fetcher trait and the result it produces.

use crate::{TableConfig, TableState};
use async_trait::async_trait;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tableus_error::TableusResult;

/// Pagination reported back by a backend, converted to 0-based pages.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Getters,
)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePagination {
    /// 0-based index of the returned page
    page_index: u64,
    /// Rows per page
    page_size: u64,
    /// Total rows across all pages
    total: u64,
    /// Number of pages
    page_count: u64,
}

impl ResponsePagination {
    /// Creates a response pagination state.
    pub fn new(page_index: u64, page_size: u64, total: u64, page_count: u64) -> Self {
        Self {
            page_index,
            page_size,
            total,
            page_count,
        }
    }
}

/// Records returned by a fetcher, with pagination when the backend sent it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FetchResult<D> {
    /// Records without pagination information
    Records(Vec<D>),
    /// Records with the backend's pagination
    Paginated {
        /// Records of the current page
        data: Vec<D>,
        /// Pagination of the current page
        #[serde(rename = "paginationState")]
        pagination_state: ResponsePagination,
    },
}

impl<D> FetchResult<D> {
    /// Records regardless of shape.
    pub fn records(&self) -> &[D] {
        match self {
            Self::Records(data) | Self::Paginated { data, .. } => data,
        }
    }

    /// Pagination, when the backend reported it.
    pub fn pagination_state(&self) -> Option<&ResponsePagination> {
        match self {
            Self::Records(_) => None,
            Self::Paginated {
                pagination_state, ..
            } => Some(pagination_state),
        }
    }

    /// Consumes the result and returns its records.
    pub fn into_records(self) -> Vec<D> {
        match self {
            Self::Records(data) | Self::Paginated { data, .. } => data,
        }
    }
}

impl<D> Default for FetchResult<D> {
    fn default() -> Self {
        Self::Records(Vec::new())
    }
}

/// Loads rows for a data table.
///
/// Implementations translate the table state into a backend request and the
/// response back into records. Each call is independent.
#[async_trait]
pub trait Fetcher<D>: Send + Sync
where
    D: Send + 'static,
{
    /// Fetches the rows for `table_state`.
    async fn fetch(
        &self,
        table_state: &TableState,
        table_config: &TableConfig,
    ) -> TableusResult<FetchResult<D>>;
}
