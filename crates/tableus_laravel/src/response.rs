//! Laravel pagination envelope.

use derive_getters::Getters;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tableus_core::{FetchResult, ResponsePagination, is_truthy, render_value};
use tableus_error::{JsonError, ServerReportedError, TableusResult};
use tracing::{debug, warn};

const META_FIELDS: [&str; 6] = ["current_page", "from", "last_page", "per_page", "to", "total"];

/// The `meta` block of a paginated Laravel resource collection.
///
/// Pages are 1-based. `from` and `to` are `null` when the page is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct LaravelMeta {
    current_page: u64,
    from: Option<u64>,
    last_page: u64,
    per_page: u64,
    to: Option<u64>,
    total: u64,
}

impl LaravelMeta {
    /// Converts to 0-based response pagination.
    pub fn to_pagination(&self) -> ResponsePagination {
        ResponsePagination::new(
            self.current_page.saturating_sub(1),
            self.per_page,
            self.total,
            self.last_page,
        )
    }
}

/// Whether `meta` is an object carrying all six Laravel pagination members.
///
/// Only presence is checked. Extra members such as `links` and `path` are
/// allowed.
pub fn is_laravel_meta(meta: &Value) -> bool {
    meta.as_object()
        .is_some_and(|fields| META_FIELDS.iter().all(|name| fields.contains_key(*name)))
}

/// The message of a truthy `error` member, if the body has one.
pub fn server_error(body: &Value) -> Option<String> {
    body.get("error")
        .filter(|error| is_truthy(error))
        .map(render_value)
}

fn records<D: DeserializeOwned>(data: Value) -> TableusResult<Vec<D>> {
    serde_json::from_value(data)
        .map_err(|e| JsonError::new("records", e.to_string()).into())
}

/// Maps a decoded response body to a fetch result.
///
/// A truthy `error` member fails with that message whatever `status` was. A
/// body with an array `data` and a Laravel `meta` block yields paginated
/// records; any other body yields its `data` member as plain records.
///
/// # Errors
///
/// Returns a server error for a truthy `error` member and a JSON error when
/// `data` is missing or its records (or the meta block) do not deserialize.
pub fn parse_response<D: DeserializeOwned>(
    body: Value,
    status: u16,
) -> TableusResult<FetchResult<D>> {
    if let Some(message) = server_error(&body) {
        warn!(status, error = %message, "Server reported an error");
        return Err(ServerReportedError::new(message, status).into());
    }

    let Value::Object(mut envelope) = body else {
        return Err(JsonError::new("response body", "not an object").into());
    };

    match (envelope.remove("data"), envelope.remove("meta")) {
        (Some(data @ Value::Array(_)), Some(meta)) if is_laravel_meta(&meta) => {
            let meta: LaravelMeta = serde_json::from_value(meta)
                .map_err(|e| JsonError::new("pagination meta", e.to_string()))?;
            let data = records(data)?;
            debug!(
                records = data.len(),
                current_page = meta.current_page,
                last_page = meta.last_page,
                "Parsed paginated response"
            );
            Ok(FetchResult::Paginated {
                data,
                pagination_state: meta.to_pagination(),
            })
        }
        (Some(data), _) => {
            let data = records(data)?;
            debug!(records = data.len(), "Parsed unpaginated response");
            Ok(FetchResult::Records(data))
        }
        (None, _) => Err(JsonError::new("response body", "no data member").into()),
    }
}
