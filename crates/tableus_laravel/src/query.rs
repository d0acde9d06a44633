//! Query-string encoding of table state.

use tableus_core::{
    Filter, FilterDefinition, FilterType, PaginationState, SortingEntry, TableConfig,
    is_empty_value, is_truthy, render_value,
};
use tableus_error::{
    ConfigError, FilterDefinitionNotFoundError, TableusResult, UnsupportedFilterTypeError,
    UrlError,
};
use tracing::{debug, instrument};
use url::Url;

/// Whether `url` starts with `http://` or `https://`.
pub fn is_absolute_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Resolves the configured endpoint into a request URL.
///
/// Absolute URLs are used as-is. Anything else is appended to `origin`, the
/// origin of the page the table runs on.
///
/// # Errors
///
/// Returns a config error for a relative URL without an origin, and a URL
/// error when the result does not parse.
#[instrument(level = "debug", skip(origin))]
pub fn resolve_url(url: &str, origin: Option<&str>) -> TableusResult<Url> {
    let full = if is_absolute_url(url) {
        url.to_string()
    } else {
        let origin = origin.ok_or_else(|| {
            ConfigError::new("TABLEUS_ORIGIN", format!("relative url '{}' needs an origin", url))
        })?;
        format!("{}{}", origin, url)
    };

    let resolved = Url::parse(&full).map_err(|e| UrlError::new(&full, e.to_string()))?;
    debug!(url = %resolved, "Resolved request url");
    Ok(resolved)
}

/// Sets `name` to `value`, replacing the first existing pair in place and
/// dropping later duplicates. Appends when the name is not present.
pub fn set_query_param(url: &mut Url, name: &str, value: &str) {
    let mut pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    let mut found = false;
    pairs.retain_mut(|(key, current)| {
        if key != name {
            return true;
        }
        if found {
            return false;
        }
        found = true;
        *current = value.to_string();
        true
    });
    if !found {
        pairs.push((name.to_string(), value.to_string()));
    }
    url.query_pairs_mut().clear().extend_pairs(pairs);
}

/// Writes `page` (1-based) and `per_page`.
pub fn set_pagination_query_params(url: &mut Url, pagination: &PaginationState) {
    set_query_param(url, "page", &pagination.page_index.saturating_add(1).to_string());
    set_query_param(url, "per_page", &pagination.page_size.to_string());
}

/// Writes `sort` as comma-joined column ids, `-` marking descending columns.
pub fn set_sorting_query_params(url: &mut Url, sorting: &[SortingEntry]) {
    let sort = sorting
        .iter()
        .map(|entry| {
            if entry.desc {
                format!("-{}", entry.id)
            } else {
                entry.id.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(",");
    set_query_param(url, "sort", &sort);
}

/// Reads a `sort` parameter back into sorting entries.
///
/// Empty segments are skipped.
///
/// # Examples
///
/// ```
/// use tableus_laravel::parse_sort_param;
///
/// let sorting = parse_sort_param("name,-created_at");
/// assert_eq!(sorting[0].id, "name");
/// assert!(sorting[1].desc);
/// ```
pub fn parse_sort_param(sort: &str) -> Vec<SortingEntry> {
    sort.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| match s.strip_prefix('-') {
            Some(id) => SortingEntry::desc(id),
            None => SortingEntry::asc(s),
        })
        .collect()
}

/// Parameter name for a builtin filter.
///
/// The trailing `=` belongs to the name; the backend expects it there.
pub fn filter_param_name(key: &str) -> String {
    format!("filter[{}]=", key)
}

/// Writes `filters` into `url` using the definitions in `table_config`.
///
/// Definitions are resolved for every filter before the URL is touched, so a
/// missing definition leaves the URL unchanged. Filters whose value is `null`
/// or empty are skipped. Custom definitions hand the filter to their
/// translator; builtin definitions encode by filter type.
///
/// # Errors
///
/// Fails on the first filter without a definition, on a builtin filter with
/// an unsupported type, and with whatever a translator returns. Filters
/// encoded before an unsupported type stay applied.
#[instrument(level = "debug", skip_all, fields(filters = filters.len()))]
pub fn set_filters_query_params(
    url: &mut Url,
    filters: &[Filter],
    table_config: &TableConfig,
) -> TableusResult<()> {
    let resolved = filters
        .iter()
        .map(|filter| {
            table_config
                .find_definition(&filter.key)
                .map(|definition| (filter, definition))
                .ok_or_else(|| FilterDefinitionNotFoundError::new(&filter.key))
        })
        .collect::<Result<Vec<_>, _>>()?;

    for (filter, definition) in resolved {
        if is_empty_value(&filter.value) {
            continue;
        }

        match definition {
            FilterDefinition::Custom { translator, .. } => translator.translate(filter, url)?,
            FilterDefinition::Builtin { .. } => match &filter.filter_type {
                FilterType::Search | FilterType::Select => {
                    set_query_param(
                        url,
                        &filter_param_name(&filter.key),
                        &render_value(&filter.value),
                    );
                }
                FilterType::Check => {
                    if is_truthy(&filter.value) {
                        set_query_param(
                            url,
                            &filter_param_name(&filter.key),
                            &render_value(&filter.value),
                        );
                    }
                }
                FilterType::Other(name) => {
                    return Err(UnsupportedFilterTypeError::new(name.clone()).into());
                }
            },
        }
    }

    Ok(())
}
