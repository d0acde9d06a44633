//! Tests for query-string encoding of table state.

use serde_json::{Value, json};
use tableus_core::{
    Filter, FilterDefinition, PaginationState, SortingEntry, TableConfig, render_value,
};
use tableus_error::{ConfigError, TableusErrorKind, TableusResult};
use tableus_laravel::{
    is_absolute_url, parse_sort_param, resolve_url, set_filters_query_params,
    set_pagination_query_params, set_query_param, set_sorting_query_params,
};
use url::Url;

fn base() -> Url {
    Url::parse("https://api.example/users").unwrap()
}

fn param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
}

#[test]
fn test_absolute_url_detection() {
    assert!(is_absolute_url("http://a.example/x"));
    assert!(is_absolute_url("https://a.example/x"));
    assert!(!is_absolute_url("/api/users"));
    assert!(!is_absolute_url("HTTPS://a.example"));
    assert!(!is_absolute_url("ftp://a.example"));
}

#[test]
fn test_resolve_relative_against_origin() {
    let url = resolve_url("/api/users?active=1", Some("https://app.example")).unwrap();
    assert_eq!(url.as_str(), "https://app.example/api/users?active=1");
}

#[test]
fn test_resolve_absolute_ignores_origin() {
    let url = resolve_url("http://other.example/v1", Some("https://app.example")).unwrap();
    assert_eq!(url.host_str(), Some("other.example"));
}

#[test]
fn test_resolve_relative_without_origin_fails() {
    let err = resolve_url("/api/users", None).unwrap_err();
    match err.kind() {
        TableusErrorKind::Config(e) => assert_eq!(e.setting, "TABLEUS_ORIGIN"),
        other => panic!("unexpected kind: {other:?}"),
    }
}

#[test]
fn test_resolve_unparsable_fails() {
    let err = resolve_url("/api", Some("not an origin")).unwrap_err();
    assert!(matches!(err.kind(), TableusErrorKind::Url(_)));
}

#[test]
fn test_set_query_param_replaces_in_place() {
    let mut url = Url::parse("https://a.example/?page=9&x=1&page=8").unwrap();
    set_query_param(&mut url, "page", "2");
    assert_eq!(url.query(), Some("page=2&x=1"));
    set_query_param(&mut url, "per_page", "10");
    assert_eq!(url.query(), Some("page=2&x=1&per_page=10"));
}

#[test]
fn test_pagination_is_one_based_on_the_wire() {
    let mut url = base();
    set_pagination_query_params(&mut url, &PaginationState::new(0, 25));
    assert_eq!(param(&url, "page").as_deref(), Some("1"));
    assert_eq!(param(&url, "per_page").as_deref(), Some("25"));

    set_pagination_query_params(&mut url, &PaginationState::new(4, 10));
    assert_eq!(url.query(), Some("page=5&per_page=10"));
}

#[test]
fn test_last_page_index_does_not_overflow() {
    let mut url = base();
    set_pagination_query_params(&mut url, &PaginationState::new(u64::MAX, 10));
    assert_eq!(param(&url, "page"), Some(u64::MAX.to_string()));
}

#[test]
fn test_sorting_preserves_order_and_direction() {
    let mut url = base();
    set_sorting_query_params(&mut url, &[SortingEntry::asc("a"), SortingEntry::desc("b")]);
    assert_eq!(param(&url, "sort").as_deref(), Some("a,-b"));
}

#[test]
fn test_parse_sort_param_inverts_encoding() {
    let sorting = vec![SortingEntry::desc("created_at"), SortingEntry::asc("name")];
    let mut url = base();
    set_sorting_query_params(&mut url, &sorting);
    assert_eq!(parse_sort_param(&param(&url, "sort").unwrap()), sorting);
    assert!(parse_sort_param(" , ").is_empty());
}

#[test]
fn test_builtin_filters() {
    let table_config = TableConfig::new(vec![
        FilterDefinition::builtin("name", "search"),
        FilterDefinition::builtin("role", "select"),
        FilterDefinition::builtin("active", "check"),
    ]);
    let filters = vec![
        Filter::new("name", "search", json!("ada")),
        Filter::new("role", "select", json!("admin")),
        Filter::new("active", "check", json!(true)),
    ];
    let mut url = base();
    set_filters_query_params(&mut url, &filters, &table_config).unwrap();

    assert_eq!(param(&url, "filter[name]=").as_deref(), Some("ada"));
    assert_eq!(param(&url, "filter[role]=").as_deref(), Some("admin"));
    assert_eq!(param(&url, "filter[active]=").as_deref(), Some("true"));
    assert!(url.query().unwrap().starts_with("filter%5Bname%5D%3D=ada"));
}

#[test]
fn test_whole_number_filter_value_renders_without_fraction() {
    let table_config = TableConfig::new(vec![FilterDefinition::builtin("rating", "select")]);
    let value: Value = serde_json::from_str("2.0").unwrap();
    let filters = vec![Filter::new("rating", "select", value)];
    let mut url = base();

    set_filters_query_params(&mut url, &filters, &table_config).unwrap();
    assert_eq!(param(&url, "filter[rating]=").as_deref(), Some("2"));
}

#[test]
fn test_first_definition_for_a_key_wins() {
    let table_config = TableConfig::default()
        .with_definition(FilterDefinition::builtin("name", "search"))
        .with_definition(FilterDefinition::custom(
            "name",
            |_: &Filter, _: &mut Url| -> TableusResult<()> {
                Err(ConfigError::new("name", "shadowed definition must not run").into())
            },
        ));
    let filters = vec![Filter::new("name", "search", json!("ada"))];
    let mut url = base();

    set_filters_query_params(&mut url, &filters, &table_config).unwrap();
    assert_eq!(param(&url, "filter[name]=").as_deref(), Some("ada"));
}

#[test]
fn test_unchecked_and_empty_filters_emit_nothing() {
    let table_config = TableConfig::new(vec![
        FilterDefinition::builtin("active", "check"),
        FilterDefinition::builtin("name", "search"),
        FilterDefinition::builtin("role", "select"),
    ]);
    let filters = vec![
        Filter::new("active", "check", json!(false)),
        Filter::new("name", "search", json!("")),
        Filter::new("role", "select", Value::Null),
    ];
    let mut url = base();
    set_filters_query_params(&mut url, &filters, &table_config).unwrap();
    assert_eq!(url.query(), None);
}

#[test]
fn test_missing_definition_leaves_url_unchanged() {
    let table_config = TableConfig::new(vec![FilterDefinition::builtin("name", "search")]);
    let filters = vec![
        Filter::new("name", "search", json!("ada")),
        Filter::new("team", "select", json!("core")),
    ];
    let mut url = base();
    set_pagination_query_params(&mut url, &PaginationState::new(0, 10));
    let before = url.clone();

    let err = set_filters_query_params(&mut url, &filters, &table_config).unwrap_err();
    match err.kind() {
        TableusErrorKind::FilterDefinitionNotFound(e) => assert_eq!(e.key, "team"),
        other => panic!("unexpected kind: {other:?}"),
    }
    assert_eq!(url, before);
}

#[test]
fn test_unsupported_type_keeps_earlier_filters() {
    let table_config = TableConfig::new(vec![
        FilterDefinition::builtin("name", "search"),
        FilterDefinition::builtin("age", "search"),
    ]);
    let filters = vec![
        Filter::new("name", "search", json!("ada")),
        Filter::new("age", "range", json!([18, 30])),
    ];
    let mut url = base();

    let err = set_filters_query_params(&mut url, &filters, &table_config).unwrap_err();
    match err.kind() {
        TableusErrorKind::UnsupportedFilterType(e) => assert_eq!(e.filter_type, "range"),
        other => panic!("unexpected kind: {other:?}"),
    }
    assert_eq!(param(&url, "filter[name]=").as_deref(), Some("ada"));
}

#[test]
fn test_custom_translator_owns_the_url() {
    let between = |filter: &Filter, url: &mut Url| -> TableusResult<()> {
        let bounds = filter.value.as_array().cloned().unwrap_or_default();
        let mut pairs = url.query_pairs_mut();
        for (name, bound) in ["min_age", "max_age"].iter().zip(bounds) {
            pairs.append_pair(name, &render_value(&bound));
        }
        Ok(())
    };
    let table_config = TableConfig::new(vec![FilterDefinition::custom("age", between)]);
    let filters = vec![Filter::new("age", "range", json!([18, 30]))];
    let mut url = base();

    set_filters_query_params(&mut url, &filters, &table_config).unwrap();
    assert_eq!(url.query(), Some("min_age=18&max_age=30"));
}

#[test]
fn test_custom_translator_skipped_for_empty_value() {
    let failing = |_: &Filter, _: &mut Url| -> TableusResult<()> {
        Err(ConfigError::new("age", "translator must not run").into())
    };
    let table_config = TableConfig::new(vec![FilterDefinition::custom("age", failing)]);
    let filters = vec![Filter::new("age", "range", json!(""))];
    let mut url = base();

    set_filters_query_params(&mut url, &filters, &table_config).unwrap();
    assert_eq!(url.query(), None);
}

#[test]
fn test_custom_translator_error_propagates() {
    let failing = |filter: &Filter, _: &mut Url| -> TableusResult<()> {
        Err(ConfigError::new(&filter.key, "bad bounds").into())
    };
    let table_config = TableConfig::new(vec![FilterDefinition::custom("age", failing)]);
    let filters = vec![Filter::new("age", "range", json!([1]))];
    let mut url = base();

    let err = set_filters_query_params(&mut url, &filters, &table_config).unwrap_err();
    assert!(err.to_string().contains("age: bad bounds"));
}
