//! Tableus Fetch - fetch one page of a Laravel resource collection.
//!
//! Builds the same request a data table would send and prints the records,
//! with pagination when the endpoint reports it, as JSON.

use clap::Parser;
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tableus_core::{
    FetchResult, FilterDefinition, FilterType, PaginationState, TableConfig, TableState,
};
use tableus_laravel::{FetcherConfig, LaravelRestFetcher, parse_sort_param};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Laravel's default page size.
const DEFAULT_PER_PAGE: u64 = 15;

/// Command-line arguments for tableus-fetch.
#[derive(Parser, Debug)]
#[command(name = "tableus-fetch")]
#[command(about = "Fetch one page of a Laravel API resource collection")]
#[command(version)]
struct Args {
    /// Path to fetcher configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Endpoint URL, absolute or relative to --origin (overrides config)
    #[arg(long)]
    url: Option<String>,

    /// Origin relative URLs are resolved against (overrides config)
    #[arg(long)]
    origin: Option<String>,

    /// Table state as JSON, in the shape the table component emits
    #[arg(long)]
    state: Option<PathBuf>,

    /// Builtin filter definitions as JSON: [{"key": "...", "type": "..."}].
    /// Defaults to one builtin definition per filter in the state.
    #[arg(long)]
    filters: Option<PathBuf>,

    /// 1-based page number (overrides state)
    #[arg(long)]
    page: Option<u64>,

    /// Rows per page (overrides state)
    #[arg(long)]
    per_page: Option<u64>,

    /// Sort order, e.g. "name,-created_at" (overrides state)
    #[arg(long)]
    sort: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BuiltinFilter {
    key: String,
    #[serde(rename = "type")]
    filter_type: FilterType,
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn table_state(args: &Args) -> anyhow::Result<TableState> {
    let mut state: TableState = match &args.state {
        Some(path) => read_json(path)?,
        None => TableState::default(),
    };

    let current = state.pagination.unwrap_or(PaginationState::new(0, DEFAULT_PER_PAGE));
    let page_index = args
        .page
        .map(|page| page.saturating_sub(1))
        .unwrap_or(current.page_index);
    let page_size = args.per_page.unwrap_or(current.page_size);
    state.pagination = Some(PaginationState::new(page_index, page_size));

    if let Some(sort) = &args.sort {
        state.sorting = parse_sort_param(sort);
    }

    Ok(state)
}

fn table_config(args: &Args, state: &TableState) -> anyhow::Result<TableConfig> {
    let definitions = match &args.filters {
        Some(path) => read_json::<Vec<BuiltinFilter>>(path)?
            .into_iter()
            .map(|f| FilterDefinition::builtin(f.key, f.filter_type))
            .collect(),
        None => state
            .filters
            .iter()
            .map(|f| FilterDefinition::builtin(f.key.clone(), f.filter_type.clone()))
            .collect(),
    };
    Ok(TableConfig::new(definitions))
}

fn fetcher_config(args: &Args) -> anyhow::Result<FetcherConfig> {
    let config = match &args.url {
        Some(url) => FetcherConfig::builder()
            .url(url.clone())
            .origin(args.origin.clone())
            .build()?,
        None => FetcherConfig::load(args.config.as_deref())?,
    };

    Ok(match &args.origin {
        Some(origin) => config.with_origin(origin.clone()),
        None => config,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = fetcher_config(&args)?;
    let state = table_state(&args)?;
    let table_config = table_config(&args, &state)?;
    info!(url = %config.url(), pagination = ?state.pagination, "Fetching table page");

    let fetcher = LaravelRestFetcher::from_config(&config)?;
    let result: FetchResult<Value> = fetcher.fetch(&state, &table_config).await?;

    info!(
        records = result.records().len(),
        paginated = result.pagination_state().is_some(),
        "Fetch complete"
    );
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
