// Collably - main.rs
//
// Command-line front end for the creator discovery dashboard. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation (debug mode support)
// 3. Catalogue selection (CLI > config > data dir > built-in demo set)
// 4. Query construction, then a printed result table or an export file

use clap::Parser;
use collably::app::state::DashboardState;
use collably::app::{catalogue_mgr, export_mgr};
use collably::core::filter::QueryState;
use collably::core::format::{format_price, format_range_label, format_reach};
use collably::core::model::{Category, CreatorRecord, Platform};
use collably::core::sort::SortKey;
use collably::platform::config::{self, AppConfig, PlatformPaths};
use collably::util::constants;
use collably::util::error::CollablyError;
use collably::util::logging;
use std::path::{Path, PathBuf};

/// Collably - find creators for brand collaborations.
///
/// Filters a creator catalogue by text, category, price, audience size, and
/// platform, then prints the ranked matches or exports them.
#[derive(Parser, Debug)]
#[command(name = "collably", version, about)]
struct Cli {
    /// Creator catalogue file (.toml or .json). Uses the built-in demo set if
    /// neither this, the config file, nor the data directory provides one.
    #[arg(short = 'c', long = "catalogue")]
    catalogue: Option<PathBuf>,

    /// Case-insensitive search over name, descriptor, and category.
    #[arg(short = 's', long = "search")]
    search: Option<String>,

    /// Only include this category (repeatable).
    #[arg(long = "category")]
    categories: Vec<Category>,

    /// Only include creators on this platform (repeatable; any match counts).
    /// One of Instagram, TikTok, YouTube, LinkedIn.
    #[arg(long = "platform", value_parser = parse_filter_platform)]
    platforms: Vec<Platform>,

    /// Lowest starting price.
    #[arg(long = "price-min")]
    price_min: Option<u64>,

    /// Highest starting price.
    #[arg(long = "price-max")]
    price_max: Option<u64>,

    /// Smallest maximum reach.
    #[arg(long = "followers-min")]
    followers_min: Option<u64>,

    /// Largest maximum reach.
    #[arg(long = "followers-max")]
    followers_max: Option<u64>,

    /// Sort order: featured, price-low, price-high, followers, audience.
    #[arg(long = "sort")]
    sort: Option<String>,

    /// Write the results to this file (.csv or .json) instead of printing.
    #[arg(short = 'e', long = "export")]
    export: Option<PathBuf>,

    /// Directory holding config.toml (defaults to the platform config dir).
    #[arg(long = "config-dir")]
    config_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let platform_paths = PlatformPaths::resolve();
    let config_dir = cli
        .config_dir
        .clone()
        .unwrap_or_else(|| platform_paths.config_dir.clone());

    // Config is read before logging so [logging] level can take effect;
    // its warnings are replayed once the subscriber exists.
    let (app_config, config_warnings) = config::load_config(&config_dir);

    logging::init(
        cli.debug,
        app_config.log_level.as_deref(),
        app_config.log_file.as_deref(),
    );

    tracing::info!(
        version = constants::APP_VERSION,
        debug = cli.debug,
        "Collably starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    if let Err(e) = run(&cli, &app_config, &platform_paths) {
        tracing::error!(error = %e, "Collably failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli, app_config: &AppConfig, paths: &PlatformPaths) -> collably::util::error::Result<()> {
    let catalogue_path = resolve_catalogue_path(cli, app_config, paths);
    let records = catalogue_mgr::load_catalogue(catalogue_path.as_deref())?;

    let query = build_query(cli, app_config.initial_query());
    let dashboard = DashboardState::new(records, query);

    match cli.export {
        Some(ref path) => {
            let count = export_view(&dashboard, path, app_config.max_export_rows)?;
            println!("Exported {count} creators to {}", path.display());
        }
        None => print_view(&dashboard),
    }

    Ok(())
}

/// CLI flag, then `[catalogue] path`, then `<data dir>/creators.toml` if it
/// exists. `None` selects the built-in demo catalogue.
fn resolve_catalogue_path(
    cli: &Cli,
    app_config: &AppConfig,
    paths: &PlatformPaths,
) -> Option<PathBuf> {
    if let Some(ref path) = cli.catalogue {
        return Some(path.clone());
    }
    if let Some(ref path) = app_config.catalogue_path {
        return Some(path.clone());
    }
    let default = paths.default_catalogue();
    if default.is_file() {
        tracing::debug!(path = %default.display(), "Using catalogue from data directory");
        return Some(default);
    }
    None
}

/// Layer CLI flags over the configured starting query.
fn build_query(cli: &Cli, base: QueryState) -> QueryState {
    let mut query = base;

    if let Some(ref text) = cli.search {
        query = query.with_search_text(text.as_str());
    }
    for &category in &cli.categories {
        query = query.with_category_set(category, true);
    }
    for &platform in &cli.platforms {
        query = query.with_platform_set(platform, true);
    }

    let price = query.price_range;
    query = query.with_price_range(
        cli.price_min.unwrap_or(price.min),
        cli.price_max.unwrap_or(price.max),
    );
    let followers = query.follower_range;
    query = query.with_follower_range(
        cli.followers_min.unwrap_or(followers.min),
        cli.followers_max.unwrap_or(followers.max),
    );

    if let Some(ref sort) = cli.sort {
        if SortKey::parse(sort).is_none() {
            tracing::warn!(sort = %sort, "Unknown sort key; using featured");
        }
        query = query.with_sort_key(SortKey::parse_lenient(sort));
    }

    query
}

/// `--platform` accepts only the platforms offered in the filter panel.
fn parse_filter_platform(value: &str) -> Result<Platform, String> {
    let platform: Platform = value.parse()?;
    if Platform::filterable().contains(&platform) {
        return Ok(platform);
    }
    let options: Vec<&str> = Platform::filterable().iter().map(Platform::label).collect();
    Err(format!(
        "{platform} is not a filter option (expected one of: {})",
        options.join(", ")
    ))
}

fn export_view(
    dashboard: &DashboardState,
    path: &Path,
    max_rows: usize,
) -> Result<usize, CollablyError> {
    let creators: Vec<&CreatorRecord> = dashboard.visible().collect();
    Ok(export_mgr::export_to_file(&creators, path, max_rows)?)
}

fn print_view(dashboard: &DashboardState) {
    let query = dashboard.query();

    println!(
        "Price {} - {} | Followers {} - {} | Sort: {}",
        format_price(query.price_range.min),
        format_price(query.price_range.max),
        format_range_label(query.follower_range.min),
        format_range_label(query.follower_range.max),
        query.sort_key.label(),
    );
    println!("{}", dashboard.status_line());

    if dashboard.result_count() == 0 {
        return;
    }

    println!();
    println!(
        "{:<22} {:<20} {:<10} {:>7} {:>8} {:>9} {:>6}  Platforms",
        "Name", "Handle", "Category", "Reach", "Price", "Audience", "Rating"
    );
    for creator in dashboard.visible() {
        let name = if creator.verified {
            format!("{} ✓", creator.name)
        } else {
            creator.name.clone()
        };
        let platforms: Vec<&str> = creator.platforms.iter().map(|p| p.label()).collect();
        println!(
            "{:<22} {:<20} {:<10} {:>7} {:>8} {:>8}% {:>6.1}  {}",
            name,
            creator.handle(),
            creator.category.label(),
            format_reach(creator.max_reach()),
            format_price(creator.starting_price),
            creator.audience_match,
            creator.rating,
            platforms.join(", "),
        );
    }
}
