// Collably - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "Collably";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "Collably";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Dashboard query defaults
// =============================================================================

/// Lower bound of the price slider and of the default price range.
pub const PRICE_SLIDER_MIN: u64 = 10_000;

/// Upper bound of the price slider and of the default price range.
pub const PRICE_SLIDER_MAX: u64 = 100_000;

/// Lower bound of the follower slider and of the default follower range.
pub const FOLLOWER_SLIDER_MIN: u64 = 20_000;

/// Upper bound of the follower slider and of the default follower range.
pub const FOLLOWER_SLIDER_MAX: u64 = 2_000_000;

// =============================================================================
// Follower counts and formatting
// =============================================================================

/// Multiplier for the `K` suffix in abbreviated follower counts.
pub const THOUSAND: f64 = 1_000.0;

/// Multiplier for the `M` suffix in abbreviated follower counts.
pub const MILLION: f64 = 1_000_000.0;

/// Prices at or above this value (one lakh) are shown in `L` units.
pub const LAKH: u64 = 100_000;

/// Currency symbol used by the price formatter.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Highest valid creator rating.
pub const MAX_RATING: f64 = 5.0;

/// Highest valid audience-match percentage.
pub const MAX_AUDIENCE_MATCH: u8 = 100;

// =============================================================================
// Catalogue limits
// =============================================================================

/// Maximum catalogue file size accepted from disk.
pub const MAX_CATALOGUE_FILE_SIZE: u64 = 4 * 1024 * 1024; // 4 MB

/// Maximum number of creator records in one catalogue.
pub const MAX_CATALOGUE_RECORDS: usize = 100_000;

// =============================================================================
// Export limits
// =============================================================================

/// Default maximum rows written by a single export.
pub const DEFAULT_MAX_EXPORT_ROWS: usize = 50_000;

/// Hard upper bound on the configurable export row cap.
pub const ABSOLUTE_MAX_EXPORT_ROWS: usize = MAX_CATALOGUE_RECORDS;

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG, --debug, nor config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// File names
// =============================================================================

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default user catalogue file name inside the platform data directory.
pub const CATALOGUE_FILE_NAME: &str = "creators.toml";
