// Collably - platform/config.rs
//
// Platform-specific directory resolution and config.toml loading with
// startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::filter::{QueryState, ValueRange};
use crate::core::sort::SortKey;
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for Collably configuration and data.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/collably/ or %APPDATA%\Collably\config\)
    pub config_dir: PathBuf,

    /// Data directory; the default home of a user catalogue.
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            let data_dir = proj_dirs.data_dir().to_path_buf();

            tracing::debug!(
                config = %config_dir.display(),
                data = %data_dir.display(),
                "Platform paths resolved"
            );

            Self {
                config_dir,
                data_dir,
            }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            let fallback = PathBuf::from(".");
            Self {
                config_dir: fallback.clone(),
                data_dir: fallback,
            }
        }
    }

    /// User catalogue picked up automatically when present.
    pub fn default_catalogue(&self) -> PathBuf {
        self.data_dir.join(constants::CATALOGUE_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility -- a newer
/// config file can be used with an older binary without crashing.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[catalogue]` section.
    pub catalogue: CatalogueSection,
    /// `[dashboard]` section.
    pub dashboard: DashboardSection,
    /// `[export]` section.
    pub export: ExportSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[catalogue]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct CatalogueSection {
    /// User catalogue file (.toml or .json).
    pub path: Option<String>,
}

/// `[dashboard]` config section: initial query for new sessions.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct DashboardSection {
    /// Sort key identifier, e.g. "price-low".
    pub sort: Option<String>,
    pub price_min: Option<u64>,
    pub price_max: Option<u64>,
    pub followers_min: Option<u64>,
    pub followers_max: Option<u64>,
}

/// `[export]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ExportSection {
    /// Maximum creators written per export.
    pub max_rows: Option<usize>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
    /// Log file, written in addition to stderr.
    pub file: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// User catalogue file, if configured.
    pub catalogue_path: Option<PathBuf>,

    /// Initial sort key.
    pub sort_key: SortKey,
    /// Initial price band.
    pub price_range: ValueRange,
    /// Initial follower band.
    pub follower_range: ValueRange,

    /// Export row cap.
    pub max_export_rows: usize,

    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
    /// Extra log destination, appended to.
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalogue_path: None,
            sort_key: SortKey::default(),
            price_range: ValueRange::default_price(),
            follower_range: ValueRange::default_followers(),
            max_export_rows: constants::DEFAULT_MAX_EXPORT_ROWS,
            log_level: None,
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Starting query for a new dashboard session.
    pub fn initial_query(&self) -> QueryState {
        QueryState::default()
            .with_sort_key(self.sort_key)
            .with_price_range(self.price_range.min, self.price_range.max)
            .with_follower_range(self.follower_range.min, self.follower_range.max)
    }
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and every problem found. Each
/// problem has already been replaced by its default in the returned config.
/// If the file does not exist, returns defaults with no problems (first run).
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<ConfigError>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), Vec::new());
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => parse_config(&content, &config_path),
        Err(e) => (
            AppConfig::default(),
            vec![ConfigError::Io {
                path: config_path,
                source: e,
            }],
        ),
    }
}

/// Validate config.toml content. `source_path` is used for messages only.
pub fn parse_config(content: &str, source_path: &Path) -> (AppConfig, Vec<ConfigError>) {
    let raw: RawConfig = match toml::from_str(content) {
        Ok(r) => r,
        Err(e) => {
            let err = ConfigError::TomlParse {
                path: source_path.to_path_buf(),
                source: e,
            };
            return (AppConfig::default(), vec![err]);
        }
    };

    tracing::info!(path = %source_path.display(), "Loaded config.toml");

    // Validate each field against named constants, accumulating all problems.
    let mut problems: Vec<ConfigError> = Vec::new();
    let mut config = AppConfig::default();

    // -- Catalogue: path --
    if let Some(ref path) = raw.catalogue.path {
        if !path.is_empty() {
            config.catalogue_path = Some(PathBuf::from(path));
        }
    }

    // -- Dashboard: sort --
    if let Some(ref sort) = raw.dashboard.sort {
        match SortKey::parse(sort) {
            Some(key) => config.sort_key = key,
            None => {
                let valid: Vec<&str> = SortKey::all().iter().map(SortKey::as_str).collect();
                problems.push(ConfigError::UnrecognisedValue {
                    field: "[dashboard] sort".to_string(),
                    value: sort.clone(),
                    expected: valid.join(", "),
                });
            }
        }
    }

    // -- Dashboard: price band --
    config.price_range = validated_range(
        "price",
        raw.dashboard.price_min,
        raw.dashboard.price_max,
        ValueRange::default_price(),
        &mut problems,
    );

    // -- Dashboard: follower band --
    config.follower_range = validated_range(
        "followers",
        raw.dashboard.followers_min,
        raw.dashboard.followers_max,
        ValueRange::default_followers(),
        &mut problems,
    );

    // -- Export: max_rows --
    if let Some(rows) = raw.export.max_rows {
        if (1..=constants::ABSOLUTE_MAX_EXPORT_ROWS).contains(&rows) {
            config.max_export_rows = rows;
        } else {
            problems.push(ConfigError::ValueOutOfRange {
                field: "[export] max_rows".to_string(),
                value: rows.to_string(),
                expected: format!("1-{}", constants::ABSOLUTE_MAX_EXPORT_ROWS),
            });
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            problems.push(ConfigError::UnrecognisedValue {
                field: "[logging] level".to_string(),
                value: level.clone(),
                expected: constants::VALID_LOG_LEVELS.join(", "),
            });
        }
    }

    // -- Logging: file --
    if let Some(ref file) = raw.logging.file {
        if !file.is_empty() {
            config.log_file = Some(PathBuf::from(file));
        }
    }

    if !problems.is_empty() {
        tracing::warn!(
            count = problems.len(),
            "Config validation produced warnings"
        );
    }

    (config, problems)
}

/// Merge optional `<name>_min` / `<name>_max` overrides into `default`.
/// Each bound must lie within the slider; the pair must not be inverted.
fn validated_range(
    name: &str,
    min: Option<u64>,
    max: Option<u64>,
    default: ValueRange,
    problems: &mut Vec<ConfigError>,
) -> ValueRange {
    let slider = default;
    let mut check = |field: &str, value: Option<u64>, fallback: u64| match value {
        Some(v) if slider.contains(v) => v,
        Some(v) => {
            problems.push(ConfigError::ValueOutOfRange {
                field: format!("[dashboard] {name}_{field}"),
                value: v.to_string(),
                expected: format!("{}-{}", slider.min, slider.max),
            });
            fallback
        }
        None => fallback,
    };

    let lo = check("min", min, default.min);
    let hi = check("max", max, default.max);

    if lo > hi {
        problems.push(ConfigError::InvertedRange {
            name: name.to_string(),
            min: lo,
            max: hi,
        });
        return default;
    }
    ValueRange { min: lo, max: hi }
}
