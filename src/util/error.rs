// Collably - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// All errors preserve the causal chain for diagnostic logging.
//
// The filter/sort engine itself is total and never produces errors; these
// types cover the I/O edges around it (catalogue loading, export, config).
// Config problems are never fatal: `ConfigError` values are reported as
// startup warnings rather than propagated.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all Collably operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum CollablyError {
    /// Creator catalogue loading or validation failed.
    Catalogue(CatalogueError),

    /// Export operation failed.
    Export(ExportError),
}

impl fmt::Display for CollablyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Catalogue(e) => write!(f, "Catalogue error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
        }
    }
}

impl std::error::Error for CollablyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Catalogue(e) => Some(e),
            Self::Export(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Catalogue errors
// ---------------------------------------------------------------------------

/// Errors related to creator catalogue loading and validation.
#[derive(Debug)]
pub enum CatalogueError {
    /// TOML catalogue could not be parsed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// JSON catalogue could not be parsed.
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Catalogue file extension is neither `.toml` nor `.json`.
    UnsupportedFormat { path: PathBuf },

    /// Catalogue file exceeds the maximum allowed size.
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// Two records share the same id.
    DuplicateId { id: u32 },

    /// Category name outside the closed category set.
    UnknownCategory { id: u32, value: String },

    /// Platform name outside the closed platform set.
    UnknownPlatform { id: u32, value: String },

    /// Rating outside 0.0-5.0 (or not a number).
    InvalidRating { id: u32, rating: f64 },

    /// Audience match above 100.
    InvalidAudienceMatch { id: u32, value: u32 },

    /// A follower count is recorded for a platform the creator is not on.
    UnlistedPlatform { id: u32, platform: String },

    /// Catalogue holds more records than allowed.
    TooManyRecords { count: usize, max: usize },

    /// I/O error reading a catalogue file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for CatalogueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Failed to parse TOML '{}': {source}", path.display())
            }
            Self::JsonParse { path, source } => {
                write!(f, "Failed to parse JSON '{}': {source}", path.display())
            }
            Self::UnsupportedFormat { path } => write!(
                f,
                "Catalogue '{}' must be a .toml or .json file",
                path.display()
            ),
            Self::FileTooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "Catalogue '{}' is {size} bytes, exceeds maximum of {max_size} bytes",
                path.display()
            ),
            Self::DuplicateId { id } => write!(f, "Duplicate creator id {id}"),
            Self::UnknownCategory { id, value } => {
                write!(f, "Creator {id}: unknown category '{value}'")
            }
            Self::UnknownPlatform { id, value } => {
                write!(f, "Creator {id}: unknown platform '{value}'")
            }
            Self::InvalidRating { id, rating } => {
                write!(f, "Creator {id}: rating {rating} is outside 0.0-5.0")
            }
            Self::InvalidAudienceMatch { id, value } => {
                write!(f, "Creator {id}: audience match {value}% is above 100%")
            }
            Self::UnlistedPlatform { id, platform } => write!(
                f,
                "Creator {id}: follower count given for {platform}, \
                 which is missing from the platforms list"
            ),
            Self::TooManyRecords { count, max } => {
                write!(f, "Catalogue has {count} creators, maximum is {max}")
            }
            Self::Io { path, source } => {
                write!(
                    f,
                    "I/O error reading catalogue '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for CatalogueError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::JsonParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<CatalogueError> for CollablyError {
    fn from(e: CatalogueError) -> Self {
        Self::Catalogue(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export file.
    Io { path: PathBuf, source: io::Error },

    /// CSV serialisation error.
    Csv { path: PathBuf, source: csv::Error },

    /// JSON serialisation error.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Export file extension is neither `.csv` nor `.json`.
    UnsupportedFormat { path: PathBuf },

    /// Export would exceed maximum row count.
    TooManyRows { count: usize, max: usize },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "CSV export error '{}': {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "JSON export error '{}': {source}", path.display())
            }
            Self::UnsupportedFormat { path } => write!(
                f,
                "Cannot export to '{}': use a .csv or .json extension",
                path.display()
            ),
            Self::TooManyRows { count, max } => write!(
                f,
                "Export of {count} creators exceeds maximum of {max}. \
                 Apply filters to reduce the result set."
            ),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ExportError> for CollablyError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// A problem found while loading `config.toml`. The affected setting falls
/// back to its default.
#[derive(Debug)]
pub enum ConfigError {
    /// The file exists but could not be read.
    Io { path: PathBuf, source: io::Error },

    /// The file is not valid TOML for the expected layout.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A numeric setting lies outside its allowed bounds.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// A setting names something that does not exist.
    UnrecognisedValue {
        field: String,
        value: String,
        expected: String,
    },

    /// A `<name>_min` / `<name>_max` pair with the minimum above the maximum.
    InvertedRange { name: String, min: u64, max: u64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(
                f,
                "Could not read config file '{}': {source}. Using defaults.",
                path.display()
            ),
            Self::TomlParse { path, source } => write!(
                f,
                "Failed to parse config file '{}': {source}. Using defaults. \
                 See config.example.toml for the expected format.",
                path.display()
            ),
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "{field} = {value} is out of range ({expected}). Using default."
            ),
            Self::UnrecognisedValue {
                field,
                value,
                expected,
            } => write!(
                f,
                "{field} = \"{value}\" is not recognised. Valid values: {expected}. Using default."
            ),
            Self::InvertedRange { name, min, max } => write!(
                f,
                "[dashboard] {name}_min ({min}) is greater than {name}_max ({max}). Using defaults."
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::TomlParse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for Collably results.
pub type Result<T> = std::result::Result<T, CollablyError>;
