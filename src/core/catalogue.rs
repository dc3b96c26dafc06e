// Collably - core/catalogue.rs
//
// Creator catalogue parsing and validation, plus the built-in demo set.
// Core layer: accepts TOML/JSON strings, never touches the filesystem.
// File reading is handled by app::catalogue_mgr which feeds content here.

use crate::core::model::{Category, CreatorRecord, FollowerCount, Platform};
use crate::util::constants;
use crate::util::error::CatalogueError;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::{Path, PathBuf};

/// Anything that can hand the dashboard a set of creator records.
///
/// The built-in demo catalogue and on-disk catalogue files both implement
/// this; a networked directory would slot in the same way.
pub trait CreatorSource {
    fn fetch_creators(&self) -> Result<Vec<CreatorRecord>, CatalogueError>;
}

// =============================================================================
// Serialized structures (raw input)
// =============================================================================

/// Raw catalogue as deserialized from TOML (`[[creator]]` tables) or JSON
/// (`{"creators": [...]}`).
#[derive(Debug, Deserialize)]
pub struct CatalogueDefinition {
    #[serde(rename = "creator", alias = "creators", default)]
    pub creators: Vec<CreatorDefinition>,
}

/// Raw creator entry. Category and platform names are kept as strings here
/// so unknown values produce a `CatalogueError` naming the creator rather
/// than an anonymous deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CreatorDefinition {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub descriptor: String,
    pub category: String,
    #[serde(default)]
    pub followers: BTreeMap<String, String>,
    #[serde(default)]
    pub platforms: Vec<String>,
    pub starting_price: u64,
    pub audience_match: u32,
    #[serde(default)]
    pub verified: bool,
    pub rating: f64,
}

// =============================================================================
// Parsing and validation
// =============================================================================

/// Parse a TOML catalogue and validate every record.
///
/// `source_path` is used for error messages only (not for I/O).
pub fn parse_catalogue_toml(
    content: &str,
    source_path: &Path,
) -> Result<Vec<CreatorRecord>, CatalogueError> {
    let def: CatalogueDefinition =
        toml::from_str(content).map_err(|e| CatalogueError::TomlParse {
            path: source_path.to_path_buf(),
            source: e,
        })?;
    validate_records(def.creators)
}

/// Parse a JSON catalogue and validate every record.
///
/// Accepts either `{"creators": [...]}` or a bare top-level array.
pub fn parse_catalogue_json(
    content: &str,
    source_path: &Path,
) -> Result<Vec<CreatorRecord>, CatalogueError> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum JsonShape {
        Wrapped(CatalogueDefinition),
        Bare(Vec<CreatorDefinition>),
    }

    let shape: JsonShape =
        serde_json::from_str(content).map_err(|e| CatalogueError::JsonParse {
            path: source_path.to_path_buf(),
            source: e,
        })?;
    let creators = match shape {
        JsonShape::Wrapped(def) => def.creators,
        JsonShape::Bare(list) => list,
    };
    validate_records(creators)
}

/// Convert raw definitions into records, enforcing the data-model
/// invariants: closed category/platform sets, rating in 0-5, audience match
/// in 0-100, follower platforms listed in `platforms`, unique ids.
///
/// Fails on the first violation, in catalogue order.
pub fn validate_records(
    defs: Vec<CreatorDefinition>,
) -> Result<Vec<CreatorRecord>, CatalogueError> {
    if defs.len() > constants::MAX_CATALOGUE_RECORDS {
        return Err(CatalogueError::TooManyRecords {
            count: defs.len(),
            max: constants::MAX_CATALOGUE_RECORDS,
        });
    }

    let mut seen_ids = HashSet::with_capacity(defs.len());
    let mut records = Vec::with_capacity(defs.len());

    for def in defs {
        if !seen_ids.insert(def.id) {
            return Err(CatalogueError::DuplicateId { id: def.id });
        }
        records.push(validate_record(def)?);
    }

    Ok(records)
}

fn validate_record(def: CreatorDefinition) -> Result<CreatorRecord, CatalogueError> {
    let id = def.id;

    let category: Category =
        def.category
            .parse()
            .map_err(|_| CatalogueError::UnknownCategory {
                id,
                value: def.category.clone(),
            })?;

    let parse_platform = |name: &str| -> Result<Platform, CatalogueError> {
        name.parse().map_err(|_| CatalogueError::UnknownPlatform {
            id,
            value: name.to_string(),
        })
    };

    let platforms = def
        .platforms
        .iter()
        .map(|name| parse_platform(name))
        .collect::<Result<BTreeSet<Platform>, _>>()?;

    let mut platform_followers = BTreeMap::new();
    for (name, count) in &def.followers {
        let platform = parse_platform(name)?;
        if !platforms.contains(&platform) {
            return Err(CatalogueError::UnlistedPlatform {
                id,
                platform: platform.label().to_string(),
            });
        }
        platform_followers.insert(platform, FollowerCount::new(count.as_str()));
    }

    if !def.rating.is_finite() || !(0.0..=constants::MAX_RATING).contains(&def.rating) {
        return Err(CatalogueError::InvalidRating {
            id,
            rating: def.rating,
        });
    }

    let audience_match = u8::try_from(def.audience_match)
        .ok()
        .filter(|v| *v <= constants::MAX_AUDIENCE_MATCH)
        .ok_or(CatalogueError::InvalidAudienceMatch {
            id,
            value: def.audience_match,
        })?;

    Ok(CreatorRecord {
        id,
        name: def.name,
        descriptor: def.descriptor,
        category,
        platform_followers,
        platforms,
        starting_price: def.starting_price,
        audience_match,
        verified: def.verified,
        rating: def.rating,
    })
}

// =============================================================================
// Built-in catalogue (embedded at compile time)
// =============================================================================

/// Embedded TOML for the demo creators shown on a fresh dashboard.
const BUILTIN_CATALOGUE: &str = include_str!("../../catalogue/demo_creators.toml");

/// The demo creator set compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalogue;

impl CreatorSource for BuiltinCatalogue {
    fn fetch_creators(&self) -> Result<Vec<CreatorRecord>, CatalogueError> {
        parse_catalogue_toml(
            BUILTIN_CATALOGUE,
            &PathBuf::from("<builtin>/demo_creators.toml"),
        )
    }
}

/// Load the built-in demo catalogue.
///
/// A failure here is a bug in the embedded data; it is logged and an empty
/// catalogue returned so the dashboard still starts.
pub fn load_builtin_catalogue() -> Vec<CreatorRecord> {
    match BuiltinCatalogue.fetch_creators() {
        Ok(records) => {
            tracing::debug!(creators = records.len(), "Loaded built-in catalogue");
            records
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to load built-in catalogue");
            Vec::new()
        }
    }
}
