// Collably - app/catalogue_mgr.rs
//
// Resolves which creator catalogue a session uses: a user catalogue file
// (TOML or JSON) when one is configured, otherwise the built-in demo set.

use crate::core::catalogue::{self, BuiltinCatalogue, CreatorSource};
use crate::core::model::CreatorRecord;
use crate::util::constants;
use crate::util::error::CatalogueError;
use std::path::{Path, PathBuf};

/// A catalogue stored on disk. Format is chosen by extension.
#[derive(Debug, Clone)]
pub struct FileCatalogue {
    path: PathBuf,
}

impl FileCatalogue {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CreatorSource for FileCatalogue {
    fn fetch_creators(&self) -> Result<Vec<CreatorRecord>, CatalogueError> {
        let path = &self.path;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let is_json = match extension.as_deref() {
            Some("toml") => false,
            Some("json") => true,
            _ => {
                return Err(CatalogueError::UnsupportedFormat {
                    path: path.clone(),
                })
            }
        };

        let metadata = std::fs::metadata(path).map_err(|e| CatalogueError::Io {
            path: path.clone(),
            source: e,
        })?;
        if metadata.len() > constants::MAX_CATALOGUE_FILE_SIZE {
            return Err(CatalogueError::FileTooLarge {
                path: path.clone(),
                size: metadata.len(),
                max_size: constants::MAX_CATALOGUE_FILE_SIZE,
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CatalogueError::Io {
            path: path.clone(),
            source: e,
        })?;

        if is_json {
            catalogue::parse_catalogue_json(&content, path)
        } else {
            catalogue::parse_catalogue_toml(&content, path)
        }
    }
}

/// Load the catalogue for a session.
///
/// With `user_path` set, that file is the only source and any problem with
/// it is returned to the caller; there is no fallback to the demo set.
/// Without it, the built-in demo catalogue is used.
pub fn load_catalogue(user_path: Option<&Path>) -> Result<Vec<CreatorRecord>, CatalogueError> {
    let records = match user_path {
        Some(path) => {
            let records = FileCatalogue::new(path).fetch_creators()?;
            tracing::info!(
                path = %path.display(),
                creators = records.len(),
                "Loaded user catalogue"
            );
            records
        }
        None => {
            let records = BuiltinCatalogue.fetch_creators()?;
            tracing::info!(creators = records.len(), "Loaded built-in catalogue");
            records
        }
    };

    if records.is_empty() {
        tracing::warn!("Catalogue contains no creators");
    }

    Ok(records)
}
