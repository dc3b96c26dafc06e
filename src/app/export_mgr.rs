// Collably - app/export_mgr.rs
//
// Writes an export file for the current dashboard view. The target is only
// replaced once the whole export has been written to a sibling temp file.

use crate::core::export::{self, ExportFormat};
use crate::core::model::CreatorRecord;
use crate::util::error::ExportError;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Export `creators` to `path`, choosing CSV or JSON from the extension.
///
/// The extension and row cap are checked before anything touches the disk.
/// Output goes to `<path>.tmp` first and is renamed over `path` on success,
/// so a failed export leaves any previous file at `path` intact.
pub fn export_to_file(
    creators: &[&CreatorRecord],
    path: &Path,
    max_rows: usize,
) -> Result<usize, ExportError> {
    let format = ExportFormat::from_path(path)?;
    export::check_row_limit(creators.len(), max_rows)?;

    let tmp = temp_path(path);
    let count = match write_export(creators, format, &tmp, path, max_rows) {
        Ok(count) => count,
        Err(e) => {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }
    };

    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        ExportError::Io {
            path: path.to_path_buf(),
            source: e,
        }
    })?;

    tracing::info!(path = %path.display(), count, "Export complete");
    Ok(count)
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

fn write_export(
    creators: &[&CreatorRecord],
    format: ExportFormat,
    tmp: &Path,
    path: &Path,
    max_rows: usize,
) -> Result<usize, ExportError> {
    let file = File::create(tmp).map_err(|e| ExportError::Io {
        path: tmp.to_path_buf(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    let count = match format {
        ExportFormat::Csv => export::export_csv(creators, &mut writer, path, max_rows)?,
        ExportFormat::Json => export::export_json(creators, &mut writer, path, max_rows)?,
    };

    writer.flush().map_err(|e| ExportError::Io {
        path: tmp.to_path_buf(),
        source: e,
    })?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalogue::load_builtin_catalogue;

    const PREVIOUS: &str = "previous export contents\n";

    #[test]
    fn test_row_cap_leaves_existing_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shortlist.csv");
        fs::write(&path, PREVIOUS).unwrap();

        let records = load_builtin_catalogue();
        let creators: Vec<&CreatorRecord> = records.iter().collect();
        let err = export_to_file(&creators, &path, 1).unwrap_err();

        assert!(matches!(err, ExportError::TooManyRows { max: 1, .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), PREVIOUS);
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn test_successful_export_replaces_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shortlist.json");
        fs::write(&path, PREVIOUS).unwrap();

        let records = load_builtin_catalogue();
        let creators: Vec<&CreatorRecord> = records.iter().take(3).collect();
        assert_eq!(export_to_file(&creators, &path, 10).unwrap(), 3);

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(3));
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn test_unsupported_extension_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shortlist.xlsx");

        let records = load_builtin_catalogue();
        let creators: Vec<&CreatorRecord> = records.iter().collect();
        let err = export_to_file(&creators, &path, 100).unwrap_err();

        assert!(matches!(err, ExportError::UnsupportedFormat { .. }));
        assert!(!path.exists());
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn test_missing_directory_reports_temp_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("shortlist.csv");

        let records = load_builtin_catalogue();
        let creators: Vec<&CreatorRecord> = records.iter().collect();
        let err = export_to_file(&creators, &path, 100).unwrap_err();

        assert!(matches!(err, ExportError::Io { ref path, .. } if path.ends_with("shortlist.csv.tmp")));
    }
}
