// Collably - core/export.rs
//
// CSV and JSON export of the filtered creator view.
// Core layer: writes to any Write trait object.

use crate::core::format::{format_price, format_reach};
use crate::core::model::CreatorRecord;
use crate::util::error::ExportError;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Output format, chosen from the export path's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// `.csv` or `.json` (case-insensitive); anything else is rejected.
    pub fn from_path(path: &Path) -> Result<Self, ExportError> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            _ => Err(ExportError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// One exported creator: the record plus the derived values a spreadsheet
/// user would otherwise have to recompute.
#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    #[serde(flatten)]
    record: &'a CreatorRecord,
    handle: String,
    max_reach: f64,
    price_label: String,
}

/// Fail with `TooManyRows` when `count` exceeds the export cap.
pub fn check_row_limit(count: usize, max_rows: usize) -> Result<(), ExportError> {
    if count > max_rows {
        return Err(ExportError::TooManyRows {
            count,
            max: max_rows,
        });
    }
    Ok(())
}

/// Export creators to CSV.
///
/// Writes: id, name, handle, category, max_reach, reach_label,
/// starting_price, price_label, audience_match, rating, verified, platforms
pub fn export_csv<W: Write>(
    creators: &[&CreatorRecord],
    writer: W,
    export_path: &Path,
    max_rows: usize,
) -> Result<usize, ExportError> {
    check_row_limit(creators.len(), max_rows)?;

    let csv_err = |e| ExportError::Csv {
        path: export_path.to_path_buf(),
        source: e,
    };

    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "id",
            "name",
            "handle",
            "category",
            "max_reach",
            "reach_label",
            "starting_price",
            "price_label",
            "audience_match",
            "rating",
            "verified",
            "platforms",
        ])
        .map_err(csv_err)?;

    let mut count = 0;
    for creator in creators {
        let reach = creator.max_reach();
        let platforms: Vec<&str> = creator.platforms.iter().map(|p| p.label()).collect();
        let id = creator.id.to_string();
        let handle = creator.handle();
        let reach_raw = format!("{reach:.0}");
        let reach_label = format_reach(reach);
        let price = creator.starting_price.to_string();
        let price_label = format_price(creator.starting_price);
        let audience = creator.audience_match.to_string();
        let rating = creator.rating.to_string();
        let platforms = platforms.join(";");

        let row: [&str; 12] = [
            &id,
            &creator.name,
            &handle,
            creator.category.label(),
            &reach_raw,
            &reach_label,
            &price,
            &price_label,
            &audience,
            &rating,
            if creator.verified { "true" } else { "false" },
            &platforms,
        ];
        csv_writer.write_record(row).map_err(csv_err)?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(count)
}

/// Export creators to JSON (array of objects).
pub fn export_json<W: Write>(
    creators: &[&CreatorRecord],
    writer: W,
    export_path: &Path,
    max_rows: usize,
) -> Result<usize, ExportError> {
    check_row_limit(creators.len(), max_rows)?;

    let rows: Vec<ExportRow<'_>> = creators
        .iter()
        .map(|&record| ExportRow {
            record,
            handle: record.handle(),
            max_reach: record.max_reach(),
            price_label: format_price(record.starting_price),
        })
        .collect();

    serde_json::to_writer_pretty(writer, &rows).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(rows.len())
}
