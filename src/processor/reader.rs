//! Raw catalog reading
//!
//! Opens a raw catalog CSV, validates its header against the expected
//! column layout, and decodes every data row into a [`RawRecord`] of
//! loosely-typed cells. Field *values* are never rejected here; only
//! structural problems (missing file, wrong header, unparsable CSV)
//! are fatal.

use crate::constants::INPUT_COLUMNS;
use crate::models::{RawRecord, RawValue};
use crate::{Error, Result};
use csv::StringRecord;
use std::path::Path;
use tracing::debug;

/// Read all rows of a raw catalog file, in file order
///
/// Rows shorter than the header are padded with missing cells; surplus
/// trailing cells are ignored. Both tolerances follow the coerce-don't-
/// reject posture of the field normalizers.
pub fn read_catalog(path: &Path) -> Result<Vec<RawRecord>> {
    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }

    let file_name = path.display().to_string();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::None)
        .from_path(path)
        .map_err(|e| Error::csv_parsing(file_name.as_str(), "failed to open catalog", Some(e)))?;

    validate_header(&file_name, reader.headers()?)?;

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|e| {
            Error::csv_parsing(file_name.as_str(), "failed to parse data row", Some(e))
        })?;
        records.push(decode_row(&row));
    }

    debug!("Decoded {} rows from {}", records.len(), file_name);
    Ok(records)
}

/// Validate the raw catalog header against the fixed column layout
fn validate_header(file_name: &str, header: &StringRecord) -> Result<()> {
    let found: Vec<&str> = header.iter().map(str::trim).collect();
    if found != INPUT_COLUMNS {
        return Err(Error::catalog_format(
            file_name,
            format!(
                "unexpected header: expected '{}', found '{}'",
                INPUT_COLUMNS.join(","),
                found.join(",")
            ),
        ));
    }
    Ok(())
}

/// Decode one CSV row into a raw record
///
/// Empty cells become [`RawValue::Missing`]; everything else stays as
/// untrimmed text for the normalizers to clean.
fn decode_row(row: &StringRecord) -> RawRecord {
    let cell = |index: usize| RawValue::from(row.get(index).unwrap_or(""));

    RawRecord {
        sku: cell(0),
        title: cell(1),
        price: cell(2),
        category: cell(3),
        inventory: cell(4),
    }
}
