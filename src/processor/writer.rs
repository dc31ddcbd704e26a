//! Cleaned catalog writing
//!
//! Renders clean records into the output CSV layout and writes the file
//! atomically: rows go to a tempfile in the output directory, which is
//! persisted onto the final path only after a successful flush. A failed
//! run therefore never leaves a partial output file behind.

use crate::constants::OUTPUT_COLUMNS;
use crate::models::CleanRecord;
use crate::{Error, Result};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Write the cleaned catalog to the given path
pub fn write_catalog(path: &Path, records: &[CleanRecord]) -> Result<()> {
    let out_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::io("failed to create output directory", e))?;
            parent
        }
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(out_dir)
        .map_err(|e| Error::io("failed to create temporary output file", e))?;

    {
        let mut writer = csv::Writer::from_writer(tmp.as_file_mut());
        writer.write_record(OUTPUT_COLUMNS)?;
        for record in records {
            writer.write_record(&render_record(record))?;
        }
        writer
            .flush()
            .map_err(|e| Error::io("failed to flush cleaned catalog", e))?;
    }

    tmp.persist(path)
        .map_err(|e| Error::output_write(path.display().to_string(), e.to_string()))?;

    debug!("Wrote {} rows to {}", records.len(), path.display());
    Ok(())
}

/// Render one clean record into its six output cells
fn render_record(record: &CleanRecord) -> [String; 6] {
    [
        record.sku.clone(),
        record.title.clone(),
        format_price(record.price),
        record.category.clone(),
        format_inventory(record.inventory),
        record.is_valid.as_str().to_string(),
    ]
}

/// Render a price in standard decimal text
///
/// Integer-valued prices keep an explicit decimal (`45` renders as
/// `45.0`); everything else renders in shortest decimal form.
pub(crate) fn format_price(price: f64) -> String {
    if price.fract() == 0.0 && price.is_finite() {
        format!("{:.1}", price)
    } else {
        price.to_string()
    }
}

/// Render an inventory count in standard decimal text
///
/// Integer-valued counts render without a decimal point (`10`, `0`);
/// fractional survivors render in shortest decimal form.
pub(crate) fn format_inventory(inventory: f64) -> String {
    if inventory.fract() == 0.0 && inventory.is_finite() {
        format!("{}", inventory as i64)
    } else {
        inventory.to_string()
    }
}
