//! File-level catalog processing
//!
//! This module orchestrates one cleaning run over a catalog file:
//! read and validate the raw CSV, normalize every row in input order,
//! and write the cleaned CSV atomically.
//!
//! # Architecture
//!
//! - [`reader`] - Raw catalog reading with strict header validation
//! - [`writer`] - Atomic cleaned-catalog writing with canonical rendering
//!
//! The run either produces the complete output file or fails with no
//! output file left behind; there is no partial-success mode.

pub mod reader;
pub mod writer;

#[cfg(test)]
pub mod tests;

pub use reader::read_catalog;
pub use writer::write_catalog;

use crate::models::Validity;
use crate::normalizer::record::normalize_record;
use crate::Result;
use indicatif::ProgressBar;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Statistics for one cleaning run
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Number of data rows read from the raw catalog
    pub rows_read: usize,
    /// Number of rows written to the cleaned catalog
    pub rows_written: usize,
    /// Rows flagged `is_valid = YES`
    pub valid_records: usize,
    /// Rows flagged `is_valid = NO`
    pub invalid_records: usize,
    /// Total processing time
    pub processing_time: Duration,
}

impl RunStats {
    /// One-line human-readable summary of the run
    pub fn summary(&self) -> String {
        format!(
            "{} rows cleaned ({} valid, {} invalid) in {:.2?}",
            self.rows_written, self.valid_records, self.invalid_records, self.processing_time
        )
    }
}

/// Single-pass catalog cleaning processor
///
/// Holds the input/output file paths and runs the whole pipeline:
/// every row is normalized independently, in input order, against the
/// read-only synonym table.
#[derive(Debug, Clone)]
pub struct CatalogProcessor {
    input_path: PathBuf,
    output_path: PathBuf,
}

impl CatalogProcessor {
    /// Create a processor for the given input and output paths
    pub fn new(input_path: PathBuf, output_path: PathBuf) -> Self {
        Self {
            input_path,
            output_path,
        }
    }

    /// Run the cleaning pass over the whole catalog
    ///
    /// Reads all rows, normalizes them in input order, and writes the
    /// cleaned catalog. Fatal errors (missing input, bad header,
    /// unwritable output) abort the run with no output file produced.
    pub fn process(&self, progress: Option<&ProgressBar>) -> Result<RunStats> {
        let start_time = Instant::now();

        info!("Reading raw catalog from {}", self.input_path.display());
        let raw_records = read_catalog(&self.input_path)?;
        debug!("Read {} raw records", raw_records.len());

        if let Some(pb) = progress {
            pb.set_length(raw_records.len() as u64);
        }

        let mut stats = RunStats {
            rows_read: raw_records.len(),
            ..Default::default()
        };

        let mut clean_records = Vec::with_capacity(raw_records.len());
        for raw in &raw_records {
            let clean = normalize_record(raw);
            match clean.is_valid {
                Validity::Yes => stats.valid_records += 1,
                Validity::No => stats.invalid_records += 1,
            }
            clean_records.push(clean);
            if let Some(pb) = progress {
                pb.inc(1);
            }
        }

        info!(
            "Writing cleaned catalog to {}",
            self.output_path.display()
        );
        write_catalog(&self.output_path, &clean_records)?;
        stats.rows_written = clean_records.len();
        stats.processing_time = start_time.elapsed();

        info!("{}", stats.summary());
        Ok(stats)
    }
}
