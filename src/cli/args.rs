//! Command-line argument definitions for the catalog cleaner
//!
//! This module defines the CLI surface using the clap derive API. The
//! tool takes exactly one input catalog and one output location; the
//! normalization rules themselves are fixed and not configurable.

use crate::{Error, Result};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the catalog cleaner
///
/// Normalizes a raw e-commerce product catalog CSV into a cleaned CSV
/// with canonicalized fields and a per-record validity flag.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "catalog-cleaner",
    version,
    about = "Normalize a raw product catalog CSV into a cleaned, validity-flagged catalog",
    long_about = "Reads a raw product catalog CSV with inconsistent formatting (whitespace, \
                  casing, separators, missing or invalid values) and produces a cleaned CSV \
                  with canonical SKUs, title-cased names, collapsed category synonyms, coerced \
                  numeric fields, and a derived is_valid flag per record."
)]
pub struct Args {
    /// Path to the raw catalog CSV file
    ///
    /// Must have the header `sku,title,price,category,inventory`. Data
    /// rows may contain whitespace, mixed case, empty values, or
    /// non-numeric text in numeric columns.
    #[arg(value_name = "INPUT")]
    pub input_path: PathBuf,

    /// Output path for the cleaned catalog CSV
    ///
    /// Defaults to `clean_products.csv` next to the input file. The file
    /// is written atomically: a failed run leaves no partial output.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output_path: Option<PathBuf>,

    /// Enable verbose (debug-level) logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress progress output and reduce logging to warnings
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable the row progress bar without changing log levels
    #[arg(long = "no-progress")]
    pub no_progress: bool,
}

impl Args {
    /// Resolve the output path, defaulting next to the input file
    pub fn resolved_output_path(&self) -> PathBuf {
        match &self.output_path {
            Some(path) => path.clone(),
            None => self
                .input_path
                .parent()
                .unwrap_or_else(|| std::path::Path::new("."))
                .join("clean_products.csv"),
        }
    }

    /// Validate argument combinations before the run starts
    pub fn validate(&self) -> Result<()> {
        if self.resolved_output_path() == self.input_path {
            return Err(Error::output_write(
                self.input_path.display().to_string(),
                "output path must differ from the input path",
            ));
        }
        Ok(())
    }

    /// Log level derived from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    /// Whether to show the row progress bar
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.no_progress
    }
}
