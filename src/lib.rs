//! Catalog Cleaner Library
//!
//! A Rust library for normalizing raw e-commerce product catalog CSV files
//! into cleaned, validity-flagged catalogs.
//!
//! This library provides tools for:
//! - Parsing raw catalog CSV files with strict header validation
//! - Canonicalizing SKU, title, and category fields per record
//! - Coercing loosely-typed price and inventory cells to numbers
//! - Flagging each record's downstream usability (`is_valid`)
//! - Writing the cleaned catalog atomically (no partial output files)

pub mod constants;
pub mod models;

pub mod normalizer {
    pub mod fields;
    pub mod record;

    #[cfg(test)]
    pub mod tests;

    pub use fields::{
        coerce_inventory, coerce_price, normalize_category, normalize_sku, normalize_title,
    };
    pub use record::normalize_record;
}

pub mod processor;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use models::{CleanRecord, RawRecord, RawValue, Validity};
pub use processor::{CatalogProcessor, RunStats};

/// Result type alias for catalog cleaning operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for catalog cleaning operations
///
/// Malformed field *values* are never errors (they are coerced per the
/// normalization rules); only structural problems with the input file,
/// its header, or the output path are fatal.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Catalog file structure error (wrong or missing header)
    #[error("Catalog format error in file '{file}': {message}")]
    CatalogFormat { file: String, message: String },

    /// Input file not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Output file could not be written
    #[error("Output write error for '{path}': {message}")]
    OutputWrite { path: String, message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a catalog format error
    pub fn catalog_format(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CatalogFormat {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an output write error
    pub fn output_write(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::OutputWrite {
            path: path.into(),
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
