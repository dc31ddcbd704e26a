//! Tests for file-level catalog processing

pub mod writer_tests;

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write a raw catalog file with the standard header into a temp dir
pub fn write_raw_catalog(dir: &TempDir, rows: &[&str]) -> PathBuf {
    let path = dir.path().join("raw_products.csv");
    let mut contents = String::from("sku,title,price,category,inventory\n");
    for row in rows {
        contents.push_str(row);
        contents.push('\n');
    }
    fs::write(&path, contents).expect("failed to write test catalog");
    path
}

/// Read an output catalog back as a list of lines
pub fn read_lines(path: &std::path::Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("failed to read output catalog")
        .lines()
        .map(str::to_string)
        .collect()
}
