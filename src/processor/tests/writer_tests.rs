//! Tests for cleaned catalog writing and numeric rendering

use super::read_lines;
use crate::models::{CleanRecord, Validity};
use crate::processor::writer::{format_inventory, format_price, write_catalog};
use tempfile::TempDir;

fn sample_record() -> CleanRecord {
    CleanRecord {
        sku: "AB-100".to_string(),
        title: "Mountain Bike Tire".to_string(),
        price: 29.99,
        category: "Tires".to_string(),
        inventory: 10.0,
        is_valid: Validity::Yes,
    }
}

#[test]
fn test_price_rendering() {
    assert_eq!(format_price(29.99), "29.99");
    assert_eq!(format_price(12.5), "12.5");
    // Integer-valued prices keep an explicit decimal.
    assert_eq!(format_price(45.0), "45.0");
    assert_eq!(format_price(0.0), "0.0");
}

#[test]
fn test_inventory_rendering() {
    assert_eq!(format_inventory(10.0), "10");
    assert_eq!(format_inventory(0.0), "0");
    assert_eq!(format_inventory(2.5), "2.5");
}

#[test]
fn test_write_catalog_layout() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("clean_products.csv");

    write_catalog(&path, &[sample_record()]).unwrap();

    let lines = read_lines(&path);
    assert_eq!(lines[0], "sku,title,price,category,inventory,is_valid");
    assert_eq!(lines[1], "AB-100,Mountain Bike Tire,29.99,Tires,10,YES");
}

#[test]
fn test_write_catalog_empty_is_header_only() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("clean_products.csv");

    write_catalog(&path, &[]).unwrap();

    let lines = read_lines(&path);
    assert_eq!(lines, vec!["sku,title,price,category,inventory,is_valid"]);
}

#[test]
fn test_write_catalog_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("out").join("clean.csv");

    write_catalog(&path, &[sample_record()]).unwrap();
    assert!(path.exists());
}

#[test]
fn test_write_catalog_leaves_no_tempfiles_behind() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("clean_products.csv");

    write_catalog(&path, &[sample_record()]).unwrap();

    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec!["clean_products.csv"]);
}

#[test]
fn test_write_catalog_overwrites_existing_output() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("clean_products.csv");
    std::fs::write(&path, "stale contents\n").unwrap();

    write_catalog(&path, &[sample_record()]).unwrap();

    let lines = read_lines(&path);
    assert_eq!(lines[0], "sku,title,price,category,inventory,is_valid");
    assert_eq!(lines.len(), 2);
}
