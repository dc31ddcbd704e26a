//! Tests for the record pipeline and validity predicate

use super::raw_record;
use crate::models::Validity;
use crate::normalizer::record::{normalize_record, validity};

#[test]
fn test_normalize_record_full_row() {
    let raw = raw_record(" ab-100 ", "mountain bike tire", "29.99", "tires", "10");
    let clean = normalize_record(&raw);

    assert_eq!(clean.sku, "AB-100");
    assert_eq!(clean.title, "Mountain Bike Tire");
    assert_eq!(clean.price, 29.99);
    assert_eq!(clean.category, "Tires");
    assert_eq!(clean.inventory, 10.0);
    assert_eq!(clean.is_valid, Validity::Yes);
}

#[test]
fn test_normalize_record_coerces_bad_numerics() {
    let raw = raw_record("EF300", "Helmet  LARGE", "", "Accessories", "-3");
    let clean = normalize_record(&raw);

    assert_eq!(clean.sku, "EF-300");
    assert_eq!(clean.title, "Helmet Large");
    assert_eq!(clean.price, 0.0);
    assert_eq!(clean.category, "Accessories");
    assert_eq!(clean.inventory, 0.0);
    // Price coerced to zero forces the record invalid.
    assert_eq!(clean.is_valid, Validity::No);
}

#[test]
fn test_normalize_record_empty_sku_forces_invalid() {
    let raw = raw_record("", "water bottle", "12.5", "accessory", "20");
    let clean = normalize_record(&raw);

    assert_eq!(clean.sku, "");
    assert_eq!(clean.title, "Water Bottle");
    assert_eq!(clean.price, 12.5);
    assert_eq!(clean.category, "Accessories");
    assert_eq!(clean.inventory, 20.0);
    assert_eq!(clean.is_valid, Validity::No);
}

#[test]
fn test_normalize_record_is_deterministic() {
    let raw = raw_record("cd200", "Road Bike Pedals", "45", "Pedal", "5");
    assert_eq!(normalize_record(&raw), normalize_record(&raw));
}

#[test]
fn test_validity_truth_table() {
    assert_eq!(validity(1.0, "AB-100"), Validity::Yes);
    assert_eq!(validity(0.01, "X"), Validity::Yes);

    // Strictly positive price required.
    assert_eq!(validity(0.0, "AB-100"), Validity::No);
    assert_eq!(validity(-5.0, "AB-100"), Validity::No);

    // Non-empty normalized SKU required.
    assert_eq!(validity(10.0, ""), Validity::No);
    assert_eq!(validity(0.0, ""), Validity::No);
}
