//! Tests for the field and record normalizers

pub mod record_tests;

use crate::models::{RawRecord, RawValue};

/// Build a raw record from loose string cells, empty strings mapping to
/// missing cells the way the CSV reader produces them
pub fn raw_record(sku: &str, title: &str, price: &str, category: &str, inventory: &str) -> RawRecord {
    RawRecord {
        sku: RawValue::from(sku),
        title: RawValue::from(title),
        price: RawValue::from(price),
        category: RawValue::from(category),
        inventory: RawValue::from(inventory),
    }
}
