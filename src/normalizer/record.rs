//! Record-level normalization pipeline
//!
//! Applies the four field normalizers to a raw record in a fixed order,
//! then derives the validity flag from the normalized results. Records
//! are independent of each other; the pipeline is stateless and reads
//! only the immutable synonym table.

use super::fields::{
    coerce_inventory, coerce_price, normalize_category, normalize_sku, normalize_title,
};
use crate::models::{CleanRecord, RawRecord, Validity};

/// Normalize one raw record into a clean record
///
/// Total over all raw input: malformed cells are coerced, never rejected.
/// The validity flag is evaluated last, over the *normalized* price and
/// SKU rather than the raw cells.
pub fn normalize_record(raw: &RawRecord) -> CleanRecord {
    let sku = normalize_sku(&raw.sku);
    let title = normalize_title(&raw.title);
    let category = normalize_category(&raw.category);
    let price = coerce_price(&raw.price);
    let inventory = coerce_inventory(&raw.inventory);
    let is_valid = validity(price, &sku);

    CleanRecord {
        sku,
        title,
        price,
        category,
        inventory,
        is_valid,
    }
}

/// Validity predicate over a normalized record's price and SKU
///
/// `Yes` iff the price is strictly positive and the SKU is non-empty.
pub fn validity(price: f64, sku: &str) -> Validity {
    Validity::from(price > 0.0 && !sku.is_empty())
}
