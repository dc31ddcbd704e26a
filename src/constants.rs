//! Application constants for the catalog cleaner
//!
//! This module contains the catalog column layout, the category synonym
//! table, and the validity flag literals used throughout the application.

// =============================================================================
// Catalog Column Layout
// =============================================================================

/// Expected header columns of a raw catalog file, in order
pub const INPUT_COLUMNS: &[&str] = &["sku", "title", "price", "category", "inventory"];

/// Header columns of a cleaned catalog file, in order
pub const OUTPUT_COLUMNS: &[&str] = &[
    "sku",
    "title",
    "price",
    "category",
    "inventory",
    "is_valid",
];

// =============================================================================
// Normalization Rules
// =============================================================================

/// Number of trailing characters segmented off by the SKU normalizer
///
/// A cleaned SKU longer than this gets a single hyphen inserted before its
/// final `SKU_SUFFIX_LEN` characters; shorter codes stay unsegmented.
pub const SKU_SUFFIX_LEN: usize = 3;

/// Category synonym table collapsing name variants to a canonical form
///
/// Fixed mapping, not configurable at runtime. Lookups happen after the
/// raw category has been trimmed and title-cased; categories absent from
/// the table pass through unchanged.
pub const CATEGORY_SYNONYMS: &[(&str, &str)] = &[
    ("Tires", "Tires"),
    ("Pedal", "Pedals"),
    ("Pedals", "Pedals"),
    ("Accessories", "Accessories"),
    ("Accessory", "Accessories"),
];

// =============================================================================
// Validity Flag Literals
// =============================================================================

/// Validity flag values as rendered in the cleaned catalog
pub mod validity {
    /// Record is usable downstream (positive price, non-empty SKU)
    pub const YES: &str = "YES";

    /// Record failed the validity predicate
    pub const NO: &str = "NO";
}
