//! Data models for catalog cleaning
//!
//! This module contains the core data structures for representing raw and
//! cleaned product catalog records, including the loosely-typed raw cell
//! representation and the derived validity flag.

use crate::constants::validity;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Raw Cell Representation
// =============================================================================

/// A raw catalog cell of unknown type
///
/// Raw catalog data is loosely typed: a cell may hold text, a number, or
/// nothing at all. Rather than relying on implicit conversions, the
/// normalizers consume this explicit tagged union through total coercion
/// functions that always produce a value and never fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawValue {
    /// A non-empty textual cell (may still be blank-padded or non-numeric)
    Text(String),
    /// A numeric cell, e.g. from a programmatic source
    Number(f64),
    /// An absent or empty cell
    Missing,
}

impl RawValue {
    /// Coerce the cell to text
    ///
    /// Total: missing cells become the empty string, numeric cells render
    /// in standard decimal form (integer-valued numbers without a decimal
    /// point). Never fails.
    pub fn coerce_text(&self) -> String {
        match self {
            RawValue::Text(s) => s.clone(),
            RawValue::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            RawValue::Missing => String::new(),
        }
    }

    /// Coerce the cell to a number, if it parses as one
    ///
    /// Missing cells, non-numeric text, and NaN all coerce to `None`;
    /// callers substitute their own fallback. Never fails.
    pub fn coerce_number(&self) -> Option<f64> {
        match self {
            RawValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| !n.is_nan()),
            RawValue::Number(n) => (!n.is_nan()).then_some(*n),
            RawValue::Missing => None,
        }
    }

    /// True if the cell is absent or empty
    pub fn is_missing(&self) -> bool {
        matches!(self, RawValue::Missing)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            RawValue::Missing
        } else {
            RawValue::Text(s.to_string())
        }
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        if s.is_empty() {
            RawValue::Missing
        } else {
            RawValue::Text(s)
        }
    }
}

// =============================================================================
// Catalog Records
// =============================================================================

/// One input row of the raw catalog, before normalization
///
/// No invariants hold on the raw side: any cell may be empty, padded,
/// mixed-case, or non-numeric where a number is expected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Stock keeping unit code, arbitrary casing/spacing/hyphenation
    pub sku: RawValue,

    /// Product title, arbitrary casing and internal whitespace
    pub title: RawValue,

    /// Unit price, possibly empty or non-numeric
    pub price: RawValue,

    /// Product category, arbitrary casing/spacing
    pub category: RawValue,

    /// Stock count, possibly negative, empty, or non-numeric
    pub inventory: RawValue,
}

/// One output row of the cleaned catalog
///
/// Derived once, deterministically, from exactly one [`RawRecord`];
/// never mutated after creation. Field invariants are established by the
/// normalizers in [`crate::normalizer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanRecord {
    /// Canonical SKU: uppercased, `<head>-<tail3>` segmented, or empty
    pub sku: String,

    /// Title-cased, whitespace-collapsed product title
    pub title: String,

    /// Parsed unit price; unparsable input coerced to 0
    pub price: f64,

    /// Canonical category after synonym collapsing
    pub category: String,

    /// Non-negative stock count; unparsable coerced to 0, negatives clamped
    pub inventory: f64,

    /// Whether the record is usable downstream
    pub is_valid: Validity,
}

// =============================================================================
// Validity Flag
// =============================================================================

/// Derived per-record validity flag
///
/// `Yes` iff the normalized price is strictly positive and the normalized
/// SKU is non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Validity {
    Yes,
    No,
}

impl Validity {
    /// The flag as rendered in the cleaned catalog
    pub fn as_str(&self) -> &'static str {
        match self {
            Validity::Yes => validity::YES,
            Validity::No => validity::NO,
        }
    }
}

impl From<bool> for Validity {
    fn from(valid: bool) -> Self {
        if valid { Validity::Yes } else { Validity::No }
    }
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
