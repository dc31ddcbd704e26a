//! Field-level normalizers for raw catalog cells
//!
//! Each normalizer is a total, pure function over a [`RawValue`]: malformed
//! input is coerced to a best-effort cleaned value rather than rejected.
//! The normalizers are independent of each other and of any I/O.

use crate::constants::{CATEGORY_SYNONYMS, SKU_SUFFIX_LEN};
use crate::models::RawValue;

/// Normalize a raw SKU cell to its canonical segmented form
///
/// The cell is coerced to text, trimmed, uppercased, and stripped of all
/// internal spaces and hyphens. Cleaned codes longer than three characters
/// get a single hyphen inserted before the final three (`AB100` ->
/// `AB-100`); shorter codes are returned unsegmented. Empty or absent
/// input yields the empty string.
pub fn normalize_sku(raw: &RawValue) -> String {
    let cleaned: String = raw
        .coerce_text()
        .trim()
        .to_uppercase()
        .chars()
        .filter(|c| *c != ' ' && *c != '-')
        .collect();

    let chars: Vec<char> = cleaned.chars().collect();
    if chars.len() > SKU_SUFFIX_LEN {
        let split = chars.len() - SKU_SUFFIX_LEN;
        let head: String = chars[..split].iter().collect();
        let tail: String = chars[split..].iter().collect();
        format!("{}-{}", head, tail)
    } else {
        cleaned
    }
}

/// Normalize a raw title cell
///
/// Coerces to text, collapses runs of internal whitespace to single
/// spaces, discards leading/trailing whitespace, and title-cases the
/// result. Empty input yields the empty string.
pub fn normalize_title(raw: &RawValue) -> String {
    let cased = title_case(&raw.coerce_text());
    cased.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize a raw category cell to its canonical form
///
/// Coerces to text, trims surrounding whitespace, title-cases, then
/// collapses known synonyms (`Pedal` -> `Pedals`, `Accessory` ->
/// `Accessories`) via the fixed table in [`crate::constants`].
/// Unrecognized categories pass through trimmed and title-cased.
pub fn normalize_category(raw: &RawValue) -> String {
    let canonical = title_case(raw.coerce_text().trim());
    CATEGORY_SYNONYMS
        .iter()
        .find(|(variant, _)| *variant == canonical)
        .map(|(_, mapped)| (*mapped).to_string())
        .unwrap_or(canonical)
}

/// Coerce a raw price cell to a number
///
/// Unparsable or missing input substitutes 0. A parseable negative price
/// is retained as-is; the validity predicate rejects it downstream.
pub fn coerce_price(raw: &RawValue) -> f64 {
    raw.coerce_number().unwrap_or(0.0)
}

/// Coerce a raw inventory cell to a non-negative number
///
/// Unparsable or missing input substitutes 0; negative values clamp to 0.
pub fn coerce_inventory(raw: &RawValue) -> f64 {
    raw.coerce_number().unwrap_or(0.0).max(0.0)
}

/// Title-case a string, not locale-aware
///
/// An alphabetic character at the start of an alphabetic run is
/// uppercased; characters within a run are lowercased. Non-alphabetic
/// characters pass through and start a new run.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_run = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_run {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}
