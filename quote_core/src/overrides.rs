//! # Override Reconciliation
//!
//! Merges user corrections into a computed line list. Overrides are sparse
//! (absence means "use the computed value") and best-effort: a malformed
//! value is silently ignored rather than rejected, so a half-filled form
//! can never break a quote.
//!
//! ## Precedence
//!
//! Per line, in order:
//!
//! 1. No entry for the line's key - the line passes through unchanged.
//! 2. Bare number - replaces the subtotal (quantity untouched).
//! 3. Partial record - resolves quantity, then unit price, then subtotal;
//!    whatever the record does not pin is reconstructed from the computed
//!    line (see [`reconcile`] for the exact rules).
//!
//! Reconciliation is idempotent: applying the same override map twice gives
//! the same result as applying it once.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::lines::LineItem;
//! use quote_core::overrides::{reconcile, OverrideEntry, OverrideMap};
//!
//! let lines = vec![LineItem::new("floor", "Flooring (VINYL)", 12.0, "sqm", 108000.0)];
//! let mut overrides = OverrideMap::new();
//! overrides.insert("floor".to_string(), OverrideEntry::Subtotal(50000.0));
//!
//! let outcome = reconcile(&lines, &overrides);
//! assert_eq!(outcome.lines[0].subtotal, 50000.0);
//! assert_eq!(outcome.lines[0].qty, 12.0); // quantity untouched
//! assert_eq!(outcome.area_total, 50000.0);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::lines::{sum_subtotals, LineItem};

/// One user correction to a computed line.
///
/// Serialized untagged so the persisted form is either a bare number or a
/// partial record, matching the stored quotation format:
///
/// ```json
/// { "floor": 50000, "skirting": { "qty": 6, "unitPrice": 9000 } }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OverrideEntry {
    /// Direct subtotal replacement; quantity is left as computed
    Subtotal(f64),
    /// Partial correction of quantity, unit price and/or subtotal
    Fields(OverrideFields),
}

/// The record form of an override. Any subset of fields may be present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverrideFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<f64>,
}

impl OverrideEntry {
    /// Record override pinning only the quantity
    pub fn qty(qty: f64) -> Self {
        OverrideEntry::Fields(OverrideFields {
            qty: Some(qty),
            ..OverrideFields::default()
        })
    }

    /// Record override pinning only the unit price
    pub fn unit_price(unit_price: f64) -> Self {
        OverrideEntry::Fields(OverrideFields {
            unit_price: Some(unit_price),
            ..OverrideFields::default()
        })
    }
}

/// Sparse override map, keyed by line key.
pub type OverrideMap = BTreeMap<String, OverrideEntry>;

/// Outcome of reconciling computed lines against user overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reconciled {
    pub lines: Vec<LineItem>,
    /// Sum of the (possibly overridden) line subtotals
    pub area_total: f64,
}

/// An override value is taken only when finite and non-negative.
fn usable(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn valid(value: Option<f64>) -> Option<f64> {
    value.filter(|v| usable(*v))
}

/// Recompute effective quantity and subtotal per line under the override
/// precedence rules, and re-sum the total.
///
/// For a record override: the quantity is the override's if usable, else the
/// computed one. The unit price is the override's if usable; failing that it
/// is reconstructed from an overridden subtotal (`subtotal / qty`, 0 for a
/// zero quantity), and failing that from the computed line. The subtotal is
/// the override's if usable, else `qty * unit_price`.
pub fn reconcile(lines: &[LineItem], overrides: &OverrideMap) -> Reconciled {
    let lines: Vec<LineItem> = lines
        .iter()
        .map(|line| apply(line, overrides.get(line.key.as_str())))
        .collect();
    let area_total = sum_subtotals(&lines);
    Reconciled { lines, area_total }
}

fn apply(line: &LineItem, entry: Option<&OverrideEntry>) -> LineItem {
    let mut out = line.clone();
    match entry {
        None => {}
        Some(OverrideEntry::Subtotal(amount)) => {
            if usable(*amount) {
                out.subtotal = *amount;
            }
        }
        Some(OverrideEntry::Fields(fields)) => {
            let qty = valid(fields.qty).unwrap_or(line.qty);
            let unit_price = valid(fields.unit_price).unwrap_or_else(|| {
                match valid(fields.subtotal) {
                    Some(subtotal) if qty > 0.0 => subtotal / qty,
                    Some(_) => 0.0,
                    None => line.implied_unit_price(),
                }
            });
            out.qty = qty;
            out.subtotal = valid(fields.subtotal).unwrap_or(qty * unit_price);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::key;

    fn flooring_lines() -> Vec<LineItem> {
        vec![
            LineItem::new(key::FLOOR, "Flooring (VINYL)", 12.0, "sqm", 108000.0),
            LineItem::new(key::SKIRTING, "Skirting", 5.0, "pcs", 50000.0),
            LineItem::new(key::FLOOR_GUM, "Floor Gum", 1.0, "pcs", 4000.0),
        ]
    }

    #[test]
    fn test_no_overrides_passes_through() {
        let lines = flooring_lines();
        let outcome = reconcile(&lines, &OverrideMap::new());
        assert_eq!(outcome.lines, lines);
        assert_eq!(outcome.area_total, 162000.0);
    }

    #[test]
    fn test_bare_number_replaces_subtotal_only() {
        let lines = flooring_lines();
        let mut overrides = OverrideMap::new();
        overrides.insert(key::FLOOR.to_string(), OverrideEntry::Subtotal(50000.0));

        let outcome = reconcile(&lines, &overrides);
        assert_eq!(outcome.lines[0].subtotal, 50000.0);
        assert_eq!(outcome.lines[0].qty, 12.0);
        // Other lines untouched, total re-summed
        assert_eq!(outcome.lines[1].subtotal, 50000.0);
        assert_eq!(outcome.area_total, 50000.0 + 50000.0 + 4000.0);
    }

    #[test]
    fn test_negative_bare_number_ignored() {
        let lines = flooring_lines();
        let mut overrides = OverrideMap::new();
        overrides.insert(key::FLOOR.to_string(), OverrideEntry::Subtotal(-1.0));
        overrides.insert(key::SKIRTING.to_string(), OverrideEntry::Subtotal(f64::NAN));

        let outcome = reconcile(&lines, &overrides);
        assert_eq!(outcome.lines, lines);
    }

    #[test]
    fn test_qty_override_reprices_from_computed_ratio() {
        let lines = vec![LineItem::new(key::CUSTOM, "Door repair", 3.0, "unit", 4500.0)];
        let mut overrides = OverrideMap::new();
        overrides.insert(key::CUSTOM.to_string(), OverrideEntry::qty(5.0));

        let outcome = reconcile(&lines, &overrides);
        // Unit price reconstructed as 4500/3 = 1500, so 5 * 1500
        assert_eq!(outcome.lines[0].qty, 5.0);
        assert_eq!(outcome.lines[0].subtotal, 7500.0);
    }

    #[test]
    fn test_unit_price_override() {
        let lines = flooring_lines();
        let mut overrides = OverrideMap::new();
        overrides.insert(key::SKIRTING.to_string(), OverrideEntry::unit_price(9000.0));

        let outcome = reconcile(&lines, &overrides);
        assert_eq!(outcome.lines[1].qty, 5.0);
        assert_eq!(outcome.lines[1].subtotal, 45000.0);
    }

    #[test]
    fn test_subtotal_field_pins_amount_and_price() {
        let lines = flooring_lines();
        let mut overrides = OverrideMap::new();
        overrides.insert(
            key::FLOOR.to_string(),
            OverrideEntry::Fields(OverrideFields {
                qty: Some(10.0),
                unit_price: None,
                subtotal: Some(95000.0),
            }),
        );

        let outcome = reconcile(&lines, &overrides);
        assert_eq!(outcome.lines[0].qty, 10.0);
        assert_eq!(outcome.lines[0].subtotal, 95000.0);
    }

    #[test]
    fn test_invalid_fields_fall_back_per_field() {
        let lines = flooring_lines();
        let mut overrides = OverrideMap::new();
        overrides.insert(
            key::SKIRTING.to_string(),
            OverrideEntry::Fields(OverrideFields {
                qty: Some(-2.0),
                unit_price: Some(8000.0),
                subtotal: None,
            }),
        );

        let outcome = reconcile(&lines, &overrides);
        // Bad qty ignored, good unit price applied to computed qty
        assert_eq!(outcome.lines[1].qty, 5.0);
        assert_eq!(outcome.lines[1].subtotal, 40000.0);
    }

    #[test]
    fn test_zero_qty_override_zeroes_subtotal() {
        let lines = flooring_lines();
        let mut overrides = OverrideMap::new();
        overrides.insert(key::FLOOR_GUM.to_string(), OverrideEntry::qty(0.0));

        let outcome = reconcile(&lines, &overrides);
        assert_eq!(outcome.lines[2].qty, 0.0);
        assert_eq!(outcome.lines[2].subtotal, 0.0);
    }

    #[test]
    fn test_unknown_key_ignored() {
        let lines = flooring_lines();
        let mut overrides = OverrideMap::new();
        overrides.insert("noSuchLine".to_string(), OverrideEntry::Subtotal(1.0));

        let outcome = reconcile(&lines, &overrides);
        assert_eq!(outcome.lines, lines);
    }

    #[test]
    fn test_idempotent() {
        let lines = flooring_lines();
        let mut overrides = OverrideMap::new();
        overrides.insert(key::FLOOR.to_string(), OverrideEntry::Subtotal(50000.0));
        overrides.insert(key::SKIRTING.to_string(), OverrideEntry::qty(7.0));

        let once = reconcile(&lines, &overrides);
        let twice_same = reconcile(&once.lines, &overrides);
        let twice_empty = reconcile(&once.lines, &OverrideMap::new());

        assert_eq!(once, twice_same);
        assert_eq!(once, twice_empty);
    }

    #[test]
    fn test_entry_deserializes_from_bare_number() {
        let entry: OverrideEntry = serde_json::from_str("50000").unwrap();
        assert_eq!(entry, OverrideEntry::Subtotal(50000.0));
    }

    #[test]
    fn test_entry_deserializes_from_record() {
        let entry: OverrideEntry =
            serde_json::from_str("{\"qty\": 5, \"unitPrice\": 1500}").unwrap();
        match entry {
            OverrideEntry::Fields(fields) => {
                assert_eq!(fields.qty, Some(5.0));
                assert_eq!(fields.unit_price, Some(1500.0));
                assert_eq!(fields.subtotal, None);
            }
            OverrideEntry::Subtotal(_) => panic!("expected record form"),
        }
    }

    #[test]
    fn test_map_serialization_roundtrip() {
        let mut overrides = OverrideMap::new();
        overrides.insert(key::FLOOR.to_string(), OverrideEntry::Subtotal(50000.0));
        overrides.insert(key::SKIRTING.to_string(), OverrideEntry::qty(6.0));

        let json = serde_json::to_string(&overrides).unwrap();
        let roundtrip: OverrideMap = serde_json::from_str(&json).unwrap();
        assert_eq!(overrides, roundtrip);
    }
}
