//! # Line Items
//!
//! One priced row within a category's result (e.g. "Skirting"). Calculators
//! emit lines in a fixed, deterministic order; line keys are unique within
//! one calculation and stable across recomputes, which is what user
//! overrides attach to.

use serde::{Deserialize, Serialize};

/// Well-known line keys emitted by the stock calculators.
///
/// Part of the persisted data format (overrides are keyed by these); do not
/// rename them.
pub mod key {
    pub const FLOOR: &str = "floor";
    pub const SKIRTING: &str = "skirting";
    pub const FILLER: &str = "filler";
    pub const SKIRTING_GUM: &str = "skirtingGum";
    pub const FLOOR_GUM: &str = "floorGum";
    pub const DOOR_PROFILES: &str = "doorProfiles";
    pub const TILES: &str = "tiles";
    pub const TILE_GUM: &str = "tileGum";
    pub const CEMENT: &str = "cement";
    pub const SAND: &str = "sand";
    pub const PAINT: &str = "paint";
    pub const PRIMER: &str = "primer";
    pub const ROLLS: &str = "rolls";
    pub const ADHESIVE: &str = "adhesive";
    pub const CUSTOM: &str = "custom";
}

/// One priced row of a calculation result.
///
/// `subtotal` starts as quantity times resolved unit price but need not stay
/// that way once the user overrides the line; it must always be >= 0. The
/// label is informational only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Stable identity within one calculation; override map key
    pub key: String,
    /// Human-readable description (not semantically load-bearing)
    pub label: String,
    /// Quantity in `unit`s, >= 0
    pub qty: f64,
    /// Display unit ("sqm", "pcs", "bags", ...)
    pub unit: String,
    /// Line amount, >= 0
    pub subtotal: f64,
}

impl LineItem {
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        qty: f64,
        unit: impl Into<String>,
        subtotal: f64,
    ) -> Self {
        LineItem {
            key: key.into(),
            label: label.into(),
            qty,
            unit: unit.into(),
            subtotal,
        }
    }

    /// Unit price implied by this line's quantity and subtotal.
    ///
    /// Zero-quantity lines imply a zero unit price; override reconciliation
    /// relies on this when it has to reconstruct a price.
    pub fn implied_unit_price(&self) -> f64 {
        if self.qty == 0.0 {
            0.0
        } else {
            self.subtotal / self.qty
        }
    }
}

/// Sum of line subtotals.
pub fn sum_subtotals(lines: &[LineItem]) -> f64 {
    lines.iter().map(|line| line.subtotal).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_implied_unit_price() {
        let line = LineItem::new(key::SKIRTING, "Skirting", 5.0, "pcs", 50000.0);
        assert_eq!(line.implied_unit_price(), 10000.0);
    }

    #[test]
    fn test_implied_unit_price_zero_qty() {
        let line = LineItem::new(key::FILLER, "Filler", 0.0, "bags", 0.0);
        assert_eq!(line.implied_unit_price(), 0.0);
    }

    #[test]
    fn test_sum_subtotals() {
        let lines = vec![
            LineItem::new(key::FLOOR, "Flooring (VINYL)", 12.0, "sqm", 108000.0),
            LineItem::new(key::SKIRTING, "Skirting", 5.0, "pcs", 50000.0),
        ];
        assert_eq!(sum_subtotals(&lines), 158000.0);
        assert_eq!(sum_subtotals(&[]), 0.0);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let line = LineItem::new(key::TILES, "Tiles (62 pcs)", 20.0, "sqm", 170000.0);
        let json = serde_json::to_string(&line).unwrap();
        assert!(json.contains("\"key\":\"tiles\""));

        let roundtrip: LineItem = serde_json::from_str(&json).unwrap();
        assert_eq!(line, roundtrip);
    }
}
