//! # Custom Line Item
//!
//! Free-form entry for work no calculator covers - demolition, haulage, a
//! negotiated lump sum. One line, quantity times unit price, still run
//! through override reconciliation so the line can be corrected like any
//! computed one.

use serde::{Deserialize, Serialize};

use crate::errors::{QuoteError, QuoteResult};
use crate::lines::{key, LineItem};
use crate::overrides::{reconcile, OverrideMap};
use crate::prices::PriceTable;

fn default_unit() -> String {
    "unit".to_string()
}

/// Input parameters for a custom line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomInput {
    /// What the line is for (becomes the label)
    pub description: String,
    /// Quantity, >= 0
    pub qty: f64,
    /// Price per unit, >= 0
    pub unit_price: f64,
    /// Display unit
    #[serde(default = "default_unit")]
    pub unit: String,
}

impl CustomInput {
    /// Validate input parameters.
    pub fn validate(&self) -> QuoteResult<()> {
        if self.description.trim().is_empty() {
            return Err(QuoteError::invalid_input(
                "description",
                &self.description,
                "Description must be given",
            ));
        }
        if !(self.qty.is_finite() && self.qty >= 0.0) {
            return Err(QuoteError::invalid_input(
                "qty",
                self.qty.to_string(),
                "Quantity must be zero or more",
            ));
        }
        if !(self.unit_price.is_finite() && self.unit_price >= 0.0) {
            return Err(QuoteError::invalid_input(
                "unitPrice",
                self.unit_price.to_string(),
                "Unit price must be zero or more",
            ));
        }
        Ok(())
    }
}

/// Results from a custom line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomResult {
    pub qty: f64,
    pub unit_price: f64,
    /// The (possibly overridden) line amount
    pub area_total: f64,
    /// Always exactly one line
    pub lines: Vec<LineItem>,
}

/// Build the single custom line and reconcile it.
///
/// The price table is unused for custom items (the unit price arrives in the
/// input) but kept in the signature so all calculators dispatch uniformly.
pub fn calculate(
    input: &CustomInput,
    _prices: &PriceTable,
    overrides: &OverrideMap,
) -> QuoteResult<CustomResult> {
    input.validate()?;

    let lines = vec![LineItem::new(
        key::CUSTOM,
        input.description.clone(),
        input.qty,
        input.unit.clone(),
        input.qty * input.unit_price,
    )];

    let outcome = reconcile(&lines, overrides);
    Ok(CustomResult {
        qty: input.qty,
        unit_price: input.unit_price,
        area_total: outcome.area_total,
        lines: outcome.lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overrides::OverrideEntry;

    fn test_input() -> CustomInput {
        CustomInput {
            description: "Door repair".to_string(),
            qty: 3.0,
            unit_price: 1500.0,
            unit: "unit".to_string(),
        }
    }

    #[test]
    fn test_single_line_qty_times_price() {
        let result = calculate(&test_input(), &PriceTable::new(), &OverrideMap::new()).unwrap();

        assert_eq!(result.lines.len(), 1);
        assert_eq!(result.lines[0].key, key::CUSTOM);
        assert_eq!(result.lines[0].label, "Door repair");
        assert_eq!(result.lines[0].subtotal, 4500.0);
        assert_eq!(result.area_total, 4500.0);
    }

    #[test]
    fn test_qty_override_reprices_from_computed_ratio() {
        let mut overrides = OverrideMap::new();
        overrides.insert(key::CUSTOM.to_string(), OverrideEntry::qty(5.0));

        let result = calculate(&test_input(), &PriceTable::new(), &overrides).unwrap();
        // Unit price reconstructed as 4500/3 = 1500, so 5 x 1500
        assert_eq!(result.lines[0].qty, 5.0);
        assert_eq!(result.lines[0].subtotal, 7500.0);
        assert_eq!(result.area_total, 7500.0);
    }

    #[test]
    fn test_zero_qty_is_allowed() {
        let input = CustomInput {
            qty: 0.0,
            ..test_input()
        };
        let result = calculate(&input, &PriceTable::new(), &OverrideMap::new()).unwrap();
        assert_eq!(result.area_total, 0.0);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let input = CustomInput {
            description: "  ".to_string(),
            ..test_input()
        };
        assert!(calculate(&input, &PriceTable::new(), &OverrideMap::new()).is_err());

        let input = CustomInput {
            qty: -1.0,
            ..test_input()
        };
        assert!(calculate(&input, &PriceTable::new(), &OverrideMap::new()).is_err());

        let input = CustomInput {
            unit_price: f64::INFINITY,
            ..test_input()
        };
        assert!(calculate(&input, &PriceTable::new(), &OverrideMap::new()).is_err());
    }

    #[test]
    fn test_serialization_defaults_unit() {
        let json = "{\"description\":\"Haulage\",\"qty\":1,\"unitPrice\":20000}";
        let input: CustomInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.unit, "unit");
    }
}
