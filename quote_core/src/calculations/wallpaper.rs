//! # Wallpapering Calculator
//!
//! Prices a wallpapering job from the wall area: rolls plus adhesive. The
//! roll count carries an 8% waste allowance for pattern matching, and unlike
//! tiles the rolls ARE the cost basis - you pay per roll, not per sqm.

use serde::{Deserialize, Serialize};

use crate::errors::{QuoteError, QuoteResult};
use crate::lines::{key, LineItem};
use crate::overrides::{reconcile, OverrideMap};
use crate::prices::{material, PriceTable};
use crate::rules::catalog;

/// Input parameters for a wallpapering estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallpaperInput {
    /// Wall area to paper (sqm)
    pub area: f64,
}

impl WallpaperInput {
    /// Validate input parameters.
    pub fn validate(&self) -> QuoteResult<()> {
        if !(self.area.is_finite() && self.area > 0.0) {
            return Err(QuoteError::invalid_input(
                "area",
                self.area.to_string(),
                "Area must be positive",
            ));
        }
        Ok(())
    }
}

/// Results from a wallpapering estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallpaperResult {
    /// Rolls to buy, waste included
    pub rolls: f64,
    /// Adhesive packs
    pub adhesive_qty: f64,
    /// Sum of the (possibly overridden) line subtotals
    pub area_total: f64,
    /// Itemized lines in fixed order
    pub lines: Vec<LineItem>,
}

/// Calculate a wallpapering estimate.
///
/// Lines in fixed order: rolls, adhesive.
pub fn calculate(
    input: &WallpaperInput,
    prices: &PriceTable,
    overrides: &OverrideMap,
) -> QuoteResult<WallpaperResult> {
    input.validate()?;
    let measures = &catalog().wallpaper.measures;

    let rolls = ((input.area / measures.roll_coverage) * (1.0 + measures.waste_rate)).ceil();
    let adhesive_qty = (input.area / measures.adhesive_coverage).ceil();

    let lines = vec![
        LineItem::new(
            key::ROLLS,
            "Wallpaper Rolls",
            rolls,
            "rolls",
            rolls * prices.get_or_zero(material::ROLL),
        ),
        LineItem::new(
            key::ADHESIVE,
            "Adhesive",
            adhesive_qty,
            "packs",
            adhesive_qty * prices.get_or_zero(material::ADHESIVE),
        ),
    ];

    let outcome = reconcile(&lines, overrides);
    Ok(WallpaperResult {
        rolls,
        adhesive_qty,
        area_total: outcome.area_total,
        lines: outcome.lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::sum_subtotals;
    use crate::overrides::OverrideEntry;
    use crate::prices::{resolve_prices, PriceOverrides};
    use crate::rules::Category;

    fn stock_prices() -> PriceTable {
        resolve_prices(Category::Wallpaper, &PriceOverrides::new())
    }

    #[test]
    fn test_quantities_for_forty_sqm() {
        let input = WallpaperInput { area: 40.0 };
        let result = calculate(&input, &stock_prices(), &OverrideMap::new()).unwrap();

        // 40/5 * 1.08 = 8.64 -> 9 rolls; 40/20 = 2 packs
        assert_eq!(result.rolls, 9.0);
        assert_eq!(result.adhesive_qty, 2.0);
    }

    #[test]
    fn test_rolls_are_the_cost_basis() {
        let input = WallpaperInput { area: 40.0 };
        let result = calculate(&input, &stock_prices(), &OverrideMap::new()).unwrap();

        let rolls = &result.lines[0];
        assert_eq!(rolls.key, key::ROLLS);
        assert_eq!(rolls.qty, 9.0);
        assert_eq!(rolls.subtotal, 9.0 * 12000.0);

        assert_eq!(result.lines[1].subtotal, 2.0 * 4000.0);
        assert_eq!(result.area_total, sum_subtotals(&result.lines));
    }

    #[test]
    fn test_waste_pushes_roll_count_up() {
        // 25/5 = 5 exactly, but 8% waste makes it 5.4 -> 6
        let input = WallpaperInput { area: 25.0 };
        let result = calculate(&input, &stock_prices(), &OverrideMap::new()).unwrap();
        assert_eq!(result.rolls, 6.0);
    }

    #[test]
    fn test_roll_price_override() {
        let input = WallpaperInput { area: 40.0 };
        let mut overrides = OverrideMap::new();
        overrides.insert(key::ROLLS.to_string(), OverrideEntry::unit_price(10000.0));

        let result = calculate(&input, &stock_prices(), &overrides).unwrap();
        assert_eq!(result.lines[0].subtotal, 90000.0);
        assert_eq!(result.area_total, 90000.0 + 8000.0);
    }

    #[test]
    fn test_invalid_area_rejected() {
        let input = WallpaperInput { area: f64::NAN };
        let err = calculate(&input, &stock_prices(), &OverrideMap::new()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }
}
