//! # Tiling Calculator
//!
//! Prices a tiling job from the surface area: tiles plus tile gum, cement
//! and sand. The tile count carries a 10% waste allowance for cuts and
//! breakage.
//!
//! Tile cost is charged per sqm of surface, not per tile - the count is
//! informational, shown in the line label so the buyer knows how many to
//! order.

use serde::{Deserialize, Serialize};

use crate::area::tile_area_sqm;
use crate::errors::{QuoteError, QuoteResult};
use crate::lines::{key, LineItem};
use crate::overrides::{reconcile, OverrideMap};
use crate::prices::{material, PriceTable};
use crate::rules::catalog;

/// Input parameters for a tiling estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TilesInput {
    /// Surface area to tile (sqm)
    pub area: f64,
    /// Square tile edge in cm; catalog default (60) when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tile_size_cm: Option<f64>,
}

impl TilesInput {
    /// Validate input parameters.
    pub fn validate(&self) -> QuoteResult<()> {
        if !(self.area.is_finite() && self.area > 0.0) {
            return Err(QuoteError::invalid_input(
                "area",
                self.area.to_string(),
                "Area must be positive",
            ));
        }
        if let Some(size) = self.tile_size_cm {
            if !(size.is_finite() && size > 0.0) {
                return Err(QuoteError::invalid_input(
                    "tileSizeCm",
                    size.to_string(),
                    "Tile size must be positive",
                ));
            }
        }
        Ok(())
    }
}

/// Results from a tiling estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TilesResult {
    /// Area of one tile (sqm)
    pub tile_area: f64,
    /// Tiles to order, waste included. Display only - cost is by area
    pub tile_count: f64,
    /// Tile gum bags
    pub tile_gum_qty: f64,
    /// Cement bags
    pub cement_qty: f64,
    /// Sand bags
    pub sand_qty: f64,
    /// Sum of the (possibly overridden) line subtotals
    pub area_total: f64,
    /// Itemized lines in fixed order
    pub lines: Vec<LineItem>,
}

/// Calculate a tiling estimate.
///
/// Lines in fixed order: tiles, tile gum, cement, sand. The tiles line is
/// priced per sqm of surface; `tile_count` only feeds the label.
pub fn calculate(
    input: &TilesInput,
    prices: &PriceTable,
    overrides: &OverrideMap,
) -> QuoteResult<TilesResult> {
    input.validate()?;
    let measures = &catalog().tiles.measures;

    let tile_area = tile_area_sqm(input.tile_size_cm);
    let tile_count = ((input.area / tile_area) * (1.0 + measures.waste_rate)).ceil();
    let tile_gum_qty = (input.area / measures.tile_gum_coverage).ceil();
    let cement_qty = (input.area / measures.cement_coverage).ceil();
    let sand_qty = (input.area / measures.sand_coverage).ceil();

    let lines = vec![
        LineItem::new(
            key::TILES,
            format!("Tiles ({} pcs)", tile_count),
            input.area,
            "sqm",
            input.area * prices.get_or_zero(material::TILE),
        ),
        LineItem::new(
            key::TILE_GUM,
            "Tile Gum",
            tile_gum_qty,
            "bags",
            tile_gum_qty * prices.get_or_zero(material::TILE_GUM),
        ),
        LineItem::new(
            key::CEMENT,
            "Cement",
            cement_qty,
            "bags",
            cement_qty * prices.get_or_zero(material::CEMENT),
        ),
        LineItem::new(
            key::SAND,
            "Sand",
            sand_qty,
            "bags",
            sand_qty * prices.get_or_zero(material::SAND),
        ),
    ];

    let outcome = reconcile(&lines, overrides);
    Ok(TilesResult {
        tile_area,
        tile_count,
        tile_gum_qty,
        cement_qty,
        sand_qty,
        area_total: outcome.area_total,
        lines: outcome.lines,
    })
}
