//! # Painting Calculator
//!
//! Prices a painting job from the wall area: paint plus a primer course.
//!
//! Paint is charged flat per sqm of wall. The coats-adjusted can count
//! (`paint_qty`) is computed for the shopping list but deliberately does not
//! scale the price - that is the established quoting rule here, so a
//! two-coat and three-coat job on the same wall cost the same paint money.

use serde::{Deserialize, Serialize};

use crate::errors::{QuoteError, QuoteResult};
use crate::lines::{key, LineItem};
use crate::overrides::{reconcile, OverrideMap};
use crate::prices::{material, PriceTable};
use crate::rules::catalog;

/// Input parameters for a painting estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaintInput {
    /// Wall area to paint (sqm)
    pub area: f64,
    /// Number of coats; catalog default (2) when absent or zero
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coats: Option<u32>,
}

impl PaintInput {
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

    /// Coats to apply, defaulting a missing or zero entry.
    pub fn effective_coats(&self) -> u32 {
        self.coats
            .filter(|c| *c > 0)
            .unwrap_or(catalog().paint.measures.default_coats)
    }
}

/// Results from a painting estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaintResult {
    /// Coats actually used
    pub coats: u32,
    /// Primer cans
    pub primer_qty: f64,
    /// Paint cans, coats included. Display only - cost is flat by area
    pub paint_qty: f64,
    /// Sum of the (possibly overridden) line subtotals
    pub area_total: f64,
    /// Itemized lines in fixed order
    pub lines: Vec<LineItem>,
}

/// Calculate a painting estimate.
///
/// Lines in fixed order: paint, primer. The paint line is priced per sqm of
/// wall regardless of coats; `paint_qty` only feeds the label.
pub fn calculate(
    input: &PaintInput,
    prices: &PriceTable,
    overrides: &OverrideMap,
) -> QuoteResult<PaintResult> {
    input.validate()?;
    let measures = &catalog().paint.measures;

    let coats = input.effective_coats();
    let primer_qty = (input.area / measures.primer_coverage).ceil();
    let paint_qty = ((input.area * f64::from(coats)) / measures.paint_coverage).ceil();

    let lines = vec![
        LineItem::new(
            key::PAINT,
            format!("Paint ({} coats, {} cans)", coats, paint_qty),
            input.area,
            "sqm",
            input.area * prices.get_or_zero(material::PAINT),
        ),
        LineItem::new(
            key::PRIMER,
            "Primer",
            primer_qty,
            "cans",
            primer_qty * prices.get_or_zero(material::PRIMER),
        ),
    ];

    let outcome = reconcile(&lines, overrides);
    Ok(PaintResult {
        coats,
        primer_qty,
        paint_qty,
        area_total: outcome.area_total,
        lines: outcome.lines,
    })
}
