//! # Flooring Calculator
//!
//! Prices a floor-laying job from the room dimensions: the floor itself plus
//! the accessory chain (skirting boards, filler, skirting gum), floor gum
//! for vinyl, and door end profiles.
//!
//! ## Quantity rules
//!
//! - Skirting runs the perimeter minus one door width per door (clamped at
//!   zero), in 2.9 m boards, rounded up.
//! - One bag of filler finishes two skirting boards; one gum piece serves
//!   three bags of filler.
//! - Floor gum applies to vinyl only, one piece per 20 sqm.
//! - One end profile covers 2.4 m of door opening.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::calculations::flooring::{calculate, FlooringInput};
//! use quote_core::overrides::OverrideMap;
//! use quote_core::prices::{resolve_prices, PriceOverrides};
//! use quote_core::rules::Category;
//!
//! let input = FlooringInput {
//!     length: 4.0,
//!     breadth: 3.0,
//!     doors: 1,
//!     skirting_needed: true,
//!     floor_type: "vinyl".to_string(),
//! };
//! let prices = resolve_prices(Category::Flooring, &PriceOverrides::new());
//!
//! let result = calculate(&input, &prices, &OverrideMap::new()).unwrap();
//! assert_eq!(result.floor_area, 12.0);
//! assert_eq!(result.skirting_qty, 5.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{QuoteError, QuoteResult};
use crate::lines::{key, LineItem};
use crate::overrides::{reconcile, OverrideMap};
use crate::prices::{material, PriceTable};
use crate::rules::catalog;

/// Input parameters for a flooring estimate.
///
/// Dimensions are in meters and must be positive; the caller is expected to
/// have parsed and validated raw form values before building this.
/// `floor_type` is a price-table key - usually `vinyl` or `spc`, but any key
/// the caller priced works.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlooringInput {
    /// Room length (m)
    pub length: f64,
    /// Room breadth (m)
    pub breadth: f64,
    /// Number of door openings on the skirted walls
    #[serde(default)]
    pub doors: u32,
    /// Whether skirting boards (and their filler/gum chain) are wanted
    #[serde(default)]
    pub skirting_needed: bool,
    /// Price-table key of the chosen floor material
    pub floor_type: String,
}

impl FlooringInput {
    /// Validate input parameters.
    pub fn validate(&self) -> QuoteResult<()> {
        if !(self.length.is_finite() && self.length > 0.0) {
            return Err(QuoteError::invalid_input(
                "length",
                self.length.to_string(),
                "Length must be positive",
            ));
        }
        if !(self.breadth.is_finite() && self.breadth > 0.0) {
            return Err(QuoteError::invalid_input(
                "breadth",
                self.breadth.to_string(),
                "Breadth must be positive",
            ));
        }
        if self.floor_type.trim().is_empty() {
            return Err(QuoteError::invalid_input(
                "floorType",
                &self.floor_type,
                "Floor type must be given",
            ));
        }
        Ok(())
    }
}

/// Results from a flooring estimate.
///
/// The named quantities are the raw computed values; `lines` and
/// `area_total` are what the user sees after override reconciliation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlooringResult {
    /// length x breadth (sqm)
    pub floor_area: f64,
    /// Skirting boards
    pub skirting_qty: f64,
    /// Filler bags
    pub filler_qty: f64,
    /// Skirting gum pieces
    pub skirting_gum_qty: f64,
    /// Floor gum pieces (vinyl only)
    pub floor_gum: f64,
    /// Door end profiles
    pub door_end_profiles: f64,
    /// Sum of the (possibly overridden) line subtotals
    pub area_total: f64,
    /// Itemized lines in fixed order
    pub lines: Vec<LineItem>,
}

/// Calculate a flooring estimate.
///
/// Lines are emitted in fixed order: floor, then skirting/filler/skirting
/// gum when skirting is wanted, then floor gum for vinyl, then door
/// profiles. The door-profile line only appears when there are doors AND the
/// profile was actually priced (it has no catalog default). Overrides are
/// applied last; `area_total` reflects them.
pub fn calculate(
    input: &FlooringInput,
    prices: &PriceTable,
    overrides: &OverrideMap,
) -> QuoteResult<FlooringResult> {
    input.validate()?;
    let measures = &catalog().flooring.measures;

    let floor_area = input.length * input.breadth;

    let mut skirting_qty = 0.0;
    let mut filler_qty = 0.0;
    let mut skirting_gum_qty = 0.0;
    if input.skirting_needed {
        let perimeter = 2.0 * (input.length + input.breadth);
        let adjusted = (perimeter - f64::from(input.doors) * measures.door_width).max(0.0);
        skirting_qty = (adjusted / measures.skirting_board_length).ceil();
        filler_qty = (skirting_qty / 2.0).ceil();
        skirting_gum_qty = (filler_qty / 3.0).ceil();
    }

    let floor_gum = if input.floor_type == material::VINYL {
        (floor_area / measures.floor_gum_coverage).ceil()
    } else {
        0.0
    };

    let door_end_profiles = if input.doors > 0 {
        (f64::from(input.doors) * measures.door_width / measures.door_profile_coverage).ceil()
    } else {
        0.0
    };

    let floor_unit_price = prices.get_or_zero(&input.floor_type);
    let door_profile_price = prices.get_or_zero(material::DOOR_PROFILE);

    let mut lines = Vec::with_capacity(6);
    lines.push(LineItem::new(
        key::FLOOR,
        format!("Flooring ({})", input.floor_type.to_uppercase()),
        floor_area,
        "sqm",
        floor_area * floor_unit_price,
    ));
    if input.skirting_needed {
        lines.push(LineItem::new(
            key::SKIRTING,
            "Skirting",
            skirting_qty,
            "pcs",
            skirting_qty * prices.get_or_zero(material::SKIRTING),
        ));
        lines.push(LineItem::new(
            key::FILLER,
            "Filler",
            filler_qty,
            "bags",
            filler_qty * prices.get_or_zero(material::FILLER),
        ));
        lines.push(LineItem::new(
            key::SKIRTING_GUM,
            "Skirting Gum",
            skirting_gum_qty,
            "pcs",
            skirting_gum_qty * prices.get_or_zero(material::SKIRTING_GUM),
        ));
    }
    if floor_gum > 0.0 {
        lines.push(LineItem::new(
            key::FLOOR_GUM,
            "Floor Gum",
            floor_gum,
            "pcs",
            floor_gum * prices.get_or_zero(material::FLOOR_GUM),
        ));
    }
    if door_end_profiles > 0.0 && door_profile_price > 0.0 {
        lines.push(LineItem::new(
            key::DOOR_PROFILES,
            "Door Profiles",
            door_end_profiles,
            "pcs",
            door_end_profiles * door_profile_price,
        ));
    }

    let outcome = reconcile(&lines, overrides);
    Ok(FlooringResult {
        floor_area,
        skirting_qty,
        filler_qty,
        skirting_gum_qty,
        floor_gum,
        door_end_profiles,
        area_total: outcome.area_total,
        lines: outcome.lines,
    })
}
