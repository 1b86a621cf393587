//! # Material Calculators
//!
//! One calculator per material category. Each follows the same pattern:
//!
//! - `*Input` - validated input parameters (JSON-serializable)
//! - `*Result` - named quantities plus itemized lines (JSON-serializable)
//! - `calculate(input, prices, overrides) -> Result<*Result, QuoteError>` -
//!   pure function, no I/O
//!
//! Every calculator finishes by reconciling its lines against the user's
//! overrides, so `area_total` is always the figure the customer is quoted.
//!
//! ## Available Calculators
//!
//! - [`flooring`] - floor laying with skirting accessories
//! - [`tiles`] - tiling with gum, cement and sand
//! - [`paint`] - painting with primer
//! - [`wallpaper`] - wallpapering with adhesive
//! - [`custom`] - free-form single line

pub mod custom;
pub mod flooring;
pub mod paint;
pub mod tiles;
pub mod wallpaper;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use custom::{CustomInput, CustomResult};
pub use flooring::{FlooringInput, FlooringResult};
pub use paint::{PaintInput, PaintResult};
pub use tiles::{TilesInput, TilesResult};
pub use wallpaper::{WallpaperInput, WallpaperResult};

use crate::errors::QuoteResult;
use crate::lines::LineItem;
use crate::overrides::OverrideMap;
use crate::prices::PriceTable;
use crate::rules::Category;

/// Enum wrapper for all calculator inputs.
///
/// This is the single category-dispatch point: callers hold one of these
/// and never branch on category strings themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CalculationInput {
    Flooring(FlooringInput),
    Tiles(TilesInput),
    Paint(PaintInput),
    Wallpaper(WallpaperInput),
    Custom(CustomInput),
}

impl CalculationInput {
    /// The category this input belongs to
    pub fn category(&self) -> Category {
        match self {
            CalculationInput::Flooring(_) => Category::Flooring,
            CalculationInput::Tiles(_) => Category::Tiles,
            CalculationInput::Paint(_) => Category::Paint,
            CalculationInput::Wallpaper(_) => Category::Wallpaper,
            CalculationInput::Custom(_) => Category::Custom,
        }
    }

    /// Run the matching calculator.
    pub fn calculate(
        &self,
        prices: &PriceTable,
        overrides: &OverrideMap,
    ) -> QuoteResult<CalculationResult> {
        Ok(match self {
            CalculationInput::Flooring(input) => {
                CalculationResult::Flooring(flooring::calculate(input, prices, overrides)?)
            }
            CalculationInput::Tiles(input) => {
                CalculationResult::Tiles(tiles::calculate(input, prices, overrides)?)
            }
            CalculationInput::Paint(input) => {
                CalculationResult::Paint(paint::calculate(input, prices, overrides)?)
            }
            CalculationInput::Wallpaper(input) => {
                CalculationResult::Wallpaper(wallpaper::calculate(input, prices, overrides)?)
            }
            CalculationInput::Custom(input) => {
                CalculationResult::Custom(custom::calculate(input, prices, overrides)?)
            }
        })
    }
}

/// Enum wrapper for all calculator results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CalculationResult {
    Flooring(FlooringResult),
    Tiles(TilesResult),
    Paint(PaintResult),
    Wallpaper(WallpaperResult),
    Custom(CustomResult),
}

impl CalculationResult {
    /// The category this result belongs to
    pub fn category(&self) -> Category {
        match self {
            CalculationResult::Flooring(_) => Category::Flooring,
            CalculationResult::Tiles(_) => Category::Tiles,
            CalculationResult::Paint(_) => Category::Paint,
            CalculationResult::Wallpaper(_) => Category::Wallpaper,
            CalculationResult::Custom(_) => Category::Custom,
        }
    }

    /// The quoted total for this calculation (overrides included)
    pub fn area_total(&self) -> f64 {
        match self {
            CalculationResult::Flooring(r) => r.area_total,
            CalculationResult::Tiles(r) => r.area_total,
            CalculationResult::Paint(r) => r.area_total,
            CalculationResult::Wallpaper(r) => r.area_total,
            CalculationResult::Custom(r) => r.area_total,
        }
    }

    /// The itemized lines, in calculator order
    pub fn lines(&self) -> &[LineItem] {
        match self {
            CalculationResult::Flooring(r) => &r.lines,
            CalculationResult::Tiles(r) => &r.lines,
            CalculationResult::Paint(r) => &r.lines,
            CalculationResult::Wallpaper(r) => &r.lines,
            CalculationResult::Custom(r) => &r.lines,
        }
    }
}

/// Run the calculator matching the input's category.
///
/// Free-function form of [`CalculationInput::calculate`] for callers that
/// prefer the engine's functional surface.
pub fn calculate(
    input: &CalculationInput,
    prices: &PriceTable,
    overrides: &OverrideMap,
) -> QuoteResult<CalculationResult> {
    input.calculate(prices, overrides)
}
