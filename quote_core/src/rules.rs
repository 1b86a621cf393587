//! # Rules Catalog
//!
//! Default unit prices and physical coverage constants per material
//! category. The catalog is immutable and process-wide: it is built once on
//! first access and shared by every calculation.
//!
//! Each category carries two tables, mirroring how installers quote work:
//!
//! - `defaults` - fallback unit prices, used when the caller supplies no
//!   usable price of their own (see [`crate::prices`])
//! - `measures` - physical constants (board lengths, coverage per unit,
//!   waste allowances) the quantity formulas are built from
//!
//! ## Example
//!
//! ```rust
//! use quote_core::rules::catalog;
//!
//! let rules = catalog();
//! assert_eq!(rules.flooring.measures.skirting_board_length, 2.9);
//! assert_eq!(rules.tiles.defaults.tile, 8500.0);
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Material-cost computation variant.
///
/// The closed set of categories the engine knows how to price. All category
/// dispatch in the crate goes through this enum; there is no duck-typed
/// branching on strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Vinyl/SPC floor laying with skirting accessories
    Flooring,
    /// Floor/wall tiling with gum, cement and sand
    Tiles,
    /// Wall painting with primer
    Paint,
    /// Wallpapering with adhesive
    Wallpaper,
    /// Free-form line item, no calculator
    Custom,
}

impl Category {
    /// All category variants for UI selection
    pub const ALL: [Category; 5] = [
        Category::Flooring,
        Category::Tiles,
        Category::Paint,
        Category::Wallpaper,
        Category::Custom,
    ];

    /// Wire/display name (matches the serialized tag)
    pub fn name(&self) -> &'static str {
        match self {
            Category::Flooring => "flooring",
            Category::Tiles => "tiles",
            Category::Paint => "paint",
            Category::Wallpaper => "wallpaper",
            Category::Custom => "custom",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Per-category rule tables. Loaded once, read-only thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RulesCatalog {
    pub flooring: FlooringRules,
    pub tiles: TileRules,
    pub paint: PaintRules,
    pub wallpaper: WallpaperRules,
}

/// Flooring default prices and physical measures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FlooringRules {
    pub defaults: FlooringDefaults,
    pub measures: FlooringMeasures,
}

/// Default unit prices for flooring materials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlooringDefaults {
    /// Vinyl flooring, per sqm
    pub vinyl: f64,
    /// SPC flooring, per sqm
    pub spc: f64,
    /// Skirting board, per piece
    pub skirting: f64,
    /// Floor gum, per piece
    pub floor_gum: f64,
    /// Filler, per bag
    pub filler: f64,
    /// Skirting gum, per piece
    pub skirting_gum: f64,
}

impl Default for FlooringDefaults {
    fn default() -> Self {
        FlooringDefaults {
            vinyl: 9000.0,
            spc: 17000.0,
            skirting: 10000.0,
            floor_gum: 4000.0,
            filler: 4000.0,
            skirting_gum: 4000.0,
        }
    }
}

/// Physical constants for flooring quantities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlooringMeasures {
    /// Length of one skirting board (m)
    pub skirting_board_length: f64,
    /// Width deducted from the perimeter per door (m)
    pub door_width: f64,
    /// Floor area one piece of floor gum covers (sqm)
    pub floor_gum_coverage: f64,
    /// Door opening width one end profile covers (m)
    pub door_profile_coverage: f64,
}

impl Default for FlooringMeasures {
    fn default() -> Self {
        FlooringMeasures {
            skirting_board_length: 2.9,
            door_width: 0.9,
            floor_gum_coverage: 20.0,
            door_profile_coverage: 2.4,
        }
    }
}

/// Tiling default prices and physical measures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TileRules {
    pub defaults: TileDefaults,
    pub measures: TileMeasures,
}

/// Default unit prices for tiling materials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileDefaults {
    /// Tiles, per sqm laid
    pub tile: f64,
    /// Tile gum, per bag
    pub tile_gum: f64,
    /// Cement, per bag
    pub cement: f64,
    /// Sand, per bag
    pub sand: f64,
}

impl Default for TileDefaults {
    fn default() -> Self {
        TileDefaults {
            tile: 8500.0,
            tile_gum: 5000.0,
            cement: 5000.0,
            sand: 3500.0,
        }
    }
}

/// Physical constants for tiling quantities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileMeasures {
    /// Default square tile edge (cm)
    pub tile_size_cm: f64,
    /// Fractional over-purchase allowance for cuts and breakage
    pub waste_rate: f64,
    /// Area one bag of tile gum covers (sqm)
    pub tile_gum_coverage: f64,
    /// Area one bag of cement covers (sqm)
    pub cement_coverage: f64,
    /// Area one bag of sand covers (sqm)
    pub sand_coverage: f64,
}

impl Default for TileMeasures {
    fn default() -> Self {
        TileMeasures {
            tile_size_cm: 60.0,
            waste_rate: 0.10,
            tile_gum_coverage: 5.0,
            cement_coverage: 6.0,
            sand_coverage: 10.0,
        }
    }
}

/// Painting default prices and physical measures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PaintRules {
    pub defaults: PaintDefaults,
    pub measures: PaintMeasures,
}

/// Default unit prices for painting materials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaintDefaults {
    /// Paint, per sqm covered
    pub paint: f64,
    /// Primer, per can
    pub primer: f64,
}

impl Default for PaintDefaults {
    fn default() -> Self {
        PaintDefaults {
            paint: 2000.0,
            primer: 1500.0,
        }
    }
}

/// Physical constants for painting quantities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaintMeasures {
    /// Area one can of primer covers (sqm)
    pub primer_coverage: f64,
    /// Area one can of paint covers, single coat (sqm)
    pub paint_coverage: f64,
    /// Coats applied when the user does not choose
    pub default_coats: u32,
}

impl Default for PaintMeasures {
    fn default() -> Self {
        PaintMeasures {
            primer_coverage: 12.0,
            paint_coverage: 10.0,
            default_coats: 2,
        }
    }
}

/// Wallpapering default prices and physical measures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WallpaperRules {
    pub defaults: WallpaperDefaults,
    pub measures: WallpaperMeasures,
}

/// Default unit prices for wallpapering materials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallpaperDefaults {
    /// Wallpaper roll, per roll
    pub roll: f64,
    /// Adhesive, per pack
    pub adhesive: f64,
}

impl Default for WallpaperDefaults {
    fn default() -> Self {
        WallpaperDefaults {
            roll: 12000.0,
            adhesive: 4000.0,
        }
    }
}

/// Physical constants for wallpapering quantities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallpaperMeasures {
    /// Wall area one roll covers (sqm)
    pub roll_coverage: f64,
    /// Wall area one pack of adhesive covers (sqm)
    pub adhesive_coverage: f64,
    /// Fractional over-purchase allowance for pattern matching
    pub waste_rate: f64,
}

impl Default for WallpaperMeasures {
    fn default() -> Self {
        WallpaperMeasures {
            roll_coverage: 5.0,
            adhesive_coverage: 20.0,
            waste_rate: 0.08,
        }
    }
}

/// Access the process-wide rules catalog.
pub fn catalog() -> &'static RulesCatalog {
    static CATALOG: Lazy<RulesCatalog> = Lazy::new(RulesCatalog::default);
    &CATALOG
}
