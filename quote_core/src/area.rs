//! # Area Derivation
//!
//! Guided mode lets the user describe a surface three ways: by dimensions,
//! by direct area, or by a material quantity. This module turns any of them
//! into the `area` the calculators need, before the calculator runs.
//!
//! Quantity input only works for units the engine can convert: "sqm"/"m2"
//! directly, tile counts via the tile size, wallpaper rolls via the roll
//! coverage. Anything else is rejected with
//! [`QuoteError::UnsupportedDerivation`] so the caller can ask for a
//! different input style.

use serde::{Deserialize, Serialize};

use crate::errors::{QuoteError, QuoteResult};
use crate::rules::{catalog, Category};

/// How the user expressed the size of a surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "style", rename_all = "camelCase")]
pub enum AreaInput {
    /// Length and breadth in meters
    Dimensions { length: f64, breadth: f64 },
    /// Area in sqm, given directly
    Area { area: f64 },
    /// A material quantity in some unit ("sqm", "pcs", "rolls", ...)
    Quantity { qty: f64, unit: String },
}

/// A derived surface size.
///
/// `length` and `breadth` are the user's when dimensions were entered;
/// otherwise they are the side of an equivalent square, for display only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedArea {
    pub area: f64,
    pub length: f64,
    pub breadth: f64,
}

/// Area of one tile in sqm, from an edge length in cm.
///
/// Falls back to the catalog tile size when the caller gives none (or gives
/// an unusable number, mirroring price resolution).
pub fn tile_area_sqm(tile_size_cm: Option<f64>) -> f64 {
    let size_cm = tile_size_cm
        .filter(|s| s.is_finite() && *s > 0.0)
        .unwrap_or(catalog().tiles.measures.tile_size_cm);
    let size_m = size_cm / 100.0;
    size_m * size_m
}

/// Derive `{area, length, breadth}` from any input style.
///
/// `tile_size_cm` only matters for tile-count quantities; pass `None` to use
/// the catalog default.
pub fn derive_area(
    category: Category,
    input: &AreaInput,
    tile_size_cm: Option<f64>,
) -> QuoteResult<DerivedArea> {
    match input {
        AreaInput::Dimensions { length, breadth } => Ok(DerivedArea {
            area: length * breadth,
            length: *length,
            breadth: *breadth,
        }),
        AreaInput::Area { area } => Ok(square(*area)),
        AreaInput::Quantity { qty, unit } => {
            let unit_norm = unit.trim().to_ascii_lowercase();
            let area = if unit_norm == "sqm" || unit_norm == "m2" {
                *qty
            } else if category == Category::Tiles {
                qty * tile_area_sqm(tile_size_cm)
            } else if category == Category::Wallpaper {
                qty * catalog().wallpaper.measures.roll_coverage
            } else {
                return Err(QuoteError::unsupported_derivation(
                    category.name(),
                    unit.clone(),
                ));
            };
            Ok(square(area))
        }
    }
}

/// Synthetic square of the given area.
fn square(area: f64) -> DerivedArea {
    let side = area.max(0.0).sqrt();
    DerivedArea {
        area,
        length: side,
        breadth: side,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let input = AreaInput::Dimensions {
            length: 4.0,
            breadth: 3.0,
        };
        let derived = derive_area(Category::Paint, &input, None).unwrap();
        assert_eq!(derived.area, 12.0);
        assert_eq!(derived.length, 4.0);
        assert_eq!(derived.breadth, 3.0);
    }

    #[test]
    fn test_direct_area_synthesizes_square() {
        let input = AreaInput::Area { area: 25.0 };
        let derived = derive_area(Category::Tiles, &input, None).unwrap();
        assert_eq!(derived.area, 25.0);
        assert_eq!(derived.length, 5.0);
        assert_eq!(derived.breadth, 5.0);
    }

    #[test]
    fn test_quantity_in_sqm() {
        for unit in ["sqm", "m2", "SQM", " M2 "] {
            let input = AreaInput::Quantity {
                qty: 18.0,
                unit: unit.to_string(),
            };
            let derived = derive_area(Category::Paint, &input, None).unwrap();
            assert_eq!(derived.area, 18.0);
        }
    }

    #[test]
    fn test_tile_count_quantity() {
        let input = AreaInput::Quantity {
            qty: 100.0,
            unit: "pcs".to_string(),
        };
        // 60 cm tiles: 0.36 sqm each
        let derived = derive_area(Category::Tiles, &input, None).unwrap();
        assert!((derived.area - 36.0).abs() < 1e-9);

        // 50 cm tiles: 0.25 sqm each
        let derived = derive_area(Category::Tiles, &input, Some(50.0)).unwrap();
        assert!((derived.area - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_roll_count_quantity() {
        let input = AreaInput::Quantity {
            qty: 4.0,
            unit: "rolls".to_string(),
        };
        let derived = derive_area(Category::Wallpaper, &input, None).unwrap();
        assert_eq!(derived.area, 20.0);
    }

    #[test]
    fn test_unsupported_quantity_unit() {
        let input = AreaInput::Quantity {
            qty: 3.0,
            unit: "pcs".to_string(),
        };
        let err = derive_area(Category::Paint, &input, None).unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_DERIVATION");
        assert!(err.is_rejection());
    }

    #[test]
    fn test_tile_area_default() {
        assert!((tile_area_sqm(None) - 0.36).abs() < 1e-9);
        assert!((tile_area_sqm(Some(0.0)) - 0.36).abs() < 1e-9);
        assert!((tile_area_sqm(Some(30.0)) - 0.09).abs() < 1e-9);
    }

    #[test]
    fn test_input_serialization() {
        let input = AreaInput::Quantity {
            qty: 4.0,
            unit: "rolls".to_string(),
        };
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"style\":\"quantity\""));

        let roundtrip: AreaInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }
}
