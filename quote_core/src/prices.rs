//! # Price Resolution
//!
//! Builds the [`PriceTable`] a calculator works from. A table is constructed
//! fresh for every calculation by merging the caller's price corrections
//! over the catalog defaults: a user price wins only when it is a positive,
//! finite number, otherwise the catalog default stands.
//!
//! Flooring's `doorProfile` is the one material with no catalog default; it
//! resolves to 0 unless the caller prices it, and the calculator suppresses
//! the line in that case.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::prices::{material, resolve_prices, PriceOverrides};
//! use quote_core::rules::Category;
//!
//! let overrides = PriceOverrides::new().with(material::VINYL, 9500.0);
//! let prices = resolve_prices(Category::Flooring, &overrides);
//!
//! assert_eq!(prices.get(material::VINYL), Some(9500.0));
//! assert_eq!(prices.get(material::SKIRTING), Some(10000.0)); // catalog default
//! assert_eq!(prices.get(material::DOOR_PROFILE), Some(0.0)); // no default
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::rules::{catalog, Category};

/// Material keys understood by the stock calculators.
///
/// The string spellings are part of the persisted data format; do not
/// rename them.
pub mod material {
    pub const VINYL: &str = "vinyl";
    pub const SPC: &str = "spc";
    pub const SKIRTING: &str = "skirting";
    pub const FLOOR_GUM: &str = "floorGum";
    pub const FILLER: &str = "filler";
    pub const SKIRTING_GUM: &str = "skirtingGum";
    pub const DOOR_PROFILE: &str = "doorProfile";
    pub const TILE: &str = "tile";
    pub const TILE_GUM: &str = "tileGum";
    pub const CEMENT: &str = "cement";
    pub const SAND: &str = "sand";
    pub const PAINT: &str = "paint";
    pub const PRIMER: &str = "primer";
    pub const ROLL: &str = "roll";
    pub const ADHESIVE: &str = "adhesive";
}

/// Resolved unit prices for one calculation, keyed by material.
///
/// Ephemeral: built per calculation by [`resolve_prices`], then stored on
/// the quotation item so the numbers behind a quote survive catalog edits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceTable(BTreeMap<String, f64>);

impl PriceTable {
    pub fn new() -> Self {
        PriceTable(BTreeMap::new())
    }

    /// Set a material price
    pub fn set(&mut self, key: impl Into<String>, price: f64) {
        self.0.insert(key.into(), price);
    }

    /// Builder-style [`set`](Self::set)
    pub fn with(mut self, key: impl Into<String>, price: f64) -> Self {
        self.set(key, price);
        self
    }

    /// Look up a material price
    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    /// Look up a material price, treating an absent key as free.
    ///
    /// This is the lookup the calculators use for the floor-type key, which
    /// may be any key the caller put in the table.
    pub fn get_or_zero(&self, key: &str) -> f64 {
        self.get(key).unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Sparse user-supplied prices, keyed by material.
///
/// Values arrive straight from form fields and may be zero, negative or NaN;
/// [`resolve_prices`] keeps only the usable ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceOverrides(BTreeMap<String, f64>);

impl PriceOverrides {
    pub fn new() -> Self {
        PriceOverrides(BTreeMap::new())
    }

    pub fn set(&mut self, key: impl Into<String>, price: f64) {
        self.0.insert(key.into(), price);
    }

    /// Builder-style [`set`](Self::set)
    pub fn with(mut self, key: impl Into<String>, price: f64) -> Self {
        self.set(key, price);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A user price is taken only when positive and finite.
fn usable(price: f64) -> bool {
    price.is_finite() && price > 0.0
}

/// Build the price table for one calculation.
///
/// Starts from the category's catalog defaults, then overlays every usable
/// user price. Unusable user prices (zero, negative, NaN) are dropped so
/// the defaults stand. User prices for keys the catalog does not know are
/// kept as given, which is how non-stock floor types enter the table.
pub fn resolve_prices(category: Category, overrides: &PriceOverrides) -> PriceTable {
    let mut table = default_prices(category);
    for (key, price) in overrides.iter() {
        if usable(price) {
            table.set(key, price);
        }
    }
    table
}

/// Catalog defaults for a category, as a price table.
pub fn default_prices(category: Category) -> PriceTable {
    let rules = catalog();
    let mut table = PriceTable::new();
    match category {
        Category::Flooring => {
            let d = &rules.flooring.defaults;
            table.set(material::VINYL, d.vinyl);
            table.set(material::SPC, d.spc);
            table.set(material::SKIRTING, d.skirting);
            table.set(material::FLOOR_GUM, d.floor_gum);
            table.set(material::FILLER, d.filler);
            table.set(material::SKIRTING_GUM, d.skirting_gum);
            // No catalog default; stays 0 unless the caller prices it
            table.set(material::DOOR_PROFILE, 0.0);
        }
        Category::Tiles => {
            let d = &rules.tiles.defaults;
            table.set(material::TILE, d.tile);
            table.set(material::TILE_GUM, d.tile_gum);
            table.set(material::CEMENT, d.cement);
            table.set(material::SAND, d.sand);
        }
        Category::Paint => {
            let d = &rules.paint.defaults;
            table.set(material::PAINT, d.paint);
            table.set(material::PRIMER, d.primer);
        }
        Category::Wallpaper => {
            let d = &rules.wallpaper.defaults;
            table.set(material::ROLL, d.roll);
            table.set(material::ADHESIVE, d.adhesive);
        }
        Category::Custom => {}
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_overrides() {
        let prices = resolve_prices(Category::Flooring, &PriceOverrides::new());
        assert_eq!(prices.get(material::VINYL), Some(9000.0));
        assert_eq!(prices.get(material::SPC), Some(17000.0));
        assert_eq!(prices.get(material::SKIRTING), Some(10000.0));
        assert_eq!(prices.get(material::DOOR_PROFILE), Some(0.0));
    }

    #[test]
    fn test_positive_override_wins() {
        let overrides = PriceOverrides::new()
            .with(material::VINYL, 9500.0)
            .with(material::DOOR_PROFILE, 2500.0);
        let prices = resolve_prices(Category::Flooring, &overrides);
        assert_eq!(prices.get(material::VINYL), Some(9500.0));
        assert_eq!(prices.get(material::DOOR_PROFILE), Some(2500.0));
        // Untouched keys keep their defaults
        assert_eq!(prices.get(material::FILLER), Some(4000.0));
    }

    #[test]
    fn test_unusable_overrides_fall_back() {
        let overrides = PriceOverrides::new()
            .with(material::TILE, 0.0)
            .with(material::TILE_GUM, -500.0)
            .with(material::CEMENT, f64::NAN);
        let prices = resolve_prices(Category::Tiles, &overrides);
        assert_eq!(prices.get(material::TILE), Some(8500.0));
        assert_eq!(prices.get(material::TILE_GUM), Some(5000.0));
        assert_eq!(prices.get(material::CEMENT), Some(5000.0));
    }

    #[test]
    fn test_unknown_key_enters_table() {
        let overrides = PriceOverrides::new().with("bamboo", 12500.0);
        let prices = resolve_prices(Category::Flooring, &overrides);
        assert_eq!(prices.get("bamboo"), Some(12500.0));
    }

    #[test]
    fn test_custom_category_is_empty() {
        let prices = resolve_prices(Category::Custom, &PriceOverrides::new());
        assert!(prices.is_empty());
        assert_eq!(prices.get_or_zero("anything"), 0.0);
    }

    #[test]
    fn test_table_serialization() {
        let prices = resolve_prices(Category::Paint, &PriceOverrides::new());
        let json = serde_json::to_string(&prices).unwrap();
        // Transparent map serialization, deterministic key order
        assert_eq!(json, "{\"paint\":2000.0,\"primer\":1500.0}");

        let roundtrip: PriceTable = serde_json::from_str(&json).unwrap();
        assert_eq!(prices, roundtrip);
    }
}
