//! # Quotation Container
//!
//! The `Quotation` struct is the root container for an estimate in
//! progress: an ordered list of priced items plus a running id counter.
//! It is an explicit owned store - callers hold it and pass it around;
//! there is no ambient global state anywhere in the engine.
//!
//! ## Structure
//!
//! ```text
//! Quotation
//! ├── title, created, modified
//! └── items: Vec<QuotationItem> (insertion-ordered, ids monotonic)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use quote_core::calculations::{CalculationInput, CustomInput};
//! use quote_core::overrides::OverrideMap;
//! use quote_core::prices::PriceTable;
//! use quote_core::quotation::{build_item, ItemMode, Quotation};
//!
//! let mut quotation = Quotation::new("Mr. Ade's flat");
//!
//! let inputs = CalculationInput::Custom(CustomInput {
//!     description: "Haulage".to_string(),
//!     qty: 1.0,
//!     unit_price: 20000.0,
//!     unit: "trip".to_string(),
//! });
//! let prices = PriceTable::new();
//! let calculated = inputs.calculate(&prices, &OverrideMap::new()).unwrap();
//!
//! let draft = build_item("Whole flat", ItemMode::Custom, inputs, prices, calculated, OverrideMap::new());
//! let id = quotation.add_item(draft);
//!
//! assert_eq!(quotation.grand_total(), 20000.0);
//! assert!(quotation.get_item(id).is_some());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculations::{CalculationInput, CalculationResult};
use crate::errors::{QuoteError, QuoteResult};
use crate::overrides::OverrideMap;
use crate::prices::PriceTable;
use crate::rules::Category;

/// How the item's inputs were gathered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemMode {
    /// Walked through the dimension/area forms
    Guided,
    /// Entered free-form
    Custom,
}

/// One priced entry in a quotation.
///
/// Everything needed to re-open and re-edit the entry later is kept on the
/// item: the raw inputs, the price table the quote was made with (so the
/// figures survive catalog edits), the calculated result, and the user's
/// line overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationItem {
    /// Store-assigned id, unique within the quotation, never reused
    pub id: u64,
    /// Which room/surface this prices ("Living Room", "Kitchen wall")
    pub place_name: String,
    pub mode: ItemMode,
    /// Snapshot of the form inputs
    pub inputs: CalculationInput,
    /// Resolved prices the calculation used
    pub prices: PriceTable,
    pub calculated: CalculationResult,
    /// Sparse per-line corrections, keyed by line key
    #[serde(default)]
    pub overrides: OverrideMap,
}

impl QuotationItem {
    /// The item's material category
    pub fn kind(&self) -> Category {
        self.inputs.category()
    }

    /// The item's quoted total (overrides included)
    pub fn total(&self) -> f64 {
        self.calculated.area_total()
    }
}

/// Item fields minus the store-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDraft {
    pub place_name: String,
    pub mode: ItemMode,
    pub inputs: CalculationInput,
    pub prices: PriceTable,
    pub calculated: CalculationResult,
    #[serde(default)]
    pub overrides: OverrideMap,
}

/// Wrap one category's inputs, resolved prices, computed result and
/// overrides into a persistable item draft.
///
/// The id is assigned by [`Quotation::add_item`] on insertion.
pub fn build_item(
    place_name: impl Into<String>,
    mode: ItemMode,
    inputs: CalculationInput,
    prices: PriceTable,
    calculated: CalculationResult,
    overrides: OverrideMap,
) -> ItemDraft {
    ItemDraft {
        place_name: place_name.into(),
        mode,
        inputs,
        prices,
        calculated,
        overrides,
    }
}

/// Root store for an estimate in progress.
///
/// Items keep insertion order (that is the order cards render in) and ids
/// are handed out by a monotonic counter, so an id stays valid across
/// edits and deletions of other items. Mutations are not internally
/// synchronized; an embedding host must serialize them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quotation {
    /// Customer or job title
    pub title: String,
    /// When the quotation was started
    pub created: DateTime<Utc>,
    /// When the quotation last changed
    pub modified: DateTime<Utc>,
    items: Vec<QuotationItem>,
    next_id: u64,
}

impl Quotation {
    /// Create a new empty quotation.
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Quotation {
            title: title.into(),
            created: now,
            modified: now,
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Add an item, assigning the next id.
    ///
    /// Returns the id assigned to the item.
    pub fn add_item(&mut self, draft: ItemDraft) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(QuotationItem {
            id,
            place_name: draft.place_name,
            mode: draft.mode,
            inputs: draft.inputs,
            prices: draft.prices,
            calculated: draft.calculated,
            overrides: draft.overrides,
        });
        self.touch();
        id
    }

    /// Replace an item wholesale, preserving its id and position.
    ///
    /// This is the "edit" operation: the caller recalculates and hands in a
    /// fresh draft.
    pub fn replace_item(&mut self, id: u64, draft: ItemDraft) -> QuoteResult<()> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(QuoteError::ItemNotFound { id })?;
        *item = QuotationItem {
            id,
            place_name: draft.place_name,
            mode: draft.mode,
            inputs: draft.inputs,
            prices: draft.prices,
            calculated: draft.calculated,
            overrides: draft.overrides,
        };
        self.touch();
        Ok(())
    }

    /// Remove an item by id.
    ///
    /// Returns the removed item if it existed.
    pub fn remove_item(&mut self, id: u64) -> Option<QuotationItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        let item = self.items.remove(index);
        self.touch();
        Some(item)
    }

    /// Get an item by id.
    pub fn get_item(&self, id: u64) -> Option<&QuotationItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// All items in insertion order.
    pub fn items(&self) -> &[QuotationItem] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The quotation's grand total: the sum of every item's quoted total.
    pub fn grand_total(&self) -> f64 {
        self.items.iter().map(QuotationItem::total).sum()
    }

    /// Whether a place name is already used, ignoring case.
    ///
    /// Front-ends warn on duplicates before adding; the store itself does
    /// not reject them.
    pub fn has_place(&self, name: &str) -> bool {
        self.items
            .iter()
            .any(|item| item.place_name.eq_ignore_ascii_case(name))
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }
}

impl Default for Quotation {
    fn default() -> Self {
        Quotation::new("")
    }
}
