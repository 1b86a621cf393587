//! # quote_core - Renovation Quotation Engine
//!
//! `quote_core` is the computational heart of RenoQuote: it turns room
//! measurements into itemized construction-material cost estimates
//! (flooring, tiling, painting, wallpapering and free-form custom lines),
//! lets the user correct individual computed lines, and keeps a quotation's
//! items and saved snapshots.
//!
//! ## Design Philosophy
//!
//! - **Pure calculators**: every calculator and the override merge are pure
//!   functions over their inputs, no I/O, no hidden state
//! - **JSON-First**: all types implement Serialize/Deserialize; the stored
//!   formats are shared with other front-ends of the same data
//! - **Best-effort overrides**: a malformed user correction falls back to
//!   the computed value instead of failing the quote
//! - **Rich Errors**: structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use quote_core::calculations::{CalculationInput, FlooringInput};
//! use quote_core::overrides::OverrideMap;
//! use quote_core::prices::{resolve_prices, PriceOverrides};
//!
//! // Describe the job
//! let input = CalculationInput::Flooring(FlooringInput {
//!     length: 4.0,
//!     breadth: 3.0,
//!     doors: 1,
//!     skirting_needed: true,
//!     floor_type: "vinyl".to_string(),
//! });
//!
//! // Resolve prices (catalog defaults here) and calculate
//! let prices = resolve_prices(input.category(), &PriceOverrides::new());
//! let result = input.calculate(&prices, &OverrideMap::new()).unwrap();
//!
//! assert!(result.area_total() > 0.0);
//! ```
//!
//! ## Modules
//!
//! - [`rules`] - default prices and physical constants per category
//! - [`prices`] - per-calculation price table resolution
//! - [`area`] - deriving an area from dimensions, direct area or quantity
//! - [`calculations`] - the per-category calculators
//! - [`lines`] - itemized line rows
//! - [`overrides`] - merging user corrections into computed lines
//! - [`quotation`] - the quotation container and item builders
//! - [`snapshots`] - saved quotation history with atomic writes
//! - [`errors`] - structured error types

pub mod area;
pub mod calculations;
pub mod errors;
pub mod lines;
pub mod overrides;
pub mod prices;
pub mod quotation;
pub mod rules;
pub mod snapshots;

// Re-export commonly used types at crate root for convenience
pub use area::{derive_area, AreaInput, DerivedArea};
pub use calculations::{calculate, CalculationInput, CalculationResult};
pub use errors::{QuoteError, QuoteResult};
pub use lines::LineItem;
pub use overrides::{reconcile, OverrideEntry, OverrideMap, Reconciled};
pub use prices::{resolve_prices, PriceOverrides, PriceTable};
pub use quotation::{build_item, ItemDraft, ItemMode, Quotation, QuotationItem};
pub use rules::{catalog, Category, RulesCatalog};
pub use snapshots::{load_history, save_history, QuotationSnapshot, SnapshotHistory};
