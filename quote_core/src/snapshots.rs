//! # Quotation Snapshots
//!
//! Named, timestamped saves of a quotation, kept newest-first in a history
//! file. Writes are atomic (write to .tmp, fsync, rename) so an interrupted
//! save can never corrupt the history, and loads validate the schema
//! version before handing data back.
//!
//! The snapshot shape - `{id, title, dateISO, items, total}` - is shared
//! with other front-ends of the stored data; treat it as a wire format.
//!
//! ## Example
//!
//! ```rust,no_run
//! use quote_core::quotation::Quotation;
//! use quote_core::snapshots::{load_history, save_history, QuotationSnapshot, SnapshotHistory};
//! use std::path::Path;
//!
//! let quotation = Quotation::new("Mr. Ade's flat");
//! let path = Path::new("quotations.rqf");
//!
//! let mut history = load_history(path).unwrap_or_default();
//! history.add(QuotationSnapshot::capture("Mr. Ade - June visit", &quotation));
//! save_history(&history, path)?;
//! # Ok::<(), quote_core::errors::QuoteError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{QuoteError, QuoteResult};
use crate::quotation::{Quotation, QuotationItem};

/// Current schema version for history files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// One saved quotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotationSnapshot {
    /// Stable identity across renames
    pub id: Uuid,
    /// User-chosen save name
    pub title: String,
    /// When the snapshot was taken
    #[serde(rename = "dateISO")]
    pub date: DateTime<Utc>,
    /// The quotation's items as they stood
    pub items: Vec<QuotationItem>,
    /// Grand total as it stood
    pub total: f64,
}

impl QuotationSnapshot {
    /// Capture the current state of a quotation under a save name.
    pub fn capture(title: impl Into<String>, quotation: &Quotation) -> Self {
        QuotationSnapshot {
            id: Uuid::new_v4(),
            title: title.into(),
            date: Utc::now(),
            items: quotation.items().to_vec(),
            total: quotation.grand_total(),
        }
    }
}

/// History file contents: saved quotations, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotHistory {
    /// Schema version (for migration compatibility)
    pub version: String,
    pub quotations: Vec<QuotationSnapshot>,
}

impl SnapshotHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        SnapshotHistory {
            version: SCHEMA_VERSION.to_string(),
            quotations: Vec::new(),
        }
    }

    /// Add a snapshot at the front (newest first).
    pub fn add(&mut self, snapshot: QuotationSnapshot) {
        self.quotations.insert(0, snapshot);
    }

    /// Get a snapshot by id.
    pub fn get(&self, id: &Uuid) -> Option<&QuotationSnapshot> {
        self.quotations.iter().find(|s| &s.id == id)
    }

    /// Delete a snapshot by id.
    ///
    /// Returns the removed snapshot if it existed.
    pub fn delete(&mut self, id: &Uuid) -> Option<QuotationSnapshot> {
        let index = self.quotations.iter().position(|s| &s.id == id)?;
        Some(self.quotations.remove(index))
    }

    /// Rename a snapshot. Returns false when the id is unknown.
    pub fn rename(&mut self, id: &Uuid, title: impl Into<String>) -> bool {
        match self.quotations.iter_mut().find(|s| &s.id == id) {
            Some(snapshot) => {
                snapshot.title = title.into();
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.quotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotations.is_empty()
    }
}

impl Default for SnapshotHistory {
    fn default() -> Self {
        SnapshotHistory::new()
    }
}

/// Save a history file with atomic write semantics.
///
/// The save process:
/// 1. Serialize to JSON
/// 2. Write to a temporary file (.tmp)
/// 3. Sync to disk (fsync)
/// 4. Rename .tmp over the target (atomic on most filesystems)
///
/// An interrupted save leaves the previous file intact.
pub fn save_history(history: &SnapshotHistory, path: &Path) -> QuoteResult<()> {
    let json =
        serde_json::to_string_pretty(history).map_err(|e| QuoteError::SerializationError {
            reason: e.to_string(),
        })?;

    let tmp_path = path.with_extension("rqf.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        QuoteError::file_error(
            "create temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        )
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        QuoteError::file_error(
            "write temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        )
    })?;

    tmp_file.sync_all().map_err(|e| {
        QuoteError::file_error(
            "sync temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        )
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        // Clean up temp file if rename fails
        let _ = fs::remove_file(&tmp_path);
        QuoteError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Load a history file.
///
/// # Returns
///
/// * `Ok(SnapshotHistory)` - successfully loaded
/// * `Err(QuoteError::VersionMismatch)` - file schema is incompatible
/// * `Err(QuoteError::SerializationError)` - invalid JSON
/// * `Err(QuoteError::FileError)` - I/O error
pub fn load_history(path: &Path) -> QuoteResult<SnapshotHistory> {
    let mut file = File::open(path)
        .map_err(|e| QuoteError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| QuoteError::file_error("read", path.display().to_string(), e.to_string()))?;

    let history: SnapshotHistory =
        serde_json::from_str(&contents).map_err(|e| QuoteError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&history.version)?;

    Ok(history)
}

/// Validate that a file version is compatible with the current schema.
///
/// Major versions must match; within 0.x, a newer minor than ours is also
/// rejected (breaking changes allowed before 1.0).
fn validate_version(file_version: &str) -> QuoteResult<()> {
    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    let mismatch = || QuoteError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    if current_parts[0] == 0
        && file_parts.len() > 1
        && current_parts.len() > 1
        && file_parts[1] > current_parts[1]
    {
        return Err(mismatch());
    }

    Ok(())
}
