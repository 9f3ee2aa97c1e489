//! Growth reference tables.
//!
//! Each table holds seven Z-score anchors per age for one
//! (measurement, sex, curve family) triple. Tables are validated when
//! loaded and never change afterwards; a [`ReferenceSet`] is the
//! read-only collection the growth engine consults.

mod bundled;
mod loader;
mod set;
mod types;

use thiserror::Error;

pub use loader::load_directory;
pub use set::ReferenceSet;
pub use types::{ReferencePoint, ReferenceTable, TableKey};

// ---------------------------------------------------------------------------
// ReferenceError
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum ReferenceError {
    #[error("Reference data load failed ({0}): {1}")]
    Load(String, String),

    #[error("Reference data parse failed ({0}): {1}")]
    Parse(String, String),

    #[error("Invalid reference table {key}: {reason}")]
    InvalidTable { key: TableKey, reason: String },

    #[error("Duplicate reference table: {0}")]
    DuplicateTable(TableKey),

    #[error("Invalid {field} value: {value}")]
    InvalidEnum { field: String, value: String },
}
