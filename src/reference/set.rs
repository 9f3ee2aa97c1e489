use std::collections::HashMap;
use std::path::Path;

use super::bundled::bundled_tables;
use super::loader::load_directory;
use super::types::{ReferenceTable, TableKey};
use super::ReferenceError;

/// Read-only collection of reference tables keyed by
/// (measurement, sex, curve family).
#[derive(Debug, Clone, Default)]
pub struct ReferenceSet {
    tables: HashMap<TableKey, ReferenceTable>,
}

impl ReferenceSet {
    /// Build a set from already-validated tables. Two tables for the same
    /// key are an error.
    pub fn from_tables(
        tables: impl IntoIterator<Item = ReferenceTable>,
    ) -> Result<Self, ReferenceError> {
        let mut map = HashMap::new();
        for table in tables {
            let key = table.key();
            if map.insert(key, table).is_some() {
                return Err(ReferenceError::DuplicateTable(key));
            }
        }
        Ok(Self { tables: map })
    }

    /// The tables compiled into the crate.
    pub fn bundled() -> Result<Self, ReferenceError> {
        let set = Self::from_tables(bundled_tables()?)?;
        tracing::info!(
            source = "bundled",
            tables = set.len(),
            "Reference tables loaded"
        );
        Ok(set)
    }

    /// Load `<family>/<measurement>_<sex>.json` files from a directory.
    pub fn load(dir: &Path) -> Result<Self, ReferenceError> {
        let set = Self::from_tables(load_directory(dir)?)?;
        tracing::info!(
            dir = %dir.display(),
            tables = set.len(),
            "Reference tables loaded from directory"
        );
        Ok(set)
    }

    pub fn get(&self, key: &TableKey) -> Option<&ReferenceTable> {
        self.tables.get(key)
    }

    pub fn contains(&self, key: &TableKey) -> bool {
        self.tables.contains_key(key)
    }

    /// Keys present in the set, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &TableKey> {
        self.tables.keys()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
