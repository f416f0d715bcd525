//! Sparse tables

use super::{lookup, EntityKind, Metadata, Selectable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A sparse 2D table of text cells keyed by (row, column)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparseTable {
    pub rows: BTreeMap<i64, BTreeMap<i64, String>>,
    pub metadata: Metadata,
}

impl SparseTable {
    pub fn new(metadata: Metadata) -> Self {
        Self {
            rows: BTreeMap::new(),
            metadata,
        }
    }

    /// Set a cell, creating the row if needed
    pub fn inject(&mut self, row: i64, column: i64, value: impl Into<String>) {
        self.rows.entry(row).or_default().insert(column, value.into());
    }
}

impl Selectable for SparseTable {
    const KIND: EntityKind = EntityKind::SparseTable;

    // Tables without cells are still valid selection targets.
    fn is_empty(&self) -> bool {
        false
    }

    fn metadata_value(&self, key: &str) -> Option<&str> {
        lookup(&self.metadata, key)
    }

    fn sub_element_count(&self) -> Option<usize> {
        None
    }
}
