//! Per-cell published edge data.
//!
//! This is the string-keyed boundary shared with the tissue driver: each key
//! maps to one value per edge of the cell, in perimeter order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Keyed per-edge vectors published by a cell
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CellEdgeData {
    items: BTreeMap<String, Vec<f64>>,
}

impl CellEdgeData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `values` under `key`, replacing any previous entry
    pub fn set_item(&mut self, key: &str, values: Vec<f64>) {
        self.items.insert(key.to_owned(), values);
    }

    /// # Panics
    /// If nothing has been published under `key`.
    pub fn get_item(&self, key: &str) -> &[f64] {
        self.try_get_item(key)
            .unwrap_or_else(|| panic!("cell edge data has no item {key:?}"))
    }

    pub fn try_get_item(&self, key: &str) -> Option<&[f64]> {
        self.items.get(key).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
