//! Discarded records bookkeeping.
use std::collections::HashMap;

use serde::Serialize;

use crate::filtering::Dominance;

/// One discarded record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscardEntry {
    pub source_file: String,
    pub doc_id: String,
    pub dominance: Dominance,
}

impl DiscardEntry {
    pub fn new(source_file: &str, doc_id: &str, dominance: Dominance) -> Self {
        Self {
            source_file: source_file.to_string(),
            doc_id: doc_id.to_string(),
            dominance,
        }
    }

    pub fn ratio(&self) -> f64 {
        self.dominance.ratio()
    }
}

/// Discarded records by doc id. A later discard of the same id replaces the earlier one.
#[derive(Debug, Default, Clone)]
pub struct DiscardTable {
    entries: HashMap<String, DiscardEntry>,
}

impl DiscardTable {
    /// Inserts `entry`, returning the entry it replaced if any.
    pub fn insert(&mut self, entry: DiscardEntry) -> Option<DiscardEntry> {
        self.entries.insert(entry.doc_id.clone(), entry)
    }

    pub fn get(&self, doc_id: &str) -> Option<&DiscardEntry> {
        self.entries.get(doc_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
