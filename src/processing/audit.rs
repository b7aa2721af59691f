//! Cross-check of discarded records against relevance judgments.
//!
//! A discarded record judged relevant (grade > 0) is a false discard.
//! Auditing only reports: it never changes the filtered output.
use log::info;

use super::discard::{DiscardEntry, DiscardTable};
use super::qrels::QrelsTable;

/// Discard entry of the document of every relevant judgment, in judgment order.
///
/// A document judged relevant for several queries is reported once per judgment.
pub fn false_discards<'a>(discards: &'a DiscardTable, qrels: &QrelsTable) -> Vec<&'a DiscardEntry> {
    let found: Vec<_> = qrels
        .relevant()
        .filter_map(|(doc_id, _)| discards.get(doc_id))
        .collect();
    info!(
        "{} relevant judgments on {} discarded documents",
        found.len(),
        discards.len()
    );
    found
}
