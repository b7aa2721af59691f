/*! Record filtering.

Records are classified with the word-dominance heuristic of [dominance::DominanceFilter],
built on top of the per-record [histogram::WordHistogram].
!*/
pub mod dominance;
pub mod histogram;

pub use dominance::{DegeneratePolicy, Dominance, DominanceFilter, Verdict};
pub use histogram::{CasePolicy, WordHistogram};
