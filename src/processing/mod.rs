/*! Result processing

Bookkeeping of discarded records, ground truth cross-checking and reporting.
!*/
pub mod audit;
pub mod discard;
pub mod qrels;
pub mod report;
pub mod stats;

pub use audit::false_discards;
pub use discard::{DiscardEntry, DiscardTable};
pub use qrels::QrelsTable;
pub use report::ReportWriter;
pub use stats::RunStatistics;
