//! Run statistics.
use serde::Serialize;

/// Aggregate counters of a run. Built by the pipeline once every file is done.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunStatistics {
    files: usize,
    records: usize,
    kept: usize,
    discarded: usize,
    errors: usize,
}

impl RunStatistics {
    pub fn new(files: usize, records: usize, kept: usize, discarded: usize, errors: usize) -> Self {
        Self {
            files,
            records,
            kept,
            discarded,
            errors,
        }
    }

    pub fn files(&self) -> usize {
        self.files
    }

    /// Records read, including the ones that could not be classified.
    pub fn records(&self) -> usize {
        self.records
    }

    pub fn kept(&self) -> usize {
        self.kept
    }

    pub fn discarded(&self) -> usize {
        self.discarded
    }

    /// Recovered errors (files, records, word lists, qrels lines).
    pub fn errors(&self) -> usize {
        self.errors
    }

    pub fn kept_fraction(&self) -> f64 {
        Self::fraction(self.kept, self.records)
    }

    pub fn discarded_fraction(&self) -> f64 {
        Self::fraction(self.discarded, self.records)
    }

    fn fraction(n: usize, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            n as f64 / total as f64
        }
    }
}
