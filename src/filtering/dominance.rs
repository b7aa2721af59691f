//! Word-dominance classifier.
//!
//! For each record we build a [WordHistogram] of its content and compute the
//! dominance ratio: count of the most frequent word divided by the number of
//! distinct words. Records whose ratio exceeds the threshold are discarded,
//! being most likely boilerplate, markup leftovers or spam.
use serde::Serialize;

use super::histogram::{CasePolicy, WordHistogram};
use crate::stopwords::IgnoreSet;
use crate::trec::DocumentRecord;

pub const DEFAULT_THRESHOLD: f64 = 0.15;

/// What to do with records that have no countable word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegeneratePolicy {
    Keep,
    #[default]
    Discard,
}

/// Most frequent word of a record. `word` is [None] for degenerate records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dominance {
    pub word: Option<String>,
    pub count: u64,
    pub distinct: usize,
}

impl Dominance {
    fn from_histogram(histogram: &WordHistogram) -> Self {
        match histogram.max() {
            Some((word, count)) => Self {
                word: Some(word.to_string()),
                count,
                distinct: histogram.distinct(),
            },
            None => Self {
                word: None,
                count: 0,
                distinct: 0,
            },
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.distinct == 0
    }

    /// `count / distinct`, 0 for degenerate records.
    pub fn ratio(&self) -> f64 {
        if self.is_degenerate() {
            0.0
        } else {
            self.count as f64 / self.distinct as f64
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Keep,
    Discard(Dominance),
}

impl Verdict {
    pub fn is_keep(&self) -> bool {
        matches!(self, Verdict::Keep)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DominanceFilter {
    threshold: f64,
    case: CasePolicy,
    degenerate: DegeneratePolicy,
}

impl Default for DominanceFilter {
    /// Threshold of 0.15, lowercasing, degenerate records discarded.
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            case: CasePolicy::default(),
            degenerate: DegeneratePolicy::default(),
        }
    }
}

impl DominanceFilter {
    pub fn new(threshold: f64, case: CasePolicy, degenerate: DegeneratePolicy) -> Self {
        Self {
            threshold,
            case,
            degenerate,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn case(&self) -> CasePolicy {
        self.case
    }

    pub fn histogram(&self, record: &DocumentRecord, ignore: &IgnoreSet) -> WordHistogram {
        WordHistogram::build(
            record.content_lines().iter().map(String::as_str),
            ignore,
            self.case,
        )
    }

    /// Dominant word of the record, without applying the threshold.
    pub fn measure(&self, record: &DocumentRecord, ignore: &IgnoreSet) -> Dominance {
        Dominance::from_histogram(&self.histogram(record, ignore))
    }

    pub fn classify(&self, record: &DocumentRecord, ignore: &IgnoreSet) -> Verdict {
        let dominance = self.measure(record, ignore);
        if dominance.is_degenerate() {
            return match self.degenerate {
                DegeneratePolicy::Keep => Verdict::Keep,
                DegeneratePolicy::Discard => Verdict::Discard(dominance),
            };
        }

        if dominance.ratio() > self.threshold {
            Verdict::Discard(dominance)
        } else {
            Verdict::Keep
        }
    }
}
