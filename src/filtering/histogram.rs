//! Per-record word histogram.
use std::collections::HashMap;

use crate::stopwords::IgnoreSet;

/// Tokens shorter than this (in codepoints) carry no signal.
pub const MIN_WORD_CHARS: usize = 4;

/// Token normalization applied before ignore-set lookup and counting.
///
/// Ignore-set terms are never folded, so with [CasePolicy::Lowercase]
/// an uppercase stopword in a list never matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CasePolicy {
    #[default]
    Lowercase,
    Preserve,
}

/// Word counts, iterated in first-insertion order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordHistogram {
    index: HashMap<String, usize>,
    counts: Vec<(String, u64)>,
}

impl WordHistogram {
    /// Counts every whitespace-separated token of `lines` that is long enough
    /// and not in `ignore`.
    pub fn build<'a, I>(lines: I, ignore: &IgnoreSet, case: CasePolicy) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut histogram = Self::default();
        for word in lines.into_iter().flat_map(str::split_whitespace) {
            if word.chars().count() < MIN_WORD_CHARS {
                continue;
            }
            match case {
                CasePolicy::Lowercase => {
                    let word = word.to_lowercase();
                    if !ignore.contains(&word) {
                        histogram.add(&word);
                    }
                }
                CasePolicy::Preserve => {
                    if !ignore.contains(word) {
                        histogram.add(word);
                    }
                }
            }
        }
        histogram
    }

    /// Adds one occurrence of `word`, inserting it if needed.
    pub fn add(&mut self, word: &str) {
        match self.index.get(word) {
            Some(&idx) => self.counts[idx].1 += 1,
            None => {
                self.index.insert(word.to_string(), self.counts.len());
                self.counts.push((word.to_string(), 1));
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.index.get(word).map(|&idx| self.counts[idx].1)
    }

    /// Number of distinct words.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Most frequent word. Ties go to the word inserted first.
    pub fn max(&self) -> Option<(&str, u64)> {
        let mut best: Option<(&str, u64)> = None;
        for (word, count) in &self.counts {
            match best {
                Some((_, c)) if c >= *count => (),
                _ => best = Some((word, *count)),
            }
        }
        best
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(w, c)| (w.as_str(), *c))
    }
}
