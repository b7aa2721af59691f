//! Relevance judgments (qrels).
//!
//! Lines look like `q06223196 0 doc062200112743 1`: only the
//! `doc<digits> <digits>` pair is used, id first then grade.
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use lazy_static::lazy_static;
use log::{info, warn};
use regex::Regex;

use crate::error::Error;

lazy_static! {
    static ref JUDGMENT: Regex = Regex::new(r"(doc\d+) (\d+)").unwrap();
}

/// Relevance judgments, in file order.
///
/// A document may be judged for several queries: every judgment is kept, and
/// [QrelsTable::grade] gives the highest grade of a document.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QrelsTable {
    judgments: Vec<(String, u32)>,
    grades: BTreeMap<String, u32>,
    skipped: usize,
}

impl QrelsTable {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::FileAccess(path.to_path_buf(), e))?;
        let table = Self::from_reader(BufReader::new(file))?;
        info!(
            "{} judged documents loaded from {:?} ({} lines skipped)",
            table.len(),
            path,
            table.skipped()
        );
        Ok(table)
    }

    /// Parses judgments, skipping malformed lines with a warning.
    ///
    /// Only read failures are returned, a line that is not valid UTF-8 is malformed.
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self, Error> {
        let mut table = Self::default();
        let mut raw = Vec::new();
        let mut nb_line = 0;
        loop {
            raw.clear();
            if reader.read_until(b'\n', &mut raw)? == 0 {
                break;
            }
            nb_line += 1;

            let parsed = std::str::from_utf8(&raw)
                .map_err(|e| Error::QrelsParse(format!("line {}: {}", nb_line, e)))
                .map(str::trim_end)
                .and_then(Self::parse_line);
            match parsed {
                Ok(Some((doc_id, grade))) => table.insert(doc_id, grade),
                Ok(None) => (),
                Err(e) => {
                    warn!("{}", e);
                    table.skipped += 1;
                }
            }
        }
        Ok(table)
    }

    /// `Ok(None)` on blank lines.
    pub fn parse_line(line: &str) -> Result<Option<(&str, u32)>, Error> {
        if line.trim().is_empty() {
            return Ok(None);
        }
        let caps = JUDGMENT
            .captures(line)
            .ok_or_else(|| Error::QrelsParse(line.to_string()))?;
        let doc_id = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        let grade = caps
            .get(2)
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .ok_or_else(|| Error::QrelsParse(line.to_string()))?;
        Ok(Some((doc_id, grade)))
    }

    pub fn insert(&mut self, doc_id: &str, grade: u32) {
        self.judgments.push((doc_id.to_string(), grade));
        self.grades
            .entry(doc_id.to_string())
            .and_modify(|g| *g = (*g).max(grade))
            .or_insert(grade);
    }

    pub fn grade(&self, doc_id: &str) -> Option<u32> {
        self.grades.get(doc_id).copied()
    }

    /// Judgments with a grade above 0, in file order.
    pub fn relevant(&self) -> impl Iterator<Item = (&str, u32)> {
        self.judgments
            .iter()
            .filter(|(_, grade)| *grade > 0)
            .map(|(id, grade)| (id.as_str(), *grade))
    }

    /// Number of judged documents.
    pub fn len(&self) -> usize {
        self.grades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }

    /// Number of judgments, one per well-formed line.
    pub fn nb_judgments(&self) -> usize {
        self.judgments.len()
    }

    /// Number of malformed lines.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}
