//! Ignore-set loading.
//!
//! The ignore-set holds every term that must not be counted when building a
//! record histogram: stopwords, grammatical articles and every ASCII punctuation
//! character. It is built once before a run and then only read.
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::error::Error;

#[derive(Debug, Clone)]
pub struct IgnoreSet {
    terms: HashSet<String>,
    skipped: Vec<PathBuf>,
}

impl Default for IgnoreSet {
    /// Punctuation only.
    fn default() -> Self {
        let terms = (0u8..128)
            .map(char::from)
            .filter(char::is_ascii_punctuation)
            .map(String::from)
            .collect();
        Self {
            terms,
            skipped: Vec::new(),
        }
    }
}

impl IgnoreSet {
    /// Build from word lists (one or more terms per line, whitespace separated).
    ///
    /// Unreadable lists are skipped with a warning and remembered in [IgnoreSet::skipped].
    /// Terms are kept as-is: no case folding happens here.
    pub fn from_files<P: AsRef<Path>>(paths: &[P]) -> Self {
        let mut set = Self::default();
        for path in paths {
            let path = path.as_ref();
            if let Err(e) = set.add_file(path) {
                warn!("Unable to read word list {:?}: {}", path, e);
                set.skipped.push(path.to_path_buf());
            }
        }
        info!("{} words to ignore retrieved", set.len());
        set
    }

    /// Adds nothing unless the whole list could be read.
    fn add_file(&mut self, path: &Path) -> Result<(), Error> {
        let reader = BufReader::new(File::open(path)?);
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
        for line in &lines {
            self.extend_from_line(line);
        }
        Ok(())
    }

    fn extend_from_line(&mut self, line: &str) {
        self.terms
            .extend(line.split_whitespace().map(String::from));
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Word lists that could not be loaded.
    pub fn skipped(&self) -> &[PathBuf] {
        &self.skipped
    }
}

impl<S: Into<String>> FromIterator<S> for IgnoreSet {
    /// Punctuation plus the provided terms.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::default();
        set.terms.extend(iter.into_iter().map(Into::into));
        set
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn punctuation_only() {
        let set = IgnoreSet::default();
        assert_eq!(set.len(), 32);
        assert!(set.contains("!"));
        assert!(set.contains("~"));
        assert!(!set.contains("le"));
    }

    #[test]
    fn load_lists() {
        let dir = tempfile::tempdir().unwrap();
        let stopwords = dir.path().join("stopwords.txt");
        let articles = dir.path().join("articles.txt");
        let mut f = File::create(&stopwords).unwrap();
        writeln!(f, "  alors  \naussi\n\n").unwrap();
        let mut f = File::create(&articles).unwrap();
        writeln!(f, "les des\nLes").unwrap();

        let set = IgnoreSet::from_files(&[stopwords, articles]);
        for term in ["alors", "aussi", "les", "des", "Les", ","] {
            assert!(set.contains(term), "{} missing", term);
        }
        assert!(!set.contains("  alors  "));
        assert_eq!(set.len(), 32 + 5);
        assert!(set.skipped().is_empty());
    }

    #[test]
    fn missing_list_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().join("ok.txt");
        std::fs::write(&existing, "lorem\n").unwrap();
        let missing = dir.path().join("nope.txt");

        let set = IgnoreSet::from_files(&[missing.clone(), existing]);
        assert!(set.contains("lorem"));
        assert_eq!(set.skipped(), &[missing]);
    }

    #[test]
    fn undecodable_list_adds_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let latin1 = dir.path().join("latin1.txt");
        std::fs::write(&latin1, b"alors\nd\xe9j\xe0\naussi\n").unwrap();

        let set = IgnoreSet::from_files(&[latin1.clone()]);
        assert!(!set.contains("alors"));
        assert!(!set.contains("aussi"));
        assert_eq!(set.len(), 32);
        assert_eq!(set.skipped(), &[latin1]);
    }
}
