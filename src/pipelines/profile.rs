//! Dominance ratio profiling.
//!
//! Measures every record of a collection without thresholding nor writing
//! anything, in order to pick a sensible threshold for [super::CorpusFilter].
use std::path::PathBuf;

use log::{info, warn};
use rayon::prelude::*;

use super::collection::{collection_files, file_name};
use super::pipeline::Pipeline;
use crate::config::FilterConfig;
use crate::error::Error;
use crate::filtering::{Dominance, DominanceFilter};
use crate::stopwords::IgnoreSet;
use crate::trec::Segmenter;

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRow {
    pub file: String,
    pub doc_id: Option<String>,
    pub dominance: Dominance,
}

#[derive(Debug, Clone, Default)]
pub struct ProfileSummary {
    /// Every measured record, in file then record order.
    pub rows: Vec<ProfileRow>,
    pub errors: usize,
}

impl ProfileSummary {
    /// Mean ratio over records that have countable words.
    pub fn mean_ratio(&self) -> Option<f64> {
        let ratios: Vec<f64> = self
            .rows
            .iter()
            .filter(|row| !row.dominance.is_degenerate())
            .map(|row| row.dominance.ratio())
            .collect();
        if ratios.is_empty() {
            None
        } else {
            Some(ratios.iter().sum::<f64>() / ratios.len() as f64)
        }
    }

    pub fn degenerate(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.dominance.is_degenerate())
            .count()
    }
}

pub struct Profile {
    src: PathBuf,
    ignore: IgnoreSet,
    config: FilterConfig,
}

impl Profile {
    pub fn new(src: PathBuf, ignore: IgnoreSet, config: FilterConfig) -> Self {
        Self {
            src,
            ignore,
            config,
        }
    }

    fn profile_file(
        path: &std::path::Path,
        filter: &DominanceFilter,
        ignore: &IgnoreSet,
        config: &FilterConfig,
    ) -> (Vec<ProfileRow>, usize) {
        let name = file_name(path);
        let records = match Segmenter::from_path(path, config.framing) {
            Ok(records) => records,
            Err(e) => {
                warn!("{}: {}", name, e);
                return (Vec::new(), 1);
            }
        };

        let mut rows = Vec::new();
        let mut errors = 0;
        for record in records {
            match record {
                Ok(record) => rows.push(ProfileRow {
                    file: name.clone(),
                    doc_id: record.doc_id().map(String::from),
                    dominance: filter.measure(&record, ignore),
                }),
                Err(e) => {
                    warn!("{}: {}", name, e);
                    errors += 1;
                }
            }
        }
        (rows, errors)
    }
}

impl Pipeline<ProfileSummary> for Profile {
    fn run(&self) -> Result<ProfileSummary, Error> {
        self.config.validate()?;
        let files = collection_files(&self.src)?;
        let filter = self.config.filter();
        let pool = self.config.thread_pool()?;

        let per_file: Vec<(Vec<ProfileRow>, usize)> = pool.install(|| {
            files
                .par_iter()
                .map(|path| Self::profile_file(path, &filter, &self.ignore, &self.config))
                .collect()
        });

        let mut summary = ProfileSummary {
            errors: self.ignore.skipped().len(),
            ..Default::default()
        };
        for (rows, errors) in per_file {
            summary.rows.extend(rows);
            summary.errors += errors;
        }

        info!(
            "{} records profiled in {} files",
            summary.rows.len(),
            files.len()
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_collection() {
        let src = tempfile::tempdir().unwrap();
        std::fs::write(
            src.path().join("a.txt"),
            "<DOC>\n<DOCID>doc1</DOCID>\n<TEXT>\nspam spam eggs\n</TEXT>\n</DOC>\n\
             <DOC>\n<DOCID>doc2</DOCID>\n<TEXT>\na b c\n</TEXT>\n</DOC>\n",
        )
        .unwrap();
        std::fs::write(
            src.path().join("b.txt"),
            "<DOC>\n<DOCID>doc3</DOCID>\n<TEXT>\nalpha bravo charlie delta\n</TEXT>\n</DOC>\n",
        )
        .unwrap();

        let summary = Profile::new(
            src.path().to_path_buf(),
            IgnoreSet::default(),
            FilterConfig::default(),
        )
        .run()
        .unwrap();

        let ids: Vec<_> = summary
            .rows
            .iter()
            .map(|row| row.doc_id.as_deref().unwrap())
            .collect();
        assert_eq!(ids, vec!["doc1", "doc2", "doc3"]);
        assert_eq!(summary.degenerate(), 1);
        // (2/2 + 1/4) / 2
        assert_eq!(summary.mean_ratio(), Some(0.625));
        assert_eq!(summary.errors, 0);
    }
}
