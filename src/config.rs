//! Run configuration and artifact naming.
use std::path::{Path, PathBuf};

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::Error;
use crate::filtering::{CasePolicy, DegeneratePolicy, DominanceFilter};
use crate::filtering::dominance::DEFAULT_THRESHOLD;
use crate::trec::Framing;

/// Parameters shared by the filtering and profiling pipelines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterConfig {
    pub threshold: f64,
    pub framing: Framing,
    pub case: CasePolicy,
    pub degenerate: DegeneratePolicy,
    /// Worker threads. [None] lets rayon decide.
    pub threads: Option<usize>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            framing: Framing::default(),
            case: CasePolicy::default(),
            degenerate: DegeneratePolicy::default(),
            threads: None,
        }
    }
}

impl FilterConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(Error::Configuration(format!(
                "threshold must be a non-negative number, got {}",
                self.threshold
            )));
        }
        if self.threads == Some(0) {
            return Err(Error::Configuration(
                "number of threads must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn filter(&self) -> DominanceFilter {
        DominanceFilter::new(self.threshold, self.case, self.degenerate)
    }

    pub fn thread_pool(&self) -> Result<ThreadPool, Error> {
        let mut builder = ThreadPoolBuilder::new();
        if let Some(threads) = self.threads {
            builder = builder.num_threads(threads);
        }
        builder
            .build()
            .map_err(|e| Error::Configuration(format!("could not build thread pool: {}", e)))
    }
}

/// Where a filtering run writes its results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    /// Mirrored collection.
    pub docs: PathBuf,
    /// TSV report.
    pub report: PathBuf,
}

impl Artifacts {
    /// `<root>/docs_parsed_<id>` and `<root>/res-<threshold>-<id>.txt`,
    /// without the `_<id>`/`-<id>` suffixes when `id` is empty.
    pub fn new(root: &Path, threshold: f64, id: &str) -> Self {
        let (docs, report) = if id.is_empty() {
            ("docs_parsed".to_string(), format!("res-{}.txt", threshold))
        } else {
            (
                format!("docs_parsed_{}", id),
                format!("res-{}-{}.txt", threshold, id),
            )
        };
        Self {
            docs: root.join(docs),
            report: root.join(report),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = FilterConfig::default();
        assert_eq!(config.threshold, 0.15);
        assert_eq!(config.framing, Framing::TagDelimited);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn invalid_values() {
        for threshold in [-0.1, f64::NAN, f64::INFINITY] {
            let config = FilterConfig {
                threshold,
                ..Default::default()
            };
            assert!(matches!(config.validate(), Err(Error::Configuration(_))));
        }
        let config = FilterConfig {
            threads: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn artifact_names() {
        let root = Path::new("out");
        let a = Artifacts::new(root, 0.15, "A");
        assert_eq!(a.docs, root.join("docs_parsed_A"));
        assert_eq!(a.report, root.join("res-0.15-A.txt"));

        let a = Artifacts::new(root, 0.2, "");
        assert_eq!(a.docs, root.join("docs_parsed"));
        assert_eq!(a.report, root.join("res-0.2.txt"));
    }
}
