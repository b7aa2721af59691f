//! # trecsift
//!
//! Removes noisy records from TREC-style collections.
//!
//! Each record is classified with a word-dominance heuristic: when a single word
//! accounts for too large a share of the record vocabulary, the record is
//! considered noise and left out of the filtered (mirrored) collection.
//! Discarded records can be cross-checked against relevance judgments.
//!
//! ```no_run
//! use std::path::{Path, PathBuf};
//! use trecsift::config::{Artifacts, FilterConfig};
//! use trecsift::pipelines::{CorpusFilter, Pipeline};
//! use trecsift::stopwords::IgnoreSet;
//!
//! let config = FilterConfig::default();
//! let artifacts = Artifacts::new(Path::new("."), config.threshold, "A");
//! let ignore = IgnoreSet::from_files(&["stopwords-fr.txt"]);
//! let summary = CorpusFilter::new(PathBuf::from("Documents/Trec"), artifacts, ignore, config)
//!     .with_qrels(PathBuf::from("qrels/train.txt"))
//!     .run()?;
//! println!("{} records kept", summary.stats.kept());
//! # Ok::<(), trecsift::error::Error>(())
//! ```
pub mod config;
pub mod error;
pub mod filtering;
pub mod io;
pub mod pipelines;
pub mod processing;
pub mod stopwords;
pub mod trec;
