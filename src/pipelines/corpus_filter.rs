//! Collection filtering pipeline
//!
//! # Processing
//! 1. The output directory is emptied (or created). Failing to do so aborts the run.
//! 1. Files of the collection are dispatched on a rayon pool. Each worker segments
//!    its file into records, classifies them and writes the kept ones to a mirrored file.
//!    Discarded records are collected in a per-file [FileOutcome].
//! 1. Outcomes are merged in file name order: discard rows are written to the report and
//!    the [DiscardTable] is filled (a doc id discarded twice keeps its last entry).
//! 1. If relevance judgments are provided, relevant documents that were discarded are reported.
//! 1. The summary line (and optional JSON statistics) closes the run.
//!
//! Recovered errors (unreadable file, malformed record, bad qrels line) are logged
//! and counted, they never stop the run.
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, error, info, warn};
use rayon::prelude::*;

use super::collection::{collection_files, file_name};
use super::pipeline::Pipeline;
use crate::config::{Artifacts, FilterConfig};
use crate::error::Error;
use crate::filtering::{DominanceFilter, Verdict};
use crate::io::{recreate_dir, MirrorWriter, WriterTrait};
use crate::processing::{
    false_discards, DiscardEntry, DiscardTable, QrelsTable, ReportWriter, RunStatistics,
};
use crate::stopwords::IgnoreSet;
use crate::trec::Segmenter;

/// Result of filtering one file.
#[derive(Debug, Default, Clone)]
pub struct FileOutcome {
    pub name: String,
    pub records: usize,
    pub kept: usize,
    /// Discarded records, in file order.
    pub discards: Vec<DiscardEntry>,
    pub errors: usize,
    /// Skipped because the run was cancelled.
    pub cancelled: bool,
}

impl FileOutcome {
    fn new(name: String) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }
}

/// What a filtering run hands back.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub stats: RunStatistics,
    pub discards: DiscardTable,
    /// Discarded documents that are relevant according to the judgments.
    pub false_discards: Vec<DiscardEntry>,
    /// Files skipped because of cancellation.
    pub cancelled_files: usize,
}

pub struct CorpusFilter {
    src: PathBuf,
    artifacts: Artifacts,
    qrels: Option<PathBuf>,
    stats_json: Option<PathBuf>,
    ignore: IgnoreSet,
    config: FilterConfig,
    cancel: Arc<AtomicBool>,
}

impl CorpusFilter {
    pub fn new(src: PathBuf, artifacts: Artifacts, ignore: IgnoreSet, config: FilterConfig) -> Self {
        debug!("filtering {:?} with {:?}", src, config);
        Self {
            src,
            artifacts,
            qrels: None,
            stats_json: None,
            ignore,
            config,
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Enable the cross-check against relevance judgments.
    pub fn with_qrels(mut self, qrels: PathBuf) -> Self {
        self.qrels = Some(qrels);
        self
    }

    /// Also write [RunStatistics] as JSON to `path`.
    pub fn with_stats_json(mut self, path: PathBuf) -> Self {
        self.stats_json = Some(path);
        self
    }

    /// Flag checked before each file. Setting it stops the run between files.
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        self.cancel.clone()
    }

    /// Filters one file. Never fails: problems are logged and counted in the outcome.
    fn process_file(
        path: &Path,
        dst: &Path,
        filter: &DominanceFilter,
        ignore: &IgnoreSet,
        config: &FilterConfig,
        cancel: &AtomicBool,
    ) -> FileOutcome {
        let mut outcome = FileOutcome::new(file_name(path));
        if cancel.load(Ordering::Relaxed) {
            outcome.cancelled = true;
            return outcome;
        }

        info!("working on file: {:?}", path);
        if let Err(e) = Self::filter_file(path, dst, filter, ignore, config, &mut outcome) {
            warn!("{}: {}", outcome.name, e);
            outcome.errors += 1;
        }
        info!(
            "{}: {} records, {} kept, {} discarded",
            outcome.name,
            outcome.records,
            outcome.kept,
            outcome.discards.len()
        );
        outcome
    }

    /// Errors returned here concern the whole file.
    fn filter_file(
        path: &Path,
        dst: &Path,
        filter: &DominanceFilter,
        ignore: &IgnoreSet,
        config: &FilterConfig,
        outcome: &mut FileOutcome,
    ) -> Result<(), Error> {
        let records = Segmenter::from_path(path, config.framing)?;
        let mut writer = MirrorWriter::new(dst, &outcome.name)?;

        for record in records {
            outcome.records += 1;
            let record = match record {
                Ok(record) => record,
                Err(e @ Error::RecordParse(_)) => {
                    warn!("{} doc {}: {}", outcome.name, outcome.records, e);
                    outcome.errors += 1;
                    continue;
                }
                Err(e) => {
                    // the stream is unusable past a read error, keep what we have.
                    outcome.records -= 1;
                    writer.close()?;
                    return Err(Error::FileAccess(path.to_path_buf(), to_io(e)));
                }
            };

            match filter.classify(&record, ignore) {
                Verdict::Keep => {
                    writer.write_single(&record)?;
                    outcome.kept += 1;
                }
                Verdict::Discard(dominance) => match record.require_doc_id() {
                    Ok(doc_id) => outcome
                        .discards
                        .push(DiscardEntry::new(&outcome.name, doc_id, dominance)),
                    Err(e) => {
                        warn!("{} doc {}: {}", outcome.name, outcome.records, e);
                        outcome.errors += 1;
                    }
                },
            }
        }

        writer.close()
    }

    /// Writes the cross-check section, returning the false discards.
    fn audit<W: std::io::Write>(
        &self,
        qrels: &Path,
        discards: &DiscardTable,
        report: &mut ReportWriter<W>,
        errors: &mut usize,
    ) -> Result<Vec<DiscardEntry>, Error> {
        let table = match QrelsTable::from_path(qrels) {
            Ok(table) => table,
            Err(e) => {
                warn!("Skipping comparison with qrels: {}", e);
                *errors += 1;
                return Ok(Vec::new());
            }
        };
        *errors += table.skipped();

        report.qrels_section()?;
        let found: Vec<DiscardEntry> = false_discards(discards, &table)
            .into_iter()
            .cloned()
            .collect();
        for entry in &found {
            report.discard(entry)?;
        }
        Ok(found)
    }
}

fn to_io(e: Error) -> std::io::Error {
    match e {
        Error::Io(e) => e,
        other => std::io::Error::new(std::io::ErrorKind::Other, other.to_string()),
    }
}

impl Pipeline<RunSummary> for CorpusFilter {
    fn run(&self) -> Result<RunSummary, Error> {
        self.config.validate()?;
        let files = collection_files(&self.src)?;
        info!("{} files to analyze in {:?}", files.len(), self.src);

        recreate_dir(&self.artifacts.docs)?;
        let mut report = ReportWriter::from_path(&self.artifacts.report)?;
        report.header()?;

        let filter = self.config.filter();
        let dst = self.artifacts.docs.as_path();
        let pool = self.config.thread_pool()?;

        // collect keeps the order of `files`.
        let outcomes: Vec<FileOutcome> = pool.install(|| {
            files
                .par_iter()
                .map(|path| {
                    Self::process_file(path, dst, &filter, &self.ignore, &self.config, &self.cancel)
                })
                .collect()
        });

        let (mut nb_files, mut records, mut kept, mut discarded) = (0, 0, 0, 0);
        let mut errors = self.ignore.skipped().len();
        let mut cancelled_files = 0;
        let mut discards = DiscardTable::default();

        for outcome in outcomes {
            if outcome.cancelled {
                cancelled_files += 1;
                continue;
            }
            nb_files += 1;
            records += outcome.records;
            kept += outcome.kept;
            errors += outcome.errors;
            discarded += outcome.discards.len();
            for entry in outcome.discards {
                report.discard(&entry)?;
                if let Some(previous) = discards.insert(entry) {
                    debug!(
                        "{} discarded again (previously in {})",
                        previous.doc_id, previous.source_file
                    );
                }
            }
        }

        if cancelled_files > 0 {
            error!("Run cancelled: {} files left unprocessed", cancelled_files);
        }

        let false_discards = match &self.qrels {
            Some(qrels) => self.audit(qrels, &discards, &mut report, &mut errors)?,
            None => Vec::new(),
        };

        let stats = RunStatistics::new(nb_files, records, kept, discarded, errors);
        report.summary(&stats)?;
        report.into_inner()?;

        if let Some(path) = &self.stats_json {
            let file = File::create(path).map_err(|e| Error::ResourceSetup(path.clone(), e))?;
            serde_json::to_writer_pretty(file, &stats)?;
        }

        info!(
            "{} files analyzed, {} documents analyzed, {} kept, {} removed, {} errors",
            stats.files(),
            stats.records(),
            stats.kept(),
            stats.discarded(),
            stats.errors()
        );

        Ok(RunSummary {
            stats,
            discards,
            false_discards,
            cancelled_files,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &str = "<DOC>
<DOCNO>doc001</DOCNO>
<DOCID>doc001</DOCID>
<TEXT>
alpha bravo charlie delta echo foxtrot golf hotel india juliett
</TEXT>
</DOC>
";

    const SPAM: &str = "<DOC>
<DOCNO>doc002</DOCNO>
<DOCID>doc002</DOCID>
<TEXT>
casino casino casino casino winner
</TEXT>
</DOC>
";

    const NO_ID: &str = "<DOC>
<DOCNO>doc003</DOCNO>
<TEXT>
casino casino casino
</TEXT>
</DOC>
";

    fn process(input: &str) -> (FileOutcome, String) {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        let path = src.path().join("collector.txt");
        std::fs::write(&path, input).unwrap();

        let config = FilterConfig::default();
        let outcome = CorpusFilter::process_file(
            &path,
            dst.path(),
            &config.filter(),
            &IgnoreSet::default(),
            &config,
            &AtomicBool::new(false),
        );
        let written = std::fs::read_to_string(dst.path().join("collector.txt")).unwrap_or_default();
        (outcome, written)
    }

    #[test]
    fn keeps_and_discards() {
        let (outcome, written) = process(&format!("{GOOD}{SPAM}"));
        assert_eq!(outcome.records, 2);
        assert_eq!(outcome.kept, 1);
        assert_eq!(outcome.errors, 0);
        assert_eq!(outcome.discards.len(), 1);
        assert_eq!(outcome.discards[0].doc_id, "doc002");
        assert_eq!(outcome.discards[0].dominance.word.as_deref(), Some("casino"));
        assert_eq!(written, GOOD);
    }

    #[test]
    fn discarded_record_without_id_is_an_error() {
        let (outcome, written) = process(&format!("{NO_ID}{GOOD}"));
        assert_eq!(outcome.records, 2);
        assert_eq!(outcome.kept, 1);
        assert_eq!(outcome.errors, 1);
        assert!(outcome.discards.is_empty());
        assert_eq!(written, GOOD);
    }

    #[test]
    fn truncated_record_is_an_error() {
        let (outcome, written) = process(&format!("{GOOD}<DOC>\n<DOCID>doc9</DOCID>\n"));
        assert_eq!(outcome.records, 2);
        assert_eq!(outcome.kept, 1);
        assert_eq!(outcome.errors, 1);
        assert_eq!(written, GOOD);
    }

    #[test]
    fn cancelled_file_is_untouched() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        let path = src.path().join("collector.txt");
        std::fs::write(&path, GOOD).unwrap();

        let config = FilterConfig::default();
        let outcome = CorpusFilter::process_file(
            &path,
            dst.path(),
            &config.filter(),
            &IgnoreSet::default(),
            &config,
            &AtomicBool::new(true),
        );
        assert!(outcome.cancelled);
        assert_eq!(outcome.records, 0);
        assert_eq!(std::fs::read_dir(dst.path()).unwrap().count(), 0);
    }

    #[test]
    fn missing_file_is_recovered() {
        let dst = tempfile::tempdir().unwrap();
        let config = FilterConfig::default();
        let outcome = CorpusFilter::process_file(
            &dst.path().join("nope.txt"),
            dst.path(),
            &config.filter(),
            &IgnoreSet::default(),
            &config,
            &AtomicBool::new(false),
        );
        assert_eq!(outcome.errors, 1);
        assert_eq!(outcome.records, 0);
    }
}
