//! Tab-separated run report.
//!
//! ```text
//! FILE    DOC     WORD    COUNT   RATIO
//! a.txt   doc12   ipsum   3/3     1,0
//! # qrels
//! a.txt   doc12   ipsum   3/3     1,0
//! 2 files analyzed, 10 documents analyzed, 9=0,9 documents kept, 1=0,1 documents removed, 0 errors
//! ```
use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};

use super::discard::DiscardEntry;
use super::stats::RunStatistics;
use crate::error::Error;
use crate::filtering::Dominance;

pub const HEADER: [&str; 5] = ["FILE", "DOC", "WORD", "COUNT", "RATIO"];
pub const QRELS_SECTION: &str = "# qrels";

/// Rounds to 4 decimals and uses a comma as decimal separator,
/// always printing a fractional part (`1,0`, `0,3333`).
pub fn format_ratio(ratio: f64) -> String {
    let rounded = (ratio * 10_000.0).round() / 10_000.0;
    let mut s = rounded.to_string();
    if !s.contains('.') {
        s.push_str(".0");
    }
    s.replace('.', ",")
}

pub struct ReportWriter<W: Write> {
    out: Writer<W>,
}

impl ReportWriter<File> {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| Error::ResourceSetup(path.to_path_buf(), e))?;
        Ok(Self::new(file))
    }
}

impl<W: Write> ReportWriter<W> {
    pub fn new(inner: W) -> Self {
        let out = WriterBuilder::new()
            .delimiter(b'\t')
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .flexible(true)
            .has_headers(false)
            .from_writer(inner);
        Self { out }
    }

    pub fn header(&mut self) -> Result<(), Error> {
        self.out.write_record(HEADER)?;
        Ok(())
    }

    /// One `file doc word count/distinct ratio` row.
    pub fn row(&mut self, file: &str, doc_id: &str, dominance: &Dominance) -> Result<(), Error> {
        self.out.write_record([
            file,
            doc_id,
            dominance.word.as_deref().unwrap_or("-"),
            format!("{}/{}", dominance.count, dominance.distinct).as_str(),
            format_ratio(dominance.ratio()).as_str(),
        ])?;
        Ok(())
    }

    pub fn discard(&mut self, entry: &DiscardEntry) -> Result<(), Error> {
        self.row(&entry.source_file, &entry.doc_id, &entry.dominance)
    }

    pub fn qrels_section(&mut self) -> Result<(), Error> {
        self.out.write_record([QRELS_SECTION])?;
        Ok(())
    }

    pub fn summary(&mut self, stats: &RunStatistics) -> Result<(), Error> {
        let line = format!(
            "{} files analyzed, {} documents analyzed, {}={} documents kept, {}={} documents removed, {} errors",
            stats.files(),
            stats.records(),
            stats.kept(),
            format_ratio(stats.kept_fraction()),
            stats.discarded(),
            format_ratio(stats.discarded_fraction()),
            stats.errors(),
        );
        self.out.write_record([line])?;
        Ok(())
    }

    /// Closing line of a profiling run.
    pub fn mean(&mut self, mean: Option<f64>, degenerate: usize) -> Result<(), Error> {
        let mean = mean.map_or_else(|| "-".to_string(), format_ratio);
        let line = format!("mean ratio {} ({} records without countable words)", mean, degenerate);
        self.out.write_record([line])?;
        Ok(())
    }

    pub fn into_inner(self) -> Result<W, Error> {
        self.out
            .into_inner()
            .map_err(|e| Error::Io(e.into_error()))
    }
}
