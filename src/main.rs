//! # trecsift
//!
//! ```sh
//! trecsift 0.1.0
//! word-dominance noise filter for TREC collections.
//!
//! USAGE:
//!     trecsift <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     filter     Filter a collection
//!     help       Prints this message or the help of the given subcommand(s)
//!     profile    Print the dominance ratio of every record
//! ```
use std::io::Write;
use std::sync::atomic::Ordering;

use structopt::StructOpt;
use trecsift::config::Artifacts;
use trecsift::error::Error;
use trecsift::pipelines::{CorpusFilter, Pipeline, Profile};
use trecsift::processing::ReportWriter;
use trecsift::stopwords::IgnoreSet;

#[macro_use]
extern crate log;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opt = cli::Trecsift::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Trecsift::Filter(f) => {
            let config = f.config();
            let ignore = IgnoreSet::from_files(&f.classification.stopwords);
            let artifacts = Artifacts::new(&f.dst, config.threshold, &f.id);

            let mut pipeline = CorpusFilter::new(f.src, artifacts.clone(), ignore, config);
            if let Some(qrels) = f.qrels {
                pipeline = pipeline.with_qrels(qrels);
            }
            if let Some(stats_json) = f.stats_json {
                pipeline = pipeline.with_stats_json(stats_json);
            }

            // stop between files on ctrl-c, files being written are finished.
            let cancel = pipeline.cancel_flag();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    warn!("Interrupted, finishing files in progress");
                    cancel.store(true, Ordering::Relaxed);
                }
            });

            let summary = tokio::task::spawn_blocking(move || pipeline.run())
                .await
                .map_err(|e| Error::Custom(format!("pipeline task failed: {}", e)))??;

            info!(
                "Report written to {:?}, filtered collection in {:?}",
                artifacts.report, artifacts.docs
            );
            if !summary.false_discards.is_empty() {
                warn!(
                    "{} relevant judgments concern discarded documents",
                    summary.false_discards.len()
                );
            }
        }

        cli::Trecsift::Profile(p) => {
            let ignore = IgnoreSet::from_files(&p.classification.stopwords);
            let summary = Profile::new(p.src.clone(), ignore, p.config()).run()?;

            let stdout = std::io::stdout();
            let mut out = ReportWriter::new(stdout.lock());
            for row in &summary.rows {
                out.row(&row.file, row.doc_id.as_deref().unwrap_or("-"), &row.dominance)?;
            }
            out.mean(summary.mean_ratio(), summary.degenerate())?;
            out.into_inner()?.flush()?;
        }
    };
    Ok(())
}
