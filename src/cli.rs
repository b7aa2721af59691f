//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;
use trecsift::config::FilterConfig;
use trecsift::filtering::{CasePolicy, DegeneratePolicy};
use trecsift::trec::Framing;

#[derive(Debug, StructOpt)]
#[structopt(name = "trecsift", about = "word-dominance noise filter for TREC collections.")]
/// Holds every command that is callable by the `trecsift` command.
pub enum Trecsift {
    #[structopt(about = "Filter a collection")]
    Filter(Filter),
    #[structopt(about = "Print the dominance ratio of every record")]
    Profile(Profile),
}

/// Options shared by every command.
#[derive(Debug, StructOpt)]
pub struct Classification {
    #[structopt(
        short = "f",
        long = "stopwords",
        parse(from_os_str),
        help = "files of words to ignore (one or more per line)"
    )]
    pub stopwords: Vec<PathBuf>,
    #[structopt(
        long = "framing",
        default_value = "tags",
        help = "record framing: `tags` (</DOC> delimited) or `fixed` (7 lines per record, regular files only)"
    )]
    pub framing: Framing,
    #[structopt(long = "case-sensitive", help = "do not lowercase words before counting")]
    pub case_sensitive: bool,
    #[structopt(short = "j", long = "threads", help = "number of worker threads")]
    pub threads: Option<usize>,
}

impl Classification {
    fn case(&self) -> CasePolicy {
        if self.case_sensitive {
            CasePolicy::Preserve
        } else {
            CasePolicy::Lowercase
        }
    }
}

#[derive(Debug, StructOpt)]
/// Filter command and parameters.
///
/// ```sh
/// trecsift-filter 0.1.0
/// Filter a collection
///
/// USAGE:
///     trecsift filter [FLAGS] [OPTIONS] <src>
///
/// ARGS:
///     <src>    folder containing the collection files
/// ```
pub struct Filter {
    #[structopt(parse(from_os_str), help = "folder containing the collection files")]
    pub src: PathBuf,
    #[structopt(short = "q", long = "qrels", parse(from_os_str), help = "relevance judgments")]
    pub qrels: Option<PathBuf>,
    #[structopt(short = "i", long = "id", default_value = "", help = "identifies the results")]
    pub id: String,
    #[structopt(short = "t", long = "threshold", default_value = "0.15")]
    pub threshold: f64,
    #[structopt(long = "keep-empty", help = "keep records without any countable word")]
    pub keep_empty: bool,
    #[structopt(
        short = "o",
        long = "output",
        parse(from_os_str),
        default_value = ".",
        help = "where results are written"
    )]
    pub dst: PathBuf,
    #[structopt(long = "stats-json", parse(from_os_str), help = "also write statistics as json")]
    pub stats_json: Option<PathBuf>,
    #[structopt(flatten)]
    pub classification: Classification,
}

impl Filter {
    pub fn config(&self) -> FilterConfig {
        FilterConfig {
            threshold: self.threshold,
            framing: self.classification.framing,
            case: self.classification.case(),
            degenerate: if self.keep_empty {
                DegeneratePolicy::Keep
            } else {
                DegeneratePolicy::Discard
            },
            threads: self.classification.threads,
        }
    }
}

#[derive(Debug, StructOpt)]
/// Profile command and parameters.
pub struct Profile {
    #[structopt(parse(from_os_str), help = "folder containing the collection files")]
    pub src: PathBuf,
    #[structopt(flatten)]
    pub classification: Classification,
}

impl Profile {
    pub fn config(&self) -> FilterConfig {
        FilterConfig {
            framing: self.classification.framing,
            case: self.classification.case(),
            threads: self.classification.threads,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_filter() {
        let opt = Trecsift::from_iter_safe(vec![
            "trecsift", "filter", "docs", "-q", "train.txt", "-i", "A", "-t", "0.2", "--framing",
            "fixed", "--case-sensitive", "-f", "stop.txt", "articles.txt",
        ])
        .unwrap();
        match opt {
            Trecsift::Filter(f) => {
                assert_eq!(f.src, PathBuf::from("docs"));
                assert_eq!(f.qrels, Some(PathBuf::from("train.txt")));
                assert_eq!(f.id, "A");
                assert_eq!(f.classification.stopwords.len(), 2);
                let config = f.config();
                assert_eq!(config.threshold, 0.2);
                assert_eq!(config.framing, Framing::FixedArity);
                assert_eq!(config.case, CasePolicy::Preserve);
                assert_eq!(config.degenerate, DegeneratePolicy::Discard);
            }
            _ => panic!("expected filter"),
        }
    }

    #[test]
    fn src_is_required() {
        assert!(Trecsift::from_iter_safe(vec!["trecsift", "filter"]).is_err());
        assert!(Trecsift::from_iter_safe(vec![
            "trecsift", "filter", "docs", "--framing", "lines"
        ]).is_err());
    }
}
