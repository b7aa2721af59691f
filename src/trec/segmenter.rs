/*! Record segmentation.

Turns the line stream of one collection file into [DocumentRecord]s.
Two framings are supported:

- [Framing::TagDelimited] scans for `</DOC>` and tolerates records of any length.
- [Framing::FixedArity] assumes every record spans exactly [RECORD_LINES] lines.
  A single irregular record shifts every following boundary of the file, so it
  should only be used on collections known to be regular.
!*/
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use log::debug;

use super::record::{is_structural, DocumentRecord, CLOSE_DOC, CLOSE_TEXT};
use crate::error::Error;

/// Number of physical lines of a well-formed record.
pub const RECORD_LINES: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Framing {
    FixedArity,
    #[default]
    TagDelimited,
}

impl FromStr for Framing {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fixed" => Ok(Framing::FixedArity),
            "tags" => Ok(Framing::TagDelimited),
            other => Err(Error::Configuration(format!(
                "unknown framing {:?} (expected `tags` or `fixed`)",
                other
            ))),
        }
    }
}

impl fmt::Display for Framing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Framing::FixedArity => write!(f, "fixed"),
            Framing::TagDelimited => write!(f, "tags"),
        }
    }
}

/// Single forward pass over a reader, yielding records.
///
/// A record that is not valid UTF-8 yields an [Error::RecordParse] and the
/// following records are still read. A record truncated by end of stream also
/// yields an [Error::RecordParse]. A read failure yields an [Error::Io], then
/// the iteration stops.
pub struct Segmenter<R> {
    reader: R,
    framing: Framing,
    done: bool,
}

impl Segmenter<BufReader<File>> {
    pub fn from_path<P: AsRef<Path>>(path: P, framing: Framing) -> Result<Self, Error> {
        let path = path.as_ref();
        let file =
            File::open(path).map_err(|e| Error::FileAccess(path.to_path_buf(), e))?;
        Ok(Self::new(BufReader::new(file), framing))
    }
}

impl<R: BufRead> Segmenter<R> {
    pub fn new(reader: R, framing: Framing) -> Self {
        Self {
            reader,
            framing,
            done: false,
        }
    }

    fn next_fixed(&mut self) -> Result<Option<String>, Error> {
        let mut doc = Vec::new();
        let mut nb_lines = 0;
        while nb_lines < RECORD_LINES {
            if self.reader.read_until(b'\n', &mut doc)? == 0 {
                return Self::truncated(&String::from_utf8_lossy(&doc), false);
            }
            nb_lines += 1;
        }
        String::from_utf8(doc)
            .map(Some)
            .map_err(|e| Self::undecodable(&String::from_utf8_lossy(e.as_bytes())))
    }

    fn next_tagged(&mut self) -> Result<Option<String>, Error> {
        let mut doc = String::new();
        let mut raw = Vec::new();
        let mut invalid = false;
        loop {
            raw.clear();
            if self.reader.read_until(b'\n', &mut raw)? == 0 {
                return Self::truncated(&doc, invalid);
            }

            // tags are ASCII: an undecodable line is still scanned for the end
            // of its record.
            let line = match std::str::from_utf8(&raw) {
                Ok(line) => line,
                Err(_) => {
                    invalid = true;
                    if String::from_utf8_lossy(&raw).contains(CLOSE_DOC) {
                        return Err(Self::undecodable(&doc));
                    }
                    continue;
                }
            };

            // text lines lose their trailing whitespace (newline included),
            // the closing text tag gets it back.
            if !is_structural(line) {
                doc.push_str(line.trim_end());
            } else if line.contains(CLOSE_TEXT) {
                doc.push('\n');
                doc.push_str(line);
            } else {
                doc.push_str(line);
            }

            if line.contains(CLOSE_DOC) {
                return if invalid {
                    Err(Self::undecodable(&doc))
                } else {
                    Ok(Some(doc))
                };
            }
        }
    }

    /// End of stream reached with `doc` pending.
    fn truncated(doc: &str, invalid: bool) -> Result<Option<String>, Error> {
        if doc.trim().is_empty() && !invalid {
            Ok(None)
        } else {
            debug!("dropping truncated record ({} bytes)", doc.len());
            Err(Error::RecordParse(format!(
                "end of stream inside record starting with {:?}",
                head(doc)
            )))
        }
    }

    fn undecodable(doc: &str) -> Error {
        Error::RecordParse(format!(
            "invalid UTF-8 in record starting with {:?}",
            head(doc)
        ))
    }
}

fn head(doc: &str) -> String {
    doc.chars().take(60).collect()
}

impl<R: BufRead> Iterator for Segmenter<R> {
    type Item = Result<DocumentRecord, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let doc = match self.framing {
            Framing::FixedArity => self.next_fixed(),
            Framing::TagDelimited => self.next_tagged(),
        };

        match doc {
            Ok(Some(doc)) => Some(Ok(DocumentRecord::new(doc))),
            Ok(None) => {
                self.done = true;
                None
            }
            // a bad record does not compromise the stream, a read failure does.
            Err(e @ Error::RecordParse(_)) => Some(Err(e)),
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
