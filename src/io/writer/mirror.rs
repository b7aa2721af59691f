/*! Writer for one mirrored collection file.

Records are written to a temporary file in the destination directory, which is
only renamed to its final name on [MirrorWriter::close].
Dropping the writer without closing it removes the temporary file, so an aborted
file never leaves a truncated output behind.
!*/
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;
use tempfile::NamedTempFile;

use super::WriterTrait;
use crate::error::Error;
use crate::trec::DocumentRecord;

pub struct MirrorWriter {
    handle: BufWriter<NamedTempFile>,
    dst: PathBuf,
    nb_records: usize,
}

impl MirrorWriter {
    /// Number of records written so far.
    pub fn nb_records(&self) -> usize {
        self.nb_records
    }
}

impl WriterTrait for MirrorWriter {
    type Item = DocumentRecord;

    fn new(dst: &Path, name: &str) -> Result<Self, Error> {
        let tmp = NamedTempFile::new_in(dst)?;
        Ok(Self {
            handle: BufWriter::new(tmp),
            dst: dst.join(name),
            nb_records: 0,
        })
    }

    fn write(&mut self, vals: Vec<DocumentRecord>) -> Result<(), Error> {
        for val in &vals {
            self.write_single(val)?;
        }
        Ok(())
    }

    /// Writes the verbatim record text.
    fn write_single(&mut self, val: &DocumentRecord) -> Result<(), Error> {
        self.handle.write_all(val.raw_text().as_bytes())?;
        self.nb_records += 1;
        Ok(())
    }

    fn close(self) -> Result<(), Error> {
        let tmp = self.handle.into_inner().map_err(|e| e.into_error())?;
        tmp.persist(&self.dst).map_err(|e| e.error)?;
        debug!("{:?}: {} records written", self.dst, self.nb_records);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> DocumentRecord {
        DocumentRecord::new(format!(
            "<DOC>\n<DOCNO>{id}</DOCNO>\n<DOCID>{id}</DOCID>\n<TEXT>\ntext of {id}\n</TEXT>\n</DOC>\n"
        ))
    }

    #[test]
    fn write_and_close() {
        let dst = tempfile::tempdir().unwrap();
        let mut w = MirrorWriter::new(dst.path(), "collector_1.txt").unwrap();
        let records = vec![record("doc1"), record("doc2")];
        w.write(records.clone()).unwrap();
        assert_eq!(w.nb_records(), 2);

        // nothing visible before close
        assert!(!dst.path().join("collector_1.txt").exists());
        w.close().unwrap();

        let written = std::fs::read_to_string(dst.path().join("collector_1.txt")).unwrap();
        assert_eq!(written, records[0].raw_text().to_string() + records[1].raw_text());
    }

    #[test]
    fn empty_output_is_still_created() {
        let dst = tempfile::tempdir().unwrap();
        let w = MirrorWriter::new(dst.path(), "empty.txt").unwrap();
        w.close().unwrap();
        assert_eq!(std::fs::read(dst.path().join("empty.txt")).unwrap(), b"");
    }

    #[test]
    fn dropped_writer_leaves_nothing() {
        let dst = tempfile::tempdir().unwrap();
        {
            let mut w = MirrorWriter::new(dst.path(), "aborted.txt").unwrap();
            w.write_single(&record("doc1")).unwrap();
        }
        assert_eq!(std::fs::read_dir(dst.path()).unwrap().count(), 0);
    }
}
