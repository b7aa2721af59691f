//! TREC document record.
//!
//! A record looks like
//!
//! ```text
//! <DOC>
//! <DOCNO>doc062200112743</DOCNO>
//! <DOCID>doc062200112743</DOCID>
//! <TEXT>
//! One line of text
//! </TEXT>
//! </DOC>
//! ```
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Error;

lazy_static! {
    /// Matches any structural line: `<DOC>`, `<DOCNO>`, `<DOCID>`, `<TEXT>`, `</TEXT>`, `</DOC>`.
    static ref STRUCTURAL_TAG: Regex = Regex::new(r"<DOC|<TEXT|</DOC|</TEXT").unwrap();
    static ref DOC_ID: Regex = Regex::new(r"<DOCID>(\w+)").unwrap();
}

pub(crate) const CLOSE_DOC: &str = "</DOC>";
pub(crate) const CLOSE_TEXT: &str = "</TEXT>";

/// true if the line holds one of the structural tags.
pub fn is_structural(line: &str) -> bool {
    STRUCTURAL_TAG.is_match(line)
}

/// Identifier following a `<DOCID>` tag on this line, if any.
pub fn doc_id_of(line: &str) -> Option<&str> {
    DOC_ID
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    doc_id: Option<String>,
    raw_text: String,
    content_lines: Vec<String>,
}

impl DocumentRecord {
    /// Builds a record from its text, extracting the doc id and the content lines.
    ///
    /// When several lines carry a `<DOCID>`, the last one wins.
    pub fn new(raw_text: String) -> Self {
        let mut doc_id = None;
        let mut content_lines = Vec::new();

        for line in raw_text.lines() {
            if let Some(id) = doc_id_of(line) {
                doc_id = Some(id.to_string());
            }
            if !is_structural(line) {
                content_lines.push(line.to_string());
            }
        }

        Self {
            doc_id,
            raw_text,
            content_lines,
        }
    }

    pub fn doc_id(&self) -> Option<&str> {
        self.doc_id.as_deref()
    }

    /// Doc id, or a [Error::RecordParse] if the record carries none.
    pub fn require_doc_id(&self) -> Result<&str, Error> {
        self.doc_id().ok_or_else(|| {
            let head: String = self.raw_text.chars().take(60).collect();
            Error::RecordParse(format!("no <DOCID> in record starting with {:?}", head))
        })
    }

    /// Verbatim text, tags included.
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Lines that are not structural tags.
    pub fn content_lines(&self) -> &[String] {
        &self.content_lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = "<DOC>
<DOCNO>doc001</DOCNO>
<DOCID>doc001</DOCID>
<TEXT>
lorem ipsum dolor
</TEXT>
</DOC>
";

    #[test]
    fn structural_lines() {
        for line in ["<DOC>", "<DOCNO>x</DOCNO>", "<DOCID>x</DOCID>", "<TEXT>", "</TEXT>", "</DOC>"] {
            assert!(is_structural(line), "{}", line);
        }
        assert!(!is_structural("plain text < DOC"));
        assert!(!is_structural("<doc> is lowercase"));
    }

    #[test]
    fn doc_id_extraction() {
        assert_eq!(doc_id_of("<DOCID>doc062200112743</DOCID>"), Some("doc062200112743"));
        assert_eq!(doc_id_of("<DOCNO>doc062200112743</DOCNO>"), None);
        assert_eq!(doc_id_of("<DOCID></DOCID>"), None);
    }

    #[test]
    fn parse_record() {
        let r = DocumentRecord::new(RECORD.to_string());
        assert_eq!(r.doc_id(), Some("doc001"));
        assert_eq!(r.content_lines(), &["lorem ipsum dolor".to_string()]);
        assert_eq!(r.raw_text(), RECORD);
    }

    #[test]
    fn missing_doc_id() {
        let r = DocumentRecord::new("<DOC>\n<TEXT>\nfoo\n</TEXT>\n</DOC>\n".to_string());
        assert_eq!(r.doc_id(), None);
        assert!(matches!(r.require_doc_id(), Err(Error::RecordParse(_))));
    }
}
