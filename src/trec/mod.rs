//! TREC collection files.
//!
//! Collection files have no header: they are a plain sequence of SGML-like
//! records whose boundaries are found by [segmenter::Segmenter].
pub mod record;
pub mod segmenter;

pub use record::DocumentRecord;
pub use segmenter::{Framing, Segmenter};
