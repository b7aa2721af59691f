/*!
# IO utilities

Writing of the filtered collection. Reading is done by [crate::trec::Segmenter].
!*/
pub mod writer;
pub use writer::{recreate_dir, MirrorWriter, WriterTrait};
