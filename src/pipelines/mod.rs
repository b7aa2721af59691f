//! Pipelines.
//!
//! Pipelines implement the light [pipeline::Pipeline] trait.
//! [CorpusFilter] filters a collection, [Profile] only measures it.
mod collection;
pub mod corpus_filter;
#[allow(clippy::module_inception)]
pub mod pipeline;
pub mod profile;

pub use collection::{collection_files, file_name};
pub use corpus_filter::{CorpusFilter, FileOutcome, RunSummary};
pub use pipeline::Pipeline;
pub use profile::{Profile, ProfileRow, ProfileSummary};
