//! Pipeline trait.
use crate::error::Error;

/// Implemented by each pipeline,
/// generic over the return type so that every pipeline
/// can hand back its own results.
pub trait Pipeline<T> {
    fn run(&self) -> Result<T, Error>;
}
