use std::path::Path;

use crate::error::Error;

pub trait WriterTrait {
    type Item;

    /// Create a writer for the file named `name` inside `dst`.
    fn new(dst: &Path, name: &str) -> Result<Self, Error>
    where
        Self: Sized;
    fn write(&mut self, vals: Vec<Self::Item>) -> Result<(), Error>;
    fn write_single(&mut self, val: &Self::Item) -> Result<(), Error>;
    /// Make the written content visible at its final location.
    fn close(self) -> Result<(), Error>;
}
