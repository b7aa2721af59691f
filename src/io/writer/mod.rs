/*!
# Mirrored output writing

Each input file gets a [MirrorWriter] writing the kept records to a file of the
same name in the output directory, which [recreate_dir] empties before a run.
!*/
mod mirror;
mod writertrait;
use std::path::Path;

use log::{info, warn};

use crate::error::Error;
pub use mirror::MirrorWriter;
pub use writertrait::WriterTrait;

/// Removes `dst` if it exists, then creates it again (parents included).
///
/// Any failure is a [Error::ResourceSetup].
pub fn recreate_dir(dst: &Path) -> Result<(), Error> {
    if dst.exists() {
        info!("Removing old folder {:?}", dst);
        std::fs::remove_dir_all(dst).map_err(|e| Error::ResourceSetup(dst.to_path_buf(), e))?;
    } else {
        warn!("Destination {:?} does not exist. Creating", dst);
    }
    std::fs::create_dir_all(dst).map_err(|e| Error::ResourceSetup(dst.to_path_buf(), e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recreate_clears_previous_content() {
        let root = tempfile::tempdir().unwrap();
        let dst = root.path().join("docs_parsed");
        std::fs::create_dir(&dst).unwrap();
        std::fs::write(dst.join("stale.txt"), "old").unwrap();

        recreate_dir(&dst).unwrap();
        assert!(dst.is_dir());
        assert_eq!(std::fs::read_dir(&dst).unwrap().count(), 0);
    }

    #[test]
    fn recreate_fails_under_a_file() {
        let root = tempfile::tempdir().unwrap();
        let blocker = root.path().join("blocker");
        std::fs::write(&blocker, "not a dir").unwrap();

        let err = recreate_dir(&blocker.join("docs_parsed")).unwrap_err();
        assert!(matches!(err, Error::ResourceSetup(..)));
    }
}
