//! Collection directory listing.
use std::path::{Path, PathBuf};

use itertools::Itertools;
use log::error;

use crate::error::Error;

/// Regular files of `src`, sorted by name.
///
/// Sorting gives every run the same processing (and merge) order whatever the
/// platform's directory listing order. Unreadable entries are logged and left out.
pub fn collection_files(src: &Path) -> Result<Vec<PathBuf>, Error> {
    let entries = std::fs::read_dir(src).map_err(|e| {
        Error::Configuration(format!("cannot read collection directory {:?}: {}", src, e))
    })?;

    let files = entries
        .filter_map(|entry| {
            entry.map_or_else(
                |e| {
                    error!("error reading collection directory: {}", e);
                    None
                },
                Some,
            )
        })
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .sorted()
        .collect();

    Ok(files)
}

/// Final path component, used to name mirrored files and report rows.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_files_only() {
        let src = tempfile::tempdir().unwrap();
        for name in ["b.txt", "a.txt", "c.txt"] {
            std::fs::write(src.path().join(name), "").unwrap();
        }
        std::fs::create_dir(src.path().join("subdir")).unwrap();

        let names: Vec<_> = collection_files(src.path())
            .unwrap()
            .iter()
            .map(|p| file_name(p))
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn missing_directory_is_fatal() {
        let src = tempfile::tempdir().unwrap();
        let err = collection_files(&src.path().join("nope")).unwrap_err();
        assert!(err.is_fatal());
    }
}
