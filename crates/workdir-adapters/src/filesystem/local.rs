//! Local filesystem adapter.

use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use workdir_core::{
    application::{ApplicationError, ports::DirectoryScanner},
    error::{WorkdirError, WorkdirResult},
};

/// Production directory scanner over the real filesystem.
///
/// Symlinks are followed, so a link to a directory counts as a directory and
/// a dangling link is skipped.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryScanner for LocalFilesystem {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn subdirectory_names(&self, dir: &Path) -> WorkdirResult<Vec<String>> {
        let mut names = Vec::new();

        let walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true);

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => return Err(map_walk_error(dir, e)),
                Err(e) => {
                    debug!(error = %e, "skipping unreadable entry");
                    continue;
                }
            };

            if !entry.file_type().is_dir() {
                continue;
            }

            match entry.file_name().to_str() {
                Some(name) => names.push(name.to_string()),
                None => debug!(path = %entry.path().display(), "skipping non UTF-8 name"),
            }
        }

        Ok(names)
    }
}

fn map_walk_error(path: &Path, e: walkdir::Error) -> WorkdirError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to list directory: {e}"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sorted(mut v: Vec<String>) -> Vec<String> {
        v.sort();
        v
    }

    #[test]
    fn lists_only_immediate_subdirectories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("01_a/nested/03_deep")).unwrap();
        fs::create_dir(temp.path().join("02_b")).unwrap();
        fs::write(temp.path().join("05_file.txt"), "not a dir").unwrap();

        let names = LocalFilesystem::new()
            .subdirectory_names(temp.path())
            .unwrap();
        assert_eq!(sorted(names), vec!["01_a", "02_b"]);
    }

    #[test]
    fn empty_directory_has_no_names() {
        let temp = TempDir::new().unwrap();
        assert!(
            LocalFilesystem::new()
                .subdirectory_names(temp.path())
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn missing_directory_is_an_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");
        assert!(matches!(
            LocalFilesystem::new().subdirectory_names(&missing),
            Err(WorkdirError::Application(
                ApplicationError::FilesystemError { .. }
            ))
        ));
    }

    #[test]
    fn is_dir_distinguishes_files() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("f");
        fs::write(&file, "").unwrap();

        let fs_adapter = LocalFilesystem::new();
        assert!(fs_adapter.is_dir(temp.path()));
        assert!(!fs_adapter.is_dir(&file));
        assert!(!fs_adapter.is_dir(&temp.path().join("nope")));
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_skipped() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("01_real")).unwrap();
        std::os::unix::fs::symlink(temp.path().join("gone"), temp.path().join("02_link"))
            .unwrap();

        let names = LocalFilesystem::new()
            .subdirectory_names(temp.path())
            .unwrap();
        assert_eq!(names, vec!["01_real"]);
    }
}
