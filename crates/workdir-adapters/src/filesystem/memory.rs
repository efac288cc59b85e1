//! In-memory filesystem adapter for testing.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use workdir_core::{
    application::{ApplicationError, ports::DirectoryScanner},
    error::WorkdirResult,
};

/// In-memory directory tree for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    directories: BTreeSet<PathBuf>,
    files: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `path` and every ancestor as a directory.
    pub fn create_dir_all(&self, path: &Path) -> WorkdirResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
        Ok(())
    }

    /// Record a regular file. Its parent directories are created.
    pub fn write_file(&self, path: &Path) -> WorkdirResult<()> {
        if let Some(parent) = path.parent() {
            self.create_dir_all(parent)?;
        }
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.files.insert(path.to_path_buf());
        Ok(())
    }
}

impl DirectoryScanner for MemoryFilesystem {
    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn subdirectory_names(&self, dir: &Path) -> WorkdirResult<Vec<String>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if !inner.directories.contains(dir) {
            return Err(ApplicationError::FilesystemError {
                path: dir.to_path_buf(),
                reason: "No such directory".to_string(),
            }
            .into());
        }

        Ok(inner
            .directories
            .iter()
            .filter(|p| p.parent() == Some(dir))
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .map(str::to_string)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_registers_ancestors() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/work/01_a/inner")).unwrap();

        assert!(fs.is_dir(Path::new("/work")));
        assert!(fs.is_dir(Path::new("/work/01_a")));
        assert_eq!(
            fs.subdirectory_names(Path::new("/work")).unwrap(),
            vec!["01_a"]
        );
    }

    #[test]
    fn files_are_not_subdirectories() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/work/02_b")).unwrap();
        fs.write_file(Path::new("/work/07_notes.txt")).unwrap();

        assert_eq!(
            fs.subdirectory_names(Path::new("/work")).unwrap(),
            vec!["02_b"]
        );
        assert!(!fs.is_dir(Path::new("/work/07_notes.txt")));
    }

    #[test]
    fn unknown_directory_is_an_error() {
        let fs = MemoryFilesystem::new();
        assert!(fs.subdirectory_names(Path::new("/nowhere")).is_err());
    }
}
