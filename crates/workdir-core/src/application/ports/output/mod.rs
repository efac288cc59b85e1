//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `workdir-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{AliasEntry, RenderRequest};
use crate::error::WorkdirResult;

/// Port for the persisted alias table.
///
/// Implemented by:
/// - `workdir_adapters::alias_store::YamlAliasStore` (production)
/// - `workdir_adapters::alias_store::InMemoryAliasStore` (testing)
///
/// Every call sees the persisted state as of that call; nothing is cached
/// between operations and there is no locking between processes.
#[cfg_attr(test, mockall::automock)]
pub trait AliasStore: Send + Sync {
    /// Reference registered under `name`, if any.
    fn get(&self, name: &str) -> WorkdirResult<Option<String>>;

    /// Insert or replace an alias. Last write wins.
    fn add(&self, entry: &AliasEntry) -> WorkdirResult<()>;

    /// Remove an alias; `false` if it did not exist.
    fn remove(&self, name: &str) -> WorkdirResult<bool>;

    /// All aliases, sorted by name.
    fn aliases(&self) -> WorkdirResult<Vec<AliasEntry>>;
}

/// Port for templates packaged with the tool.
#[cfg_attr(test, mockall::automock)]
pub trait BuiltinCatalog: Send + Sync {
    /// Compiled-in builtin names.
    fn names(&self) -> Vec<String>;

    /// `true` if `name` is a builtin.
    fn contains(&self, name: &str) -> bool {
        self.names().iter().any(|n| n == name)
    }

    /// On-disk location of a builtin, if installed.
    fn locate(&self, name: &str) -> Option<PathBuf>;
}

/// Port for directory inspection.
///
/// Implemented by:
/// - `workdir_adapters::filesystem::LocalFilesystem` (production)
/// - `workdir_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait DirectoryScanner: Send + Sync {
    /// `true` if `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Names of the immediate subdirectories of `dir`.
    ///
    /// Files and names that are not valid UTF-8 are skipped.
    fn subdirectory_names(&self, dir: &Path) -> WorkdirResult<Vec<String>>;
}

/// Port for the external template renderer.
///
/// Implemented by:
/// - `workdir_adapters::renderer::CookiecutterRenderer`
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render `request` and return the path of the created directory.
    fn render(&self, request: &RenderRequest) -> WorkdirResult<PathBuf>;
}
