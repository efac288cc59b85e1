//! Builtin template discovery.
//!
//! The set of builtin names is compiled in; their contents ship as
//! cookiecutter template directories under a packaged templates root.
//!
//! # Template root resolution order
//!
//! The first candidate that exists as a directory wins:
//!
//! 1. The explicit override (`WORKDIR_TEMPLATES_DIR` or the config file),
//!    passed in by the caller.
//! 2. `<executable-dir>/templates`.
//! 3. `<executable-dir>/../share/workdir/templates`, the layout used by
//!    package installs into a prefix such as `/usr/local`.
//! 4. The `templates/` directory of the source checkout, so `cargo run`
//!    works without installing anything.
//!
//! A builtin name is listed and resolved even when no root is found; only
//! [`BuiltinCatalog::locate`] reports it as unavailable.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use workdir_core::application::ports::BuiltinCatalog;

/// Names of the templates packaged with the tool.
pub const BUILTIN_TEMPLATES: &[&str] = &["basic"];

/// Builtin catalog backed by a packaged templates directory.
#[derive(Debug, Clone, Default)]
pub struct PackagedTemplates {
    root_override: Option<PathBuf>,
}

impl PackagedTemplates {
    /// Catalog using the default search path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog that checks `root` before the default search path.
    pub fn with_root(root: Option<PathBuf>) -> Self {
        Self {
            root_override: root,
        }
    }

    /// Ordered list of candidate roots to probe.
    pub fn candidate_roots(&self) -> Vec<PathBuf> {
        let mut roots = Vec::with_capacity(4);

        if let Some(root) = &self.root_override {
            roots.push(root.clone());
        }

        if let Some(exe_dir) = exe_dir() {
            roots.push(exe_dir.join("templates"));
            roots.push(exe_dir.join("../share/workdir/templates"));
        }

        roots.push(Path::new(env!("CARGO_MANIFEST_DIR")).join("../../templates"));
        roots
    }

    /// The first candidate root that exists.
    #[instrument(skip(self))]
    pub fn root(&self) -> Option<PathBuf> {
        for candidate in self.candidate_roots() {
            if candidate.is_dir() {
                debug!(path = %candidate.display(), "using templates root");
                return Some(candidate);
            }
            debug!(path = %candidate.display(), "templates root candidate missing");
        }
        None
    }
}

impl BuiltinCatalog for PackagedTemplates {
    fn names(&self) -> Vec<String> {
        BUILTIN_TEMPLATES.iter().map(|s| s.to_string()).collect()
    }

    fn contains(&self, name: &str) -> bool {
        BUILTIN_TEMPLATES.contains(&name)
    }

    fn locate(&self, name: &str) -> Option<PathBuf> {
        if !self.contains(name) {
            return None;
        }
        let path = self.root()?.join(name);
        path.is_dir().then_some(path)
    }
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn names_are_the_compiled_in_set() {
        let catalog = PackagedTemplates::new();
        assert_eq!(catalog.names(), vec!["basic"]);
        assert!(catalog.contains("basic"));
        assert!(!catalog.contains("report"));
    }

    #[test]
    fn override_is_probed_first() {
        let temp = TempDir::new().unwrap();
        let catalog = PackagedTemplates::with_root(Some(temp.path().to_path_buf()));
        assert_eq!(catalog.candidate_roots()[0], temp.path());
    }

    #[test]
    fn locate_uses_override_root() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("basic")).unwrap();

        let catalog = PackagedTemplates::with_root(Some(temp.path().to_path_buf()));
        assert_eq!(catalog.locate("basic"), Some(temp.path().join("basic")));
    }

    #[test]
    fn locate_ignores_unknown_names() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("custom")).unwrap();

        let catalog = PackagedTemplates::with_root(Some(temp.path().to_path_buf()));
        assert_eq!(catalog.locate("custom"), None);
    }

    #[test]
    fn source_tree_ships_the_basic_template() {
        let catalog = PackagedTemplates::new();
        let located = catalog.locate("basic").expect("basic template packaged");
        assert!(located.join("cookiecutter.json").is_file());
    }
}
