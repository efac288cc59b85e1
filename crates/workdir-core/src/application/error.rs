//! Application layer errors.
//!
//! These errors represent failures in orchestration and in the adapters
//! behind the ports, not business rules. Business rule errors are
//! `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The alias file could not be read or written.
    #[error("Alias store error at {path}: {reason}")]
    AliasStore { path: PathBuf, reason: String },

    /// Store access failed (lock poisoned).
    #[error("Alias store is unavailable")]
    StoreLockError,

    /// A directory listing failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The output directory does not exist or is not a directory.
    #[error("Output directory does not exist: {path}")]
    OutputDirMissing { path: PathBuf },

    /// A builtin template has no packaged location on this machine.
    #[error("Builtin template '{name}' is not installed")]
    BuiltinUnavailable { name: String },

    /// The external renderer could not be started or reported failure.
    #[error("Template rendering failed: {reason}")]
    RenderingFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::AliasStore { path, .. } => vec![
                format!("Check the alias file: {}", path.display()),
                "Ensure its directory is writable".into(),
                "Point to another file with --config or WORKDIR_CONFIG".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have read permissions".into(),
            ],
            Self::OutputDirMissing { path } => vec![
                format!("Create it first: mkdir -p {}", path.display()),
                "Or pass an existing directory with --output".into(),
            ],
            Self::BuiltinUnavailable { name } => vec![
                format!("The packaged files for '{}' were not found", name),
                "Set WORKDIR_TEMPLATES_DIR to the directory holding builtin templates".into(),
                "Or register your own copy: workdir add-alias <name> <path>".into(),
            ],
            Self::RenderingFailed { .. } => vec![
                "Ensure cookiecutter is installed and in your PATH".into(),
                "Set WORKDIR_RENDERER to use a different renderer command".into(),
                "Check the renderer output above for details".into(),
            ],
            Self::StoreLockError => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::OutputDirMissing { .. } => ErrorCategory::Validation,
            Self::BuiltinUnavailable { .. } => ErrorCategory::NotFound,
            Self::AliasStore { .. } => ErrorCategory::Configuration,
            Self::StoreLockError | Self::FilesystemError { .. } | Self::RenderingFailed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}
