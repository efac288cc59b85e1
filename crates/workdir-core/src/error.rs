//! Unified error handling for workdir core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for workdir core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WorkdirError {
    /// Errors from the domain layer (invalid input).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration and adapter failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl WorkdirError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec!["This appears to be a bug in workdir".into()],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type WorkdirResult<T> = Result<T, WorkdirError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn domain_errors_are_validation() {
        let err: WorkdirError = DomainError::EmptyTemplateIdentifier.into();
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn missing_builtin_is_not_found() {
        let err: WorkdirError = ApplicationError::BuiltinUnavailable {
            name: "basic".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.suggestions().iter().any(|s| s.contains("WORKDIR_TEMPLATES_DIR")));
    }

    #[test]
    fn display_is_transparent() {
        let err: WorkdirError = ApplicationError::OutputDirMissing {
            path: PathBuf::from("/nope"),
        }
        .into();
        assert_eq!(err.to_string(), "Output directory does not exist: /nope");
    }
}
