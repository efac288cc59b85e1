// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to pass between layers)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid alias name '{name}': {reason}")]
    InvalidAliasName { name: String, reason: String },

    #[error("Invalid template reference for '{name}': {reason}")]
    InvalidReference { name: String, reason: String },

    #[error("Template identifier cannot be empty")]
    EmptyTemplateIdentifier,

    #[error("Malformed context entry '{entry}': expected key=value")]
    MalformedContextEntry { entry: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidAliasName { name, reason } => vec![
                format!("Alias name '{}' is invalid: {}", name, reason),
                "Use a short name without whitespace, e.g. 'report'".into(),
            ],
            Self::InvalidReference { .. } => vec![
                "Pass a template path, URL, or repository locator".into(),
                "Example: workdir add-alias report gh:me/report-template".into(),
            ],
            Self::EmptyTemplateIdentifier => vec![
                "Pass a template name with --type".into(),
                "List known templates: workdir list".into(),
            ],
            Self::MalformedContextEntry { entry } => vec![
                format!("'{}' is not of the form key=value", entry),
                "Example: -c project_name=analysis".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
}
