//! Template references and listings.

use std::fmt;

use serde::{Serialize, Serializer, ser::SerializeStruct};

use crate::domain::error::DomainError;

/// Tag shown for builtin templates in listings.
pub const BUILTIN_TAG: &str = "builtin";

/// A template identifier after resolution.
///
/// Resolution walks the chain alias → builtin → literal; the first layer that
/// knows the identifier decides the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateRef {
    /// A template packaged with this tool.
    Builtin { name: String },
    /// A user-defined alias and the reference it maps to.
    Alias { name: String, reference: String },
    /// The identifier itself, passed through unchanged (path, URL, repo).
    Literal(String),
}

impl TemplateRef {
    /// The identifier the user typed.
    pub fn identifier(&self) -> &str {
        match self {
            Self::Builtin { name } | Self::Alias { name, .. } => name,
            Self::Literal(reference) => reference,
        }
    }

    /// `true` for [`TemplateRef::Builtin`].
    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::Builtin { .. })
    }
}

impl fmt::Display for TemplateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin { name } => write!(f, "{name} ({BUILTIN_TAG})"),
            Self::Alias { name, reference } => write!(f, "{name} -> {reference}"),
            Self::Literal(reference) => write!(f, "{reference}"),
        }
    }
}

/// Where a listed template comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Builtin,
    Alias(String),
}

impl TemplateSource {
    /// `"builtin"` or the alias reference.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Builtin => BUILTIN_TAG,
            Self::Alias(reference) => reference,
        }
    }

    /// Short label for tables: `"builtin"` or `"alias"`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Builtin => BUILTIN_TAG,
            Self::Alias(_) => "alias",
        }
    }
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of `workdir list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateListing {
    pub name: String,
    pub source: TemplateSource,
}

// Serialised flat: `{"name": .., "kind": "builtin"|"alias", "reference": ..}`.
impl Serialize for TemplateListing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut row = serializer.serialize_struct("TemplateListing", 3)?;
        row.serialize_field("name", &self.name)?;
        row.serialize_field("kind", self.source.kind())?;
        row.serialize_field("reference", self.source.as_str())?;
        row.end()
    }
}

impl TemplateListing {
    pub fn builtin(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: TemplateSource::Builtin,
        }
    }

    pub fn alias(name: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: TemplateSource::Alias(reference.into()),
        }
    }
}

/// A user-defined alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    pub name: String,
    pub reference: String,
}

impl AliasEntry {
    /// Build a validated alias entry.
    ///
    /// The name must be non-empty and free of whitespace; the reference must
    /// be non-empty. Whether the reference is reachable is not checked.
    pub fn new(name: impl Into<String>, reference: impl Into<String>) -> Result<Self, DomainError> {
        let entry = Self {
            name: name.into(),
            reference: reference.into(),
        };
        entry.validate()?;
        Ok(entry)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.is_empty() {
            return Err(DomainError::InvalidAliasName {
                name: self.name.clone(),
                reason: "name cannot be empty".into(),
            });
        }
        if self.name.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidAliasName {
                name: self.name.clone(),
                reason: "name cannot contain whitespace".into(),
            });
        }
        if self.reference.trim().is_empty() {
            return Err(DomainError::InvalidReference {
                name: self.name.clone(),
                reason: "reference cannot be empty".into(),
            });
        }
        Ok(())
    }
}
