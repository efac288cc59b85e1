//! YAML-file alias store.
//!
//! The whole file is one [`ConfigRecord`]:
//!
//! ```yaml
//! aliases:
//!   report: gh:me/report-template
//!   notes: ~/templates/notes
//! ```
//!
//! Every operation loads the full record, and every mutation writes it back
//! wholesale. There is no locking: two concurrent writers race and the last
//! save wins.

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use workdir_core::{
    application::{ApplicationError, ports::AliasStore},
    domain::AliasEntry,
    error::{WorkdirError, WorkdirResult},
};

/// On-disk layout of the config file.
///
/// Top-level keys other than `aliases` are carried through load/save
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub aliases: BTreeMap<String, String>,

    #[serde(flatten)]
    pub other: BTreeMap<String, serde_yaml::Value>,
}

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("malformed alias file: {0}")]
    Parse(#[source] serde_yaml::Error),

    #[error("failed to serialise alias file: {0}")]
    Serialize(#[source] serde_yaml::Error),
}

impl ConfigRecord {
    /// Parse file contents. An empty document is an empty record.
    pub fn parse(contents: &str) -> Result<Self, RecordError> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let record: Option<Self> = serde_yaml::from_str(contents).map_err(RecordError::Parse)?;
        Ok(record.unwrap_or_default())
    }

    /// Parse file contents, degrading to an empty record on malformed data.
    pub fn parse_lenient(contents: &str) -> Self {
        Self::parse(contents).unwrap_or_else(|e| {
            warn!(error = %e, "ignoring malformed alias file; treating it as empty");
            Self::default()
        })
    }

    pub fn to_yaml(&self) -> Result<String, RecordError> {
        serde_yaml::to_string(self).map_err(RecordError::Serialize)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Alias store persisted as a YAML file at an injected path.
#[derive(Debug, Clone)]
pub struct YamlAliasStore {
    path: PathBuf,
}

impl YamlAliasStore {
    /// Create a store backed by `path`. Nothing is touched until first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full record, creating an empty file on first access.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> WorkdirResult<ConfigRecord> {
        match fs::read(&self.path) {
            Ok(bytes) => match String::from_utf8(bytes) {
                Ok(contents) => Ok(ConfigRecord::parse_lenient(&contents)),
                Err(e) => {
                    warn!(error = %e, "alias file is not valid UTF-8; treating it as empty");
                    Ok(ConfigRecord::default())
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("alias file missing; creating an empty one");
                let record = ConfigRecord::default();
                self.save(&record)?;
                Ok(record)
            }
            Err(e) => Err(self.io_error("read", &e)),
        }
    }

    /// Overwrite the file with `record`.
    pub fn save(&self, record: &ConfigRecord) -> WorkdirResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error("create directory for", &e))?;
        }

        let yaml = record.to_yaml().map_err(|e| WorkdirError::Internal {
            message: e.to_string(),
        })?;

        fs::write(&self.path, yaml).map_err(|e| self.io_error("write", &e))
    }

    fn io_error(&self, operation: &str, e: &io::Error) -> WorkdirError {
        ApplicationError::AliasStore {
            path: self.path.clone(),
            reason: format!("failed to {operation} alias file: {e}"),
        }
        .into()
    }
}

impl AliasStore for YamlAliasStore {
    fn get(&self, name: &str) -> WorkdirResult<Option<String>> {
        Ok(self.load()?.aliases.get(name).cloned())
    }

    fn add(&self, entry: &AliasEntry) -> WorkdirResult<()> {
        let mut record = self.load()?;
        record
            .aliases
            .insert(entry.name.clone(), entry.reference.clone());
        self.save(&record)
    }

    fn remove(&self, name: &str) -> WorkdirResult<bool> {
        let mut record = self.load()?;
        if record.aliases.remove(name).is_none() {
            return Ok(false);
        }
        self.save(&record)?;
        Ok(true)
    }

    fn aliases(&self) -> WorkdirResult<Vec<AliasEntry>> {
        Ok(self
            .load()?
            .aliases
            .into_iter()
            .map(|(name, reference)| AliasEntry { name, reference })
            .collect())
    }
}
