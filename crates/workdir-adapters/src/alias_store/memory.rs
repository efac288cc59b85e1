//! In-memory alias store for testing.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use workdir_core::{
    application::{ApplicationError, ports::AliasStore},
    domain::AliasEntry,
    error::WorkdirResult,
};

/// Thread-safe in-memory alias store.
///
/// Clones share the same table, so a test can keep a handle after boxing one
/// into a service.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAliasStore {
    inner: Arc<RwLock<BTreeMap<String, String>>>,
}

impl InMemoryAliasStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `(name, reference)` pairs.
    pub fn with_aliases<I, N, R>(aliases: I) -> Self
    where
        I: IntoIterator<Item = (N, R)>,
        N: Into<String>,
        R: Into<String>,
    {
        let table = aliases
            .into_iter()
            .map(|(n, r)| (n.into(), r.into()))
            .collect();
        Self {
            inner: Arc::new(RwLock::new(table)),
        }
    }

    /// Get the number of aliases.
    pub fn len(&self) -> usize {
        self.inner.read().map(|t| t.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AliasStore for InMemoryAliasStore {
    fn get(&self, name: &str) -> WorkdirResult<Option<String>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.get(name).cloned())
    }

    fn add(&self, entry: &AliasEntry) -> WorkdirResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert(entry.name.clone(), entry.reference.clone());
        Ok(())
    }

    fn remove(&self, name: &str) -> WorkdirResult<bool> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.remove(name).is_some())
    }

    fn aliases(&self) -> WorkdirResult<Vec<AliasEntry>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner
            .iter()
            .map(|(name, reference)| AliasEntry {
                name: name.clone(),
                reference: reference.clone(),
            })
            .collect())
    }
}
