//! Alias Service - alias table management and template listing.

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{AliasStore, BuiltinCatalog},
    domain::{AliasEntry, TemplateListing},
    error::WorkdirResult,
};

/// Service for alias operations.
pub struct AliasService {
    store: Box<dyn AliasStore>,
    builtins: Box<dyn BuiltinCatalog>,
}

impl AliasService {
    /// Create a new alias service.
    pub fn new(store: Box<dyn AliasStore>, builtins: Box<dyn BuiltinCatalog>) -> Self {
        Self { store, builtins }
    }

    /// Reference registered under `name`.
    pub fn get(&self, name: &str) -> WorkdirResult<Option<String>> {
        self.store.get(name)
    }

    /// Register or replace an alias.
    #[instrument(skip(self))]
    pub fn add(&self, name: &str, reference: &str) -> WorkdirResult<AliasEntry> {
        let entry = AliasEntry::new(name, reference)?;
        if self.builtins.contains(name) {
            debug!(alias = name, "alias shadows a builtin template");
        }
        self.store.add(&entry)?;
        info!(alias = name, reference, "alias saved");
        Ok(entry)
    }

    /// Remove an alias; `false` if it did not exist.
    #[instrument(skip(self))]
    pub fn remove(&self, name: &str) -> WorkdirResult<bool> {
        let removed = self.store.remove(name)?;
        info!(alias = name, removed, "alias removal");
        Ok(removed)
    }

    /// Aliases followed by builtins.
    ///
    /// A name present in both layers is listed twice, once per layer.
    pub fn list(&self) -> WorkdirResult<Vec<TemplateListing>> {
        let mut listing: Vec<TemplateListing> = self
            .store
            .aliases()?
            .into_iter()
            .map(|a| TemplateListing::alias(a.name, a.reference))
            .collect();

        listing.extend(self.builtins.names().into_iter().map(TemplateListing::builtin));
        Ok(listing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::{MockAliasStore, MockBuiltinCatalog};
    use crate::domain::{DomainError, TemplateSource};
    use crate::error::WorkdirError;

    fn builtins(names: &'static [&'static str]) -> MockBuiltinCatalog {
        let mut catalog = MockBuiltinCatalog::new();
        catalog
            .expect_names()
            .returning(move || names.iter().map(|n| n.to_string()).collect());
        catalog
            .expect_contains()
            .returning(move |name| names.contains(&name));
        catalog
    }

    #[test]
    fn add_validates_before_storing() {
        let mut store = MockAliasStore::new();
        store.expect_add().never();

        let service = AliasService::new(Box::new(store), Box::new(builtins(&[])));
        let err = service.add("", "gh:x/y").unwrap_err();
        assert!(matches!(
            err,
            WorkdirError::Domain(DomainError::InvalidAliasName { .. })
        ));
    }

    #[test]
    fn add_forwards_entry_to_store() {
        let mut store = MockAliasStore::new();
        store
            .expect_add()
            .withf(|e| e.name == "rep" && e.reference == "gh:me/rep")
            .times(1)
            .returning(|_| Ok(()));

        let service = AliasService::new(Box::new(store), Box::new(builtins(&["basic"])));
        let entry = service.add("rep", "gh:me/rep").unwrap();
        assert_eq!(entry.reference, "gh:me/rep");
    }

    #[test]
    fn remove_reports_missing_alias() {
        let mut store = MockAliasStore::new();
        store
            .expect_remove()
            .withf(|name| name == "ghost")
            .returning(|_| Ok(false));

        let service = AliasService::new(Box::new(store), Box::new(builtins(&[])));
        assert!(!service.remove("ghost").unwrap());
    }

    #[test]
    fn list_puts_aliases_before_builtins_without_dedup() {
        let mut store = MockAliasStore::new();
        store.expect_aliases().returning(|| {
            Ok(vec![
                AliasEntry::new("basic", "/my/basic").unwrap(),
                AliasEntry::new("rep", "gh:me/rep").unwrap(),
            ])
        });

        let service = AliasService::new(Box::new(store), Box::new(builtins(&["basic"])));
        let listing = service.list().unwrap();

        assert_eq!(
            listing,
            vec![
                TemplateListing::alias("basic", "/my/basic"),
                TemplateListing::alias("rep", "gh:me/rep"),
                TemplateListing::builtin("basic"),
            ]
        );
        assert_eq!(listing[2].source, TemplateSource::Builtin);
    }
}
