//! Workdir Service - main application orchestrator.
//!
//! This service coordinates the `new` workflow:
//! 1. Resolve the template identifier (alias → builtin → literal)
//! 2. Allocate the next numeric prefix in the output directory
//! 3. Hand the request to the external renderer
//!
//! The renderer owns atomicity of the output; nothing is cleaned up here when
//! it fails.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{AliasStore, BuiltinCatalog, DirectoryScanner, TemplateRenderer},
    },
    domain::{DomainError, ExtraContext, PREFIX_KEY, RenderRequest, TemplateRef, next_prefix},
    error::WorkdirResult,
};

/// Input of [`WorkdirService::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorkdir {
    /// Template name, alias, path, or URL.
    pub template: String,
    /// Existing directory the working directory is created in.
    pub output_dir: PathBuf,
    pub extra_context: ExtraContext,
    /// Let the renderer prompt for template variables.
    pub use_input: bool,
}

/// Outcome of a successful [`WorkdirService::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedWorkdir {
    pub path: PathBuf,
    pub template: TemplateRef,
    /// Value passed under [`PREFIX_KEY`].
    pub prefix: String,
}

/// Main workdir service.
pub struct WorkdirService {
    aliases: Box<dyn AliasStore>,
    builtins: Box<dyn BuiltinCatalog>,
    scanner: Box<dyn DirectoryScanner>,
    renderer: Box<dyn TemplateRenderer>,
}

impl WorkdirService {
    /// Create a new workdir service with the given adapters.
    pub fn new(
        aliases: Box<dyn AliasStore>,
        builtins: Box<dyn BuiltinCatalog>,
        scanner: Box<dyn DirectoryScanner>,
        renderer: Box<dyn TemplateRenderer>,
    ) -> Self {
        Self {
            aliases,
            builtins,
            scanner,
            renderer,
        }
    }

    /// Resolve a template identifier.
    ///
    /// The alias table is consulted first, then the builtin registry; anything
    /// else is passed through as a literal reference without checking that it
    /// exists.
    #[instrument(skip(self))]
    pub fn resolve(&self, identifier: &str) -> WorkdirResult<TemplateRef> {
        if identifier.trim().is_empty() {
            return Err(DomainError::EmptyTemplateIdentifier.into());
        }

        if let Some(reference) = self.aliases.get(identifier)? {
            debug!(reference = %reference, "resolved via alias");
            return Ok(TemplateRef::Alias {
                name: identifier.to_string(),
                reference,
            });
        }

        if self.builtins.contains(identifier) {
            debug!("resolved as builtin");
            return Ok(TemplateRef::Builtin {
                name: identifier.to_string(),
            });
        }

        debug!("passing identifier through as literal reference");
        Ok(TemplateRef::Literal(identifier.to_string()))
    }

    /// The location handed to the renderer for a resolved reference.
    pub fn locate(&self, template: &TemplateRef) -> WorkdirResult<String> {
        match template {
            TemplateRef::Alias { reference, .. } => Ok(reference.clone()),
            TemplateRef::Literal(reference) => Ok(reference.clone()),
            TemplateRef::Builtin { name } => self
                .builtins
                .locate(name)
                .map(|p| p.to_string_lossy().into_owned())
                .ok_or_else(|| ApplicationError::BuiltinUnavailable { name: name.clone() }.into()),
        }
    }

    /// Next numeric prefix for a new directory under `dir`.
    ///
    /// `dir` must exist; only its immediate subdirectories are considered.
    pub fn next_prefix(&self, dir: &Path) -> WorkdirResult<String> {
        let names = self.scanner.subdirectory_names(dir)?;
        let prefix = next_prefix(&names);
        debug!(dir = %dir.display(), scanned = names.len(), prefix = %prefix, "prefix allocated");
        Ok(prefix)
    }

    /// Create a new working directory.
    #[instrument(
        skip_all,
        fields(template = %request.template, output = %request.output_dir.display())
    )]
    pub fn create(&self, request: NewWorkdir) -> WorkdirResult<CreatedWorkdir> {
        let NewWorkdir {
            template,
            output_dir,
            mut extra_context,
            use_input,
        } = request;

        if template.trim().is_empty() {
            return Err(DomainError::EmptyTemplateIdentifier.into());
        }

        if !self.scanner.is_dir(&output_dir) {
            return Err(ApplicationError::OutputDirMissing { path: output_dir }.into());
        }

        let resolved = self.resolve(&template)?;
        let location = self.locate(&resolved)?;
        info!(template = %resolved, location = %location, "template resolved");

        // A prefix passed explicitly by the user is kept as is.
        let prefix = match extra_context.get(PREFIX_KEY) {
            Some(given) => given.to_string(),
            None => {
                let prefix = self.next_prefix(&output_dir)?;
                extra_context.insert(PREFIX_KEY, prefix.clone());
                prefix
            }
        };

        let render = RenderRequest {
            template: location,
            no_input: !use_input,
            extra_context,
            output_dir,
            overwrite_if_exists: false,
        };

        let path = self.renderer.render(&render)?;
        info!(path = %path.display(), "working directory created");

        Ok(CreatedWorkdir {
            path,
            template: resolved,
            prefix,
        })
    }
}
