//! Subcommand handlers.
//!
//! Each handler translates parsed arguments into a core service call and
//! renders the result. The adapters are wired here, once per invocation.

pub mod alias;
pub mod completions;
pub mod list;
pub mod new;
pub mod version;

use workdir_adapters::{CookiecutterRenderer, LocalFilesystem, PackagedTemplates, YamlAliasStore};
use workdir_core::application::{AliasService, WorkdirService};

use crate::config::AppConfig;

fn builtins(config: &AppConfig) -> PackagedTemplates {
    PackagedTemplates::with_root(config.templates_dir.clone())
}

/// Alias management backed by the configured alias file.
pub fn alias_service(config: &AppConfig) -> AliasService {
    AliasService::new(
        Box::new(YamlAliasStore::new(config.alias_file())),
        Box::new(builtins(config)),
    )
}

/// Workdir creation with the production adapters.
pub fn workdir_service(config: &AppConfig) -> WorkdirService {
    WorkdirService::new(
        Box::new(YamlAliasStore::new(config.alias_file())),
        Box::new(builtins(config)),
        Box::new(LocalFilesystem::new()),
        Box::new(CookiecutterRenderer::from_command(&config.renderer)),
    )
}
