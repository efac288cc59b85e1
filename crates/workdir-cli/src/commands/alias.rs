//! Implementation of `workdir add-alias` and `workdir remove-alias`.

use tracing::instrument;

use crate::{
    cli::{AddAliasArgs, RemoveAliasArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all, fields(alias = %args.alias))]
pub fn add(args: AddAliasArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let entry = super::alias_service(&config).add(&args.alias, &args.reference)?;

    output
        .success(&format!("Alias '{}' -> {}", entry.name, entry.reference))
        .with_cli_context(|| "failed to write status")
}

#[instrument(skip_all, fields(alias = %args.alias))]
pub fn remove(args: RemoveAliasArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    if !super::alias_service(&config).remove(&args.alias)? {
        return Err(CliError::AliasNotFound { alias: args.alias });
    }

    output
        .success(&format!("Removed alias '{}'", args.alias))
        .with_cli_context(|| "failed to write status")
}
