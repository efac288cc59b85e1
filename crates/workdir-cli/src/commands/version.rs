//! Implementation of the `workdir version` command.

use crate::{
    error::{CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(output: OutputManager) -> CliResult<()> {
    output
        .emit(&format!("workdir {}", env!("CARGO_PKG_VERSION")))
        .with_cli_context(|| "failed to write version")
}
