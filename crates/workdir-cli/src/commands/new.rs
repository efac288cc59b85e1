//! Implementation of the `workdir new` command.
//!
//! Responsibility: parse the extra context, call the core workdir service,
//! and print the created path. No business logic lives here.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, instrument};

use workdir_core::{
    application::{CreatedWorkdir, NewWorkdir},
    domain::ExtraContext,
};

use crate::{
    cli::{NewArgs, OutputFormat},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// JSON shape of `workdir new --output-format json`.
#[derive(Debug, Serialize)]
struct CreatedReport {
    path: PathBuf,
    template: String,
    prefix: String,
}

impl From<&CreatedWorkdir> for CreatedReport {
    fn from(created: &CreatedWorkdir) -> Self {
        Self {
            path: created.path.clone(),
            template: created.template.identifier().to_string(),
            prefix: created.prefix.clone(),
        }
    }
}

/// Execute the `workdir new` command.
///
/// Malformed `-c` items are reported and skipped; everything else is decided
/// by [`workdir_core::application::WorkdirService::create`].
#[instrument(skip_all, fields(template = %args.template))]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let (extra_context, rejected) = ExtraContext::parse(&args.extra_context);
    for err in &rejected {
        output
            .warning(&format!("{err}; ignoring it"))
            .with_cli_context(|| "failed to write warning")?;
    }
    debug!(entries = extra_context.len(), "extra context parsed");

    let service = super::workdir_service(&config);
    let created = service.create(NewWorkdir {
        template: args.template,
        output_dir: args.output,
        extra_context,
        use_input: args.use_input,
    })?;

    output
        .success(&format!(
            "Created {} from {}",
            created.path.display(),
            created.template
        ))
        .with_cli_context(|| "failed to write status")?;

    match output.format() {
        OutputFormat::Json => output.emit_json(&CreatedReport::from(&created)),
        _ => output.emit(&created.path.display().to_string()),
    }
    .with_cli_context(|| "failed to write created path")
}
