//! Implementation of the `workdir list` command.

use workdir_core::domain::{TemplateListing, TemplateSource};

use crate::{
    cli::{ListArgs, ListFormat, OutputFormat},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let listing = super::alias_service(&config).list()?;

    // `--output-format json` wins over the per-command layout.
    if output.format() == OutputFormat::Json {
        return output
            .emit_json(&listing)
            .with_cli_context(|| "failed to write listing");
    }

    if listing.is_empty() {
        return output
            .info("no templates")
            .with_cli_context(|| "failed to write listing");
    }

    match args.format {
        ListFormat::Table => print_table(&listing, &output),
        ListFormat::List => listing.iter().try_for_each(|t| output.emit(&t.name)),
    }
    .with_cli_context(|| "failed to write listing")
}

/// `NAME  TYPE  SOURCE` table. SOURCE is the alias reference, blank for builtins.
fn print_table(listing: &[TemplateListing], output: &OutputManager) -> std::io::Result<()> {
    let width = listing
        .iter()
        .map(|t| t.name.len())
        .max()
        .unwrap_or(0)
        .max("NAME".len());

    let heading = format!("{:<width$}  {:<7}  SOURCE", "NAME", "TYPE");
    output.emit(&output.header(&heading))?;

    for template in listing {
        output.emit(&format_row(template, width))?;
    }
    Ok(())
}

fn format_row(template: &TemplateListing, width: usize) -> String {
    match &template.source {
        TemplateSource::Alias(reference) => format!(
            "{:<width$}  {:<7}  {reference}",
            template.name,
            template.source.kind()
        ),
        TemplateSource::Builtin => {
            format!("{:<width$}  {}", template.name, template.source.kind())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_column_shows_the_kind() {
        let alias = TemplateListing::alias("report", "gh:me/report");
        let builtin = TemplateListing::builtin("basic");

        assert_eq!(format_row(&alias, 6), "report  alias    gh:me/report");
        assert_eq!(format_row(&builtin, 6), "basic   builtin");
    }
}
