//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "workdir",
    bin_name = "workdir",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Create numbered working directories from cookiecutter templates",
    long_about = "workdir renders a cookiecutter template into an existing directory, \
                  prefixing the new folder with the next free number \
                  (01_, 02_, ...) among its siblings.",
    after_help = "EXAMPLES:\n\
        \x20 workdir new -t basic -o ~/projects -c name=analysis\n\
        \x20 workdir add-alias report gh:me/report-template\n\
        \x20 workdir new -t report -o ~/projects --use-input\n\
        \x20 workdir list",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new working directory from a template.
    #[command(
        visible_alias = "n",
        about = "Create a new working directory",
        after_help = "EXAMPLES:\n\
            \x20 workdir new -t basic -o . -c name=notes\n\
            \x20 workdir new -t gh:me/tpl -o ~/work --use-input\n\
            \x20 workdir new -t report -o . -c wkdir_prefix=A_ -c name=draft"
    )]
    New(NewArgs),

    /// List aliases and builtin templates.
    #[command(
        visible_alias = "ls",
        about = "List available templates",
        after_help = "EXAMPLES:\n\
            \x20 workdir list\n\
            \x20 workdir list --format list\n\
            \x20 workdir --output-format json list"
    )]
    List(ListArgs),

    /// Register or replace a template alias.
    #[command(about = "Add a template alias")]
    AddAlias(AddAliasArgs),

    /// Delete a template alias.
    #[command(about = "Remove a template alias")]
    RemoveAlias(RemoveAliasArgs),

    /// Print the program version.
    #[command(about = "Show version")]
    Version,

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 workdir completions bash > ~/.local/share/bash-completion/completions/workdir\n\
            \x20 workdir completions zsh  > ~/.zfunc/_workdir\n\
            \x20 workdir completions fish > ~/.config/fish/completions/workdir.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `workdir new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Template to use: an alias, a builtin name, or a cookiecutter reference.
    #[arg(
        short = 't',
        long = "type",
        value_name = "TEMPLATE",
        help = "Alias, builtin name, path, or URL of the template"
    )]
    pub template: String,

    /// Directory the working directory is created in.  Must already exist.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Existing directory to create the working directory in"
    )]
    pub output: PathBuf,

    /// Extra template variables.
    #[arg(
        short = 'c',
        long = "extra-context",
        value_name = "KEY=VALUE",
        action = clap::ArgAction::Append,
        help = "Template variable, may be repeated"
    )]
    pub extra_context: Vec<String>,

    /// Let cookiecutter prompt for template variables.
    #[arg(long = "use-input", help = "Prompt for template variables")]
    pub use_input: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `workdir list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Text layout.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Text layout for the `list` command.  JSON goes through the global
/// `--output-format json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// NAME / TYPE / SOURCE table.
    Table,
    /// One name per line.
    List,
}

// ── aliases ───────────────────────────────────────────────────────────────────

/// Arguments for `workdir add-alias`.
#[derive(Debug, Args)]
pub struct AddAliasArgs {
    /// Alias name.
    #[arg(value_name = "ALIAS")]
    pub alias: String,

    /// Template reference the alias expands to.
    #[arg(value_name = "REFERENCE")]
    pub reference: String,
}

/// Arguments for `workdir remove-alias`.
#[derive(Debug, Args)]
pub struct RemoveAliasArgs {
    /// Alias name.
    #[arg(value_name = "ALIAS")]
    pub alias: String,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `workdir completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
