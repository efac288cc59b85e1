//! Output management and formatting.
//!
//! Status lines (success, warnings, info) go to stderr.  Command results go
//! to stdout through [`OutputManager::emit`], so `cd "$(workdir new ...)"`
//! keeps working whatever else is printed.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    color_results: bool,
    status: Term,
    results: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags.
    pub fn new(args: &GlobalArgs) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stderr().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        let no_color = args.no_color || resolved_format != OutputFormat::Human;

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color,
            color_results: !no_color && io::stdout().is_terminal(),
            status: Term::stderr(),
            results: Term::stdout(),
        }
    }

    // ── Results (stdout) ──────────────────────────────────────────────────

    /// Write a result line to stdout.  Never suppressed.
    pub fn emit(&self, line: &str) -> io::Result<()> {
        self.results.write_line(line)
    }

    /// Write `value` to stdout as pretty-printed JSON.
    pub fn emit_json<T: Serialize + ?Sized>(&self, value: &T) -> io::Result<()> {
        let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.emit(&json)
    }

    // ── Status (stderr) ───────────────────────────────────────────────────

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.status.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.  *Not* suppressed in quiet mode.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.status.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.status.write_line(&line)
    }

    /// Bold cyan header, used for table headings on stdout.
    pub fn header(&self, text: &str) -> String {
        if !self.color_results {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_manager(quiet: bool, format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            quiet,
            output_format: format,
            ..GlobalArgs::default()
        };
        OutputManager::new(&args)
    }

    #[test]
    fn quiet_suppresses_info() {
        let out = make_manager(true, OutputFormat::Plain);
        assert!(out.quiet);
        assert!(out.info("hello").is_ok());
    }

    #[test]
    fn plain_format_disables_color() {
        assert!(make_manager(false, OutputFormat::Plain).no_color);
        assert!(make_manager(false, OutputFormat::Json).no_color);
    }

    #[test]
    fn human_format_keeps_color_unless_disabled() {
        assert!(!make_manager(false, OutputFormat::Human).no_color);

        let args = GlobalArgs {
            no_color: true,
            output_format: OutputFormat::Human,
            ..GlobalArgs::default()
        };
        assert!(OutputManager::new(&args).no_color);
    }

    #[test]
    fn header_is_plain_without_color() {
        let out = make_manager(false, OutputFormat::Plain);
        assert_eq!(out.header("NAME"), "NAME");
    }

    #[test]
    fn format_accessor_returns_resolved() {
        let out = make_manager(false, OutputFormat::Json);
        assert_eq!(out.format(), OutputFormat::Json);
    }
}
