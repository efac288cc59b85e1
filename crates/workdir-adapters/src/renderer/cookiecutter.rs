//! Cookiecutter subprocess renderer.

use std::{
    collections::BTreeSet,
    io,
    path::PathBuf,
    process::{Command, Stdio},
};

use tracing::{debug, info, instrument};

use workdir_core::{
    application::{
        ApplicationError,
        ports::{DirectoryScanner, TemplateRenderer},
    },
    domain::RenderRequest,
    error::WorkdirResult,
};

use crate::filesystem::LocalFilesystem;

/// Program used when no renderer command is configured.
pub const DEFAULT_PROGRAM: &str = "cookiecutter";

/// Renders templates by running the `cookiecutter` command line.
///
/// The child's stdout is sent to our stderr so that stdout stays reserved
/// for the created path.
#[derive(Debug, Clone)]
pub struct CookiecutterRenderer {
    program: String,
    leading_args: Vec<String>,
    scanner: LocalFilesystem,
}

impl CookiecutterRenderer {
    pub fn new() -> Self {
        Self::from_command(DEFAULT_PROGRAM)
    }

    /// Build from a command line such as `"pipx run cookiecutter"`.
    ///
    /// The first word is the program and the rest are passed before the
    /// generated arguments. A blank command falls back to `cookiecutter`.
    pub fn from_command(command: &str) -> Self {
        let mut words = command.split_whitespace().map(str::to_string);
        let program = words.next().unwrap_or_else(|| DEFAULT_PROGRAM.to_string());
        Self {
            program,
            leading_args: words.collect(),
            scanner: LocalFilesystem::new(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// The command that would render `request`. Nothing is spawned.
    pub fn command(&self, request: &RenderRequest) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.leading_args);

        if request.no_input {
            cmd.arg("--no-input");
        }
        if request.overwrite_if_exists {
            cmd.arg("--overwrite-if-exists");
        }
        cmd.arg("--output-dir").arg(&request.output_dir);
        cmd.arg(&request.template);

        for (key, value) in request.extra_context.iter() {
            cmd.arg(format!("{key}={value}"));
        }
        cmd
    }

    fn snapshot(&self, request: &RenderRequest) -> WorkdirResult<BTreeSet<String>> {
        Ok(self
            .scanner
            .subdirectory_names(&request.output_dir)?
            .into_iter()
            .collect())
    }
}

impl Default for CookiecutterRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for CookiecutterRenderer {
    #[instrument(skip_all, fields(program = %self.program, template = %request.template))]
    fn render(&self, request: &RenderRequest) -> WorkdirResult<PathBuf> {
        let before = self.snapshot(request)?;

        let mut cmd = self.command(request);
        cmd.stdout(Stdio::from(io::stderr()));
        debug!(?cmd, "spawning renderer");

        let status = cmd
            .status()
            .map_err(|e| ApplicationError::RenderingFailed {
                reason: format!("failed to run `{}`: {e}", self.program),
            })?;

        if !status.success() {
            return Err(ApplicationError::RenderingFailed {
                reason: format!("`{}` exited with {status}", self.program),
            }
            .into());
        }

        let after = self.snapshot(request)?;
        let created = after
            .difference(&before)
            .next()
            .ok_or_else(|| ApplicationError::RenderingFailed {
                reason: "renderer finished without creating a directory".to_string(),
            })?;

        let path = request.output_dir.join(created);
        info!(path = %path.display(), "rendered template");
        Ok(path)
    }
}
