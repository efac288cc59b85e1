//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--config`)
//! 2. Environment variables prefixed `WORKDIR_` (a `.env` file is loaded
//!    into the environment before this runs)
//! 3. Built-in defaults
//!
//! `WORKDIR_RENDERER` names the program `new` executes, so it is only
//! honoured from the real environment, never from `.env`.

use std::path::PathBuf;

use anyhow::Context;
use config::{Config, Environment};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use workdir_adapters::renderer::DEFAULT_PROGRAM;

/// Prefix of the environment variables read into [`AppConfig`].
pub const ENV_PREFIX: &str = "WORKDIR";

/// Variable selecting the renderer command line.
pub const RENDERER_VAR: &str = "WORKDIR_RENDERER";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Alias file (`WORKDIR_CONFIG`).
    pub config: Option<PathBuf>,
    /// Packaged templates root override (`WORKDIR_TEMPLATES_DIR`).
    pub templates_dir: Option<PathBuf>,
    /// Renderer command line (`WORKDIR_RENDERER`).
    pub renderer: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            templates_dir: None,
            renderer: DEFAULT_PROGRAM.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// `config_file` is the path the user passed via `--config`; it takes
    /// precedence over `WORKDIR_CONFIG`.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX), config_file)
    }

    fn from_environment(env: Environment, config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut cfg: Self = Config::builder()
            .add_source(env)
            .build()
            .context("failed to read WORKDIR_* environment variables")?
            .try_deserialize()
            .context("invalid WORKDIR_* configuration")?;

        // Set-but-empty variables count as unset.
        cfg.config = cfg.config.filter(|p| !p.as_os_str().is_empty());
        cfg.templates_dir = cfg.templates_dir.filter(|p| !p.as_os_str().is_empty());
        if cfg.renderer.trim().is_empty() {
            cfg.renderer = DEFAULT_PROGRAM.to_string();
        }

        if let Some(path) = config_file {
            cfg.config = Some(path.clone());
        }

        debug!(?cfg, "configuration loaded");
        Ok(cfg)
    }

    /// Keep the renderer only if it came from the shell environment.
    ///
    /// `shell_renderer` is `WORKDIR_RENDERER` as captured before `.env` was
    /// loaded; anything else in `self.renderer` came from `.env`.
    pub fn keep_shell_renderer(mut self, shell_renderer: Option<String>) -> Self {
        let trusted = shell_renderer
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PROGRAM.to_string());
        if self.renderer != trusted {
            warn!(
                ignored = %self.renderer,
                "{RENDERER_VAR} from .env is ignored; set it in the environment instead"
            );
            self.renderer = trusted;
        }
        self
    }

    /// Alias file in effect.
    pub fn alias_file(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Self::config_path)
    }

    /// Path to the default alias file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.workdir.yaml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "workdir")
            .map(|d| d.config_dir().join("config.yaml"))
            .unwrap_or_else(|| PathBuf::from(".workdir.yaml"))
    }
}
