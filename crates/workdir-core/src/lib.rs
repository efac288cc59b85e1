//! workdir core - ports and adapters implementation
//!
//! Domain and application layers of `workdir`, a tool that creates numbered
//! working directories from cookiecutter templates.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           workdir-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (WorkdirService, AliasService)       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (AliasStore, BuiltinCatalog, Directory- │
//! │   Scanner, TemplateRenderer)            │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    workdir-adapters (Infrastructure)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use workdir_core::application::{NewWorkdir, WorkdirService};
//! use workdir_core::domain::ExtraContext;
//!
//! let service = WorkdirService::new(aliases, builtins, scanner, renderer);
//! let created = service.create(NewWorkdir {
//!     template: "report".into(),
//!     output_dir: "./projects".into(),
//!     extra_context: ExtraContext::new(),
//!     use_input: false,
//! })?;
//! println!("{}", created.path.display());
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AliasService, CreatedWorkdir, NewWorkdir, WorkdirService,
        ports::{AliasStore, BuiltinCatalog, DirectoryScanner, TemplateRenderer},
    };
    pub use crate::domain::{
        AliasEntry, ExtraContext, PREFIX_KEY, RenderRequest, TemplateListing, TemplateRef,
        TemplateSource,
    };
    pub use crate::error::{WorkdirError, WorkdirResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
