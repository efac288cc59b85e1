//! Application layer for workdir.
//!
//! This layer contains:
//! - **Services**: use case orchestration (WorkdirService, AliasService)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer; the decision logic
//! itself (prefix allocation, context parsing) lives in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{AliasService, CreatedWorkdir, NewWorkdir, WorkdirService};

pub use ports::{AliasStore, BuiltinCatalog, DirectoryScanner, TemplateRenderer};

pub use error::ApplicationError;
