//! Application ports (traits) for external dependencies.
//!
//! Ports define what the application needs from the outside world; adapters
//! in `workdir-adapters` implement them.
//!
//! ## Driven (output) ports
//!
//! - `AliasStore`: persisted alias table
//! - `BuiltinCatalog`: templates packaged with the tool
//! - `DirectoryScanner`: directory listing for prefix allocation
//! - `TemplateRenderer`: external renderer invocation

pub mod output;

pub use output::{AliasStore, BuiltinCatalog, DirectoryScanner, TemplateRenderer};
