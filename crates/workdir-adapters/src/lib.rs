//! Infrastructure adapters for workdir.
//!
//! This crate implements the ports defined in `workdir-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod alias_store;
pub mod builtin_templates;
pub mod filesystem;
pub mod renderer;

// Re-export commonly used adapters
pub use alias_store::{InMemoryAliasStore, YamlAliasStore};
pub use builtin_templates::{BUILTIN_TEMPLATES, PackagedTemplates};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::CookiecutterRenderer;
