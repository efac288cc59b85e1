//! Core domain layer for workdir.
//!
//! Pure logic only: template references, alias validation, extra context
//! parsing and prefix allocation. All I/O happens behind the ports defined in
//! the application layer.
//!
//! - **No I/O**: no filesystem, network, or process calls
//! - **Deterministic**: the same inputs always give the same outputs

pub mod context;
pub mod error;
pub mod prefix;
pub mod template_ref;

pub use context::{ExtraContext, PREFIX_KEY, RenderRequest};
pub use error::{DomainError, ErrorCategory};
pub use prefix::{NumberedName, PrefixState, next_prefix};
pub use template_ref::{AliasEntry, BUILTIN_TAG, TemplateListing, TemplateRef, TemplateSource};
