//! Application services - orchestrate use cases.

pub mod alias_service;
pub mod workdir_service;

pub use alias_service::AliasService;
pub use workdir_service::{CreatedWorkdir, NewWorkdir, WorkdirService};
