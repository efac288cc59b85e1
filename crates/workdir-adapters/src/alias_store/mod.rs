//! Alias store adapters.

mod memory;
mod yaml;

pub use memory::InMemoryAliasStore;
pub use yaml::{ConfigRecord, RecordError, YamlAliasStore};
