//! Template renderer adapters.

mod cookiecutter;

pub use cookiecutter::{CookiecutterRenderer, DEFAULT_PROGRAM};
