//! Extra template context and render requests.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::domain::error::DomainError;

/// Context key the allocated prefix is injected under.
pub const PREFIX_KEY: &str = "wkdir_prefix";

/// Key/value pairs forwarded to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtraContext {
    entries: BTreeMap<String, String>,
}

impl ExtraContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `key=value` items.
    ///
    /// Each item is split at its first `=`; key and value are trimmed. Items
    /// without `=` or with an empty key are returned as errors alongside the
    /// parsed context so the caller can report and skip them individually.
    /// Later duplicates overwrite earlier ones.
    pub fn parse<I, S>(items: I) -> (Self, Vec<DomainError>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ctx = Self::new();
        let mut rejected = Vec::new();

        for item in items {
            let item = item.as_ref();
            match item.split_once('=') {
                Some((key, value)) if !key.trim().is_empty() => {
                    ctx.insert(key.trim(), value.trim());
                }
                _ => rejected.push(DomainError::MalformedContextEntry {
                    entry: item.to_string(),
                }),
            }
        }

        (ctx, rejected)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Everything the renderer needs for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    /// Resolved template location (path, URL, or repository locator).
    pub template: String,
    /// Suppress the renderer's own prompts.
    pub no_input: bool,
    pub extra_context: ExtraContext,
    pub output_dir: PathBuf,
    /// Always `false` for requests built by this crate.
    pub overwrite_if_exists: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_key_value_pairs() {
        let (ctx, rejected) = ExtraContext::parse(["name=analysis", "author = Ana "]);
        assert!(rejected.is_empty());
        assert_eq!(ctx.get("name"), Some("analysis"));
        assert_eq!(ctx.get("author"), Some("Ana"));
    }

    #[test]
    fn splits_on_first_equals_only() {
        let (ctx, _) = ExtraContext::parse(["query=a=b"]);
        assert_eq!(ctx.get("query"), Some("a=b"));
    }

    #[test]
    fn empty_value_is_allowed() {
        let (ctx, rejected) = ExtraContext::parse(["wkdir_prefix="]);
        assert!(rejected.is_empty());
        assert_eq!(ctx.get(PREFIX_KEY), Some(""));
    }

    #[test]
    fn malformed_items_are_rejected_individually() {
        let (ctx, rejected) = ExtraContext::parse(["ok=1", "broken", "=novalue", "also=2"]);
        assert_eq!(ctx.len(), 2);
        assert_eq!(
            rejected,
            vec![
                DomainError::MalformedContextEntry {
                    entry: "broken".into()
                },
                DomainError::MalformedContextEntry {
                    entry: "=novalue".into()
                },
            ]
        );
    }

    #[test]
    fn last_duplicate_wins() {
        let (ctx, _) = ExtraContext::parse(["k=1", "k=2"]);
        assert_eq!(ctx.get("k"), Some("2"));
    }
}
