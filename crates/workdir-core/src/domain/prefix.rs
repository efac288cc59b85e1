//! Numeric prefix allocation for sibling working directories.
//!
//! Working directories are kept in order by a zero-padded numeric prefix:
//!
//! ```text
//! output/
//! ├── 01_setup/
//! ├── 02_survey/
//! └── 03_analysis/   ← next one gets "04_"
//! ```
//!
//! Allocation is a pure function over directory names so it can be tested
//! without touching the filesystem; the directory listing itself is done by
//! a [`DirectoryScanner`](crate::application::ports::DirectoryScanner).
//!
//! # Width
//!
//! The successor is padded to the widest digit run seen, never less than
//! [`MIN_WIDTH`]. A tree that already contains `123_x` keeps three digits even
//! if other entries use two. The width is tracked independently of the
//! maximum, so the result does not depend on listing order.

use std::sync::OnceLock;

use regex::Regex;

/// Minimum number of digits in an allocated prefix.
pub const MIN_WIDTH: usize = 2;

/// Separator between the numeric prefix and the rest of the name.
pub const SEPARATOR: char = '_';

fn prefix_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^([0-9]+)_").unwrap())
}

/// The numeric prefix of a single directory name, if it has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberedName {
    pub number: u64,
    pub width: usize,
}

impl NumberedName {
    /// Parse the leading `<digits>_` of `name`.
    ///
    /// Digit runs too large for a `u64` are ignored, as are names without a
    /// trailing underscore after the digits.
    pub fn parse(name: &str) -> Option<Self> {
        let digits = prefix_regex().captures(name)?.get(1)?.as_str();
        let number = digits.parse::<u64>().ok().filter(|n| *n < u64::MAX)?;
        Some(Self {
            number,
            width: digits.len(),
        })
    }
}

/// Running state of an allocation scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrefixState {
    max: Option<u64>,
    width: usize,
}

impl PrefixState {
    /// Fold one directory name into the state.
    pub fn observe(&mut self, name: &str) {
        if let Some(numbered) = NumberedName::parse(name) {
            self.max = Some(self.max.map_or(numbered.number, |m| m.max(numbered.number)));
            self.width = self.width.max(numbered.width);
        }
    }

    /// The prefix for the next directory, or an empty string if no numbered
    /// directory was observed.
    pub fn next_prefix(&self) -> String {
        match self.max {
            None => String::new(),
            Some(max) => {
                let width = self.width.max(MIN_WIDTH);
                format!("{:0width$}{SEPARATOR}", max + 1)
            }
        }
    }
}

/// Compute the next prefix from a set of sibling directory names.
///
/// ```
/// use workdir_core::domain::prefix::next_prefix;
///
/// assert_eq!(next_prefix(["01_a", "02_b"]), "03_");
/// assert_eq!(next_prefix(["123_x", "04_y"]), "124_");
/// assert_eq!(next_prefix(["notes", "misc"]), "");
/// ```
pub fn next_prefix<I, S>(names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut state = PrefixState::default();
    for name in names {
        state.observe(name.as_ref());
    }
    state.next_prefix()
}
