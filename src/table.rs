//! Emoji to icon-markup mapping table.
//!
//! A table is an ordered list of `(key, replacement)` pairs. Each key is a
//! single character, keys are unique, and no key occurs inside any
//! replacement value, so applying the entries one after another gives the
//! same result in any order.

use rustc_hash::FxHashSet;
use thiserror::Error;

/// Bootstrap Icons replacements, in application order.
pub const BOOTSTRAP_ICONS: &[(&str, &str)] = &[
    ("🏆", "<i class=\"bi bi-trophy-fill\"></i>"),
    ("💻", "<i class=\"bi bi-terminal-fill\"></i>"),
    ("🌐", "<i class=\"bi bi-globe2\"></i>"),
    ("🎨", "<i class=\"bi bi-palette-fill\"></i>"),
    ("🎬", "<i class=\"bi bi-camera-reels-fill\"></i>"),
    ("🍓", "<i class=\"bi bi-cpu-fill\"></i>"),
    ("🔬", "<i class=\"bi bi-flask\"></i>"),
    ("✅", "<i class=\"bi bi-check-circle-fill\"></i>"),
    ("✨", "<i class=\"bi bi-star-fill\"></i>"),
    ("🎯", "<i class=\"bi bi-bullseye\"></i>"),
];

/// Reasons a set of entries cannot form a table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("entry {index} has an empty key")]
    EmptyKey { index: usize },
    #[error("key {key:?} is not a single character")]
    MultiCharKey { key: String },
    #[error("key {key:?} appears more than once")]
    DuplicateKey { key: String },
    #[error("key {key:?} occurs inside the replacement for {owner:?}")]
    KeyInReplacement { key: String, owner: String },
}

/// A validated, immutable replacement table.
#[derive(Debug, Clone, Copy)]
pub struct ReplacementTable<'a> {
    entries: &'a [(&'a str, &'a str)],
}

impl ReplacementTable<'static> {
    /// The built-in emoji → Bootstrap Icons table.
    #[inline]
    pub const fn bootstrap() -> Self {
        Self {
            entries: BOOTSTRAP_ICONS,
        }
    }
}

impl Default for ReplacementTable<'static> {
    fn default() -> Self {
        Self::bootstrap()
    }
}

impl<'a> ReplacementTable<'a> {
    /// Build a table from caller-supplied entries.
    ///
    /// # Example
    /// ```
    /// use emojicon::ReplacementTable;
    ///
    /// let table = ReplacementTable::new(&[("🚀", "<i class=\"bi bi-rocket\"></i>")]).unwrap();
    /// assert_eq!(table.len(), 1);
    ///
    /// assert!(ReplacementTable::new(&[("a", "x"), ("b", "bab")]).is_err());
    /// ```
    pub fn new(entries: &'a [(&'a str, &'a str)]) -> Result<Self, TableError> {
        let mut seen = FxHashSet::default();
        seen.reserve(entries.len());

        for (index, &(key, _)) in entries.iter().enumerate() {
            if key.is_empty() {
                return Err(TableError::EmptyKey { index });
            }
            // Longer keys can overlap each other or straddle a replacement.
            if key.chars().nth(1).is_some() {
                return Err(TableError::MultiCharKey {
                    key: key.to_owned(),
                });
            }
            if !seen.insert(key) {
                return Err(TableError::DuplicateKey {
                    key: key.to_owned(),
                });
            }
        }

        // A key inside any value could be re-matched by a later pass.
        for &(key, _) in entries {
            if let Some(&(owner, _)) = entries
                .iter()
                .find(|(_, value)| memchr::memmem::find(value.as_bytes(), key.as_bytes()).is_some())
            {
                return Err(TableError::KeyInReplacement {
                    key: key.to_owned(),
                    owner: owner.to_owned(),
                });
            }
        }

        Ok(Self { entries })
    }

    /// Replacement for `key`, if mapped.
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|&(_, value)| value)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&'a str, &'a str)> + 'a {
        self.entries.iter().copied()
    }
}
