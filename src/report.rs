//! Per-entry replacement counts.

use std::fmt;

use smallvec::SmallVec;

/// How many times each table entry was replaced, in table order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report<'a> {
    counts: SmallVec<[(&'a str, usize); 16]>,
}

impl<'a> Report<'a> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: SmallVec::with_capacity(capacity),
        }
    }

    #[inline]
    pub(crate) fn record(&mut self, key: &'a str, count: usize) {
        self.counts.push((key, count));
    }

    /// Total number of replacements across all entries.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|&(_, n)| n).sum()
    }

    /// True if nothing was replaced.
    pub fn is_unchanged(&self) -> bool {
        self.total() == 0
    }

    /// Replacement count for `key`, or `None` if it is not a table key.
    pub fn count(&self, key: &str) -> Option<usize> {
        self.counts.iter().find(|(k, _)| *k == key).map(|&(_, n)| n)
    }

    /// All entries with their counts, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, usize)> + '_ {
        self.counts.iter().copied()
    }

    /// Only the entries that were replaced at least once.
    pub fn replaced(&self) -> impl Iterator<Item = (&'a str, usize)> + '_ {
        self.iter().filter(|&(_, n)| n > 0)
    }
}

impl fmt::Display for Report<'_> {
    /// `3 replacements (🏆 ×2, ✅ ×1)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.total();
        write!(f, "{total} replacement{}", if total == 1 { "" } else { "s" })?;
        let mut first = true;
        for (key, n) in self.replaced() {
            f.write_str(if first { " (" } else { ", " })?;
            write!(f, "{key} ×{n}")?;
            first = false;
        }
        if !first {
            f.write_str(")")?;
        }
        Ok(())
    }
}
