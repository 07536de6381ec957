//! emojicon: replace emoji characters with Bootstrap Icons markup
//!
//! Loads an HTML file, substitutes every mapped emoji with its `<i class="bi ...">`
//! snippet, and writes the file back.
//!
//! # Design Principles
//! - No regex: literal substring search via `memmem`
//! - No HTML parsing: plain text in, plain text out
//! - Sequential application: each table entry is applied to the result of the
//!   previous one; a valid table makes the order irrelevant
//! - Everything outside a matched emoji is preserved byte-for-byte

pub mod error;
pub mod file;
pub mod replace;
pub mod report;
pub mod table;

use std::borrow::Cow;

use memchr::memmem;
use tracing::trace;

// Re-export primary types
pub use error::{Error, Result};
pub use file::{RewriteOptions, WriteMode, rewrite_file};
pub use report::Report;
pub use table::{BOOTSTRAP_ICONS, ReplacementTable, TableError};

/// Line printed after a successful rewrite.
pub const SUCCESS_MESSAGE: &str = "✓ Successfully replaced all emojis with Bootstrap icons!";

/// File rewritten when no path is given.
pub const DEFAULT_PATH: &str = "index.html";

/// Replace emojis using the built-in Bootstrap Icons table.
///
/// This is the primary API for simple use cases.
///
/// # Example
/// ```
/// let html = emojicon::replace_emojis("Award: 🏆 done ✅");
/// assert_eq!(
///     html,
///     "Award: <i class=\"bi bi-trophy-fill\"></i> done <i class=\"bi bi-check-circle-fill\"></i>"
/// );
/// ```
pub fn replace_emojis(input: &str) -> String {
    replace_emojis_with(input, &ReplacementTable::bootstrap())
}

/// Replace emojis using a custom table.
pub fn replace_emojis_with(input: &str, table: &ReplacementTable<'_>) -> String {
    apply_table(input, table).0.into_owned()
}

/// Replace emojis into a provided buffer.
///
/// The buffer is cleared first. Returns the per-entry counts.
pub fn replace_emojis_into<'t>(
    input: &str,
    out: &mut String,
    table: &ReplacementTable<'t>,
) -> Report<'t> {
    let (replaced, report) = apply_table(input, table);
    match replaced {
        Cow::Borrowed(s) => {
            out.clear();
            out.push_str(s);
        }
        Cow::Owned(s) => *out = s,
    }
    report
}

/// Replace emojis and report how many times each entry matched.
///
/// # Example
/// ```
/// use emojicon::{replace_emojis_with_report, ReplacementTable};
///
/// let (html, report) = replace_emojis_with_report("✨✨ 🚀", &ReplacementTable::bootstrap());
/// assert_eq!(report.count("✨"), Some(2));
/// assert!(html.ends_with(" 🚀"));
/// ```
pub fn replace_emojis_with_report<'t>(
    input: &str,
    table: &ReplacementTable<'t>,
) -> (String, Report<'t>) {
    let (replaced, report) = apply_table(input, table);
    (replaced.into_owned(), report)
}

/// Apply each entry in table order to the running result.
///
/// Borrows `input` until the first entry that matches; two buffers are
/// swapped between passes after that.
fn apply_table<'i, 't>(input: &'i str, table: &ReplacementTable<'t>) -> (Cow<'i, str>, Report<'t>) {
    let mut report = Report::with_capacity(table.len());
    let mut current: Cow<'i, str> = Cow::Borrowed(input);
    let mut scratch = String::new();

    for (key, value) in table.iter() {
        if key.is_empty() || memmem::find(current.as_bytes(), key.as_bytes()).is_none() {
            report.record(key, 0);
            continue;
        }

        scratch.clear();
        let grow = value.len().saturating_sub(key.len());
        scratch.reserve(current.len() + grow * 4);
        let count = replace::replace_into(&mut scratch, &current, key, value);
        trace!(key, count, "replaced");
        report.record(key, count);

        if let Cow::Borrowed(_) = current {
            current = Cow::Owned(std::mem::take(&mut scratch));
        } else {
            std::mem::swap(current.to_mut(), &mut scratch);
        }
    }

    (current, report)
}
