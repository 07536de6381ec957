//! Literal substring replacement.
//!
//! Fast-path optimized: searches for the first occurrence with `memmem`,
//! then bulk-copies the segments between matches.

use memchr::memmem;

/// Append `haystack` to `out`, replacing every non-overlapping occurrence of
/// `needle` (scanned left to right) with `replacement`.
///
/// Returns the number of replacements made. An empty `needle` copies the
/// input unchanged.
///
/// # Example
/// ```
/// use emojicon::replace::replace_into;
///
/// let mut out = String::new();
/// let n = replace_into(&mut out, "a✅b✅", "✅", "!");
/// assert_eq!(out, "a!b!");
/// assert_eq!(n, 2);
/// ```
#[inline]
pub fn replace_into(out: &mut String, haystack: &str, needle: &str, replacement: &str) -> usize {
    if needle.is_empty() {
        out.push_str(haystack);
        return 0;
    }

    let finder = memmem::Finder::new(needle.as_bytes());
    let mut matches = finder.find_iter(haystack.as_bytes()).peekable();

    if matches.peek().is_none() {
        out.push_str(haystack);
        return 0;
    }

    let mut count = 0;
    let mut last = 0;
    for pos in matches {
        // Match boundaries are char boundaries: needle and haystack are both UTF-8.
        out.push_str(&haystack[last..pos]);
        out.push_str(replacement);
        last = pos + needle.len();
        count += 1;
    }
    out.push_str(&haystack[last..]);
    count
}
