//! Rewrite a file in place: load, transform, persist.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::{Report, ReplacementTable, replace_emojis_with_report};

/// How the replaced content is written back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Truncate and overwrite the target. A failure mid-write can leave the
    /// file partially written.
    #[default]
    InPlace,
    /// Write a temporary file next to the target, then rename it over the
    /// target.
    Atomic,
}

/// Options for [`rewrite_file`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RewriteOptions {
    pub write_mode: WriteMode,
    /// Stop after transforming; leave the file untouched.
    pub dry_run: bool,
}

/// Replace every mapped emoji in the file at `path` and write it back.
///
/// Fails with [`Error::Read`] if the file is missing or unreadable (no file
/// is created), [`Error::Decode`] if it is not UTF-8, and [`Error::Write`]
/// if the result cannot be written.
pub fn rewrite_file<'t>(
    path: &Path,
    table: &ReplacementTable<'t>,
    options: &RewriteOptions,
) -> Result<Report<'t>> {
    let content = load(path)?;
    debug!(path = %path.display(), bytes = content.len(), "loaded");

    let (replaced, report) = replace_emojis_with_report(&content, table);
    debug!(replacements = report.total(), bytes = replaced.len(), "transformed");

    if options.dry_run {
        return Ok(report);
    }

    match options.write_mode {
        WriteMode::InPlace => persist_in_place(path, &replaced)?,
        WriteMode::Atomic => persist_atomic(path, &replaced)?,
    }
    info!(path = %path.display(), mode = ?options.write_mode, "{report}");

    Ok(report)
}

fn load(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })
}

fn persist_in_place(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn persist_atomic(path: &Path, content: &str) -> Result<()> {
    let write_err = |source: std::io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(content.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;

    // Keep the original file's permissions across the rename.
    match fs::metadata(path) {
        Ok(meta) => fs::set_permissions(tmp.path(), meta.permissions()).map_err(write_err)?,
        Err(e) => debug!(path = %path.display(), error = %e, "no permissions to carry over"),
    }

    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}
