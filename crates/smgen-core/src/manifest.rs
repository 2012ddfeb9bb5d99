//! Manifest building: traversal, exclusion filtering, ordering, partitioning.
//!
//! A manifest is the sorted list of root-relative paths that qualify for
//! sitemap listing in one run. It is recomputed on every invocation and
//! never persisted. Qualification requires all of:
//!
//! - regular file (symlinks are not followed),
//! - readable by owner, group, and other,
//! - no exclusion rule matches (hidden entries, well-known control files,
//!   ownership-verification files, previously generated sitemap outputs).
//!
//! Ordering is byte-wise ascending on the full relative path. Paths are
//! compared as plain `String`s with `/` separators, so the order is
//! locale-free by construction and reproducible on any host.

use crate::config::{Config, PART_PREFIX, SITEMAP_NAME};
use crate::{Error, Result};
use std::path::Path;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Well-known crawler-control and metadata files never listed in a sitemap.
const EXCLUDED_NAMES: &[&str] = &["robots.txt", "humans.txt", "BingSiteAuth.xml"];

/// Google site-ownership verification files (`google<token>.html`).
fn is_ownership_verification(name: &str) -> bool {
    name.starts_with("google") && name.ends_with(".html")
}

/// Outputs of a previous run: the sitemap pair and any part files.
fn is_generated_output(name: &str) -> bool {
    if name == SITEMAP_NAME || name == "sitemap.xml.gz" {
        return true;
    }
    name.strip_prefix(PART_PREFIX)
        .is_some_and(|rest| rest.ends_with(".xml") || rest.ends_with(".xml.gz"))
}

/// Whether a file name is excluded regardless of location in the tree.
fn is_excluded_name(name: &str) -> bool {
    EXCLUDED_NAMES.contains(&name) || is_ownership_verification(name) || is_generated_output(name)
}

/// Hidden entries (dot-prefixed) are pruned during descent. Covers VCS
/// directories, `.well-known`, and in-progress dot-named scratch files.
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_none_or(|name| name.starts_with('.'))
}

/// Readable by owner, group, and other. Files a web server cannot serve to
/// anonymous clients have no business in a sitemap.
#[cfg(unix)]
fn is_world_readable(metadata: &std::fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o444 == 0o444
}

#[cfg(not(unix))]
fn is_world_readable(_metadata: &std::fs::Metadata) -> bool {
    true
}

/// Sorted, filtered list of root-relative file paths for one run.
///
/// Invariant: non-empty. A walk yielding zero qualifying files fails with
/// [`Error::EmptyManifest`] instead of producing an empty sitemap.
#[derive(Debug)]
pub struct Manifest {
    entries: Vec<String>,
}

impl Manifest {
    /// Walk the configured root and build the manifest.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Walk`] if the traversal fails and
    /// [`Error::EmptyManifest`] if no file qualifies.
    pub fn build(config: &Config) -> Result<Self> {
        let root = config.root();
        let mut entries = Vec::new();

        for entry in WalkDir::new(root)
            .into_iter()
            .filter_entry(|e| !is_hidden(e))
        {
            let entry = entry.map_err(|source| Error::Walk {
                path: root.to_path_buf(),
                source,
            })?;

            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(rel) = qualify(&entry, root) {
                entries.push(rel);
            }
        }

        if entries.is_empty() {
            return Err(Error::EmptyManifest(root.to_path_buf()));
        }

        // Byte-wise ascending; String comparison is already locale-free.
        entries.sort_unstable();
        debug!(count = entries.len(), "manifest built");

        Ok(Self { entries })
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API completeness alongside [`Self::len`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in sorted order.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Split into contiguous chunks of at most `max_per_part` entries,
    /// preserving global order. Boundaries are purely positional.
    #[must_use]
    pub fn partition(&self, max_per_part: usize) -> Vec<&[String]> {
        self.entries.chunks(max_per_part).collect()
    }
}

/// Apply per-file qualification; returns the relative path when included.
fn qualify(entry: &DirEntry, root: &Path) -> Option<String> {
    let name = entry.file_name().to_str()?;
    if is_excluded_name(name) {
        debug!(path = %entry.path().display(), "excluded by name");
        return None;
    }

    let metadata = match entry.metadata() {
        Ok(metadata) => metadata,
        Err(error) => {
            warn!(path = %entry.path().display(), %error, "skipping unstatable file");
            return None;
        },
    };
    if !is_world_readable(&metadata) {
        debug!(path = %entry.path().display(), "excluded: not world-readable");
        return None;
    }

    let rel = entry.path().strip_prefix(root).ok()?;
    match rel.to_str() {
        Some(rel) => Some(rel.replace(std::path::MAIN_SEPARATOR, "/")),
        None => {
            warn!(path = %entry.path().display(), "skipping non-UTF-8 path");
            None
        },
    }
}
