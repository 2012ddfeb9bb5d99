//! Idempotent, atomic-replace publishing of sitemap documents.
//!
//! A candidate document is written to a scratch file in the target's own
//! directory (same filesystem, so the final step is a plain rename), then
//! byte-compared with the currently published file. Identical content is a
//! no-op; differing content atomically replaces the plain file and then its
//! gzip copy. A reader of the published path only ever sees the old complete
//! file or the new complete file.
//!
//! Scratch files are `NamedTempFile`s: dropped (and removed) on every error
//! path, so a failed run leaves no stray temporaries. Their dot-prefixed
//! names keep them out of any concurrently built manifest.

use crate::config::Config;
use crate::{Error, Result};
use flate2::Compression;
use flate2::write::GzEncoder;
use std::ffi::OsString;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// What `publish` did with a candidate document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    /// Published file already had identical content; candidate discarded.
    Unchanged,
    /// Published pair atomically replaced with the candidate.
    Replaced,
    /// Dry-run: content differed but the published pair was left untouched.
    WouldReplace,
}

/// Publishes rendered documents with the compare-then-rename discipline.
#[derive(Debug)]
pub struct Publisher {
    dry_run: bool,
}

impl Publisher {
    /// Build a publisher for this run's configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            dry_run: config.dry_run(),
        }
    }

    /// Publish `document` at `target`, updating the gzip sibling alongside.
    ///
    /// # Errors
    ///
    /// Fails on an empty candidate, an empty published result, or any
    /// rename/compression failure. Every failure leaves the previously
    /// published pair in place.
    pub fn publish(&self, document: &[u8], target: &Path) -> Result<PublishOutcome> {
        let parent = target.parent().unwrap_or_else(|| Path::new("."));
        let mut candidate = NamedTempFile::new_in(parent)?;
        candidate.write_all(document)?;
        candidate.flush()?;

        if candidate.as_file().metadata()?.len() == 0 {
            return Err(Error::EmptyCandidate(target.to_path_buf()));
        }

        match fs::read(target) {
            Ok(existing) if existing == document => {
                debug!(target = %target.display(), "unchanged, keeping published file");
                return Ok(PublishOutcome::Unchanged);
            },
            Ok(_) => {},
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {},
            Err(error) => return Err(error.into()),
        }

        if self.dry_run {
            info!(target = %target.display(), "dry-run: would replace");
            return Ok(PublishOutcome::WouldReplace);
        }

        // Scratch files are created 0o600; the published file must be
        // servable to anonymous clients.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            candidate
                .as_file()
                .set_permissions(fs::Permissions::from_mode(0o644))?;
        }

        candidate
            .persist(target)
            .map_err(|error| Error::Replace {
                target: target.to_path_buf(),
                source: error.error,
            })?;

        compress(target)?;

        if fs::metadata(target)?.len() == 0 {
            return Err(Error::EmptyPublished(target.to_path_buf()));
        }

        info!(target = %target.display(), "published");
        Ok(PublishOutcome::Replaced)
    }
}

/// Gzip a just-published plain file over its `.gz` sibling, with the same
/// scratch-then-rename discipline.
fn compress(target: &Path) -> Result<()> {
    let gz_target = gz_sibling(target);
    let parent = target.parent().unwrap_or_else(|| Path::new("."));

    let scratch = NamedTempFile::new_in(parent)?;
    let mut encoder = GzEncoder::new(scratch, Compression::default());
    let mut plain = fs::File::open(target)?;
    std::io::copy(&mut plain, &mut encoder).map_err(|source| Error::Compress {
        target: target.to_path_buf(),
        source,
    })?;
    let scratch = encoder.finish().map_err(|source| Error::Compress {
        target: target.to_path_buf(),
        source,
    })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        scratch
            .as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))?;
    }

    scratch
        .persist(&gz_target)
        .map_err(|error| Error::Replace {
            target: gz_target.clone(),
            source: error.error,
        })?;

    debug!(target = %gz_target.display(), "compressed copy updated");
    Ok(())
}

/// `sitemap.xml` -> `sitemap.xml.gz`.
#[must_use]
pub fn gz_sibling(target: &Path) -> PathBuf {
    let mut name = target.file_name().map_or_else(OsString::new, OsString::from);
    name.push(".gz");
    target.with_file_name(name)
}
