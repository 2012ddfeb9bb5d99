//! Modification-time resolution, probed once per run.
//!
//! The publisher needs one working way to read a file's modification time
//! and format it as W3C date-time in UTC. Platform support for
//! `fs::Metadata::modified` is not guaranteed, so the capability is probed
//! exactly once at startup against a path known to exist and the resulting
//! [`ModTimeSource`] is injected into every later step. A run on a platform
//! without a usable method fails before any output file is touched.

use crate::{Error, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Proof that modification times are readable on this platform.
///
/// Constructed only by a successful [`ModTimeSource::probe`]; holding a
/// value means every later `modified` call uses the same method the probe
/// validated.
#[derive(Debug, Clone, Copy)]
pub struct ModTimeSource(());

impl ModTimeSource {
    /// Probe the platform's modification-time support against `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ModTimeUnsupported`] if the platform cannot report
    /// a modification time for the probe path.
    pub fn probe(path: &Path) -> Result<Self> {
        let probed = fs::metadata(path)
            .and_then(|metadata| metadata.modified())
            .map_err(|source| Error::ModTimeUnsupported {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(path = %path.display(), probed = %format_w3c(probed.into()), "mtime probe ok");
        Ok(Self(()))
    }

    /// Modification time of `path` as UTC.
    pub fn modified(&self, path: &Path) -> Result<DateTime<Utc>> {
        let modified = fs::metadata(path)?.modified()?;
        Ok(modified.into())
    }

    /// Modification time of `path` formatted as W3C date-time.
    pub fn lastmod(&self, path: &Path) -> Result<String> {
        Ok(format_w3c(self.modified(path)?))
    }
}

/// Format a timestamp as W3C date-time: `YYYY-MM-DDTHH:MM:SS+00:00`.
#[must_use]
pub fn format_w3c(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%dT%H:%M:%S+00:00").to_string()
}
