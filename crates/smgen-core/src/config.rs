//! Run configuration for sitemap generation.
//!
//! Every step of the pipeline reads the same handful of settings (root,
//! base URL, partition threshold, dry-run), so they are collected into a
//! single immutable [`Config`] constructed once at startup and passed
//! explicitly to the manifest builder and publisher. Nothing mutates a
//! config after construction.

use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Per-file ceiling from the sitemaps protocol.
pub const PROTOCOL_MAX_URLS: usize = 50_000;

/// Default maximum entries per published file.
///
/// 70% of the protocol's 50 000-URL ceiling, leaving headroom and keeping
/// individual files smaller.
pub const DEFAULT_MAX_PER_PART: usize = 35_000;

/// Published sitemap filename at the root.
pub const SITEMAP_NAME: &str = "sitemap.xml";

/// Filename prefix for multi-part sitemap chunks.
pub const PART_PREFIX: &str = "site.map.part.";

/// Immutable settings for one generation run.
#[derive(Debug, Clone)]
pub struct Config {
    root: PathBuf,
    base_url: String,
    max_per_part: usize,
    dry_run: bool,
}

impl Config {
    /// Build a validated configuration.
    ///
    /// The root must exist and be a directory; the base URL has any trailing
    /// slash stripped so path joining stays predictable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RootMissing`] if `root` does not exist or is not a
    /// directory.
    pub fn new(root: PathBuf, base_url: &str, max_per_part: usize, dry_run: bool) -> Result<Self> {
        if !root.is_dir() {
            return Err(Error::RootMissing(root));
        }

        Ok(Self {
            root,
            base_url: base_url.trim_end_matches('/').to_owned(),
            max_per_part,
            dry_run,
        })
    }

    /// Site document root being walked.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Base site URL (scheme + host, no trailing slash).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Maximum entries per published file before partitioning kicks in.
    #[must_use]
    pub const fn max_per_part(&self) -> usize {
        self.max_per_part
    }

    /// Whether publishing side effects are suppressed.
    #[must_use]
    pub const fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Absolute URL for a root-relative path.
    #[must_use]
    pub fn url_for(&self, rel_path: &str) -> String {
        format!("{}/{rel_path}", self.base_url)
    }

    /// Published path of the top-level sitemap.
    #[must_use]
    pub fn sitemap_path(&self) -> PathBuf {
        self.root.join(SITEMAP_NAME)
    }

    /// Published path of part `n` (1-based).
    #[must_use]
    pub fn part_path(&self, n: usize) -> PathBuf {
        self.root.join(format!("{PART_PREFIX}{n}.xml"))
    }

    /// Root-relative name of part `n`'s compressed file, as referenced from
    /// the index document.
    #[must_use]
    pub fn part_gz_name(n: usize) -> String {
        format!("{PART_PREFIX}{n}.xml.gz")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slash_from_base_url() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(
            dir.path().to_path_buf(),
            "https://example.com/",
            DEFAULT_MAX_PER_PART,
            false,
        )
        .unwrap();

        assert_eq!(config.base_url(), "https://example.com");
        assert_eq!(config.url_for("a.html"), "https://example.com/a.html");
    }

    #[test]
    fn rejects_missing_root() {
        let err = Config::new(
            PathBuf::from("/no/such/dir"),
            "https://example.com",
            DEFAULT_MAX_PER_PART,
            false,
        )
        .unwrap_err();

        assert_eq!(err.exit_code(), 6);
    }

    #[test]
    fn rejects_file_as_root() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("not-a-dir");
        std::fs::write(&file, "x").unwrap();

        assert!(Config::new(file, "https://example.com", 10, false).is_err());
    }

    #[test]
    fn part_paths_are_one_based() {
        let dir = tempfile::tempdir().unwrap();
        let config =
            Config::new(dir.path().to_path_buf(), "https://example.com", 10, false).unwrap();

        assert!(
            config
                .part_path(1)
                .ends_with(Path::new("site.map.part.1.xml"))
        );
        assert_eq!(Config::part_gz_name(3), "site.map.part.3.xml.gz");
    }
}
