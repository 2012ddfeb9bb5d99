//! Error types and handling for smgen-core operations.
//!
//! This module provides a comprehensive error type covering every failure
//! site in the sitemap generation pipeline. All failures are fatal: the tool
//! has no partial-success mode and no retry logic, so each variant exists to
//! terminate the run with a distinct, diagnosable exit code.
//!
//! ## Error Categories
//!
//! - **Setup errors**: missing root directory, unusable modification-time
//!   source — reported before any output file is touched.
//! - **Manifest errors**: empty traversal result, traversal I/O failure —
//!   reported before any publish step.
//! - **Publish errors**: empty candidate, failed atomic replace, failed
//!   compression, empty published file — each aborts after scratch cleanup,
//!   leaving any previously published sitemap stale rather than corrupt.
//!
//! ## Exit Codes
//!
//! Each variant maps to a stable process exit code via [`Error::exit_code`].
//! Codes below 10 are reserved for CLI-level conditions (argument errors,
//! help, missing root, no mtime method); codes 10 and up identify internal
//! failure sites one-to-one.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for smgen-core operations.
///
/// All public functions in smgen-core return `Result<T, Error>`. Variants
/// carry the path they were working on plus the underlying `std::io::Error`
/// where one exists, so the full failure chain survives to the final log
/// line.
#[derive(Error, Debug)]
pub enum Error {
    /// The configured root path does not exist or is not a directory.
    ///
    /// Reported before any traversal or output work. Usually indicates the
    /// tool was pointed at the wrong document root.
    #[error("root path missing or not a directory: {0}")]
    RootMissing(PathBuf),

    /// No supported method to read file modification times.
    ///
    /// The startup probe could not read a modification time from a known
    /// path. Without one, `<lastmod>` values cannot be produced, so the run
    /// aborts before touching any output.
    #[error("no supported modification-time method (probe of {path} failed)")]
    ModTimeUnsupported {
        /// Path the probe was aimed at.
        path: PathBuf,
        /// Underlying platform error.
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal produced zero qualifying files.
    ///
    /// An empty manifest is treated as a misconfiguration (wrong root, or a
    /// filter excluding everything), never as grounds for publishing an
    /// empty sitemap.
    #[error("no qualifying files found under {0}")]
    EmptyManifest(PathBuf),

    /// Directory traversal failed partway through.
    #[error("traversal failed under {path}")]
    Walk {
        /// Root the walk started from.
        path: PathBuf,
        /// Underlying walkdir error.
        #[source]
        source: walkdir::Error,
    },

    /// A rendered candidate document came out empty.
    ///
    /// Defensive check against an upstream step silently producing nothing;
    /// applied uniformly to leaf, part, and index documents.
    #[error("rendered candidate for {0} is empty")]
    EmptyCandidate(PathBuf),

    /// Atomic replacement of a published file failed.
    #[error("failed to replace published file {target}")]
    Replace {
        /// Publish destination.
        target: PathBuf,
        /// Rename/persist error.
        #[source]
        source: std::io::Error,
    },

    /// Gzip compression of a published file failed.
    #[error("failed to compress {target}")]
    Compress {
        /// The plain file being compressed.
        target: PathBuf,
        /// Underlying I/O error from the encoder.
        #[source]
        source: std::io::Error,
    },

    /// A published file was found empty after replacement.
    ///
    /// Post-condition check; firing means the atomic-replace discipline was
    /// violated somewhere and the published pair cannot be trusted.
    #[error("published file {0} is empty after replacement")]
    EmptyPublished(PathBuf),

    /// Any other I/O failure (scratch-file creation, comparison reads).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for smgen-core operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Stable process exit code for this failure.
    ///
    /// Codes are distinct per failure site so a bare exit status is enough
    /// to identify what went wrong in cron logs.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::RootMissing(_) => 6,
            Self::ModTimeUnsupported { .. } => 7,
            Self::EmptyManifest(_) => 10,
            Self::Walk { .. } => 11,
            Self::EmptyCandidate(_) => 12,
            Self::Replace { .. } => 13,
            Self::Compress { .. } => 14,
            Self::EmptyPublished(_) => 15,
            Self::Io(_) => 16,
        }
    }

    /// Whether this failure was detected before any output file was touched.
    ///
    /// Setup and manifest errors leave the published pair exactly as the
    /// previous run left it; publish errors may leave it stale but never
    /// half-written.
    #[must_use]
    pub const fn is_pre_publish(&self) -> bool {
        matches!(
            self,
            Self::RootMissing(_)
                | Self::ModTimeUnsupported { .. }
                | Self::EmptyManifest(_)
                | Self::Walk { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let errors = [
            Error::RootMissing(PathBuf::from("/x")),
            Error::ModTimeUnsupported {
                path: PathBuf::from("/x"),
                source: std::io::Error::other("probe"),
            },
            Error::EmptyManifest(PathBuf::from("/x")),
            Error::EmptyCandidate(PathBuf::from("/x")),
            Error::Replace {
                target: PathBuf::from("/x"),
                source: std::io::Error::other("rename"),
            },
            Error::Compress {
                target: PathBuf::from("/x"),
                source: std::io::Error::other("gzip"),
            },
            Error::EmptyPublished(PathBuf::from("/x")),
            Error::Io(std::io::Error::other("io")),
        ];

        let mut codes: Vec<i32> = errors.iter().map(Error::exit_code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn setup_errors_are_pre_publish() {
        assert!(Error::RootMissing(PathBuf::from("/x")).is_pre_publish());
        assert!(Error::EmptyManifest(PathBuf::from("/x")).is_pre_publish());
        assert!(!Error::EmptyPublished(PathBuf::from("/x")).is_pre_publish());
    }
}
