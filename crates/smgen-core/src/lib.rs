//! # smgen-core
//!
//! Core functionality for smgen - a batch sitemap generator for static
//! document roots.
//!
//! The crate walks a website's file tree, builds a deterministic manifest of
//! publicly readable files, renders sitemaps-protocol XML (a single `urlset`
//! or a `sitemapindex` plus fixed-size parts), and publishes the result with
//! an idempotent compare-then-atomic-rename discipline so unchanged runs are
//! exact no-ops.
//!
//! ## Architecture
//!
//! - **Configuration**: one immutable [`Config`] built at startup and passed
//!   explicitly through the pipeline
//! - **Manifest**: traversal, exclusion filtering, byte-wise ordering, and
//!   positional partitioning
//! - **Rendering**: fixed-shape `urlset` / `sitemapindex` documents
//! - **Publishing**: scratch-file candidates, byte comparison, atomic
//!   replacement of the plain + gzip pair
//! - **Error Handling**: one fatal error variant per failure site, each with
//!   a stable exit code
//!
//! ## Quick Start
//!
//! ```no_run
//! use smgen_core::{Config, Manifest, ModTimeSource, Publisher, Result};
//! use smgen_core::render::{render, DocumentKind, SitemapEntry};
//!
//! # fn main() -> Result<()> {
//! let config = Config::new("/var/www".into(), "https://example.com", 35_000, false)?;
//! let mtime = ModTimeSource::probe(config.root())?;
//! let manifest = Manifest::build(&config)?;
//!
//! let entries: Vec<SitemapEntry> = manifest
//!     .entries()
//!     .iter()
//!     .map(|rel| {
//!         Ok(SitemapEntry {
//!             loc: config.url_for(rel),
//!             lastmod: mtime.modified(&config.root().join(rel))?,
//!         })
//!     })
//!     .collect::<Result<_>>()?;
//!
//! let document = render(DocumentKind::UrlSet, &entries);
//! Publisher::new(&config).publish(&document, &config.sitemap_path())?;
//! # Ok(())
//! # }
//! ```

/// Immutable run configuration and well-known output names
pub mod config;
/// Error types and result aliases
pub mod error;
/// Manifest building: traversal, filtering, ordering, partitioning
pub mod manifest;
/// Modification-time capability, probed once per run
pub mod mtime;
/// Idempotent atomic publishing of document pairs
pub mod publish;
/// Sitemap XML rendering
pub mod render;

// Re-export commonly used types
pub use config::{Config, DEFAULT_MAX_PER_PART, PART_PREFIX, SITEMAP_NAME};
pub use error::{Error, Result};
pub use manifest::Manifest;
pub use mtime::ModTimeSource;
pub use publish::{PublishOutcome, Publisher};
pub use render::{DocumentKind, SitemapEntry};
