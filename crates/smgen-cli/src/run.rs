//! Orchestration: strategy selection and the publish sequence.
//!
//! This layer is thin by design: build the manifest once, pick single-file
//! vs multi-part purely by count-vs-threshold, and drive the publisher. The
//! defensive checks (non-empty candidate, non-empty published file) live in
//! the publisher and apply identically to leaf, part, and index documents.

use crate::cli::Cli;
use chrono::Utc;
use smgen_core::publish::gz_sibling;
use smgen_core::render::{DocumentKind, SitemapEntry, render};
use smgen_core::{Config, Manifest, ModTimeSource, Publisher, Result};
use tracing::{debug, info};

/// Run one generation pass for the parsed CLI arguments.
///
/// # Errors
///
/// Propagates every core failure; each carries its own exit code.
pub fn execute(cli: &Cli) -> Result<()> {
    let config = Config::new(
        cli.root.clone(),
        &cli.base_url,
        cli.max_per_part,
        cli.dry_run,
    )?;

    if cli.check_args {
        info!(root = %config.root().display(), "arguments ok, exiting without output");
        return Ok(());
    }

    // Probe the modification-time capability exactly once, against the root
    // itself, before any other work.
    let mtime = ModTimeSource::probe(config.root())?;
    let manifest = Manifest::build(&config)?;
    let publisher = Publisher::new(&config);

    if manifest.len() <= config.max_per_part() {
        publish_single(&config, &publisher, &mtime, &manifest)
    } else {
        publish_parts_and_index(&config, &publisher, &mtime, &manifest)
    }
}

fn publish_single(
    config: &Config,
    publisher: &Publisher,
    mtime: &ModTimeSource,
    manifest: &Manifest,
) -> Result<()> {
    let entries = leaf_entries(config, mtime, manifest.entries())?;
    let document = render(DocumentKind::UrlSet, &entries);
    let outcome = publisher.publish(&document, &config.sitemap_path())?;
    info!(?outcome, entries = manifest.len(), "sitemap run complete");
    Ok(())
}

fn publish_parts_and_index(
    config: &Config,
    publisher: &Publisher,
    mtime: &ModTimeSource,
    manifest: &Manifest,
) -> Result<()> {
    let parts = manifest.partition(config.max_per_part());
    info!(
        entries = manifest.len(),
        parts = parts.len(),
        threshold = config.max_per_part(),
        "entry count over threshold, splitting"
    );

    let mut index_entries = Vec::with_capacity(parts.len());
    for (i, chunk) in parts.iter().enumerate() {
        let part_no = i + 1;
        let part_path = config.part_path(part_no);

        let entries = leaf_entries(config, mtime, chunk)?;
        let document = render(DocumentKind::UrlSet, &entries);
        let outcome = publisher.publish(&document, &part_path)?;
        debug!(?outcome, part = part_no, entries = chunk.len(), "part published");

        // Crawlers fetch the compressed part directly, so the index lists
        // the .gz path and the .gz file's own modification time.
        let gz_path = gz_sibling(&part_path);
        let lastmod = match mtime.modified(&gz_path) {
            Ok(lastmod) => lastmod,
            // Dry-run may never have produced the compressed part; fall
            // back to the chunk's newest entry so the preview still renders.
            Err(_) if config.dry_run() => entries
                .iter()
                .map(|entry| entry.lastmod)
                .max()
                .unwrap_or_else(Utc::now),
            Err(error) => return Err(error),
        };
        index_entries.push(SitemapEntry {
            loc: config.url_for(&Config::part_gz_name(part_no)),
            lastmod,
        });
    }

    let document = render(DocumentKind::SitemapIndex, &index_entries);
    let outcome = publisher.publish(&document, &config.sitemap_path())?;
    info!(?outcome, parts = index_entries.len(), "sitemap index run complete");
    Ok(())
}

/// Absolute URL + per-file modification time for each manifest entry.
fn leaf_entries(
    config: &Config,
    mtime: &ModTimeSource,
    rel_paths: &[String],
) -> Result<Vec<SitemapEntry>> {
    rel_paths
        .iter()
        .map(|rel| {
            Ok(SitemapEntry {
                loc: config.url_for(rel),
                lastmod: mtime.modified(&config.root().join(rel))?,
            })
        })
        .collect()
}
