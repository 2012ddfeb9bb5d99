//! CLI structure and argument parsing for `smgen`.
//!
//! The interface is deliberately flat: one invocation walks one document
//! root and publishes one sitemap (or index plus parts). All options are
//! global flags; there are no subcommands.
//!
//! ```bash
//! # Typical cron invocation
//! smgen --root /var/www/html --base-url https://example.com
//!
//! # Preview without touching published files
//! smgen --root /var/www/html --base-url https://example.com --dry-run
//!
//! # Validate arguments only
//! smgen --root /var/www/html --base-url https://example.com --check-args
//! ```

use clap::Parser;
use smgen_core::DEFAULT_MAX_PER_PART;
use std::path::PathBuf;

/// Generate a sitemaps-protocol sitemap for a static document root.
#[derive(Parser, Debug, Clone)]
#[command(name = "smgen", version, about, long_about = None)]
pub struct Cli {
    /// Site document root to walk (also where outputs are published)
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Base site URL, scheme and host, e.g. https://example.com
    #[arg(long, value_name = "URL")]
    pub base_url: String,

    /// Maximum entries per published file before splitting into parts
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_PER_PART)]
    pub max_per_part: usize,

    /// Render and compare, but never replace published files
    #[arg(long)]
    pub dry_run: bool,

    /// Validate arguments and exit without touching any file
    #[arg(long)]
    pub check_args: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with_all = ["verbose", "debug"])]
    pub quiet: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Full diagnostic logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Checks clap cannot express: the base URL must carry a scheme and a
    /// non-empty host, and the threshold must be positive.
    ///
    /// # Errors
    ///
    /// Returns a human-readable message; the caller maps it to the
    /// argument-error exit code.
    pub fn validate(&self) -> Result<(), String> {
        let rest = self
            .base_url
            .strip_prefix("https://")
            .or_else(|| self.base_url.strip_prefix("http://"))
            .ok_or_else(|| format!("--base-url must start with http:// or https:// (got {:?})", self.base_url))?;
        if rest.trim_matches('/').is_empty() {
            return Err(format!("--base-url has no host: {:?}", self.base_url));
        }
        if self.max_per_part == 0 {
            return Err("--max-per-part must be at least 1".to_owned());
        }
        Ok(())
    }
}
