//! Sitemap document rendering.
//!
//! Produces the two document shapes of the sitemaps 0.9 protocol: a leaf
//! `<urlset>` listing page URLs and a `<sitemapindex>` listing part files.
//! The layout is line-oriented and fixed (declaration, one entry per line
//! with four-space indent, closing root tag) because crawler acceptance is
//! sensitive to the namespace attributes; only `loc` text is variable and
//! it is entity-escaped via quick-xml.

use crate::mtime::format_w3c;
use chrono::{DateTime, Utc};
use quick_xml::escape::escape;
use std::fmt::Write as _;

/// Sitemaps protocol namespace.
pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// One rendered entry: an absolute URL and its last-modified time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    /// Absolute URL (base URL + relative path, or a part file's URL).
    pub loc: String,
    /// Last modification time of the underlying file.
    pub lastmod: DateTime<Utc>,
}

/// Which document shape to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Leaf document: `<urlset>` with `<url>` children.
    UrlSet,
    /// Index document: `<sitemapindex>` with `<sitemap>` children.
    SitemapIndex,
}

impl DocumentKind {
    const fn root(self) -> &'static str {
        match self {
            Self::UrlSet => "urlset",
            Self::SitemapIndex => "sitemapindex",
        }
    }

    const fn child(self) -> &'static str {
        match self {
            Self::UrlSet => "url",
            Self::SitemapIndex => "sitemap",
        }
    }
}

/// Render a complete sitemap document, entries in the order given.
#[must_use]
pub fn render(kind: DocumentKind, entries: &[SitemapEntry]) -> Vec<u8> {
    let root = kind.root();
    let child = kind.child();

    let mut doc = String::with_capacity(256 + entries.len() * 96);
    doc.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(
        doc,
        "<{root} xmlns:xsi=\"{XSI_NS}\" \
         xsi:schemaLocation=\"{SITEMAP_NS} {SITEMAP_NS}/sitemap.xsd\" \
         xmlns=\"{SITEMAP_NS}\">"
    );
    for entry in entries {
        let _ = writeln!(
            doc,
            "    <{child}><loc>{}</loc><lastmod>{}</lastmod></{child}>",
            escape(entry.loc.as_str()),
            format_w3c(entry.lastmod),
        );
    }
    let _ = writeln!(doc, "</{root}>");

    doc.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(loc: &str) -> SitemapEntry {
        SitemapEntry {
            loc: loc.to_owned(),
            lastmod: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
        }
    }

    #[test]
    fn renders_urlset_shape() {
        let doc = render(
            DocumentKind::UrlSet,
            &[entry("https://example.com/a.html")],
        );
        let doc = String::from_utf8(doc).unwrap();

        assert_eq!(
            doc,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <urlset xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" \
             xsi:schemaLocation=\"http://www.sitemaps.org/schemas/sitemap/0.9 \
             http://www.sitemaps.org/schemas/sitemap/0.9/sitemap.xsd\" \
             xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n    \
             <url><loc>https://example.com/a.html</loc>\
             <lastmod>2024-01-15T10:30:00+00:00</lastmod></url>\n\
             </urlset>\n"
        );
    }

    #[test]
    fn renders_index_vocabulary() {
        let doc = render(
            DocumentKind::SitemapIndex,
            &[entry("https://example.com/site.map.part.1.xml.gz")],
        );
        let doc = String::from_utf8(doc).unwrap();

        assert!(doc.contains("<sitemapindex "));
        assert!(doc.contains(
            "<sitemap><loc>https://example.com/site.map.part.1.xml.gz</loc>"
        ));
        assert!(doc.ends_with("</sitemapindex>\n"));
        assert!(!doc.contains("<url>"));
    }

    #[test]
    fn preserves_entry_order() {
        let doc = render(
            DocumentKind::UrlSet,
            &[
                entry("https://example.com/a.html"),
                entry("https://example.com/b.html"),
            ],
        );
        let doc = String::from_utf8(doc).unwrap();

        let a = doc.find("/a.html").unwrap();
        let b = doc.find("/b.html").unwrap();
        assert!(a < b);
    }

    #[test]
    fn escapes_reserved_characters_in_loc() {
        let doc = render(
            DocumentKind::UrlSet,
            &[entry("https://example.com/a.html?x=1&y=<2>")],
        );
        let doc = String::from_utf8(doc).unwrap();

        assert!(doc.contains("<loc>https://example.com/a.html?x=1&amp;y=&lt;2&gt;</loc>"));
    }
}
