//! Test utilities and helper functions for the formattxt test suite

use regex::Regex;
use std::sync::LazyLock;

static ANCHOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<a href="([^"]*)"([^>]*)>(.*?)</a>"#).expect("ANCHOR_RE: hardcoded regex is valid")
});

/// Install a test logger once; later calls are no-ops
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A generated anchor split into its parts, entities left as-is
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAnchor {
    pub href: String,
    pub attributes: String,
    pub caption: String,
}

/// All anchors in `html` that use the generated `<a href="...">` shape
#[allow(dead_code)]
pub fn anchors(html: &str) -> Vec<ParsedAnchor> {
    ANCHOR_RE
        .captures_iter(html)
        .map(|caps| ParsedAnchor {
            href: caps[1].to_string(),
            attributes: caps[2].to_string(),
            caption: caps[3].to_string(),
        })
        .collect()
}

/// Decode character references the way a browser would render them
#[allow(dead_code)]
pub fn decode(s: &str) -> String {
    html_escape::decode_html_entities(s).into_owned()
}

/// Prose snippets used to build generated documents
#[allow(dead_code)]
pub const WORDS: &[&str] = &[
    "hello",
    "world",
    "example.com",
    "www.example.org",
    "http://x.org/a_(b)",
    "https://docs.example.net/path?q=1&amp;r=2",
    "ftp://files.example.com/pub.",
    "user@example.com",
    "first.last@mail.example.co.uk,",
    "(see",
    "it)",
    "e.g.",
    "a.b",
    "&amp;",
    "日本語",
    "🎉",
    "end.",
];
