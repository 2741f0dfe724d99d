//! Visible-character accounting.
//!
//! A visible unit is one `char` of literal text, or one whole character
//! reference (`&amp;`, `&#64;`, `&#x40;`). Tags contribute nothing.

use regex::Regex;
use std::sync::LazyLock;

use crate::tokenizer::tokenize;

/// Character reference anchored at the start of the haystack
static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A&#?[A-Za-z0-9]+;").expect("ENTITY_RE: hardcoded regex is valid")
});

/// Iterator over the visible units of a markup-free string
#[derive(Debug, Clone)]
pub struct VisibleUnits<'a> {
    rest: &'a str,
}

impl<'a> VisibleUnits<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self { rest: text }
    }
}

impl<'a> Iterator for VisibleUnits<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let len = if first == '&' {
            ENTITY_RE
                .find(self.rest)
                .map_or(1, |entity| entity.end())
        } else {
            first.len_utf8()
        };
        let (unit, rest) = self.rest.split_at(len);
        self.rest = rest;
        Some(unit)
    }
}

/// Visible length of a markup-free string
#[must_use]
pub fn text_visible_length(text: &str) -> usize {
    VisibleUnits::new(text).count()
}

/// Visible length of mixed HTML/plain text.
///
/// ```
/// # use kodegen_formattxt::visible_length;
/// assert_eq!(visible_length("<b>Fish &amp; chips</b>"), 11);
/// ```
#[must_use]
pub fn visible_length(html: &str) -> usize {
    tokenize(html)
        .iter()
        .filter(|segment| segment.is_text())
        .map(|segment| text_visible_length(segment.content))
        .sum()
}

/// Longest prefix of `text` holding at most `units` visible units.
#[must_use]
pub fn truncate_visible(text: &str, units: usize) -> &str {
    let end: usize = VisibleUnits::new(text).take(units).map(str::len).sum();
    &text[..end]
}
