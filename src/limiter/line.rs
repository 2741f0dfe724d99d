//! Line limiting within a single paragraph.

use regex::Regex;
use std::sync::LazyLock;

use crate::utils::normalize_newlines;

/// `<br>` with or without attributes or a self-closing slash
static BR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<br(?:\s[^>]*)?/?>").expect("BR_RE: hardcoded regex is valid")
});

/// Breaks and whitespace left dangling at the end of a cut
static TRAILING_BREAKS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:\s|<br(?:\s[^>]*)?/?>)+\z").expect("TRAILING_BREAKS_RE: hardcoded regex is valid")
});

/// Keep the first `limit` lines of a paragraph.
///
/// Lines are split on `<br>` tags when the paragraph has any, otherwise on
/// newlines. Text with no more than `limit` lines is returned unchanged, as
/// is a paragraph made only of blank lines. After a cut, trailing breaks
/// and whitespace are trimmed.
pub fn line_limit(text: &str, limit: usize) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }
    if limit == 0 {
        return String::new();
    }

    if BR_RE.is_match(text) {
        return match BR_RE.find_iter(text).nth(limit - 1) {
            Some(br) => {
                log::trace!("line limit {limit}: cut at <br> offset {}", br.start());
                TRAILING_BREAKS_RE.replace(&text[..br.start()], "").into_owned()
            }
            None => text.to_string(),
        };
    }

    let normalized = normalize_newlines(text);
    match normalized.match_indices('\n').nth(limit - 1) {
        Some((pos, _)) => {
            log::trace!("line limit {limit}: cut at newline offset {pos}");
            normalized[..pos].trim_end().to_string()
        }
        None => text.to_string(),
    }
}
