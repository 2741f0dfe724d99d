//! Paragraph limiting.

use regex::Regex;
use std::sync::LazyLock;

use super::line::line_limit;
use crate::utils::normalize_newlines;

/// Opening `<p>` tag, with or without attributes
static P_OPEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<p(?:\s[^>]*)?>").expect("P_OPEN_RE: hardcoded regex is valid")
});

/// Closing `</p>`
static P_CLOSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</p\s*>").expect("P_CLOSE_RE: hardcoded regex is valid"));

static PARAGRAPH_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("PARAGRAPH_BREAK_RE: hardcoded regex is valid"));

/// Keep the first `limit` paragraphs of `text`.
///
/// Paragraphs are `<p>` elements when the text has any, otherwise runs of
/// text separated by blank lines. In `<p>` mode the text is cut right after
/// the last kept `</p>`, so anything following it is dropped. A paragraph
/// whose `</p>` is omitted ends at the next `<p>` (or the end of the
/// text), with trailing whitespace trimmed. In blank-line
/// mode leading and trailing newlines are trimmed and kept paragraphs are
/// rejoined with a single blank line.
///
/// With `line_budget` set, every kept paragraph is additionally limited to
/// that many lines.
pub fn paragraph_limit(text: &str, limit: usize, line_budget: Option<usize>) -> String {
    if P_OPEN_RE.is_match(text) {
        limit_markup_paragraphs(text, limit, line_budget)
    } else {
        limit_plain_paragraphs(text, limit, line_budget)
    }
}

fn limit_markup_paragraphs(text: &str, limit: usize, line_budget: Option<usize>) -> String {
    let openers: Vec<_> = P_OPEN_RE.find_iter(text).collect();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut kept = 0;

    for (k, open) in openers.iter().enumerate().take(limit) {
        let next = openers.get(k + 1).map_or(text.len(), |m| m.start());
        let body = &text[open.end()..next];
        // `inner_end` is where the content stops, `end` where the element does.
        let (inner_end, end) = match P_CLOSE_RE.find(body) {
            Some(close) => (open.end() + close.start(), open.end() + close.end()),
            None => {
                let unclosed = open.end() + body.trim_end().len();
                (unclosed, unclosed)
            }
        };

        match line_budget {
            Some(lines) => {
                out.push_str(&text[last..open.end()]);
                out.push_str(&line_limit(&text[open.end()..inner_end], lines));
                out.push_str(&text[inner_end..end]);
            }
            None => out.push_str(&text[last..end]),
        }
        last = end;
        kept += 1;
    }

    log::debug!("paragraph limit {limit}: kept {kept} <p> elements");
    out
}

fn limit_plain_paragraphs(text: &str, limit: usize, line_budget: Option<usize>) -> String {
    let normalized = normalize_newlines(text);
    let trimmed = normalized.trim_matches('\n');

    let kept: Vec<String> = PARAGRAPH_BREAK_RE
        .split(trimmed)
        .take(limit)
        .map(|paragraph| match line_budget {
            Some(lines) => line_limit(paragraph, lines),
            None => paragraph.to_string(),
        })
        .collect();

    log::debug!("paragraph limit {limit}: kept {} blank-line paragraphs", kept.len());
    kept.join("\n\n")
}
