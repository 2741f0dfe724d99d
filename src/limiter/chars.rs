//! Character-budget truncation of mixed HTML/plain text.
//!
//! Characters are dropped from the end of the visible text, walking the
//! segments backwards. Markup is never touched, so every closing tag that
//! followed the cut is still emitted.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

use super::visible::{text_visible_length, truncate_visible, visible_length};
use crate::tokenizer::tokenize;
use crate::utils::{normalize_newlines, DEFAULT_ELLIPSIS};

/// Two or more consecutive blank lines
static BLANK_LINES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n(?:[ \t]*\n){2,}").expect("BLANK_LINES_RE: hardcoded regex is valid")
});

/// Limit `text` to `limit` visible characters, ending in `&hellip;`.
pub fn char_limit(text: &str, limit: usize) -> String {
    char_limit_with(text, limit, DEFAULT_ELLIPSIS, true)
}

/// Limit `text` to `limit` visible characters followed by `ellipsis`.
///
/// Input that already fits is returned unchanged. Otherwise exactly
/// `limit` visible characters are kept and `ellipsis` is inserted at the
/// cut, before any markup that followed it. With `collapse_blank_lines`,
/// line endings are normalized and runs of blank lines are folded into one
/// before measuring.
pub fn char_limit_with(
    text: &str,
    limit: usize,
    ellipsis: &str,
    collapse_blank_lines: bool,
) -> String {
    let source: Cow<'_, str> = if collapse_blank_lines {
        collapse_blank_line_runs(text)
    } else {
        Cow::Borrowed(text)
    };

    let length = visible_length(&source);
    if length <= limit {
        return text.to_string();
    }

    let segments = tokenize(&source);
    let mut drop = length - limit;
    let mut pieces: Vec<&str> = vec![""; segments.len()];
    let mut cut_at = 0;
    // Set when the quota ran out by emptying a whole segment; the ellipsis
    // then follows the nearest earlier text that still has content.
    let mut cut_pending = false;

    for segment in segments.iter().rev() {
        let i = segment.index;
        if segment.is_markup() || drop == 0 {
            if cut_pending && segment.is_text() && !segment.content.is_empty() {
                cut_at = i;
                cut_pending = false;
            }
            pieces[i] = segment.content;
            continue;
        }

        let units = text_visible_length(segment.content);
        if units <= drop {
            drop -= units;
            if drop == 0 {
                cut_at = i;
                cut_pending = true;
            }
        } else {
            pieces[i] = truncate_visible(segment.content, units - drop);
            drop = 0;
            cut_at = i;
        }
    }

    log::debug!(
        "char limit: {length} visible chars cut to {limit}, ellipsis after segment {cut_at}"
    );

    let mut out = String::with_capacity(source.len() + ellipsis.len());
    for (i, piece) in pieces.iter().enumerate() {
        out.push_str(piece);
        if i == cut_at {
            out.push_str(ellipsis);
        }
    }
    out
}

fn collapse_blank_line_runs(text: &str) -> Cow<'_, str> {
    match normalize_newlines(text) {
        Cow::Borrowed(s) => BLANK_LINES_RE.replace_all(s, "\n\n"),
        Cow::Owned(s) => Cow::Owned(BLANK_LINES_RE.replace_all(&s, "\n\n").into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_is_unchanged() {
        assert_eq!(char_limit("<b>Hi</b>", 5), "<b>Hi</b>");
        assert_eq!(char_limit("exact", 5), "exact");
        assert_eq!(char_limit("", 0), "");
    }

    #[test]
    fn wrapper_tag_survives() {
        assert_eq!(char_limit("<b>Hello world</b>", 5), "<b>Hello&hellip;</b>");
    }

    #[test]
    fn cut_spans_several_segments() {
        assert_eq!(
            char_limit("<p>one <em>two</em> three</p>", 5),
            "<p>one <em>t&hellip;</em></p>"
        );
    }

    #[test]
    fn ellipsis_follows_last_kept_text_when_a_segment_empties() {
        assert_eq!(char_limit("<b>Hello</b> world", 5), "<b>Hello&hellip;</b>");
        assert_eq!(
            char_limit("<p>one</p><p>two</p>", 3),
            "<p>one&hellip;</p><p></p>"
        );
    }

    #[test]
    fn ellipsis_stays_in_place_when_nothing_is_kept() {
        assert_eq!(char_limit("<p>one</p><p>two</p>", 0), "<p>&hellip;</p><p></p>");
    }

    #[test]
    fn entities_count_and_trim_as_one() {
        assert_eq!(char_limit("a&amp;b&amp;c", 2), "a&amp;&hellip;");
        assert_eq!(char_limit("&lt;&lt;&lt;", 3), "&lt;&lt;&lt;");
    }

    #[test]
    fn multibyte_text_is_cut_on_char_boundaries() {
        assert_eq!(char_limit("日本語のテキスト", 3), "日本語&hellip;");
        assert_eq!(char_limit("<i>🎉🎊🎈</i>", 1), "<i>🎉&hellip;</i>");
    }

    #[test]
    fn custom_ellipsis() {
        assert_eq!(char_limit_with("abcdef", 3, "...", false), "abc...");
        assert_eq!(char_limit_with("abcdef", 0, "…", false), "…");
    }

    #[test]
    fn blank_line_runs_are_collapsed_before_counting() {
        // Collapsed to "a\n\nb" (4 visible), which fits.
        assert_eq!(char_limit("a\n\n\n\nb", 4), "a\n\n\n\nb");
        assert_eq!(char_limit("a\r\n\r\n\r\nbcd", 4), "a\n\nb&hellip;");
        assert_eq!(char_limit_with("a\n\n\n\nb", 4, "&hellip;", false), "a\n\n\n&hellip;");
    }
}
