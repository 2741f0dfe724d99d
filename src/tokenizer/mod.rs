//! Text/markup segmentation.
//!
//! Splits a document into alternating literal-text and tag segments using a
//! single delimiter-preserving split on the shortest `<...>` run. Text
//! segments sit at even indices and markup at odd ones; a document that
//! starts or ends with a tag, or has two adjacent tags, yields empty text
//! segments so the alternation always holds.
//!
//! Nothing here validates HTML. A stray `<` or `>` that does not close into
//! a tag stays inside the surrounding text segment.

mod opacity;
mod segment;

pub use opacity::OpacityTracker;
pub use segment::{Segment, SegmentKind};

use regex::Regex;
use std::sync::LazyLock;

/// Shortest `<...>` run, spanning newlines
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<.+?>").expect("TAG_RE: hardcoded regex is valid"));

/// Split `text` into segments.
///
/// Concatenating the `content` of every returned segment reproduces `text`
/// exactly.
pub fn tokenize(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;

    for tag in TAG_RE.find_iter(text) {
        push(&mut segments, SegmentKind::Text, &text[last..tag.start()]);
        push(&mut segments, SegmentKind::Markup, tag.as_str());
        last = tag.end();
    }
    push(&mut segments, SegmentKind::Text, &text[last..]);

    log::trace!("tokenized {} bytes into {} segments", text.len(), segments.len());
    segments
}

fn push<'a>(segments: &mut Vec<Segment<'a>>, kind: SegmentKind, content: &'a str) {
    let index = segments.len();
    segments.push(Segment {
        kind,
        content,
        index,
    });
}

/// Join segments back into a document.
pub fn reassemble(segments: &[Segment<'_>]) -> String {
    let len = segments.iter().map(|s| s.content.len()).sum();
    let mut out = String::with_capacity(len);
    for segment in segments {
        out.push_str(segment.content);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<(SegmentKind, &str)> {
        tokenize(text).iter().map(|s| (s.kind, s.content)).collect()
    }

    #[test]
    fn plain_text_is_one_segment() {
        assert_eq!(kinds("hello"), vec![(SegmentKind::Text, "hello")]);
        assert_eq!(kinds(""), vec![(SegmentKind::Text, "")]);
    }

    #[test]
    fn tags_alternate_with_text() {
        assert_eq!(
            kinds("<b>bold</b><i>x</i>"),
            vec![
                (SegmentKind::Text, ""),
                (SegmentKind::Markup, "<b>"),
                (SegmentKind::Text, "bold"),
                (SegmentKind::Markup, "</b>"),
                (SegmentKind::Text, ""),
                (SegmentKind::Markup, "<i>"),
                (SegmentKind::Text, "x"),
                (SegmentKind::Markup, "</i>"),
                (SegmentKind::Text, ""),
            ]
        );
    }

    #[test]
    fn indices_follow_document_order() {
        for (i, segment) in tokenize("a<b>c</b>d").iter().enumerate() {
            assert_eq!(segment.index, i);
            assert_eq!(segment.is_markup(), i % 2 == 1);
        }
    }

    #[test]
    fn stray_brackets_stay_in_text() {
        // A bare comparison still closes into a "tag"; only `<` with no
        // later `>` survives as text.
        assert_eq!(
            kinds("1 < 2 and 3 > 2"),
            vec![
                (SegmentKind::Text, "1 "),
                (SegmentKind::Markup, "< 2 and 3 >"),
                (SegmentKind::Text, " 2"),
            ]
        );
        assert_eq!(kinds("a <"), vec![(SegmentKind::Text, "a <")]);
        assert_eq!(kinds("a <>"), vec![(SegmentKind::Text, "a <>")]);
    }

    #[test]
    fn tag_may_span_lines() {
        assert_eq!(
            kinds("<a\nhref='x'>y"),
            vec![
                (SegmentKind::Text, ""),
                (SegmentKind::Markup, "<a\nhref='x'>"),
                (SegmentKind::Text, "y"),
            ]
        );
    }

    #[test]
    fn reassemble_round_trips() {
        let doc = "<p>Hi <a href=\"x\">there</a></p>\n<br/>end";
        assert_eq!(reassemble(&tokenize(doc)), doc);
    }
}
