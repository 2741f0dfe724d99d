//! Segment types produced by the tokenizer.

/// What a segment holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Literal text between tags (possibly empty)
    Text,
    /// A single `<...>` tag, delimiters included
    Markup,
}

/// A contiguous, borrowed slice of the source document.
///
/// Segments are produced once per pass and never mutated; rewriting passes
/// build a new output string instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub kind: SegmentKind,
    pub content: &'a str,
    /// Position in document order
    pub index: usize,
}

impl<'a> Segment<'a> {
    #[must_use]
    pub fn is_markup(&self) -> bool {
        self.kind == SegmentKind::Markup
    }

    #[must_use]
    pub fn is_text(&self) -> bool {
        self.kind == SegmentKind::Text
    }
}
