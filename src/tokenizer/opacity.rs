//! Tracks whether the tokenizer is inside an opaque tag.
//!
//! Only one open ignore tag is tracked at a time. Once `<code>` opens,
//! every other tag is ignored until the matching `</code>` arrives, so an
//! ignore tag nested in a different ignore tag does not extend the scope.

use regex::Regex;
use std::sync::LazyLock;

use super::segment::Segment;
use crate::utils::IGNORE_TAGS;

/// `<name` followed by whitespace, `>` or `/`; captures the tag name
static OPEN_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    let names = IGNORE_TAGS.join("|");
    Regex::new(&format!(r"(?is)\A<({names})(?:[\s/>])"))
        .expect("OPEN_TAG_RE: hardcoded regex is valid")
});

/// `</ name >`; captures the tag name
static CLOSE_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\A</\s*([a-z][a-z0-9]*)\s*>\z")
        .expect("CLOSE_TAG_RE: hardcoded regex is valid")
});

/// Single-slot opacity state for one tokenization pass.
#[derive(Debug, Default, Clone)]
pub struct OpacityTracker {
    open_tag: Option<String>,
}

impl OpacityTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the ignore tag currently open, lowercased.
    #[must_use]
    pub fn open_tag(&self) -> Option<&str> {
        self.open_tag.as_deref()
    }

    /// True when text at the current position may be rewritten.
    #[must_use]
    pub fn is_transparent(&self) -> bool {
        self.open_tag.is_none()
    }

    /// Feed one segment in document order.
    ///
    /// Text segments never change the state; call [`is_transparent`]
    /// before feeding them to decide whether they are eligible.
    ///
    /// [`is_transparent`]: OpacityTracker::is_transparent
    pub fn observe(&mut self, segment: &Segment<'_>) {
        if !segment.is_markup() {
            return;
        }
        let tag = segment.content;

        match &self.open_tag {
            None => {
                if tag.ends_with("/>") {
                    return;
                }
                if let Some(caps) = OPEN_TAG_RE.captures(tag) {
                    let name = caps[1].to_ascii_lowercase();
                    log::trace!("entering opaque <{name}> at segment {}", segment.index);
                    self.open_tag = Some(name);
                }
            }
            Some(open) => {
                let closes = CLOSE_TAG_RE
                    .captures(tag)
                    .is_some_and(|caps| caps[1].eq_ignore_ascii_case(open));
                if closes {
                    log::trace!("leaving opaque <{open}> at segment {}", segment.index);
                    self.open_tag = None;
                }
            }
        }
    }
}
