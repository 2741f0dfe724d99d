//! Core configuration types for linkification
//!
//! `LinkifyOptions` carries everything the rewrite pass needs apart from the
//! protocol list. Every field but the callback round-trips through serde so
//! option sets can be stored alongside other settings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::utils::DEFAULT_MAX_CAPTION_LENGTH;

/// Caller hook that can replace a generated anchor.
///
/// Called with `(href, caption, is_email)`. Returning `Some(markup)` emits
/// `markup` verbatim in place of the default anchor; `None` keeps the
/// default.
pub type LinkCallback = Arc<dyn Fn(&str, &str, bool) -> Option<String> + Send + Sync>;

/// Which matcher claims a span of text first.
///
/// The second matcher only searches the gaps between the first matcher's
/// hits, so one span is never wrapped twice. With `EmailFirst`, an address
/// inside a URL that starts earlier (`http://user:pw@host.com/x`) is left
/// to the URL; with `UrlFirst`, `user@example.com` links only the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOrder {
    /// E-mail addresses first, then URLs
    #[default]
    EmailFirst,
    /// URLs first, then e-mail addresses
    UrlFirst,
}

/// Options for a linkify pass
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkifyOptions {
    /// Drop the scheme and a leading `www.` from captions
    pub(crate) strip_scheme: bool,

    /// Maximum visible length of a caption; `0` disables shortening.
    ///
    /// Longer captions keep `max_caption_length - 1` visible characters
    /// followed by `&hellip;`.
    pub(crate) max_caption_length: usize,

    /// Extra anchor attributes, rendered in insertion order
    pub(crate) attributes: Vec<(String, String)>,

    pub(crate) match_order: MatchOrder,

    #[serde(skip)]
    pub(crate) callback: Option<LinkCallback>,
}

impl Default for LinkifyOptions {
    fn default() -> Self {
        Self {
            strip_scheme: true,
            max_caption_length: DEFAULT_MAX_CAPTION_LENGTH,
            attributes: Vec::new(),
            match_order: MatchOrder::default(),
            callback: None,
        }
    }
}

impl fmt::Debug for LinkifyOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkifyOptions")
            .field("strip_scheme", &self.strip_scheme)
            .field("max_caption_length", &self.max_caption_length)
            .field("attributes", &self.attributes)
            .field("match_order", &self.match_order)
            .field("callback", &self.callback.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl LinkifyOptions {
    #[must_use]
    pub fn strip_scheme(&self) -> bool {
        self.strip_scheme
    }

    #[must_use]
    pub fn max_caption_length(&self) -> usize {
        self.max_caption_length
    }

    #[must_use]
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    #[must_use]
    pub fn match_order(&self) -> MatchOrder {
        self.match_order
    }

    #[must_use]
    pub fn callback(&self) -> Option<&LinkCallback> {
        self.callback.as_ref()
    }
}
