//! HTML-aware linkification.
//!
//! The document is split into text and markup segments. Text segments that
//! sit outside an opaque tag (`<a>`, `<code>`, `<pre>`, `<script>`, ...) are
//! searched for e-mail addresses and URLs, and every match is replaced with
//! anchor markup. Markup segments and opaque text are copied through
//! untouched, so existing tags are never corrupted and running the pass
//! twice does not nest anchors.

mod errors;
mod patterns;
mod rewriter;

pub use errors::{LinkifyError, LinkifyResult};
pub use patterns::{EmailMatcher, LinkMatch, LinkMatcher, MatchKind, UrlMatcher, find_links};
pub use rewriter::{Anchor, RewriteContext, render_attributes};

use rand::Rng;

use crate::config::{LinkifyOptions, MatchOrder};
use crate::tokenizer::{OpacityTracker, tokenize};
use crate::utils::EMAIL_PROTOCOL;

/// Validated options plus compiled matchers, reusable across documents.
#[derive(Debug, Clone)]
pub struct Linkifier {
    options: LinkifyOptions,
    attributes: String,
    urls: UrlMatcher,
    emails: Option<EmailMatcher>,
}

impl Linkifier {
    /// Build a linkifier for `protocols`.
    ///
    /// `"email"` in `protocols` enables the e-mail matcher; every other
    /// entry is a URL scheme.
    ///
    /// # Errors
    ///
    /// Returns `LinkifyError::InvalidAttribute` if an attribute value holds
    /// both quote characters, or `LinkifyError::InvalidProtocol` for an
    /// entry that is not a URI scheme name.
    pub fn new<S: AsRef<str>>(protocols: &[S], options: LinkifyOptions) -> LinkifyResult<Self> {
        let attributes = render_attributes(options.attributes())?;

        let (emails, schemes): (Vec<&str>, Vec<&str>) = protocols
            .iter()
            .map(|p| p.as_ref())
            .partition(|p| p.eq_ignore_ascii_case(EMAIL_PROTOCOL));

        Ok(Self {
            urls: UrlMatcher::new(schemes.as_slice())?,
            emails: (!emails.is_empty()).then_some(EmailMatcher),
            options,
            attributes,
        })
    }

    #[must_use]
    pub fn options(&self) -> &LinkifyOptions {
        &self.options
    }

    /// Linkify `text`, obfuscating e-mail links with the thread-local RNG.
    pub fn linkify(&self, text: &str) -> String {
        self.linkify_with_rng(text, &mut rand::rng())
    }

    /// Linkify `text`, drawing e-mail obfuscation from `rng`.
    pub fn linkify_with_rng<R: Rng>(&self, text: &str, rng: &mut R) -> String {
        let ctx = RewriteContext {
            options: &self.options,
            attributes: &self.attributes,
        };
        let segments = tokenize(text);
        let mut tracker = OpacityTracker::new();
        let mut out = String::with_capacity(text.len() + text.len() / 4);
        let mut rewritten = 0;

        for segment in &segments {
            if segment.is_text() && tracker.is_transparent() {
                rewritten += self.rewrite_text(&ctx, segment.content, &mut out, rng);
            } else {
                out.push_str(segment.content);
            }
            tracker.observe(segment);
        }

        log::debug!(
            "linkify: {} segments, {rewritten} links rewritten",
            segments.len()
        );
        out
    }

    /// Append `text` to `out` with every match replaced; returns the match
    /// count.
    fn rewrite_text<R: Rng>(
        &self,
        ctx: &RewriteContext<'_>,
        text: &str,
        out: &mut String,
        rng: &mut R,
    ) -> usize {
        let urls: &dyn LinkMatcher = &self.urls;
        let emails = self.emails.as_ref().map(|m| m as &dyn LinkMatcher);
        let links = match self.options.match_order() {
            MatchOrder::EmailFirst => find_links(text, emails, Some(urls)),
            MatchOrder::UrlFirst => find_links(text, Some(urls), emails),
        };

        let mut last = 0;
        for link in &links {
            out.push_str(&text[last..link.start]);
            let markup = match link.kind {
                MatchKind::Url => ctx.rewrite_url(link),
                MatchKind::Email => ctx.rewrite_email(link, rng),
            };
            out.push_str(&markup);
            last = link.end;
        }
        out.push_str(&text[last..]);
        links.len()
    }
}

/// Linkify `text` in one call.
///
/// # Errors
///
/// See [`Linkifier::new`].
pub fn linkify<S: AsRef<str>>(
    text: &str,
    protocols: &[S],
    options: &LinkifyOptions,
) -> LinkifyResult<String> {
    Ok(Linkifier::new(protocols, options.clone())?.linkify(text))
}

/// Linkify `text`, then hand the result to `paragraphs` (typically an
/// `nl2p` converter) for paragraph markup.
///
/// # Errors
///
/// See [`Linkifier::new`].
pub fn beautify<S, F>(
    text: &str,
    protocols: &[S],
    options: &LinkifyOptions,
    paragraphs: F,
) -> LinkifyResult<String>
where
    S: AsRef<str>,
    F: FnOnce(&str) -> String,
{
    let linked = linkify(text, protocols, options)?;
    Ok(paragraphs(&linked))
}
