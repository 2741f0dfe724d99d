//! Turns matches into anchor markup.

use rand::Rng;
use std::fmt::{self, Write as _};

use super::errors::{LinkifyError, LinkifyResult};
use super::patterns::LinkMatch;
use crate::config::LinkifyOptions;
use crate::limiter::{truncate_visible, visible::text_visible_length};
use crate::obfuscate::{obfuscate_email_with, obfuscate_with};
use crate::utils::{strip_prefix_ignore_ascii_case, DEFAULT_ELLIPSIS, DEFAULT_HREF_SCHEME, MAILTO};

/// Rendered anchor for one match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub href: String,
    pub caption: String,
    /// Pre-rendered attribute string, empty or starting with a space
    pub attributes: String,
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<a href=\"{}\"{}>{}</a>",
            self.href, self.attributes, self.caption
        )
    }
}

/// Render `attributes` as ` name='value'` pairs.
///
/// A value holding a single quote is wrapped in double quotes instead, so
/// nothing needs escaping.
///
/// # Errors
///
/// Returns `LinkifyError::InvalidAttribute` for a value holding both quote
/// characters.
pub fn render_attributes(attributes: &[(String, String)]) -> LinkifyResult<String> {
    let mut rendered = String::new();
    for (name, value) in attributes {
        match (value.contains('"'), value.contains('\'')) {
            (true, true) => {
                return Err(LinkifyError::InvalidAttribute {
                    name: name.clone(),
                    value: value.clone(),
                });
            }
            (_, true) => {
                let _ = write!(rendered, " {name}=\"{value}\"");
            }
            _ => {
                let _ = write!(rendered, " {name}='{value}'");
            }
        }
    }
    Ok(rendered)
}

/// Shared, read-only state for one rewrite pass
pub struct RewriteContext<'a> {
    pub options: &'a LinkifyOptions,
    /// Output of [`render_attributes`] for `options`
    pub attributes: &'a str,
}

impl<'a> RewriteContext<'a> {
    /// Markup for a URL match.
    ///
    /// The URL character class admits `"`, so it is percent-encoded in the
    /// href and written as `&quot;` in the caption; a match can never
    /// close the `href` attribute.
    pub fn rewrite_url(&self, m: &LinkMatch<'_>) -> String {
        let url = m.text;
        let (href, mut caption) = match m.scheme {
            Some(scheme) => {
                let mut caption = url;
                if self.options.strip_scheme() {
                    caption = &url[scheme.len() + 1..];
                    caption = caption.strip_prefix("//").unwrap_or(caption);
                }
                (url.to_string(), caption)
            }
            None => (format!("{DEFAULT_HREF_SCHEME}{url}"), url),
        };

        if self.options.strip_scheme() {
            caption = strip_prefix_ignore_ascii_case(caption, "www.").unwrap_or(caption);
        }
        if caption.is_empty() {
            caption = url;
        }
        let href = href.replace('"', "%22");
        let caption = self.shorten(&caption.replace('"', "&quot;"));

        if let Some(markup) = self.run_callback(&href, &caption, false) {
            return markup;
        }

        Anchor {
            href,
            caption,
            attributes: self.attributes.to_string(),
        }
        .to_string()
    }

    /// Markup for an e-mail match.
    ///
    /// The href and caption are obfuscated independently, so they differ on
    /// every render.
    pub fn rewrite_email<R: Rng>(&self, m: &LinkMatch<'_>, rng: &mut R) -> String {
        if let Some(markup) = self.run_callback(m.text, m.text, true) {
            return markup;
        }

        let href = format!(
            "{}{}",
            obfuscate_with(MAILTO, rng),
            obfuscate_email_with(m.text, rng)
        );
        Anchor {
            href,
            caption: obfuscate_email_with(m.text, rng),
            attributes: self.attributes.to_string(),
        }
        .to_string()
    }

    fn shorten(&self, caption: &str) -> String {
        let max = self.options.max_caption_length();
        if max == 0 || text_visible_length(caption) <= max {
            return caption.to_string();
        }
        format!("{}{DEFAULT_ELLIPSIS}", truncate_visible(caption, max - 1))
    }

    fn run_callback(&self, href: &str, caption: &str, is_email: bool) -> Option<String> {
        self.options
            .callback()
            .and_then(|callback| callback(href, caption, is_email))
    }
}
