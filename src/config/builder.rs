//! Fluent builder for `LinkifyOptions`
//!
//! Attribute values are validated in `build()`, so a builder-made option set
//! can not fail later inside `linkify`.

use std::sync::Arc;

use super::types::{LinkCallback, LinkifyOptions, MatchOrder};
use crate::linkify::{render_attributes, LinkifyResult};

#[derive(Default)]
pub struct LinkifyOptionsBuilder {
    options: LinkifyOptions,
}

impl LinkifyOptionsBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn strip_scheme(mut self, strip: bool) -> Self {
        self.options.strip_scheme = strip;
        self
    }

    /// Set the caption budget; `0` disables shortening
    #[must_use]
    pub fn max_caption_length(mut self, length: usize) -> Self {
        self.options.max_caption_length = length;
        self
    }

    /// Append one anchor attribute. Later calls with the same name add a
    /// second attribute rather than replacing the first.
    #[must_use]
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.attributes.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn attributes<I, K, V>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.options
            .attributes
            .extend(attributes.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    #[must_use]
    pub fn match_order(mut self, order: MatchOrder) -> Self {
        self.options.match_order = order;
        self
    }

    #[must_use]
    pub fn callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str, &str, bool) -> Option<String> + Send + Sync + 'static,
    {
        let callback: LinkCallback = Arc::new(callback);
        self.options.callback = Some(callback);
        self
    }

    /// Validate and return the options.
    ///
    /// # Errors
    ///
    /// Returns `LinkifyError::InvalidAttribute` if an attribute value holds
    /// both a single and a double quote.
    pub fn build(self) -> LinkifyResult<LinkifyOptions> {
        render_attributes(&self.options.attributes)?;
        Ok(self.options)
    }
}

impl LinkifyOptions {
    #[must_use]
    pub fn builder() -> LinkifyOptionsBuilder {
        LinkifyOptionsBuilder::new()
    }
}
