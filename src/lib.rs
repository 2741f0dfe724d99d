//! Format mixed HTML/plain text for display.
//!
//! - [`linkify`] wraps URLs and e-mail addresses in anchors while leaving
//!   tags and opaque scopes (`<a>`, `<code>`, `<pre>`, `<script>`, ...)
//!   untouched.
//! - [`paragraph_limit`], [`line_limit`] and [`char_limit`] shorten text at
//!   structural boundaries, keeping markup intact.
//! - [`obfuscate`] and [`obfuscate_email`] re-encode text as randomized
//!   character references to hinder address harvesting.
//!
//! Every entry point is a synchronous, reentrant function over its input;
//! no state is shared between calls.

pub mod config;
pub mod limiter;
pub mod linkify;
pub mod obfuscate;
pub mod tokenizer;
pub mod utils;

pub use config::{LinkCallback, LinkifyOptions, LinkifyOptionsBuilder, MatchOrder};
pub use limiter::{char_limit, char_limit_with, line_limit, paragraph_limit, visible_length};
pub use linkify::{beautify, linkify, Anchor, LinkifyError, LinkifyResult, Linkifier};
pub use obfuscate::{obfuscate, obfuscate_email, obfuscate_email_with, obfuscate_with};
pub use tokenizer::{reassemble, tokenize, OpacityTracker, Segment, SegmentKind};
pub use utils::{DEFAULT_ELLIPSIS, DEFAULT_PROTOCOLS, IGNORE_TAGS};
