//! Shared configuration constants for formattxt
//!
//! This module contains default values and fixed tables used throughout
//! the codebase to ensure consistency and avoid magic strings.

/// Default protocol set for linkification.
///
/// `email` is not a URL scheme: it switches on the e-mail matcher as a
/// second, independent pass over the same text.
pub const DEFAULT_PROTOCOLS: &[&str] = &["http", "https", "ftp", "email"];

/// Pseudo-protocol that enables the e-mail matcher
pub const EMAIL_PROTOCOL: &str = "email";

/// Tags whose content is never rewritten by the linkifier.
///
/// Existing anchors are in here so running the linkifier twice is a no-op.
pub const IGNORE_TAGS: &[&str] = &[
    "head", "link", "a", "script", "style", "code", "pre", "select", "textarea", "button",
];

/// Default maximum visible length of a generated link caption
pub const DEFAULT_MAX_CAPTION_LENGTH: usize = 40;

/// Default ellipsis marker appended to shortened captions and truncated text
pub const DEFAULT_ELLIPSIS: &str = "&hellip;";

/// Scheme prepended to matches that carry no scheme of their own
pub const DEFAULT_HREF_SCHEME: &str = "http://";

/// Prefix of e-mail hrefs (obfuscated before use)
pub const MAILTO: &str = "mailto:";
