//! UTF-8-safe string helpers

/// Normalize Windows line endings to `\n`.
///
/// Returns a borrowed string when there is nothing to replace.
pub fn normalize_newlines(s: &str) -> std::borrow::Cow<'_, str> {
    if s.contains('\r') {
        std::borrow::Cow::Owned(s.replace("\r\n", "\n"))
    } else {
        std::borrow::Cow::Borrowed(s)
    }
}

/// Strip an ASCII prefix without regard to case.
///
/// Returns the remainder after `prefix`, or `None` if `s` does not start
/// with it.
pub fn strip_prefix_ignore_ascii_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}
