//! URL and e-mail matchers.
//!
//! Both matchers run on the `regex` crate, which executes in time linear in
//! the input. The URL pattern tolerates two levels of balanced parentheses
//! and must end on a character that is not trailing punctuation, so a URL at
//! the end of a sentence does not swallow the full stop.

use regex::{Captures, Regex};
use std::ops::Range;
use std::sync::LazyLock;

use super::errors::{LinkifyError, LinkifyResult};

/// Run of URL characters, or a balanced `( ... )` group up to two levels deep
const URL_BODY: &str = r"(?:[^\s()<>]+|\((?:[^\s()<>]+|(?:\([^\s()<>]+\)))*\))*";

/// A balanced group, or any character that is not trailing punctuation
const URL_END: &str =
    r#"(?:\((?:[^\s()<>]+|(?:\([^\s()<>]+\)))*\)|[^\s`!\-()\[\]{};:'".,<>?«»“”‘’])"#;

/// Host prefixes accepted without a scheme, in priority order
const URL_HOSTS: &str = r"www\d{0,3}\.|www-|[a-z0-9.\-]+\.[a-z]{2,}";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i-u)\b[A-Z0-9._'%+-]+@(?P<domain>[A-Z0-9.-]+\.[A-Z]{2,4})")
        .expect("EMAIL_RE: hardcoded regex is valid")
});

static SCHEME_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A[A-Za-z][A-Za-z0-9+.\-]*\z").expect("SCHEME_NAME_RE: hardcoded regex is valid")
});

/// What a match is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Url,
    Email,
}

/// One matched span inside a text segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkMatch<'t> {
    pub kind: MatchKind,
    /// Byte offset into the searched text
    pub start: usize,
    pub end: usize,
    pub text: &'t str,
    /// URL scheme as written, when the URL carries one
    pub scheme: Option<&'t str>,
    /// E-mail domain
    pub domain: Option<&'t str>,
}

/// Finds link candidates within a byte range of a text.
///
/// Text before `range.start` is visible to the matcher as context (word
/// boundaries, the `=` guard) but no match starts before it. No match
/// extends past `range.end`.
pub trait LinkMatcher {
    fn find_in<'t>(&self, text: &'t str, range: Range<usize>) -> Vec<LinkMatch<'t>>;
}

/// URL matcher for a fixed set of schemes.
#[derive(Debug, Clone)]
pub struct UrlMatcher {
    regex: Regex,
    schemes: Vec<String>,
}

static DEFAULT_URL_MATCHER: LazyLock<UrlMatcher> = LazyLock::new(|| {
    let schemes = ["http", "https", "ftp"].map(String::from).to_vec();
    let regex = Regex::new(&url_pattern(&schemes)).expect("URL_RE: hardcoded regex is valid");
    UrlMatcher { regex, schemes }
});

impl UrlMatcher {
    /// Build a matcher for `schemes`.
    ///
    /// An empty scheme list still matches `www.` hosts and bare domains.
    ///
    /// # Errors
    ///
    /// Returns `LinkifyError::InvalidProtocol` for a scheme that is not a
    /// valid URI scheme name.
    pub fn new<S: AsRef<str>>(schemes: &[S]) -> LinkifyResult<Self> {
        let mut names = Vec::with_capacity(schemes.len());
        for scheme in schemes {
            let scheme = scheme.as_ref();
            if !SCHEME_NAME_RE.is_match(scheme) {
                return Err(LinkifyError::InvalidProtocol(scheme.to_string()));
            }
            names.push(scheme.to_ascii_lowercase());
        }

        if names == DEFAULT_URL_MATCHER.schemes {
            return Ok(DEFAULT_URL_MATCHER.clone());
        }

        let regex = Regex::new(&url_pattern(&names))?;
        Ok(Self {
            regex,
            schemes: names,
        })
    }

    #[must_use]
    pub fn schemes(&self) -> &[String] {
        &self.schemes
    }

    fn to_match<'t>(caps: &Captures<'t>) -> Option<LinkMatch<'t>> {
        let m = caps.get(0)?;
        Some(LinkMatch {
            kind: MatchKind::Url,
            start: m.start(),
            end: m.end(),
            text: m.as_str(),
            scheme: caps.name("scheme").map(|s| s.as_str()),
            domain: None,
        })
    }
}

impl LinkMatcher for UrlMatcher {
    fn find_in<'t>(&self, text: &'t str, range: Range<usize>) -> Vec<LinkMatch<'t>> {
        let haystack = &text[..range.end];
        self.regex
            .captures_iter(&haystack[range.start..])
            .filter_map(|caps| Self::to_match(&caps))
            .map(|m| shift(m, text, range.start))
            .collect()
    }
}

/// E-mail matcher.
///
/// An address directly preceded by `=` is skipped, so values inside query
/// strings (`?to=user@example.com`) are left for the URL matcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailMatcher;

impl LinkMatcher for EmailMatcher {
    fn find_in<'t>(&self, text: &'t str, range: Range<usize>) -> Vec<LinkMatch<'t>> {
        let haystack = &text[..range.end];
        let mut found = Vec::new();
        let mut pos = range.start;

        while let Some(caps) = EMAIL_RE.captures_at(haystack, pos) {
            let Some(m) = caps.get(0) else { break };
            if haystack[..m.start()].ends_with('=') {
                // Retry one character later, as a lookbehind would.
                pos = m.start() + haystack[m.start()..].chars().next().map_or(1, char::len_utf8);
                continue;
            }
            found.push(LinkMatch {
                kind: MatchKind::Email,
                start: m.start(),
                end: m.end(),
                text: m.as_str(),
                scheme: None,
                domain: caps.name("domain").map(|d| d.as_str()),
            });
            pos = m.end();
        }

        found
    }
}

/// Re-base a match found in `text[offset..]` onto `text`
fn shift<'t>(m: LinkMatch<'t>, text: &'t str, offset: usize) -> LinkMatch<'t> {
    LinkMatch {
        start: m.start + offset,
        end: m.end + offset,
        text: &text[m.start + offset..m.end + offset],
        ..m
    }
}

/// Build the URL pattern for `schemes`.
///
/// Alternatives are tried in order: scheme, `www` with up to three digits,
/// `www-`, then anything shaped like a domain name.
fn url_pattern(schemes: &[String]) -> String {
    let hosts = if schemes.is_empty() {
        URL_HOSTS.to_string()
    } else {
        let names: Vec<String> = schemes.iter().map(|s| regex::escape(s)).collect();
        format!(r"(?P<scheme>{}):(?://)?|{URL_HOSTS}", names.join("|"))
    };
    format!("(?i)(?:{hosts}){URL_BODY}{URL_END}")
}

/// Run `first` over the whole text, then `second` over the gaps it left.
///
/// An e-mail claim nested inside a longer `second` match that starts before
/// it is given up, so `http://user:pw@host.com/x` or `www.a.com/u@b.org`
/// stays one URL instead of being split around the address.
///
/// Returns matches sorted by start offset; no two overlap.
pub fn find_links<'t>(
    text: &'t str,
    first: Option<&dyn LinkMatcher>,
    second: Option<&dyn LinkMatcher>,
) -> Vec<LinkMatch<'t>> {
    let mut claimed = first.map_or_else(Vec::new, |m| m.find_in(text, 0..text.len()));
    let Some(second) = second else {
        return claimed;
    };

    if claimed.iter().any(|m| m.kind == MatchKind::Email) {
        let covering = second.find_in(text, 0..text.len());
        claimed.retain(|m| {
            m.kind != MatchKind::Email
                || !covering
                    .iter()
                    .any(|c| c.start < m.start && c.end >= m.end)
        });
    }

    let mut links = Vec::with_capacity(claimed.len());
    let mut gap_start = 0;
    for m in claimed {
        links.extend(second.find_in(text, gap_start..m.start));
        gap_start = m.end;
        links.push(m);
    }
    links.extend(second.find_in(text, gap_start..text.len()));
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(text: &str) -> Vec<&str> {
        let matcher = UrlMatcher::new(&["http", "https", "ftp"]).expect("valid schemes");
        matcher
            .find_in(text, 0..text.len())
            .into_iter()
            .map(|m| m.text)
            .collect()
    }

    fn emails(text: &str) -> Vec<&str> {
        EmailMatcher
            .find_in(text, 0..text.len())
            .into_iter()
            .map(|m| m.text)
            .collect()
    }

    #[test]
    fn scheme_urls() {
        assert_eq!(urls("see http://example.com now"), vec!["http://example.com"]);
        assert_eq!(urls("HTTPS://Example.com/a?b=c"), vec!["HTTPS://Example.com/a?b=c"]);
        assert_eq!(urls("ftp://files.example.org/x.tar"), vec!["ftp://files.example.org/x.tar"]);
    }

    #[test]
    fn scheme_is_captured() {
        let matcher = UrlMatcher::new(&["http", "https"]).expect("valid schemes");
        let found = matcher.find_in("go https://x.io", 0..15);
        assert_eq!(found[0].scheme, Some("https"));
        let found = matcher.find_in("go www.x.io", 0..11);
        assert_eq!(found[0].scheme, None);
    }

    #[test]
    fn www_and_bare_domains() {
        assert_eq!(urls("www.example.com"), vec!["www.example.com"]);
        assert_eq!(urls("www2.example.com"), vec!["www2.example.com"]);
        assert_eq!(urls("www-dev.example"), vec!["www-dev.example"]);
        assert_eq!(urls("visit example.com today"), vec!["example.com"]);
        assert!(urls("e.g. this").is_empty());
    }

    #[test]
    fn trailing_punctuation_is_left_out() {
        assert_eq!(urls("Go to http://example.com."), vec!["http://example.com"]);
        assert_eq!(urls("(see example.com/path)!"), vec!["example.com/path"]);
        assert_eq!(urls("\"http://example.com/\"?"), vec!["http://example.com/"]);
        assert_eq!(urls("«example.com»"), vec!["example.com"]);
        assert_eq!(urls("example.com/a-"), vec!["example.com/a"]);
    }

    #[test]
    fn balanced_parens_are_kept() {
        assert_eq!(
            urls("http://en.wikipedia.org/wiki/Rust_(programming_language)."),
            vec!["http://en.wikipedia.org/wiki/Rust_(programming_language)"]
        );
        assert_eq!(
            urls("http://x.com/a_(b_(c)) end"),
            vec!["http://x.com/a_(b_(c))"]
        );
    }

    #[test]
    fn markup_delimiters_end_a_url() {
        assert_eq!(urls("http://a.com<b>"), vec!["http://a.com"]);
    }

    #[test]
    fn unknown_scheme_is_not_a_scheme_match() {
        let matcher = UrlMatcher::new(&["http"]).expect("valid schemes");
        let found = matcher.find_in("ftp://files.example.org", 0..23);
        assert_eq!(found[0].scheme, None);
        assert_eq!(found[0].text, "files.example.org");
    }

    #[test]
    fn invalid_protocol_is_rejected() {
        assert!(matches!(
            UrlMatcher::new(&["ht tp"]),
            Err(LinkifyError::InvalidProtocol(p)) if p == "ht tp"
        ));
        assert!(matches!(UrlMatcher::new(&["1http"]), Err(LinkifyError::InvalidProtocol(_))));
    }

    #[test]
    fn custom_schemes_are_escaped() {
        let matcher = UrlMatcher::new(&["svn+ssh"]).expect("valid scheme");
        let found = matcher.find_in("svn+ssh://repo.example/x", 0..24);
        assert_eq!(found[0].text, "svn+ssh://repo.example/x");
        assert_eq!(found[0].scheme, Some("svn+ssh"));
    }

    #[test]
    fn email_addresses() {
        assert_eq!(emails("mail user@example.com now"), vec!["user@example.com"]);
        assert_eq!(emails("o'brien+tag@mail.example.co.uk"), vec!["o'brien+tag@mail.example.co.uk"]);
        assert!(emails("user@localhost").is_empty());
    }

    #[test]
    fn email_domain_is_captured() {
        let found = EmailMatcher.find_in("a@b.org", 0..7);
        assert_eq!(found[0].domain, Some("b.org"));
    }

    #[test]
    fn email_after_equals_is_skipped() {
        assert!(emails("?to=user@example.com").is_empty());
        // A lookbehind would still find the match starting after the dot.
        assert_eq!(emails("x=a.b@example.com"), vec![".b@example.com"]);
    }

    #[test]
    fn gap_search_never_overlaps() {
        let url = UrlMatcher::new(&["http"]).expect("valid schemes");
        let text = "write to user@example.com or see example.org";
        let links = find_links(text, Some(&EmailMatcher), Some(&url));
        let found: Vec<(MatchKind, &str)> = links.iter().map(|m| (m.kind, m.text)).collect();
        assert_eq!(
            found,
            vec![
                (MatchKind::Email, "user@example.com"),
                (MatchKind::Url, "example.org"),
            ]
        );
    }

    #[test]
    fn email_inside_earlier_url_is_given_up() {
        let url = UrlMatcher::new(&["http"]).expect("valid schemes");
        let text = "http://user:pw@host.com/x and me@host.com";
        let links = find_links(text, Some(&EmailMatcher), Some(&url));
        let found: Vec<(MatchKind, &str)> = links.iter().map(|m| (m.kind, m.text)).collect();
        assert_eq!(
            found,
            vec![
                (MatchKind::Url, "http://user:pw@host.com/x"),
                (MatchKind::Email, "me@host.com"),
            ]
        );
    }

    #[test]
    fn email_sharing_the_url_start_is_kept() {
        let url = UrlMatcher::new(&["http"]).expect("valid schemes");
        // The bare-domain pattern also matches from `first.`, but not earlier.
        let links = find_links("first.last@example.com", Some(&EmailMatcher), Some(&url));
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].kind, MatchKind::Email);
    }

    #[test]
    fn url_first_claims_the_domain() {
        let url = UrlMatcher::new(&["http"]).expect("valid schemes");
        let text = "user@example.com";
        let links = find_links(text, Some(&url), Some(&EmailMatcher));
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].kind, MatchKind::Url);
        assert_eq!(links[0].text, "example.com");
    }
}
