//! URL patterns and syntactic checks shared by both scanners

use regex::Regex;
use std::sync::LazyLock;

/// Primary URL pattern: scheme, optional `www.`, host with a TLD, optional path
pub(crate) static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"https?://(?:www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b(?:[-a-zA-Z0-9()@:%_+.~#?&/=]*)",
    )
    .unwrap()
});

/// Looser pattern for URLs whose scheme was lost in conversion: `domain.tld/path`
pub(crate) static SCHEMELESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:www\.)?[a-zA-Z0-9][-a-zA-Z0-9._]{0,255}\.[a-zA-Z]{2,6}/[-a-zA-Z0-9()@:%_+.~#?&/=]*")
        .unwrap()
});

static SCHEME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://").unwrap());

static SHAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").unwrap());

/// Substrings whose presence suggests a URL is (partly) on a line
const URL_INDICATORS: &[&str] = &[
    "http", "www.", ".com", ".org", ".net", ".edu", ".io", ".ai", ".gov", ".ac.", "github",
];

/// Whether `href` starts with something the primary pattern accepts
pub fn is_url(href: &str) -> bool {
    URL_RE.find(href).is_some_and(|m| m.start() == 0)
}

/// Syntactic accessibility check
///
/// Rejects URLs ending in a hyphen (an unrepaired line wrap), URLs holding
/// more than one scheme marker (two URLs glued together by the converter),
/// and anything that is not `scheme://host...` shaped.
pub fn is_accessible(url: &str) -> bool {
    let url = url.trim();

    if url.ends_with('-') {
        return false;
    }

    if SCHEME_RE.find_iter(url).count() > 1 {
        return false;
    }

    SHAPE_RE.is_match(url)
}

/// Strip trailing punctuation, dots, quotes and unbalanced closing brackets
pub fn trim_url(raw: &str) -> &str {
    let mut s = raw.trim();
    while let Some(last) = s.chars().last() {
        let strip = match last {
            '.' | ',' | ';' | ':' | '!' | '?' | '\'' | '"' => true,
            ')' => s.matches('(').count() < s.matches(')').count(),
            ']' => s.matches('[').count() < s.matches(']').count(),
            '}' => s.matches('{').count() < s.matches('}').count(),
            _ => false,
        };
        if !strip {
            break;
        }
        s = &s[..s.len() - last.len_utf8()];
    }
    s
}

/// Whether `text` contains any URL-indicating substring
pub(crate) fn has_url_indicator(text: &str) -> bool {
    let lower = text.to_lowercase();
    URL_INDICATORS.iter().any(|ind| lower.contains(ind))
}
