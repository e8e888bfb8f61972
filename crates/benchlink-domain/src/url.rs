//! URL candidates and their canonical form
//!
//! Two occurrences of the same resource may differ only by a trailing path
//! separator (`https://host/data/` vs `https://host/data`). Both collapse to
//! one key once normalized.

use std::fmt;

/// Canonicalize a URL string for comparison.
///
/// Trims surrounding whitespace and strips every trailing `/`.
/// Normalization is idempotent: `normalize_url(&normalize_url(u)) == normalize_url(u)`.
///
/// # Examples
///
/// ```
/// use benchlink_domain::normalize_url;
///
/// assert_eq!(normalize_url("https://zenodo.org/record/1/"), "https://zenodo.org/record/1");
/// assert_eq!(normalize_url("  https://a.com/x  "), "https://a.com/x");
/// ```
pub fn normalize_url(url: &str) -> String {
    url.trim()
        .trim_end_matches(|c: char| c == '/' || c.is_whitespace())
        .to_string()
}

/// A normalized absolute URL
///
/// Construction always normalizes, so equality and hashing are syntactic
/// over the canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UrlCandidate(String);

impl UrlCandidate {
    /// Create a candidate from any URL string, normalizing it
    pub fn new(url: impl AsRef<str>) -> Self {
        Self(normalize_url(url.as_ref()))
    }

    /// Borrow the normalized URL
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the candidate, returning the normalized URL
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for UrlCandidate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UrlCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UrlCandidate {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

impl From<String> for UrlCandidate {
    fn from(url: String) -> Self {
        Self::new(url)
    }
}
