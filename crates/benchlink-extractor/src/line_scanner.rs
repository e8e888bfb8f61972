//! Line-based URL scanner
//!
//! Text renderings of PDFs break long URLs across lines, sometimes with a
//! hyphen inserted at the break. Each line is scanned on its own and also
//! joined with the next line. A URL found in the joined text that starts on
//! the current line wins over its truncated single-line form. The part of
//! the next line it absorbed is then skipped when that line gets its turn.
//! A next line that opens with a URL of its own is never joined.
//!
//! When the scheme itself was lost, a looser `domain.tld/path` pattern is
//! tried and `https://` is prepended to whatever it finds.

use crate::patterns::{has_url_indicator, is_accessible, trim_url, SCHEMELESS_RE, URL_RE};
use benchlink_domain::ContextMap;
use regex::Regex;
use tracing::debug;

/// Characters after which a URL commonly continues on the next line
const CONTINUATION_TAIL: &[char] = &['/', '_', '=', '?', '&', '#', '~', '%'];

/// Characters a continuation line commonly starts with
const CONTINUATION_HEAD: &[char] = &['/', '.', '?', '#', '&', '=', '_', '-'];

/// Characters that mark a slashed token as a path fragment
const PATH_MARKS: &[char] = &['.', '_', '~', '%', '=', '?'];

/// Scans a sequence of text lines for URLs
#[derive(Debug, Clone)]
pub struct LineScanner {
    context_radius: usize,
}

/// A line joined with its successor
#[derive(Debug)]
struct Pair {
    text: String,
    /// Bytes of `text` that come from the current line
    prefix_len: usize,
    /// Whitespace trimmed from the start of the next line
    next_lead: usize,
}

/// One pattern match after trailing punctuation was stripped
#[derive(Debug, Clone)]
struct Hit {
    url: String,
    start: usize,
    end: usize,
}

impl Pair {
    fn join(line: &str, next: &str) -> Option<Self> {
        let head = line.trim_end();
        let tail = next.trim_start();
        if head.is_empty() || tail.is_empty() || starts_new_url(tail) {
            return None;
        }

        let prefix = if ends_with_broken_word(head) {
            &head[..head.len() - 1]
        } else if continues(head, tail) {
            head
        } else {
            return None;
        };

        Some(Self {
            text: format!("{}{}", prefix, tail),
            prefix_len: prefix.len(),
            next_lead: next.len() - tail.len(),
        })
    }

    /// Bytes of the next line covered by a match ending at `end`
    fn consumed(&self, end: usize) -> usize {
        if end > self.prefix_len {
            end - self.prefix_len + self.next_lead
        } else {
            0
        }
    }
}

/// `word-` at the end of a line
fn ends_with_broken_word(head: &str) -> bool {
    head.strip_suffix('-')
        .and_then(|rest| rest.chars().last())
        .is_some_and(char::is_alphanumeric)
}

/// Whether a URL ending `head` plausibly continues into `tail`
fn continues(head: &str, tail: &str) -> bool {
    let Some(last_token) = head.split_whitespace().last() else {
        return false;
    };
    if !(last_token.contains("://") || last_token.to_lowercase().starts_with("www.")) {
        return false;
    }

    let Some(last) = head.chars().last() else {
        return false;
    };
    let first_token = tail.split_whitespace().next().unwrap_or("");

    if CONTINUATION_TAIL.contains(&last) {
        return true;
    }
    if last == '.' {
        return tail.starts_with(|c: char| c.is_ascii_lowercase() || c.is_ascii_digit());
    }
    first_token.starts_with(CONTINUATION_HEAD) || is_path_fragment(first_token)
}

/// Whether `tail` opens with a URL of its own
fn starts_new_url(tail: &str) -> bool {
    let lower = tail.to_ascii_lowercase();
    ["http://", "https://", "www."]
        .iter()
        .any(|scheme| lower.starts_with(scheme))
}

/// A token shaped like the rest of a path rather than a word such as `and/or`
///
/// It needs a `/` plus either a second `/` or a character prose rarely puts
/// next to one (`.`, `_`, `~`, `%`, `=`, `?`).
fn is_path_fragment(token: &str) -> bool {
    let token = trim_url(token);
    if !token.contains('/') {
        return false;
    }
    token.matches('/').count() >= 2 || token.contains(PATH_MARKS)
}

/// Matches of `re` in `text` that start in `from..before`, each prefixed
/// with `scheme`
fn hits(re: &Regex, text: &str, from: usize, before: usize, scheme: &str) -> Vec<Hit> {
    re.find_iter(text)
        .filter(|m| m.start() >= from && m.start() < before)
        .map(|m| {
            let url = trim_url(m.as_str());
            Hit {
                url: format!("{}{}", scheme, url),
                start: m.start(),
                end: m.start() + url.len(),
            }
        })
        .collect()
}

impl LineScanner {
    /// Create a scanner recording `context_radius` lines on each side
    pub fn new(context_radius: usize) -> Self {
        Self { context_radius }
    }

    /// Scan `lines` and map every accepted URL to its context windows
    ///
    /// Keys are raw (not normalized); one context entry per occurrence.
    pub fn scan<S: AsRef<str>>(&self, lines: &[S]) -> ContextMap {
        let mut found = ContextMap::new();
        let mut skip = 0;

        for (i, line) in lines.iter().enumerate() {
            let next = lines.get(i + 1).map(|l| l.as_ref());
            let (urls, consumed) = Self::scan_line(line.as_ref(), next, skip);
            skip = consumed;

            if urls.is_empty() {
                continue;
            }

            let context = self.context_window(lines, i);
            for url in urls {
                debug!("Line {}: {}", i + 1, url);
                found.insert(url, context.clone());
            }
        }

        found
    }

    /// URLs starting on `line` (at or after byte `skip`), plus how many
    /// bytes of `next` they absorbed
    fn scan_line(line: &str, next: Option<&str>, skip: usize) -> (Vec<String>, usize) {
        let pair = next.and_then(|n| Pair::join(line, n));

        let mut chosen = Self::candidates(&URL_RE, line, pair.as_ref(), skip, "");
        if chosen.is_empty() {
            chosen = Self::candidates(&SCHEMELESS_RE, line, pair.as_ref(), skip, "https://");
        }
        if chosen.is_empty() {
            return (Vec::new(), 0);
        }

        let searched = pair.as_ref().map_or(line, |p| p.text.as_str());
        if !has_url_indicator(searched) {
            return (Vec::new(), 0);
        }

        let mut urls = Vec::with_capacity(chosen.len());
        let mut consumed = 0;
        for hit in chosen {
            if !is_accessible(&hit.url) {
                debug!("Rejected inaccessible candidate: {}", hit.url);
                continue;
            }
            if let Some(p) = &pair {
                consumed = consumed.max(p.consumed(hit.end));
            }
            urls.push(hit.url);
        }

        (urls, consumed)
    }

    /// Matches of `re` for one line: from the joined text when the line
    /// continues, keeping no more than the line alone produced (at least one)
    ///
    /// A joined match that fails the accessibility check gives way to the
    /// line's own match at the same position.
    fn candidates(
        re: &Regex,
        line: &str,
        pair: Option<&Pair>,
        skip: usize,
        scheme: &str,
    ) -> Vec<Hit> {
        let own = hits(re, line, skip, line.len(), scheme);
        let Some(p) = pair else {
            return own;
        };

        let mut wrapped = hits(re, &p.text, skip, p.prefix_len, scheme);
        wrapped.truncate(own.len().max(1));
        wrapped
            .into_iter()
            .map(|hit| {
                if is_accessible(&hit.url) {
                    return hit;
                }
                own.iter()
                    .find(|o| o.start == hit.start)
                    .cloned()
                    .unwrap_or(hit)
            })
            .collect()
    }

    fn context_window<S: AsRef<str>>(&self, lines: &[S], i: usize) -> String {
        let start = i.saturating_sub(self.context_radius);
        let end = (i + self.context_radius + 1).min(lines.len());
        lines[start..end]
            .iter()
            .map(|l| l.as_ref())
            .collect::<Vec<&str>>()
            .join("\n")
    }
}

impl Default for LineScanner {
    fn default() -> Self {
        Self::new(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(lines: &[&str]) -> Vec<String> {
        LineScanner::default()
            .scan(lines)
            .urls()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_single_line_url() {
        assert_eq!(
            urls(&["Data is at https://zenodo.org/record/123."]),
            vec!["https://zenodo.org/record/123"]
        );
    }

    #[test]
    fn test_hyphen_wrap_is_repaired() {
        assert_eq!(
            urls(&["See https://a.com/x-", "y for details"]),
            vec!["https://a.com/xy"]
        );
    }

    #[test]
    fn test_slash_wrap_is_joined() {
        assert_eq!(
            urls(&[
                "Code: https://github.com/org/",
                "project/tree/main and more text"
            ]),
            vec!["https://github.com/org/project/tree/main"]
        );
    }

    #[test]
    fn test_dot_wrap_with_lowercase_continuation() {
        assert_eq!(
            urls(&[
                "available at https://www.cs.",
                "toronto.edu/~kriz/cifar.html)"
            ]),
            vec!["https://www.cs.toronto.edu/~kriz/cifar.html"]
        );
    }

    #[test]
    fn test_consumed_fragment_not_rescanned() {
        let found = urls(&["at https://github.com/", "lab/data.html for details"]);
        assert_eq!(found, vec!["https://github.com/lab/data.html"]);
    }

    #[test]
    fn test_url_per_line_not_joined() {
        assert_eq!(
            urls(&["https://a.org/data", "https://b.org/y"]),
            vec!["https://a.org/data", "https://b.org/y"]
        );
        assert_eq!(
            urls(&["[1] https://a.org/", "www.b.org/y"]),
            vec!["https://a.org/", "https://www.b.org/y"]
        );
    }

    #[test]
    fn test_reference_list_keeps_every_url() {
        let lines = [
            "https://zenodo.org/record/1",
            "https://kaggle.com/datasets/x",
            "https://huggingface.co/datasets/y",
        ];
        assert_eq!(urls(&lines), lines.to_vec());
    }

    #[test]
    fn test_slashed_word_not_joined() {
        assert_eq!(
            urls(&["Code at https://github.com/a/b", "and/or the data splits"]),
            vec!["https://github.com/a/b"]
        );
        assert_eq!(
            urls(&["see https://a.org/x", "w/o augmentation"]),
            vec!["https://a.org/x"]
        );
    }

    #[test]
    fn test_path_fragment_joined() {
        assert_eq!(
            urls(&["at https://github.com/org/pro", "ject/tree/main for the code"]),
            vec!["https://github.com/org/project/tree/main"]
        );
    }

    #[test]
    fn test_inaccessible_join_falls_back_to_own_match() {
        assert_eq!(
            urls(&["at https://a.org/x/", "data- more text"]),
            vec!["https://a.org/x/"]
        );
    }

    #[test]
    fn test_path_fragment_shapes() {
        assert!(is_path_fragment("ject/tree/main"));
        assert!(is_path_fragment("data/cifar.html)."));
        assert!(!is_path_fragment("and/or"));
        assert!(!is_path_fragment("1/2"));
        assert!(!is_path_fragment("plain"));
    }

    #[test]
    fn test_unrelated_next_line_not_joined() {
        assert_eq!(
            urls(&["https://a.org/data", "We then train"]),
            vec!["https://a.org/data"]
        );
    }

    #[test]
    fn test_multiple_urls_on_one_line() {
        assert_eq!(
            urls(&["https://a.org/x and https://b.org/y"]),
            vec!["https://a.org/x", "https://b.org/y"]
        );
    }

    #[test]
    fn test_schemeless_fallback() {
        assert_eq!(
            urls(&["download from www.image-net.org/download."]),
            vec!["https://www.image-net.org/download"]
        );
    }

    #[test]
    fn test_schemeless_without_indicator_discarded() {
        assert!(urls(&["see data/train.csv/ for the splits"]).is_empty());
    }

    #[test]
    fn test_glued_urls_rejected() {
        assert!(urls(&["https://a.org/xhttps://b.org/y"]).is_empty());
    }

    #[test]
    fn test_context_window_radius() {
        let lines = ["l0", "l1", "l2", "see https://a.org/x", "l4", "l5", "l6"];
        let found = LineScanner::new(2).scan(&lines);
        assert_eq!(
            found.get("https://a.org/x").unwrap(),
            &["l1\nl2\nsee https://a.org/x\nl4\nl5".to_string()]
        );
    }

    #[test]
    fn test_context_window_clipped_at_edges() {
        let lines = ["https://a.org/x", "after"];
        let found = LineScanner::new(2).scan(&lines);
        assert_eq!(
            found.get("https://a.org/x").unwrap(),
            &["https://a.org/x\nafter".to_string()]
        );
    }

    #[test]
    fn test_repeated_url_keeps_every_context() {
        let lines = ["https://a.org/x", "", "", "", "", "", "https://a.org/x again"];
        let found = LineScanner::new(0).scan(&lines);
        assert_eq!(found.get("https://a.org/x").unwrap().len(), 2);
    }

    #[test]
    fn test_empty_input() {
        let lines: [&str; 0] = [];
        assert!(LineScanner::default().scan(&lines).is_empty());
    }
}
